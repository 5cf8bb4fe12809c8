//! Record-to-folder resolution.

use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

use namemove_model::{CanonicalKey, MatchedFolder, NameRecord};

use crate::candidates::name_candidates;
use crate::index::FolderIndex;
use crate::normalize::key_variants;

/// The resolver's output: the authoritative per-folder view plus the
/// per-record match flags.
#[derive(Debug, Default)]
pub struct MatchOutcome {
    /// Every folder referenced by at least one record, each exactly once,
    /// in case-insensitive lexicographic order of its full path.
    pub folders: Vec<MatchedFolder>,
    /// One flag per input record, true iff any of its keys hit any folder.
    pub record_matched: Vec<bool>,
}

/// The full canonical key set of one record: every candidate name, run
/// through the normalizer, unioned.
pub fn record_key_set(record: &NameRecord) -> BTreeSet<CanonicalKey> {
    let mut keys = BTreeSet::new();
    for candidate in name_candidates(record) {
        keys.extend(key_variants(&candidate));
    }
    keys
}

/// Resolve every record against the index.
///
/// A folder referenced by several records, or by several keys of one
/// record, appears once in the output carrying the union of all keys that
/// led to it. Absent keys simply yield no entries; a record whose key set
/// is empty is flagged unmatched.
pub fn resolve_matches(records: &[NameRecord], index: &FolderIndex) -> MatchOutcome {
    let mut by_path: BTreeMap<PathBuf, MatchedFolder> = BTreeMap::new();
    let mut record_matched = Vec::with_capacity(records.len());

    for record in records {
        let mut matched_this_record = false;
        for key in record_key_set(record) {
            for entry in index.lookup(&key) {
                matched_this_record = true;
                by_path
                    .entry(entry.path.clone())
                    .or_insert_with(|| MatchedFolder {
                        entry: entry.clone(),
                        keys: BTreeSet::new(),
                    })
                    .keys
                    .insert(key.clone());
            }
        }
        record_matched.push(matched_this_record);
    }

    let mut folders: Vec<MatchedFolder> = by_path.into_values().collect();
    // Case-insensitive path order keeps reports diffable and pins the
    // destination-collision processing order.
    folders.sort_by(|a, b| {
        let left = a.entry.path.to_string_lossy().to_lowercase();
        let right = b.entry.path.to_string_lossy().to_lowercase();
        left.cmp(&right).then_with(|| a.entry.path.cmp(&b.entry.path))
    });

    MatchOutcome {
        folders,
        record_matched,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use namemove_model::FolderEntry;

    fn entry(name: &str) -> FolderEntry {
        FolderEntry {
            name: name.to_string(),
            path: PathBuf::from(format!("/src/{name}")),
            source_root: PathBuf::from("/src"),
        }
    }

    fn index_of(names: &[&str]) -> FolderIndex {
        let mut index = FolderIndex::default();
        for name in names {
            index.register(&entry(name));
        }
        index
    }

    #[test]
    fn record_key_set_unions_all_candidate_variants() {
        let keys = record_key_set(&NameRecord::new("Pérez", "José", ""));
        assert!(keys.contains(&CanonicalKey::new("jose perez")));
        assert!(keys.contains(&CanonicalKey::new("pérez, josé")));
        assert!(keys.contains(&CanonicalKey::new("perez")));
    }

    #[test]
    fn blank_record_is_unmatched() {
        let index = index_of(&["Smith"]);
        let outcome = resolve_matches(&[NameRecord::default()], &index);
        assert_eq!(outcome.record_matched, vec![false]);
        assert!(outcome.folders.is_empty());
    }

    #[test]
    fn folder_hit_by_many_records_appears_once_with_key_union() {
        let index = index_of(&["Jane Smith"]);
        let records = vec![
            NameRecord::new("Smith", "Jane", ""),
            NameRecord::new("Jane Smith", "", ""),
        ];
        let outcome = resolve_matches(&records, &index);
        assert_eq!(outcome.record_matched, vec![true, true]);
        assert_eq!(outcome.folders.len(), 1);
        let keys = &outcome.folders[0].keys;
        assert!(keys.contains(&CanonicalKey::new("jane smith")));
    }

    #[test]
    fn output_is_ordered_by_case_insensitive_path() {
        let index = index_of(&["beta", "Alpha", "Smith"]);
        let records = vec![
            NameRecord::new("Smith", "", ""),
            NameRecord::new("beta", "", ""),
            NameRecord::new("Alpha", "", ""),
        ];
        let outcome = resolve_matches(&records, &index);
        let names: Vec<&str> = outcome
            .folders
            .iter()
            .map(|f| f.entry.name.as_str())
            .collect();
        assert_eq!(names, vec!["Alpha", "beta", "Smith"]);
    }

    #[test]
    fn all_matching_folders_are_kept_not_just_one() {
        // Two distinct folders both reachable from a single record.
        let index = index_of(&["Jane Smith", "Smith, Jane"]);
        let outcome = resolve_matches(&[NameRecord::new("Smith", "Jane", "")], &index);
        assert_eq!(outcome.folders.len(), 2);
    }
}
