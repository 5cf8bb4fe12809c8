use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::key::CanonicalKey;

/// A directory discovered one level below a source root.
///
/// The engine holds a reference into the filesystem and never mutates it;
/// relocation is the mover's job.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct FolderEntry {
    /// Leaf directory name.
    pub name: String,
    /// Full location of the directory.
    pub path: PathBuf,
    /// The source root the directory was found under.
    pub source_root: PathBuf,
}

/// One physical folder selected by the resolver, with the union of all
/// canonical keys (across every matching record) that led to it.
///
/// A folder appears at most once across all match results in a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedFolder {
    pub entry: FolderEntry,
    pub keys: BTreeSet<CanonicalKey>,
}

impl MatchedFolder {
    /// Sorted keys joined for the audit log, e.g. `"jane smith / smith"`.
    pub fn joined_keys(&self) -> String {
        let keys: Vec<&str> = self.keys.iter().map(CanonicalKey::as_str).collect();
        keys.join(" / ")
    }
}
