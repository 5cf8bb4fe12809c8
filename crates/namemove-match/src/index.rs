//! Folder index: canonical key to the directories sharing that key.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use namemove_model::{CanonicalKey, FolderEntry};

use crate::normalize::key_variants;

/// Reverse lookup from canonical key to the folders whose leaf name produced
/// that key. Built once per run, read-only afterwards.
///
/// Two directories sharing a leaf name across different roots accumulate
/// under the same keys; deduplication by entry identity is the resolver's
/// job, not the index's.
#[derive(Debug, Default)]
pub struct FolderIndex {
    by_key: BTreeMap<CanonicalKey, Vec<FolderEntry>>,
}

impl FolderIndex {
    pub fn lookup(&self, key: &CanonicalKey) -> &[FolderEntry] {
        self.by_key.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }

    pub fn key_count(&self) -> usize {
        self.by_key.len()
    }

    pub(crate) fn register(&mut self, entry: &FolderEntry) {
        for key in key_variants(&entry.name) {
            self.by_key.entry(key).or_default().push(entry.clone());
        }
    }
}

/// Outcome of scanning the source roots.
#[derive(Debug, Default)]
pub struct ScanReport {
    pub index: FolderIndex,
    /// Directories registered, independent of how many keys each produced.
    pub folders_scanned: usize,
    /// Roots that were missing or unreadable and had to be skipped.
    pub skipped_roots: Vec<PathBuf>,
}

/// Scan each root one directory level deep and index every child directory
/// under every canonical key of its leaf name.
///
/// A missing or unreadable root is skipped with a warning; the remaining
/// roots still proceed. Entries are indexed in sorted path order so the
/// index is identical from run to run.
pub fn scan_source_roots(roots: &[PathBuf]) -> ScanReport {
    let mut report = ScanReport::default();
    let mut entries: Vec<FolderEntry> = Vec::new();

    for root in roots {
        match collect_child_dirs(root) {
            Ok(children) => {
                debug!(root = %root.display(), folders = children.len(), "scanned source root");
                entries.extend(children);
            }
            Err(error) => {
                warn!(root = %root.display(), %error, "skipping unreadable source root");
                report.skipped_roots.push(root.clone());
            }
        }
    }

    entries.sort();
    report.folders_scanned = entries.len();
    for entry in &entries {
        report.index.register(entry);
    }
    report
}

fn collect_child_dirs(root: &Path) -> std::io::Result<Vec<FolderEntry>> {
    let mut children = Vec::new();
    for entry in std::fs::read_dir(root)? {
        let entry = entry?;
        // file_type() does not follow symlinks, so a symlinked directory is
        // not treated as a child folder.
        if !entry.file_type()?.is_dir() {
            continue;
        }
        children.push(FolderEntry {
            name: entry.file_name().to_string_lossy().into_owned(),
            path: entry.path(),
            source_root: root.to_path_buf(),
        });
    }
    Ok(children)
}
