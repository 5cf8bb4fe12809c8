//! Destination name planning.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Assigns collision-free destination paths, one matched folder at a time,
/// in the resolver's deterministic order.
///
/// "Exists" covers both real filesystem entries and names already claimed
/// earlier in the same run. The claimed set is what keeps simulate mode
/// honest: no entry is ever created on disk there, yet two source folders
/// must still never be assigned the same destination name.
#[derive(Debug)]
pub struct DestinationPlanner {
    root: PathBuf,
    claimed: BTreeSet<String>,
}

impl DestinationPlanner {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            claimed: BTreeSet::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The final destination for `desired_name`: the name unchanged when
    /// free, otherwise the first of `name_1`, `name_2`, ... that is.
    pub fn resolve(&mut self, desired_name: &str) -> PathBuf {
        let final_name = if self.is_taken(desired_name) {
            let mut counter = 1usize;
            loop {
                let candidate = format!("{desired_name}_{counter}");
                if !self.is_taken(&candidate) {
                    break candidate;
                }
                counter += 1;
            }
        } else {
            desired_name.to_string()
        };
        self.claimed.insert(final_name.clone());
        self.root.join(final_name)
    }

    fn is_taken(&self, name: &str) -> bool {
        self.claimed.contains(name) || self.root.join(name).exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn free_name_is_used_unchanged() {
        let root = TempDir::new().unwrap();
        let mut planner = DestinationPlanner::new(root.path());
        assert_eq!(planner.resolve("Smith"), root.path().join("Smith"));
    }

    #[test]
    fn claimed_names_collide_without_touching_the_filesystem() {
        let root = TempDir::new().unwrap();
        let mut planner = DestinationPlanner::new(root.path());
        assert_eq!(planner.resolve("Smith"), root.path().join("Smith"));
        assert_eq!(planner.resolve("Smith"), root.path().join("Smith_1"));
        assert_eq!(planner.resolve("Smith"), root.path().join("Smith_2"));
        // Nothing was created.
        assert!(fs::read_dir(root.path()).unwrap().next().is_none());
    }

    #[test]
    fn existing_entries_count_as_taken() {
        let root = TempDir::new().unwrap();
        fs::create_dir(root.path().join("Smith")).unwrap();
        fs::create_dir(root.path().join("Smith_1")).unwrap();
        let mut planner = DestinationPlanner::new(root.path());
        assert_eq!(planner.resolve("Smith"), root.path().join("Smith_2"));
    }
}
