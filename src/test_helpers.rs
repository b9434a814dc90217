/// Shared test utilities for repository-backed tests.
use std::fs;
use std::path::{Path, PathBuf};

use git2::{Repository, Signature};
use tempfile::TempDir;

/// A scratch git repository that is deleted when dropped.
pub struct TestRepo {
    pub repo: Repository,
    _dir: TempDir,
}

impl TestRepo {
    /// Create a new empty repository in a temporary directory.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let repo = Repository::init(dir.path()).unwrap();
        TestRepo { repo, _dir: dir }
    }

    /// Get the signature used for commits.
    fn sig() -> Signature<'static> {
        Signature::now("Test", "test@test.com").unwrap()
    }

    /// Create a commit that writes `message` into `filename`.
    ///
    /// Returns the full hash of the new commit as a hex string, the form the
    /// history reader hands back.
    pub fn commit(&self, message: &str, filename: &str) -> String {
        let path = self.workdir().join(filename);
        fs::write(&path, message).unwrap();

        let mut index = self.repo.index().unwrap();
        index.add_path(Path::new(filename)).unwrap();
        index.write().unwrap();

        let tree_id = index.write_tree().unwrap();
        let tree = self.repo.find_tree(tree_id).unwrap();
        let sig = Self::sig();

        let oid = if let Ok(head) = self.repo.head() {
            let parent = self.repo.find_commit(head.target().unwrap()).unwrap();
            self.repo
                .commit(Some("HEAD"), &sig, &sig, message, &tree, &[&parent])
                .unwrap()
        } else {
            self.repo
                .commit(Some("HEAD"), &sig, &sig, message, &tree, &[])
                .unwrap()
        };

        oid.to_string()
    }

    /// Get the path to the working directory.
    pub fn workdir(&self) -> PathBuf {
        self.repo.workdir().unwrap().to_path_buf()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commit_advances_head() {
        let repo = TestRepo::new();
        let first = repo.commit("First", "a.txt");
        let second = repo.commit("Second", "a.txt");

        assert_ne!(first, second);
        let head = repo.repo.head().unwrap().target().unwrap().to_string();
        assert_eq!(head, second);
    }

    #[test]
    fn commit_writes_the_file() {
        let repo = TestRepo::new();
        repo.commit("hello", "test.txt");
        let content = fs::read_to_string(repo.workdir().join("test.txt")).unwrap();
        assert_eq!(content, "hello");
    }
}
