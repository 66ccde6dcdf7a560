use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::StoreError;

/// Persistence for the single best vs-AI score
pub trait HighScoreStore {
    /// Stored score; a store that has never been written holds 0
    fn load(&self) -> Result<u32, StoreError>;

    /// Replace the stored score
    fn save(&mut self, score: u32) -> Result<(), StoreError>;
}

/// High score kept as one integer in a text file
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HighScoreStore for FileStore {
    fn load(&self) -> Result<u32, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(0),
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        content.trim().parse().map_err(|_| StoreError::Parse {
            path: self.path.clone(),
            content,
        })
    }

    fn save(&mut self, score: u32) -> Result<(), StoreError> {
        fs::write(&self.path, score.to_string()).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

/// In-process store; nothing survives the process
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    score: u32,
}

impl MemoryStore {
    pub fn new(score: u32) -> Self {
        Self { score }
    }
}

impl HighScoreStore for MemoryStore {
    fn load(&self) -> Result<u32, StoreError> {
        Ok(self.score)
    }

    fn save(&mut self, score: u32) -> Result<(), StoreError> {
        self.score = score;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_store() -> (FileStore, TempDir) {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("highscore.txt"));
        (store, dir)
    }

    #[test]
    fn missing_file_loads_zero() {
        let (store, _dir) = test_store();
        assert_eq!(store.load().unwrap(), 0);
    }

    #[test]
    fn save_overwrites_and_load_reads_back() {
        let (mut store, _dir) = test_store();
        store.save(12).unwrap();
        store.save(7).unwrap();

        assert_eq!(store.load().unwrap(), 7);
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "7");
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let (store, _dir) = test_store();
        fs::write(store.path(), "  42\n").unwrap();
        assert_eq!(store.load().unwrap(), 42);
    }

    #[test]
    fn garbage_is_a_parse_error() {
        let (store, _dir) = test_store();
        fs::write(store.path(), "-3").unwrap();

        let err = store.load().unwrap_err();
        assert!(matches!(err, StoreError::Parse { .. }), "got {err:?}");
        assert!(err.to_string().contains("non-negative integer"));
    }

    #[test]
    fn unwritable_path_is_an_io_error() {
        let dir = TempDir::new().unwrap();
        // A directory cannot be overwritten as a file
        let mut store = FileStore::new(dir.path());

        let err = store.save(3).unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }), "got {err:?}");
    }

    #[test]
    fn memory_store_keeps_last_save() {
        let mut store = MemoryStore::new(5);
        assert_eq!(store.load().unwrap(), 5);
        store.save(9).unwrap();
        assert_eq!(store.load().unwrap(), 9);
    }
}
