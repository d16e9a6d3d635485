//! Local store for puzzle inputs
//!
//! Inputs are plain files named `{year}_day{day:02}.txt` under one
//! directory; nothing is fetched from anywhere.

use crate::error::InputError;
use std::fs;
use std::path::PathBuf;

pub struct InputStore {
    dir: PathBuf,
}

impl InputStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn path(&self, year: u16, day: u8) -> PathBuf {
        self.dir.join(format!("{}_day{:02}.txt", year, day))
    }

    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.path(year, day).exists()
    }

    /// Input text, or `None` when the file does not exist.
    pub fn get(&self, year: u16, day: u8) -> Result<Option<String>, InputError> {
        let path = self.path(year, day);
        if !path.exists() {
            return Ok(None);
        }
        fs::read_to_string(&path)
            .map(Some)
            .map_err(|source| InputError::Read { path, source })
    }

    /// Create an empty input file; `false` when it already exists.
    pub fn create_empty(&self, year: u16, day: u8) -> Result<bool, InputError> {
        let path = self.path(year, day);
        if path.exists() {
            return Ok(false);
        }
        fs::create_dir_all(&self.dir).map_err(|source| InputError::Create {
            path: self.dir.clone(),
            source,
        })?;
        fs::write(&path, "").map_err(|source| InputError::Create { path: path.clone(), source })?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn path_format() {
        let store = InputStore::new(PathBuf::from("inputs"));
        assert!(
            store
                .path(2025, 3)
                .to_string_lossy()
                .ends_with("2025_day03.txt")
        );
        assert!(
            store
                .path(2025, 25)
                .to_string_lossy()
                .ends_with("2025_day25.txt")
        );
    }

    #[test]
    fn missing_input_is_none() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf());
        assert!(!store.contains(2025, 1));
        assert_eq!(store.get(2025, 1).unwrap(), None);
    }

    #[test]
    fn create_empty_then_read() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().join("inputs"));

        assert!(store.create_empty(2025, 1).unwrap());
        assert!(store.contains(2025, 1));
        assert_eq!(store.get(2025, 1).unwrap(), Some(String::new()));

        // A second scaffold run must not truncate anything.
        std::fs::write(store.path(2025, 1), "data\n").unwrap();
        assert!(!store.create_empty(2025, 1).unwrap());
        assert_eq!(store.get(2025, 1).unwrap(), Some("data\n".to_string()));
    }
}
