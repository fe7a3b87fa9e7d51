use crate::study::StudyData;
use anyhow::{Context, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// File-based persistence of study progress in TOML format
pub struct Storage {
    file_path: PathBuf,
}

impl Storage {
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Load study data, falling back to defaults
    ///
    /// A missing, empty, unreadable or non-TOML file yields default data.
    /// Individual malformed keys fall back to their own defaults.
    pub fn load(&self) -> StudyData {
        let content = match fs::read_to_string(&self.file_path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.file_path.display(), "No progress file yet, starting fresh");
                return StudyData::new();
            }
            Err(e) => {
                warn!(path = %self.file_path.display(), error = %e, "Failed to read progress file, using defaults");
                return StudyData::new();
            }
        };

        match toml::from_str(&content) {
            Ok(data) => data,
            Err(e) => {
                warn!(path = %self.file_path.display(), error = %e, "Failed to parse progress file, using defaults");
                StudyData::new()
            }
        }
    }

    /// Write the whole document; the last write wins
    pub fn save(&self, data: &StudyData) -> Result<()> {
        let content = toml::to_string_pretty(data).context("Failed to serialize progress")?;
        if let Some(parent) = self.file_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(&self.file_path, content)
            .with_context(|| format!("Failed to write {}", self.file_path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Level;
    use chrono::NaiveDate;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let storage = Storage::new(temp_dir.path().join("progress.toml"));
        assert_eq!(storage.load(), StudyData::new());
    }

    #[test]
    fn test_empty_file_gives_defaults() {
        let temp_file = NamedTempFile::new().unwrap();
        let storage = Storage::new(temp_file.path());
        assert_eq!(storage.load(), StudyData::new());
    }

    #[test]
    fn test_corrupt_file_gives_defaults() {
        let temp_file = NamedTempFile::new().unwrap();
        fs::write(temp_file.path(), "this is = = not toml [").unwrap();
        let storage = Storage::new(temp_file.path());
        assert_eq!(storage.load(), StudyData::new());
    }

    #[test]
    fn test_save_and_load() {
        let temp_file = NamedTempFile::new().unwrap();
        let storage = Storage::new(temp_file.path());

        let mut data = StudyData::new();
        data.plan.selected_level = Level::B2;
        data.plan.last_planned_date = NaiveDate::from_ymd_opt(2025, 2, 3);
        data.plan.todays_word_ids = vec!["b2-herausforderung".to_string()];
        storage.save(&data).unwrap();

        let loaded = Storage::new(temp_file.path()).load();
        assert_eq!(loaded, data);
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("progress.toml");
        let storage = Storage::new(&path);
        storage.save(&StudyData::new()).unwrap();
        assert!(path.exists());
    }
}
