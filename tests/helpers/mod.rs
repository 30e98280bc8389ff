use anyhow::{Context, Result};
use jotter::infrastructure::FileNoteRepository;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test fixture providing a temporary notes directory
#[allow(dead_code)]
pub struct TestStore {
    _temp_dir: TempDir,
    pub notes_dir: PathBuf,
}

#[allow(dead_code)]
impl TestStore {
    /// Create a fixture whose notes directory does not exist yet, so tests
    /// exercise the lazy directory bootstrap.
    pub fn new() -> Result<Self> {
        let temp_dir = tempfile::tempdir().context("Failed to create temporary directory")?;
        let notes_dir = temp_dir.path().join("noteApp");

        Ok(Self {
            _temp_dir: temp_dir,
            notes_dir,
        })
    }

    /// Open a repository rooted at this fixture's notes directory
    pub fn open_repository(&self) -> FileNoteRepository {
        FileNoteRepository::new(&self.notes_dir)
    }

    /// Write a raw file into the notes directory, bypassing the repository
    pub fn write_raw(&self, file_name: &str, content: &str) -> Result<()> {
        std::fs::create_dir_all(&self.notes_dir)
            .context("Failed to create notes directory for fixture")?;
        std::fs::write(self.notes_dir.join(file_name), content)
            .context("Failed to write fixture file")
    }
}
