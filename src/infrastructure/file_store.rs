// src/infrastructure/file_store.rs
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use crate::application::NoteRepository;
use crate::constants::NOTE_FILE_EXTENSION;
use crate::domain::{DomainError, Note};

/// Flat-file note storage: one `<title>.txt` per note inside one directory.
pub struct FileNoteRepository {
    notes_dir: PathBuf,
}

impl FileNoteRepository {
    /// Create a repository rooted at `notes_dir`. No file-system access
    /// happens until the first operation; the directory is created lazily.
    pub fn new<P: AsRef<Path>>(notes_dir: P) -> Self {
        let notes_dir = notes_dir.as_ref().to_path_buf();
        debug!(?notes_dir, "Creating FileNoteRepository");
        Self { notes_dir }
    }

    /// Create the notes directory if absent, including intermediate segments.
    /// Idempotent.
    fn ensure_dir(&self) -> Result<(), DomainError> {
        fs::create_dir_all(&self.notes_dir).map_err(|e| {
            DomainError::Persistence(format!(
                "Failed to create notes directory {}: {e}",
                self.notes_dir.display()
            ))
        })
    }

    fn note_path(&self, title: &str) -> PathBuf {
        // The title is used verbatim as the file name stem. Titles containing
        // path separators or characters invalid in file names will misbehave.
        self.notes_dir.join(format!("{title}.{NOTE_FILE_EXTENSION}"))
    }
}

impl NoteRepository for FileNoteRepository {
    #[instrument(level = "debug", skip(self, body))]
    fn save_note(&mut self, title: &str, body: &str) -> Result<PathBuf, DomainError> {
        self.ensure_dir()?;

        let path = self.note_path(title);
        fs::write(&path, Note::storage_form(title, body)).map_err(|e| {
            DomainError::Persistence(format!("Failed to write note {}: {e}", path.display()))
        })?;

        info!(path = %path.display(), "Saved note");
        Ok(path)
    }

    #[instrument(level = "debug", skip(self))]
    fn list_notes(&mut self) -> Result<Vec<Note>, DomainError> {
        if !self.notes_dir.exists() {
            debug!(notes_dir = %self.notes_dir.display(), "Notes directory absent, nothing to list");
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(&self.notes_dir).map_err(|e| {
            DomainError::Persistence(format!(
                "Failed to read notes directory {}: {e}",
                self.notes_dir.display()
            ))
        })?;

        // One unreadable or malformed entry must not abort the whole listing.
        let mut notes = Vec::new();
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(error) => {
                    warn!(%error, "Skipping unreadable directory entry");
                    continue;
                }
            };
            let path = entry.path();

            let content = match fs::read_to_string(&path) {
                Ok(content) => content,
                Err(error) => {
                    warn!(path = %path.display(), %error, "Skipping unreadable note file");
                    continue;
                }
            };

            match Note::from_file(&path, &content) {
                Ok(note) => notes.push(note),
                Err(error) => warn!(%error, "Skipping malformed note file"),
            }
        }

        debug!(count = notes.len(), "Listed notes");
        Ok(notes)
    }
}
