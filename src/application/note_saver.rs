// src/application/note_saver.rs
use std::path::PathBuf;

use crate::domain::{DomainError, Note};

pub trait NoteRepository {
    /// Persist a note, overwriting any existing note with the same title.
    /// Returns the path the note was written to.
    fn save_note(&mut self, title: &str, body: &str) -> Result<PathBuf, DomainError>;

    /// Enumerate all stored notes in load order. An absent store yields an
    /// empty collection, not an error.
    fn list_notes(&mut self) -> Result<Vec<Note>, DomainError>;
}

pub struct NoteSaver<R: NoteRepository> {
    repository: R,
}

impl<R: NoteRepository> NoteSaver<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Validate and persist a note.
    ///
    /// Title and body must be non-empty after trimming; otherwise the save
    /// fails fast with a validation error and no storage access happens.
    /// The values are written as given, untrimmed.
    pub fn save(&mut self, title: &str, body: &str) -> Result<PathBuf, DomainError> {
        if title.trim().is_empty() || body.trim().is_empty() {
            return Err(DomainError::Validation(
                "Both Title and Note are required.".to_string(),
            ));
        }
        self.repository.save_note(title, body)
    }
}
