// src/application/note_lister.rs
use crate::application::NoteRepository;
use crate::domain::{DomainError, Note};

pub struct NoteLister<R: NoteRepository> {
    repository: R,
}

impl<R: NoteRepository> NoteLister<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// List all notes, or filter by search term
    ///
    /// # Arguments
    /// * `search` - Optional term matched case-insensitively against titles
    ///
    /// # Returns
    /// Notes matching the criteria, in load order. An empty term matches all.
    pub fn list_notes(&mut self, search: Option<&str>) -> Result<Vec<Note>, DomainError> {
        let notes = self.repository.list_notes()?;
        Ok(match search {
            None => notes,
            Some(term) if term.is_empty() => notes,
            Some(term) => {
                let needle = term.to_lowercase();
                notes
                    .into_iter()
                    .filter(|n| n.title.to_lowercase().contains(&needle))
                    .collect()
            }
        })
    }

    /// Look up a note by exact title, as when one is selected from the list.
    pub fn find_by_title(&mut self, title: &str) -> Result<Option<Note>, DomainError> {
        Ok(self
            .repository
            .list_notes()?
            .into_iter()
            .find(|n| n.title == title))
    }
}
