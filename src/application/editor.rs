// src/application/editor.rs
use std::path::PathBuf;

use tracing::warn;

use crate::application::{NoteRepository, NoteSaver};
use crate::domain::{DomainError, NoteParam};

/// In-progress editor input. Starts blank for a new note, or pre-filled from
/// a transit payload when an existing note is opened for editing.
#[derive(Debug, Clone, Default)]
pub struct NoteDraft {
    pub title: String,
    pub body: String,
}

impl NoteDraft {
    /// Build a draft from an optional transit payload.
    ///
    /// A missing payload means "new note". A payload that fails to decode is
    /// logged and treated the same way, never propagated as an error.
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            None => Self::default(),
            Some(raw) => match NoteParam::decode(raw) {
                Ok(param) => Self {
                    title: param.title,
                    body: param.note,
                },
                Err(error) => {
                    warn!(%error, "Failed to decode note payload, starting a blank draft");
                    Self::default()
                }
            },
        }
    }
}

pub struct NoteEditor<R: NoteRepository> {
    saver: NoteSaver<R>,
}

impl<R: NoteRepository> NoteEditor<R> {
    pub fn new(repository: R) -> Self {
        Self {
            saver: NoteSaver::new(repository),
        }
    }

    /// Validate the draft and persist it.
    ///
    /// The non-empty check also lives in `NoteSaver`; both layers enforce it
    /// so the contract holds even if one call site is bypassed. On failure the
    /// draft is left untouched for the user to retry.
    pub fn save(&mut self, draft: &NoteDraft) -> Result<PathBuf, DomainError> {
        if draft.title.trim().is_empty() || draft.body.trim().is_empty() {
            return Err(DomainError::Validation(
                "Both Title and Note are required.".to_string(),
            ));
        }
        self.saver.save(&draft.title, &draft.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Note;
    use crate::util::testing::MockNoteRepository;

    #[test]
    fn given_no_payload_when_building_draft_then_draft_is_blank() {
        let draft = NoteDraft::from_param(None);

        assert!(draft.title.is_empty());
        assert!(draft.body.is_empty());
    }

    #[test]
    fn given_valid_payload_when_building_draft_then_fields_are_prefilled() {
        let note = Note {
            path: "/notes/Groceries.txt".into(),
            title: "Groceries".to_string(),
            body: "Milk".to_string(),
        };
        let payload = NoteParam::from_note(&note).encode().unwrap();

        let draft = NoteDraft::from_param(Some(&payload));

        assert_eq!(draft.title, "Groceries");
        assert_eq!(draft.body, "Milk");
    }

    #[test]
    fn given_undecodable_payload_when_building_draft_then_falls_back_to_blank() {
        let draft = NoteDraft::from_param(Some("%7Bnot-json"));

        assert!(draft.title.is_empty());
        assert!(draft.body.is_empty());
    }

    #[test]
    fn given_blank_draft_when_saving_then_returns_validation_error() {
        let mock = MockNoteRepository::builder()
            .with_save_error("unreachable")
            .build();
        let mut editor = NoteEditor::new(mock);

        let result = editor.save(&NoteDraft::default());

        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn given_filled_draft_when_saving_then_persists_note() {
        let mock = MockNoteRepository::builder().build();
        let mut editor = NoteEditor::new(mock);
        let draft = NoteDraft {
            title: "Groceries".to_string(),
            body: "Milk".to_string(),
        };

        let path = editor.save(&draft).unwrap();

        assert!(path.to_string_lossy().ends_with("Groceries.txt"));
    }
}
