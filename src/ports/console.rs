// src/ports/console.rs
use crate::constants::BODY_PREVIEW_CHARS;
use crate::domain::Note;
use crate::util::text::preview;

/// Shown when the collection is empty or no title matches the search term.
pub const EMPTY_LIST_MESSAGE: &str = "No notes found.";

#[derive(Debug)]
pub struct ConsolePresenter {
    preview_chars: usize,
}

impl ConsolePresenter {
    pub fn new() -> Self {
        Self::with_preview(BODY_PREVIEW_CHARS)
    }

    pub fn with_preview(preview_chars: usize) -> Self {
        Self { preview_chars }
    }

    /// Render the note list: title plus a short body preview per entry.
    pub fn render_list(&self, notes: &[Note]) -> String {
        if notes.is_empty() {
            return format!("{EMPTY_LIST_MESSAGE}\n");
        }

        let mut out = String::new();
        for note in notes {
            out.push_str(&note.title);
            out.push('\n');
            out.push_str("    ");
            out.push_str(&preview(&note.body, self.preview_chars));
            out.push('\n');
        }
        out
    }
}

impl Default for ConsolePresenter {
    fn default() -> Self {
        Self::new()
    }
}
