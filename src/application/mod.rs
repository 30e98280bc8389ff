// src/application/mod.rs
pub mod editor;
pub mod note_lister;
pub mod note_saver;

pub use editor::{NoteDraft, NoteEditor};
pub use note_lister::NoteLister;
pub use note_saver::{NoteRepository, NoteSaver};
