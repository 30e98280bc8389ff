// src/constants.rs
//
// Application-wide constants for the storage layout and serialized note form.
// The values mirror the on-disk format documented in the README; changing any
// of them breaks compatibility with notes saved by earlier versions.

/// Name of the notes subdirectory under the platform document root.
///
/// Every note file lives directly inside this directory; there is no nesting.
///
/// Used in: `lib.rs` (directory resolution)
pub const NOTES_DIR_NAME: &str = "noteApp";

/// File extension appended to the note title to form the file name.
///
/// Used in: `infrastructure/file_store.rs`
pub const NOTE_FILE_EXTENSION: &str = "txt";

/// Header prefix of the serialized note form `Title: <title>\n\nNote: <body>`.
///
/// Used in: `domain/note.rs`
pub const TITLE_PREFIX: &str = "Title: ";

/// Separator between the title header and the body in the serialized form.
///
/// Parsing splits on this exact substring, so a body that contains it is
/// truncated at the first occurrence on reload. Known format limitation.
///
/// Used in: `domain/note.rs`
pub const BODY_SEPARATOR: &str = "\n\nNote: ";

/// Default number of characters of body text shown per entry in the list view.
///
/// Longer bodies are cut at this many characters and suffixed with `...`.
/// Overridable via `defaults.preview` in the config file.
///
/// Used in: `ports/console.rs`, `infrastructure/config.rs`
pub const BODY_PREVIEW_CHARS: usize = 50;
