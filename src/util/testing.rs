// src/util/testing.rs

use std::env;
use std::path::PathBuf;

use anyhow::Result;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::NoteRepository;
use crate::domain::{DomainError, Note};

/// Shared in-memory repository for testing use cases that depend on
/// NoteRepository, without touching a real file system.
///
/// Saves are applied to the in-memory collection with the same overwrite
/// semantics as the file store, so save-then-list behavior can be asserted.
/// Failure behavior is configurable per operation.
///
/// # Examples
///
/// ```
/// use jotter::util::testing::{test_note, MockNoteRepository};
///
/// let mock = MockNoteRepository::builder()
///     .with_note(test_note("Groceries", "Milk"))
///     .with_save_error("disk full")
///     .build();
/// ```
pub struct MockNoteRepository {
    notes: Vec<Note>,
    save_error: Option<String>,
    list_error: Option<String>,
}

impl MockNoteRepository {
    pub fn builder() -> MockNoteRepositoryBuilder {
        MockNoteRepositoryBuilder::new()
    }
}

impl NoteRepository for MockNoteRepository {
    fn save_note(&mut self, title: &str, body: &str) -> Result<PathBuf, DomainError> {
        if let Some(message) = &self.save_error {
            return Err(DomainError::Persistence(message.clone()));
        }

        let path = PathBuf::from("/mock/noteApp").join(format!("{title}.txt"));
        let note = Note {
            path: path.clone(),
            title: title.to_string(),
            body: body.to_string(),
        };

        // Same identity rule as the file store: one entry per path.
        match self.notes.iter_mut().find(|n| n.path == path) {
            Some(existing) => *existing = note,
            None => self.notes.push(note),
        }
        Ok(path)
    }

    fn list_notes(&mut self) -> Result<Vec<Note>, DomainError> {
        if let Some(message) = &self.list_error {
            return Err(DomainError::Persistence(message.clone()));
        }
        Ok(self.notes.clone())
    }
}

/// Builder for MockNoteRepository
///
/// Provides a fluent interface for configuring mock behavior.
pub struct MockNoteRepositoryBuilder {
    notes: Vec<Note>,
    save_error: Option<String>,
    list_error: Option<String>,
}

impl MockNoteRepositoryBuilder {
    pub fn new() -> Self {
        Self {
            notes: Vec::new(),
            save_error: None,
            list_error: None,
        }
    }

    /// Seed a note that list_notes will return, in insertion order
    pub fn with_note(mut self, note: Note) -> Self {
        self.notes.push(note);
        self
    }

    /// Configure save_note to fail with a persistence error
    pub fn with_save_error(mut self, message: &str) -> Self {
        self.save_error = Some(message.to_string());
        self
    }

    /// Configure list_notes to fail with a persistence error
    pub fn with_list_error(mut self, message: &str) -> Self {
        self.list_error = Some(message.to_string());
        self
    }

    pub fn build(self) -> MockNoteRepository {
        MockNoteRepository {
            notes: self.notes,
            save_error: self.save_error,
            list_error: self.list_error,
        }
    }
}

impl Default for MockNoteRepositoryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience constructor for a note with a mock path derived from the title.
pub fn test_note(title: &str, body: &str) -> Note {
    Note {
        path: PathBuf::from("/mock/noteApp").join(format!("{title}.txt")),
        title: title.to_string(),
        body: body.to_string(),
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    // Create a filter for noisy modules
    let noisy_modules = ["mio"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    // Set up the subscriber with environment filter
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    // Build and set the subscriber
    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}
