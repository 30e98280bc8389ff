// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::application::{NoteDraft, NoteEditor, NoteLister, NoteSaver};
use crate::cli::args::{Args, Command};
use crate::constants::NOTES_DIR_NAME;
use crate::domain::NoteParam;
use crate::infrastructure::{Config, FileNoteRepository};
use crate::ports::ConsolePresenter;

pub fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting jotter with arguments");

    let config = Config::load_default()?;

    // Initialize infrastructure
    let notes_dir = match args.dir {
        Some(dir) => {
            debug!(?dir, "Using provided notes directory");
            dir
        }
        None => find_notes_dir(&config)?,
    };
    let repository = FileNoteRepository::new(&notes_dir);

    // Initialize presentation
    let presenter = ConsolePresenter::with_preview(config.defaults.preview);

    // Execute use case
    match args.command {
        Command::List { search, json } => {
            info!(?search, "Listing notes");
            let mut lister = NoteLister::new(repository);
            let notes = lister.list_notes(search.as_deref())?;
            debug!(count = notes.len(), "Loaded notes");

            if json {
                println!("{}", serde_json::to_string_pretty(&notes)?);
            } else {
                print!("{}", presenter.render_list(&notes));
            }
        }
        Command::Open { title } => {
            info!(%title, "Opening note for editing");
            let mut lister = NoteLister::new(repository);
            let note = lister
                .find_by_title(&title)?
                .with_context(|| format!("No note titled '{title}'"))?;

            println!("{}", NoteParam::from_note(&note).encode()?);
        }
        Command::Save { title, note } => {
            info!(%title, "Saving note");
            let mut saver = NoteSaver::new(repository);
            let path = saver.save(&title, &note)?;

            println!("Saved {}", path.display());
        }
        Command::Edit { note, title, body } => {
            let mut draft = NoteDraft::from_param(note.as_deref());
            if let Some(title) = title {
                draft.title = title;
            }
            if let Some(body) = body {
                draft.body = body;
            }

            info!(title = %draft.title, "Saving edited note");
            let mut editor = NoteEditor::new(repository);
            let path = editor.save(&draft)?;

            println!("Saved {}", path.display());
        }
    }

    Ok(())
}

/// Resolve the notes directory: config override first, otherwise the fixed
/// subdirectory of the platform document folder.
pub fn find_notes_dir(config: &Config) -> Result<PathBuf> {
    if !config.defaults.folder.is_empty() {
        debug!(folder = %config.defaults.folder, "Using notes directory from config");
        return Ok(PathBuf::from(&config.defaults.folder));
    }

    let base = dirs::document_dir()
        .or_else(dirs::data_dir)
        .context("Could not find a document directory")?;

    Ok(base.join(NOTES_DIR_NAME))
}
