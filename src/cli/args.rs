// src/cli/args.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// Notes directory (optional, defaults to the platform document folder)
    #[arg(short, long, value_name = "DIR", global = true)]
    pub dir: Option<PathBuf>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute (list, open, save, or edit)
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List notes with title and a short body preview
    List {
        /// Optional search term to filter notes by title
        #[arg(value_name = "SEARCH")]
        search: Option<String>,

        /// Output notes as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print the serialized payload for opening a note in the editor
    Open {
        /// Exact title of the note to open
        #[arg(value_name = "TITLE")]
        title: String,
    },

    /// Save a note, overwriting any existing note with the same title
    Save {
        /// Note title, also used as the file name
        #[arg(value_name = "TITLE")]
        title: String,

        /// Note text
        #[arg(value_name = "NOTE")]
        note: String,
    },

    /// Edit a note, optionally pre-filled from a serialized payload
    Edit {
        /// Serialized note payload from `open` (URL-encoded JSON)
        #[arg(long, value_name = "PAYLOAD")]
        note: Option<String>,

        /// Set the draft title
        #[arg(long, value_name = "TITLE")]
        title: Option<String>,

        /// Set the draft note text
        #[arg(long, value_name = "NOTE")]
        body: Option<String>,
    },
}
