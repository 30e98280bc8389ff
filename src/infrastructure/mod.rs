// src/infrastructure/mod.rs
pub mod config;
pub mod file_store;

pub use config::Config;
pub use file_store::FileNoteRepository;
