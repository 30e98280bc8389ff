// src/domain/note.rs
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::constants::{BODY_SEPARATOR, TITLE_PREFIX};
use crate::domain::DomainError;

/// A persisted note. Identity is the full file path; there is no separate id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Note {
    pub path: PathBuf,
    pub title: String,
    pub body: String,
}

impl Note {
    /// Serialized on-disk form: `Title: <title>\n\nNote: <body>`.
    pub fn storage_form(title: &str, body: &str) -> String {
        format!("{TITLE_PREFIX}{title}{BODY_SEPARATOR}{body}")
    }

    /// Parse stored file content back into a note.
    ///
    /// Splits on the literal body separator and keeps only the segment after
    /// the first occurrence, so a body that itself contains the separator is
    /// truncated on reload. Known format limitation, covered by tests.
    pub fn from_file(path: &Path, content: &str) -> Result<Self, DomainError> {
        let mut segments = content.split(BODY_SEPARATOR);
        let header = segments.next().unwrap_or_default();

        let title = header
            .strip_prefix(TITLE_PREFIX)
            .ok_or_else(|| DomainError::Parse {
                path: path.to_path_buf(),
                reason: format!("missing `{}` header", TITLE_PREFIX.trim_end()),
            })?
            .trim()
            .to_string();

        let body = segments
            .next()
            .ok_or_else(|| DomainError::Parse {
                path: path.to_path_buf(),
                reason: "missing body separator".to_string(),
            })?
            .trim()
            .to_string();

        Ok(Self {
            path: path.to_path_buf(),
            title,
            body,
        })
    }
}

/// Transit payload handed from the list surface to the editor when a note is
/// opened for editing. Field names match the JSON the list emits: `note` is
/// the body text and `id` the identifying file path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteParam {
    pub title: String,
    pub note: String,
    pub id: String,
}

impl NoteParam {
    pub fn from_note(note: &Note) -> Self {
        Self {
            title: note.title.clone(),
            note: note.body.clone(),
            id: note.path.to_string_lossy().into_owned(),
        }
    }

    /// Encode as URL-encoded JSON for transit.
    pub fn encode(&self) -> Result<String> {
        let json = serde_json::to_string(self).context("Failed to serialize note parameter")?;
        Ok(urlencoding::encode(&json).into_owned())
    }

    /// Decode a URL-encoded JSON payload.
    pub fn decode(raw: &str) -> Result<Self> {
        let json = urlencoding::decode(raw).context("Note parameter is not valid UTF-8")?;
        serde_json::from_str(&json).context("Failed to parse note parameter JSON")
    }
}
