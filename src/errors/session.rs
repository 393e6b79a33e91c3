// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors surfaced by the session controller.
//!
//! None of these escape an action: the dispatcher turns each one into a
//! status message and leaves the buffer untouched.

use thiserror::Error;

use crate::render::StatusLevel;

/// Errors that can occur while handling a single UI action
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Uploaded file does not carry the allowed extension
    #[error("Only .{allowed} files are supported.")]
    UnsupportedExtension { file_name: String, allowed: String },

    /// Uploaded bytes are not valid UTF-8
    #[error("Could not decode '{file_name}' as UTF-8 text.")]
    Decode { file_name: String, reason: String },

    /// A required input field was left empty
    #[error("{prompt}")]
    EmptyField {
        field: &'static str,
        prompt: &'static str,
    },

    /// Replace target is well-formed but absent from the buffer
    #[error("'{needle}' was not found. No replacement performed.")]
    NotFound { needle: String },

    /// Save requested while the session is in Read mode
    #[error("Saving is disabled in Read mode.")]
    ModeRestriction,

    /// The configured save timestamp format cannot be rendered
    #[error("Could not save: timestamp format '{format}' is invalid.")]
    TimestampFormat { format: String },

    /// Any action other than upload before a file has been loaded
    #[error("Please upload a .{allowed} file to begin.")]
    NoFileLoaded { allowed: String },
}

impl SessionError {
    /// How the error should be presented to the user
    pub fn severity(&self) -> StatusLevel {
        match self {
            SessionError::UnsupportedExtension { .. }
            | SessionError::Decode { .. }
            | SessionError::EmptyField { .. }
            | SessionError::TimestampFormat { .. } => StatusLevel::Error,
            SessionError::NotFound { .. } | SessionError::ModeRestriction => StatusLevel::Warning,
            SessionError::NoFileLoaded { .. } => StatusLevel::Info,
        }
    }

    /// Short machine-readable kind, used as a structured log field
    pub fn kind(&self) -> &'static str {
        match self {
            SessionError::UnsupportedExtension { .. } => "validation",
            SessionError::Decode { .. } => "decode",
            SessionError::EmptyField { .. } => "validation",
            SessionError::NotFound { .. } => "not_found",
            SessionError::ModeRestriction => "mode_restriction",
            SessionError::TimestampFormat { .. } => "config",
            SessionError::NoFileLoaded { .. } => "no_file",
        }
    }
}
