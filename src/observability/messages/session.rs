// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for session lifecycle events.
//!
//! This module contains message types for logging events related to:
//! * Session creation and teardown
//! * File uploads (accepted, rejected, unchanged)
//! * Mode changes
//! * Download artifacts

use std::fmt::{Display, Formatter};
use tracing::Span;

use super::StructuredLog;

/// Session opened in the registry.
///
/// # Log Level
/// `debug!` - Lifecycle detail
pub struct SessionOpened {
    pub session_id: u64,
    pub active_sessions: usize,
}

impl Display for SessionOpened {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Session {} opened ({} active)",
            self.session_id, self.active_sessions
        )
    }
}

impl StructuredLog for SessionOpened {
    fn log(&self) {
        tracing::debug!(
            session_id = self.session_id,
            active_sessions = self.active_sessions,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::DEBUG,
            "session",
            name = name,
            session_id = self.session_id,
        )
    }
}

/// Session closed and its buffer dropped.
///
/// # Log Level
/// `debug!` - Lifecycle detail
pub struct SessionClosed {
    pub session_id: u64,
    pub active_sessions: usize,
}

impl Display for SessionClosed {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Session {} closed ({} active)",
            self.session_id, self.active_sessions
        )
    }
}

impl StructuredLog for SessionClosed {
    fn log(&self) {
        tracing::debug!(
            session_id = self.session_id,
            active_sessions = self.active_sessions,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::DEBUG,
            "session",
            name = name,
            session_id = self.session_id,
        )
    }
}

/// Upload passed validation and replaced the session buffer.
///
/// # Log Level
/// `info!` - Important operational event
pub struct UploadAccepted<'a> {
    pub session_id: u64,
    pub file_name: &'a str,
    pub size_bytes: usize,
}

impl Display for UploadAccepted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Session {} loaded '{}' ({} bytes), buffer and fields reset",
            self.session_id, self.file_name, self.size_bytes
        )
    }
}

impl StructuredLog for UploadAccepted<'_> {
    fn log(&self) {
        tracing::info!(
            session_id = self.session_id,
            file_name = self.file_name,
            size_bytes = self.size_bytes,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::INFO,
            "upload",
            name = name,
            session_id = self.session_id,
            file_name = self.file_name,
        )
    }
}

/// Upload with the currently loaded name; buffer kept.
///
/// # Log Level
/// `debug!` - Expected no-op
pub struct UploadUnchanged<'a> {
    pub session_id: u64,
    pub file_name: &'a str,
}

impl Display for UploadUnchanged<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Session {} re-received '{}', keeping current buffer",
            self.session_id, self.file_name
        )
    }
}

impl StructuredLog for UploadUnchanged<'_> {
    fn log(&self) {
        tracing::debug!(
            session_id = self.session_id,
            file_name = self.file_name,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::DEBUG,
            "upload",
            name = name,
            session_id = self.session_id,
            file_name = self.file_name,
        )
    }
}

/// Mode switched between Read and Append.
///
/// # Log Level
/// `debug!` - State detail
pub struct ModeChanged<'a> {
    pub session_id: u64,
    pub mode: &'a dyn Display,
}

impl Display for ModeChanged<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Session {} switched to {} mode", self.session_id, self.mode)
    }
}

impl StructuredLog for ModeChanged<'_> {
    fn log(&self) {
        tracing::debug!(
            session_id = self.session_id,
            mode = %self.mode,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::DEBUG,
            "mode",
            name = name,
            session_id = self.session_id,
        )
    }
}

/// Download artifact produced by Save.
///
/// # Log Level
/// `info!` - Important operational event
pub struct ArtifactProduced<'a> {
    pub session_id: u64,
    pub file_name: &'a str,
    pub size_bytes: usize,
}

impl Display for ArtifactProduced<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Session {} produced download '{}' ({} bytes)",
            self.session_id, self.file_name, self.size_bytes
        )
    }
}

impl StructuredLog for ArtifactProduced<'_> {
    fn log(&self) {
        tracing::info!(
            session_id = self.session_id,
            file_name = self.file_name,
            size_bytes = self.size_bytes,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::INFO,
            "save",
            name = name,
            session_id = self.session_id,
            file_name = self.file_name,
        )
    }
}
