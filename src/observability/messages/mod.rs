// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Each message type implements `Display` for the human-readable line and
//! [`StructuredLog`] to emit it at its fixed level with structured fields.
//!
//! * `session` - session lifecycle events
//! * `operation` - action dispatch events

pub mod operation;
pub mod session;

use tracing::Span;

/// Emit a message at its own level, with its fields attached.
pub trait StructuredLog {
    fn log(&self);

    fn span(&self, name: &str) -> Span;
}
