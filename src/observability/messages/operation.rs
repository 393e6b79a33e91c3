// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for action dispatch.
//!
//! This module contains message types for logging events related to:
//! * An action being routed through the dispatch table
//! * An action completing and how it changed the buffer
//! * An action being refused by a guard

use std::fmt::{Display, Formatter};
use tracing::Span;

use super::StructuredLog;

/// Action routed to its handler.
///
/// # Log Level
/// `debug!` - Dispatch detail
///
/// # Example
/// ```
/// use text_helper::observability::messages::operation::ActionDispatched;
///
/// let msg = ActionDispatched {
///     session_id: 7,
///     action: "uppercase",
///     buffer_size: 1024,
/// };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct ActionDispatched<'a> {
    pub session_id: u64,
    pub action: &'a str,
    pub buffer_size: usize,
}

impl Display for ActionDispatched<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Session {} dispatching '{}': buffer_size={} bytes",
            self.session_id, self.action, self.buffer_size
        )
    }
}

impl StructuredLog for ActionDispatched<'_> {
    fn log(&self) {
        tracing::debug!(
            session_id = self.session_id,
            action = self.action,
            buffer_size = self.buffer_size,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::DEBUG,
            "action",
            name = name,
            session_id = self.session_id,
            action = self.action,
        )
    }
}

/// Action finished successfully.
///
/// # Log Level
/// `info!` - Important operational event
pub struct ActionCompleted<'a> {
    pub session_id: u64,
    pub action: &'a str,
    pub input_size: usize,
    pub output_size: usize,
    pub duration: std::time::Duration,
}

impl Display for ActionCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Session {} completed '{}': input={} bytes, output={} bytes, duration={:?}",
            self.session_id, self.action, self.input_size, self.output_size, self.duration
        )
    }
}

impl StructuredLog for ActionCompleted<'_> {
    fn log(&self) {
        tracing::info!(
            session_id = self.session_id,
            action = self.action,
            input_size = self.input_size,
            output_size = self.output_size,
            duration_us = self.duration.as_micros() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::INFO,
            "action",
            name = name,
            session_id = self.session_id,
            action = self.action,
        )
    }
}

/// Action refused by a guard; buffer left untouched.
///
/// # Log Level
/// `warn!` - User-facing validation failure
///
/// # Example
/// ```
/// use text_helper::observability::messages::operation::ActionRejected;
///
/// let msg = ActionRejected {
///     session_id: 7,
///     action: "replace",
///     kind: "not_found",
///     reason: "'cat' was not found. No replacement performed.",
/// };
///
/// tracing::warn!("{}", msg);
/// ```
pub struct ActionRejected<'a> {
    pub session_id: u64,
    pub action: &'a str,
    pub kind: &'a str,
    pub reason: &'a str,
}

impl Display for ActionRejected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Session {} rejected '{}' ({}): {}",
            self.session_id, self.action, self.kind, self.reason
        )
    }
}

impl StructuredLog for ActionRejected<'_> {
    fn log(&self) {
        tracing::warn!(
            session_id = self.session_id,
            action = self.action,
            kind = self.kind,
            reason = self.reason,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::WARN,
            "action",
            name = name,
            session_id = self.session_id,
            action = self.action,
        )
    }
}
