// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! This module provides centralized message types for all diagnostic and
//! operational logging in the session controller. Message types follow a
//! struct-based pattern with a `Display` implementation so log text lives in
//! one place and structured fields stay consistent between call sites.
//!
//! # Architecture
//!
//! Messages are organized by subsystem:
//! * `messages::session` - upload, reset, mode and save events
//! * `messages::operation` - action dispatch and completion events
//!
//! # Usage
//!
//! ```rust
//! use text_helper::observability::messages::{session::UploadAccepted, StructuredLog};
//!
//! UploadAccepted {
//!     session_id: 1,
//!     file_name: "notes.txt",
//!     size_bytes: 42,
//! }
//! .log();
//! ```

pub mod messages;

use tracing_subscriber::EnvFilter;

/// Install a global fmt subscriber.
///
/// `RUST_LOG` wins when set; otherwise `default_directive` is used. Returns
/// `false` if a subscriber was already installed.
pub fn init_tracing(default_directive: &str) -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}
