// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Errors raised by the text operations library
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TextOpError {
    /// An argument was well-typed but unusable, e.g. an empty needle where a match is required
    #[error("invalid argument '{argument}': {reason}")]
    InvalidArgument {
        argument: &'static str,
        reason: &'static str,
    },
}
