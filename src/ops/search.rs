// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Substring counting and replacement.
//!
//! Both scan left to right and only consider non-overlapping occurrences, so
//! the count reported before a replace is exactly the number of substitutions
//! the replace performs.

use crate::errors::TextOpError;

/// Number of non-overlapping occurrences of `needle` in `text`.
///
/// An empty needle yields 0 rather than the "match between every char"
/// answer `str::matches` would give.
pub fn count_substring(text: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    text.matches(needle).count()
}

/// Like [`count_substring`], but an empty needle is an error.
pub fn count_substring_required(text: &str, needle: &str) -> Result<usize, TextOpError> {
    if needle.is_empty() {
        return Err(TextOpError::InvalidArgument {
            argument: "needle",
            reason: "must not be empty",
        });
    }
    Ok(count_substring(text, needle))
}

/// Replace every non-overlapping occurrence of `old` with `new`.
///
/// An empty `old` or one that never occurs returns `text` unchanged.
pub fn replace(text: &str, old: &str, new: &str) -> String {
    if old.is_empty() {
        return text.to_string();
    }
    text.replace(old, new)
}
