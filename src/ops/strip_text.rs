// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::traits::TextTransform;

/// Remove leading and trailing whitespace; interior whitespace is untouched.
pub fn strip(text: &str) -> String {
    text.trim().to_string()
}

/// Strip operation - trims whitespace from both ends of the buffer
pub struct StripText;

impl StripText {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StripText {
    fn default() -> Self {
        Self::new()
    }
}

impl TextTransform for StripText {
    fn apply(&self, input: &str) -> String {
        strip(input)
    }

    fn name(&self) -> &'static str {
        "strip"
    }
}
