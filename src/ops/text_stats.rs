// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Serialize;

/// Line, word and character counts for a piece of text.
///
/// Always computed from the current buffer; never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TextStats {
    pub line_count: usize,
    pub word_count: usize,
    pub char_count: usize,
}

/// Compute statistics for `text`.
///
/// Lines end at `\n` or `\r\n`; a trailing terminator does not add an empty
/// final line and the empty string has zero lines. Words are maximal runs of
/// non-whitespace. Characters are Unicode scalar values, whitespace included.
pub fn get_stats(text: &str) -> TextStats {
    TextStats {
        line_count: text.lines().count(),
        word_count: text.split_whitespace().count(),
        char_count: text.chars().count(),
    }
}
