// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Serialize;
use std::fmt;

use super::{DownloadArtifact, StatusMessage};
use crate::ops::{get_stats, TextStats};
use crate::session::{FieldEchoState, Mode};

pub const APP_TITLE: &str = "Text Helper";

/// Read-only preview: the first lines of the buffer, newline-joined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Preview {
    pub text: String,
    pub shown_lines: usize,
    pub total_lines: usize,
}

impl Preview {
    pub fn from_text(text: &str, max_lines: usize) -> Self {
        let lines: Vec<&str> = text.lines().take(max_lines).collect();
        Self {
            shown_lines: lines.len(),
            text: lines.join("\n"),
            total_lines: text.lines().count(),
        }
    }

    pub fn is_truncated(&self) -> bool {
        self.shown_lines < self.total_lines
    }
}

/// `Lines: <n> | Words: <n> | Characters: <n>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StatsLine(pub TextStats);

impl StatsLine {
    pub fn from_text(text: &str) -> Self {
        Self(get_stats(text))
    }
}

impl fmt::Display for StatsLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Lines: {} | Words: {} | Characters: {}",
            self.0.line_count, self.0.word_count, self.0.char_count
        )
    }
}

/// Snapshot of everything rendered after an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct View {
    pub title: &'static str,
    pub file_name: Option<String>,
    pub mode: Mode,
    pub save_enabled: bool,
    pub fields: FieldEchoState,
    pub preview: Option<Preview>,
    pub stats: Option<StatsLine>,
    pub status: Option<StatusMessage>,
    pub download: Option<DownloadArtifact>,
}

impl View {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== {} ==", self.title)?;
        if let Some(status) = &self.status {
            writeln!(f, "{}", status)?;
        }

        let (Some(file_name), Some(preview), Some(stats)) =
            (&self.file_name, &self.preview, &self.stats)
        else {
            return Ok(());
        };

        writeln!(f, "File: {} | Mode: {}", file_name, self.mode)?;
        writeln!(f, "-- Preview (first {} lines) --", preview.shown_lines)?;
        if !preview.text.is_empty() {
            writeln!(f, "{}", preview.text)?;
        }
        if preview.is_truncated() {
            writeln!(f, "... ({} more lines)", preview.total_lines - preview.shown_lines)?;
        }
        writeln!(f, "-- {} --", stats)?;

        if !self.save_enabled {
            writeln!(f, "Saving is disabled in Read mode.")?;
        }
        if let Some(download) = &self.download {
            writeln!(
                f,
                "Download ready: {} ({} bytes, {})",
                download.file_name,
                download.bytes().len(),
                download.media_type
            )?;
        }
        Ok(())
    }
}
