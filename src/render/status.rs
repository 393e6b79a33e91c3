// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Serialize;
use std::fmt;

use crate::errors::SessionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusLevel {
    Success,
    Info,
    Warning,
    Error,
}

impl StatusLevel {
    fn label(&self) -> &'static str {
        match self {
            StatusLevel::Success => "success",
            StatusLevel::Info => "info",
            StatusLevel::Warning => "warning",
            StatusLevel::Error => "error",
        }
    }
}

/// A single inline message shown under the control that triggered it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusMessage {
    pub level: StatusLevel,
    pub text: String,
}

impl StatusMessage {
    pub fn new(level: StatusLevel, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(StatusLevel::Success, text)
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(StatusLevel::Info, text)
    }
}

impl From<&SessionError> for StatusMessage {
    fn from(err: &SessionError) -> Self {
        Self::new(err.severity(), err.to_string())
    }
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.level.label(), self.text)
    }
}
