// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

/// A parameterless operation whose output replaces the session buffer.
pub trait TextTransform: Send + Sync {
    fn apply(&self, input: &str) -> String;

    fn name(&self) -> &'static str;
}
