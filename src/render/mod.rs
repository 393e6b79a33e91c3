// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Presentation: what the user sees after every action.

mod download;
mod status;
mod view;

pub use download::DownloadArtifact;
pub use status::{StatusLevel, StatusMessage};
pub use view::{Preview, StatsLine, View, APP_TITLE};
