// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Text operations library.
//!
//! Pure, stateless functions over strings. Nothing here touches session
//! state or does I/O; the session controller decides what to do with the
//! results.

pub mod change_text_case;
pub mod search;
pub mod strip_text;
pub mod text_stats;
pub mod timestamp;

pub use change_text_case::*;
pub use search::*;
pub use strip_text::*;
pub use text_stats::*;
pub use timestamp::*;
