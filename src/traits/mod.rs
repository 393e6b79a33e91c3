// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod clock;
pub mod transform;

pub use clock::{Clock, FixedClock, SystemClock};
pub use transform::TextTransform;
