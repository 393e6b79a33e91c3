// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod config;     // app config + session scripts
pub mod errors;     // error handling
pub mod observability;
pub mod ops;        // text operations library
pub mod render;     // preview, stats, status, downloads
pub mod session;    // per-user session controller
pub mod traits;     // unified abstractions
