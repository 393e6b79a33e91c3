// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod config;
mod session;
mod text_ops;

pub use config::ConfigError;
pub use session::SessionError;
pub use text_ops::TextOpError;
