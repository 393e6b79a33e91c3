// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use chrono::{DateTime, Local, TimeZone};
use std::fmt::Write;

use crate::config::consts::DEFAULT_TIMESTAMP_FORMAT;
use crate::errors::TextOpError;

/// Append a line holding the current local date and time.
pub fn add_timestamp(text: &str) -> String {
    format!("{}\n{}", text, Local::now().format(DEFAULT_TIMESTAMP_FORMAT))
}

/// Append a timestamp line for `when`, rendered with a chrono `format`.
///
/// A format chrono cannot render is an `InvalidArgument` error, never a panic.
pub fn add_timestamp_at<Tz>(
    text: &str,
    when: &DateTime<Tz>,
    format: &str,
) -> Result<String, TextOpError>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let mut stamped = String::with_capacity(text.len() + format.len() + 1);
    stamped.push_str(text);
    stamped.push('\n');
    write!(stamped, "{}", when.format(format)).map_err(|_| TextOpError::InvalidArgument {
        argument: "format",
        reason: "not a valid strftime format",
    })?;
    Ok(stamped)
}
