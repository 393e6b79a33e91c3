// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Actions and the dispatch table for the trigger buttons.
//!
//! Upload, mode and field edits are handled by the session itself. The six
//! trigger actions all require a loaded file, so they share one guard and are
//! then routed through [`DISPATCH_TABLE`], keyed by action name.

use std::fmt;
use std::str::FromStr;

use super::state::{Field, FieldEchoState, LoadedFile, Mode, UploadedFile};
use crate::config::AppConfig;
use crate::errors::{SessionError, TextOpError};
use crate::ops::{
    add_timestamp_at, count_substring, count_substring_required, replace, ChangeTextCase, StripText,
};
use crate::render::{DownloadArtifact, StatusMessage};
use crate::traits::{Clock, TextTransform};

/// A single UI event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Upload(UploadedFile),
    SetMode(Mode),
    SetField(Field, String),
    Run(ActionKind),
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::Upload(_) => "upload",
            Action::SetMode(_) => "set_mode",
            Action::SetField(..) => "set_field",
            Action::Run(kind) => kind.as_str(),
        }
    }
}

/// The trigger buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Uppercase,
    Lowercase,
    Strip,
    Replace,
    Count,
    Save,
}

impl ActionKind {
    pub const ALL: [ActionKind; 6] = [
        ActionKind::Uppercase,
        ActionKind::Lowercase,
        ActionKind::Strip,
        ActionKind::Replace,
        ActionKind::Count,
        ActionKind::Save,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::Uppercase => "uppercase",
            ActionKind::Lowercase => "lowercase",
            ActionKind::Strip => "strip",
            ActionKind::Replace => "replace",
            ActionKind::Count => "count",
            ActionKind::Save => "save",
        }
    }

    /// Handler registered for this action
    pub fn handler(&self) -> Handler {
        // Table rows are in declaration order; see test_table_order_matches_kinds.
        DISPATCH_TABLE[*self as usize].1
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DISPATCH_TABLE
            .iter()
            .find(|(kind, _)| kind.as_str().eq_ignore_ascii_case(s))
            .map(|(kind, _)| *kind)
            .ok_or_else(|| format!("Unknown action: '{}'", s))
    }
}

/// Result of a handled action: what to show, and what to offer for download.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionOutcome {
    pub status: Option<StatusMessage>,
    pub artifact: Option<DownloadArtifact>,
}

impl ActionOutcome {
    pub fn silent() -> Self {
        Self::default()
    }

    pub fn with_status(status: StatusMessage) -> Self {
        Self {
            status: Some(status),
            artifact: None,
        }
    }
}

impl From<&SessionError> for ActionOutcome {
    fn from(err: &SessionError) -> Self {
        Self::with_status(StatusMessage::from(err))
    }
}

/// Read-only view of the session a handler may consult.
pub struct ActionContext<'a> {
    pub fields: &'a FieldEchoState,
    pub mode: Mode,
    pub config: &'a AppConfig,
    pub clock: &'a dyn Clock,
}

pub type Handler = fn(&mut LoadedFile, &ActionContext<'_>) -> Result<ActionOutcome, SessionError>;

pub const DISPATCH_TABLE: [(ActionKind, Handler); 6] = [
    (ActionKind::Uppercase, uppercase),
    (ActionKind::Lowercase, lowercase),
    (ActionKind::Strip, strip),
    (ActionKind::Replace, replace_occurrences),
    (ActionKind::Count, count_occurrences),
    (ActionKind::Save, save),
];

const REPLACE_OLD_PROMPT: &str = "Please enter the text to replace in the 'Old' field.";
const COUNT_PROMPT: &str = "Please enter a substring to count.";

fn apply_transform(loaded: &mut LoadedFile, transform: &dyn TextTransform) -> ActionOutcome {
    loaded.buffer = transform.apply(&loaded.buffer);
    ActionOutcome::silent()
}

fn uppercase(loaded: &mut LoadedFile, _: &ActionContext<'_>) -> Result<ActionOutcome, SessionError> {
    Ok(apply_transform(loaded, &ChangeTextCase::upper()))
}

fn lowercase(loaded: &mut LoadedFile, _: &ActionContext<'_>) -> Result<ActionOutcome, SessionError> {
    Ok(apply_transform(loaded, &ChangeTextCase::lower()))
}

fn strip(loaded: &mut LoadedFile, _: &ActionContext<'_>) -> Result<ActionOutcome, SessionError> {
    Ok(apply_transform(loaded, &StripText::new()))
}

fn replace_occurrences(
    loaded: &mut LoadedFile,
    ctx: &ActionContext<'_>,
) -> Result<ActionOutcome, SessionError> {
    let old = &ctx.fields.replace_old;
    let new = &ctx.fields.replace_new;
    if old.is_empty() {
        return Err(SessionError::EmptyField {
            field: Field::ReplaceOld.as_str(),
            prompt: REPLACE_OLD_PROMPT,
        });
    }

    let occurrences = count_substring(&loaded.buffer, old);
    if occurrences == 0 {
        return Err(SessionError::NotFound {
            needle: old.clone(),
        });
    }

    loaded.buffer = replace(&loaded.buffer, old, new);
    Ok(ActionOutcome::with_status(StatusMessage::success(format!(
        "Replaced {} occurrence(s) of '{}' with '{}'.",
        occurrences, old, new
    ))))
}

fn count_occurrences(
    loaded: &mut LoadedFile,
    ctx: &ActionContext<'_>,
) -> Result<ActionOutcome, SessionError> {
    let needle = &ctx.fields.count_substring;
    let count = count_substring_required(&loaded.buffer, needle).map_err(|e| match e {
        TextOpError::InvalidArgument { .. } => SessionError::EmptyField {
            field: Field::CountSubstring.as_str(),
            prompt: COUNT_PROMPT,
        },
    })?;
    Ok(ActionOutcome::with_status(StatusMessage::info(format!(
        "The substring '{}' appears {} time(s).",
        needle, count
    ))))
}

fn save(loaded: &mut LoadedFile, ctx: &ActionContext<'_>) -> Result<ActionOutcome, SessionError> {
    if ctx.mode == Mode::Read {
        return Err(SessionError::ModeRestriction);
    }

    let extra = &ctx.fields.append_extra;
    let body = if extra.is_empty() {
        loaded.buffer.clone()
    } else {
        format!("{}\n{}", loaded.buffer, extra)
    };
    let format = &ctx.config.timestamp_format;
    let final_text = add_timestamp_at(&body, &ctx.clock.now(), format).map_err(|_| {
        SessionError::TimestampFormat {
            format: format.clone(),
        }
    })?;

    let artifact = DownloadArtifact::new(
        format!("{}{}", ctx.config.download_prefix, loaded.file_name),
        final_text,
    );
    Ok(ActionOutcome {
        status: Some(StatusMessage::success(format!(
            "Edited file ready: {}",
            artifact.file_name
        ))),
        artifact: Some(artifact),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::StatusLevel;
    use crate::traits::FixedClock;
    use chrono::{Local, TimeZone};

    fn loaded(text: &str) -> LoadedFile {
        LoadedFile {
            file_name: "a.txt".to_string(),
            buffer: text.to_string(),
        }
    }

    fn clock() -> FixedClock {
        FixedClock(Local.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap())
    }

    fn run(
        kind: ActionKind,
        file: &mut LoadedFile,
        fields: &FieldEchoState,
        mode: Mode,
    ) -> Result<ActionOutcome, SessionError> {
        let config = AppConfig::default();
        let clock = clock();
        let ctx = ActionContext {
            fields,
            mode,
            config: &config,
            clock: &clock,
        };
        (kind.handler())(file, &ctx)
    }

    #[test]
    fn test_table_order_matches_kinds() {
        for (index, kind) in ActionKind::ALL.iter().enumerate() {
            assert_eq!(DISPATCH_TABLE[index].0, *kind);
            assert_eq!(*kind as usize, index);
        }
    }

    #[test]
    fn test_lookup_by_name() {
        for kind in ActionKind::ALL {
            assert_eq!(kind.as_str().parse::<ActionKind>(), Ok(kind));
        }
        assert_eq!("UPPERCASE".parse::<ActionKind>(), Ok(ActionKind::Uppercase));
        assert!("reverse".parse::<ActionKind>().is_err());
    }

    #[test]
    fn test_case_and_strip_handlers() {
        let fields = FieldEchoState::default();
        let mut file = loaded("  Hello World \n");

        run(ActionKind::Uppercase, &mut file, &fields, Mode::Read).unwrap();
        assert_eq!(file.buffer, "  HELLO WORLD \n");
        run(ActionKind::Strip, &mut file, &fields, Mode::Read).unwrap();
        assert_eq!(file.buffer, "HELLO WORLD");
        run(ActionKind::Lowercase, &mut file, &fields, Mode::Read).unwrap();
        assert_eq!(file.buffer, "hello world");
    }

    #[test]
    fn test_replace_reports_count() {
        let fields = FieldEchoState {
            replace_old: "cat".to_string(),
            replace_new: "dog".to_string(),
            ..Default::default()
        };
        let mut file = loaded("cat dog cat");

        let outcome = run(ActionKind::Replace, &mut file, &fields, Mode::Read).unwrap();
        assert_eq!(file.buffer, "dog dog dog");
        let status = outcome.status.unwrap();
        assert_eq!(status.level, StatusLevel::Success);
        assert_eq!(status.text, "Replaced 2 occurrence(s) of 'cat' with 'dog'.");
    }

    #[test]
    fn test_replace_empty_old_is_validation_error() {
        let fields = FieldEchoState::default();
        let mut file = loaded("unchanged");

        let err = run(ActionKind::Replace, &mut file, &fields, Mode::Read).unwrap_err();
        assert_eq!(err.to_string(), REPLACE_OLD_PROMPT);
        assert_eq!(file.buffer, "unchanged");
    }

    #[test]
    fn test_replace_not_found_leaves_buffer() {
        let fields = FieldEchoState {
            replace_old: "zebra".to_string(),
            ..Default::default()
        };
        let mut file = loaded("cat dog");

        let err = run(ActionKind::Replace, &mut file, &fields, Mode::Read).unwrap_err();
        assert_eq!(err, SessionError::NotFound { needle: "zebra".to_string() });
        assert_eq!(file.buffer, "cat dog");
    }

    #[test]
    fn test_count_does_not_mutate() {
        let fields = FieldEchoState {
            count_substring: "aa".to_string(),
            ..Default::default()
        };
        let mut file = loaded("aaa");

        let outcome = run(ActionKind::Count, &mut file, &fields, Mode::Read).unwrap();
        assert_eq!(file.buffer, "aaa");
        let status = outcome.status.unwrap();
        assert_eq!(status.level, StatusLevel::Info);
        assert_eq!(status.text, "The substring 'aa' appears 1 time(s).");
    }

    #[test]
    fn test_count_empty_needle() {
        let fields = FieldEchoState::default();
        let mut file = loaded("aaa");
        let err = run(ActionKind::Count, &mut file, &fields, Mode::Read).unwrap_err();
        assert_eq!(err.severity(), StatusLevel::Error);
        assert_eq!(err.to_string(), COUNT_PROMPT);
        assert_eq!(
            err,
            SessionError::EmptyField {
                field: "count_substring",
                prompt: COUNT_PROMPT,
            }
        );
    }

    #[test]
    fn test_save_in_read_mode_is_restricted() {
        let fields = FieldEchoState::default();
        let mut file = loaded("text");
        let err = run(ActionKind::Save, &mut file, &fields, Mode::Read).unwrap_err();
        assert_eq!(err, SessionError::ModeRestriction);
    }

    #[test]
    fn test_save_with_extra_text() {
        let fields = FieldEchoState {
            append_extra: "extra line".to_string(),
            ..Default::default()
        };
        let mut file = loaded("body");

        let outcome = run(ActionKind::Save, &mut file, &fields, Mode::Append).unwrap();
        let artifact = outcome.artifact.unwrap();
        assert_eq!(artifact.file_name, "edited_a.txt");
        assert_eq!(artifact.text(), "body\nextra line\n[Saved on: 2024-01-02 03:04:05]");
        assert_eq!(file.buffer, "body");
    }

    #[test]
    fn test_save_without_extra_text() {
        let fields = FieldEchoState::default();
        let mut file = loaded("body");

        let outcome = run(ActionKind::Save, &mut file, &fields, Mode::Append).unwrap();
        assert_eq!(
            outcome.artifact.unwrap().text(),
            "body\n[Saved on: 2024-01-02 03:04:05]"
        );
    }

    #[test]
    fn test_save_with_unrenderable_timestamp_format() {
        let config = AppConfig {
            timestamp_format: "%Q".to_string(),
            ..AppConfig::default()
        };
        let clock = clock();
        let fields = FieldEchoState::default();
        let ctx = ActionContext {
            fields: &fields,
            mode: Mode::Append,
            config: &config,
            clock: &clock,
        };
        let mut file = loaded("body");

        let err = (ActionKind::Save.handler())(&mut file, &ctx).unwrap_err();
        assert_eq!(
            err,
            SessionError::TimestampFormat {
                format: "%Q".to_string()
            }
        );
        assert_eq!(file.buffer, "body");
    }
}
