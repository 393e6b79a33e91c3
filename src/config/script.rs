// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::ConfigError;
use crate::session::{Action, ActionKind, Field, Mode, UploadedFile};

/// A recorded sequence of UI interactions, replayed against one session.
///
/// # Example
/// ```yaml
/// file: notes.txt
/// mode: append
/// steps:
///   - action: uppercase
///   - action: replace
///     old: CAT
///     new: DOG
///   - action: count
///     needle: DOG
///   - action: save
///     extra: "reviewed"
/// ```
#[derive(Debug, Deserialize)]
pub struct SessionScript {
    /// File uploaded before the first step, relative to the script
    pub file: PathBuf,
    #[serde(default)]
    pub mode: Option<Mode>,
    #[serde(default)]
    pub steps: Vec<ScriptStep>,
}

/// One user interaction in a [`SessionScript`]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ScriptStep {
    Upload {
        path: PathBuf,
    },
    SetMode {
        mode: Mode,
    },
    Uppercase,
    Lowercase,
    Strip,
    Replace {
        old: String,
        #[serde(default)]
        new: String,
    },
    Count {
        needle: String,
    },
    Save {
        #[serde(default)]
        extra: String,
    },
}

impl ScriptStep {
    /// Expand the step into the field edits and button press it stands for.
    ///
    /// Upload paths are resolved against `base_dir` and read eagerly.
    pub fn into_actions(self, base_dir: &Path) -> Result<Vec<Action>, ConfigError> {
        let actions = match self {
            ScriptStep::Upload { path } => vec![read_upload(base_dir, &path)?],
            ScriptStep::SetMode { mode } => vec![Action::SetMode(mode)],
            ScriptStep::Uppercase => vec![Action::Run(ActionKind::Uppercase)],
            ScriptStep::Lowercase => vec![Action::Run(ActionKind::Lowercase)],
            ScriptStep::Strip => vec![Action::Run(ActionKind::Strip)],
            ScriptStep::Replace { old, new } => vec![
                Action::SetField(Field::ReplaceOld, old),
                Action::SetField(Field::ReplaceNew, new),
                Action::Run(ActionKind::Replace),
            ],
            ScriptStep::Count { needle } => vec![
                Action::SetField(Field::CountSubstring, needle),
                Action::Run(ActionKind::Count),
            ],
            ScriptStep::Save { extra } => vec![
                Action::SetField(Field::AppendExtra, extra),
                Action::Run(ActionKind::Save),
            ],
        };
        Ok(actions)
    }
}

impl SessionScript {
    /// Load a script from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml::from_str(&content).map_err(|source| ConfigError::Yaml {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Flatten the script into the actions to dispatch, starting with the upload.
    pub fn into_actions(self, base_dir: &Path) -> Result<Vec<Action>, ConfigError> {
        let mut actions = vec![read_upload(base_dir, &self.file)?];
        if let Some(mode) = self.mode {
            actions.push(Action::SetMode(mode));
        }
        for step in self.steps {
            actions.extend(step.into_actions(base_dir)?);
        }
        Ok(actions)
    }
}

fn read_upload(base_dir: &Path, path: &Path) -> Result<Action, ConfigError> {
    let full_path = base_dir.join(path);
    let file = UploadedFile::from_path(&full_path).map_err(|source| ConfigError::Io {
        path: full_path,
        source,
    })?;
    Ok(Action::Upload(file))
}
