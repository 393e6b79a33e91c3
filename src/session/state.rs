// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

use crate::errors::SessionError;

/// Whether the session may produce a downloadable copy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    #[default]
    Read,
    Append,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Read => write!(f, "Read"),
            Mode::Append => write!(f, "Append"),
        }
    }
}

impl std::str::FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "read" => Ok(Mode::Read),
            "append" => Ok(Mode::Append),
            other => Err(format!("Unknown mode: '{}' (expected read or append)", other)),
        }
    }
}

/// A file as received from the upload control. Never modified after receipt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    name: String,
    bytes: Vec<u8>,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    /// Read a file from disk, keeping only its final path component as the name
    pub fn from_path<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        Ok(Self::new(name, bytes))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Case-insensitive check of the final extension, e.g. "notes.TXT" has "txt"
    pub fn has_extension(&self, allowed: &str) -> bool {
        Path::new(&self.name)
            .extension()
            .map(|ext| ext.to_string_lossy().eq_ignore_ascii_case(allowed))
            .unwrap_or(false)
    }

    /// Strict UTF-8 decode of the raw bytes
    pub fn decode(&self) -> Result<String, SessionError> {
        String::from_utf8(self.bytes.clone()).map_err(|e| SessionError::Decode {
            file_name: self.name.clone(),
            reason: e.utf8_error().to_string(),
        })
    }
}

/// One of the free-text inputs whose value is echoed back across interactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    ReplaceOld,
    ReplaceNew,
    CountSubstring,
    AppendExtra,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::ReplaceOld => "replace_old",
            Field::ReplaceNew => "replace_new",
            Field::CountSubstring => "count_substring",
            Field::AppendExtra => "append_extra",
        }
    }
}

/// Last-entered values of the input fields. Reset whenever a new file loads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldEchoState {
    pub replace_old: String,
    pub replace_new: String,
    pub count_substring: String,
    pub append_extra: String,
}

impl FieldEchoState {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::ReplaceOld => &self.replace_old,
            Field::ReplaceNew => &self.replace_new,
            Field::CountSubstring => &self.count_substring,
            Field::AppendExtra => &self.append_extra,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::ReplaceOld => self.replace_old = value,
            Field::ReplaceNew => self.replace_new = value,
            Field::CountSubstring => self.count_substring = value,
            Field::AppendExtra => self.append_extra = value,
        }
    }
}

/// The working text for a loaded file, and the name it was uploaded under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedFile {
    pub file_name: String,
    pub buffer: String,
}

/// Session controller states
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    NoFile,
    FileLoaded(LoadedFile),
}

impl SessionState {
    pub fn loaded(&self) -> Option<&LoadedFile> {
        match self {
            SessionState::NoFile => None,
            SessionState::FileLoaded(loaded) => Some(loaded),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_check_is_case_insensitive() {
        assert!(UploadedFile::new("notes.txt", "").has_extension("txt"));
        assert!(UploadedFile::new("NOTES.TXT", "").has_extension("txt"));
        assert!(UploadedFile::new("archive.tar.Txt", "").has_extension("txt"));
        assert!(!UploadedFile::new("notes.md", "").has_extension("txt"));
        assert!(!UploadedFile::new("txt", "").has_extension("txt"));
        assert!(!UploadedFile::new("notes.txt.bak", "").has_extension("txt"));
    }

    #[test]
    fn test_decode_rejects_invalid_utf8() {
        let file = UploadedFile::new("bad.txt", vec![0x66, 0x6f, 0xff, 0x6f]);
        let err = file.decode().unwrap_err();
        assert!(matches!(err, SessionError::Decode { ref file_name, .. } if file_name == "bad.txt"));
    }

    #[test]
    fn test_decode_accepts_utf8() {
        let file = UploadedFile::new("ok.txt", "héllo".as_bytes());
        assert_eq!(file.decode().unwrap(), "héllo");
    }

    #[test]
    fn test_from_path_keeps_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("draft.txt");
        std::fs::write(&path, "content").unwrap();

        let file = UploadedFile::from_path(&path).unwrap();
        assert_eq!(file.name(), "draft.txt");
        assert_eq!(file.bytes(), b"content");
    }

    #[test]
    fn test_field_echo_roundtrip() {
        let mut fields = FieldEchoState::default();
        fields.set(Field::ReplaceOld, "cat".to_string());
        fields.set(Field::AppendExtra, "tail".to_string());
        assert_eq!(fields.get(Field::ReplaceOld), "cat");
        assert_eq!(fields.get(Field::ReplaceNew), "");
        assert_eq!(fields.get(Field::AppendExtra), "tail");
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("Append".parse::<Mode>(), Ok(Mode::Append));
        assert_eq!("read".parse::<Mode>(), Ok(Mode::Read));
        assert!("write".parse::<Mode>().is_err());
        assert_eq!(Mode::default(), Mode::Read);
    }
}
