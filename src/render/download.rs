// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Serialize, Serializer};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::consts::DOWNLOAD_MEDIA_TYPE;

/// A derived copy of the buffer offered for download.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DownloadArtifact {
    pub file_name: String,
    pub media_type: &'static str,
    #[serde(rename = "data_url", serialize_with = "serialize_data_url")]
    content: String,
}

impl DownloadArtifact {
    pub fn new(file_name: impl Into<String>, content: String) -> Self {
        Self {
            file_name: file_name.into(),
            media_type: DOWNLOAD_MEDIA_TYPE,
            content,
        }
    }

    pub fn text(&self) -> &str {
        &self.content
    }

    /// UTF-8 encoding of the text, as served to the browser
    pub fn bytes(&self) -> &[u8] {
        self.content.as_bytes()
    }

    /// `data:` URL suitable for an `<a download>` link
    pub fn to_data_url(&self) -> String {
        data_url(self.media_type, self.bytes())
    }

    /// Write the artifact into `dir` under its suggested name
    pub fn save_to(&self, dir: &Path) -> io::Result<PathBuf> {
        let path = dir.join(&self.file_name);
        fs::write(&path, self.bytes())?;
        Ok(path)
    }
}

fn data_url(media_type: &str, bytes: &[u8]) -> String {
    format!("data:{};charset=utf-8;base64,{}", media_type, STANDARD.encode(bytes))
}

fn serialize_data_url<S: Serializer>(content: &str, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&data_url(DOWNLOAD_MEDIA_TYPE, content.as_bytes()))
}
