// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Session controller.
//!
//! A [`Session`] owns one user's buffer, echoed field values and mode. Every
//! UI event goes through [`Session::dispatch`], which runs to completion
//! before returning; sessions are never shared, so no synchronization is
//! involved. Errors are converted to status messages here and never escape.

mod dispatch;
mod registry;
mod state;


use std::sync::Arc;
use std::time::Instant;

pub use dispatch::{Action, ActionContext, ActionKind, ActionOutcome, Handler, DISPATCH_TABLE};
pub use registry::{SessionId, SessionRegistry};
pub use state::{Field, FieldEchoState, LoadedFile, Mode, SessionState, UploadedFile};

use crate::config::AppConfig;
use crate::errors::SessionError;
use crate::observability::messages::{operation::*, session::*, StructuredLog};
use crate::render::{DownloadArtifact, Preview, StatsLine, StatusMessage, View, APP_TITLE};
use crate::traits::{Clock, SystemClock};

pub struct Session {
    id: SessionId,
    config: Arc<AppConfig>,
    clock: Arc<dyn Clock>,
    state: SessionState,
    fields: FieldEchoState,
    mode: Mode,
    last_status: Option<StatusMessage>,
    pending_download: Option<DownloadArtifact>,
}

impl Session {
    pub fn new(id: SessionId, config: Arc<AppConfig>) -> Self {
        Self::with_clock(id, config, Arc::new(SystemClock))
    }

    pub fn with_clock(id: SessionId, config: Arc<AppConfig>, clock: Arc<dyn Clock>) -> Self {
        let mode = config.default_mode;
        Self {
            id,
            config,
            clock,
            state: SessionState::NoFile,
            fields: FieldEchoState::default(),
            mode,
            last_status: None,
            pending_download: None,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn fields(&self) -> &FieldEchoState {
        &self.fields
    }

    /// The current working text, if a file is loaded
    pub fn buffer(&self) -> Option<&str> {
        self.state.loaded().map(|loaded| loaded.buffer.as_str())
    }

    pub fn file_name(&self) -> Option<&str> {
        self.state.loaded().map(|loaded| loaded.file_name.as_str())
    }

    /// Handle one UI event to completion.
    ///
    /// The returned outcome is also what the next [`Session::view`] shows.
    pub fn dispatch(&mut self, action: Action) -> ActionOutcome {
        let action_name = action.name();
        let input_size = self.buffer().map_or(0, str::len);

        let dispatched = ActionDispatched {
            session_id: self.id.as_u64(),
            action: action_name,
            buffer_size: input_size,
        };
        let span = dispatched.span("dispatch");
        let _guard = span.enter();
        dispatched.log();

        let start_time = Instant::now();
        self.pending_download = None;

        let result = match action {
            Action::Upload(file) => self.upload(file),
            Action::SetMode(mode) => {
                self.set_mode(mode);
                Ok(ActionOutcome::silent())
            }
            Action::SetField(field, value) => {
                self.fields.set(field, value);
                Ok(ActionOutcome::silent())
            }
            Action::Run(kind) => self.run(kind),
        };

        let outcome = match result {
            Ok(outcome) => {
                ActionCompleted {
                    session_id: self.id.as_u64(),
                    action: action_name,
                    input_size,
                    output_size: self.buffer().map_or(0, str::len),
                    duration: start_time.elapsed(),
                }
                .log();
                outcome
            }
            Err(err) => {
                ActionRejected {
                    session_id: self.id.as_u64(),
                    action: action_name,
                    kind: err.kind(),
                    reason: &err.to_string(),
                }
                .log();
                ActionOutcome::from(&err)
            }
        };

        if let Some(artifact) = &outcome.artifact {
            ArtifactProduced {
                session_id: self.id.as_u64(),
                file_name: &artifact.file_name,
                size_bytes: artifact.bytes().len(),
            }
            .log();
        }

        self.last_status = outcome.status.clone();
        self.pending_download = outcome.artifact.clone();
        outcome
    }

    /// Render the current state. Stats are recomputed from the buffer every time.
    pub fn view(&self) -> View {
        let loaded = self.state.loaded();
        let status = self.last_status.clone().or_else(|| {
            loaded.is_none().then(|| {
                StatusMessage::from(&SessionError::NoFileLoaded {
                    allowed: self.config.extension().to_string(),
                })
            })
        });

        View {
            title: APP_TITLE,
            file_name: loaded.map(|l| l.file_name.clone()),
            mode: self.mode,
            save_enabled: self.mode == Mode::Append,
            fields: self.fields.clone(),
            preview: loaded.map(|l| Preview::from_text(&l.buffer, self.config.preview_lines)),
            stats: loaded.map(|l| StatsLine::from_text(&l.buffer)),
            status,
            download: self.pending_download.clone(),
        }
    }

    fn upload(&mut self, file: UploadedFile) -> Result<ActionOutcome, SessionError> {
        let allowed = self.config.extension();
        if !file.has_extension(allowed) {
            return Err(SessionError::UnsupportedExtension {
                file_name: file.name().to_string(),
                allowed: allowed.to_string(),
            });
        }

        if self.file_name() == Some(file.name()) {
            UploadUnchanged {
                session_id: self.id.as_u64(),
                file_name: file.name(),
            }
            .log();
            return Ok(ActionOutcome::silent());
        }

        let buffer = file.decode()?;
        UploadAccepted {
            session_id: self.id.as_u64(),
            file_name: file.name(),
            size_bytes: file.bytes().len(),
        }
        .log();

        self.state = SessionState::FileLoaded(LoadedFile {
            file_name: file.name().to_string(),
            buffer,
        });
        self.fields = FieldEchoState::default();

        Ok(ActionOutcome::with_status(StatusMessage::success(format!(
            "Loaded '{}'.",
            file.name()
        ))))
    }

    fn set_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            ModeChanged {
                session_id: self.id.as_u64(),
                mode: &mode,
            }
            .log();
        }
        self.mode = mode;
    }

    fn run(&mut self, kind: ActionKind) -> Result<ActionOutcome, SessionError> {
        let SessionState::FileLoaded(loaded) = &mut self.state else {
            return Err(SessionError::NoFileLoaded {
                allowed: self.config.extension().to_string(),
            });
        };

        let ctx = ActionContext {
            fields: &self.fields,
            mode: self.mode,
            config: &self.config,
            clock: self.clock.as_ref(),
        };
        (kind.handler())(loaded, &ctx)
    }
}
