// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use super::{Action, ActionOutcome, Session};
use crate::config::AppConfig;
use crate::observability::messages::{session::*, StructuredLog};
use crate::render::View;
use crate::traits::{Clock, SystemClock};

/// Identifies one user's session (one browser tab, one connection).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct SessionId(u64);

impl SessionId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "session-{}", self.0)
    }
}

/// Owns every live session. Sessions share configuration but never state.
pub struct SessionRegistry {
    config: Arc<AppConfig>,
    clock: Arc<dyn Clock>,
    sessions: HashMap<SessionId, Session>,
    next_id: u64,
}

impl SessionRegistry {
    pub fn new(config: AppConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    pub fn with_clock(config: AppConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            config: Arc::new(config),
            clock,
            sessions: HashMap::new(),
            next_id: 1,
        }
    }

    /// Start a fresh session in the NoFile state
    pub fn open(&mut self) -> SessionId {
        let id = SessionId(self.next_id);
        self.next_id += 1;

        let session = Session::with_clock(id, Arc::clone(&self.config), Arc::clone(&self.clock));
        self.sessions.insert(id, session);

        SessionOpened {
            session_id: id.as_u64(),
            active_sessions: self.sessions.len(),
        }
        .log();
        id
    }

    pub fn get(&self, id: SessionId) -> Option<&Session> {
        self.sessions.get(&id)
    }

    /// Route an action to one session. `None` if the session does not exist.
    pub fn dispatch(&mut self, id: SessionId, action: Action) -> Option<ActionOutcome> {
        self.sessions.get_mut(&id).map(|session| session.dispatch(action))
    }

    pub fn view(&self, id: SessionId) -> Option<View> {
        self.sessions.get(&id).map(Session::view)
    }

    /// End a session, dropping its buffer. Returns whether it existed.
    pub fn close(&mut self, id: SessionId) -> bool {
        let existed = self.sessions.remove(&id).is_some();
        if existed {
            SessionClosed {
                session_id: id.as_u64(),
                active_sessions: self.sessions.len(),
            }
            .log();
        }
        existed
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{ActionKind, UploadedFile};

    #[test]
    fn test_sessions_are_isolated() {
        let mut registry = SessionRegistry::new(AppConfig::default());
        let first = registry.open();
        let second = registry.open();
        assert_ne!(first, second);

        registry.dispatch(first, Action::Upload(UploadedFile::new("a.txt", "hello")));
        registry.dispatch(second, Action::Upload(UploadedFile::new("a.txt", "world")));
        registry.dispatch(first, Action::Run(ActionKind::Uppercase));

        assert_eq!(registry.get(first).unwrap().buffer(), Some("HELLO"));
        assert_eq!(registry.get(second).unwrap().buffer(), Some("world"));
    }

    #[test]
    fn test_close_drops_session() {
        let mut registry = SessionRegistry::new(AppConfig::default());
        let id = registry.open();
        assert_eq!(registry.len(), 1);

        assert!(registry.close(id));
        assert!(!registry.close(id));
        assert!(registry.is_empty());
        assert!(registry.dispatch(id, Action::Run(ActionKind::Strip)).is_none());
        assert!(registry.view(id).is_none());
    }

    #[test]
    fn test_ids_are_not_reused() {
        let mut registry = SessionRegistry::new(AppConfig::default());
        let first = registry.open();
        registry.close(first);
        let second = registry.open();
        assert_ne!(first, second);
        assert_eq!(second.to_string(), "session-2");
    }
}
