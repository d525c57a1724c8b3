//! Session Management
//!
//! Sessions exist for the HTTP transports: Streamable HTTP keys them by the
//! `Mcp-Session-Id` header, SSE by the `sessionId` query parameter. The stdio
//! transport uses one fixed session.

mod store;

pub use store::{spawn_cleanup_task, InMemorySessionStore, SessionStats, SessionStore};

use axum::response::sse::Event;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

use crate::types::protocol::Implementation;

/// SSE event sender.
pub type SseSender = mpsc::Sender<Result<Event, axum::Error>>;

pub type SessionRef<'a> = dashmap::mapref::one::Ref<'a, String, Session>;
pub type SessionRefMut<'a> = dashmap::mapref::one::RefMut<'a, String, Session>;

/// One MCP session.
#[derive(Debug)]
pub struct Session {
    pub id: String,
    pub created_at: Instant,
    pub last_seen: Instant,
    /// Set by `initialize`.
    pub client_info: Option<Implementation>,
    pub initialized: bool,
    /// Open SSE stream, if any.
    pub tx: Option<SseSender>,
}

impl Session {
    pub fn new(id: String) -> Self {
        let now = Instant::now();
        Self {
            id,
            created_at: now,
            last_seen: now,
            client_info: None,
            initialized: false,
            tx: None,
        }
    }

    pub fn is_connected(&self) -> bool {
        self.tx.as_ref().map(|tx| !tx.is_closed()).unwrap_or(false)
    }

    pub fn idle_duration(&self) -> Duration {
        self.last_seen.elapsed()
    }

    pub fn touch(&mut self) {
        self.last_seen = Instant::now();
    }

    pub fn set_initialized(&mut self, client_info: Option<Implementation>) {
        self.initialized = true;
        self.client_info = client_info;
        self.touch();
    }

    pub fn register_sse(&mut self, tx: SseSender) {
        self.tx = Some(tx);
        self.touch();
    }
}
