//! Session Store
//!
//! Trait and in-memory implementation, plus the periodic cleanup task.

use dashmap::DashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use super::{Session, SessionRef, SessionRefMut, SseSender};
use crate::types::protocol::Implementation;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub total: usize,
    /// Sessions with a live SSE stream.
    pub connected: usize,
    pub disconnected: usize,
}

/// Pluggable session storage.
pub trait SessionStore: Send + Sync {
    /// Return `id_hint` (creating it if unknown) or a fresh UUID when no hint
    /// is given.
    fn get_or_create(&self, id_hint: Option<&str>) -> String;

    fn get(&self, id: &str) -> Option<SessionRef<'_>>;

    fn get_mut(&self, id: &str) -> Option<SessionRefMut<'_>>;

    fn touch(&self, id: &str);

    fn set_initialized(&self, id: &str, client_info: Option<Implementation>);

    fn register_sse(&self, id: &str, tx: SseSender);

    /// Drop sessions idle for longer than `max_idle`. Sessions without a live
    /// stream get a sixth of that. Returns how many were removed.
    fn cleanup(&self, max_idle: Duration) -> usize;

    fn remove(&self, id: &str) -> bool;

    fn stats(&self) -> SessionStats;
}

/// In-memory session store on a `DashMap`.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    sessions: DashMap<String, Session>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for InMemorySessionStore {
    fn get_or_create(&self, id_hint: Option<&str>) -> String {
        let id = id_hint
            .map(str::to_string)
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        let mut is_new = false;
        self.sessions.entry(id.clone()).or_insert_with(|| {
            is_new = true;
            Session::new(id.clone())
        });

        let _span = tracing::info_span!(
            "mcp.session.create",
            mcp.session_id = %id,
            mcp.session.is_new = is_new,
        )
        .entered();
        if is_new {
            tracing::info!("Created new session");
        } else {
            tracing::debug!("Resumed existing session");
        }

        id
    }

    fn get(&self, id: &str) -> Option<SessionRef<'_>> {
        self.sessions.get(id)
    }

    fn get_mut(&self, id: &str) -> Option<SessionRefMut<'_>> {
        self.sessions.get_mut(id)
    }

    fn touch(&self, id: &str) {
        if let Some(mut session) = self.sessions.get_mut(id) {
            session.touch();
        }
    }

    fn set_initialized(&self, id: &str, client_info: Option<Implementation>) {
        if let Some(mut session) = self.sessions.get_mut(id) {
            match &client_info {
                Some(info) => tracing::info!(
                    session_id = %id,
                    client_name = %info.name,
                    client_version = %info.version,
                    "Session initialized"
                ),
                None => tracing::info!(session_id = %id, "Session initialized"),
            }
            session.set_initialized(client_info);
        }
    }

    fn register_sse(&self, id: &str, tx: SseSender) {
        if let Some(mut session) = self.sessions.get_mut(id) {
            session.register_sse(tx);
            tracing::info!(session_id = %id, "Registered SSE connection");
        }
    }

    fn cleanup(&self, max_idle: Duration) -> usize {
        let stale: Vec<String> = self
            .sessions
            .iter()
            .filter(|entry| {
                let session = entry.value();
                let ttl = if session.is_connected() {
                    max_idle
                } else {
                    max_idle / 6
                };
                session.idle_duration() > ttl
            })
            .map(|entry| entry.key().clone())
            .collect();

        let removed = stale
            .iter()
            .filter(|id| self.sessions.remove(id.as_str()).is_some())
            .count();

        if removed > 0 {
            tracing::info!(
                removed,
                remaining = self.sessions.len(),
                "Session cleanup completed"
            );
        }
        removed
    }

    fn remove(&self, id: &str) -> bool {
        let removed = self.sessions.remove(id).is_some();
        if removed {
            tracing::info!(session_id = %id, "Session removed");
        }
        removed
    }

    fn stats(&self) -> SessionStats {
        let connected = self
            .sessions
            .iter()
            .filter(|entry| entry.value().is_connected())
            .count();
        SessionStats {
            total: self.sessions.len(),
            connected,
            disconnected: self.sessions.len() - connected,
        }
    }
}

/// Periodically sweep idle sessions until `cancel` fires.
pub fn spawn_cleanup_task(
    store: Arc<dyn SessionStore>,
    interval: Duration,
    max_idle: Duration,
    cancel: CancellationToken,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    tracing::info!("Session cleanup task shutting down");
                    break;
                }
                _ = ticker.tick() => {
                    store.cleanup(max_idle);
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_unique() {
        let store = InMemorySessionStore::new();
        let a = store.get_or_create(None);
        let b = store.get_or_create(None);
        assert_ne!(a, b);
        assert_eq!(store.stats().total, 2);
    }

    #[test]
    fn test_hint_is_reused() {
        let store = InMemorySessionStore::new();
        assert_eq!(store.get_or_create(Some("stdio")), "stdio");
        assert_eq!(store.get_or_create(Some("stdio")), "stdio");
        assert_eq!(store.stats().total, 1);
    }

    #[test]
    fn test_initialize_records_client() {
        let store = InMemorySessionStore::new();
        let id = store.get_or_create(None);
        store.set_initialized(&id, Some(Implementation::new("cli", "1.0")));

        let session = store.get(&id).unwrap();
        assert!(session.initialized);
        assert_eq!(session.client_info.as_ref().unwrap().name, "cli");
    }

    #[test]
    fn test_cleanup() {
        let store = InMemorySessionStore::new();
        store.get_or_create(None);
        assert_eq!(store.cleanup(Duration::from_secs(3600)), 0);
        assert_eq!(store.cleanup(Duration::ZERO), 1);
        assert_eq!(store.stats().total, 0);
    }

    #[test]
    fn test_remove_reports_presence() {
        let store = InMemorySessionStore::new();
        let id = store.get_or_create(None);
        assert!(store.remove(&id));
        assert!(!store.remove(&id));
    }

    #[tokio::test]
    async fn test_cleanup_task_stops_on_cancel() {
        let store: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());
        let cancel = CancellationToken::new();
        let handle = spawn_cleanup_task(
            store,
            Duration::from_millis(10),
            Duration::from_secs(60),
            cancel.clone(),
        );
        cancel.cancel();
        handle.await.unwrap();
    }
}
