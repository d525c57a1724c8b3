//! `GET /sse`: the downstream half of the SSE transport.
//!
//! A client opens the stream, learns from the first event where to POST its
//! requests, and reads every reply back off the same stream. The upstream
//! half lives in [`super::message`].

use axum::{
    extract::{Query, State},
    response::sse::{Event, KeepAlive, Sse},
};
use futures::stream::Stream;
use serde::Deserialize;
use std::convert::Infallible;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;
use tokio_stream::StreamExt;

use super::McpState;
use crate::Handler;

const KEEP_ALIVE: Duration = Duration::from_secs(30);

/// Replies queued per stream before `POST /message` waits.
const STREAM_BUFFER: usize = 32;

#[derive(Debug, Deserialize)]
pub struct SseParams {
    /// Reattach to an existing session instead of starting a new one.
    #[serde(rename = "sessionId")]
    pub session_id: Option<String>,
}

/// The `endpoint` event that opens every stream.
fn endpoint_event(session_id: &str) -> Event {
    Event::default()
        .event("endpoint")
        .data(format!("/message?sessionId={}", session_id))
}

/// Open a stream bound to a session.
///
/// Emits `endpoint` first, then one `message` event per reply. A comment
/// line keeps idle connections open.
#[tracing::instrument(skip(state, params), fields(session_id = tracing::field::Empty))]
pub async fn sse_handler<H: Handler>(
    State(state): State<Arc<McpState<H>>>,
    Query(params): Query<SseParams>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let session_id = state.sessions.get_or_create(params.session_id.as_deref());
    tracing::Span::current().record("session_id", session_id.as_str());

    let (tx, rx) = mpsc::channel(STREAM_BUFFER);
    // Queued before the sender is shared, so it is always the first event.
    if tx.try_send(Ok(endpoint_event(&session_id))).is_err() {
        tracing::warn!(session_id = %session_id, "Could not queue endpoint event");
    }
    state.sessions.register_sse(&session_id, tx);
    tracing::info!(session_id = %session_id, "SSE stream opened");

    let events = ReceiverStream::new(rx).map(|item: Result<Event, axum::Error>| {
        Ok(item.unwrap_or_else(|e| Event::default().event("error").data(e.to_string())))
    });

    Sse::new(events).keep_alive(KeepAlive::new().interval(KEEP_ALIVE).text("ping"))
}
