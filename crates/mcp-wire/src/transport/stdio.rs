//! stdio Transport
//!
//! One JSON-RPC message per line in, one reply per line out. Notifications
//! get no reply. The loop ends at EOF.

use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};

use super::McpState;
use crate::Handler;

/// Session id used for the single stdio client.
pub const STDIO_SESSION: &str = "stdio";

/// Serve newline-delimited JSON-RPC until `reader` reaches EOF.
///
/// Nothing but replies is written to `writer`; logging must go elsewhere.
pub async fn serve_stdio<H, R, W>(
    state: Arc<McpState<H>>,
    reader: R,
    mut writer: W,
) -> std::io::Result<()>
where
    H: Handler,
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let session_id = state.sessions.get_or_create(Some(STDIO_SESSION));
    let mut lines = BufReader::new(reader).lines();

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let Some(reply) = crate::protocol::handle_text(&state, &session_id, line).await else {
            continue;
        };

        let mut encoded = serde_json::to_vec(&reply)?;
        encoded.push(b'\n');
        writer.write_all(&encoded).await?;
        writer.flush().await?;
    }

    tracing::info!("stdin closed, stopping stdio transport");
    state.sessions.remove(&session_id);
    Ok(())
}
