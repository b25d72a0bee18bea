//! JSON Lines bridge between a [`Dashboard`] and an external rendering
//! surface.
//!
//! Requests are read one line at a time and each is handled to completion
//! before the next line is read. For every request the bridge first writes
//! the notifications the request produced, then exactly one reply. Malformed
//! lines get an error reply and the session continues; EOF ends it.

use serde_json::json;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::broadcast::{self, error::TryRecvError};

use crate::dashboard::{Dashboard, DashboardEvent};
use crate::ipc::{BridgeNotification, BridgeRequest, BridgeResponse};

/// Runs the bridge over stdin and stdout until stdin closes.
pub async fn run_stdio(dashboard: &mut Dashboard) -> std::io::Result<()> {
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();
    run(dashboard, stdin, stdout).await
}

/// Runs the bridge over arbitrary line-oriented streams until `reader`
/// reaches EOF.
pub async fn run<R, W>(dashboard: &mut Dashboard, reader: R, mut writer: W) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut events = dashboard.subscribe();
    let mut lines = reader.lines();
    let mut handled = 0usize;

    tracing::info!("Bridge session started");
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let response = handle_line(dashboard, &line);
        handled += 1;

        for event in drain(&mut events) {
            write_line(&mut writer, BridgeNotification::new(&event).to_json_line()).await?;
        }
        write_line(&mut writer, response.to_json_line()).await?;
        writer.flush().await?;
    }
    tracing::info!(requests = handled, "Bridge session ended");
    Ok(())
}

/// Parses and executes one request line.
pub fn handle_line(dashboard: &mut Dashboard, line: &str) -> BridgeResponse {
    let request: BridgeRequest = match serde_json::from_str(line) {
        Ok(request) => request,
        Err(e) => {
            tracing::warn!("Malformed bridge request: {e}");
            return BridgeResponse::error(format!("malformed request: {e}"));
        }
    };
    tracing::trace!(?request, "Bridge request");
    handle_request(dashboard, request)
}

/// Executes one parsed request.
pub fn handle_request(dashboard: &mut Dashboard, request: BridgeRequest) -> BridgeResponse {
    match request {
        BridgeRequest::Resize { width } => {
            let breakpoint = dashboard.viewport_resized(width);
            let columns = dashboard.store().breakpoints().columns(breakpoint);
            BridgeResponse::success(Some(json!({
                "breakpoint": breakpoint,
                "columns": columns,
            })))
        }
        BridgeRequest::LayoutChange { breakpoint, layout } => {
            match dashboard.apply_edit(breakpoint, layout) {
                Ok(()) => BridgeResponse::success(None),
                Err(e) => BridgeResponse::error(e.to_string()),
            }
        }
        BridgeRequest::Reset => {
            dashboard.reset();
            BridgeResponse::success(None)
        }
        BridgeRequest::Snapshot => match serde_json::to_value(dashboard.snapshot()) {
            Ok(layouts) => BridgeResponse::success(Some(layouts)),
            Err(e) => BridgeResponse::error(format!("failed to serialize layouts: {e}")),
        },
    }
}

fn drain(events: &mut broadcast::Receiver<DashboardEvent>) -> Vec<DashboardEvent> {
    let mut drained = Vec::new();
    loop {
        match events.try_recv() {
            Ok(event) => drained.push(event),
            Err(TryRecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "Bridge dropped dashboard events");
            }
            Err(TryRecvError::Empty | TryRecvError::Closed) => return drained,
        }
    }
}

async fn write_line<W>(writer: &mut W, line: serde_json::Result<String>) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let line = line.map_err(std::io::Error::other)?;
    writer.write_all(line.as_bytes()).await
}
