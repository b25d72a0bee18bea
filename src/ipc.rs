//! Wire types for the JSON Lines bridge between the controller and a
//! rendering surface.
//!
//! Every line is one JSON object. Requests are tagged by `type`; outgoing
//! lines are either a reply envelope or a notification envelope, both
//! carrying the protocol version.

use serde::{Deserialize, Serialize};

use crate::dashboard::DashboardEvent;
use crate::layout::{BreakpointId, LayoutItem};

/// Bridge protocol version, included in every outgoing line.
pub const IPC_VERSION: u32 = 1;

/// Request from the rendering surface.
///
/// `{"type": "resize", "width": 1024}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BridgeRequest {
    /// The viewport width changed.
    Resize {
        /// New viewport width in pixels.
        width: u32,
    },
    /// The user finished a drag or resize on one breakpoint.
    LayoutChange {
        /// Breakpoint the layout belongs to.
        breakpoint: BreakpointId,
        /// The complete layout for that breakpoint.
        layout: Vec<LayoutItem>,
    },
    /// Discard all edits.
    Reset,
    /// Ask for all current layouts.
    Snapshot,
}

/// Reply envelope, one per request line.
///
/// Sent as a single JSON line: `{"version": 1, "ok": true, ...}\n`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BridgeResponse {
    /// Protocol version.
    pub version: u32,
    /// Whether the request succeeded.
    pub ok: bool,
    /// Error message when `ok` is false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Request-specific payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl BridgeResponse {
    /// Creates a success response with optional data payload.
    pub fn success(data: Option<serde_json::Value>) -> Self {
        Self {
            version: IPC_VERSION,
            ok: true,
            error: None,
            data,
        }
    }

    /// Creates an error response with the given message.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            version: IPC_VERSION,
            ok: false,
            error: Some(message.into()),
            data: None,
        }
    }

    /// Serializes to a JSON line (with trailing newline).
    pub fn to_json_line(&self) -> serde_json::Result<String> {
        to_json_line(self)
    }
}

/// Notification envelope wrapping a [`DashboardEvent`].
///
/// `{"version": 1, "event": {"type": "breakpoint_change", "breakpoint": "md"}}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BridgeNotification<'a> {
    /// Protocol version.
    pub version: u32,
    /// The event being reported.
    pub event: &'a DashboardEvent,
}

impl<'a> BridgeNotification<'a> {
    /// Wraps an event.
    pub fn new(event: &'a DashboardEvent) -> Self {
        Self {
            version: IPC_VERSION,
            event,
        }
    }

    /// Serializes to a JSON line (with trailing newline).
    pub fn to_json_line(&self) -> serde_json::Result<String> {
        to_json_line(self)
    }
}

fn to_json_line<T: Serialize>(value: &T) -> serde_json::Result<String> {
    let mut json = serde_json::to_string(value)?;
    json.push('\n');
    Ok(json)
}
