use futures_util::StreamExt;
use packets::RawPacket;
use thiserror::Error;
use tokio::sync::mpsc;
use tokio_tungstenite::{
    connect_async,
    tungstenite::{self, Message},
};
use tracing::{debug, error, info};

use crate::endpoint::{self, EndpointError};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Endpoint(#[from] EndpointError),
    #[error("websocket connection failed: {0}")]
    Connect(#[from] tungstenite::Error),
}

/// What the bootstrapper observed, streamed to whoever wants to react to
/// the connection beyond the log output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientEvent {
    Connected,
    Packet { packet_type: String, raw: String },
    Invalid { raw: String },
}

/// Opens the one websocket connection for this session and reports every
/// inbound frame.
///
/// A single attempt: no retry, no timeout, no reconnection. The connection
/// lives for the duration of [`Bootstrapper::run`] and is dropped when the
/// peer goes away.
pub struct Bootstrapper {
    endpoint: String,
    trace_packets: bool,
}

impl Bootstrapper {
    /// Build a bootstrapper from the page address the client was served
    /// from. `trace_packets` turns on the per-frame debug log.
    pub fn from_page(page: &str, trace_packets: bool) -> Result<Self, ClientError> {
        Ok(Self {
            endpoint: endpoint::endpoint_url(page)?,
            trace_packets,
        })
    }

    /// The derived websocket address this bootstrapper will connect to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Connect and pump inbound frames until the connection ends.
    pub async fn run(&self, events: mpsc::Sender<ClientEvent>) -> Result<(), ClientError> {
        let (ws, _) = connect_async(self.endpoint.as_str()).await?;
        info!("Websocket connection established!");
        let _ = events.send(ClientEvent::Connected).await;

        let (_write, mut read) = ws.split();
        while let Some(Ok(msg)) = read.next().await {
            match msg {
                Message::Text(text) => {
                    if let Some(event) = classify_frame(text.as_str(), self.trace_packets) {
                        let _ = events.send(event).await;
                    }
                }
                Message::Close(_) => break,
                _ => {}
            }
        }
        Ok(())
    }
}

/// Check an inbound frame for its `packet_type` tag and emit the matching
/// log lines. Frames that are not JSON objects are skipped.
fn classify_frame(text: &str, trace_packets: bool) -> Option<ClientEvent> {
    let raw: RawPacket = serde_json::from_str(text).ok()?;
    let event = match raw.packet_type {
        Some(packet_type) => ClientEvent::Packet {
            packet_type,
            raw: text.to_string(),
        },
        None => {
            error!("Invalid packet recieved: {}", text);
            ClientEvent::Invalid {
                raw: text.to_string(),
            }
        }
    };
    if trace_packets {
        debug!("Packet recieved: {}", text);
    }
    Some(event)
}
