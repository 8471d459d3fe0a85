//! Hot-reload websocket channel.
//!
//! LIFECYCLE
//! =========
//! 1. Subscribe to the reload broadcast, then upgrade
//! 2. Send `{"type":"connected"}`
//! 3. Forward every `full-reload` event until the browser goes away
//!
//! A socket that falls behind the broadcast buffer gets a single
//! `full-reload` with no paths; reloading covers whatever it missed.

use axum::Json;
use axum::extract::State;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::response::Response;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tracing::{info, warn};

use crate::state::DevState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReloadKind {
    Connected,
    FullReload,
}

/// Message pushed to browsers over the hot-reload socket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReloadEvent {
    #[serde(rename = "type")]
    pub kind: ReloadKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub paths: Vec<String>,
}

impl ReloadEvent {
    #[must_use]
    pub fn connected() -> Self {
        Self { kind: ReloadKind::Connected, paths: Vec::new() }
    }

    #[must_use]
    pub fn full_reload(paths: Vec<String>) -> Self {
        Self { kind: ReloadKind::FullReload, paths }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HmrClientConfig {
    pub client_port: u16,
}

/// `GET /__hmr/config`: tells the browser which port to dial.
pub async fn hmr_config(State(state): State<DevState>) -> Json<HmrClientConfig> {
    Json(HmrClientConfig { client_port: state.config.hmr_client_port() })
}

/// `GET /__hmr`: websocket upgrade.
pub async fn handle_hmr(State(state): State<DevState>, ws: WebSocketUpgrade) -> Response {
    // Subscribe before upgrading so nothing sent after `connected` is missed.
    let rx = state.reload_tx.subscribe();
    ws.on_upgrade(move |socket| run_hmr(socket, rx))
}

async fn run_hmr(mut socket: WebSocket, mut rx: broadcast::Receiver<ReloadEvent>) {
    if send_event(&mut socket, &ReloadEvent::connected()).await.is_err() {
        return;
    }
    info!("hmr: client connected");

    loop {
        tokio::select! {
            msg = socket.recv() => {
                match msg {
                    Some(Ok(Message::Close(_)) | Err(_)) | None => break,
                    Some(Ok(_)) => {}
                }
            }
            event = rx.recv() => {
                let event = match event {
                    Ok(event) => event,
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        warn!(skipped, "hmr: client lagged; forcing full reload");
                        ReloadEvent::full_reload(Vec::new())
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                };
                if send_event(&mut socket, &event).await.is_err() {
                    break;
                }
            }
        }
    }

    info!("hmr: client disconnected");
}

async fn send_event(socket: &mut WebSocket, event: &ReloadEvent) -> Result<(), axum::Error> {
    let text = serde_json::to_string(event).map_err(axum::Error::new)?;
    socket.send(Message::Text(text.into())).await
}

#[cfg(test)]
#[path = "hmr_test.rs"]
mod tests;
