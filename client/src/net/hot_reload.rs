//! Browser side of the dev server's reload channel.
//!
//! LIFECYCLE
//! =========
//! 1. Fetch `/__hmr/config` from the page origin to learn the client port.
//! 2. Dial `ws(s)://<page host>:<clientPort>/__hmr`.
//! 3. Reload the page on `full-reload`; ignore everything else.
//! 4. On disconnect, back off (1s doubling to 10s) and go back to step 1.
//!
//! Only compiled into the hydrate build; the parsing helpers are plain
//! functions so they can be tested natively.

#[cfg(test)]
#[path = "hot_reload_test.rs"]
mod hot_reload_test;

use serde::Deserialize;

pub const HMR_PATH: &str = "/__hmr";
pub const HMR_CONFIG_PATH: &str = "/__hmr/config";
pub const INITIAL_BACKOFF_MS: u32 = 1000;
pub const MAX_BACKOFF_MS: u32 = 10_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HmrClientConfig {
    pub client_port: u16,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReloadAction {
    Reload,
    Ignore,
}

#[derive(Deserialize)]
struct ReloadMessage {
    #[serde(rename = "type")]
    kind: String,
}

/// Build the socket URL from the page's protocol and hostname.
pub fn socket_url(page_protocol: &str, hostname: &str, client_port: u16) -> String {
    let scheme = if page_protocol.starts_with("https") { "wss" } else { "ws" };
    format!("{scheme}://{hostname}:{client_port}{HMR_PATH}")
}

/// Decide what to do with one text frame. Unparseable frames are ignored.
pub fn classify(text: &str) -> ReloadAction {
    match serde_json::from_str::<ReloadMessage>(text) {
        Ok(message) if message.kind == "full-reload" => ReloadAction::Reload,
        _ => ReloadAction::Ignore,
    }
}

pub fn next_backoff(current_ms: u32) -> u32 {
    current_ms.saturating_mul(2).min(MAX_BACKOFF_MS)
}

/// Start the reload loop on the current page.
#[cfg(feature = "hydrate")]
pub fn spawn_hot_reload() {
    leptos::task::spawn_local(hot_reload_loop());
}

#[cfg(feature = "hydrate")]
async fn hot_reload_loop() {
    let mut backoff_ms = INITIAL_BACKOFF_MS;

    loop {
        match connect_and_watch().await {
            Ok(()) => log::info!("hot reload channel closed"),
            Err(e) => log::debug!("hot reload unavailable: {e}"),
        }
        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(backoff_ms))).await;
        backoff_ms = next_backoff(backoff_ms);
    }
}

#[cfg(feature = "hydrate")]
async fn connect_and_watch() -> Result<(), String> {
    use futures::StreamExt;
    use gloo_net::websocket::Message;
    use gloo_net::websocket::futures::WebSocket;

    let resp = gloo_net::http::Request::get(HMR_CONFIG_PATH).send().await.map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(format!("{HMR_CONFIG_PATH} returned {}", resp.status()));
    }
    let config: HmrClientConfig = resp.json().await.map_err(|e| e.to_string())?;

    let location = web_sys::window().ok_or("no window")?.location();
    let protocol = location.protocol().unwrap_or_default();
    let hostname = location.hostname().unwrap_or_else(|_| "localhost".to_owned());
    let url = socket_url(&protocol, &hostname, config.client_port);

    let mut ws = WebSocket::open(&url).map_err(|e| e.to_string())?;
    while let Some(msg) = ws.next().await {
        match msg {
            Ok(Message::Text(text)) => {
                if classify(&text) == ReloadAction::Reload {
                    location.reload().map_err(|_| "reload refused".to_owned())?;
                    return Ok(());
                }
            }
            Ok(Message::Bytes(_)) => {}
            Err(e) => return Err(e.to_string()),
        }
    }
    Ok(())
}
