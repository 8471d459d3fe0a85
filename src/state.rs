//! Shared dev server state.
//!
//! DESIGN
//! ======
//! `DevState` is injected into Axum handlers via the `State` extractor. It
//! holds the effective configuration and the sending half of the reload
//! broadcast; every hot-reload socket subscribes its own receiver.

use std::sync::Arc;

use tokio::sync::broadcast;

use crate::config::DevConfig;
use crate::hmr::ReloadEvent;

/// Reload events retained for slow sockets before they lag.
pub const RELOAD_CHANNEL_CAPACITY: usize = 16;

#[derive(Clone)]
pub struct DevState {
    pub config: Arc<DevConfig>,
    pub reload_tx: broadcast::Sender<ReloadEvent>,
}

impl DevState {
    #[must_use]
    pub fn new(config: DevConfig) -> Self {
        let (reload_tx, _) = broadcast::channel(RELOAD_CHANNEL_CAPACITY);
        Self { config: Arc::new(config), reload_tx }
    }
}
