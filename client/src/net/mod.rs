//! Networking modules for the validation backend and the dev reload channel.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls, `hot_reload` follows the dev server's reload
//! socket, and `types` defines the backend wire schema.

pub mod api;
pub mod hot_reload;
pub mod types;
