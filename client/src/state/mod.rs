//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`mode`, `page`, `settings`, `specs`,
//! `validation`) so individual components can depend on small focused
//! models. `registry::AppState` bundles one observable `cell::StateCell`
//! per domain.

pub mod cell;
pub mod mode;
pub mod page;
pub mod registry;
pub mod settings;
pub mod specs;
pub mod validation;
