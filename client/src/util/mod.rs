//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser and reactive-runtime concerns from page
//! and component logic.

pub mod persistence;
pub mod reactive;
