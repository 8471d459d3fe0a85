//! Top-level pages selected by the nav bar.

pub mod settings;
pub mod specifications;
pub mod validation;
