//! Reusable UI components shared by the pages.

pub mod mode_select;
pub mod nav_bar;
pub mod report_card;
