//! CLI library components for the reference database browser.

pub mod commands;
pub mod export;
pub mod interactive;
pub mod logging;
pub mod render;
