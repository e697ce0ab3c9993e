//! Platform-independent clipboard stack: history, polling, presentation

pub mod clipboard;
pub mod ports;
pub mod tray;
