//! Tauri implementations of the stack's platform ports

pub mod clipboard;
pub mod shortcuts;
pub mod tray;

pub use clipboard::TauriClipboard;
pub use shortcuts::TauriShortcuts;
pub use tray::TauriTray;
