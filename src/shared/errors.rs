//! Error type shared by the clipboard stack and its platform adapters
//!
//! Every failure here is recoverable: callers log it and carry on, so the
//! variants only need to say which collaborator failed and why.

use thiserror::Error;
use serde::Serialize;

/// Clipboard stack errors
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum StackError {
    /// Reading or writing the system clipboard failed
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// A global shortcut could not be parsed, registered or released
    #[error("Shortcut error: {0}")]
    Shortcut(String),

    /// The tray menu could not be built from its template
    #[error("Menu error: {0}")]
    Menu(String),

    /// Tray icon creation or lookup failed
    #[error("Tray error: {0}")]
    Tray(String),
}

impl From<tauri::Error> for StackError {
    fn from(err: tauri::Error) -> Self {
        StackError::Tray(err.to_string())
    }
}

impl From<image::ImageError> for StackError {
    fn from(err: image::ImageError) -> Self {
        StackError::Tray(format!("Icon decode failed: {}", err))
    }
}

impl From<tauri_plugin_global_shortcut::Error> for StackError {
    fn from(err: tauri_plugin_global_shortcut::Error) -> Self {
        StackError::Shortcut(err.to_string())
    }
}

impl From<tauri_plugin_clipboard_manager::Error> for StackError {
    fn from(err: tauri_plugin_clipboard_manager::Error) -> Self {
        StackError::Clipboard(err.to_string())
    }
}

// Helper type alias for stack results
pub type StackResult<T> = Result<T, StackError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_collaborator() {
        let err = StackError::Shortcut("CmdOrCtrl+Alt+1 already bound".to_string());
        assert_eq!(err.to_string(), "Shortcut error: CmdOrCtrl+Alt+1 already bound");
    }

    #[test]
    fn test_serializes_tagged() {
        let err = StackError::Clipboard("no text".to_string());
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["type"], "Clipboard");
        assert_eq!(json["message"], "no text");
    }
}
