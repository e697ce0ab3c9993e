use tauri::AppHandle;
use tauri_plugin_clipboard_manager::ClipboardExt;

use crate::core::ports::ClipboardAccess;
use crate::shared::StackResult;

/// System clipboard through the clipboard-manager plugin
pub struct TauriClipboard {
    app: AppHandle,
}

impl TauriClipboard {
    pub fn new(app: AppHandle) -> Self {
        Self { app }
    }
}

impl ClipboardAccess for TauriClipboard {
    fn read_text(&self) -> StackResult<String> {
        Ok(self.app.clipboard().read_text()?)
    }

    fn write_text(&self, text: &str) -> StackResult<()> {
        Ok(self.app.clipboard().write_text(text)?)
    }
}
