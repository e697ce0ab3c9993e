use tauri::AppHandle;
use tauri_plugin_global_shortcut::{GlobalShortcutExt, Shortcut, ShortcutState};

use crate::core::clipboard::ClipboardMonitor;
use crate::core::ports::ShortcutRegistry;
use crate::shared::{StackError, StackResult};

/// Global shortcuts through the global-shortcut plugin.
///
/// A pressed shortcut only enqueues a selection on the monitor; the slot is
/// resolved against the history when the monitor handles it.
pub struct TauriShortcuts {
    app: AppHandle,
    monitor: ClipboardMonitor,
}

impl TauriShortcuts {
    pub fn new(app: AppHandle, monitor: ClipboardMonitor) -> Self {
        Self { app, monitor }
    }
}

impl ShortcutRegistry for TauriShortcuts {
    fn register(&self, combo: &str, slot: usize) -> StackResult<()> {
        let shortcut = combo
            .parse::<Shortcut>()
            .map_err(|e| StackError::Shortcut(format!("Invalid shortcut '{}': {}", combo, e)))?;

        let monitor = self.monitor.clone();
        self.app
            .global_shortcut()
            .on_shortcut(shortcut, move |_app, _shortcut, event| {
                // Handlers fire on release too
                if event.state() == ShortcutState::Pressed {
                    monitor.select(slot);
                }
            })?;
        Ok(())
    }

    fn unregister_all(&self) -> StackResult<()> {
        release_all(&self.app)
    }
}

/// Release every global shortcut held by the app
pub fn release_all(app: &AppHandle) -> StackResult<()> {
    Ok(app.global_shortcut().unregister_all()?)
}
