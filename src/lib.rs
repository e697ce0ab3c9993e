pub mod core;
pub mod shared;
mod system;

use std::sync::Arc;

use tauri::{Manager, RunEvent};

use crate::core::clipboard::{monitor, ClipStack, ClipboardMonitor};
use crate::shared::logging;
use crate::shared::StackSettings;
use crate::system::{TauriClipboard, TauriShortcuts, TauriTray};

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    let settings = StackSettings::default();

    tauri::Builder::default()
        .plugin(logging::get_builder().build())
        .plugin(tauri_plugin_global_shortcut::Builder::new().build())
        .plugin(tauri_plugin_clipboard_manager::init())
        .setup(move |app| {
            match serde_json::to_string(&settings) {
                Ok(json) => log::info!("[Setup] Settings: {}", json),
                Err(e) => log::warn!("[Setup] Could not serialize settings: {}", e),
            }

            // Tray first: the monitor's initial sync replaces its menu
            system::tray::create(app.handle())?;

            let handle = app.handle().clone();
            let (clipboard_monitor, commands) = ClipboardMonitor::channel();
            let stack = ClipStack::new(
                settings.clone(),
                Arc::new(TauriClipboard::new(handle.clone())),
                Arc::new(TauriShortcuts::new(handle.clone(), clipboard_monitor.clone())),
                Arc::new(TauriTray::new(handle)),
            );

            // Menu clicks reach the monitor through app state
            app.manage(clipboard_monitor);

            tauri::async_runtime::spawn(monitor::run(stack, commands, settings.poll_interval()));

            log::info!("[Setup] Paste Stack initialized");
            Ok(())
        })
        .build(tauri::generate_context!())
        .unwrap_or_else(|e| {
            eprintln!("FATAL: Failed to start Tauri application: {}", e);
            std::process::exit(1);
        })
        .run(|app, event| {
            if let RunEvent::Exit = event {
                // Shortcuts are OS-wide; never leave them bound after exit
                match system::shortcuts::release_all(app) {
                    Ok(()) => log::info!("[Shortcuts] Released all shortcuts"),
                    Err(e) => log::error!("[Shortcuts] Failed to release shortcuts on exit: {}", e),
                }
            }
        });
}
