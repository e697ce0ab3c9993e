use log::LevelFilter;
use tauri_plugin_log::{Target, TargetKind, TimezoneStrategy};

/// Log file written under the platform log directory
const LOG_FILE_NAME: &str = "paste-stack";

/// Build the logging plugin.
///
/// Debug builds log at `Debug`, release builds at `Info`. Output goes to
/// stdout and to a file in the app log directory.
pub fn get_builder() -> tauri_plugin_log::Builder {
    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    tauri_plugin_log::Builder::new()
        .clear_targets()
        .target(Target::new(TargetKind::Stdout))
        .target(Target::new(TargetKind::LogDir {
            file_name: Some(LOG_FILE_NAME.to_string()),
        }))
        .timezone_strategy(TimezoneStrategy::UseLocal)
        .level(level)
        .format(|out, message, record| {
            // 2026-10-19 10:30:45.123 INFO [paste_stack_lib::core::clipboard::monitor] message
            out.finish(format_args!(
                "{} {} [{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
}

/// Short single-line preview of clipboard text for log lines
pub fn preview(text: &str) -> String {
    const PREVIEW_CHARS: usize = 20;
    let flat: String = text
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();
    if flat.chars().count() > PREVIEW_CHARS {
        format!("{}...", flat.chars().take(PREVIEW_CHARS).collect::<String>())
    } else {
        flat
    }
}
