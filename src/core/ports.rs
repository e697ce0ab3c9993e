//! Platform seams of the clipboard stack
//!
//! The stack only talks to the OS through these traits. The Tauri
//! implementations live in `crate::system`; tests use in-memory fakes.

use crate::core::tray::MenuEntry;
use crate::shared::StackResult;

/// System clipboard, text only
pub trait ClipboardAccess: Send + Sync {
    fn read_text(&self) -> StackResult<String>;
    fn write_text(&self, text: &str) -> StackResult<()>;
}

/// Global shortcut registrations
pub trait ShortcutRegistry: Send + Sync {
    /// Bind `combo` so that pressing it selects history slot `slot`
    fn register(&self, combo: &str, slot: usize) -> StackResult<()>;

    /// Release every shortcut this registry has bound
    fn unregister_all(&self) -> StackResult<()>;
}

/// Tray context menu
pub trait TrayMenu: Send + Sync {
    /// Replace the whole menu with one built from `template`
    fn set_menu(&self, template: &[MenuEntry]) -> StackResult<()>;
}
