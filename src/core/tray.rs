//! Tray menu and shortcut presentation
//!
//! Turns a history snapshot into display bindings (label + shortcut per slot)
//! and pushes them to the tray menu and the shortcut registry. Every sync
//! rebuilds both from scratch; nothing is diffed.

use crate::core::clipboard::ClipboardHistory;
use crate::core::ports::{ShortcutRegistry, TrayMenu};
use crate::shared::StackSettings;

/// Prefix of every history item label
const LABEL_PREFIX: &str = "Copy ";

/// Appended to labels that were cut short
const TRUNCATION_MARKER: &str = "...";

/// Disabled entry shown when the history is empty
pub const EMPTY_LABEL: &str = "<Empty>";

pub const QUIT_LABEL: &str = "Quit";

/// Menu + shortcut presentation of one history slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayBinding {
    pub slot: usize,
    pub label: String,
    pub shortcut: String,
}

/// One row of the tray menu template
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEntry {
    /// Selecting it pastes history slot `slot`
    Slot {
        slot: usize,
        label: String,
        accelerator: String,
    },
    /// Disabled, informational only
    Placeholder { label: String },
    Separator,
    Quit,
}

/// `"Copy "` + text, cut to `max_chars` characters with `"..."` when longer
pub fn format_label(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        let shortened: String = text.chars().take(max_chars).collect();
        format!("{}{}{}", LABEL_PREFIX, shortened, TRUNCATION_MARKER)
    } else {
        format!("{}{}", LABEL_PREFIX, text)
    }
}

/// Shortcut for a 0-based slot: the chord plus the 1-based position
pub fn shortcut_for(chord: &str, slot: usize) -> String {
    format!("{}+{}", chord, slot + 1)
}

/// Derive the binding of every history slot
pub fn build_bindings(history: &ClipboardHistory, settings: &StackSettings) -> Vec<DisplayBinding> {
    history
        .entries()
        .iter()
        .enumerate()
        .map(|(slot, text)| DisplayBinding {
            slot,
            label: format_label(text, settings.label_max_chars),
            shortcut: shortcut_for(&settings.shortcut_chord, slot),
        })
        .collect()
}

/// Menu template for a set of bindings.
///
/// Slot rows come first so menu position i is slot i; an empty set yields the
/// disabled placeholder. The quit row always closes the menu.
pub fn menu_template(bindings: &[DisplayBinding]) -> Vec<MenuEntry> {
    let mut template: Vec<MenuEntry> = if bindings.is_empty() {
        vec![MenuEntry::Placeholder {
            label: EMPTY_LABEL.to_string(),
        }]
    } else {
        bindings
            .iter()
            .map(|binding| MenuEntry::Slot {
                slot: binding.slot,
                label: binding.label.clone(),
                accelerator: binding.shortcut.clone(),
            })
            .collect()
    };
    template.push(MenuEntry::Separator);
    template.push(MenuEntry::Quit);
    template
}

/// Rebuild the tray menu and every shortcut from `history`.
///
/// Failures are logged and skipped: a menu that fails to build leaves the old
/// one in place, and a shortcut that fails to bind does not stop the others.
pub fn sync(
    history: &ClipboardHistory,
    settings: &StackSettings,
    menu: &dyn TrayMenu,
    shortcuts: &dyn ShortcutRegistry,
) {
    let bindings = build_bindings(history, settings);

    if let Err(e) = menu.set_menu(&menu_template(&bindings)) {
        log::error!("[Tray] Failed to rebuild menu: {}", e);
    }

    if let Err(e) = shortcuts.unregister_all() {
        log::warn!("[Shortcuts] Failed to release shortcuts: {}", e);
    }
    for binding in &bindings {
        if let Err(e) = shortcuts.register(&binding.shortcut, binding.slot) {
            log::warn!("[Shortcuts] Could not bind {}: {}", binding.shortcut, e);
        }
    }

    log::debug!("[Tray] Synced {} item(s)", bindings.len());
}

#[cfg(test)]
pub(crate) mod fakes {
    use super::MenuEntry;
    use crate::core::ports::{ShortcutRegistry, TrayMenu};
    use crate::shared::{StackError, StackResult};
    use std::collections::{BTreeMap, HashSet};
    use std::sync::Mutex;

    /// Records every menu it is given
    #[derive(Default)]
    pub struct RecordingMenu {
        pub builds: Mutex<Vec<Vec<MenuEntry>>>,
    }

    impl RecordingMenu {
        pub fn last(&self) -> Vec<MenuEntry> {
            self.builds.lock().unwrap().last().cloned().unwrap_or_default()
        }
    }

    impl TrayMenu for RecordingMenu {
        fn set_menu(&self, template: &[MenuEntry]) -> StackResult<()> {
            self.builds.lock().unwrap().push(template.to_vec());
            Ok(())
        }
    }

    /// Keeps live registrations keyed by combo; refuses combos in `taken`
    #[derive(Default)]
    pub struct FakeShortcuts {
        pub bound: Mutex<BTreeMap<String, usize>>,
        pub register_calls: Mutex<usize>,
        pub taken: HashSet<String>,
    }

    impl FakeShortcuts {
        pub fn with_taken(combos: &[&str]) -> Self {
            Self {
                taken: combos.iter().map(|c| c.to_string()).collect(),
                ..Self::default()
            }
        }

        pub fn bound(&self) -> BTreeMap<String, usize> {
            self.bound.lock().unwrap().clone()
        }
    }

    impl ShortcutRegistry for FakeShortcuts {
        fn register(&self, combo: &str, slot: usize) -> StackResult<()> {
            *self.register_calls.lock().unwrap() += 1;
            if self.taken.contains(combo) {
                return Err(StackError::Shortcut(format!("{} is taken", combo)));
            }
            let mut bound = self.bound.lock().unwrap();
            if bound.contains_key(combo) {
                return Err(StackError::Shortcut(format!("{} already registered", combo)));
            }
            bound.insert(combo.to_string(), slot);
            Ok(())
        }

        fn unregister_all(&self) -> StackResult<()> {
            self.bound.lock().unwrap().clear();
            Ok(())
        }
    }
}
