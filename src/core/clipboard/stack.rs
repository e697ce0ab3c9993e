use std::sync::Arc;

use super::history::ClipboardHistory;
use super::poller::ClipboardPoller;
use crate::core::ports::{ClipboardAccess, ShortcutRegistry, TrayMenu};
use crate::core::tray;
use crate::shared::logging::preview;
use crate::shared::StackSettings;

/// Sole owner of the clipboard history.
///
/// Ties the poller, the history and the presentation together. Not shared:
/// the monitor task holds it and serializes every call.
pub struct ClipStack {
    history: ClipboardHistory,
    poller: ClipboardPoller,
    settings: StackSettings,
    clipboard: Arc<dyn ClipboardAccess>,
    shortcuts: Arc<dyn ShortcutRegistry>,
    menu: Arc<dyn TrayMenu>,
}

impl ClipStack {
    pub fn new(
        settings: StackSettings,
        clipboard: Arc<dyn ClipboardAccess>,
        shortcuts: Arc<dyn ShortcutRegistry>,
        menu: Arc<dyn TrayMenu>,
    ) -> Self {
        Self {
            history: ClipboardHistory::new(settings.capacity),
            poller: ClipboardPoller::new(),
            settings,
            clipboard,
            shortcuts,
            menu,
        }
    }

    /// Remember whatever is on the clipboard now so it is not captured
    pub fn prime(&mut self) {
        let current = self.clipboard.read_text().ok();
        self.poller.prime(current);
    }

    /// Sample the clipboard once; a new value is pushed and presented
    pub fn tick(&mut self) {
        let current = match self.clipboard.read_text() {
            Ok(text) => text,
            Err(e) => {
                log::trace!("[ClipStack] Clipboard read skipped: {}", e);
                return;
            }
        };

        if let Some(text) = self.poller.observe(current) {
            log::info!("[ClipStack] Captured \"{}\"", preview(&text));
            self.history = self.history.clone().push(text);
            self.sync();
        }
    }

    /// Paste slot `index` back to the clipboard and drop it from the history.
    ///
    /// The index is resolved against the current history; a stale one does nothing.
    pub fn select(&mut self, index: usize) {
        let Some(text) = self.history.get(index).map(str::to_string) else {
            log::debug!("[ClipStack] Ignoring stale selection of slot {}", index);
            return;
        };

        match self.clipboard.write_text(&text) {
            Ok(()) => {
                self.poller.mark_seen(&text);
                log::info!("[ClipStack] Pasted back slot {}: \"{}\"", index, preview(&text));
            }
            Err(e) => log::warn!("[ClipStack] Failed to write slot {} to clipboard: {}", index, e),
        }

        self.history = self.history.clone().remove_at(index);
        self.sync();
    }

    /// Rebuild the tray menu and shortcuts from the current history
    pub fn sync(&self) {
        tray::sync(
            &self.history,
            &self.settings,
            self.menu.as_ref(),
            self.shortcuts.as_ref(),
        );
    }

    pub fn history(&self) -> &ClipboardHistory {
        &self.history
    }
}

#[cfg(test)]
pub(crate) mod fakes {
    use crate::core::ports::ClipboardAccess;
    use crate::shared::{StackError, StackResult};
    use std::sync::Mutex;

    /// In-memory clipboard; reads or writes can be made to fail
    #[derive(Default)]
    pub struct FakeClipboard {
        pub text: Mutex<String>,
        pub fail_reads: Mutex<bool>,
        pub fail_writes: Mutex<bool>,
    }

    impl FakeClipboard {
        pub fn copy(&self, text: &str) {
            *self.text.lock().unwrap() = text.to_string();
        }

        pub fn current(&self) -> String {
            self.text.lock().unwrap().clone()
        }
    }

    impl ClipboardAccess for FakeClipboard {
        fn read_text(&self) -> StackResult<String> {
            if *self.fail_reads.lock().unwrap() {
                return Err(StackError::Clipboard("clipboard busy".to_string()));
            }
            Ok(self.current())
        }

        fn write_text(&self, text: &str) -> StackResult<()> {
            if *self.fail_writes.lock().unwrap() {
                return Err(StackError::Clipboard("clipboard busy".to_string()));
            }
            self.copy(text);
            Ok(())
        }
    }
}
