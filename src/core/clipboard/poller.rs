/// Change detector for clipboard samples.
///
/// Remembers the last value it saw (or was told about through `mark_seen`)
/// and reports a sample only when it differs from that value.
#[derive(Debug, Default)]
pub struct ClipboardPoller {
    last_seen: Option<String>,
}

impl ClipboardPoller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed with the clipboard content present at startup without capturing it
    pub fn prime(&mut self, current: Option<String>) {
        self.last_seen = current;
    }

    /// Feed one sample. Returns the text when it differs from the last one seen.
    ///
    /// A failed read should not be fed at all; it counts as no change.
    pub fn observe(&mut self, current: String) -> Option<String> {
        if self.last_seen.as_deref() == Some(current.as_str()) {
            return None;
        }
        self.last_seen = Some(current.clone());
        Some(current)
    }

    /// Treat `text` as already observed (used after writing it to the clipboard)
    pub fn mark_seen(&mut self, text: &str) {
        self.last_seen = Some(text.to_string());
    }

    pub fn last_seen(&self) -> Option<&str> {
        self.last_seen.as_deref()
    }
}
