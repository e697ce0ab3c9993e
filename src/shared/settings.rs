use serde::Serialize;
use std::time::Duration;

/// Maximum number of clipboard items kept in the stack
pub const MAX_STACK_SIZE: usize = 5;

/// Maximum characters of an item shown in its menu label
pub const MAX_LABEL_LENGTH: usize = 15;

/// How often the clipboard is sampled
pub const POLL_INTERVAL_MS: u64 = 1000;

/// Modifier chord prefixed to the slot number of every shortcut
pub const SHORTCUT_CHORD: &str = "CmdOrCtrl+Alt";

/// Compiled-in stack configuration.
///
/// There is no settings file: `Default` is the only source, other values
/// exist for tests.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StackSettings {
    pub capacity: usize,
    pub label_max_chars: usize,
    pub poll_interval_ms: u64,
    pub shortcut_chord: String,
}

impl Default for StackSettings {
    fn default() -> Self {
        Self {
            capacity: MAX_STACK_SIZE,
            label_max_chars: MAX_LABEL_LENGTH,
            poll_interval_ms: POLL_INTERVAL_MS,
            shortcut_chord: SHORTCUT_CHORD.to_string(),
        }
    }
}

impl StackSettings {
    /// Same defaults with a different capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = StackSettings::default();
        assert_eq!(settings.capacity, 5);
        assert_eq!(settings.label_max_chars, 15);
        assert_eq!(settings.poll_interval(), Duration::from_secs(1));
        assert_eq!(settings.shortcut_chord, "CmdOrCtrl+Alt");
    }

    #[test]
    fn test_with_capacity_keeps_other_defaults() {
        let settings = StackSettings::with_capacity(2);
        assert_eq!(settings.capacity, 2);
        assert_eq!(settings.label_max_chars, MAX_LABEL_LENGTH);
    }
}
