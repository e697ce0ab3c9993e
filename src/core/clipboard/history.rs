/// Fixed-capacity clipboard history, most recent first.
///
/// Values are immutable: `push` and `remove_at` consume the history and
/// return the next one, so the owner simply replaces what it holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardHistory {
    entries: Vec<String>,
    capacity: usize,
}

impl ClipboardHistory {
    /// Create an empty history holding at most `capacity` entries
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Prepend `item`, dropping the oldest entry when over capacity
    #[must_use]
    pub fn push(mut self, item: impl Into<String>) -> Self {
        self.entries.insert(0, item.into());
        self.entries.truncate(self.capacity);
        self
    }

    /// Remove the entry at `index`; an index past the end leaves the history unchanged
    #[must_use]
    pub fn remove_at(mut self, index: usize) -> Self {
        if index < self.entries.len() {
            self.entries.remove(index);
        }
        self
    }

    /// Entry at `index` (0 = most recent)
    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
