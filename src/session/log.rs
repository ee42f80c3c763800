use std::collections::VecDeque;

/// Default number of entries kept.
pub const DEFAULT_LOG_CAPACITY: usize = 200;

/// Bounded list of human-readable game events, oldest first.
///
/// Every entry is also emitted as a `tracing` event so a subscriber can
/// persist it.
#[derive(Debug, Clone)]
pub struct GameLog {
    entries: VecDeque<String>,
    capacity: usize,
}

impl GameLog {
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        GameLog {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_LOG_CAPACITY)
    }

    pub fn push(&mut self, entry: impl Into<String>) {
        let entry = entry.into();
        tracing::info!(target: "connect_four::game", "{entry}");
        self.entries.push_back(entry);
        if self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    /// Change the capacity, dropping the oldest entries if over it. Kept
    /// entries are not re-emitted.
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity.max(1);
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    pub fn entries(&self) -> impl DoubleEndedIterator<Item = &str> + ExactSizeIterator {
        self.entries.iter().map(String::as_str)
    }

    pub fn last(&self) -> Option<&str> {
        self.entries.back().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for GameLog {
    fn default() -> Self {
        Self::new()
    }
}
