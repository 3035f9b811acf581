//! Back/forward bookkeeping for engines that do not expose their own.

/// Direction of a pending history traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Traversal {
    Back,
    Forward,
}

/// Linear session history with a cursor.
#[derive(Debug, Clone, Default)]
pub struct HistoryTracker {
    entries: Vec<String>,
    index: Option<usize>,
    pending: Option<Traversal>,
}

impl HistoryTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a new navigation, discarding any forward entries.
    pub fn push(&mut self, url: &str) {
        let keep = self.index.map_or(0, |i| i + 1);
        self.entries.truncate(keep);
        self.entries.push(url.to_string());
        self.index = Some(self.entries.len() - 1);
    }

    /// Moves the cursor back and returns the entry now current.
    pub fn back(&mut self) -> Option<&str> {
        if !self.can_go_back() {
            return None;
        }
        self.index = self.index.map(|i| i - 1);
        self.current()
    }

    /// Moves the cursor forward and returns the entry now current.
    pub fn forward(&mut self) -> Option<&str> {
        if !self.can_go_forward() {
            return None;
        }
        self.index = self.index.map(|i| i + 1);
        self.current()
    }

    /// Notes that a traversal was requested from script; the next observed
    /// URL is attributed to it when it matches the target entry.
    pub fn expect(&mut self, traversal: Traversal) {
        self.pending = Some(traversal);
    }

    /// Forgets a requested traversal that never started.
    pub fn cancel_pending(&mut self) {
        self.pending = None;
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Reconciles a URL reported by the engine at navigation start.
    ///
    /// A pending traversal moves the cursor only if `url` is the entry it
    /// targets; any other URL drops it and counts as a new navigation.
    pub fn observe(&mut self, url: &str) {
        if let Some(traversal) = self.pending.take() {
            let target = match (traversal, self.index) {
                (Traversal::Back, Some(i)) if i > 0 => Some(i - 1),
                (Traversal::Forward, Some(i)) if i + 1 < self.entries.len() => Some(i + 1),
                _ => None,
            };
            if let Some(i) = target.filter(|&i| self.entries[i] == url) {
                self.index = Some(i);
                return;
            }
        }
        if self.current() != Some(url) {
            self.push(url);
        }
    }

    pub fn current(&self) -> Option<&str> {
        self.index
            .and_then(|i| self.entries.get(i))
            .map(String::as_str)
    }

    pub fn can_go_back(&self) -> bool {
        matches!(self.index, Some(i) if i > 0)
    }

    pub fn can_go_forward(&self) -> bool {
        matches!(self.index, Some(i) if i + 1 < self.entries.len())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
