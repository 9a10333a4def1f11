//! Back/forward history mirror.
//!
//! `wry` exposes no way to query the engine's session history, so the
//! surface keeps its own: an ordered list of committed URLs plus a
//! cursor. The mirror is best-effort — it is fed from navigation
//! callbacks and only ever consulted for reachability and the current
//! entry, never to drive the engine's actual traversal.

use url::Url;

/// Ordered navigation history with a cursor at the current entry.
#[derive(Debug, Clone, Default)]
pub struct NavHistory {
    entries: Vec<Url>,
    cursor: Option<usize>,
}

impl NavHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a newly committed navigation.
    ///
    /// Truncates the forward branch, so going back and then navigating
    /// somewhere new discards the old forward entries, matching engine
    /// behavior. Recording the entry already under the cursor is a
    /// no-op — reloads and same-URL submissions do not stack.
    pub fn record(&mut self, url: Url) {
        if self.current() == Some(&url) {
            return;
        }
        match self.cursor {
            Some(i) => self.entries.truncate(i + 1),
            None => self.entries.clear(),
        }
        self.entries.push(url);
        self.cursor = Some(self.entries.len() - 1);
    }

    /// Replace the entry under the cursor, for redirect coalescing.
    /// With no current entry this behaves like `record`.
    pub fn replace_current(&mut self, url: Url) {
        match self.cursor {
            Some(i) => self.entries[i] = url,
            None => self.record(url),
        }
    }

    /// Move the cursor one entry back and return the new current entry.
    pub fn back(&mut self) -> Option<&Url> {
        match self.cursor {
            Some(i) if i > 0 => {
                self.cursor = Some(i - 1);
                self.current()
            }
            _ => None,
        }
    }

    /// Move the cursor one entry forward and return the new current entry.
    pub fn forward(&mut self) -> Option<&Url> {
        match self.cursor {
            Some(i) if i + 1 < self.entries.len() => {
                self.cursor = Some(i + 1);
                self.current()
            }
            _ => None,
        }
    }

    /// The entry under the cursor.
    pub fn current(&self) -> Option<&Url> {
        self.cursor.and_then(|i| self.entries.get(i))
    }

    pub fn can_go_back(&self) -> bool {
        matches!(self.cursor, Some(i) if i > 0)
    }

    pub fn can_go_forward(&self) -> bool {
        matches!(self.cursor, Some(i) if i + 1 < self.entries.len())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
