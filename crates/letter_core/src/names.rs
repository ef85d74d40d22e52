//! Ordered, in-memory list of entered names.
//!
//! Every mutation is total: invalid input and stale indices are logged and ignored
//! instead of being reported back to the caller.

use crate::domain::{validate_name, NameEntry, NameId};

#[derive(Debug, Clone, Default)]
pub struct NameList {
    entries: Vec<NameEntry>,
    next_id: u64,
}

impl NameList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Self::new();
        for name in names {
            list.add_name(name.as_ref());
        }
        list
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[NameEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &NameEntry> {
        self.entries.iter()
    }

    pub fn get(&self, index: usize) -> Option<&NameEntry> {
        self.entries.get(index)
    }

    pub fn position(&self, id: NameId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id() == id)
    }

    /// Appends the trimmed `text`. Returns `None` and leaves the list untouched when the
    /// trimmed text is empty.
    pub fn add_name(&mut self, text: &str) -> Option<NameId> {
        let name = match validate_name(text) {
            Ok(name) => name,
            Err(err) => {
                tracing::debug!(%err, "ignoring name submission");
                return None;
            }
        };

        let id = NameId(self.next_id);
        self.next_id += 1;
        tracing::debug!(id = id.0, name = %name, "name added");
        self.entries.push(NameEntry::new(id, name));
        Some(id)
    }

    pub fn remove_name(&mut self, id: NameId) -> bool {
        let Some(index) = self.position(id) else {
            tracing::debug!(id = id.0, "remove ignored: unknown id");
            return false;
        };
        self.entries.remove(index);
        tracing::debug!(id = id.0, index, "name removed");
        true
    }

    /// Moves the entry at `from` so that it ends up at `to`, shifting the entries in
    /// between. Out-of-range indices (a drag that outlived a list change) and
    /// `from == to` leave the list as it is.
    pub fn reorder(&mut self, from: usize, to: usize) -> bool {
        let len = self.entries.len();
        if from >= len || to >= len {
            tracing::debug!(from, to, len, "reorder ignored: index out of range");
            return false;
        }
        if from == to {
            return false;
        }

        let entry = self.entries.remove(from);
        self.entries.insert(to, entry);
        tracing::debug!(from, to, "names reordered");
        true
    }
}

#[cfg(test)]
#[path = "tests/names_tests.rs"]
mod tests;
