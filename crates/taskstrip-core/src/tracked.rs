//! Ordered set of tracked entries, keyed by window handle.

use taskstrip_common::WindowHandle;

use crate::entry::TaskbarEntry;

/// Entries in strip order. At most one entry per handle.
#[derive(Debug, Default)]
pub struct TrackedSet {
    entries: Vec<TaskbarEntry>,
}

impl TrackedSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, handle: WindowHandle) -> bool {
        self.get(handle).is_some()
    }

    pub fn get(&self, handle: WindowHandle) -> Option<&TaskbarEntry> {
        self.entries.iter().find(|e| e.handle() == handle)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TaskbarEntry> {
        self.entries.iter()
    }

    pub fn handles(&self) -> impl Iterator<Item = WindowHandle> + '_ {
        self.entries.iter().map(TaskbarEntry::handle)
    }

    /// Append `entry`. Refuses (returning it back) if its handle is
    /// already tracked.
    pub(crate) fn insert(&mut self, entry: TaskbarEntry) -> Result<(), TaskbarEntry> {
        if self.contains(entry.handle()) {
            return Err(entry);
        }
        self.entries.push(entry);
        Ok(())
    }

    /// Remove the entry for `handle`, keeping the order of the rest.
    pub(crate) fn remove(&mut self, handle: WindowHandle) -> Option<TaskbarEntry> {
        let index = self.entries.iter().position(|e| e.handle() == handle)?;
        Some(self.entries.remove(index))
    }

    /// Remove every entry, in strip order.
    pub(crate) fn take_all(&mut self) -> Vec<TaskbarEntry> {
        std::mem::take(&mut self.entries)
    }
}

impl<'a> IntoIterator for &'a TrackedSet {
    type Item = &'a TaskbarEntry;
    type IntoIter = std::slice::Iter<'a, TaskbarEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
