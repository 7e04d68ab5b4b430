//! Stream list implementation
//!
//! The list owns every configured stream. Names are unique ignoring case:
//! asking for "TeSt" and then "test" yields the same entry, which keeps the
//! spelling it was first created with.

use std::collections::HashMap;

use crate::context::ConfigContext;

use super::entry::StreamEntry;
use super::error::Result;

/// Insertion-ordered collection of stream entries
///
/// Built during configuration loading through `&mut` access and treated as
/// read-only afterwards. See [`SharedStreamList`](super::SharedStreamList)
/// for handing a finished list to concurrent readers.
#[derive(Debug, Clone, Default)]
pub struct StreamList {
    /// Entries in the order they were first requested
    entries: Vec<StreamEntry>,

    /// Case-folded name to position in `entries`
    index: HashMap<String, usize>,

    /// Context the list was created under
    config: ConfigContext,
}

/// Identity key for a stream name
fn fold(name: &str) -> String {
    name.to_lowercase()
}

impl StreamList {
    /// Create an empty stream list
    pub fn new(config: &ConfigContext) -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
            config: config.clone(),
        }
    }

    /// Drop the list held in `handle`, leaving `None` behind
    pub fn destroy(handle: &mut Option<StreamList>) {
        if let Some(list) = handle.take() {
            tracing::debug!(
                program = %list.config.program_name(),
                streams = list.len(),
                "Stream list destroyed"
            );
        }
    }

    /// Get the context this list was created under
    pub fn config(&self) -> &ConfigContext {
        &self.config
    }

    /// Look up a stream by name, creating it if it does not exist yet
    ///
    /// Returns `None`, and creates nothing, for a missing or empty name.
    pub fn get_or_create(&mut self, name: Option<&str>) -> Option<&mut StreamEntry> {
        let name = name.filter(|n| !n.is_empty())?;
        let key = fold(name);

        let pos = match self.index.get(&key) {
            Some(&pos) => pos,
            None => {
                let pos = self.entries.len();
                self.entries.push(StreamEntry::new(name));
                self.index.insert(key, pos);

                tracing::debug!(
                    program = %self.config.program_name(),
                    stream = name,
                    streams = self.entries.len(),
                    "Stream created"
                );
                pos
            }
        };

        self.entries.get_mut(pos)
    }

    /// Look up a stream by name without creating it
    pub fn find(&self, name: &str) -> Option<&StreamEntry> {
        self.index
            .get(&fold(name))
            .and_then(|&pos| self.entries.get(pos))
    }

    /// Look up a stream by name without creating it, for modification
    pub fn find_mut(&mut self, name: &str) -> Option<&mut StreamEntry> {
        let pos = *self.index.get(&fold(name))?;
        self.entries.get_mut(pos)
    }

    /// Number of streams
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the list holds no streams
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Call `visitor` once per stream, in creation order
    pub fn for_each<F>(&self, visitor: F)
    where
        F: FnMut(&StreamEntry),
    {
        self.entries.iter().for_each(visitor);
    }

    /// Iterate over the streams in creation order
    pub fn iter(&self) -> std::slice::Iter<'_, StreamEntry> {
        self.entries.iter()
    }

    /// Iterate mutably over the streams in creation order
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, StreamEntry> {
        self.entries.iter_mut()
    }

    /// Validate every stream
    ///
    /// Stops at the first invalid stream and names it in the error.
    pub fn validate(&self) -> Result<()> {
        for entry in &self.entries {
            entry.validate().map_err(|err| err.in_stream(entry.name()))?;
        }

        Ok(())
    }
}

impl<'a> IntoIterator for &'a StreamList {
    type Item = &'a StreamEntry;
    type IntoIter = std::slice::Iter<'a, StreamEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
