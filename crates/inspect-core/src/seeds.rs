//! An editable, ordered list of typed seeds.
//!
//! Mirrors how a derivation form behaves: rows are appended with a kind and
//! an empty value, edited in place by id, and removed without renumbering
//! the others. Ids are handed out by a counter that only moves forward, so
//! a removed row's id is never reused while the list lives.

use sol_pda::{Seed, SeedKind};

use crate::error::ToolError;

#[derive(Debug, Clone)]
struct Entry {
    id: u64,
    seed: Seed,
}

/// Ordered seed rows keyed by stable ids.
#[derive(Debug, Clone, Default)]
pub struct SeedList {
    entries: Vec<Entry>,
    next_id: u64,
}

impl SeedList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a row with an empty value; returns the new row's id.
    pub fn add(&mut self, kind: SeedKind) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            seed: Seed::new(kind, ""),
        });
        id
    }

    /// Remove the row with this id. Returns false when no row has it.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    /// Change a row's kind, keeping its value text.
    pub fn set_kind(&mut self, id: u64, kind: SeedKind) -> bool {
        match self.entry_mut(id) {
            Some(entry) => {
                entry.seed.kind = kind;
                true
            }
            None => false,
        }
    }

    /// Replace a row's value text.
    pub fn set_value(&mut self, id: u64, value: impl Into<String>) -> bool {
        match self.entry_mut(id) {
            Some(entry) => {
                entry.seed.value = value.into();
                true
            }
            None => false,
        }
    }

    /// Drop every row and restart id numbering.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.next_id = 0;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rows in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (u64, &Seed)> {
        self.entries.iter().map(|e| (e.id, &e.seed))
    }

    /// Encode every row in order. An encoding failure is reported with the
    /// 1-based position of the row that caused it.
    pub fn encode_all(&self) -> Result<Vec<Vec<u8>>, ToolError> {
        let mut encoded = Vec::with_capacity(self.entries.len());
        for (i, entry) in self.entries.iter().enumerate() {
            let bytes = entry.seed.encode().map_err(|e| ToolError::InvalidSeed {
                position: i + 1,
                message: e.to_string(),
            })?;
            encoded.push(bytes);
        }
        Ok(encoded)
    }

    fn entry_mut(&mut self, id: u64) -> Option<&mut Entry> {
        self.entries.iter_mut().find(|e| e.id == id)
    }
}
