//! String table for declaration names and string literal payloads.
//!
//! One table behind a `RwLock`: lookups and repeated interning of a known
//! string take the read lock only, so passes working on disjoint trees can
//! intern through a shared `&StringInterner`. Strings are reference counted
//! and freed with the interner.

use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::Name;

/// The interner ran out of [`Name`] indices.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("string interner is full: {count} strings already interned")]
pub struct InternError {
    pub count: usize,
}

#[derive(Default)]
struct Table {
    names: FxHashMap<Arc<str>, Name>,
    strings: Vec<Arc<str>>,
}

impl Table {
    fn insert(&mut self, s: &str) -> Result<Name, InternError> {
        let count = self.strings.len();
        let index = u32::try_from(count).map_err(|_| InternError { count })?;
        let name = Name::from_index(index);
        let stored: Arc<str> = Arc::from(s);
        self.strings.push(Arc::clone(&stored));
        self.names.insert(stored, name);
        Ok(name)
    }
}

/// Thread-safe string interner.
pub struct StringInterner {
    table: RwLock<Table>,
}

impl StringInterner {
    /// Create an interner seeded with the strings behind the fixed
    /// [`Name`] constants.
    pub fn new() -> Self {
        let mut table = Table::default();
        for s in Name::PRE_INTERNED {
            // A fresh table holds far fewer than u32::MAX strings.
            let _ = table.insert(s);
        }
        Self {
            table: RwLock::new(table),
        }
    }

    /// Intern `s`, or report that the table is full.
    pub fn try_intern(&self, s: &str) -> Result<Name, InternError> {
        if let Some(&name) = self.table.read().names.get(s) {
            return Ok(name);
        }
        let mut table = self.table.write();
        // Another thread may have inserted it between the two locks.
        if let Some(&name) = table.names.get(s) {
            return Ok(name);
        }
        table.insert(s)
    }

    /// Intern `s`.
    ///
    /// # Panics
    /// Panics once `u32::MAX` distinct strings have been interned.
    #[inline]
    pub fn intern(&self, s: &str) -> Name {
        self.try_intern(s).unwrap_or_else(|e| panic!("{e}"))
    }

    /// The string behind `name`, or `None` if another interner issued it.
    pub fn lookup(&self, name: Name) -> Option<Arc<str>> {
        self.table.read().strings.get(name.index()).cloned()
    }

    /// Number of interned strings, the seeded ones included.
    pub fn len(&self) -> usize {
        self.table.read().strings.len()
    }

    /// Always false: the interner starts seeded.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}
