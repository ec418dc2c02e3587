use std::collections::HashMap;

use lorder_core::{GroupOracle, Word};
use serde::{Deserialize, Serialize};

/// Dense identifier of an equivalence class inside an [`ElementPool`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ElementId(u32);

impl ElementId {
    /// Creates an identifier from its raw index.
    pub fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw index.
    pub fn as_raw(&self) -> u32 {
        self.0
    }

    /// Returns the index as `usize` for slice access.
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

/// Canonical representatives of numerically compared group elements.
///
/// Every class keeps the first numeric value that was inserted for it and one
/// word label. Lookups scan the buckets of [`GroupOracle::neighbour_keys`]
/// around the element's [`GroupOracle::class_key`] and then compare with
/// [`GroupOracle::equal`]. Callers always continue from the stored
/// representative, never from a freshly computed value, so rounding error does
/// not accumulate across repeated products.
#[derive(Debug, Clone)]
pub struct ElementPool<O: GroupOracle> {
    elements: Vec<O::Element>,
    words: Vec<Word>,
    buckets: HashMap<O::Key, Vec<ElementId>>,
}

impl<O: GroupOracle> Default for ElementPool<O> {
    fn default() -> Self {
        Self {
            elements: Vec::new(),
            words: Vec::new(),
            buckets: HashMap::new(),
        }
    }
}

impl<O: GroupOracle> ElementPool<O> {
    /// Creates an empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of classes in the pool.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns whether the pool holds no classes.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Finds the class equal to `element`, if any.
    pub fn lookup(&self, oracle: &O, element: &O::Element) -> Option<ElementId> {
        oracle
            .neighbour_keys(&oracle.class_key(element))
            .iter()
            .filter_map(|key| self.buckets.get(key))
            .flatten()
            .copied()
            .find(|id| oracle.equal(&self.elements[id.index()], element))
    }

    /// Adds a new class without checking for an existing one.
    pub fn insert(&mut self, oracle: &O, element: O::Element, word: Word) -> ElementId {
        let id = ElementId(self.elements.len() as u32);
        self.buckets
            .entry(oracle.class_key(&element))
            .or_default()
            .push(id);
        self.elements.push(element);
        self.words.push(word);
        id
    }

    /// Returns the existing class for `element` or inserts a new one.
    ///
    /// The flag is `true` when a new class was created.
    pub fn intern(&mut self, oracle: &O, element: O::Element, word: Word) -> (ElementId, bool) {
        match self.lookup(oracle, &element) {
            Some(id) => (id, false),
            None => (self.insert(oracle, element, word), true),
        }
    }

    /// Canonical numeric representative of a class.
    pub fn element(&self, id: ElementId) -> &O::Element {
        &self.elements[id.index()]
    }

    /// Word label of a class.
    pub fn word(&self, id: ElementId) -> &Word {
        &self.words[id.index()]
    }

    /// Replaces the word label of a class.
    pub fn relabel(&mut self, id: ElementId, word: Word) {
        self.words[id.index()] = word;
    }

    /// Iterates over all class identifiers in insertion order.
    pub fn ids(&self) -> impl ExactSizeIterator<Item = ElementId> {
        (0..self.elements.len() as u32).map(ElementId)
    }
}
