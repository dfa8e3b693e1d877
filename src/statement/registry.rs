//! Variable registry: name to value mapping plus first-occurrence order

use std::collections::HashMap;
use std::sync::Arc;

/// The variables of a statement and their current values
///
/// Keeps an ordered list of names (first-occurrence order as found by the
/// tokenizer, or sorted order for combined statements) next to the value map.
/// Entries are only ever added or overwritten, never removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableRegistry {
    values: HashMap<Arc<str>, bool>,
    order: Vec<Arc<str>>,
}

impl VariableRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a variable with the default value `false`
    ///
    /// Returns the shared name. A name that is already registered keeps its
    /// value and position.
    pub fn register(&mut self, name: &str) -> Arc<str> {
        if let Some((existing, _)) = self.values.get_key_value(name) {
            return Arc::clone(existing);
        }
        let name: Arc<str> = Arc::from(name);
        self.values.insert(Arc::clone(&name), false);
        self.order.push(Arc::clone(&name));
        name
    }

    /// Current value of a variable, `None` if it is not registered
    pub fn get(&self, name: &str) -> Option<bool> {
        self.values.get(name).copied()
    }

    /// Overwrite the value of a registered variable
    ///
    /// Returns `false` (and changes nothing) if the name is not registered.
    pub fn set(&mut self, name: &str, value: bool) -> bool {
        match self.values.get_mut(name) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Whether the variable is registered
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Variable names in declared order
    pub fn names(&self) -> &[Arc<str>] {
        &self.order
    }

    /// Number of distinct variables
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether no variable is registered
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate `(name, value)` pairs in declared order
    pub fn iter(&self) -> impl Iterator<Item = (&Arc<str>, bool)> + '_ {
        self.order.iter().map(move |name| (name, self.values[name]))
    }

    /// Assign the bits of an assignment index to the variables
    ///
    /// Bit `j` of `index` (bit 0 least significant) goes to the `j`-th
    /// variable counted from the *end* of the declared order, so the last
    /// declared variable changes fastest.
    pub fn assign_index(&mut self, index: u64) {
        for (bit, name) in self.order.iter().rev().enumerate() {
            let value = bit < u64::BITS as usize && (index >> bit) & 1 == 1;
            if let Some(slot) = self.values.get_mut(name) {
                *slot = value;
            }
        }
    }

    /// Merge two registries for a combined statement
    ///
    /// Values of `other` win on collisions. The declared order of the result
    /// is the sorted, deduplicated union of both name lists.
    pub fn merged(&self, other: &VariableRegistry) -> VariableRegistry {
        let mut values = self.values.clone();
        for (name, value) in &other.values {
            values.insert(Arc::clone(name), *value);
        }
        let mut order: Vec<Arc<str>> = self.order.iter().chain(&other.order).cloned().collect();
        order.sort();
        order.dedup();
        VariableRegistry { values, order }
    }
}
