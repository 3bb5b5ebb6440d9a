use std::collections::HashMap;

/// An entity addressable by a unique string key.
pub trait Keyed {
    fn key(&self) -> &str;
}

/// Insertion-ordered keyed container.
///
/// Entities live in a `Vec` in first-seen order; a side index maps each key
/// to its slot so lookups stay O(1) while iteration keeps file order.
#[derive(Debug)]
pub struct Registry<T> {
    entries: Vec<T>,
    index: HashMap<String, usize>,
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T: Keyed> Registry<T> {
    /// Insert a new entity. Hands the entity back if its key is taken.
    pub fn insert(&mut self, item: T) -> Result<&mut T, T> {
        if self.index.contains_key(item.key()) {
            return Err(item);
        }
        let slot = self.entries.len();
        self.index.insert(item.key().to_string(), slot);
        self.entries.push(item);
        Ok(&mut self.entries[slot])
    }

    /// Fetch the entity for `key`, creating it with `make` on first sight.
    pub fn get_or_insert_with(&mut self, key: &str, make: impl FnOnce() -> T) -> &mut T {
        let slot = match self.index.get(key) {
            Some(&slot) => slot,
            None => {
                let slot = self.entries.len();
                self.index.insert(key.to_string(), slot);
                self.entries.push(make());
                slot
            }
        };
        &mut self.entries[slot]
    }

    pub fn get(&self, key: &str) -> Option<&T> {
        self.index.get(key).map(|&slot| &self.entries[slot])
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut T> {
        self.index.get(key).map(|&slot| &mut self.entries[slot])
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
