use std::collections::HashMap;
use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::config::EntryConfig;
use crate::error::{Error, Result};
use crate::item::EnumItem;
use crate::logger::log_warn;
use crate::value::Val;


/// Choice-list entry produced by [`EnumCollection::options`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    pub label: String,
    pub value: Val,
    pub key: String,
}

/// Enumeration members indexed by key and by value.
///
/// Items are stored once. `by_key` and `by_val` keep separate indexes, while
/// `get` and `Index<&str>` resolve through a shared namespace where keys and
/// values overwrite each other in registration order.
#[derive(Debug, Clone, Default)]
pub struct EnumCollection {
    items: Vec<EnumItem>,
    keys: Vec<String>,
    by_key: HashMap<String, usize>,
    by_val: HashMap<String, usize>,
    properties: HashMap<String, usize>,
}

/// Builds a collection from entries, registering each one in input order.
///
/// No sorting or deduplication is performed: a repeated key is listed again in
/// [`EnumCollection::keys`] and its lookups resolve to the last entry.
pub fn enumer<I>(entries: I) -> EnumCollection
where
    I: IntoIterator,
    I::Item: Into<EntryConfig>,
{
    let entries = entries.into_iter();
    let mut collection = EnumCollection::with_capacity(entries.size_hint().0);
    for entry in entries {
        collection.register(EnumItem::new(entry));
    }
    collection
}

impl EnumCollection {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            keys: Vec::with_capacity(capacity),
            by_key: HashMap::with_capacity(capacity),
            by_val: HashMap::with_capacity(capacity),
            properties: HashMap::with_capacity(capacity * 2),
        }
    }

    fn register(&mut self, item: EnumItem) {
        let slot = self.items.len();
        let key = item.key().to_owned();
        let val = item.val().property_key().into_owned();
        self.items.push(item);

        self.properties.insert(key.clone(), slot);
        self.properties.insert(val.clone(), slot);
        self.by_key.insert(key.clone(), slot);
        self.by_val.insert(val, slot);
        self.keys.push(key);
    }

    /// Builds a collection from a JSON document that should be an array of
    /// entries.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotASequence`] and logs a warning when `value` is not
    /// an array.
    pub fn from_json_value(value: &serde_json::Value) -> Result<Self> {
        let serde_json::Value::Array(entries) = value else {
            let found = json_kind(value);
            log_warn(&format!("enumer expects an array of entries, found {found}"));
            return Err(Error::not_a_sequence(found));
        };
        Ok(enumer(entries.iter().map(EntryConfig::from_json)))
    }

    /// Parses `text` as JSON and builds a collection from it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] for malformed JSON and [`Error::NotASequence`]
    /// when the document is not an array.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(text)?;
        Self::from_json_value(&value)
    }

    /// Key names in registration order, duplicates included.
    #[must_use]
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    #[must_use]
    pub fn by_key(&self, key: &str) -> Option<&EnumItem> {
        self.by_key.get(key).map(|&slot| &self.items[slot])
    }

    /// Looks an item up by its value. Values are matched on their property
    /// name, so `1`, `1.0` and `"1"` all address the same member.
    #[must_use]
    pub fn by_val(&self, val: impl Into<Val>) -> Option<&EnumItem> {
        let val = val.into();
        let name = val.property_key();
        self.by_val.get(&*name).map(|&slot| &self.items[slot])
    }

    /// Resolves `name` against keys and values together; when a key and a
    /// value share a name the later registration wins.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&EnumItem> {
        self.properties.get(name).map(|&slot| &self.items[slot])
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.by_key.contains_key(key)
    }

    /// Items in `keys` order.
    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            keys: self.keys.iter(),
            collection: self,
        }
    }

    /// Calls `f(item, index)` for every entry of [`keys`](Self::keys).
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&EnumItem, usize),
    {
        for (index, item) in self.iter().enumerate() {
            f(item, index);
        }
    }

    /// Collects `f(item, index)` for every entry of [`keys`](Self::keys).
    pub fn map<U, F>(&self, mut f: F) -> Vec<U>
    where
        F: FnMut(&EnumItem, usize) -> U,
    {
        let mut mapped = Vec::with_capacity(self.len());
        self.for_each(|item, index| mapped.push(f(item, index)));
        mapped
    }

    /// Label/value/key triples for populating selection widgets.
    #[must_use]
    pub fn options(&self) -> Vec<SelectOption> {
        self.map(|item, _| SelectOption {
            label: item.desc().to_owned(),
            value: item.val().clone(),
            key: item.key().to_owned(),
        })
    }
}

const fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

impl Index<&str> for EnumCollection {
    type Output = EnumItem;

    fn index(&self, name: &str) -> &EnumItem {
        &self.items[self.properties[name]]
    }
}

/// Borrowing iterator over a collection's items in `keys` order.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    keys: std::slice::Iter<'a, String>,
    collection: &'a EnumCollection,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a EnumItem;

    fn next(&mut self) -> Option<Self::Item> {
        let collection = self.collection;
        self.keys.by_ref().find_map(|key| collection.by_key(key))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // every listed key is registered
        self.keys.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a EnumCollection {
    type Item = &'a EnumItem;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<C> FromIterator<C> for EnumCollection
where
    C: Into<EntryConfig>,
{
    fn from_iter<T: IntoIterator<Item = C>>(iter: T) -> Self {
        enumer(iter)
    }
}
