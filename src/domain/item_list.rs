//! Item list domain model
//!
//! An ordered, titled sequence of shared item handles. The list owns its
//! backing `Vec` but not the items: callers may keep their own handles and
//! observe every state change made through the list.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::rc::Rc;
use thiserror::Error;
use tracing::{debug, trace};

use super::item::Item;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ListError {
    #[error("Expected a todo item, got {0}")]
    TypeMismatch(String),

    #[error("Index {index} is out of range for a list of {len} items")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Failed to parse list: {0}")]
    Parse(String),
}

/// Wire shape of a list before its items have been checked
#[derive(Debug, Deserialize)]
struct ListSnapshot {
    title: String,
    #[serde(default)]
    items: Vec<Value>,
}

/// A titled, ordered list of todo items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ListSnapshot")]
pub struct ItemList {
    title: String,
    items: Vec<Rc<Item>>,
}

impl ItemList {
    /// Creates an empty list
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            items: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Appends an item, either a fresh one or a handle the caller keeps
    pub fn add(&mut self, item: impl Into<Rc<Item>>) {
        self.items.push(item.into());
        trace!(list = %self.title, len = self.items.len(), "Added item");
    }

    /// Appends an item given as untyped JSON
    ///
    /// Only objects with a string `title` (and, optionally, a boolean
    /// `done`) are items. Anything else is rejected and the list is left
    /// untouched.
    pub fn add_value(&mut self, value: Value) -> Result<Rc<Item>, ListError> {
        if let Some(kind) = non_item_kind(&value) {
            debug!(list = %self.title, kind, "Rejected non-item value");
            return Err(ListError::TypeMismatch(kind.to_string()));
        }

        let item: Item = serde_json::from_value(value)
            .map_err(|e| ListError::TypeMismatch(format!("malformed item ({})", e)))?;
        let item = Rc::new(item);
        self.add(Rc::clone(&item));
        Ok(item)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns a copy of the backing sequence; the handles are shared
    pub fn to_vec(&self) -> Vec<Rc<Item>> {
        self.items.clone()
    }

    pub fn first(&self) -> Option<&Rc<Item>> {
        self.items.first()
    }

    pub fn last(&self) -> Option<&Rc<Item>> {
        self.items.last()
    }

    /// Removes and returns the first item
    pub fn shift(&mut self) -> Option<Rc<Item>> {
        if self.items.is_empty() {
            return None;
        }
        let item = self.items.remove(0);
        trace!(list = %self.title, len = self.items.len(), "Shifted item");
        Some(item)
    }

    /// Removes and returns the last item
    pub fn pop(&mut self) -> Option<Rc<Item>> {
        let item = self.items.pop()?;
        trace!(list = %self.title, len = self.items.len(), "Popped item");
        Some(item)
    }

    /// Returns the item at `index`
    pub fn item_at(&self, index: usize) -> Result<&Rc<Item>, ListError> {
        let index = self.checked_index(index)?;
        Ok(&self.items[index])
    }

    pub fn mark_done_at(&self, index: usize) -> Result<(), ListError> {
        self.item_at(index)?.mark_done();
        trace!(list = %self.title, index, "Marked item done");
        Ok(())
    }

    pub fn mark_undone_at(&self, index: usize) -> Result<(), ListError> {
        self.item_at(index)?.mark_undone();
        trace!(list = %self.title, index, "Marked item undone");
        Ok(())
    }

    pub fn mark_all_done(&self) {
        for item in &self.items {
            item.mark_done();
        }
        trace!(list = %self.title, len = self.items.len(), "Marked all items done");
    }

    /// Removes the item at `index`
    ///
    /// Returns the removed handle wrapped in a one-element `Vec`.
    pub fn remove_at(&mut self, index: usize) -> Result<Vec<Rc<Item>>, ListError> {
        let index = self.checked_index(index)?;
        let removed: Vec<_> = self.items.drain(index..=index).collect();
        trace!(list = %self.title, index, len = self.items.len(), "Removed item");
        Ok(removed)
    }

    /// Returns true if every item is done (vacuously true when empty)
    pub fn is_done(&self) -> bool {
        self.items.iter().all(|item| item.is_done())
    }

    pub fn for_each(&self, mut f: impl FnMut(&Item)) {
        for item in &self.items {
            f(item);
        }
    }

    /// Builds a new list with the same title holding the matching items
    pub fn filter(&self, mut predicate: impl FnMut(&Item) -> bool) -> ItemList {
        ItemList {
            title: self.title.clone(),
            items: self
                .items
                .iter()
                .filter(|item| predicate(item))
                .cloned()
                .collect(),
        }
    }

    /// Iterates over the item handles in order
    pub fn iter(&self) -> impl Iterator<Item = &Rc<Item>> {
        self.items.iter()
    }

    /// Serializes the list as `{"title": ..., "items": [...]}`
    pub fn to_json(&self) -> Result<String, ListError> {
        serde_json::to_string(self).map_err(|e| ListError::Parse(e.to_string()))
    }

    /// Parses a list snapshot, checking every element is an item
    pub fn from_json(json: &str) -> Result<Self, ListError> {
        let snapshot: ListSnapshot =
            serde_json::from_str(json).map_err(|e| ListError::Parse(e.to_string()))?;
        Self::try_from(snapshot)
    }

    fn checked_index(&self, index: usize) -> Result<usize, ListError> {
        if index < self.items.len() {
            Ok(index)
        } else {
            debug!(list = %self.title, index, len = self.items.len(), "Index out of range");
            Err(ListError::IndexOutOfRange {
                index,
                len: self.items.len(),
            })
        }
    }
}

/// Describes why `value` cannot be an item, or `None` if it has the item shape
fn non_item_kind(value: &Value) -> Option<&'static str> {
    match value {
        Value::Null => Some("null"),
        Value::Bool(_) => Some("a boolean"),
        Value::Number(_) => Some("a number"),
        Value::String(_) => Some("a string"),
        Value::Array(_) => Some("an array"),
        Value::Object(obj) => match obj.get("title") {
            Some(Value::String(_)) => None,
            _ => Some("an object without a string title"),
        },
    }
}

impl TryFrom<ListSnapshot> for ItemList {
    type Error = ListError;

    fn try_from(snapshot: ListSnapshot) -> Result<Self, Self::Error> {
        let mut list = ItemList::new(snapshot.title);
        for value in snapshot.items {
            list.add_value(value)?;
        }
        Ok(list)
    }
}

impl fmt::Display for ItemList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "---- {} ----", self.title)?;
        for item in &self.items {
            write!(f, "\n{}", item)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a ItemList {
    type Item = &'a Rc<Item>;
    type IntoIter = std::slice::Iter<'a, Rc<Item>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
