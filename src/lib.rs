//! todo-list - An in-memory list of todo items
//!
//! A list owns an ordered sequence of shared item handles and offers
//! positional access, bulk status changes, filtering and a fixed
//! textual rendering.

pub mod domain;

pub use domain::{Item, ItemList, ListError};
