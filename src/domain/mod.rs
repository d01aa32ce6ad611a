//! Domain models for todo-list
//!
//! Contains the item and list types without any I/O concerns.

mod item;
mod item_list;

pub use item::Item;
pub use item_list::{ItemList, ListError};
