//! A teaching-grade generic singly-linked list.

pub mod linked_list;

pub use linked_list::{IntoIter, Iter, LinkedList, ListError};
