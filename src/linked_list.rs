//! A generic singly-linked list with O(1) append and first-match deletion.
//!
//! Each node exclusively owns its successor through a `Box`; the list owns
//! the head and keeps a non-owning raw pointer to the tail so appends stay
//! O(1). The raw tail pointer is revalidated on every structural change and
//! makes [`LinkedList`] neither `Send` nor `Sync`, so the single-threaded
//! contract is enforced by the compiler rather than documented away.
//! Iteration borrows the list, so mutating it mid-traversal is rejected at
//! compile time.

use std::fmt;
use std::ptr;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ListError {
    /// An operation was handed an absent value. Raised before any mutation.
    #[error("absent value: list operations require a present value")]
    InvalidArgument,
}

#[derive(Debug)]
struct Node<T> {
    data: T,
    next: Option<Box<Node<T>>>,
}

#[derive(Debug)]
pub struct LinkedList<T> {
    head: Option<Box<Node<T>>>,
    tail: *mut Node<T>,
    count: usize,
}

impl<T> LinkedList<T> {
    /// Creates an empty list.
    pub fn new() -> LinkedList<T> {
        LinkedList {
            head: None,
            tail: ptr::null_mut(),
            count: 0,
        }
    }

    /// Number of elements currently in the list.
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Appends `data` at the tail in O(1).
    ///
    /// Accepts anything convertible to `Option<T>`, so call sites pass plain
    /// values; an absent value (`None`) fails with
    /// [`ListError::InvalidArgument`] and leaves the list untouched.
    pub fn add(&mut self, data: impl Into<Option<T>>) -> Result<(), ListError> {
        let data = data.into().ok_or(ListError::InvalidArgument)?;
        self.append(data);
        Ok(())
    }

    fn append(&mut self, data: T) {
        let mut node = Box::new(Node { data, next: None });
        let new_tail: *mut Node<T> = &mut *node;
        if self.tail.is_null() {
            self.head = Some(node);
        } else {
            // SAFETY: a non-null tail addresses the last node of the chain
            // owned by head; every structural mutation keeps it current.
            unsafe { (*self.tail).next = Some(node) };
        }
        self.tail = new_tail;
        self.count += 1;
    }

    /// Removes the first element equal to `data`, relinking around it.
    ///
    /// Only the earliest-inserted match is removed; later duplicates stay.
    /// Deleting a value that is not present is a silent no-op, not an error.
    /// An absent value (`None`) fails with [`ListError::InvalidArgument`]
    /// and leaves the list untouched. O(n) worst case.
    pub fn delete(&mut self, data: impl Into<Option<T>>) -> Result<(), ListError>
    where
        T: PartialEq,
    {
        let data = data.into().ok_or(ListError::InvalidArgument)?;
        let mut cursor = &mut self.head;
        while cursor.is_some() {
            if cursor.as_ref().unwrap().data == data {
                let mut removed = cursor.take().unwrap();
                let was_tail = removed.next.is_none();
                *cursor = removed.next.take();
                self.count -= 1;
                if was_tail {
                    self.rescan_tail();
                }
                return Ok(());
            }
            let node = cursor.as_mut().unwrap();
            cursor = &mut node.next;
        }
        Ok(())
    }

    /// Removes every element. The chain is unlinked iteratively so a long
    /// list cannot overflow the stack while its nodes drop.
    pub fn clear(&mut self) {
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
        }
        self.tail = ptr::null_mut();
        self.count = 0;
    }

    /// Walks the chain to relocate the last node. Called after a structural
    /// change that removed the node the tail pointer addressed.
    fn rescan_tail(&mut self) {
        let mut tail: *mut Node<T> = ptr::null_mut();
        let mut cursor = self.head.as_deref_mut();
        while let Some(node) = cursor {
            tail = &mut *node;
            cursor = node.next.as_deref_mut();
        }
        self.tail = tail;
    }

    /// Iterates the elements in insertion order. Each call starts a fresh
    /// traversal from the head.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        let mut list = LinkedList::new();
        for value in self {
            list.append(value.clone());
        }
        list
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.count == other.count && self.iter().eq(other.iter())
    }
}

impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sep = "";
        for value in self {
            write!(f, "{}{}", sep, value)?;
            sep = " ";
        }
        Ok(())
    }
}

pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.data
        })
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// Consuming iterator; pops elements off the head until the list drains.
pub struct IntoIter<T> {
    list: LinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let node = self.list.head.take()?;
        self.list.head = node.next;
        if self.list.head.is_none() {
            self.list.tail = ptr::null_mut();
        }
        self.list.count -= 1;
        Some(node.data)
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { list: self }
    }
}
