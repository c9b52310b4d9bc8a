//! Fixed-capacity deque over a circular buffer.
//!
//! Features:
//! - O(1) insertion and removal at both ends
//! - Strict (`Result`) and permissive (`Option`/`bool`) operation pairs
//! - Linearized export: `to_vec`, `Display`, serde
//! - No allocation after construction

use std::fmt;

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use tracing::{debug, trace};

use crate::errors::{CapacityError, EmptyError};

/// Logical capacity used by [`RingDeque::new`].
pub const DEFAULT_CAPACITY: usize = 8;

/// A double-ended queue of fixed capacity.
///
/// Storage is a circular buffer of `capacity + 1` slots; the spare slot
/// keeps a full deque distinguishable from an empty one (`head == tail`
/// always means empty). `head` is the index of the first logical element,
/// `tail` the index one past the last. `len` is kept alongside so size
/// queries never touch the index arithmetic.
///
/// Every operation comes in a strict and a permissive flavor: the strict
/// ones (`push_front`, `remove_back`, `first`, ...) report boundary states
/// as errors, the permissive ones (`offer_front`, `pop_back`, `front`, ...)
/// report them as `false`/`None`. Both flavors share the same underlying
/// primitives, so their mutation behavior is identical.
pub struct RingDeque<T> {
    buf: Box<[Option<T>]>,
    head: usize,
    tail: usize,
    len: usize,
}

impl<T> RingDeque<T> {
    /// Create an empty deque with the default capacity of
    /// [`DEFAULT_CAPACITY`] elements.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an empty deque holding up to `capacity` elements.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "RingDeque capacity must be greater than zero");
        let buf: Vec<Option<T>> = std::iter::repeat_with(|| None).take(capacity + 1).collect();
        Self {
            buf: buf.into_boxed_slice(),
            head: 0,
            tail: 0,
            len: 0,
        }
    }

    /// Number of elements currently stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when the deque holds no elements.
    pub fn is_empty(&self) -> bool {
        self.head == self.tail
    }

    /// True when no further element can be inserted.
    pub fn is_full(&self) -> bool {
        (self.head == 0 && self.tail == self.buf.len() - 1) || self.head == self.tail + 1
    }

    /// Maximum number of elements the deque can hold.
    pub fn capacity(&self) -> usize {
        self.buf.len() - 1
    }

    /// Next index clockwise, wrapping past the end of the buffer.
    fn wrap_add(&self, index: usize) -> usize {
        if index + 1 == self.buf.len() {
            0
        } else {
            index + 1
        }
    }

    /// Next index counter-clockwise, wrapping below zero.
    fn wrap_sub(&self, index: usize) -> usize {
        if index == 0 {
            self.buf.len() - 1
        } else {
            index - 1
        }
    }

    /// Insert at the head, handing the element back when full.
    fn try_insert_front(&mut self, item: T) -> Result<(), T> {
        if self.is_full() {
            return Err(item);
        }
        self.head = self.wrap_sub(self.head);
        self.buf[self.head] = Some(item);
        self.len += 1;
        trace!(head = self.head, tail = self.tail, len = self.len, "insert front");
        Ok(())
    }

    /// Insert past the tail, handing the element back when full.
    fn try_insert_back(&mut self, item: T) -> Result<(), T> {
        if self.is_full() {
            return Err(item);
        }
        self.buf[self.tail] = Some(item);
        self.tail = self.wrap_add(self.tail);
        self.len += 1;
        trace!(head = self.head, tail = self.tail, len = self.len, "insert back");
        Ok(())
    }

    /// Take the head element, clearing its slot. `None` when empty.
    fn take_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let item = self.buf[self.head].take();
        self.head = self.wrap_add(self.head);
        self.len -= 1;
        trace!(head = self.head, tail = self.tail, len = self.len, "take front");
        item
    }

    /// Take the last element, clearing its slot. `None` when empty.
    fn take_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        self.tail = self.wrap_sub(self.tail);
        let item = self.buf[self.tail].take();
        self.len -= 1;
        trace!(head = self.head, tail = self.tail, len = self.len, "take back");
        item
    }

    /// Logical elements in head-to-tail order.
    ///
    /// The occupied region is either one contiguous slice or two (when it
    /// wraps past the end of the buffer); slots inside it are always
    /// `Some`, so flattening loses nothing.
    fn iter_elements(&self) -> impl Iterator<Item = &T> {
        let (front, back) = if self.head <= self.tail {
            (&self.buf[self.head..self.tail], &self.buf[..0])
        } else {
            (&self.buf[self.head..], &self.buf[..self.tail])
        };
        front.iter().chain(back.iter()).flatten()
    }

    /// Insert at the front.
    ///
    /// On a full deque nothing changes and the rejected element comes back
    /// inside the error.
    pub fn push_front(&mut self, item: T) -> Result<(), CapacityError<T>> {
        self.try_insert_front(item).map_err(|element| {
            debug!(capacity = self.capacity(), "push_front rejected, deque full");
            CapacityError {
                capacity: self.capacity(),
                element,
            }
        })
    }

    /// Insert at the back.
    ///
    /// On a full deque nothing changes and the rejected element comes back
    /// inside the error.
    pub fn push_back(&mut self, item: T) -> Result<(), CapacityError<T>> {
        self.try_insert_back(item).map_err(|element| {
            debug!(capacity = self.capacity(), "push_back rejected, deque full");
            CapacityError {
                capacity: self.capacity(),
                element,
            }
        })
    }

    /// Insert at the back, acknowledging success with `Ok(true)`.
    ///
    /// Alias for [`push_back`](Self::push_back) with a boolean
    /// acknowledgment.
    pub fn add(&mut self, item: T) -> Result<bool, CapacityError<T>> {
        self.push_back(item)?;
        Ok(true)
    }

    /// Insert at the front, returning whether the insertion happened.
    ///
    /// A full deque stays untouched and the element is dropped; use
    /// [`push_front`](Self::push_front) to get the element back instead.
    pub fn offer_front(&mut self, item: T) -> bool {
        self.try_insert_front(item).is_ok()
    }

    /// Insert at the back, returning whether the insertion happened.
    ///
    /// A full deque stays untouched and the element is dropped; use
    /// [`push_back`](Self::push_back) to get the element back instead.
    pub fn offer_back(&mut self, item: T) -> bool {
        self.try_insert_back(item).is_ok()
    }

    /// Remove and return the first element, or `None` when empty.
    pub fn pop_front(&mut self) -> Option<T> {
        self.take_front()
    }

    /// Remove and return the last element, or `None` when empty.
    pub fn pop_back(&mut self) -> Option<T> {
        self.take_back()
    }

    /// Remove and return the first element, failing when empty.
    pub fn remove_front(&mut self) -> Result<T, EmptyError> {
        self.take_front().ok_or_else(|| {
            debug!("remove_front rejected, deque empty");
            EmptyError
        })
    }

    /// Remove and return the last element, failing when empty.
    pub fn remove_back(&mut self) -> Result<T, EmptyError> {
        self.take_back().ok_or_else(|| {
            debug!("remove_back rejected, deque empty");
            EmptyError
        })
    }

    /// Borrow the first element, or `None` when empty.
    pub fn front(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.buf[self.head].as_ref()
    }

    /// Borrow the last element, or `None` when empty.
    pub fn back(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.buf[self.wrap_sub(self.tail)].as_ref()
    }

    /// Borrow the first element, failing when empty.
    pub fn first(&self) -> Result<&T, EmptyError> {
        self.front().ok_or(EmptyError)
    }

    /// Borrow the last element, failing when empty.
    pub fn last(&self) -> Result<&T, EmptyError> {
        self.back().ok_or(EmptyError)
    }

    /// Drop every element and reset the indices.
    pub fn clear(&mut self) {
        for slot in self.buf.iter_mut() {
            *slot = None;
        }
        self.head = 0;
        self.tail = 0;
        self.len = 0;
        trace!("cleared");
    }
}

impl<T: Clone> RingDeque<T> {
    /// Copy the logical contents into a fresh `Vec`, head to tail.
    ///
    /// The result never aliases the internal buffer; mutating it leaves
    /// the deque untouched.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter_elements().cloned().collect()
    }
}

impl<T> Default for RingDeque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for RingDeque<T> {
    fn clone(&self) -> Self {
        Self {
            buf: self.buf.to_vec().into_boxed_slice(),
            head: self.head,
            tail: self.tail,
            len: self.len,
        }
    }
}

/// Equality over logical contents, independent of buffer offset.
impl<T: PartialEq> PartialEq for RingDeque<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter_elements().eq(other.iter_elements())
    }
}

impl<T: Eq> Eq for RingDeque<T> {}

/// Renders `[ e1 e2 ... eN ]` head to tail, `[ ]` when empty.
impl<T: fmt::Display> fmt::Display for RingDeque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for item in self.iter_elements() {
            write!(f, " {item}")?;
        }
        f.write_str(" ]")
    }
}

/// Debug shows the logical sequence, not the circular layout.
impl<T: fmt::Debug> fmt::Debug for RingDeque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter_elements()).finish()
    }
}

/// Serializes as a plain sequence in head-to-tail order.
impl<T: Serialize> Serialize for RingDeque<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter_elements())
    }
}

/// Rebuilds with capacity `max(element count, DEFAULT_CAPACITY)`.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for RingDeque<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let items = Vec::<T>::deserialize(deserializer)?;
        let mut deque = RingDeque::with_capacity(items.len().max(DEFAULT_CAPACITY));
        for item in items {
            let inserted = deque.offer_back(item);
            debug_assert!(inserted, "capacity sized to fit every element");
        }
        Ok(deque)
    }
}
