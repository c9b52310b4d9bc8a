//! RingDeque - a fixed-capacity double-ended queue
//!
//! A deque over a preallocated circular buffer: O(1) insertion and removal
//! at both ends, no allocation after construction, and no growth. When the
//! buffer is full, insertion fails instead of resizing.
//!
//! - **Two failure conventions**: every boundary-sensitive operation comes
//!   as a strict pair (`push_front`/`remove_back`/`first`, returning
//!   `Result`) and a permissive pair (`offer_front`/`pop_back`/`front`,
//!   returning `bool`/`Option`)
//! - **Linearized export**: `to_vec`, `Display` (`[ 1 2 3 ]`), and serde
//!   all present the logical head-to-tail order, never the buffer layout
//! - **Single-threaded**: `&mut self` everywhere, no locks, no unsafe
//!
//! # Quick Start
//!
//! ```
//! use ringdeque::RingDeque;
//!
//! let mut deque = RingDeque::with_capacity(3);
//! deque.push_back(1)?;
//! deque.push_back(2)?;
//! deque.push_front(0)?;
//!
//! assert!(deque.is_full());
//! assert!(!deque.offer_back(9));
//! assert_eq!(deque.to_vec(), vec![0, 1, 2]);
//! assert_eq!(deque.pop_front(), Some(0));
//! assert_eq!(deque.to_string(), "[ 1 2 ]");
//! # Ok::<(), ringdeque::CapacityError<i32>>(())
//! ```

pub mod deque;
pub mod errors;

pub use deque::{RingDeque, DEFAULT_CAPACITY};
pub use errors::{CapacityError, EmptyError};
