#![no_std]

//! `GrowVec`: a growable, heap-backed vector with a four-cursor traversal
//! family, plus companion list, stack, and queue containers.
//!
//! `GrowVec` owns a single contiguous heap block and tracks how many of its
//! slots hold live elements. When an insertion would exceed the allocated
//! capacity, the block is replaced by one twice the size and the elements
//! are moved over, so the amortized cost of appending stays constant. All
//! index- and state-checked operations report failures through one shared
//! error type, [`ContainerError`], used uniformly by every container in the
//! crate.
//!
//! This crate is `no_std` compatible and performs no allocations beyond the
//! containers' own storage.
//!
//! ```
//! use growvec::GrowVec;
//!
//! let mut v = GrowVec::new();
//! v.push(3);
//! v.push(6);
//! v.push(12);
//!
//! assert_eq!(v.len(), 3);
//! assert_eq!(v.get(1), Some(&6));
//! assert_eq!(v.pop(), Some(12));
//! ```
//!
//! # Capacity and growth
//!
//! A default-constructed vector pre-allocates four slots so that the first
//! few pushes do not each pay for a reallocation. Growth always doubles,
//! with a floor of one slot so that a zero-capacity vector can still make
//! progress:
//!
//! ```
//! use growvec::GrowVec;
//!
//! let mut v = GrowVec::new();
//! assert_eq!(v.capacity(), 4);
//!
//! for i in 0..4 {
//!     v.push(i);
//! }
//! assert_eq!(v.capacity(), 4);
//!
//! v.push(4); // exceeds capacity, block is reallocated
//! assert_eq!(v.capacity(), 8);
//! ```
//!
//! # Cursors
//!
//! Traversal goes through four cursor types covering each combination of
//! direction and mutability: [`Iter`], [`IterMut`], [`RevIter`] and
//! [`RevIterMut`]. A cursor yields every live element exactly once and then
//! stays exhausted; the shared variants implement `Clone`.
//!
//! ```
//! use growvec::GrowVec;
//!
//! let mut v = GrowVec::from([3, 6, 12, 1, 20]);
//!
//! let forward: Vec<i32> = v.iter().copied().collect();
//! assert_eq!(forward, [3, 6, 12, 1, 20]);
//!
//! let backward: Vec<i32> = v.iter_rev().copied().collect();
//! assert_eq!(backward, [20, 1, 12, 6, 3]);
//!
//! for item in v.iter_mut() {
//!     *item *= 10;
//! }
//! assert_eq!(v.get(0), Some(&30));
//! ```
//!
//! Cursors borrow the vector, so any mutation that could reallocate or
//! shift elements while a cursor is alive is rejected at compile time.
//!
//! # Error handling
//!
//! Checked operations return `Result<_, ContainerError>` and perform no
//! mutation on failure. The vector additionally offers `Option`-returning
//! conveniences (`get`, `pop`, `first`, `last`) next to the `try_`
//! variants.
//!
//! ```
//! use growvec::{ContainerError, GrowVec};
//!
//! let mut v = GrowVec::from([1]);
//! let result = v.insert(5, 2);
//! assert_eq!(
//!     result.unwrap_err(),
//!     ContainerError::IndexOutOfRange { index: 5, length: 1 }
//! );
//! assert_eq!(v.as_slice(), &[1]); // unchanged
//! ```
//!
//! # Companion containers
//!
//! The crate also provides [`SinglyList`] and [`DoublyList`] linked lists,
//! a list-backed [`ListStack`] and [`ListQueue`], and two fixed-capacity
//! structures, [`ArrayStack`] and [`RingQueue`], whose capacity is a const
//! generic parameter. The fixed-capacity containers are the only ones that
//! can fail with [`ContainerError::ContainerFull`].
//!
//! ```
//! use growvec::{ArrayStack, ContainerError};
//!
//! let mut stack = ArrayStack::<i32, 2>::new();
//! stack.push(1).unwrap();
//! stack.push(2).unwrap();
//! assert_eq!(
//!     stack.push(3).unwrap_err(),
//!     ContainerError::ContainerFull { capacity: 2 }
//! );
//! assert_eq!(stack.pop(), Ok(2));
//! ```

extern crate alloc;

mod array_stack;
mod doubly_list;
mod error;
mod iter;
mod list_queue;
mod list_stack;
mod raw;
mod ring_queue;
mod singly_list;
mod vector;

// Re-export public types and traits
pub use array_stack::ArrayStack;
pub use doubly_list::{DoublyList, DoublyListIter, DoublyListRevIter};
pub use error::ContainerError;
pub use iter::{Iter, IterMut, RevIter, RevIterMut};
pub use list_queue::ListQueue;
pub use list_stack::ListStack;
pub use ring_queue::RingQueue;
pub use singly_list::{SinglyList, SinglyListIter};
pub use vector::GrowVec;
