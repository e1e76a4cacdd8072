//! An AVL tree backed navigable ordered set for Rust.
//!
//! This crate provides [`AvlSet`], an ordered set whose order comes from an injected
//! [`Comparator`] rather than from the element type alone. On top of the usual set operations
//! it exposes the navigable-set queries:
//!
//! - [`lower`](AvlSet::lower) / [`higher`](AvlSet::higher) - nearest element strictly below / above
//! - [`floor`](AvlSet::floor) / [`ceiling`](AvlSet::ceiling) - nearest element at or below / above
//! - [`pop_first`](AvlSet::pop_first) / [`pop_last`](AvlSet::pop_last) - remove an extreme element
//! - [`ascending`](AvlSet::ascending) / [`descending`](AvlSet::descending) - iterators that can
//!   remove the element they just yielded
//!
//! # Example
//!
//! ```
//! use avl_set::{AvlSet, ReverseOrder};
//!
//! let mut set = AvlSet::from([5, 3, 8, 1, 4, 7, 9]);
//!
//! assert_eq!(set.floor(&6), Some(&5));
//! assert_eq!(set.ceiling(&6), Some(&7));
//! assert_eq!(set.lower(&5), Some(&4));
//! assert_eq!(set.higher(&5), Some(&7));
//!
//! // Drop the odd elements while walking from the top.
//! let mut iter = set.descending();
//! while let Some(value) = iter.next() {
//!     if value % 2 == 1 {
//!         iter.remove().unwrap();
//!     }
//! }
//! assert_eq!(set.to_vec(), [4, 8]);
//!
//! // Any total order can be injected.
//! let reversed = AvlSet::from_iter_with_comparator(ReverseOrder, [1, 2, 3]);
//! assert_eq!(reversed.first(), Ok(&3));
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`, no standard library dependency
//! - **Injected ordering** - any [`Comparator`], including closures via [`AvlSet::from_fn`]
//! - **O(log n) everything** - the AVL invariant bounds the tree height by ~1.44 log2(n)
//! - **Removal during iteration** - [`KeyIter::remove`](avl_set::KeyIter::remove) in both directions
//!
//! # Implementation
//!
//! Nodes live in an arena and refer to each other by handle: `left` and `right` give the tree
//! shape and `parent` is a plain back link used for upward walks. Insertions and deletions
//! rebalance with an iterative walk towards the root. Deleting a node with two children moves
//! its in-order predecessor's key into it and unlinks the predecessor's node instead.

#![no_std]
// These forbid rules and lint groups are meant to be very restrictive.
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod comparator;
mod error;
mod raw;

pub mod avl_set;

pub use avl_set::AvlSet;
pub use comparator::{Comparator, FnComparator, NaturalOrder, ReverseOrder};
pub use error::AvlSetError;
