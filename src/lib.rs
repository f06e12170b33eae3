//! `GrowBuf`: a growable buffer with caller-supplied allocators and explicit
//! create/destroy lifetime.
//!
//! `GrowBuf<T>` addresses a contiguous region of typed slots, tracks how much
//! of it is live versus merely reserved, and supports capacity growth and
//! shrinkage, positional insertion and removal, and sub-sequence search.
//! Nothing allocates behind the caller's back: every operation that can touch
//! memory takes a [`RawAllocator`], failures are reported through
//! [`FailureHooks`] callbacks plus `Result` values, and the region is
//! released only by an explicit [`destroy`](GrowBuf::destroy). The type has
//! no `Drop` impl, so a forgotten destroy leaks rather than double-frees.
//!
//! ```
//! use growbuf::{Global, GrowBuf, NoHooks};
//!
//! let mut alloc = Global;
//! let mut hooks = NoHooks;
//!
//! let mut buf: GrowBuf<u32> = GrowBuf::with_capacity(4, &mut alloc, &mut hooks);
//! assert_eq!(buf.capacity(), 4);
//! assert!(buf.is_empty());
//!
//! // An empty buffer takes the collection from the front.
//! buf.insert_after(0, &[1, 2, 3], &mut alloc, &mut hooks).unwrap();
//! assert_eq!(buf.as_slice(), &[1, 2, 3]);
//!
//! // Insertion after index 0 shifts the tail and grows on demand.
//! buf.insert_after(0, &[9, 9], &mut alloc, &mut hooks).unwrap();
//! assert_eq!(buf.as_slice(), &[1, 9, 9, 2, 3]);
//!
//! buf.destroy(&mut alloc);
//! ```
//!
//! # Lifecycle States
//!
//! A buffer is always in one of four states, derived purely from its
//! pointer/length/capacity fields and reported by [`state`](GrowBuf::state):
//! `Null` (no region), `Empty` (region, no live elements), `Partial`, and
//! `Full`. Constructors that fail leave a `Null` buffer; resize failures
//! leave the record untouched.
//!
//! # Capacity Management
//!
//! [`resize`](GrowBuf::resize), [`grow_by`](GrowBuf::grow_by), and
//! [`shrink_by`](GrowBuf::shrink_by) move the capacity explicitly; removal
//! never reclaims memory on its own. All size arithmetic is overflow-checked
//! before the allocator sees a number. An overflowing computation is a
//! *silent* no-op: no hook fires and no error is returned. A wrapping size
//! request is treated as invalid input rather than an allocator refusal:
//!
//! ```
//! use growbuf::{BufState, Global, GrowBuf, NoHooks};
//!
//! let mut alloc = Global;
//! let mut hooks = NoHooks;
//!
//! // usize::MAX slots of a 4-byte element cannot be sized; the allocator
//! // is never called and the result is Null.
//! let buf: GrowBuf<u32> = GrowBuf::with_capacity(usize::MAX, &mut alloc, &mut hooks);
//! assert_eq!(buf.state(), BufState::Null);
//! ```
//!
//! # Search Interface
//!
//! Sub-sequence search follows the container convention of returning
//! `Option<usize>`:
//!
//! ```
//! use growbuf::{Global, GrowBuf, NoHooks};
//!
//! let mut alloc = Global;
//! let mut hooks = NoHooks;
//!
//! let mut buf: GrowBuf<i64> = GrowBuf::with_capacity(5, &mut alloc, &mut hooks);
//! buf.insert_after(0, &[1, 2, 3, 4, 5], &mut alloc, &mut hooks).unwrap();
//!
//! assert_eq!(buf.first_index_of(&[3]), Some(2));
//! assert_eq!(buf.first_index_of(&[7]), None);
//! assert!(buf.starts_with(&[1, 2]));
//! assert!(buf.ends_with(&[4, 5]));
//!
//! buf.remove_each_instance(&[2, 4]);
//! assert_eq!(buf.as_slice(), &[1, 3, 5]);
//! assert_eq!(buf.capacity(), 5);
//!
//! buf.destroy(&mut alloc);
//! ```
//!
//! # Unchecked Primitives
//!
//! [`shift_right_from`](GrowBuf::shift_right_from) and
//! [`insert_after_unchecked`](GrowBuf::insert_after_unchecked) are the
//! `unsafe` fast paths: they skip the index and capacity validation of
//! [`insert_after`](GrowBuf::insert_after) and document their preconditions
//! as a strict contract, guarded by `debug_assert!` in debug builds.

mod alloc;
mod capacity;
mod core;
mod error;
mod insert;
mod search;

// Re-export public types and traits
pub use crate::alloc::{FailureHooks, Global, NoHooks, RawAllocator};
pub use crate::core::{BufState, GrowBuf};
pub use crate::error::GrowBufError;
