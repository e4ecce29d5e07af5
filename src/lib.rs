//! ## Intro
//!
//! A small-vector library built around a single container, [`InlineVec`]:
//! a contiguous, growable vector that keeps up to `N` elements in a buffer
//! embedded in the container itself and transparently spills to the heap
//! once the element count exceeds `N`.
//!
//! Many workloads have collections that are almost always small but
//! occasionally grow. Keeping the common case inline avoids the allocator
//! round trip and keeps the elements next to whatever owns them, which is
//! usually better for cache locality.
//!
//! ## Behavior
//!
//! - While `len() <= N` the elements live inside the container; no heap
//!   allocation is performed.
//! - The first append past `N` allocates a strictly larger heap buffer,
//!   relocates the elements in index order, and adopts it. From that point
//!   on the container stays in heap mode for its whole lifetime: clearing
//!   or truncating it keeps the allocated capacity so that repopulating is
//!   cheap.
//! - Appends are amortized O(1): growth is always geometric, never by a
//!   constant increment.
//!
//! ```
//! use inlinevec::InlineVec;
//!
//! let mut v: InlineVec<i32, 4> = InlineVec::new();
//! v.push(1);
//! v.push(2);
//! assert!(!v.spilled());          // still inline
//!
//! v.extend([3, 4, 5]);
//! assert!(v.spilled());           // moved to the heap
//! assert_eq!(v, [1, 2, 3, 4, 5]);
//!
//! v.clear();
//! assert!(v.spilled());           // heap mode is kept, capacity reused
//! ```
//!
//! ## Element access
//!
//! The container dereferences to `[T]`, so indexing, slicing and iteration
//! work the way they do on a slice: `v[i]` is bounds-checked, `v.get(i)`
//! returns an `Option`, and `v.get_unchecked(i)` is the unchecked fast path
//! for callers that have already validated the index.
//!
//! ## Alias
//!
//! - [`InlineVec8<T>`] = `InlineVec<T, 8>`, for tiny collections
//! - [`InlineVec16<T>`] = `InlineVec<T, 16>`, a general-purpose balance
//!
//! ## `no_std` support
//!
//! This crate requires only `core` and `alloc`, making it suitable for
//! embedded and no_std environments.
//!
//! ## Optional features
//!
//! ### `serde`
//!
//! When this optional dependency is enabled, [`InlineVec`] implements the
//! [`serde::Serialize`] and [`serde::Deserialize`] traits. The wire format
//! is a plain sequence and is identical in both storage modes.
//!
//! ### `std`
//!
//! Implements [`std::io::Write`] for `InlineVec<u8, N>`, growing the vector
//! as needed.
//!
//! [`serde::Serialize`]: https://docs.rs/serde/latest/serde/trait.Serialize.html
//! [`serde::Deserialize`]: https://docs.rs/serde/latest/serde/trait.Deserialize.html
//! [`std::io::Write`]: https://doc.rust-lang.org/std/io/trait.Write.html
#![no_std]

extern crate alloc;

mod inline_buf;

pub mod vec;

#[cfg(feature = "serde")]
mod serde;

#[cfg(feature = "std")]
mod std_io;

#[doc(inline)]
pub use vec::InlineVec;

/// An `InlineVec` with an inline capacity of 8 elements.
///
/// This is an alias for [`InlineVec<T, 8>`].
///
/// A reasonable default for collections that are expected to hold a handful
/// of elements most of the time.
///
/// # Examples
///
/// ```
/// # use inlinevec::InlineVec8;
/// let mut v: InlineVec8<i32> = InlineVec8::new();
/// v.extend([1, 2, 3]);
/// assert!(!v.spilled());
/// assert_eq!(v, [1, 2, 3]);
/// ```
pub type InlineVec8<T> = InlineVec<T, 8>;

/// An `InlineVec` with an inline capacity of 16 elements.
///
/// This is an alias for [`InlineVec<T, 16>`].
pub type InlineVec16<T> = InlineVec<T, 16>;
