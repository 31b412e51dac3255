//! Vistas - one container, many ways to look at it
//!
//! # Overview
//!
//! Vistas stores a homogeneous sequence of integers, floats or strings and
//! lets you walk it in six different orders without ever reordering the
//! stored data:
//!
//! - `order`: insertion order
//! - `ascending` / `descending`: stable sorts
//! - `reverse`: insertion order mirrored
//! - `side-cross`: smallest, largest, next smallest, next largest, ...
//! - `middle-out`: from the sorted middle outward
//!
//! # Quick Start
//!
//! ```
//! use vistas::prelude::*;
//!
//! let mut numbers: Container<i64> = [1, 2, 3, 4, 6, 7].into_iter().collect();
//!
//! // A begin/end pair, walked like a classic cursor.
//! let mut it = numbers.begin_side_cross();
//! let end = numbers.end_side_cross();
//! let mut seen = Vec::new();
//! while it.not_equals(&end)? {
//!     seen.push(*it.current()?);
//!     it.advance()?;
//! }
//! assert_eq!(seen, [1, 7, 2, 6, 3, 4]);
//!
//! // Views notice when the container changes under them.
//! numbers.remove_all(&7)?;
//! assert!(matches!(it.current(), Err(Error::InvalidatedView { .. })));
//! # Ok::<(), Error>(())
//! ```
//!
//! # Element Kinds
//!
//! Only `i64`, `f64` and `String` implement [`Element`]. Anything else fails to
//! compile:
//!
//! ```compile_fail
//! let c: vistas::Container<u8> = vistas::Container::new();
//! ```

pub use vistas_core::{
    Container, Element, ElementKind, Error, Listing, OrderKind, ParseElementError, ParseOrderKindError,
    Result, Revision, RevisionWatch, View,
};

/// Low-level modules, for callers that want the ordering functions directly.
pub use vistas_core::{element, order, revision};

pub mod prelude {
    pub use vistas_core::{Container, Element, Error, OrderKind, View};
}
