//! Homogeneous containers with revision-checked, multi-order views.
//!
//! A [`Container`] stores `int`, `float` or `text` elements in insertion
//! order. It never reorders them. Instead it hands out [`View`]s: cursors
//! over a private, reordered copy of the elements taken at creation time.
//! Six orders are available (see [`OrderKind`]).
//!
//! Views stay memory-safe when the container changes underneath them, since
//! they own their data. What they cannot do is silently show outdated data:
//! each view remembers the container revision it was built from and every
//! operation fails with [`Error::InvalidatedView`] once that revision has
//! moved on.

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
#![deny(unsafe_code)]

// This works on std and no_std and is harmless.
extern crate alloc;

#[doc(hidden)]
pub mod shim {
    pub use alloc::{string::String, string::ToString, vec, vec::Vec};
}

#[allow(unused_imports)]
pub(crate) use shim::*;

pub mod container;
pub mod element;
pub mod error;
pub mod order;
pub mod revision;
pub mod view;

pub use container::{Container, Listing};
pub use element::{Element, ElementKind};
pub use error::{Error, ParseElementError, Result};
pub use order::{OrderKind, ParseOrderKindError};
pub use revision::{Revision, RevisionWatch};
pub use view::View;
