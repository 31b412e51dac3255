//! Error types returned by containers and views.
//!
//! Every failure is reported to the caller at the point of the offending
//! call. Nothing here is retried or swallowed; recovery belongs to the caller.

use thiserror::Error;

use crate::element::ElementKind;
use crate::{String, ToString};

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors raised by [`Container`](crate::Container) and [`View`](crate::View)
/// operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// `remove_all` matched no element. The container is left unchanged.
    #[error("element not found in the container: {element}")]
    ElementNotFound { element: String },

    /// The source container was mutated (or dropped) after the view was
    /// created. Permanent for that view; build a fresh one instead.
    #[error("view invalidated: captured revision {captured}, container is now at {}", fmt_current(.current))]
    InvalidatedView {
        captured: u64,
        /// `None` when the container no longer exists.
        current: Option<u64>,
    },

    /// `current()` was called on a view positioned at its end.
    #[error("index {index} out of range for view of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

fn fmt_current(current: &Option<u64>) -> String {
    match current {
        Some(revision) => revision.to_string(),
        None => "dropped".to_string(),
    }
}

impl Error {
    pub fn is_invalidated(&self) -> bool {
        matches!(self, Error::InvalidatedView { .. })
    }
}

/// A textual token could not be read as an element of the given kind.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("cannot parse {token:?} as {kind}")]
pub struct ParseElementError {
    pub kind: ElementKind,
    pub token: String,
}

impl ParseElementError {
    pub fn new(kind: ElementKind, token: &str) -> Self {
        Self {
            kind,
            token: token.to_string(),
        }
    }
}
