//! The closed set of element kinds a [`Container`](crate::Container) may hold.
//!
//! Only three Rust types implement [`Element`]:
//!
//! - `i64` (`int`)
//! - `f64` (`float`)
//! - `String` (`text`)
//!
//! The trait is sealed, so instantiating a container for anything else is
//! rejected by the compiler:
//!
//! ```compile_fail
//! use vistas_core::Container;
//!
//! let mut c: Container<bool> = Container::new();
//! c.append(true);
//! ```
//!
//! ```compile_fail
//! use vistas_core::Container;
//!
//! let c: Container<&'static str> = Container::new();
//! ```

use core::cmp::Ordering;
use core::fmt::{self, Debug, Display};

use crate::error::ParseElementError;
use crate::{String, ToString};

mod sealed {
    pub trait Sealed {}

    impl Sealed for i64 {}
    impl Sealed for f64 {}
    impl Sealed for crate::String {}
}

static_assertions::assert_impl_all!(i64: Element);
static_assertions::assert_impl_all!(f64: Element);
static_assertions::assert_impl_all!(String: Element);
static_assertions::assert_not_impl_any!(i32: Element);
static_assertions::assert_not_impl_any!(f32: Element);
static_assertions::assert_not_impl_any!(bool: Element);
static_assertions::assert_not_impl_any!(&'static str: Element);

/// Runtime tag for an element type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Int,
    Float,
    Text,
}

impl ElementKind {
    pub const ALL: [ElementKind; 3] = [ElementKind::Int, ElementKind::Float, ElementKind::Text];

    pub fn name(self) -> &'static str {
        match self {
            ElementKind::Int => "int",
            ElementKind::Float => "float",
            ElementKind::Text => "text",
        }
    }
}

impl Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A value that can be stored in a [`Container`](crate::Container).
///
/// Each implementation defines:
/// - Its [`ElementKind`] tag
/// - A total natural order used by the sorted views
/// - How to parse itself from a textual token
///
/// Rendering uses the type's [`Display`] implementation.
pub trait Element: sealed::Sealed + Clone + PartialEq + Debug + Display + 'static {
    const KIND: ElementKind;

    /// Total natural order: numeric for numbers, lexicographic for text.
    ///
    /// Floats compare numerically, so `-0.0` and `0.0` are equal. NaN equals
    /// NaN and sorts after every number. Sorting never panics.
    fn natural_cmp(&self, other: &Self) -> Ordering;

    /// Parse a single element from its textual form.
    fn parse_element(token: &str) -> Result<Self, ParseElementError>;
}

impl Element for i64 {
    const KIND: ElementKind = ElementKind::Int;

    fn natural_cmp(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }

    fn parse_element(token: &str) -> Result<Self, ParseElementError> {
        token
            .parse()
            .map_err(|_| ParseElementError::new(Self::KIND, token))
    }
}

impl Element for f64 {
    const KIND: ElementKind = ElementKind::Float;

    fn natural_cmp(&self, other: &Self) -> Ordering {
        self.partial_cmp(other)
            .unwrap_or_else(|| self.is_nan().cmp(&other.is_nan()))
    }

    fn parse_element(token: &str) -> Result<Self, ParseElementError> {
        token
            .parse()
            .map_err(|_| ParseElementError::new(Self::KIND, token))
    }
}

impl Element for String {
    const KIND: ElementKind = ElementKind::Text;

    fn natural_cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }

    fn parse_element(token: &str) -> Result<Self, ParseElementError> {
        Ok(token.to_string())
    }
}
