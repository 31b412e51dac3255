//! The container: an ordered, homogeneous sequence with a revision counter.

use core::fmt;

use crate::element::Element;
use crate::error::{Error, Result};
use crate::order::OrderKind;
use crate::revision::{Revision, RevisionWatch};
use crate::view::View;
use crate::{String, ToString, Vec};

/// An insertion-ordered sequence of `int`, `float` or `text` elements.
///
/// Every successful mutation bumps the container's revision exactly once.
/// Views created by the `begin_*`/`end_*` factories capture the revision and
/// fail with [`Error::InvalidatedView`] once it moves on.
///
/// # Example
///
/// ```
/// use vistas_core::{Container, Error};
///
/// let mut c = Container::new();
/// c.append(3_i64);
/// c.append(1);
/// c.append(2);
///
/// let mut it = c.begin_ascending();
/// let end = c.end_ascending();
/// let mut seen = Vec::new();
/// while it.not_equals(&end)? {
///     seen.push(*it.current()?);
///     it.advance()?;
/// }
/// assert_eq!(seen, [1, 2, 3]);
///
/// c.append(4);
/// assert!(it.current().unwrap_err().is_invalidated());
/// # Ok::<(), Error>(())
/// ```
#[derive(Clone)]
pub struct Container<T: Element> {
    elements: Vec<T>,
    revision: Revision,
}

impl<T: Element> Container<T> {
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
            revision: Revision::new(),
        }
    }

    /// Add `value` at the end.
    pub fn append(&mut self, value: T) {
        self.elements.push(value);
        let revision = self.revision.bump();
        tracing::debug!(kind = %T::KIND, revision, len = self.elements.len(), "append");
    }

    /// Remove every element equal to `value`, keeping the survivors' order.
    ///
    /// Returns how many elements were removed. If none matched, fails with
    /// [`Error::ElementNotFound`] and leaves the container (and its revision)
    /// untouched.
    pub fn remove_all(&mut self, value: &T) -> Result<usize> {
        let before = self.elements.len();
        self.elements.retain(|element| element != value);
        let removed = before - self.elements.len();
        if removed == 0 {
            return Err(Error::ElementNotFound {
                element: value.to_string(),
            });
        }
        let revision = self.revision.bump();
        tracing::debug!(kind = %T::KIND, revision, removed, len = self.elements.len(), "remove_all");
        Ok(removed)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// An independent copy of the elements in insertion order.
    pub fn elements_snapshot(&self) -> Vec<T> {
        self.elements.clone()
    }

    pub fn revision(&self) -> u64 {
        self.revision.get()
    }

    /// A read-only handle that observes this container's live revision.
    pub fn watch(&self) -> RevisionWatch {
        self.revision.watch()
    }

    /// `"[e0, e1, ..., en]"`, or `"[]"` when empty.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// The elements arranged in `kind` order, without a cursor.
    pub fn ordered(&self, kind: OrderKind) -> Vec<T> {
        kind.arrange(self.elements_snapshot())
    }

    /// A view of `kind` positioned at its first element.
    pub fn begin(&self, kind: OrderKind) -> View<T> {
        View::begin(self, kind)
    }

    /// A view of `kind` positioned one past its last element.
    pub fn end(&self, kind: OrderKind) -> View<T> {
        View::end(self, kind)
    }
}

macro_rules! view_factories {
    ($($kind:ident => $begin:ident, $end:ident;)*) => {
        impl<T: Element> Container<T> {
            $(
                #[doc = concat!("Shorthand for `begin(OrderKind::", stringify!($kind), ")`.")]
                pub fn $begin(&self) -> View<T> {
                    self.begin(OrderKind::$kind)
                }

                #[doc = concat!("Shorthand for `end(OrderKind::", stringify!($kind), ")`.")]
                pub fn $end(&self) -> View<T> {
                    self.end(OrderKind::$kind)
                }
            )*
        }
    };
}

view_factories! {
    Order => begin_order, end_order;
    Ascending => begin_ascending, end_ascending;
    Descending => begin_descending, end_descending;
    Reverse => begin_reverse, end_reverse;
    SideCross => begin_side_cross, end_side_cross;
    MiddleOut => begin_middle_out, end_middle_out;
}

impl<T: Element> Default for Container<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Element> fmt::Display for Container<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Listing(&self.elements), f)
    }
}

/// Displays a slice of elements as `"[e0, e1, ..., en]"`.
///
/// This is the format of [`Container::render`], usable for any sequence,
/// such as the elements collected from a view.
///
/// ```
/// use vistas_core::container::Listing;
///
/// assert_eq!(Listing(&[2.5, 3.0]).to_string(), "[2.5, 3]");
/// assert_eq!(Listing::<i64>(&[]).to_string(), "[]");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Listing<'a, T: Element>(pub &'a [T]);

impl<T: Element> fmt::Display for Listing<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, element) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{element}")?;
        }
        f.write_str("]")
    }
}

impl<T: Element> fmt::Debug for Container<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Container")
            .field("kind", &T::KIND)
            .field("elements", &self.elements)
            .field("revision", &self.revision.get())
            .finish()
    }
}

/// Each element counts as one append.
impl<T: Element> Extend<T> for Container<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.append(value);
        }
    }
}

impl<T: Element> FromIterator<T> for Container<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut container = Self::new();
        container.extend(iter);
        container
    }
}
