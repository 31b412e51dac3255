//! The six traversal orders.
//!
//! Each order is a pure transform from the container's elements (in
//! insertion order) to the sequence a view walks. The transform runs once,
//! when the view is built.
//!
//! | Kind         | Input `[5, 1, 4, 2, 3]` |
//! |--------------|-------------------------|
//! | `Order`      | `[5, 1, 4, 2, 3]`       |
//! | `Ascending`  | `[1, 2, 3, 4, 5]`       |
//! | `Descending` | `[5, 4, 3, 2, 1]`       |
//! | `Reverse`    | `[3, 2, 4, 1, 5]`       |
//! | `SideCross`  | `[1, 5, 2, 4, 3]`       |
//! | `MiddleOut`  | `[3, 2, 4, 1, 5]`       |

use alloc::collections::VecDeque;
use core::fmt;
use core::str::FromStr;

use thiserror::Error;

use crate::element::Element;
use crate::{String, ToString, Vec};

/// Traversal order of a [`View`](crate::View).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderKind {
    /// Insertion order.
    Order,
    /// Stable sort, non-decreasing.
    Ascending,
    /// Stable sort, non-increasing.
    Descending,
    /// Insertion order mirrored end-to-start.
    Reverse,
    /// Smallest remaining, then largest remaining, alternately.
    SideCross,
    /// Outward from the sorted middle.
    MiddleOut,
}

impl OrderKind {
    pub const ALL: [OrderKind; 6] = [
        OrderKind::Order,
        OrderKind::Ascending,
        OrderKind::Descending,
        OrderKind::Reverse,
        OrderKind::SideCross,
        OrderKind::MiddleOut,
    ];

    pub fn name(self) -> &'static str {
        match self {
            OrderKind::Order => "order",
            OrderKind::Ascending => "ascending",
            OrderKind::Descending => "descending",
            OrderKind::Reverse => "reverse",
            OrderKind::SideCross => "side-cross",
            OrderKind::MiddleOut => "middle-out",
        }
    }

    /// Reorder `elements` (given in insertion order) for this kind.
    pub fn arrange<T: Element>(self, elements: Vec<T>) -> Vec<T> {
        match self {
            OrderKind::Order => elements,
            OrderKind::Ascending => ascending(elements),
            OrderKind::Descending => descending(elements),
            OrderKind::Reverse => reverse(elements),
            OrderKind::SideCross => side_cross(elements),
            OrderKind::MiddleOut => middle_out(elements),
        }
    }
}

impl fmt::Display for OrderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown order {0:?}")]
pub struct ParseOrderKindError(pub String);

impl FromStr for OrderKind {
    type Err = ParseOrderKindError;

    /// Accepts the kebab-case name, with `_` allowed in place of `-`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace('_', "-");
        OrderKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| ParseOrderKindError(s.to_string()))
    }
}

pub fn ascending<T: Element>(mut elements: Vec<T>) -> Vec<T> {
    elements.sort_by(T::natural_cmp);
    elements
}

/// Equal elements keep their original relative order.
pub fn descending<T: Element>(mut elements: Vec<T>) -> Vec<T> {
    elements.sort_by(|a, b| b.natural_cmp(a));
    elements
}

/// Positional mirror, not a sort.
pub fn reverse<T: Element>(mut elements: Vec<T>) -> Vec<T> {
    elements.reverse();
    elements
}

/// `[1, 2, 3, 4, 6, 7]` becomes `[1, 7, 2, 6, 3, 4]`. For odd lengths the
/// last element emitted is the sorted median.
pub fn side_cross<T: Element>(elements: Vec<T>) -> Vec<T> {
    let mut remaining: VecDeque<T> = ascending(elements).into();
    let mut out = Vec::with_capacity(remaining.len());
    while let Some(low) = remaining.pop_front() {
        out.push(low);
        out.extend(remaining.pop_back());
    }
    out
}

/// Starts at the sorted middle and alternates outward.
///
/// Odd length: the median first, then left, right, left, ...
/// Even length: the left-of-center element first, then right, left,
/// right, ... so the walk begins on the left but its first step goes right.
/// When one side runs out the other side is emitted alone.
pub fn middle_out<T: Element>(elements: Vec<T>) -> Vec<T> {
    let n = elements.len();
    if n == 0 {
        return elements;
    }

    let start = if n % 2 == 1 { n / 2 } else { n / 2 - 1 };
    let mut lower = ascending(elements);
    let upper = lower.split_off(start + 1);
    let mut out = Vec::with_capacity(n);
    out.extend(lower.pop());

    let leftward = lower.into_iter().rev();
    let rightward = upper.into_iter();
    if n % 2 == 1 {
        alternate(&mut out, leftward, rightward);
    } else {
        alternate(&mut out, rightward, leftward);
    }
    out
}

/// Take one from `first`, one from `second`, and so on; once either side is
/// exhausted drain the other.
fn alternate<T>(
    out: &mut Vec<T>,
    first: impl IntoIterator<Item = T>,
    second: impl IntoIterator<Item = T>,
) {
    let mut first = first.into_iter().fuse();
    let mut second = second.into_iter().fuse();
    loop {
        match (first.next(), second.next()) {
            (None, None) => break,
            (a, b) => {
                out.extend(a);
                out.extend(b);
            }
        }
    }
}
