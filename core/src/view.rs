//! Snapshot cursors over a container.
//!
//! A [`View`] owns a reordered copy of the container's elements, a cursor
//! into that copy, and the revision the container was at when the view was
//! built. Every operation first checks that revision against the live one
//! (through a [`RevisionWatch`]) and fails with [`Error::InvalidatedView`]
//! if they differ. There is no way back: a stale view stays stale.
//!
//! The cursor ranges over `0..=len`; `len` is the end position. It can be
//! compared against but not dereferenced.

use crate::container::Container;
use crate::element::Element;
use crate::error::{Error, Result};
use crate::order::OrderKind;
use crate::revision::RevisionWatch;
use crate::Vec;

/// A read-only, independently ordered cursor over a container snapshot.
#[derive(Debug, Clone)]
pub struct View<T: Element> {
    kind: OrderKind,
    snapshot: Vec<T>,
    cursor: usize,
    captured: u64,
    watch: RevisionWatch,
}

impl<T: Element> View<T> {
    /// Snapshot `container` in `kind` order, positioned at the first element.
    pub fn begin(container: &Container<T>, kind: OrderKind) -> Self {
        Self::new(container, kind, false)
    }

    /// Snapshot `container` in `kind` order, positioned at the end.
    pub fn end(container: &Container<T>, kind: OrderKind) -> Self {
        Self::new(container, kind, true)
    }

    fn new(container: &Container<T>, kind: OrderKind, at_end: bool) -> Self {
        let snapshot = kind.arrange(container.elements_snapshot());
        let cursor = if at_end { snapshot.len() } else { 0 };
        let captured = container.revision();
        tracing::trace!(%kind, len = snapshot.len(), captured, at_end, "view created");
        Self {
            kind,
            snapshot,
            cursor,
            captured,
            watch: container.watch(),
        }
    }

    fn check(&self) -> Result<()> {
        if self.watch.matches(self.captured) {
            return Ok(());
        }
        let current = self.watch.current();
        tracing::debug!(kind = %self.kind, captured = self.captured, ?current, "stale view");
        Err(Error::InvalidatedView {
            captured: self.captured,
            current,
        })
    }

    /// The element under the cursor.
    ///
    /// Fails with [`Error::IndexOutOfRange`] at the end position.
    pub fn current(&self) -> Result<&T> {
        self.check()?;
        self.snapshot.get(self.cursor).ok_or(Error::IndexOutOfRange {
            index: self.cursor,
            len: self.snapshot.len(),
        })
    }

    /// Move the cursor one step forward.
    ///
    /// The cursor may reach the end position; stepping past it has no effect.
    pub fn advance(&mut self) -> Result<&mut Self> {
        self.check()?;
        if self.cursor < self.snapshot.len() {
            self.cursor += 1;
        }
        Ok(self)
    }

    /// Like [`advance`](Self::advance), but returns the view as it was
    /// before the step.
    pub fn advance_postfix(&mut self) -> Result<Self> {
        self.check()?;
        let before = self.clone();
        self.advance()?;
        Ok(before)
    }

    /// Same position over an elementwise-identical snapshot.
    ///
    /// Only `self` is checked for staleness.
    pub fn equals(&self, other: &Self) -> Result<bool> {
        self.check()?;
        Ok(self.cursor == other.cursor && self.snapshot == other.snapshot)
    }

    pub fn not_equals(&self, other: &Self) -> Result<bool> {
        self.equals(other).map(|equal| !equal)
    }

    /// Clones of the elements from the cursor to the end.
    pub fn remaining(&self) -> Result<Vec<T>> {
        self.check()?;
        Ok(self.snapshot[self.cursor..].to_vec())
    }

    pub fn kind(&self) -> OrderKind {
        self.kind
    }

    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Length of the snapshot, independent of the cursor.
    pub fn len(&self) -> usize {
        self.snapshot.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot.is_empty()
    }

    pub fn is_end(&self) -> bool {
        self.cursor == self.snapshot.len()
    }

    pub fn captured_revision(&self) -> u64 {
        self.captured
    }

    /// Whether the next checked operation would fail with
    /// [`Error::InvalidatedView`].
    pub fn is_stale(&self) -> bool {
        !self.watch.matches(self.captured)
    }
}
