//! Revision tracking for staleness detection.
//!
//! A [`Revision`] is owned by a container and bumped once per mutation.
//! Views hold a [`RevisionWatch`]: a non-owning handle that can only read the
//! live value.
//!
//! ```text
//! Container ──owns──▶ Rc<Cell<u64>> ◀──weak── View (watch)
//! ```
//!
//! The watch observes the counter at validation time, never a copy taken
//! when the view was built. Once the container is dropped the watch reads
//! `None`.

use alloc::rc::{Rc, Weak};
use core::cell::Cell;
use core::fmt;

/// Monotonic mutation counter owned by a container.
pub struct Revision {
    counter: Rc<Cell<u64>>,
}

impl Revision {
    pub fn new() -> Self {
        Self {
            counter: Rc::new(Cell::new(0)),
        }
    }

    #[inline]
    pub fn get(&self) -> u64 {
        self.counter.get()
    }

    /// Advance the counter by one and return the new value.
    pub fn bump(&mut self) -> u64 {
        let next = self
            .counter
            .get()
            .checked_add(1)
            .expect("revision counter overflow");
        self.counter.set(next);
        next
    }

    /// Create a read-only handle to the live counter.
    pub fn watch(&self) -> RevisionWatch {
        RevisionWatch {
            counter: Rc::downgrade(&self.counter),
        }
    }
}

impl Default for Revision {
    fn default() -> Self {
        Self::new()
    }
}

// A clone gets its own counter: watches of the original never observe it.
impl Clone for Revision {
    fn clone(&self) -> Self {
        Self {
            counter: Rc::new(Cell::new(self.get())),
        }
    }
}

impl fmt::Debug for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Revision").field(&self.get()).finish()
    }
}

/// Read-only view of a container's live [`Revision`].
#[derive(Clone)]
pub struct RevisionWatch {
    counter: Weak<Cell<u64>>,
}

impl RevisionWatch {
    /// The container's current revision, or `None` if it has been dropped.
    #[inline]
    pub fn current(&self) -> Option<u64> {
        self.counter.upgrade().map(|counter| counter.get())
    }

    /// Whether the watched counter still reads `captured`.
    #[inline]
    pub fn matches(&self, captured: u64) -> bool {
        self.current() == Some(captured)
    }
}

impl fmt::Debug for RevisionWatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RevisionWatch").field(&self.current()).finish()
    }
}
