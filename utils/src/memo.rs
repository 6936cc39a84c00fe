//! Per-instance memoization.
//!
//! A [`Memo`] is a field on the owning struct. The first access runs the
//! computation and stores its result; every later access returns the stored
//! value. Nothing is ever invalidated, so a memo lives exactly as long as its
//! owner.

use std::fmt;
use std::future::Future;
use std::sync::OnceLock;

pub struct Memo<T> {
    cell: OnceLock<T>,
}

impl<T> Memo<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
        }
    }

    /// The stored value, if the computation has already run.
    #[must_use]
    pub fn get(&self) -> Option<&T> {
        self.cell.get()
    }

    #[must_use]
    pub fn is_computed(&self) -> bool {
        self.cell.get().is_some()
    }

    pub fn get_or_init(&self, init: impl FnOnce() -> T) -> &T {
        self.cell.get_or_init(init)
    }

    /// Async, fallible variant of [`Memo::get_or_init`].
    ///
    /// An `Err` leaves the memo empty so the next access runs `init` again.
    /// Two accesses racing on an empty memo may both run `init`; the first
    /// stored result wins and the other is dropped.
    pub async fn get_or_try_init<F, Fut, E>(&self, init: F) -> Result<&T, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        if let Some(value) = self.cell.get() {
            return Ok(value);
        }
        let value = init().await?;
        Ok(self.cell.get_or_init(|| value))
    }
}

impl<T> Default for Memo<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Memo<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.cell.get() {
            Some(value) => f.debug_tuple("Memo").field(value).finish(),
            None => f.write_str("Memo(<pending>)"),
        }
    }
}
