//! First-instance guard
//!
//! A [`Singleton`] keeps the first value constructed through it. Later
//! constructors are never run; callers get the existing instance back.

use std::any::type_name;
use std::fmt;
use std::sync::OnceLock;

use parking_lot::Mutex;

/// Holds at most one instance of `T` for the lifetime of the guard
///
/// Usable in a `static`. The first successful initializer wins, including
/// under concurrent access.
///
/// # Example
///
/// ```
/// use ferrule_core::Singleton;
///
/// static LIMIT: Singleton<u32> = Singleton::new();
///
/// assert_eq!(LIMIT.get(), None);
/// assert_eq!(*LIMIT.get_or_init(|| 10), 10);
/// assert_eq!(*LIMIT.get_or_init(|| 20), 10);
/// ```
pub struct Singleton<T> {
    cell: OnceLock<T>,
    // Serializes fallible constructors; OnceLock has no stable try-init
    init: Mutex<()>,
}

impl<T> Singleton<T> {
    /// Empty guard
    pub const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
            init: Mutex::new(()),
        }
    }

    /// Instance, constructing it with `f` if none exists yet.
    ///
    /// `f` runs at most once across all callers; if another thread is
    /// already constructing, this blocks until that instance is ready.
    pub fn get_or_init(&self, f: impl FnOnce() -> T) -> &T {
        self.cell.get_or_init(|| {
            tracing::trace!(instance = type_name::<T>(), "singleton initialized");
            f()
        })
    }

    /// Instance, constructing it with the fallible `f` if none exists yet.
    ///
    /// A failed constructor leaves the guard empty, so a later call may try
    /// again.
    ///
    /// # Errors
    ///
    /// Returns the constructor's error when it ran and failed.
    pub fn get_or_try_init<E>(&self, f: impl FnOnce() -> Result<T, E>) -> Result<&T, E> {
        if let Some(instance) = self.cell.get() {
            return Ok(instance);
        }

        let _guard = self.init.lock();
        if let Some(instance) = self.cell.get() {
            return Ok(instance);
        }

        match f() {
            Ok(value) => Ok(self.get_or_init(|| value)),
            Err(e) => {
                tracing::debug!(instance = type_name::<T>(), "singleton constructor failed");
                Err(e)
            }
        }
    }

    /// Instance, if one has been constructed
    pub fn get(&self) -> Option<&T> {
        self.cell.get()
    }

    /// Whether an instance exists
    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl<T> Default for Singleton<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Singleton<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Singleton").field(&self.cell.get()).finish()
    }
}
