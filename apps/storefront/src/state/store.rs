//! # Store Handle
//!
//! Shared, lock-protected ownership of one store.
//!
//! ## Thread Safety
//! Stores are wrapped in `Arc<Mutex<T>>` because:
//! 1. Intents can be dispatched from any task
//! 2. Only one intent may mutate a store at a time
//! 3. Each transition runs entirely inside one lock acquisition, so
//!    every intent is atomic with respect to the others
//!
//! ## Poisoning
//! Store transitions cannot panic midway through a mutation, so a poisoned
//! lock still guards consistent state and is recovered instead of
//! propagated.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Debug)]
pub struct StoreHandle<T> {
    inner: Arc<Mutex<T>>,
}

impl<T> StoreHandle<T> {
    pub fn new(store: T) -> Self {
        StoreHandle {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, T> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Executes a function with read access to the store.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let totals = cart_state.read(|cart| CartTotals::from(cart));
    /// ```
    pub fn read<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        let store = self.lock();
        f(&store)
    }

    /// Executes a function with write access to the store.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// cart_state.write(|cart| cart.add_cart_item(&snapshot));
    /// ```
    pub fn write<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut T) -> R,
    {
        let mut store = self.lock();
        f(&mut store)
    }
}

impl<T> Clone for StoreHandle<T> {
    /// Clones the handle, not the store: both handles see the same state.
    fn clone(&self) -> Self {
        StoreHandle {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Default> Default for StoreHandle<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
