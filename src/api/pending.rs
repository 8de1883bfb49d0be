// src/api/pending.rs
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::ApiError;

type Slot<T> = Option<Result<T, ApiError>>;

/// Outcome slot shared between an in-flight request and the panel that issued it.
///
/// The transport callback settles it from a background thread; the UI thread
/// takes the outcome on its next frame. When the panel is dropped first, the
/// late write lands in a slot nobody reads and is freed with the last clone.
pub struct Pending<T> {
    slot: Arc<Mutex<Slot<T>>>,
}

impl<T> Clone for Pending<T> {
    fn clone(&self) -> Self {
        Self { slot: Arc::clone(&self.slot) }
    }
}

impl<T> Default for Pending<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Pending<T> {
    pub fn new() -> Self {
        Self { slot: Arc::new(Mutex::new(None)) }
    }

    /// A slot that is settled before anyone polls it.
    pub fn settled(outcome: Result<T, ApiError>) -> Self {
        let pending = Self::new();
        pending.settle(outcome);
        pending
    }

    pub fn settle(&self, outcome: Result<T, ApiError>) {
        *self.lock() = Some(outcome);
    }

    /// Removes the outcome if the request has finished.
    pub fn take(&self) -> Option<Result<T, ApiError>> {
        self.lock().take()
    }

    fn lock(&self) -> MutexGuard<'_, Slot<T>> {
        // A panicking writer can only have left a whole value behind.
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
