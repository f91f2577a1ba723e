//! Callback registry with unsubscribe handles

use slotmap::{new_key_type, SlotMap};
use std::sync::Arc;

new_key_type! {
    /// Handle returned by [`SubscriberList::subscribe`]
    pub struct SubscriptionId;
}

/// A subscriber callback
pub type Callback<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// A list of callbacks notified with a value of type `T`
///
/// Notification order is unspecified. Callers that hold a lock around the
/// list should take a [`snapshot`](Self::snapshot), release the lock, then
/// invoke the callbacks so subscribers may re-enter.
pub struct SubscriberList<T> {
    callbacks: SlotMap<SubscriptionId, Callback<T>>,
}

impl<T> SubscriberList<T> {
    pub fn new() -> Self {
        Self {
            callbacks: SlotMap::with_key(),
        }
    }

    /// Register a callback
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        self.callbacks.insert(Arc::new(callback))
    }

    /// Remove a callback. Returns false if the handle was already removed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.callbacks.remove(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }

    /// Clone out the current callbacks
    pub fn snapshot(&self) -> Vec<Callback<T>> {
        self.callbacks.values().cloned().collect()
    }
}

impl<T> Default for SubscriberList<T> {
    fn default() -> Self {
        Self::new()
    }
}
