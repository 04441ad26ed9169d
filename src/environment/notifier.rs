//! Environment change broadcast.
//!
//! [`ChangeNotifier`] is the channel other subsystems listen on to learn that
//! the current environment changed. It is an owned, injectable object rather
//! than process-global state: the application creates one at startup, hands
//! clones to whoever needs to publish or subscribe, and tests construct
//! isolated instances. Delivery is synchronous and in subscription order;
//! there is no replay for late subscribers.
//!
//! Handlers run outside the registry lock, so a handler may freely subscribe,
//! detach, or notify on the same channel. A broadcast reaches exactly the
//! subscribers attached at the moment it started.

use std::sync::{Arc, Mutex, MutexGuard, Weak};

type Handler = Arc<dyn Fn(&str) + Send + Sync + 'static>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    handlers: Vec<(u64, Handler)>,
}

// A panicking handler can poison the lock from a past broadcast; the
// registry itself is still valid, so recover the guard.
fn lock_registry(registry: &Mutex<Registry>) -> MutexGuard<'_, Registry> {
    registry.lock().unwrap_or_else(|e| e.into_inner())
}

/// Broadcast point for environment change notifications.
///
/// Cloning yields another handle to the same channel. The payload of each
/// notification is the label of the newly selected environment.
#[derive(Clone, Default)]
pub struct ChangeNotifier {
    registry: Arc<Mutex<Registry>>,
}

impl ChangeNotifier {
    /// Create a new, empty notification channel.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a handler called on every subsequent notification.
    ///
    /// Safe to call at any point in the process lifetime, including before
    /// any controller exists and from inside another handler. The handler
    /// stays attached until the returned [`Subscription`] is detached;
    /// dropping the handle without detaching leaves the handler in place.
    pub fn subscribe<F>(&self, handler: F) -> Subscription
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        let mut registry = lock_registry(&self.registry);
        let id = registry.next_id;
        registry.next_id += 1;
        registry.handlers.push((id, Arc::new(handler)));
        Subscription {
            registry: Arc::downgrade(&self.registry),
            id,
        }
    }

    /// Deliver `label` to every subscriber attached at this moment, in order.
    ///
    /// The subscriber list is snapshotted before any handler runs: handlers
    /// attached during delivery first hear the next broadcast, and detaching
    /// mid-delivery does not affect the in-flight one.
    pub fn notify(&self, label: &str) {
        let snapshot: Vec<Handler> = {
            let registry = lock_registry(&self.registry);
            tracing::debug!(
                label,
                subscribers = registry.handlers.len(),
                "environment changed"
            );
            registry
                .handlers
                .iter()
                .map(|(_, handler)| Arc::clone(handler))
                .collect()
        };

        for handler in snapshot {
            handler(label);
        }
    }

    /// Number of currently attached subscribers.
    pub fn subscriber_count(&self) -> usize {
        lock_registry(&self.registry).handlers.len()
    }
}

impl std::fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

/// Handle to one attached subscriber.
#[derive(Debug)]
pub struct Subscription {
    registry: Weak<Mutex<Registry>>,
    id: u64,
}

impl Subscription {
    /// Remove the handler from the channel.
    ///
    /// No-op if the channel has already been dropped.
    pub fn detach(self) {
        if let Some(registry) = self.registry.upgrade() {
            let mut registry = lock_registry(&registry);
            registry.handlers.retain(|(id, _)| *id != self.id);
        }
    }
}
