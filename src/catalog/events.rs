//! Typed synchronous publish/subscribe channel.
//!
//! The channel decouples publishers from subscribers that are not otherwise
//! connected (here: the review form publishing accepted reviews, and the
//! product display appending them to its list). Delivery is synchronous and
//! in subscription order: every current subscriber runs before `publish`
//! returns. There is exactly one logical thread of execution in the demo;
//! the internal mutex exists so the channel can live inside the TUI model,
//! not to support concurrent publishers.
//!
//! Subscriptions are explicit and revocable. [`EventChannel::subscribe`]
//! returns a [`Subscription`] handle that [`EventChannel::unsubscribe`]
//! accepts, so long-lived wiring can be torn down instead of leaking.
//!
//! # Re-entrancy
//!
//! Handlers may subscribe and unsubscribe (including themselves) while a
//! publication is being delivered. Delivery iterates over a snapshot of the
//! handles taken when `publish` was called, so a handler subscribed during
//! delivery first receives the *next* publication, and a handler
//! unsubscribed during delivery is skipped if it has not yet run.

use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

/// Handle identifying one subscription on an [`EventChannel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use = "dropping the handle leaks the subscription for the channel's lifetime"]
pub struct Subscription(u64);

/// One registered handler. The handler slot is `None` only while the handler
/// is running during delivery.
struct SubscriberEntry<T> {
    id: u64,
    handler: Option<Box<dyn FnMut(&T) + Send>>,
}

/// A typed publish/subscribe registry with synchronous delivery.
pub struct EventChannel<T> {
    entries: Mutex<Vec<SubscriberEntry<T>>>,
    next_id: AtomicU64,
}

impl<T> Default for EventChannel<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> EventChannel<T> {
    /// Creates an empty channel.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(0),
        }
    }

    /// Locks the registry, recovering from a poisoned lock.
    ///
    /// Handlers run outside the lock, so a handler panic cannot leave the
    /// registry in a half-mutated state; taking the poisoned inner value is
    /// sound.
    fn entries_lock(&self) -> std::sync::MutexGuard<'_, Vec<SubscriberEntry<T>>> {
        match self.entries.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Registers a handler and returns its subscription handle.
    ///
    /// Handlers run synchronously inside [`EventChannel::publish`], in
    /// subscription order.
    pub fn subscribe(&self, handler: impl FnMut(&T) + Send + 'static) -> Subscription {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.entries_lock().push(SubscriberEntry {
            id,
            handler: Some(Box::new(handler)),
        });
        Subscription(id)
    }

    /// Removes a subscription.
    ///
    /// Returns `true` if the handle was registered, `false` if it was
    /// already removed. Safe to call from inside a handler.
    pub fn unsubscribe(&self, subscription: Subscription) -> bool {
        let mut entries = self.entries_lock();
        let before = entries.len();
        entries.retain(|entry| entry.id != subscription.0);
        entries.len() != before
    }

    /// Returns the number of live subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.entries_lock().len()
    }

    /// Delivers `event` to every current subscriber, in subscription order,
    /// before returning.
    pub fn publish(&self, event: &T) {
        let snapshot: Vec<u64> = self.entries_lock().iter().map(|entry| entry.id).collect();
        tracing::trace!(subscribers = snapshot.len(), "delivering publication");

        for id in snapshot {
            let Some(mut handler) = self.take_handler(id) else {
                // Unsubscribed by an earlier handler in this delivery.
                continue;
            };
            handler(event);
            self.restore_handler(id, handler);
        }
    }

    /// Takes the handler out of its entry so it can run without holding the
    /// registry lock, allowing re-entrant channel calls.
    fn take_handler(&self, id: u64) -> Option<Box<dyn FnMut(&T) + Send>> {
        self.entries_lock()
            .iter_mut()
            .find(|entry| entry.id == id)
            .and_then(|entry| entry.handler.take())
    }

    /// Puts a handler back after it ran. If the handler unsubscribed itself
    /// mid-call its entry is gone and the handler is dropped here.
    fn restore_handler(&self, id: u64, handler: Box<dyn FnMut(&T) + Send>) {
        if let Some(entry) = self
            .entries_lock()
            .iter_mut()
            .find(|entry| entry.id == id)
        {
            entry.handler = Some(handler);
        }
    }
}

impl<T> std::fmt::Debug for EventChannel<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventChannel")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::EventChannel;

    fn locked<T>(shared: &Arc<Mutex<T>>) -> std::sync::MutexGuard<'_, T> {
        shared
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    #[test]
    fn publish_delivers_to_subscribers_in_subscription_order() {
        let channel = EventChannel::new();
        let order = Arc::new(Mutex::new(Vec::new()));

        let first = Arc::clone(&order);
        let _a = channel.subscribe(move |value: &u32| locked(&first).push(("a", *value)));
        let second = Arc::clone(&order);
        let _b = channel.subscribe(move |value: &u32| locked(&second).push(("b", *value)));

        channel.publish(&7);

        assert_eq!(*locked(&order), vec![("a", 7), ("b", 7)]);
    }

    #[test]
    fn publish_with_no_subscribers_is_a_no_op() {
        let channel: EventChannel<u32> = EventChannel::new();
        channel.publish(&1);
        assert_eq!(channel.subscriber_count(), 0);
    }

    #[test]
    fn unsubscribed_handler_no_longer_receives() {
        let channel = EventChannel::new();
        let received = Arc::new(Mutex::new(0_u32));

        let sink = Arc::clone(&received);
        let subscription = channel.subscribe(move |value: &u32| *locked(&sink) += value);

        channel.publish(&1);
        assert!(channel.unsubscribe(subscription));
        channel.publish(&1);

        assert_eq!(*locked(&received), 1);
        assert!(!channel.unsubscribe(subscription), "second removal is a no-op");
    }

    #[test]
    fn handler_may_unsubscribe_itself_during_delivery() {
        let channel: Arc<EventChannel<u32>> = Arc::new(EventChannel::new());
        let count = Arc::new(Mutex::new(0_u32));

        let slot: Arc<Mutex<Option<super::Subscription>>> = Arc::new(Mutex::new(None));
        let inner_channel = Arc::clone(&channel);
        let inner_slot = Arc::clone(&slot);
        let inner_count = Arc::clone(&count);
        let subscription = channel.subscribe(move |_: &u32| {
            *locked(&inner_count) += 1;
            if let Some(own) = locked(&inner_slot).take() {
                inner_channel.unsubscribe(own);
            }
        });
        *locked(&slot) = Some(subscription);

        channel.publish(&0);
        channel.publish(&0);

        assert_eq!(*locked(&count), 1, "handler runs once then removes itself");
        assert_eq!(channel.subscriber_count(), 0);
    }

    #[test]
    fn handler_subscribed_during_delivery_first_sees_next_publication() {
        let channel: Arc<EventChannel<u32>> = Arc::new(EventChannel::new());
        let late_values = Arc::new(Mutex::new(Vec::new()));

        let outer_channel = Arc::clone(&channel);
        let outer_values = Arc::clone(&late_values);
        let armed = Arc::new(Mutex::new(false));
        let armed_flag = Arc::clone(&armed);
        let _primer = channel.subscribe(move |_: &u32| {
            let mut is_armed = locked(&armed_flag);
            if *is_armed {
                return;
            }
            *is_armed = true;
            drop(is_armed);
            let values = Arc::clone(&outer_values);
            let _late = outer_channel.subscribe(move |value: &u32| {
                locked(&values).push(*value);
            });
        });

        channel.publish(&1);
        channel.publish(&2);

        assert_eq!(*locked(&late_values), vec![2]);
    }
}
