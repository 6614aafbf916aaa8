use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock, Weak};

type Callback<T> = Arc<dyn Fn(&T) + Send + Sync>;

struct Inner<T> {
    value: RwLock<T>,
    subscribers: Mutex<Vec<(u64, Callback<T>)>>,
    next_id: AtomicU64,
}

/// Shared value with subscribe/set/update semantics.
///
/// Writers replace the value first and then call every subscriber with the
/// new value, in subscription order, before `set`/`update` returns. Callbacks
/// run with no lock held, so they may call `get` or even write again.
/// Concurrent writers from different threads may interleave their
/// notifications; the store is meant to be driven from one UI thread.
pub struct Writable<T> {
    inner: Arc<Inner<T>>,
}

impl<T> Clone for Writable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Clone + Send + Sync + 'static> Writable<T> {
    pub fn new(initial: T) -> Self {
        Self {
            inner: Arc::new(Inner {
                value: RwLock::new(initial),
                subscribers: Mutex::new(Vec::new()),
                next_id: AtomicU64::new(0),
            }),
        }
    }

    pub fn get(&self) -> T {
        self.inner
            .value
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Register `callback` and call it right away with the current value.
    ///
    /// The callback stays registered until the returned handle is dropped.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        let callback: Callback<T> = Arc::new(callback);

        self.inner
            .subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, Arc::clone(&callback)));

        callback(&self.get());

        let weak: Weak<Inner<T>> = Arc::downgrade(&self.inner);
        Subscription {
            unsubscribe: Some(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner
                        .subscribers
                        .lock()
                        .unwrap_or_else(PoisonError::into_inner)
                        .retain(|(existing, _)| *existing != id);
                }
            })),
        }
    }

    pub fn set(&self, value: T) {
        let snapshot = {
            let mut current = self
                .inner
                .value
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            *current = value;
            current.clone()
        };
        self.notify(&snapshot);
    }

    /// Apply `f` to a copy of the current value, then store it and notify like `set`.
    ///
    /// `f` runs with no lock held, so it may read the store.
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut T),
    {
        let mut next = self.get();
        f(&mut next);
        self.set(next);
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner
            .subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn notify(&self, value: &T) {
        let callbacks: Vec<Callback<T>> = self
            .inner
            .subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, callback)| Arc::clone(callback))
            .collect();

        tracing::trace!(subscribers = callbacks.len(), "Notifying store subscribers");

        for callback in callbacks {
            callback(value);
        }
    }
}

/// Handle returned by [`Writable::subscribe`]. Dropping it unsubscribes.
#[must_use = "dropping a Subscription immediately unsubscribes the callback"]
pub struct Subscription {
    unsubscribe: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
    pub fn unsubscribe(mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }

    /// Keep the callback registered for as long as the store lives.
    pub fn detach(mut self) {
        self.unsubscribe = None;
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}
