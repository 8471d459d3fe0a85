//! Observable state cells.
//!
//! DESIGN
//! ======
//! A `StateCell<T>` owns one value and an ordered subscriber list behind a
//! shared mutex. Clones share both. Writers mutate under the lock, take a
//! snapshot of the new value and the subscriber list, release the lock, and
//! only then call subscribers, so a subscriber may read, write or subscribe
//! to the same cell without deadlocking.
//!
//! Subscribers are not called at registration time; they see writes that
//! happen after `subscribe` returns, each exactly once.

#[cfg(test)]
#[path = "cell_test.rs"]
mod cell_test;

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

type Subscriber<T> = Arc<dyn Fn(&T) + Send + Sync>;

struct Inner<T> {
    value: T,
    next_id: u64,
    subscribers: Vec<(u64, Subscriber<T>)>,
}

/// An independently observable mutable value.
pub struct StateCell<T> {
    inner: Arc<Mutex<Inner<T>>>,
}

impl<T> Clone for StateCell<T> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<T: Default + Clone + Send + 'static> Default for StateCell<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for StateCell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = lock(&self.inner);
        f.debug_struct("StateCell")
            .field("value", &inner.value)
            .field("subscribers", &inner.subscribers.len())
            .finish()
    }
}

impl<T: Clone + Send + 'static> StateCell<T> {
    pub fn new(value: T) -> Self {
        Self { inner: Arc::new(Mutex::new(Inner { value, next_id: 0, subscribers: Vec::new() })) }
    }

    /// Clone of the current value.
    pub fn get(&self) -> T {
        lock(&self.inner).value.clone()
    }

    /// Borrow the current value without cloning it.
    ///
    /// `f` runs under the cell's lock and must not touch this cell.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&lock(&self.inner).value)
    }

    /// Replace the value and notify subscribers once.
    pub fn set(&self, value: T) {
        self.update(|current| *current = value);
    }

    /// Mutate the value in place and notify subscribers once.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        let (snapshot, subscribers) = {
            let mut inner = lock(&self.inner);
            f(&mut inner.value);
            if inner.subscribers.is_empty() {
                return;
            }
            let subscribers: Vec<Subscriber<T>> = inner.subscribers.iter().map(|(_, s)| Arc::clone(s)).collect();
            (inner.value.clone(), subscribers)
        };
        for subscriber in &subscribers {
            subscriber(&snapshot);
        }
    }

    /// Register `f` to run after every write. Dropping the returned
    /// [`Subscription`] (or calling [`Subscription::unsubscribe`]) removes it.
    pub fn subscribe(&self, f: impl Fn(&T) + Send + Sync + 'static) -> Subscription {
        let id = {
            let mut inner = lock(&self.inner);
            let id = inner.next_id;
            inner.next_id += 1;
            inner.subscribers.push((id, Arc::new(f)));
            id
        };

        let weak: Weak<Mutex<Inner<T>>> = Arc::downgrade(&self.inner);
        Subscription {
            release: Some(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    lock(&inner).subscribers.retain(|(sid, _)| *sid != id);
                }
            })),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        lock(&self.inner).subscribers.len()
    }
}

fn lock<T>(inner: &Mutex<Inner<T>>) -> MutexGuard<'_, Inner<T>> {
    // Subscribers run unlocked; poisoning only follows a panic in `with`/`update`.
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Handle that keeps a subscriber registered.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
    /// Remove the subscriber. Idempotent with the drop that follows.
    pub fn unsubscribe(mut self) {
        self.release_now();
    }

    /// Keep the subscriber registered for the lifetime of the cell.
    pub fn detach(mut self) {
        self.release = None;
    }

    fn release_now(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release_now();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("active", &self.release.is_some()).finish()
    }
}
