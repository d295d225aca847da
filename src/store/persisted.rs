use std::any::Any;
use std::collections::{HashMap, HashSet};

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::backend::StorageBackend;
use super::key::StateKey;
use crate::logging::{log_debug, log_error, log_warn};

/// Values the store can mirror and persist.
pub trait StoredValue: Serialize + DeserializeOwned + Clone + Send + 'static {}

impl<T> StoredValue for T where T: Serialize + DeserializeOwned + Clone + Send + 'static {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&str) + Send>;

/// Read-through, write-through store over a [`StorageBackend`].
///
/// After every setter the mirror and durable storage agree, unless the
/// backend rejected the write, in which case the mirror wins for the rest
/// of the session. A key whose document could not be read is never written:
/// changes to it stay in memory until [`Store::reload`].
pub struct Store<B: StorageBackend> {
    backend: B,
    mirror: HashMap<&'static str, Box<dyn Any + Send>>,
    unreadable: HashSet<&'static str>,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl<B: StorageBackend> Store<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            mirror: HashMap::new(),
            unreadable: HashSet::new(),
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Current value for `key`, loading it from storage on first access.
    pub fn get<T: StoredValue>(&mut self, key: &StateKey<T>) -> T {
        if let Some(value) = self.mirrored(key) {
            return value.clone();
        }

        match self.load_or_seed(key) {
            Some(value) => {
                self.mirror.insert(key.name(), Box::new(value.clone()));
                value
            }
            // Not mirrored, so the next read tries storage again
            None => key.initial(),
        }
    }

    /// Replace the value for `key`.
    pub fn set<T: StoredValue>(&mut self, key: &StateKey<T>, value: T) -> T {
        self.update(key, move |_| value)
    }

    /// Compute the next value for `key` from the previous one.
    pub fn update<T, F>(&mut self, key: &StateKey<T>, f: F) -> T
    where
        T: StoredValue,
        F: FnOnce(T) -> T,
    {
        let mirrored = self.mirrored(key).cloned();
        let previous = match mirrored {
            Some(value) => value,
            None => match self.load_or_seed(key) {
                Some(value) => value,
                None => {
                    self.unreadable.insert(key.name());
                    key.initial()
                }
            },
        };
        let next = f(previous);

        self.mirror.insert(key.name(), Box::new(next.clone()));
        if self.unreadable.contains(key.name()) {
            log_warn(&format!(
                "Keeping '{}' in memory only; its stored document could not be read",
                key.name()
            ));
        } else {
            self.persist(key.name(), &next);
        }
        self.notify(key.name());

        next
    }

    /// Forget the mirrored value so the next read goes back to storage.
    pub fn reload(&mut self, name: &str) {
        self.mirror.remove(name);
        self.unreadable.remove(name);
    }

    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&str) + Send + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(existing, _)| *existing != id);
        self.subscribers.len() != before
    }

    fn mirrored<T: StoredValue>(&self, key: &StateKey<T>) -> Option<&T> {
        self.mirror
            .get(key.name())
            .and_then(|boxed| boxed.downcast_ref::<T>())
    }

    /// The stored value, or the seed when nothing usable is stored. `None`
    /// when storage could not be read at all.
    fn load_or_seed<T: StoredValue>(&self, key: &StateKey<T>) -> Option<T> {
        match self.backend.load(key.name()) {
            Ok(Some(raw)) => match serde_json::from_str::<T>(&raw) {
                Ok(value) => return Some(value),
                Err(e) => log_warn(&format!(
                    "Discarding malformed '{}' document: {}",
                    key.name(),
                    e
                )),
            },
            Ok(None) => log_debug(&format!("No stored '{}', adopting seed", key.name())),
            Err(e) => {
                log_error(&format!("Failed to read '{}': {}", key.name(), e));
                return None;
            }
        }

        let initial = key.initial();
        self.persist(key.name(), &initial);
        Some(initial)
    }

    fn persist<T: StoredValue>(&self, name: &str, value: &T) {
        let raw = match serde_json::to_string_pretty(value) {
            Ok(raw) => raw,
            Err(e) => {
                log_error(&format!("Failed to serialize '{}': {}", name, e));
                return;
            }
        };

        if let Err(e) = self.backend.save(name, &raw) {
            log_error(&format!("Failed to persist '{}': {}", name, e));
        }
    }

    fn notify(&mut self, name: &str) {
        for (_, callback) in self.subscribers.iter_mut() {
            callback(name);
        }
    }
}
