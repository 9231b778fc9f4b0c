//! Origin-wide key/value storage shared by every open tab.
//!
//! Writes from one tab are announced to all other tabs through a broadcast
//! channel, the way a browser fires `storage` events. A tab never sees its own
//! writes come back.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use tokio::sync::broadcast::{self, error::RecvError, error::TryRecvError};

/// Key holding the selected palette name.
pub const STORAGE_KEY: &str = "color-theme";

const EVENT_CAPACITY: usize = 64;

/// Origin id for writes made directly on [`SharedStorage`] (not through a tab).
const DIRECT_ORIGIN: u64 = 0;

/// A change made by some other tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageEvent {
    pub key: String,
    pub old_value: Option<String>,
    pub new_value: Option<String>,
    origin: u64,
}

/// Persistence seam for the theme synchroniser.
pub trait PaletteStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
    fn subscribe(&self) -> StorageSubscription;
}

struct Inner {
    values: RwLock<HashMap<String, String>>,
    events: broadcast::Sender<StorageEvent>,
    next_tab: AtomicU64,
}

/// Storage for one origin. Cheap to clone; clones share the same data.
#[derive(Clone)]
pub struct SharedStorage {
    inner: Arc<Inner>,
}

impl SharedStorage {
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            inner: Arc::new(Inner {
                values: RwLock::new(HashMap::new()),
                events,
                next_tab: AtomicU64::new(DIRECT_ORIGIN + 1),
            }),
        }
    }

    /// Handle for a newly opened tab.
    pub fn tab(&self) -> TabStorage {
        TabStorage {
            storage: self.clone(),
            id: self.inner.next_tab.fetch_add(1, Ordering::Relaxed),
        }
    }

    fn get(&self, key: &str) -> Option<String> {
        self.inner
            .values
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str, origin: u64) {
        let old_value = self
            .inner
            .values
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());

        // Browsers only notify when the value actually changes
        if old_value.as_deref() == Some(value) {
            return;
        }

        let event = StorageEvent {
            key: key.to_string(),
            old_value,
            new_value: Some(value.to_string()),
            origin,
        };
        // No subscribers is fine
        let _ = self.inner.events.send(event);
    }

    fn listen(&self, origin: u64) -> StorageSubscription {
        StorageSubscription {
            receiver: self.inner.events.subscribe(),
            origin,
        }
    }
}

impl Default for SharedStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl PaletteStore for SharedStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.get(key)
    }

    fn write(&self, key: &str, value: &str) {
        self.set(key, value, DIRECT_ORIGIN);
    }

    fn subscribe(&self) -> StorageSubscription {
        self.listen(DIRECT_ORIGIN)
    }
}

/// One tab's view of [`SharedStorage`].
#[derive(Clone)]
pub struct TabStorage {
    storage: SharedStorage,
    id: u64,
}

impl PaletteStore for TabStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.storage.get(key)
    }

    fn write(&self, key: &str, value: &str) {
        self.storage.set(key, value, self.id);
    }

    fn subscribe(&self) -> StorageSubscription {
        self.storage.listen(self.id)
    }
}

/// Stream of changes made elsewhere. Dropping it unsubscribes.
pub struct StorageSubscription {
    receiver: broadcast::Receiver<StorageEvent>,
    origin: u64,
}

impl StorageSubscription {
    /// Next pending event from another tab, without waiting.
    pub fn try_next(&mut self) -> Option<StorageEvent> {
        loop {
            match self.receiver.try_recv() {
                Ok(event) if event.origin == self.origin => continue,
                Ok(event) => return Some(event),
                Err(TryRecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "Storage subscriber lagged");
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => return None,
            }
        }
    }

    /// Wait for the next event from another tab.
    pub async fn next(&mut self) -> Option<StorageEvent> {
        loop {
            match self.receiver.recv().await {
                Ok(event) if event.origin == self.origin => continue,
                Ok(event) => return Some(event),
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "Storage subscriber lagged");
                }
                Err(RecvError::Closed) => return None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tabs_share_values() {
        let storage = SharedStorage::new();
        let a = storage.tab();
        let b = storage.tab();

        a.write(STORAGE_KEY, "rose");
        assert_eq!(b.read(STORAGE_KEY).as_deref(), Some("rose"));
        assert_eq!(storage.read("other"), None);
    }

    #[test]
    fn test_own_writes_are_not_echoed() {
        let storage = SharedStorage::new();
        let a = storage.tab();
        let b = storage.tab();
        let mut a_events = a.subscribe();
        let mut b_events = b.subscribe();

        a.write(STORAGE_KEY, "cyan");

        assert!(a_events.try_next().is_none());
        let event = b_events.try_next().unwrap();
        assert_eq!(event.key, STORAGE_KEY);
        assert_eq!(event.old_value, None);
        assert_eq!(event.new_value.as_deref(), Some("cyan"));
        assert!(b_events.try_next().is_none());
    }

    #[test]
    fn test_unchanged_value_fires_nothing() {
        let storage = SharedStorage::new();
        let a = storage.tab();
        let mut events = storage.tab().subscribe();

        a.write(STORAGE_KEY, "purple");
        a.write(STORAGE_KEY, "purple");

        assert!(events.try_next().is_some());
        assert!(events.try_next().is_none());
    }

    #[tokio::test]
    async fn test_async_next() {
        let storage = SharedStorage::new();
        let mut events = storage.tab().subscribe();

        storage.write(STORAGE_KEY, "golden");

        let event = events.next().await.unwrap();
        assert_eq!(event.new_value.as_deref(), Some("golden"));
    }
}
