use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::state::CheckState;

/// Observer trait for check-state transitions. The presentation layer
/// implements this to re-render whenever the checker publishes a new
/// snapshot.
#[async_trait]
pub trait UpdateObserver: Send + Sync {
    /// Called with the freshly published snapshot after every mutation.
    async fn on_state_changed(&self, state: &CheckState);
}

/// Registry of observers notified after each state transition.
#[derive(Clone)]
pub struct ObserverManager {
    observers: Arc<Mutex<Vec<Arc<dyn UpdateObserver>>>>,
}

impl ObserverManager {
    pub fn new() -> Self {
        Self {
            observers: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Register an observer
    pub async fn register(&self, observer: Arc<dyn UpdateObserver>) {
        let mut observers = self.observers.lock().await;
        observers.push(observer);
    }

    /// Unregister all observers
    pub async fn clear(&self) {
        let mut observers = self.observers.lock().await;
        observers.clear();
    }

    /// Notify all observers of a published snapshot
    pub async fn notify_state_changed(&self, state: &CheckState) {
        let observers = self.observers.lock().await;
        for observer in observers.iter() {
            observer.on_state_changed(state).await;
        }
    }

    /// Get the number of registered observers
    pub async fn observer_count(&self) -> usize {
        let observers = self.observers.lock().await;
        observers.len()
    }
}

impl Default for ObserverManager {
    fn default() -> Self {
        Self::new()
    }
}
