//! In-memory list container.

use crate::traits::ListContainer;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Thread-safe, append-only list of rendered entries.
///
/// Useful wherever there is no real rendering surface: tests, headless
/// embedders, or as a buffer before handing entries to a UI.
#[derive(Debug)]
pub struct MemoryContainer {
    id: String,
    items: Mutex<Vec<String>>,
}

impl MemoryContainer {
    /// Create an empty container with the given identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            items: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of the rendered entries, in append order
    pub fn items(&self) -> Vec<String> {
        self.lock().clone()
    }

    /// Number of rendered entries
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether nothing has been rendered yet
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Remove all entries
    pub fn clear(&self) {
        self.lock().clear();
    }

    // Pushes can't be observed half-done, so poisoning is ignored.
    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        self.items.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for MemoryContainer {
    fn default() -> Self {
        Self::new(crate::types::DEFAULT_CONTAINER_ID)
    }
}

impl ListContainer for MemoryContainer {
    fn id(&self) -> &str {
        &self.id
    }

    fn append_item(&self, text: &str) {
        self.lock().push(text.to_owned());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn default_container_is_users() {
        let container = MemoryContainer::default();
        assert_eq!(container.id(), "Users");
        assert!(container.is_empty());
    }

    #[test]
    fn appends_in_order() {
        let container = MemoryContainer::new("Users");
        container.append_item("Alice");
        container.append_item("");
        container.append_item("Bob");

        assert_eq!(container.len(), 3);
        assert_eq!(container.items(), vec!["Alice", "", "Bob"]);
    }

    #[test]
    fn clear_empties_container() {
        let container = MemoryContainer::new("Users");
        container.append_item("Alice");
        container.clear();
        assert!(container.is_empty());
    }

    #[test]
    fn shared_container_accepts_concurrent_appends() {
        let container = Arc::new(MemoryContainer::new("Users"));

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let container = Arc::clone(&container);
                thread::spawn(move || {
                    for j in 0..25 {
                        container.append_item(&format!("{}-{}", i, j));
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(container.len(), 100);
    }

    #[test]
    fn arc_forwards_to_inner_container() {
        let container = Arc::new(MemoryContainer::new("Users"));
        let as_trait: &dyn ListContainer = &container;
        as_trait.append_item("Alice");

        assert_eq!(as_trait.id(), "Users");
        assert_eq!(container.items(), vec!["Alice"]);
    }
}
