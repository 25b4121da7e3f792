use gloo_storage::{errors::StorageError, LocalStorage, Storage};

pub const SEARCH_HISTORY_KEY: &str = "searchHistory";
pub const SEARCH_HISTORY_CAPACITY: usize = 10;

/// Durable key-value storage for the history entries.
pub trait HistoryStore {
    fn load(&self, key: &str) -> Result<Vec<String>, StorageError>;
    fn store(&self, key: &str, entries: &[String]) -> Result<(), StorageError>;
}

impl HistoryStore for LocalStorage {
    fn load(&self, key: &str) -> Result<Vec<String>, StorageError> {
        LocalStorage::get(key)
    }
    fn store(&self, key: &str, entries: &[String]) -> Result<(), StorageError> {
        LocalStorage::set(key, entries)
    }
}

/// Recent search queries, most recent first and free of duplicates.
pub struct SearchHistory {
    store: Box<dyn HistoryStore>,
}

impl SearchHistory {
    pub fn new(store: impl HistoryStore + 'static) -> Self {
        Self {
            store: Box::new(store),
        }
    }

    /// Missing or corrupt entries result in an empty history.
    #[must_use]
    pub fn load(&self) -> Vec<String> {
        match self.store.load(SEARCH_HISTORY_KEY) {
            Ok(entries) => entries,
            Err(StorageError::KeyNotFound(_)) => Vec::new(),
            Err(err) => {
                log::warn!("Ignoring unreadable search history: {err}");
                Vec::new()
            }
        }
    }

    pub fn save(&self, query: &str) -> Result<(), StorageError> {
        let mut entries = self.load();
        push_front(&mut entries, query);
        self.store.store(SEARCH_HISTORY_KEY, &entries)
    }
}

fn push_front(entries: &mut Vec<String>, query: &str) {
    entries.retain(|entry| entry != query);
    entries.insert(0, query.to_string());
    entries.truncate(SEARCH_HISTORY_CAPACITY);
}
