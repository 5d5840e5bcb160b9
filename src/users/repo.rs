use std::sync::{Mutex, MutexGuard, PoisonError};

use indexmap::IndexMap;

use crate::models::User;

/// In-memory user table, keyed by id and kept in insertion order.
///
/// Lives for the lifetime of the provider process; nothing is persisted.
#[derive(Debug, Default)]
pub struct UserStore {
    users: Mutex<IndexMap<String, User>>,
}

impl UserStore {
    /// Store holding the two records every fresh provider starts with.
    pub fn seeded() -> Self {
        let store = Self::default();
        store.insert("John Doe".into(), "john@example.com".into());
        store.insert("Jane Smith".into(), "jane@example.com".into());
        store
    }

    // Every critical section leaves the map consistent, so a poisoned lock is safe to reuse.
    fn lock(&self) -> MutexGuard<'_, IndexMap<String, User>> {
        self.users.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn get(&self, id: &str) -> Option<User> {
        self.lock().get(id).cloned()
    }

    /// Inserts a new record with id `len + 1`.
    ///
    /// Counting and inserting happen under one lock so concurrent creates never share an id.
    pub fn insert(&self, name: String, email: String) -> User {
        let mut users = self.lock();
        let user = User {
            id: (users.len() + 1).to_string(),
            name,
            email,
        };
        users.insert(user.id.clone(), user.clone());
        user
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn list(&self) -> Vec<User> {
        self.lock().values().cloned().collect()
    }
}
