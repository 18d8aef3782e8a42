//! Backends that hold OAuth session data between requests.

use std::collections::HashMap;

use parking_lot::RwLock;

pub trait Storage: std::fmt::Debug + Send + Sync {
    /// Identifier used to select this backend from configuration.
    fn name(&self) -> &str;
    fn get(&self, key: &str) -> Option<String>;
    fn put(&self, key: &str, value: String);
    fn forget(&self, key: &str);

    fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

/// In-memory storage scoped to a single user session.
///
/// Keys are namespaced with [`SessionStorage::PREFIX`] so that several
/// libraries can share one session map.
#[derive(Default)]
pub struct SessionStorage {
    values: RwLock<HashMap<String, String>>,
}

impl std::fmt::Debug for SessionStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStorage")
            .field("entries", &self.values.read().len())
            .finish()
    }
}

impl SessionStorage {
    pub const NAME: &'static str = "session";
    pub const PREFIX: &'static str = "livecoding_";

    pub fn new() -> Self {
        Self::default()
    }

    fn key(key: &str) -> String {
        format!("{}{}", Self::PREFIX, key)
    }
}

impl Storage for SessionStorage {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn get(&self, key: &str) -> Option<String> {
        self.values.read().get(&Self::key(key)).cloned()
    }

    fn put(&self, key: &str, value: String) {
        self.values.write().insert(Self::key(key), value);
    }

    fn forget(&self, key: &str) {
        self.values.write().remove(&Self::key(key));
    }
}

pub fn names() -> [&'static str; 1] {
    [SessionStorage::NAME]
}

pub fn from_name(name: &str) -> Option<Box<dyn Storage>> {
    match name {
        SessionStorage::NAME => Some(Box::new(SessionStorage::new())),
        _ => None,
    }
}
