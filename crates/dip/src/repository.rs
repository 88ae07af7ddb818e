//! The persistence abstraction the service layer talks to.

use crate::storage::Storage;

/// What the service layer needs from persistence — nothing about
/// connections or concrete backends leaks through this trait.
pub trait UserRepository {
    fn get_user_data(&self, query: &str) -> String;
    fn save_user_data(&self, data: &str) -> String;
}

/// The one concrete repository. It is constructed with an injected
/// [`Storage`] and scopes a connection strictly to each call:
/// connect → operate → disconnect, never overlapping.
pub struct StorageUserRepository {
    storage: Box<dyn Storage>,
}

impl StorageUserRepository {
    pub fn new(storage: Box<dyn Storage>) -> Self {
        Self { storage }
    }
}

impl UserRepository for StorageUserRepository {
    fn get_user_data(&self, query: &str) -> String {
        self.storage.connect();
        let data = self.storage.read(query);
        self.storage.disconnect();
        data
    }

    fn save_user_data(&self, data: &str) -> String {
        self.storage.connect();
        let receipt = self.storage.write(data);
        self.storage.disconnect();
        receipt
    }
}
