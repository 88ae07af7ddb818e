//! The business-facing layer. Knows only the repository abstraction.

use crate::repository::UserRepository;

/// Top-level service, constructed with an injected repository. It names no
/// concrete repository or storage type anywhere.
pub struct UserService {
    repository: Box<dyn UserRepository>,
}

impl UserService {
    pub fn new(repository: Box<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub fn get_user_data(&self, query: &str) -> String {
        self.repository.get_user_data(query)
    }

    pub fn save_user_data(&self, data: &str) -> String {
        self.repository.save_user_data(data)
    }
}
