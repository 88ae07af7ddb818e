//! Fixed demonstration sequence for the dependency inversion example.
//!
//! The concrete storage stand-in is chosen here, at the composition
//! boundary — nowhere else in the crate.

use crate::repository::StorageUserRepository;
use crate::service::UserService;
use crate::storage::{MySqlStorage, PostgresStorage, Storage};

fn compose(storage: Box<dyn Storage>) -> UserService {
    UserService::new(Box::new(StorageUserRepository::new(storage)))
}

/// Run the demonstration and return its transcript.
pub fn demo() -> Vec<String> {
    let mut lines = Vec::new();

    let mysql_service = compose(Box::new(MySqlStorage));
    lines.push(mysql_service.get_user_data("SELECT * FROM users;"));
    lines.push(mysql_service.save_user_data("INSERT INTO users VALUES ('John Doe');"));

    let postgres_service = compose(Box::new(PostgresStorage));
    lines.push(postgres_service.get_user_data("SELECT * FROM employees;"));
    lines.push(postgres_service.save_user_data("INSERT INTO employees VALUES ('Jane Doe');"));

    lines
}
