//! `dip` crate — the Dependency Inversion Principle demonstration.
//!
//! High-level layers depend on abstractions, never on concrete low-level
//! types. [`UserService`] knows only the [`UserRepository`] trait, the
//! repository knows only the [`Storage`] trait, and the concrete storage
//! stand-ins are chosen at the composition boundary — swapping them
//! touches no service or repository code.

pub mod storage;
pub mod repository;
pub mod service;
mod demo;

pub use storage::{MySqlStorage, PostgresStorage, Storage};
pub use repository::{StorageUserRepository, UserRepository};
pub use service::UserService;
pub use demo::demo;
