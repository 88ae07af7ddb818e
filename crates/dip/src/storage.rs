//! The low-level storage abstraction and its print-only stand-ins.
//!
//! Neither stand-in performs real I/O: connection management is reported
//! through `tracing`, and the data operations return a description of what
//! a real backend would have done.

use tracing::info;

/// Low-level storage capability. Concrete backends are selected at the
/// composition boundary, never inside the repository or service layers.
pub trait Storage {
    fn connect(&self);
    fn disconnect(&self);
    /// Backend-specific description of the query result; always embeds the
    /// original query text.
    fn read(&self, query: &str) -> String;
    /// Backend-specific receipt for the written data.
    fn write(&self, data: &str) -> String;
}

/// MySQL stand-in.
#[derive(Debug, Default)]
pub struct MySqlStorage;

impl Storage for MySqlStorage {
    fn connect(&self) {
        info!("Conectando ao banco de dados MySQL...");
    }

    fn disconnect(&self) {
        info!("Desconectando do banco de dados MySQL...");
    }

    fn read(&self, query: &str) -> String {
        format!("Resultado da consulta: {query}")
    }

    fn write(&self, data: &str) -> String {
        format!("Escrevendo no banco de dados MySQL: {data}")
    }
}

/// PostgreSQL stand-in.
#[derive(Debug, Default)]
pub struct PostgresStorage;

impl Storage for PostgresStorage {
    fn connect(&self) {
        info!("Conectando ao banco de dados PostgreSQL...");
    }

    fn disconnect(&self) {
        info!("Desconectando do banco de dados PostgreSQL...");
    }

    fn read(&self, query: &str) -> String {
        format!("Resultado da consulta no PostgreSQL: {query}")
    }

    fn write(&self, data: &str) -> String {
        format!("Escrevendo no banco de dados PostgreSQL: {data}")
    }
}
