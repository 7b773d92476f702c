//! Implements a struct that holds the state of the REST server.

use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::{
    Error,
    db::initialize,
    services::{ItemService, TransactionService},
    stores::{
        ItemStore, TransactionStore,
        sqlite::{SQLiteItemStore, SQLiteTransactionStore},
    },
};

/// The state of the REST server.
///
/// Cloned into every request handler. The services are stateless per call,
/// so sharing them across concurrent requests needs no extra locking.
#[derive(Debug, Clone)]
pub struct AppState<I, T>
where
    I: ItemStore + Clone + Send + Sync,
    T: TransactionStore + Clone + Send + Sync,
{
    /// The service for managing items.
    pub item_service: ItemService<I>,

    /// The service for managing transactions.
    pub transaction_service: TransactionService<T>,
}

impl<I, T> AppState<I, T>
where
    I: ItemStore + Clone + Send + Sync,
    T: TransactionStore + Clone + Send + Sync,
{
    /// Create a new [AppState] from the entity services.
    pub fn new(
        item_service: ItemService<I>,
        transaction_service: TransactionService<T>,
    ) -> Self {
        Self {
            item_service,
            transaction_service,
        }
    }
}

/// An [AppState] where both record types are backed by SQLite stores.
pub type SQLiteAppState = AppState<SQLiteItemStore, SQLiteTransactionStore>;

impl SQLiteAppState {
    /// Create an [AppState] with SQLite stores sharing `db_connection`.
    ///
    /// This function will initialize the database by adding the tables for
    /// the domain models.
    ///
    /// # Errors
    /// Returns an error if the database cannot be initialized.
    pub fn with_connection(db_connection: Connection) -> Result<Self, Error> {
        initialize(&db_connection)?;

        let connection = Arc::new(Mutex::new(db_connection));

        Ok(Self::new(
            ItemService::new(SQLiteItemStore::new(connection.clone())),
            TransactionService::new(SQLiteTransactionStore::new(connection)),
        ))
    }
}
