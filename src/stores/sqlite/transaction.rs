//! Implements a SQLite backed transaction store.

use std::sync::{Arc, Mutex};

use rusqlite::{Connection, Row};

use crate::{
    Error,
    models::{DatabaseID, NewTransaction, Transaction},
    stores::TransactionStore,
};

/// Stores transactions in a SQLite database.
///
/// The `item_id` column carries no foreign key constraint, so a transaction
/// may be created for an item that does not exist.
#[derive(Debug, Clone)]
pub struct SQLiteTransactionStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteTransactionStore {
    /// Create a new store for the SQLite `connection`.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }
}

impl TransactionStore for SQLiteTransactionStore {
    /// Create a new transaction in the database.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if there is an SQL error.
    fn create(&mut self, transaction: NewTransaction) -> Result<Transaction, Error> {
        self.connection
            .lock()
            .unwrap()
            .prepare(
                "INSERT INTO \"transaction\" (item_id, quantity, total)
                 VALUES (?1, ?2, ?3)
                 RETURNING id, item_id, quantity, total",
            )?
            .query_row(
                (transaction.item_id, transaction.quantity, transaction.total),
                map_row,
            )
            .map_err(|error| error.into())
    }

    /// Retrieve a transaction in the database by its `id`.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::NotFound] if `id` does not refer to a valid transaction,
    /// - or [Error::SqlError] if there is some other SQL error.
    fn get(&self, id: DatabaseID) -> Result<Transaction, Error> {
        self.connection
            .lock()
            .unwrap()
            .prepare("SELECT id, item_id, quantity, total FROM \"transaction\" WHERE id = :id")?
            .query_row(&[(":id", &id)], map_row)
            .map_err(|error| error.into())
    }

    /// Retrieve all transactions in the database, in the order SQLite
    /// returns them.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if there is an SQL error.
    fn get_all(&self) -> Result<Vec<Transaction>, Error> {
        self.connection
            .lock()
            .unwrap()
            .prepare("SELECT id, item_id, quantity, total FROM \"transaction\"")?
            .query_map([], map_row)?
            .map(|maybe_transaction| maybe_transaction.map_err(|error| error.into()))
            .collect()
    }

    /// Overwrite the item ID, quantity and total of the transaction with
    /// `transaction.id`.
    ///
    /// Zero rows affected is not an error at this layer.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if there is an SQL error.
    fn update(&mut self, transaction: &Transaction) -> Result<(), Error> {
        self.connection.lock().unwrap().execute(
            "UPDATE \"transaction\" SET item_id = ?1, quantity = ?2, total = ?3 WHERE id = ?4",
            (
                transaction.item_id,
                transaction.quantity,
                transaction.total,
                transaction.id,
            ),
        )?;

        Ok(())
    }

    /// Delete the transaction with `id` from the database.
    ///
    /// Zero rows affected is not an error at this layer.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if there is an SQL error.
    fn delete(&mut self, id: DatabaseID) -> Result<(), Error> {
        self.connection
            .lock()
            .unwrap()
            .execute("DELETE FROM \"transaction\" WHERE id = ?1", [id])?;

        Ok(())
    }
}

/// Create the table for storing transactions.
pub fn create_transaction_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS \"transaction\" (
            id INTEGER PRIMARY KEY,
            item_id INTEGER NOT NULL,
            quantity INTEGER NOT NULL,
            total REAL NOT NULL
        )",
        (),
    )?;

    Ok(())
}

fn map_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    Ok(Transaction {
        id: row.get(0)?,
        item_id: row.get(1)?,
        quantity: row.get(2)?,
        total: row.get(3)?,
    })
}

#[cfg(test)]
mod transaction_store_tests {
    use std::sync::{Arc, Mutex};

    use rusqlite::Connection;

    use crate::{
        Error,
        models::{NewTransaction, Transaction},
        stores::TransactionStore,
    };

    use super::{SQLiteTransactionStore, create_transaction_table};

    fn get_test_store() -> SQLiteTransactionStore {
        let connection = Connection::open_in_memory().unwrap();
        create_transaction_table(&connection).expect("Could not create transaction table");

        SQLiteTransactionStore::new(Arc::new(Mutex::new(connection)))
    }

    #[test]
    fn create_transaction_returns_transaction_with_assigned_id() {
        let mut store = get_test_store();

        let transaction = store
            .create(NewTransaction {
                item_id: 1,
                quantity: 3,
                total: 4.5,
            })
            .expect("Could not create transaction");

        assert!(transaction.id > 0);
        assert_eq!(transaction.item_id, 1);
        assert_eq!(transaction.quantity, 3);
        assert_eq!(transaction.total, 4.5);
    }

    #[test]
    fn create_transaction_does_not_check_item_id() {
        let mut store = get_test_store();

        // No item table exists in this store, any item_id must be accepted.
        let result = store.create(NewTransaction {
            item_id: 12345,
            quantity: 1,
            total: 9.99,
        });

        assert!(result.is_ok());
    }

    #[test]
    fn get_transaction_returns_created_transaction() {
        let mut store = get_test_store();
        let inserted_transaction = store
            .create(NewTransaction {
                item_id: 1,
                quantity: 3,
                total: 4.5,
            })
            .expect("Could not create test transaction");

        let selected_transaction = store.get(inserted_transaction.id);

        assert_eq!(Ok(inserted_transaction), selected_transaction);
    }

    #[test]
    fn get_transaction_with_invalid_id_returns_not_found() {
        let store = get_test_store();

        let selected_transaction = store.get(999);

        assert_eq!(selected_transaction, Err(Error::NotFound));
    }

    #[test]
    fn get_all_transactions_on_empty_store_returns_empty_vec() {
        let store = get_test_store();

        let selected_transactions = store.get_all().expect("Could not get all transactions");

        assert!(selected_transactions.is_empty());
    }

    #[test]
    fn update_transaction_overwrites_fields() {
        let mut store = get_test_store();
        let transaction = store
            .create(NewTransaction {
                item_id: 1,
                quantity: 3,
                total: 4.5,
            })
            .expect("Could not create test transaction");

        let updated_transaction = Transaction {
            id: transaction.id,
            item_id: 2,
            quantity: 10,
            total: 20.0,
        };
        store
            .update(&updated_transaction)
            .expect("Could not update test transaction");

        assert_eq!(store.get(transaction.id), Ok(updated_transaction));
    }

    #[test]
    fn update_missing_transaction_succeeds_silently() {
        let mut store = get_test_store();

        let result = store.update(&Transaction {
            id: 999,
            item_id: 1,
            quantity: 1,
            total: 1.0,
        });

        assert_eq!(result, Ok(()));
    }

    #[test]
    fn delete_transaction_removes_row() {
        let mut store = get_test_store();
        let transaction = store
            .create(NewTransaction {
                item_id: 1,
                quantity: 3,
                total: 4.5,
            })
            .expect("Could not create test transaction");

        store
            .delete(transaction.id)
            .expect("Could not delete test transaction");

        assert_eq!(store.get(transaction.id), Err(Error::NotFound));
    }

    #[test]
    fn delete_missing_transaction_succeeds_silently() {
        let mut store = get_test_store();

        let result = store.delete(999);

        assert_eq!(result, Ok(()));
    }
}
