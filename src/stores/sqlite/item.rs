//! Implements a SQLite backed item store.

use std::sync::{Arc, Mutex};

use rusqlite::{Connection, Row};

use crate::{
    Error,
    models::{DatabaseID, Item, NewItem},
    stores::ItemStore,
};

/// Stores items in a SQLite database.
#[derive(Debug, Clone)]
pub struct SQLiteItemStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteItemStore {
    /// Create a new store for the SQLite `connection`.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }
}

impl ItemStore for SQLiteItemStore {
    /// Create a new item in the database.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if there is an SQL error.
    fn create(&mut self, item: NewItem) -> Result<Item, Error> {
        self.connection
            .lock()
            .unwrap()
            .prepare("INSERT INTO item (name, price) VALUES (?1, ?2) RETURNING id, name, price")?
            .query_row((&item.name, item.price), map_row)
            .map_err(|error| error.into())
    }

    /// Retrieve an item in the database by its `id`.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::NotFound] if `id` does not refer to a valid item,
    /// - or [Error::SqlError] if there is some other SQL error.
    fn get(&self, id: DatabaseID) -> Result<Item, Error> {
        self.connection
            .lock()
            .unwrap()
            .prepare("SELECT id, name, price FROM item WHERE id = :id")?
            .query_row(&[(":id", &id)], map_row)
            .map_err(|error| error.into())
    }

    /// Retrieve all items in the database, in the order SQLite returns them.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if there is an SQL error.
    fn get_all(&self) -> Result<Vec<Item>, Error> {
        self.connection
            .lock()
            .unwrap()
            .prepare("SELECT id, name, price FROM item")?
            .query_map([], map_row)?
            .map(|maybe_item| maybe_item.map_err(|error| error.into()))
            .collect()
    }

    /// Overwrite the name and price of the item with `item.id`.
    ///
    /// Zero rows affected is not an error at this layer.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if there is an SQL error.
    fn update(&mut self, item: &Item) -> Result<(), Error> {
        self.connection.lock().unwrap().execute(
            "UPDATE item SET name = ?1, price = ?2 WHERE id = ?3",
            (&item.name, item.price, item.id),
        )?;

        Ok(())
    }

    /// Delete the item with `id` from the database.
    ///
    /// Zero rows affected is not an error at this layer.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if there is an SQL error.
    fn delete(&mut self, id: DatabaseID) -> Result<(), Error> {
        self.connection
            .lock()
            .unwrap()
            .execute("DELETE FROM item WHERE id = ?1", [id])?;

        Ok(())
    }
}

/// Create the table for storing items.
pub fn create_item_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS item (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            price REAL NOT NULL
        )",
        (),
    )?;

    Ok(())
}

fn map_row(row: &Row) -> Result<Item, rusqlite::Error> {
    Ok(Item {
        id: row.get(0)?,
        name: row.get(1)?,
        price: row.get(2)?,
    })
}
