//! Database setup for the application.

use rusqlite::Connection;

use crate::stores::sqlite::{create_item_table, create_transaction_table};

/// Create the tables for the domain models if they do not already exist.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn initialize(connection: &Connection) -> Result<(), rusqlite::Error> {
    create_item_table(connection)?;
    create_transaction_table(connection)?;

    Ok(())
}
