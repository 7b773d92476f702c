//! SQLite backed implementations of the store traits.

mod item;
mod transaction;

pub use item::{SQLiteItemStore, create_item_table};
pub use transaction::{SQLiteTransactionStore, create_transaction_table};
