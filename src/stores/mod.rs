//! Contains traits and implementations for objects that store the domain [models](crate::models).

mod item;
mod transaction;

pub mod sqlite;

pub use item::ItemStore;
pub use transaction::TransactionStore;
