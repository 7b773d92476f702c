//! Defines the transaction store trait.

use crate::{
    Error,
    models::{DatabaseID, NewTransaction, Transaction},
};

/// Handles the persistence of transactions.
///
/// Like the item store, `update` and `delete` are unconditional and succeed
/// silently when no row matches. Implementers must not enforce referential
/// integrity on `item_id`.
pub trait TransactionStore {
    /// Create a new transaction in the store and return it with its assigned
    /// ID.
    fn create(&mut self, transaction: NewTransaction) -> Result<Transaction, Error>;

    /// Retrieve the transaction with `id` from the store.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if no transaction has `id`.
    fn get(&self, id: DatabaseID) -> Result<Transaction, Error>;

    /// Retrieve all transactions in store order.
    ///
    /// An empty store yields an empty vec, not an error.
    fn get_all(&self) -> Result<Vec<Transaction>, Error>;

    /// Overwrite the item ID, quantity and total of the transaction with
    /// `transaction.id`.
    fn update(&mut self, transaction: &Transaction) -> Result<(), Error>;

    /// Remove the transaction with `id` from the store.
    fn delete(&mut self, id: DatabaseID) -> Result<(), Error>;
}
