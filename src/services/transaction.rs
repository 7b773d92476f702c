//! The transaction service. Same shape as the item service: direct
//! delegation for reads and creation, an existence check in front of
//! mutations.

use crate::{
    Error,
    models::{DatabaseID, NewTransaction, Transaction},
    stores::TransactionStore,
};

/// Provides create/read/update/delete/list operations for transactions.
#[derive(Debug, Clone)]
pub struct TransactionService<S: TransactionStore> {
    store: S,
}

impl<S: TransactionStore> TransactionService<S> {
    /// Create a new service backed by `store`.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Create a new transaction and return it with its assigned ID.
    ///
    /// The referenced item is not checked for existence.
    pub fn create(&mut self, transaction: NewTransaction) -> Result<Transaction, Error> {
        self.store.create(transaction)
    }

    /// Retrieve the transaction with `id`.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if no transaction has `id`.
    pub fn get(&self, id: DatabaseID) -> Result<Transaction, Error> {
        self.store.get(id)
    }

    /// Retrieve all transactions.
    pub fn get_all(&self) -> Result<Vec<Transaction>, Error> {
        self.store.get_all()
    }

    /// Overwrite the fields of the transaction with `transaction.id` and
    /// return the updated transaction.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if no transaction has `transaction.id`. No
    /// write is attempted in that case.
    pub fn update(&mut self, transaction: Transaction) -> Result<Transaction, Error> {
        self.store.get(transaction.id)?;
        self.store.update(&transaction)?;

        Ok(transaction)
    }

    /// Remove the transaction with `id`.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if no transaction has `id`. No write is
    /// attempted in that case.
    pub fn delete(&mut self, id: DatabaseID) -> Result<(), Error> {
        self.store.get(id)?;
        self.store.delete(id)
    }
}
