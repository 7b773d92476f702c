//! The item service: store access plus an existence check in front of
//! mutations.

use crate::{
    Error,
    models::{DatabaseID, Item, NewItem},
    stores::ItemStore,
};

/// Provides create/read/update/delete/list operations for items.
///
/// The underlying store issues unconditional UPDATE and DELETE statements, so
/// mutating a missing row would silently do nothing. This service reads the
/// row first and fails with [Error::NotFound] instead.
#[derive(Debug, Clone)]
pub struct ItemService<S: ItemStore> {
    store: S,
}

impl<S: ItemStore> ItemService<S> {
    /// Create a new service backed by `store`.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Create a new item and return it with its assigned ID.
    pub fn create(&mut self, item: NewItem) -> Result<Item, Error> {
        self.store.create(item)
    }

    /// Retrieve the item with `id`.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if no item has `id`.
    pub fn get(&self, id: DatabaseID) -> Result<Item, Error> {
        self.store.get(id)
    }

    /// Retrieve all items.
    pub fn get_all(&self) -> Result<Vec<Item>, Error> {
        self.store.get_all()
    }

    /// Overwrite the name and price of the item with `item.id` and return
    /// the updated item.
    ///
    /// The existence check and the write are separate statements: a row
    /// removed by a concurrent request between the two is not detected.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if no item has `item.id`. No write is
    /// attempted in that case.
    pub fn update(&mut self, item: Item) -> Result<Item, Error> {
        self.store.get(item.id)?;
        self.store.update(&item)?;

        Ok(item)
    }

    /// Remove the item with `id`.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if no item has `id`. No write is attempted
    /// in that case.
    pub fn delete(&mut self, id: DatabaseID) -> Result<(), Error> {
        self.store.get(id)?;
        self.store.delete(id)
    }
}
