//! Defines the item store trait.

use crate::{
    Error,
    models::{DatabaseID, Item, NewItem},
};

/// Handles the persistence of items.
///
/// `update` and `delete` issue unconditional statements: mutating a row that
/// does not exist succeeds silently at this layer. The service layer reads
/// the row first and turns the would-be no-op into [Error::NotFound].
pub trait ItemStore {
    /// Create a new item in the store and return it with its assigned ID.
    fn create(&mut self, item: NewItem) -> Result<Item, Error>;

    /// Retrieve the item with `id` from the store.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if no item has `id`.
    fn get(&self, id: DatabaseID) -> Result<Item, Error>;

    /// Retrieve all items in store order.
    ///
    /// An empty store yields an empty vec, not an error.
    fn get_all(&self) -> Result<Vec<Item>, Error>;

    /// Overwrite the name and price of the item with `item.id`.
    fn update(&mut self, item: &Item) -> Result<(), Error>;

    /// Remove the item with `id` from the store.
    fn delete(&mut self, id: DatabaseID) -> Result<(), Error>;
}
