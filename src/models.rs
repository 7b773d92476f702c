//! The domain models: items for sale and the transactions that purchase them.

use serde::{Deserialize, Serialize};

/// An alias for the integer keys assigned by the database.
pub type DatabaseID = i64;

/// A good tracked by the inventory, e.g. 'Pen'.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// The ID of the item. Assigned by the store and immutable afterwards.
    pub id: DatabaseID,

    /// The display name of the item.
    pub name: String,

    /// The unit price of the item. No range is enforced, negative values are
    /// accepted as-is.
    pub price: f64,
}

/// The data needed to create an [Item]. The ID is assigned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewItem {
    /// The display name of the item.
    pub name: String,

    /// The unit price of the item.
    pub price: f64,
}

/// A purchase of an item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction. Assigned by the store and immutable
    /// afterwards.
    pub id: DatabaseID,

    /// The ID of the purchased item.
    ///
    /// Not checked against the item table: a transaction may reference an
    /// item that has been deleted or never existed.
    pub item_id: DatabaseID,

    /// How many units of the item were purchased.
    pub quantity: i64,

    /// The total amount paid.
    pub total: f64,
}

/// The data needed to create a [Transaction]. The ID is assigned by the
/// store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTransaction {
    /// The ID of the purchased item.
    pub item_id: DatabaseID,

    /// How many units of the item were purchased.
    pub quantity: i64,

    /// The total amount paid.
    pub total: f64,
}
