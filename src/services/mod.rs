//! Services that wrap the [stores](crate::stores) with the existence checks
//! the stores themselves do not enforce.

mod item;
mod transaction;

pub use item::ItemService;
pub use transaction::TransactionService;
