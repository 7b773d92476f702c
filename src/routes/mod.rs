//! The request handlers for the REST API, one module per record type.

pub mod item;
pub mod transaction;
