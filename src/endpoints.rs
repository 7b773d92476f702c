//! The API endpoint URIs.
//!
//! For endpoints that take a parameter, e.g., '/api/items/{item_id}', use
//! [format_endpoint].

/// The route to create and list items.
pub const ITEMS: &str = "/api/items";
/// The route to get, update or delete a single item.
pub const ITEM: &str = "/api/items/{item_id}";
/// The route to create and list transactions.
pub const TRANSACTIONS: &str = "/api/transactions";
/// The route to get, update or delete a single transaction.
pub const TRANSACTION: &str = "/api/transactions/{transaction_id}";

/// Replace the path parameter in `endpoint_path` with `id`.
///
/// If `endpoint_path` contains no parameter, it is returned unchanged.
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let (Some(param_start), Some(param_end)) = (endpoint_path.find('{'), endpoint_path.find('}'))
    else {
        return endpoint_path.to_string();
    };

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end + 1..]
    )
}
