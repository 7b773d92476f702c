//! Application router configuration.

use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::{
    endpoints,
    logging::logging_middleware,
    routes::{
        item::{
            create_item_endpoint, delete_item_endpoint, get_all_items_endpoint, get_item_endpoint,
            update_item_endpoint,
        },
        transaction::{
            create_transaction_endpoint, delete_transaction_endpoint,
            get_all_transactions_endpoint, get_transaction_endpoint, update_transaction_endpoint,
        },
    },
    state::AppState,
    stores::{ItemStore, TransactionStore},
};

/// Return a router with all the app's routes.
pub fn build_router<I, T>(state: AppState<I, T>) -> Router
where
    I: ItemStore + Clone + Send + Sync + 'static,
    T: TransactionStore + Clone + Send + Sync + 'static,
{
    Router::new()
        .route(
            endpoints::ITEMS,
            post(create_item_endpoint).get(get_all_items_endpoint),
        )
        .route(
            endpoints::ITEM,
            get(get_item_endpoint)
                .put(update_item_endpoint)
                .delete(delete_item_endpoint),
        )
        .route(
            endpoints::TRANSACTIONS,
            post(create_transaction_endpoint).get(get_all_transactions_endpoint),
        )
        .route(
            endpoints::TRANSACTION,
            get(get_transaction_endpoint)
                .put(update_transaction_endpoint)
                .delete(delete_transaction_endpoint),
        )
        .layer(middleware::from_fn(logging_middleware))
        .with_state(state)
}
