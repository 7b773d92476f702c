//! This file defines the API routes for the transaction type.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    Error,
    models::{DatabaseID, NewTransaction, Transaction},
    state::AppState,
    stores::{ItemStore, TransactionStore},
};

/// A route handler for creating a new transaction.
///
/// The referenced item is not checked for existence.
pub async fn create_transaction_endpoint<I, T>(
    State(mut state): State<AppState<I, T>>,
    Json(new_transaction): Json<NewTransaction>,
) -> Result<(StatusCode, Json<Transaction>), Error>
where
    I: ItemStore + Clone + Send + Sync,
    T: TransactionStore + Clone + Send + Sync,
{
    let transaction = state.transaction_service.create(new_transaction)?;

    Ok((StatusCode::CREATED, Json(transaction)))
}

/// A route handler for listing all transactions.
pub async fn get_all_transactions_endpoint<I, T>(
    State(state): State<AppState<I, T>>,
) -> Result<Json<Vec<Transaction>>, Error>
where
    I: ItemStore + Clone + Send + Sync,
    T: TransactionStore + Clone + Send + Sync,
{
    state.transaction_service.get_all().map(Json)
}

/// A route handler for getting a transaction by its ID.
///
/// Responds with 404 if no transaction has `transaction_id`.
pub async fn get_transaction_endpoint<I, T>(
    Path(transaction_id): Path<DatabaseID>,
    State(state): State<AppState<I, T>>,
) -> Result<Json<Transaction>, Error>
where
    I: ItemStore + Clone + Send + Sync,
    T: TransactionStore + Clone + Send + Sync,
{
    state.transaction_service.get(transaction_id).map(Json)
}

/// A route handler for updating a transaction.
///
/// Responds with 404 if no transaction has `transaction_id`.
pub async fn update_transaction_endpoint<I, T>(
    Path(transaction_id): Path<DatabaseID>,
    State(mut state): State<AppState<I, T>>,
    Json(new_transaction): Json<NewTransaction>,
) -> Result<Json<Transaction>, Error>
where
    I: ItemStore + Clone + Send + Sync,
    T: TransactionStore + Clone + Send + Sync,
{
    let transaction = state.transaction_service.update(Transaction {
        id: transaction_id,
        item_id: new_transaction.item_id,
        quantity: new_transaction.quantity,
        total: new_transaction.total,
    })?;

    Ok(Json(transaction))
}

/// A route handler for deleting a transaction.
///
/// Responds with 404 if no transaction has `transaction_id`.
pub async fn delete_transaction_endpoint<I, T>(
    Path(transaction_id): Path<DatabaseID>,
    State(mut state): State<AppState<I, T>>,
) -> Result<StatusCode, Error>
where
    I: ItemStore + Clone + Send + Sync,
    T: TransactionStore + Clone + Send + Sync,
{
    state.transaction_service.delete(transaction_id)?;

    Ok(StatusCode::OK)
}
