//! This file defines the API routes for the item type.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    Error,
    models::{DatabaseID, Item, NewItem},
    state::AppState,
    stores::{ItemStore, TransactionStore},
};

/// A route handler for creating a new item.
pub async fn create_item_endpoint<I, T>(
    State(mut state): State<AppState<I, T>>,
    Json(new_item): Json<NewItem>,
) -> Result<(StatusCode, Json<Item>), Error>
where
    I: ItemStore + Clone + Send + Sync,
    T: TransactionStore + Clone + Send + Sync,
{
    let item = state.item_service.create(new_item)?;

    Ok((StatusCode::CREATED, Json(item)))
}

/// A route handler for listing all items.
pub async fn get_all_items_endpoint<I, T>(
    State(state): State<AppState<I, T>>,
) -> Result<Json<Vec<Item>>, Error>
where
    I: ItemStore + Clone + Send + Sync,
    T: TransactionStore + Clone + Send + Sync,
{
    state.item_service.get_all().map(Json)
}

/// A route handler for getting an item by its ID.
///
/// Responds with 404 if no item has `item_id`.
pub async fn get_item_endpoint<I, T>(
    Path(item_id): Path<DatabaseID>,
    State(state): State<AppState<I, T>>,
) -> Result<Json<Item>, Error>
where
    I: ItemStore + Clone + Send + Sync,
    T: TransactionStore + Clone + Send + Sync,
{
    state.item_service.get(item_id).map(Json)
}

/// A route handler for updating an item.
///
/// Responds with 404 if no item has `item_id`.
pub async fn update_item_endpoint<I, T>(
    Path(item_id): Path<DatabaseID>,
    State(mut state): State<AppState<I, T>>,
    Json(new_item): Json<NewItem>,
) -> Result<Json<Item>, Error>
where
    I: ItemStore + Clone + Send + Sync,
    T: TransactionStore + Clone + Send + Sync,
{
    let item = state.item_service.update(Item {
        id: item_id,
        name: new_item.name,
        price: new_item.price,
    })?;

    Ok(Json(item))
}

/// A route handler for deleting an item.
///
/// Responds with 404 if no item has `item_id`.
pub async fn delete_item_endpoint<I, T>(
    Path(item_id): Path<DatabaseID>,
    State(mut state): State<AppState<I, T>>,
) -> Result<StatusCode, Error>
where
    I: ItemStore + Clone + Send + Sync,
    T: TransactionStore + Clone + Send + Sync,
{
    state.item_service.delete(item_id)?;

    Ok(StatusCode::OK)
}

#[cfg(test)]
mod item_route_tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use rusqlite::Connection;

    use crate::{
        SQLiteAppState, build_router, endpoints,
        models::{Item, NewItem},
    };

    fn new_test_server() -> TestServer {
        let db_connection =
            Connection::open_in_memory().expect("Could not open database in memory.");
        let state =
            SQLiteAppState::with_connection(db_connection).expect("Could not create app state.");

        TestServer::new(build_router(state))
    }

    #[tokio::test]
    async fn create_item_responds_with_created_item() {
        let server = new_test_server();

        let response = server
            .post(endpoints::ITEMS)
            .json(&NewItem {
                name: "Pen".to_string(),
                price: 1.5,
            })
            .await;

        response.assert_status(StatusCode::CREATED);

        let item = response.json::<Item>();
        assert!(item.id > 0);
        assert_eq!(item.name, "Pen");
        assert_eq!(item.price, 1.5);
    }

    #[tokio::test]
    async fn item_life_cycle() {
        let server = new_test_server();

        // Create.
        let response = server
            .post(endpoints::ITEMS)
            .json(&NewItem {
                name: "Pen".to_string(),
                price: 1.5,
            })
            .await;
        response.assert_status(StatusCode::CREATED);
        let item = response.json::<Item>();
        let item_endpoint = endpoints::format_endpoint(endpoints::ITEM, item.id);

        // Read back.
        let response = server.get(&item_endpoint).await;
        response.assert_status_ok();
        assert_eq!(response.json::<Item>(), item);

        // Update.
        let response = server
            .put(&item_endpoint)
            .json(&NewItem {
                name: "Pencil".to_string(),
                price: 2.0,
            })
            .await;
        response.assert_status_ok();

        let response = server.get(&item_endpoint).await;
        response.assert_status_ok();
        let updated_item = response.json::<Item>();
        assert_eq!(updated_item.id, item.id);
        assert_eq!(updated_item.name, "Pencil");
        assert_eq!(updated_item.price, 2.0);

        // Delete.
        let response = server.delete(&item_endpoint).await;
        response.assert_status_ok();

        let response = server.get(&item_endpoint).await;
        response.assert_status_not_found();
    }

    #[tokio::test]
    async fn get_missing_item_responds_with_not_found() {
        let server = new_test_server();

        let response = server
            .get(&endpoints::format_endpoint(endpoints::ITEM, 999))
            .await;

        response.assert_status_not_found();
    }

    #[tokio::test]
    async fn list_items_on_empty_store_responds_with_empty_list() {
        let server = new_test_server();

        let response = server.get(endpoints::ITEMS).await;

        response.assert_status_ok();
        assert_eq!(response.json::<Vec<Item>>(), vec![]);
    }

    #[tokio::test]
    async fn list_items_responds_with_created_items() {
        let server = new_test_server();

        let pen = server
            .post(endpoints::ITEMS)
            .json(&NewItem {
                name: "Pen".to_string(),
                price: 1.5,
            })
            .await
            .json::<Item>();
        let notebook = server
            .post(endpoints::ITEMS)
            .json(&NewItem {
                name: "Notebook".to_string(),
                price: 4.0,
            })
            .await
            .json::<Item>();

        let response = server.get(endpoints::ITEMS).await;

        response.assert_status_ok();
        assert_eq!(response.json::<Vec<Item>>(), vec![pen, notebook]);
    }

    #[tokio::test]
    async fn update_missing_item_responds_with_not_found() {
        let server = new_test_server();

        let response = server
            .put(&endpoints::format_endpoint(endpoints::ITEM, 999))
            .json(&NewItem {
                name: "Ghost".to_string(),
                price: 0.0,
            })
            .await;

        response.assert_status_not_found();
    }

    #[tokio::test]
    async fn delete_missing_item_responds_with_not_found() {
        let server = new_test_server();

        let response = server
            .delete(&endpoints::format_endpoint(endpoints::ITEM, 999))
            .await;

        response.assert_status_not_found();
    }

    #[tokio::test]
    async fn get_item_with_malformed_id_responds_with_bad_request() {
        let server = new_test_server();

        let response = server.get("/api/items/not-a-number").await;

        response.assert_status_bad_request();
    }
}
