//! This module defines the REST API's routes and their handlers.

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
};
use serde_json::json;

use crate::{
    AppState, Error,
    stores::{CategoryStore, ProductStore},
};

use category::{
    create_category, delete_category, get_all_categories, get_category, update_category,
};
use product::{create_product, delete_product, get_all_products, get_product, update_product};

mod category;
pub mod endpoints;
mod product;

/// Return a router with all the app's routes.
pub fn build_router<C, P>(state: AppState<C, P>) -> Router
where
    C: CategoryStore + Clone + Send + Sync + 'static,
    P: ProductStore + Clone + Send + Sync + 'static,
{
    Router::new()
        .route(endpoints::HEALTH, get(get_health))
        .route(endpoints::CATEGORIES, get(get_all_categories))
        .route(endpoints::CATEGORIES, post(create_category))
        .route(endpoints::CATEGORY, get(get_category))
        .route(endpoints::CATEGORY, put(update_category))
        .route(endpoints::CATEGORY, delete(delete_category))
        .route(endpoints::PRODUCTS, get(get_all_products))
        .route(endpoints::PRODUCTS, post(create_product))
        .route(endpoints::PRODUCT, get(get_product))
        .route(endpoints::PRODUCT, put(update_product))
        .route(endpoints::PRODUCT, delete(delete_product))
        .fallback(get_404_not_found)
        .with_state(state)
}

/// Report the server status and version.
async fn get_health() -> Response {
    (
        StatusCode::OK,
        Json(json!({
            "status": "OK",
            "message": "Magasinier API running",
            "version": env!("CARGO_PKG_VERSION"),
        })),
    )
        .into_response()
}

async fn get_404_not_found() -> Response {
    Error::NotFound.into_response()
}

#[cfg(test)]
mod root_route_tests {
    use axum_test::TestServer;
    use rusqlite::Connection;
    use serde_json::Value;

    use crate::{routes::endpoints, stores::sqlite::create_app_state};

    use super::build_router;

    fn get_test_server() -> TestServer {
        let db_connection =
            Connection::open_in_memory().expect("Could not open database in memory.");
        let state = create_app_state(db_connection).expect("Could not create app state.");

        TestServer::try_new(build_router(state)).expect("Could not create test server.")
    }

    #[tokio::test]
    async fn health_check_reports_ok() {
        let server = get_test_server();

        let response = server.get(endpoints::HEALTH).await;

        response.assert_status_ok();

        let body = response.json::<Value>();

        assert_eq!(body["status"], "OK");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn unknown_route_returns_json_not_found() {
        let server = get_test_server();

        let response = server.get("/api/warehouses").await;

        response.assert_status_not_found();

        let body = response.json::<Value>();

        assert!(
            body["error"].is_string(),
            "got body {body:?}, want an object with an 'error' key"
        );
    }
}
