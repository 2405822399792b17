//! Magasinier is a small inventory backend: products and categories with full
//! CRUD over SQLite, exposed as a JSON/HTTP API.
//!
//! The interesting part lives between the HTTP surface and the store: field
//! validation runs in a fixed order with the first failure winning, every
//! product write re-checks that the referenced category exists, and a
//! category cannot be deleted while products still reference it.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use serde_json::json;
use tokio::signal;

mod app_state;
mod db;
mod logging;

pub mod models;
pub mod routes;
pub mod services;
pub mod stores;

pub use app_state::AppState;
pub use db::initialize as initialize_db;
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routes::build_router;

/// An async task that waits for either the ctrl+c or terminate signal,
/// whichever comes first, and then signals the server to shut down
/// gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A non-positive ID was used to look up, update or delete a row.
    #[error("the ID must be a positive integer")]
    InvalidId,

    /// An empty string was used to create a category name.
    #[error("category name cannot be empty")]
    EmptyCategoryName,

    /// An empty string was used to create a product name.
    #[error("product name cannot be empty")]
    EmptyProductName,

    /// A zero or negative price was used to create or update a product.
    #[error("price must be greater than zero")]
    InvalidPrice,

    /// A negative stock count was used to create or update a product.
    #[error("stock cannot be negative")]
    InvalidStock,

    /// A non-positive category ID was used to create or update a product.
    #[error("the category ID must be a positive integer")]
    InvalidCategoryId,

    /// The category ID used to create or update a product did not match an
    /// existing category.
    #[error("the category ID does not refer to a valid category")]
    CategoryNotFound,

    /// Tried to delete a category that products still reference.
    #[error("cannot delete a category that still has products")]
    CategoryInUse,

    /// Tried to update a category that does not exist
    #[error("tried to update a category that is not in the database")]
    UpdateMissingCategory,

    /// Tried to delete a category that does not exist
    #[error("tried to delete a category that is not in the database")]
    DeleteMissingCategory,

    /// Tried to update a product that does not exist
    #[error("tried to update a product that is not in the database")]
    UpdateMissingProduct,

    /// Tried to delete a product that does not exist
    #[error("tried to delete a product that is not in the database")]
    DeleteMissingProduct,

    /// The requested resource was not found.
    ///
    /// For HTTP request handlers, the client should check that the parameters
    /// (e.g., ID) are correct and that the resource has been created.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status_code = match self {
            Error::InvalidId
            | Error::EmptyCategoryName
            | Error::EmptyProductName
            | Error::InvalidPrice
            | Error::InvalidStock
            | Error::InvalidCategoryId => StatusCode::BAD_REQUEST,
            Error::CategoryNotFound
            | Error::UpdateMissingCategory
            | Error::DeleteMissingCategory
            | Error::UpdateMissingProduct
            | Error::DeleteMissingProduct
            | Error::NotFound => StatusCode::NOT_FOUND,
            Error::CategoryInUse => StatusCode::CONFLICT,
            Error::SqlError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // SQL error details stay in the server logs.
        let message = match self {
            Error::SqlError(_) => "an internal error occurred".to_string(),
            error => error.to_string(),
        };

        (status_code, Json(json!({ "error": message }))).into_response()
    }
}
