//! HTTP API for the todo list.
//!
//! # Overview
//! A REST surface over a [`TodoStore`]: list, list completed, get, create,
//! update, complete by title and delete. Handlers copy fields between the
//! JSON payload and the store and do nothing else.
//!
//! # Design
//! - The router holds an `Arc<dyn TodoStore>`, so the in-memory store can be
//!   swapped for a durable one without touching the handlers.
//! - Not-found is rendered by [`ApiError`]; everything else uses axum's
//!   default rejections.
//! - Confirmation bodies are plain text; items are JSON.
//! - With `--openapi` the document is served at
//!   `/swagger/TodoAPI/swagger.json` next to a Swagger UI at `/swagger`.

pub mod config;
pub mod error;
pub mod openapi;
pub mod store;
pub mod types;

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, put},
    Json, Router,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

pub use config::Config;
pub use error::{ApiError, ConfigError};
pub use openapi::ApiDoc;
pub use store::{InMemoryStore, StoreError, TodoStore};
pub use types::{Todo, TodoDto};

pub type SharedStore = Arc<dyn TodoStore>;

/// Router over a fresh in-memory store, without CORS or request tracing.
pub fn app() -> Router {
    router(Arc::new(InMemoryStore::new()))
}

pub fn router(store: SharedStore) -> Router {
    Router::new()
        .route("/todoitems", get(list_todos).post(create_todo))
        .route("/todoitems/complete", get(list_completed))
        .route("/todoitems/complete/{title}", put(complete_todo))
        .route(
            "/todoitems/{id}",
            get(get_todo).put(update_todo).delete(delete_todo),
        )
        .with_state(store)
}

/// Full application for `config`: routes, the optional Swagger UI, CORS for
/// the allowed origins and per-request tracing.
pub fn app_with_config(config: &Config, store: SharedStore) -> Result<Router, ConfigError> {
    let mut app = router(store);
    if config.openapi {
        app = app.merge(openapi::swagger_ui());
    }
    Ok(app
        .layer(config.cors_layer()?)
        .layer(TraceLayer::new_for_http()))
}

/// Serve a fresh in-memory app on `listener` until the process exits.
pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Serve `app` on `listener`, stopping cleanly on Ctrl-C.
pub async fn serve(listener: TcpListener, app: Router) -> Result<(), std::io::Error> {
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}

#[utoipa::path(
    get,
    path = "/todoitems",
    responses((status = 200, description = "Every item in insertion order", body = [Todo]))
)]
async fn list_todos(State(store): State<SharedStore>) -> Json<Vec<Todo>> {
    Json(store.list())
}

#[utoipa::path(
    get,
    path = "/todoitems/complete",
    responses((status = 200, description = "Completed items", body = [Todo]))
)]
async fn list_completed(State(store): State<SharedStore>) -> Json<Vec<Todo>> {
    Json(store.list_completed())
}

#[utoipa::path(
    get,
    path = "/todoitems/{id}",
    params(("id" = Uuid, Path, description = "Item id")),
    responses(
        (status = 200, description = "The item", body = Todo),
        (status = 404, description = "No such item", body = String, content_type = "text/plain"),
    )
)]
async fn get_todo(
    State(store): State<SharedStore>,
    Path(id): Path<Uuid>,
) -> Result<Json<Todo>, ApiError> {
    let todo = store.get(id).inspect_err(|_| {
        tracing::debug!(%id, "todo item not found");
    })?;
    Ok(Json(todo))
}

#[utoipa::path(
    post,
    path = "/todoitems",
    request_body = TodoDto,
    responses((
        status = 201,
        description = "Created item",
        body = Todo,
        headers(("location" = String, description = "Path of the new item")),
    ))
)]
async fn create_todo(
    State(store): State<SharedStore>,
    Json(input): Json<TodoDto>,
) -> impl IntoResponse {
    let todo = store.create(input);
    tracing::info!(id = %todo.id, "created todo item");
    let location = format!("/todoitems/{}", todo.id);
    (StatusCode::CREATED, [(header::LOCATION, location)], Json(todo))
}

#[utoipa::path(
    put,
    path = "/todoitems/{id}",
    params(("id" = Uuid, Path, description = "Item id")),
    request_body = TodoDto,
    responses(
        (status = 200, description = "Replaced title and flag", body = String, content_type = "text/plain"),
        (status = 404, description = "No such item", body = String, content_type = "text/plain"),
    )
)]
async fn update_todo(
    State(store): State<SharedStore>,
    Path(id): Path<Uuid>,
    Json(input): Json<TodoDto>,
) -> Result<&'static str, ApiError> {
    store.update(id, input).inspect_err(|_| {
        tracing::debug!(%id, "update of missing todo item");
    })?;
    tracing::info!(%id, "updated todo item");
    Ok("Updated Todo.")
}

#[utoipa::path(
    put,
    path = "/todoitems/complete/{title}",
    params(("title" = String, Path, description = "Exact title to match")),
    responses(
        (status = 200, description = "First match marked completed", body = String, content_type = "text/plain"),
        (status = 404, description = "No such item", body = String, content_type = "text/plain"),
    )
)]
async fn complete_todo(
    State(store): State<SharedStore>,
    Path(title): Path<String>,
) -> Result<String, ApiError> {
    let todo = store.complete_by_title(&title).inspect_err(|_| {
        tracing::debug!(%title, "no todo item with title");
    })?;
    tracing::info!(id = %todo.id, %title, "completed todo item");
    Ok(format!("Completed Todo - {title}"))
}

#[utoipa::path(
    delete,
    path = "/todoitems/{id}",
    params(("id" = Uuid, Path, description = "Item id")),
    responses(
        (status = 200, description = "Item removed", body = String, content_type = "text/plain"),
        (status = 404, description = "No such item", body = String, content_type = "text/plain"),
    )
)]
async fn delete_todo(
    State(store): State<SharedStore>,
    Path(id): Path<Uuid>,
) -> Result<&'static str, ApiError> {
    store.delete(id).inspect_err(|_| {
        tracing::debug!(%id, "delete of missing todo item");
    })?;
    tracing::info!(%id, "deleted todo item");
    Ok("Todo Item deleted.")
}
