//! OpenAPI document and the Swagger UI that serves it.

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::{SwaggerUi, Url};

use crate::types::{Todo, TodoDto};

/// Name the document is published under.
pub const DOCUMENT_NAME: &str = "TodoAPI";

/// Where the JSON document is served, `/swagger/{documentName}/swagger.json`.
pub const DOCUMENT_PATH: &str = "/swagger/TodoAPI/swagger.json";

#[derive(OpenApi)]
#[openapi(
    info(title = "Todo API v1", version = "v1.0.0"),
    paths(
        crate::list_todos,
        crate::list_completed,
        crate::get_todo,
        crate::create_todo,
        crate::update_todo,
        crate::complete_todo,
        crate::delete_todo,
    ),
    components(schemas(Todo, TodoDto))
)]
pub struct ApiDoc;

/// Swagger UI at `/swagger`, backed by [`ApiDoc`].
pub fn swagger_ui() -> Router {
    SwaggerUi::new("/swagger")
        .url(Url::new(DOCUMENT_NAME, DOCUMENT_PATH), ApiDoc::openapi())
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_route() {
        let doc = ApiDoc::openapi();
        assert_eq!(doc.info.title, "Todo API v1");
        assert_eq!(doc.info.version, "v1.0.0");

        let mut paths: Vec<_> = doc.paths.paths.keys().cloned().collect();
        paths.sort();
        assert_eq!(
            paths,
            [
                "/todoitems",
                "/todoitems/complete",
                "/todoitems/complete/{title}",
                "/todoitems/{id}",
            ]
        );
    }

    #[test]
    fn document_path_carries_the_name() {
        assert!(DOCUMENT_PATH.contains(DOCUMENT_NAME));
    }

    #[test]
    fn schemas_use_wire_field_names() {
        let doc = ApiDoc::openapi();
        let json = serde_json::to_value(&doc).unwrap();
        let todo = &json["components"]["schemas"]["Todo"]["properties"];
        assert!(todo.get("isCompleted").is_some());
        assert!(todo.get("is_completed").is_none());
        assert!(json["components"]["schemas"]["TodoDto"].is_object());
    }
}
