pub mod todo;

use crate::{doc::ApiDoc, state::AppState};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Builds the full application router
pub fn app(state: AppState) -> Router {
    Router::new()
        .nest(todo::TODO_ROOT, todo::router())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(ServiceBuilder::new().layer(CompressionLayer::new()))
        .with_state(state)
}
