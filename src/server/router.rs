//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their OpenAPI specifications
//! collected via utoipa, and Swagger UI serves the interactive
//! documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all advantage endpoints and
/// Swagger UI documentation.
///
/// # Registered Endpoints
/// - `POST /advantages` - Publish a new advantage offer
/// - `GET /advantages` - List every published advantage
/// - `GET /advantages/enterprise/{enterprise_id}` - List one enterprise's advantages
/// - `GET /advantages/student/{institution_id}` - List the advantages visible to a student
///
/// # Returns
/// An Axum `Router<AppState>` ready to be served once state is attached.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Vantage", description = "Vantage API"), tags(
        (name = controller::advantage::ADVANTAGE_TAG, description = "Advantage management API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            controller::advantage::create_advantage,
            controller::advantage::list_all_advantages
        ))
        .routes(routes!(controller::advantage::list_advantages_by_enterprise))
        .routes(routes!(controller::advantage::list_advantages_for_student))
        .split_for_parts();

    let routes = routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api));

    routes
}
