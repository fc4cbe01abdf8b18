pub mod core;
pub mod features;
pub mod modules;
pub mod shared;

use std::sync::Arc;

use axum::{http::StatusCode, routing::get, Json, Router};
use utoipa::Modify;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::core::config::SwaggerConfig;
use crate::core::openapi::{ApiDoc, SwaggerInfoModifier};
use crate::features::svgs::{routes as svgs_routes, SvgService};
use crate::shared::types::ApiResponse;

/// Assemble the application router: feature routes, health check, Swagger UI
/// and the not-found fallback. Layers (CORS, tracing, request ids) are
/// applied by the binary around this router.
pub fn app(svg_service: Arc<SvgService>, swagger: SwaggerConfig) -> Router {
    let swagger_modifier = SwaggerInfoModifier {
        title: swagger.title,
        version: swagger.version,
        description: swagger.description,
    };

    let mut openapi = ApiDoc::openapi();
    swagger_modifier.modify(&mut openapi);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .merge(svgs_routes::routes(svg_service))
        .route("/api/health", get(health_check))
        .fallback(route_not_found)
}

/// Liveness payload, mirroring the envelope used everywhere else
async fn health_check() -> Json<ApiResponse<serde_json::Value>> {
    Json(ApiResponse::success(
        Some(serde_json::json!({
            "timestamp": chrono::Utc::now().to_rfc3339(),
        })),
        Some("SVG Holder API is running".to_string()),
    ))
}

async fn route_not_found() -> (StatusCode, Json<ApiResponse<()>>) {
    (
        StatusCode::NOT_FOUND,
        Json(ApiResponse::<()>::error(
            Some("Route not found".to_string()),
            None,
        )),
    )
}
