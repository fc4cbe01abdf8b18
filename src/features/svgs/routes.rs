use axum::{extract::DefaultBodyLimit, routing::get, Router};
use std::sync::Arc;

use crate::features::svgs::dtos::MAX_SVG_SIZE;
use crate::features::svgs::handlers::{
    create_svg, delete_svg, get_svg, list_svgs, search_svgs, update_svg,
};
use crate::features::svgs::services::SvgService;

/// Create routes for the svgs feature
pub fn routes(svg_service: Arc<SvgService>) -> Router {
    Router::new()
        .route("/api/svgs", get(list_svgs).post(create_svg))
        .route("/api/svgs/search", get(search_svgs))
        .route(
            "/api/svgs/{id}",
            get(get_svg).put(update_svg).delete(delete_svg),
        )
        // Headroom above the cap so oversize uploads buffer far enough for
        // the validation rule to report them with the documented message
        .layer(DefaultBodyLimit::max(MAX_SVG_SIZE * 2))
        .with_state(svg_service)
}
