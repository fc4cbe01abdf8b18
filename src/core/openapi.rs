use utoipa::{Modify, OpenApi};

use crate::features::svgs::{dtos as svgs_dtos, handlers as svgs_handlers};
use crate::shared::types::ApiResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        svgs_handlers::list_svgs,
        svgs_handlers::search_svgs,
        svgs_handlers::get_svg,
        svgs_handlers::create_svg,
        svgs_handlers::update_svg,
        svgs_handlers::delete_svg,
    ),
    components(
        schemas(
            svgs_dtos::SvgRecordDto,
            svgs_dtos::UploadSvgDto,
            svgs_dtos::UpdateSvgDto,
            svgs_dtos::DeleteSvgResponseDto,
            ApiResponse<svgs_dtos::SvgRecordDto>,
            ApiResponse<Vec<svgs_dtos::SvgRecordDto>>,
            ApiResponse<svgs_dtos::DeleteSvgResponseDto>,
        )
    ),
    tags(
        (name = "svgs", description = "SVG upload, search and management")
    ),
    info(
        title = "SVG Holder API",
        version = "0.1.0",
        description = "API documentation for SVG Holder",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
