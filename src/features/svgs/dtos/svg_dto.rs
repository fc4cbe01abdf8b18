use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::features::svgs::models::Svg;
use crate::features::svgs::validation::non_blank;

/// Maximum accepted upload size in bytes (5MB)
pub const MAX_SVG_SIZE: usize = 5 * 1024 * 1024;

/// Wire representation of a stored SVG record.
///
/// Field names are camelCase on the wire; this struct doubles as the typed
/// model the gallery client parses responses into.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SvgRecordDto {
    /// Unique identifier assigned by the store at creation
    pub id: Uuid,
    pub name: String,
    pub description: String,
    /// Verbatim SVG markup as uploaded
    pub content: String,
    /// Size of the original upload in bytes
    pub file_size: i64,
    /// Filename at upload time
    pub original_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Svg> for SvgRecordDto {
    fn from(svg: Svg) -> Self {
        Self {
            id: svg.id,
            name: svg.name,
            description: svg.description,
            content: svg.content,
            file_size: svg.file_size,
            original_name: svg.original_name,
            created_at: svg.created_at,
            updated_at: svg.updated_at,
        }
    }
}

/// Upload request DTO for OpenAPI documentation
/// Note: This struct is for Swagger UI documentation only.
/// The actual handler uses axum's Multipart extractor directly.
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct UploadSvgDto {
    /// Display name for the SVG
    #[schema(example = "Logo")]
    pub name: String,
    /// What the SVG depicts
    #[schema(example = "Company logo, dark variant")]
    pub description: String,
    /// The SVG file to upload
    #[schema(format = Binary, content_media_type = "application/octet-stream")]
    pub svg_file: String,
}

/// Request body for updating a record's name and description.
/// Missing fields deserialize to empty strings so that the blank check
/// produces the documented validation message instead of a decode error.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateSvgDto {
    #[serde(default)]
    #[validate(custom(function = non_blank))]
    pub name: String,
    #[serde(default)]
    #[validate(custom(function = non_blank))]
    pub description: String,
}

/// Query params for searching records
#[derive(Debug, Deserialize, IntoParams)]
pub struct SearchSvgsQuery {
    /// Substring to match against name or description (case-insensitive)
    pub q: Option<String>,
}

/// Response DTO for delete operations
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteSvgResponseDto {
    /// Confirmation that the record was deleted
    pub deleted: bool,
}
