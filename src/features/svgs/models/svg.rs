use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for a stored SVG upload.
///
/// `content` is the decoded upload text, stored verbatim and immutable after
/// creation; updates only touch `name`, `description` and `updated_at`.
#[derive(Debug, Clone, FromRow)]
pub struct Svg {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub content: String,
    pub file_size: i64,
    pub original_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
