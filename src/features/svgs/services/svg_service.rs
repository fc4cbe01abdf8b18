use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::svgs::dtos::SvgRecordDto;
use crate::features::svgs::models::Svg;
use crate::features::svgs::validation::ValidatedUpload;

const SVG_NOT_FOUND: &str = "SVG not found";

/// Service for SVG record operations.
///
/// Owns the pool handle it is constructed with; there is no ambient
/// connection state anywhere in the crate.
pub struct SvgService {
    pool: PgPool,
}

impl SvgService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a validated upload as a new record.
    ///
    /// `created_at` and `updated_at` default from the same statement
    /// timestamp, so they are equal on a freshly created record.
    pub async fn create(&self, upload: ValidatedUpload) -> Result<SvgRecordDto> {
        let svg = sqlx::query_as::<_, Svg>(
            r#"
            INSERT INTO svgs (name, description, content, file_size, original_name)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, description, content, file_size, original_name, created_at, updated_at
            "#,
        )
        .bind(&upload.name)
        .bind(&upload.description)
        .bind(&upload.content)
        .bind(upload.file_size)
        .bind(&upload.original_name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create SVG: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!(
            "SVG created: id={}, name={}, size={}",
            svg.id,
            svg.name,
            svg.file_size
        );

        Ok(svg.into())
    }

    /// List every record, newest first. Re-evaluated on each call.
    pub async fn list(&self) -> Result<Vec<SvgRecordDto>> {
        let svgs = sqlx::query_as::<_, Svg>(
            r#"
            SELECT id, name, description, content, file_size, original_name, created_at, updated_at
            FROM svgs
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list SVGs: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(svgs.into_iter().map(|s| s.into()).collect())
    }

    /// Fetch one record by id. A string that is not a well-formed UUID is
    /// treated as not-found, never an error.
    pub async fn get(&self, id: &str) -> Result<SvgRecordDto> {
        let id = Self::parse_id(id)?;

        let svg = sqlx::query_as::<_, Svg>(
            r#"
            SELECT id, name, description, content, file_size, original_name, created_at, updated_at
            FROM svgs
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get SVG by id: {:?}", e);
            AppError::Database(e)
        })?;

        svg.map(|s| s.into())
            .ok_or_else(|| AppError::NotFound(SVG_NOT_FOUND.to_string()))
    }

    /// Update a record's name and description; `content`, `file_size` and
    /// `created_at` are never touched.
    pub async fn update(&self, id: &str, name: &str, description: &str) -> Result<SvgRecordDto> {
        let id = Self::parse_id(id)?;

        let svg = sqlx::query_as::<_, Svg>(
            r#"
            UPDATE svgs
            SET name = $2, description = $3, updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, description, content, file_size, original_name, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(description)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update SVG: {:?}", e);
            AppError::Database(e)
        })?;

        let svg = svg.ok_or_else(|| AppError::NotFound(SVG_NOT_FOUND.to_string()))?;

        tracing::info!("SVG updated: id={}, name={}", svg.id, svg.name);

        Ok(svg.into())
    }

    /// Hard-delete a record. Not-found when no row matched, so a second
    /// delete of the same id reports not-found rather than success.
    pub async fn delete(&self, id: &str) -> Result<()> {
        let id = Self::parse_id(id)?;

        let result = sqlx::query("DELETE FROM svgs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete SVG: {:?}", e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(SVG_NOT_FOUND.to_string()));
        }

        tracing::info!("SVG deleted: id={}", id);

        Ok(())
    }

    /// Case-insensitive substring search over name and description, newest
    /// first. The store does not special-case emptiness: the handler rejects
    /// an absent query, and a whitespace-only pattern simply matches per
    /// ILIKE semantics.
    pub async fn search(&self, query: &str) -> Result<Vec<SvgRecordDto>> {
        let pattern = like_pattern(query);

        let svgs = sqlx::query_as::<_, Svg>(
            r#"
            SELECT id, name, description, content, file_size, original_name, created_at, updated_at
            FROM svgs
            WHERE name ILIKE $1 OR description ILIKE $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(&pattern)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to search SVGs: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(svgs.into_iter().map(|s| s.into()).collect())
    }

    fn parse_id(id: &str) -> Result<Uuid> {
        Uuid::parse_str(id).map_err(|_| AppError::NotFound(SVG_NOT_FOUND.to_string()))
    }
}

/// Build an ILIKE pattern that matches the query as a literal substring:
/// backslash, percent and underscore are escaped before wrapping in `%`.
fn like_pattern(query: &str) -> String {
    let escaped = query
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn like_pattern_wraps_plain_queries() {
        assert_eq!(like_pattern("logo"), "%logo%");
        assert_eq!(like_pattern(""), "%%");
    }

    #[test]
    fn like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("100%"), "%100\\%%");
        assert_eq!(like_pattern("a_b"), "%a\\_b%");
        assert_eq!(like_pattern("back\\slash"), "%back\\\\slash%");
    }

    #[test]
    fn malformed_id_is_not_found() {
        let err = SvgService::parse_id("not-a-uuid").unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn well_formed_id_parses() {
        let id = SvgService::parse_id("6f2cbb50-1fb1-4cb5-9d22-8a0a1d4c1a2e").unwrap();
        assert_eq!(id.to_string(), "6f2cbb50-1fb1-4cb5-9d22-8a0a1d4c1a2e");
    }
}
