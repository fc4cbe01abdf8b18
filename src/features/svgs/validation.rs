//! Upload and update validation for SVG records.
//!
//! Rules run in a fixed order and the first failure wins; nothing is written
//! to the store unless every rule passes.

use validator::ValidationError;

use crate::core::error::{AppError, Result};
use crate::features::svgs::dtos::MAX_SVG_SIZE;

pub const MSG_UPLOAD_FIELDS_REQUIRED: &str = "Name, description, and SVG file are required";
pub const MSG_UPDATE_FIELDS_REQUIRED: &str = "Name and description are required";
pub const MSG_ONLY_SVG_ALLOWED: &str = "Only SVG files are allowed";
pub const MSG_FILE_TOO_LARGE: &str = "File size too large. Maximum size is 5MB.";
pub const MSG_INVALID_SVG_CONTENT: &str = "Invalid SVG file content";

/// Raw file part of a multipart upload, buffered in memory.
#[derive(Debug)]
pub struct UploadFile {
    pub data: Vec<u8>,
    pub content_type: String,
    pub original_name: String,
}

/// Outcome of a successful upload validation: the exact values the record is
/// built from (trimmed fields, decoded content, original byte size).
#[derive(Debug)]
pub struct ValidatedUpload {
    pub name: String,
    pub description: String,
    pub content: String,
    pub file_size: i64,
    pub original_name: String,
}

/// A file is acceptable when its declared media type is SVG or its filename
/// ends in `.svg` (case-insensitive).
pub fn is_svg_upload(content_type: &str, original_name: &str) -> bool {
    content_type == "image/svg+xml" || original_name.to_lowercase().ends_with(".svg")
}

pub fn validate_upload(
    name: Option<&str>,
    description: Option<&str>,
    file: Option<UploadFile>,
) -> Result<ValidatedUpload> {
    let name = name
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::Validation(MSG_UPLOAD_FIELDS_REQUIRED.to_string()))?;

    let description = description
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::Validation(MSG_UPLOAD_FIELDS_REQUIRED.to_string()))?;

    let file =
        file.ok_or_else(|| AppError::Validation(MSG_UPLOAD_FIELDS_REQUIRED.to_string()))?;

    if !is_svg_upload(&file.content_type, &file.original_name) {
        return Err(AppError::Validation(MSG_ONLY_SVG_ALLOWED.to_string()));
    }

    if file.data.len() > MAX_SVG_SIZE {
        return Err(AppError::Validation(MSG_FILE_TOO_LARGE.to_string()));
    }

    let content = String::from_utf8_lossy(&file.data).into_owned();
    if !content.contains("<svg") {
        return Err(AppError::Validation(MSG_INVALID_SVG_CONTENT.to_string()));
    }

    Ok(ValidatedUpload {
        name: name.to_string(),
        description: description.to_string(),
        content,
        file_size: file.data.len() as i64,
        original_name: file.original_name,
    })
}

/// Custom rule for `validator` derive: non-empty after trimming whitespace.
pub fn non_blank(value: &str) -> std::result::Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("non_blank"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn svg_file(data: &[u8]) -> UploadFile {
        UploadFile {
            data: data.to_vec(),
            content_type: "image/svg+xml".to_string(),
            original_name: "icon.svg".to_string(),
        }
    }

    fn validation_message(err: AppError) -> String {
        match err {
            AppError::Validation(msg) => msg,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn accepts_valid_upload_and_trims_fields() {
        let validated = validate_upload(
            Some("  Logo  "),
            Some(" A logo "),
            Some(svg_file(b"<svg width=\"10\"></svg>")),
        )
        .unwrap();

        assert_eq!(validated.name, "Logo");
        assert_eq!(validated.description, "A logo");
        assert_eq!(validated.content, "<svg width=\"10\"></svg>");
        assert_eq!(validated.file_size, 22);
        assert_eq!(validated.original_name, "icon.svg");
    }

    #[test]
    fn missing_name_wins_over_bad_file() {
        // first failure wins: the name check fires before the file type check
        let err = validate_upload(
            None,
            Some("desc"),
            Some(UploadFile {
                data: b"plain text".to_vec(),
                content_type: "text/plain".to_string(),
                original_name: "notes.txt".to_string(),
            }),
        )
        .unwrap_err();
        assert_eq!(validation_message(err), MSG_UPLOAD_FIELDS_REQUIRED);
    }

    #[test]
    fn whitespace_only_description_is_rejected() {
        let err = validate_upload(Some("Logo"), Some("   "), Some(svg_file(b"<svg/>")))
            .unwrap_err();
        assert_eq!(validation_message(err), MSG_UPLOAD_FIELDS_REQUIRED);
    }

    #[test]
    fn missing_file_is_rejected() {
        let err = validate_upload(Some("Logo"), Some("A logo"), None).unwrap_err();
        assert_eq!(validation_message(err), MSG_UPLOAD_FIELDS_REQUIRED);
    }

    #[test]
    fn wrong_type_and_extension_is_rejected() {
        let err = validate_upload(
            Some("Logo"),
            Some("A logo"),
            Some(UploadFile {
                data: b"<svg/>".to_vec(),
                content_type: "text/plain".to_string(),
                original_name: "logo.txt".to_string(),
            }),
        )
        .unwrap_err();
        assert_eq!(validation_message(err), MSG_ONLY_SVG_ALLOWED);
    }

    #[test]
    fn svg_extension_alone_is_enough() {
        // declared type is wrong but the filename ends in .SVG
        let validated = validate_upload(
            Some("Logo"),
            Some("A logo"),
            Some(UploadFile {
                data: b"<svg/>".to_vec(),
                content_type: "application/octet-stream".to_string(),
                original_name: "LOGO.SVG".to_string(),
            }),
        )
        .unwrap();
        assert_eq!(validated.original_name, "LOGO.SVG");
    }

    #[test]
    fn oversized_file_is_rejected() {
        let mut data = vec![b' '; 6 * 1024 * 1024];
        data.splice(0..0, b"<svg>".iter().copied());
        let err = validate_upload(Some("Logo"), Some("A logo"), Some(svg_file(&data)))
            .unwrap_err();
        assert_eq!(validation_message(err), MSG_FILE_TOO_LARGE);
    }

    #[test]
    fn content_without_svg_tag_is_rejected() {
        let err = validate_upload(
            Some("Logo"),
            Some("A logo"),
            Some(svg_file(b"<html>not svg</html>")),
        )
        .unwrap_err();
        assert_eq!(validation_message(err), MSG_INVALID_SVG_CONTENT);
    }

    #[test]
    fn size_check_runs_before_content_check() {
        // 6 MiB of non-SVG bytes must report the size message, not the content one
        let data = vec![b'x'; 6 * 1024 * 1024];
        let err = validate_upload(Some("Logo"), Some("A logo"), Some(svg_file(&data)))
            .unwrap_err();
        assert_eq!(validation_message(err), MSG_FILE_TOO_LARGE);
    }

    #[test]
    fn is_svg_upload_cases() {
        assert!(is_svg_upload("image/svg+xml", "anything.bin"));
        assert!(is_svg_upload("application/octet-stream", "shape.svg"));
        assert!(is_svg_upload("text/plain", "SHAPE.Svg"));
        assert!(!is_svg_upload("text/plain", "shape.txt"));
    }

    #[test]
    fn non_blank_rejects_whitespace() {
        assert!(non_blank("Logo").is_ok());
        assert!(non_blank(" x ").is_ok());
        assert!(non_blank("").is_err());
        assert!(non_blank("   ").is_err());
    }
}
