pub mod api;
pub mod diagnose;

use std::io::Read;

use tiny_http::Request;

use leafmedic::decode::MAX_IMAGE_SIZE;
use leafmedic::ImageError;

use crate::util::multipart::{extract_boundary, file_field, parse_parts, text_field};

/// Form field carrying the leaf photo.
pub const IMAGE_FIELD: &str = "leaf_image";
/// Optional form field with the requested top-K.
pub const TOP_K_FIELD: &str = "top_k";

/// Leaves room for multipart framing around a maximum-size image.
const MAX_BODY_BYTES: usize = MAX_IMAGE_SIZE + 64 * 1024;

/// The fields of an upload form.
pub struct Upload {
    pub image: Vec<u8>,
    pub top_k: Option<usize>,
}

/// Reads a multipart upload from `request`. Errors are user-facing messages.
pub fn read_upload(request: &mut Request) -> Result<Upload, String> {
    let content_type = request.headers().iter()
        .find(|h| h.field.equiv("Content-Type"))
        .map(|h| h.value.as_str().to_owned())
        .unwrap_or_default();

    if !content_type.starts_with("multipart/form-data") {
        return Err("Expected a multipart/form-data upload.".to_owned());
    }
    let boundary = extract_boundary(&content_type)
        .ok_or_else(|| "Invalid multipart request.".to_owned())?;

    let declared = request.body_length();
    let body = read_body(request.as_reader(), declared, MAX_BODY_BYTES)?;

    let parts = parse_parts(&body, &boundary);
    let image = match file_field(&parts, IMAGE_FIELD) {
        Some(bytes) if !bytes.is_empty() => bytes.to_vec(),
        _ => return Err("No image file was uploaded.".to_owned()),
    };
    let top_k = text_field(&parts, TOP_K_FIELD).and_then(|v| v.trim().parse().ok());

    Ok(Upload { image, top_k })
}

/// Reads at most `limit` bytes of request body. A declared or actual length
/// above `limit` is reported as too large instead of being truncated.
fn read_body(reader: impl Read, declared: Option<usize>, limit: usize) -> Result<Vec<u8>, String> {
    if let Some(len) = declared.filter(|&len| len > limit) {
        return Err(ImageError::TooLarge(len, MAX_IMAGE_SIZE).to_string());
    }
    let mut body: Vec<u8> = Vec::new();
    reader.take(limit as u64 + 1)
        .read_to_end(&mut body)
        .map_err(|e| format!("Could not read upload: {}", e))?;
    if body.len() > limit {
        return Err(ImageError::TooLarge(body.len(), MAX_IMAGE_SIZE).to_string());
    }
    Ok(body)
}
