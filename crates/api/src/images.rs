// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Conversion of uploaded image bytes into self-contained `data:` URLs.
//!
//! Images are stored inline in the configuration and inquiry documents, so
//! there is no separate blob store to keep in sync.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use std::path::Path;

use crate::error::ApiError;

/// Encodes raw image bytes as a `data:<mime>;base64,<payload>` URL.
///
/// # Errors
///
/// Returns `InvalidInput` if the mime type is not an image type or the
/// payload is empty.
pub fn encode_inline_image(mime: &str, bytes: &[u8]) -> Result<String, ApiError> {
    if !mime.starts_with("image/") {
        return Err(ApiError::InvalidInput {
            field: String::from("image"),
            message: format!("Unsupported content type '{mime}'"),
        });
    }
    if bytes.is_empty() {
        return Err(ApiError::InvalidInput {
            field: String::from("image"),
            message: String::from("Image is empty"),
        });
    }
    Ok(format!("data:{mime};base64,{}", STANDARD.encode(bytes)))
}

/// Reads an image file and encodes it inline, guessing the mime type from
/// the file extension.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - The extension does not map to an image type
pub fn encode_image_file(path: &Path) -> Result<String, ApiError> {
    let mime = mime_guess::from_path(path).first_or_octet_stream();
    let bytes: Vec<u8> = std::fs::read(path).map_err(|e| ApiError::InvalidInput {
        field: String::from("image"),
        message: format!("Failed to read '{}': {e}", path.display()),
    })?;
    encode_inline_image(mime.essence_str(), &bytes)
}
