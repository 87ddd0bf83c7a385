//! Local image loading for multimodal requests
//!
//! Images are read from disk and embedded inline as base64 data URLs, which
//! every supported endpoint accepts in an `image_url` content part.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use mime_guess::mime::{self, Mime};
use tracing::debug;

use super::types::{ImageDetail, ImageUrl};
use crate::error::{InferenceError, InferenceResult};

/// Guess an image MIME type from the file extension
///
/// Returns `None` when the extension is unknown or maps to no `image/*` type.
pub fn mime_type_for_path(path: impl AsRef<Path>) -> Option<Mime> {
    mime_guess::from_path(path)
        .iter()
        .find(|guess| guess.type_() == mime::IMAGE)
}

/// Encode raw image bytes as a `data:` URL
pub fn data_url(bytes: &[u8], mime_type: &str) -> String {
    format!("data:{};base64,{}", mime_type, STANDARD.encode(bytes))
}

/// Read an image file and wrap it as an inline image reference
///
/// A missing file fails with [`InferenceError::FileNotFound`]; other read
/// failures surface as I/O errors.
pub fn load_image(path: &Path, mime_type: &str, detail: ImageDetail) -> InferenceResult<ImageUrl> {
    if !mime_type.starts_with("image/") {
        return Err(InferenceError::Validation(format!(
            "'{}' is not an image MIME type",
            mime_type
        )));
    }

    let bytes = read_image(path)?;

    debug!(path = %path.display(), bytes = bytes.len(), mime_type, "Loaded image");

    Ok(ImageUrl {
        url: data_url(&bytes, mime_type),
        detail: Some(detail),
    })
}

/// Read an image file and detect its MIME type from the extension
///
/// The file is read first, so a missing file is always reported as
/// [`InferenceError::FileNotFound`] whatever its extension.
pub fn load_image_file(path: &Path, detail: ImageDetail) -> InferenceResult<ImageUrl> {
    let bytes = read_image(path)?;
    let mime_type = mime_type_for_path(path).ok_or_else(|| {
        InferenceError::Validation(format!("cannot tell the image format of {}", path.display()))
    })?;

    debug!(path = %path.display(), bytes = bytes.len(), mime_type = %mime_type, "Loaded image");

    Ok(ImageUrl {
        url: data_url(&bytes, mime_type.essence_str()),
        detail: Some(detail),
    })
}

fn read_image(path: &Path) -> InferenceResult<Vec<u8>> {
    fs::read(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => InferenceError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => InferenceError::Io(e),
    })
}
