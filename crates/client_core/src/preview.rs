//! Image selection and the data-url preview shown before submitting.

use std::path::{Path, PathBuf};

use base64::{engine::general_purpose::STANDARD, Engine as _};
use tracing::debug;

use crate::error::{PreviewError, SubmitError};
use crate::payload::ImageAttachment;

const FALLBACK_MIME_TYPE: &str = "application/octet-stream";

/// A file the user picked for the event image. Bytes are read on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSelection {
    pub path: PathBuf,
    pub file_name: String,
    pub mime_type: String,
}

impl ImageSelection {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("image")
            .to_string();
        let mime_type = mime_guess::from_path(&path)
            .first_raw()
            .unwrap_or(FALLBACK_MIME_TYPE)
            .to_string();
        Self {
            path,
            file_name,
            mime_type,
        }
    }

    pub fn is_image_mime(&self) -> bool {
        self.mime_type.starts_with("image/")
    }

    pub async fn read(&self) -> Result<ImageAttachment, SubmitError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| SubmitError::ReadImage {
                path: self.path.clone(),
                source,
            })?;
        Ok(ImageAttachment {
            file_name: self.file_name.clone(),
            mime_type: self.mime_type.clone(),
            bytes,
        })
    }
}

/// Reads the selected file and returns it as a `data:` url.
pub async fn load_preview(selection: &ImageSelection) -> Result<String, PreviewError> {
    let bytes = read_file(&selection.path).await?;
    debug!(
        file_name = %selection.file_name,
        size_bytes = bytes.len(),
        "preview: encoded image"
    );
    Ok(encode_data_url(&selection.mime_type, &bytes))
}

async fn read_file(path: &Path) -> Result<Vec<u8>, PreviewError> {
    tokio::fs::read(path)
        .await
        .map_err(|source| PreviewError::ReadFile {
            path: path.to_path_buf(),
            source,
        })
}

pub fn encode_data_url(mime_type: &str, bytes: &[u8]) -> String {
    format!("data:{mime_type};base64,{}", STANDARD.encode(bytes))
}

/// Splits a base64 `data:` url into its mime type and decoded bytes.
pub fn decode_data_url(data_url: &str) -> Result<(String, Vec<u8>), PreviewError> {
    let rest = data_url
        .strip_prefix("data:")
        .ok_or(PreviewError::NotDataUrl)?;
    let (meta, payload) = rest.split_once(',').ok_or(PreviewError::NotDataUrl)?;
    let mime_type = meta
        .strip_suffix(";base64")
        .ok_or(PreviewError::NotDataUrl)?;
    let bytes = STANDARD.decode(payload)?;
    Ok((mime_type.to_string(), bytes))
}

#[cfg(test)]
#[path = "tests/preview_tests.rs"]
mod tests;
