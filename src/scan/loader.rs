/// Uploaded scan loader
///
/// Reads a user-picked PNG/JPEG from disk and decodes it off the UI
/// thread. The original encoded bytes are kept for display (iced decodes
/// them itself); the decode here validates the file and gives us the
/// pixel dimensions.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::task;

/// Errors from loading an uploaded scan
#[derive(Error, Debug, Clone)]
pub enum LoadError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("Failed to read {path}: {reason}")]
    Unreadable { path: PathBuf, reason: String },
    #[error("Not a valid image ({path}): {reason}")]
    Decode { path: PathBuf, reason: String },
    #[error("Task join error: {0}")]
    Task(String),
}

/// A decoded upload ready for preview and analysis
#[derive(Debug, Clone)]
pub struct ScanImage {
    /// Filename only (e.g., "chest_xray_001.png")
    pub filename: String,
    /// Pixel dimensions of the decoded image
    pub width: u32,
    pub height: u32,
    /// Display handle over the original encoded bytes
    pub handle: iced::widget::image::Handle,
}

impl ScanImage {
    /// Build a ScanImage from already-validated parts
    pub fn from_decoded(filename: String, width: u32, height: u32, bytes: Vec<u8>) -> Self {
        Self {
            filename,
            width,
            height,
            handle: iced::widget::image::Handle::from_bytes(bytes),
        }
    }
}

/// Load and decode an uploaded scan image
///
/// Spawn blocking because file IO and image decoding are CPU-bound.
pub async fn load_scan_image(path: PathBuf) -> Result<ScanImage, LoadError> {
    task::spawn_blocking(move || load_scan_image_blocking(&path))
        .await
        .map_err(|e| LoadError::Task(e.to_string()))?
}

/// Blocking implementation of scan loading
fn load_scan_image_blocking(path: &Path) -> Result<ScanImage, LoadError> {
    if !path.exists() {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }

    let bytes = std::fs::read(path).map_err(|e| LoadError::Unreadable {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    // Validate the upload and grab its dimensions
    let decoded = image::load_from_memory(&bytes).map_err(|e| LoadError::Decode {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let filename = path
        .file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();

    println!(
        "🩻 Loaded scan: {} ({}x{})",
        filename,
        decoded.width(),
        decoded.height()
    );

    Ok(ScanImage::from_decoded(
        filename,
        decoded.width(),
        decoded.height(),
        bytes,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, RgbaImage};
    use std::io::Cursor;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("mediscan-loader-{}-{}", std::process::id(), name))
    }

    fn encoded_png(width: u32, height: u32) -> Vec<u8> {
        let img = RgbaImage::new(width, height);
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[tokio::test]
    async fn test_missing_file_errors() {
        let result = load_scan_image(PathBuf::from("/nonexistent/xray.png")).await;
        assert!(matches!(result, Err(LoadError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_valid_png_loads_with_dimensions() {
        let path = temp_path("valid.png");
        std::fs::write(&path, encoded_png(32, 24)).unwrap();

        let scan = load_scan_image(path.clone()).await.unwrap();
        assert_eq!(scan.width, 32);
        assert_eq!(scan.height, 24);
        assert!(scan.filename.ends_with("valid.png"));

        let _ = std::fs::remove_file(path);
    }

    #[tokio::test]
    async fn test_non_image_file_errors() {
        let path = temp_path("not-an-image.png");
        std::fs::write(&path, b"definitely not pixels").unwrap();

        let result = load_scan_image(path.clone()).await;
        assert!(matches!(result, Err(LoadError::Decode { .. })));

        let _ = std::fs::remove_file(path);
    }
}
