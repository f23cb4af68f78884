//! Filesystem-backed image loading for attachments.

use std::fs;
use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use image::{GenericImageView, ImageFormat};

use crate::domain::message::Attachment;
use crate::usecases::ingest_attachments::{ImageSource, IngestError};

/// Loads images from disk and embeds them as base64 data URLs, so a message
/// never references a path that could move or disappear after sending.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileImageSource;

impl ImageSource for FileImageSource {
    fn load_image(&self, path: &Path) -> Result<Attachment, IngestError> {
        let bytes = fs::read(path).map_err(|e| IngestError::Read(e.to_string()))?;

        let format =
            image::guess_format(&bytes).map_err(|e| IngestError::Decode(e.to_string()))?;
        let decoded =
            image::load_from_memory(&bytes).map_err(|e| IngestError::Decode(e.to_string()))?;
        let (width, height) = decoded.dimensions();

        let url = format!("data:{};base64,{}", mime_type(format), STANDARD.encode(&bytes));
        Ok(Attachment::image(url, Some(width), Some(height)))
    }
}

fn mime_type(format: ImageFormat) -> &'static str {
    match format {
        ImageFormat::Png => "image/png",
        ImageFormat::Jpeg => "image/jpeg",
        ImageFormat::Gif => "image/gif",
        ImageFormat::WebP => "image/webp",
        ImageFormat::Bmp => "image/bmp",
        _ => "application/octet-stream",
    }
}
