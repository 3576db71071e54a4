use std::path::Path;

use px_core::error::ConvertError;
use px_core::frame::PixelFrame;

/// Load and decode an image from disk.
///
/// # Errors
/// Returns [`ConvertError::Decode`] if the file cannot be read or is not
/// a supported image format.
///
/// # Example
/// ```no_run
/// use px_convert::source::load_image;
/// use std::path::Path;
/// let frame = load_image(Path::new("photo.png")).unwrap();
/// ```
pub fn load_image(path: &Path) -> Result<PixelFrame, ConvertError> {
    let img = image::open(path)
        .map_err(|e| ConvertError::Decode(format!("{}: {e}", path.display())))?;
    Ok(frame_from(&img))
}

/// Decode an in-memory byte stream (e.g. a network upload).
///
/// # Errors
/// Returns [`ConvertError::Decode`] if the bytes are not a supported
/// image format.
pub fn decode_bytes(bytes: &[u8]) -> Result<PixelFrame, ConvertError> {
    let img =
        image::load_from_memory(bytes).map_err(|e| ConvertError::Decode(e.to_string()))?;
    Ok(frame_from(&img))
}

fn frame_from(img: &image::DynamicImage) -> PixelFrame {
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    PixelFrame::from_rgba(width, height, rgba.into_raw())
}
