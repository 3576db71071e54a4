/// ASCII conversion engine for pixscii.
///
/// Three stages, always run in sequence: grayscale reduction,
/// aspect-corrected resampling, luminance-to-glyph mapping. The pipeline
/// is synchronous and stateless per call; concurrent callers need no
/// coordination as long as each call owns its frame.

pub mod mapper;
pub mod reduce;
pub mod resize;
pub mod source;

use px_core::error::ConvertError;
use px_core::frame::{AsciiArt, PixelFrame};
use px_core::palette::{GlyphLut, Palette};

pub use source::{decode_bytes, load_image};

/// Convert a decoded frame into ASCII art of `width` characters per line.
///
/// Line count follows `floor(H / W · width · cell_aspect)`, clamped to at
/// least 1 (see [`resize::target_height`]).
///
/// # Errors
/// [`ConvertError::InvalidWidth`] if `width` is 0;
/// [`ConvertError::Decode`] if the frame holds no pixels. All later
/// stages are total.
///
/// # Example
/// ```
/// use px_convert::convert;
/// use px_core::frame::PixelFrame;
/// use px_core::palette::Palette;
/// let frame = PixelFrame::new(200, 100);
/// let art = convert(&frame, 100, &Palette::classic(), 0.55).unwrap();
/// assert_eq!(art.line_count(), 27);
/// ```
pub fn convert(
    frame: &PixelFrame,
    width: u32,
    palette: &Palette,
    cell_aspect: f64,
) -> Result<AsciiArt, ConvertError> {
    if width == 0 {
        return Err(ConvertError::InvalidWidth { width });
    }
    if frame.width == 0 || frame.height == 0 {
        return Err(ConvertError::Decode("image has no pixels".to_string()));
    }

    let new_height = resize::target_height(frame.width, frame.height, width, cell_aspect);
    log::debug!(
        "converting {}x{} -> {width}x{new_height} ({} glyphs)",
        frame.width,
        frame.height,
        palette.len()
    );

    let gray = reduce::grayscale(frame);
    let resized = resize::Resizer::new().resize(&gray, width, new_height)?;
    let lut = GlyphLut::new(palette);
    Ok(mapper::map_glyphs(&resized, &lut))
}
