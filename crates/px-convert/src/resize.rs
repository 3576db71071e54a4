use fast_image_resize::images::Image;
use fast_image_resize::{PixelType, ResizeOptions, Resizer as FirResizer};
use px_core::error::ConvertError;
use px_core::frame::GrayFrame;

/// Aspect-corrected target height for `new_width` output characters.
///
/// `floor(H / W · new_width · cell_aspect)`, clamped to at least 1.
/// `cell_aspect` (0.55 by default) compensates for glyph cells being
/// taller than wide in typical monospace rendering; the exact value must
/// be preserved for output parity.
///
/// # Example
/// ```
/// use px_convert::resize::target_height;
/// assert_eq!(target_height(200, 100, 100, 0.55), 27);
/// assert_eq!(target_height(100, 1, 1, 0.55), 1); // clamps, never 0
/// ```
#[must_use]
pub fn target_height(width: u32, height: u32, new_width: u32, cell_aspect: f64) -> u32 {
    let aspect_ratio = f64::from(height) / f64::from(width);
    let new_height = (aspect_ratio * f64::from(new_width) * cell_aspect) as u32;
    new_height.max(1)
}

/// Reusable resampler wrapping fast_image_resize for single-channel
/// frames.
///
/// # Example
/// ```
/// use px_convert::resize::Resizer;
/// use px_core::frame::GrayFrame;
/// let mut resizer = Resizer::new();
/// let out = resizer.resize(&GrayFrame::new(100, 100), 50, 25).unwrap();
/// assert_eq!((out.width, out.height), (50, 25));
/// ```
pub struct Resizer {
    inner: FirResizer,
    options: ResizeOptions,
}

impl Resizer {
    /// Create a new resampler with the default convolution filter.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: FirResizer::new(),
            options: ResizeOptions::new(),
        }
    }

    /// Resample `src` to exactly `new_width × new_height`.
    ///
    /// # Errors
    /// Returns [`ConvertError::Internal`] if the wrapped resizer rejects
    /// a buffer; this does not occur for frames built by this crate.
    pub fn resize(
        &mut self,
        src: &GrayFrame,
        new_width: u32,
        new_height: u32,
    ) -> Result<GrayFrame, ConvertError> {
        if src.width == new_width && src.height == new_height {
            return Ok(GrayFrame {
                data: src.data.clone(),
                width: src.width,
                height: src.height,
            });
        }

        // fast_image_resize wants &mut on the source slice, so copy.
        let mut src_buf = src.data.clone();
        let src_image = Image::from_slice_u8(src.width, src.height, &mut src_buf, PixelType::U8)
            .map_err(|e| ConvertError::Internal(format!("source buffer: {e}")))?;

        let mut dst = GrayFrame::new(new_width, new_height);
        let mut dst_image =
            Image::from_slice_u8(new_width, new_height, &mut dst.data, PixelType::U8)
                .map_err(|e| ConvertError::Internal(format!("destination buffer: {e}")))?;

        self.inner
            .resize(&src_image, &mut dst_image, Some(&self.options))
            .map_err(|e| ConvertError::Internal(format!("resample: {e}")))?;

        Ok(dst)
    }
}

impl Default for Resizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_height_matches_truncating_formula() {
        // 200×100 at width 100: 0.5 * 100 * 0.55 = 27.5 → 27
        assert_eq!(target_height(200, 100, 100, 0.55), 27);
        // Square image, width 80: 80 * 0.55 = 44
        assert_eq!(target_height(64, 64, 80, 0.55), 44);
    }

    #[test]
    fn target_height_clamps_to_one() {
        assert_eq!(target_height(1000, 1, 10, 0.55), 1);
        assert_eq!(target_height(100, 100, 1, 0.55), 1);
    }

    #[test]
    fn resize_produces_requested_dimensions() {
        let mut resizer = Resizer::new();
        let out = resizer.resize(&GrayFrame::new(64, 64), 10, 5).unwrap();
        assert_eq!((out.width, out.height), (10, 5));
        assert_eq!(out.data.len(), 50);
    }

    #[test]
    fn same_size_is_a_copy() {
        let mut src = GrayFrame::new(4, 4);
        src.data[5] = 200;
        let out = Resizer::new().resize(&src, 4, 4).unwrap();
        assert_eq!(out.data, src.data);
    }

    #[test]
    fn uniform_frame_stays_uniform() {
        let mut src = GrayFrame::new(32, 32);
        src.data.fill(255);
        let out = Resizer::new().resize(&src, 8, 4).unwrap();
        assert!(out.data.iter().all(|&v| v == 255));
    }
}
