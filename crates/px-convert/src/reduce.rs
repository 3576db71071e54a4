use px_core::frame::{GrayFrame, PixelFrame};

/// Collapse each pixel to a single luminance sample.
///
/// Uses the frame's BT.709 integer weighting; deterministic and
/// side-effect-free. Output has the same dimensions as the input.
///
/// # Example
/// ```
/// use px_convert::reduce::grayscale;
/// use px_core::frame::PixelFrame;
/// let gray = grayscale(&PixelFrame::new(4, 3));
/// assert_eq!((gray.width, gray.height), (4, 3));
/// ```
#[must_use]
pub fn grayscale(frame: &PixelFrame) -> GrayFrame {
    let mut gray = GrayFrame::new(frame.width, frame.height);
    let mut i = 0usize;
    for y in 0..frame.height {
        for x in 0..frame.width {
            gray.data[i] = frame.luminance(x, y);
            i += 1;
        }
    }
    gray
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn white_frame_reduces_to_255() {
        let mut frame = PixelFrame::new(2, 2);
        frame.data.fill(255);
        let gray = grayscale(&frame);
        assert!(gray.data.iter().all(|&v| v == 255));
    }

    #[test]
    fn samples_are_row_major() {
        // Paint only the pixel at (1, 0) white.
        let mut frame = PixelFrame::new(2, 2);
        frame.data[4..8].copy_from_slice(&[255, 255, 255, 255]);
        let gray = grayscale(&frame);
        assert_eq!(gray.data, vec![0, 255, 0, 0]);
    }
}
