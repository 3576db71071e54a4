use std::fmt;

fn rgba_len(width: u32, height: u32) -> usize {
    width as usize * height as usize * 4
}

fn gray_len(width: u32, height: u32) -> usize {
    width as usize * height as usize
}

/// Decoded RGBA pixel buffer, row-major, 4 bytes per pixel.
///
/// Read-only input of the conversion pipeline. The converter only needs
/// `width`, `height`, and per-pixel luminance access.
///
/// # Example
/// ```
/// use px_core::frame::PixelFrame;
/// let frame = PixelFrame::new(10, 10);
/// assert_eq!(frame.data.len(), 400);
/// ```
#[derive(Debug)]
pub struct PixelFrame {
    /// RGBA pixels, row-major, 4 bytes per pixel.
    pub data: Vec<u8>,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl PixelFrame {
    /// Create a zeroed frame with the given dimensions.
    ///
    /// # Example
    /// ```
    /// use px_core::frame::PixelFrame;
    /// let frame = PixelFrame::new(100, 50);
    /// assert_eq!(frame.width, 100);
    /// assert_eq!(frame.height, 50);
    /// ```
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            data: vec![0u8; rgba_len(width, height)],
            width,
            height,
        }
    }

    /// Wrap an existing RGBA buffer. `data.len()` must equal `width * height * 4`.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), rgba_len(width, height));
        Self {
            data,
            width,
            height,
        }
    }

    /// Pixel access at (x, y) → (r, g, b, a).
    ///
    /// # Example
    /// ```
    /// use px_core::frame::PixelFrame;
    /// let frame = PixelFrame::new(10, 10);
    /// assert_eq!(frame.pixel(0, 0), (0, 0, 0, 0));
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> (u8, u8, u8, u8) {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        if idx + 3 >= self.data.len() {
            return (0, 0, 0, 0);
        }
        (
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        )
    }

    /// Perceptual luminance, ITU-R BT.709 integer weighting:
    /// `(2126·R + 7152·G + 722·B) / 10000`.
    ///
    /// This formula defines the visual identity of the output; keep it
    /// stable.
    ///
    /// # Example
    /// ```
    /// use px_core::frame::PixelFrame;
    /// let mut frame = PixelFrame::new(1, 1);
    /// frame.data.copy_from_slice(&[255, 255, 255, 255]);
    /// assert_eq!(frame.luminance(0, 0), 255);
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn luminance(&self, x: u32, y: u32) -> u8 {
        let (r, g, b, _) = self.pixel(x, y);
        ((u32::from(r) * 2126 + u32::from(g) * 7152 + u32::from(b) * 722) / 10000) as u8
    }
}

/// Single-channel luminance buffer, row-major, 1 byte per sample.
///
/// Intermediate of the pipeline: output of the grayscale reducer, input
/// and output of the resampler.
///
/// # Example
/// ```
/// use px_core::frame::GrayFrame;
/// let gray = GrayFrame::new(10, 5);
/// assert_eq!(gray.data.len(), 50);
/// ```
#[derive(Debug)]
pub struct GrayFrame {
    /// Luminance samples [0, 255], row-major.
    pub data: Vec<u8>,
    /// Width in samples.
    pub width: u32,
    /// Height in samples.
    pub height: u32,
}

impl GrayFrame {
    /// Create a zeroed (all-black) gray frame.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            data: vec![0u8; gray_len(width, height)],
            width,
            height,
        }
    }

    /// Sample at (x, y).
    #[inline(always)]
    #[must_use]
    pub fn sample(&self, x: u32, y: u32) -> u8 {
        debug_assert!(x < self.width && y < self.height, "sample out of bounds");
        let idx = y as usize * self.width as usize + x as usize;
        self.data.get(idx).copied().unwrap_or(0)
    }
}

/// Finished ASCII art: one string per output row, top row first.
///
/// Every line holds exactly `width` glyphs. `Display` joins the lines
/// with `\n`.
///
/// # Example
/// ```
/// use px_core::frame::AsciiArt;
/// let art = AsciiArt {
///     lines: vec!["@@".to_string(), "..".to_string()],
///     width: 2,
/// };
/// assert_eq!(art.line_count(), 2);
/// assert_eq!(art.to_string(), "@@\n..");
/// ```
#[derive(Debug)]
pub struct AsciiArt {
    /// Output rows, top first, left-to-right within each row.
    pub lines: Vec<String>,
    /// Width of every line in glyphs.
    pub width: u32,
}

impl AsciiArt {
    /// Number of output rows.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

impl fmt::Display for AsciiArt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for line in &self.lines {
            if !first {
                writeln!(f)?;
            }
            write!(f, "{line}")?;
            first = false;
        }
        Ok(())
    }
}
