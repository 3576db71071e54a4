use crate::error::PaletteError;

/// 11 glyphs — the classic ramp, darkest → lightest.
pub const PALETTE_CLASSIC: &str = "@#S%?*+;:,.";

/// 70 glyphs — Paul Bourke extended ramp, darkest → lightest.
pub const PALETTE_EXTENDED: &str =
    "$@B%8&WM#*oahkbdpqwmZO0QLCJUYXzcvunxrjft/\\|()1{}[]?-_+~<>i!lI;:,\"^`'. ";

/// Ordered glyph ramp, index 0 = darkest, last = lightest.
///
/// Order matters: glyph index must correspond monotonically to increasing
/// brightness. Duplicates are allowed.
///
/// # Example
/// ```
/// use px_core::palette::Palette;
/// let palette = Palette::classic();
/// assert_eq!(palette.len(), 11);
/// assert_eq!(palette.glyph(0), '@');
/// assert_eq!(palette.glyph(10), '.');
/// ```
#[derive(Clone, Debug)]
pub struct Palette {
    glyphs: Vec<char>,
}

impl Palette {
    /// Build a palette from a ramp string ordered darkest → lightest.
    ///
    /// # Errors
    /// Returns [`PaletteError::TooShort`] if the ramp has fewer than
    /// 2 glyphs.
    ///
    /// # Example
    /// ```
    /// use px_core::palette::Palette;
    /// let palette = Palette::new(" .:#@").unwrap();
    /// assert_eq!(palette.len(), 5);
    /// assert!(Palette::new("@").is_err());
    /// ```
    pub fn new(ramp: &str) -> Result<Self, PaletteError> {
        let glyphs: Vec<char> = ramp.chars().collect();
        if glyphs.len() < 2 {
            return Err(PaletteError::TooShort(glyphs.len()));
        }
        Ok(Self { glyphs })
    }

    /// The classic 11-glyph ramp (`@#S%?*+;:,.`).
    #[must_use]
    pub fn classic() -> Self {
        Self {
            glyphs: PALETTE_CLASSIC.chars().collect(),
        }
    }

    /// The 70-glyph extended ramp.
    #[must_use]
    pub fn extended() -> Self {
        Self {
            glyphs: PALETTE_EXTENDED.chars().collect(),
        }
    }

    /// Number of glyphs in the ramp. Always ≥ 2.
    #[must_use]
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Never true; a constructed palette holds at least 2 glyphs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Glyph at `index`. Panics if `index >= len()`.
    #[inline(always)]
    #[must_use]
    pub fn glyph(&self, index: usize) -> char {
        self.glyphs[index]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::classic()
    }
}

/// Lookup table mapping luminance [0..255] → glyph.
///
/// Pre-computed from a [`Palette`] for O(1) per-sample cost. Bucket index
/// is `v * len / 256`, clamped to `len - 1`.
///
/// # Example
/// ```
/// use px_core::palette::{GlyphLut, Palette};
/// let lut = GlyphLut::new(&Palette::classic());
/// assert_eq!(lut.map(0), '@');
/// assert_eq!(lut.map(128), '*');
/// assert_eq!(lut.map(255), '.');
/// ```
pub struct GlyphLut {
    lut: [char; 256],
}

impl GlyphLut {
    /// Build the 256-entry table from a palette.
    #[must_use]
    pub fn new(palette: &Palette) -> Self {
        let len = palette.len();
        let mut lut = [' '; 256];
        for (v, slot) in lut.iter_mut().enumerate() {
            *slot = palette.glyph((v * len / 256).min(len - 1));
        }
        Self { lut }
    }

    /// Map a luminance value [0..255] to a glyph.
    #[inline(always)]
    #[must_use]
    pub fn map(&self, luminance: u8) -> char {
        self.lut[luminance as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_ramp_has_eleven_glyphs() {
        assert_eq!(Palette::classic().len(), 11);
        assert_eq!(Palette::extended().len(), 70);
    }

    #[test]
    fn rejects_ramps_shorter_than_two() {
        assert!(matches!(Palette::new(""), Err(PaletteError::TooShort(0))));
        assert!(matches!(Palette::new("@"), Err(PaletteError::TooShort(1))));
        assert!(Palette::new("@.").is_ok());
    }

    #[test]
    fn glyph_lut_maps_extremes() {
        let lut = GlyphLut::new(&Palette::classic());
        assert_eq!(lut.map(0), '@');
        assert_eq!(lut.map(255), '.');
    }

    #[test]
    fn glyph_lut_mid_luminance_bucket() {
        // 128 * 11 / 256 = 5 → '*'
        let lut = GlyphLut::new(&Palette::classic());
        assert_eq!(lut.map(128), '*');
    }

    #[test]
    fn glyph_lut_monotonic() {
        let palette = Palette::classic();
        let lut = GlyphLut::new(&palette);
        let chars: Vec<char> = PALETTE_CLASSIC.chars().collect();
        let mut prev_idx = 0usize;
        for v in 0..=255u8 {
            let ch = lut.map(v);
            let idx = chars
                .iter()
                .position(|&c| c == ch)
                .unwrap_or_else(|| panic!("glyph {ch:?} not in ramp"));
            assert!(idx >= prev_idx, "LUT not monotonic at luminance {v}");
            prev_idx = idx;
        }
        assert_eq!(prev_idx, palette.len() - 1);
    }

    #[test]
    fn glyph_lut_never_overruns_short_ramp() {
        let lut = GlyphLut::new(&Palette::new("@.").unwrap());
        assert_eq!(lut.map(255), '.');
        assert_eq!(lut.map(0), '@');
    }
}
