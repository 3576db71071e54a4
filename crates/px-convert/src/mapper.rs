use px_core::frame::{AsciiArt, GrayFrame};
use px_core::palette::GlyphLut;

/// Map each luminance sample through the LUT and reassemble rows.
///
/// Output ordering matches the frame's row-major enumeration exactly:
/// top row first, left-to-right within each row. Every line holds
/// `gray.width` glyphs. Purely a function of the samples and the palette;
/// no state is carried between pixels.
///
/// # Example
/// ```
/// use px_convert::mapper::map_glyphs;
/// use px_core::frame::GrayFrame;
/// use px_core::palette::{GlyphLut, Palette};
/// let lut = GlyphLut::new(&Palette::classic());
/// let art = map_glyphs(&GrayFrame::new(5, 2), &lut);
/// assert_eq!(art.lines, vec!["@@@@@", "@@@@@"]);
/// ```
#[must_use]
pub fn map_glyphs(gray: &GrayFrame, lut: &GlyphLut) -> AsciiArt {
    let mut lines = Vec::with_capacity(gray.height as usize);
    for y in 0..gray.height {
        let mut line = String::with_capacity(gray.width as usize);
        for x in 0..gray.width {
            line.push(lut.map(gray.sample(x, y)));
        }
        lines.push(line);
    }
    AsciiArt {
        lines,
        width: gray.width,
    }
}
