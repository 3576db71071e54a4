use thiserror::Error;

/// Errors surfaced by the conversion pipeline.
///
/// Only two kinds can reach callers holding valid inputs: `Decode` from the
/// decode helpers and `InvalidWidth` from the width check. Every later
/// stage is a total function.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// Input bytes could not be decoded as an image.
    #[error("unable to decode image: {0}")]
    Decode(String),

    /// Requested character width is below the minimum of 1.
    #[error("invalid width: {width} (minimum is 1)")]
    InvalidWidth {
        /// The offending width value.
        width: u32,
    },

    /// Resampler plumbing failure. Does not occur for well-formed frames.
    #[error("internal conversion error: {0}")]
    Internal(String),
}

/// Errors from palette construction.
#[derive(Error, Debug)]
pub enum PaletteError {
    /// A glyph ramp needs at least two entries to bucket luminance.
    #[error("palette needs at least 2 glyphs, got {0}")]
    TooShort(usize),
}
