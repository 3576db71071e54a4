/// Shared types for pixscii.
///
/// This crate contains the pixel and glyph data model, palette handling,
/// configuration, and error types used across the pixscii workspace.

pub mod config;
pub mod error;
pub mod frame;
pub mod palette;

pub use config::{AppConfig, ConvertOptions, ServerConfig};
pub use error::{ConvertError, PaletteError};
pub use frame::{AsciiArt, GrayFrame, PixelFrame};
pub use palette::{GlyphLut, Palette};
