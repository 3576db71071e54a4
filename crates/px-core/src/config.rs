use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::palette::PALETTE_CLASSIC;

/// Conversion parameters. Serializable to TOML; every field has a sane
/// default.
///
/// # Example
/// ```
/// use px_core::config::ConvertOptions;
/// let options = ConvertOptions::default();
/// assert_eq!(options.width, 100);
/// assert_eq!(options.cell_aspect, 0.55);
/// ```
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct ConvertOptions {
    /// Output width in characters.
    pub width: u32,
    /// Glyph ramp, darkest → lightest. Minimum 2 glyphs.
    pub palette: String,
    /// Height compensation factor for glyph cells being taller than wide.
    /// 0.55 matches typical monospace rendering; changing it changes
    /// output identity.
    pub cell_aspect: f64,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            width: 100,
            palette: PALETTE_CLASSIC.to_string(),
            cell_aspect: 0.55,
        }
    }
}

/// HTTP server parameters.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Listen address.
    pub bind: String,
    /// Smallest width the API accepts.
    pub min_width: u32,
    /// Largest width the API accepts.
    pub max_width: u32,
    /// Upload size cap in bytes.
    pub max_upload_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:8000".to_string(),
            min_width: 10,
            max_width: 500,
            max_upload_bytes: 10 * 1024 * 1024,
        }
    }
}

/// Top-level configuration file: `[convert]` and `[server]` tables.
///
/// Missing tables and fields fall back to defaults, so a partial file is
/// valid.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    /// Conversion defaults.
    pub convert: ConvertOptions,
    /// Server settings.
    pub server: ServerConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("unable to read config {}", path.display()))?;
        log::debug!("loading config from {}", path.display());
        toml::from_str(&raw).with_context(|| format!("invalid config {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_are_documented_values() {
        let config = AppConfig::default();
        assert_eq!(config.convert.width, 100);
        assert_eq!(config.convert.palette, PALETTE_CLASSIC);
        assert_eq!(config.convert.cell_aspect, 0.55);
        assert_eq!(config.server.bind, "127.0.0.1:8000");
        assert_eq!(config.server.min_width, 10);
        assert_eq!(config.server.max_width, 500);
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[convert]\nwidth = 80").unwrap();
        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.convert.width, 80);
        assert_eq!(config.convert.cell_aspect, 0.55);
        assert_eq!(config.server.max_width, 500);
    }

    #[test]
    fn unreadable_file_is_an_error() {
        assert!(AppConfig::load(Path::new("/nonexistent/pixscii.toml")).is_err());
    }
}
