use std::path::PathBuf;

use clap::Parser;
use px_core::config::ConvertOptions;
use px_core::palette::{PALETTE_CLASSIC, PALETTE_EXTENDED};

/// pixscii — image to ASCII art converter.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the input image (PNG, JPEG, BMP, GIF).
    pub image: PathBuf,

    /// Output width in characters.
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(10..=500))]
    pub width: Option<u32>,

    /// Write the art to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Glyph ramp: "classic", "extended", or a literal ramp string
    /// ordered darkest → lightest (minimum 2 glyphs).
    #[arg(long)]
    pub palette: Option<String>,

    /// Height compensation factor for monospace glyph cells.
    #[arg(long)]
    pub cell_aspect: Option<f64>,

    /// Optional TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log level: error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Apply command-line overrides on top of file-based (or default)
    /// conversion options. Flags win over the config file.
    #[must_use]
    pub fn merged_options(&self, base: ConvertOptions) -> ConvertOptions {
        let mut options = base;
        if let Some(width) = self.width {
            options.width = width;
        }
        if let Some(arg) = self.palette.as_deref() {
            options.palette = ramp_for(arg).to_string();
        }
        if let Some(aspect) = self.cell_aspect {
            options.cell_aspect = aspect;
        }
        options
    }
}

/// Resolve a `--palette` argument to a glyph ramp.
///
/// Named ramps map to the built-ins; anything else is taken as a literal
/// ramp string.
#[must_use]
pub fn ramp_for(arg: &str) -> &str {
    match arg {
        "classic" => PALETTE_CLASSIC,
        "extended" => PALETTE_EXTENDED,
        literal => literal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_invocation() {
        let cli = Cli::try_parse_from(["pixscii", "photo.png"]).unwrap();
        assert_eq!(cli.image, PathBuf::from("photo.png"));
        assert!(cli.width.is_none());
        assert!(cli.output.is_none());
        assert_eq!(cli.log_level, "warn");
    }

    #[test]
    fn parses_width_and_output() {
        let cli =
            Cli::try_parse_from(["pixscii", "in.jpg", "-w", "150", "-o", "art.txt"]).unwrap();
        assert_eq!(cli.width, Some(150));
        assert_eq!(cli.output, Some(PathBuf::from("art.txt")));
    }

    #[test]
    fn rejects_width_outside_convention() {
        assert!(Cli::try_parse_from(["pixscii", "in.jpg", "-w", "5"]).is_err());
        assert!(Cli::try_parse_from(["pixscii", "in.jpg", "-w", "501"]).is_err());
        assert!(Cli::try_parse_from(["pixscii", "in.jpg", "-w", "ten"]).is_err());
    }

    #[test]
    fn flags_override_config_values() {
        let cli = Cli::try_parse_from([
            "pixscii",
            "in.jpg",
            "-w",
            "150",
            "--palette",
            "extended",
            "--cell-aspect",
            "0.5",
        ])
        .unwrap();

        let base = ConvertOptions {
            width: 42,
            palette: " .:#@".to_string(),
            cell_aspect: 0.55,
        };
        let options = cli.merged_options(base);
        assert_eq!(options.width, 150);
        assert_eq!(options.palette, PALETTE_EXTENDED);
        assert_eq!(options.cell_aspect, 0.5);
    }

    #[test]
    fn absent_flags_keep_config_values() {
        let cli = Cli::try_parse_from(["pixscii", "in.jpg"]).unwrap();
        let base = ConvertOptions {
            width: 42,
            palette: " .:#@".to_string(),
            cell_aspect: 0.6,
        };
        let options = cli.merged_options(base);
        assert_eq!(options.width, 42);
        assert_eq!(options.palette, " .:#@");
        assert_eq!(options.cell_aspect, 0.6);
    }

    #[test]
    fn merges_over_a_loaded_config_file() {
        use std::io::Write;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[convert]\nwidth = 40\ncell_aspect = 0.6").unwrap();
        let base = px_core::config::AppConfig::load(file.path()).unwrap().convert;

        let cli = Cli::try_parse_from(["pixscii", "in.jpg", "-w", "80"]).unwrap();
        let options = cli.merged_options(base);
        assert_eq!(options.width, 80); // flag wins
        assert_eq!(options.cell_aspect, 0.6); // file value kept
    }

    #[test]
    fn named_and_literal_ramps() {
        assert_eq!(ramp_for("classic"), PALETTE_CLASSIC);
        assert_eq!(ramp_for("extended"), PALETTE_EXTENDED);
        assert_eq!(ramp_for(" .:#@"), " .:#@");
    }
}
