use anyhow::{Context, Result};
use clap::Parser;
use px_core::config::{AppConfig, ConvertOptions};
use px_core::palette::Palette;

pub mod cli;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    let base = match cli.config.as_deref() {
        Some(path) => AppConfig::load(path)?.convert,
        None => ConvertOptions::default(),
    };
    let options = cli.merged_options(base);

    let palette = Palette::new(&options.palette)?;

    log::info!(
        "converting {} at width {}",
        cli.image.display(),
        options.width
    );
    let frame = px_convert::load_image(&cli.image)?;
    let art = px_convert::convert(&frame, options.width, &palette, options.cell_aspect)?;

    match cli.output {
        Some(path) => {
            std::fs::write(&path, art.to_string())
                .with_context(|| format!("unable to write {}", path.display()))?;
            log::info!("ascii art saved to {}", path.display());
        }
        None => println!("{art}"),
    }

    Ok(())
}
