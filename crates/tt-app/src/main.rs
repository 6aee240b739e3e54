use anyhow::Context;
use clap::Parser;
use tt_app::cli::Cli;
use tt_app::pipeline::{ConvertOutput, full_convert};
use tt_export::font::TrueTypeFont;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = cli.resolve_config()?;

    let font_path = config
        .font
        .as_deref()
        .context("no font given: pass --font or set `font` in the config file")?;
    let font = TrueTypeFont::from_path(font_path, config.font_size)?;
    let image = tt_source::image::load_luma(&cli.input)?;

    match full_convert(&image, &font, &config)? {
        ConvertOutput::Text(grid) => tt_export::text::save_text(&grid, &cli.output)?,
        ConvertOutput::Image(frame) => tt_export::image::save_luma(&frame, &cli.output)?,
    }
    Ok(())
}
