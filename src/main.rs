#![warn(clippy::pedantic)]

use anyhow::{Context, Result};

mod config;
mod lcd_screen;
mod preview;

use lcd_screen::glyph_set::GlyphSet;

fn main() -> Result<()> {
    let logger = flexi_logger::Logger::try_with_str("error")?
        .format(log_format)
        .start()?;

    let mut config_path =
        String::from(option_env!("SMART_VFO_CONFIG_PATH").unwrap_or("config.toml"));
    let mut preview_only = false;

    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-c" | "--config" => {
                config_path = args.next().context("No config specified")?;
            }
            "-p" | "--preview" => {
                preview_only = true;
            }
            "-V" | "--version" => {
                println!("{} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                return Ok(());
            }
            _ => return Err(anyhow::Error::msg(format!("Unhandled argument {:?}", arg))),
        }
    }

    let config = config::Config::from_file(config_path);

    if let Err(err) = logger.parse_new_spec(&config.log_level) {
        log::error!("Bad log level {:?}: {}", config.log_level, err);
    }

    let result = run(&config, preview_only);

    if let Err(err) = &result {
        log::error!("{:#}", err);
    }

    logger.shutdown();

    result
}

fn run(config: &config::Config, preview_only: bool) -> Result<()> {
    let glyphs = GlyphSet::with_overrides(&config.glyph_overrides)?;

    match &config.pins {
        Some(pins) if !preview_only => lcd_screen::run(
            &config.gpio_chip,
            pins,
            &glyphs,
            config.show_test_pattern,
        ),
        pins => {
            if pins.is_none() && !preview_only {
                log::warn!("No display pins configured, printing glyphs instead");
            }

            preview::print(std::io::stdout().lock(), &glyphs).context("Failed to print glyphs")
        }
    }
}

fn log_format(
    w: &mut dyn std::io::Write,
    _now: &mut flexi_logger::DeferredNow,
    record: &log::Record,
) -> Result<(), std::io::Error> {
    use crossterm::style::{style, Attribute, Color, Stylize};
    use log::Level;

    let color = match record.level() {
        Level::Trace => Color::Magenta,
        Level::Debug => Color::Blue,
        Level::Info => Color::Green,
        Level::Warn => Color::Yellow,
        Level::Error => Color::Red,
    };

    let level = style(record.level()).with(color);

    let target = record.target();

    let args = match record.level() {
        Level::Trace => style(record.args()).with(Color::DarkGrey),
        Level::Debug | Level::Info => style(record.args()),
        Level::Warn | Level::Error => style(record.args()).with(color).attribute(Attribute::Bold),
    };

    write!(w, "{:<5} [{}] {}", level, target, args)
}
