//! A description of the configuration file

use std::{collections::BTreeMap, path::PathBuf};

use crate::lcd_screen::PinDeclarations;

#[derive(Debug, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    /// A flexi_logger log specification, e.g. `"info"` or `"warn, smart_vfo_lcd::lcd_screen = debug"`
    pub log_level: String,

    pub gpio_chip: PathBuf,

    /// If missing, the glyphs are printed to the terminal instead
    pub pins: Option<PinDeclarations>,

    /// Show every glyph on the display once they have been loaded
    pub show_test_pattern: bool,

    /// Redrawn glyphs, keyed by glyph name
    #[serde(rename = "glyphs")]
    pub glyph_overrides: BTreeMap<String, Vec<String>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: String::from("error"),
            gpio_chip: PathBuf::from("/dev/gpiochip0"),
            pins: None,
            show_test_pattern: true,
            glyph_overrides: BTreeMap::new(),
        }
    }
}

impl Config {
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Self {
        let path = path.as_ref();

        let config = match std::fs::read_to_string(path) {
            Ok(config) => config,
            Err(err) => {
                log::error!("Failed to read config file {:?}: {}", path, err);
                return Self::default();
            }
        };

        match toml::from_str(&config) {
            Ok(config) => config,
            Err(err) => {
                log::error!("Failed to parse config file {:?}: {}", path, err);
                Self::default()
            }
        }
    }
}
