use std::collections::BTreeMap;

use anyhow::{Context, Result};

use super::character_pattern::{parse_bitmap, Bitmap, Glyph, BITMAPS};

/// The bitmaps loaded into the character generator, one per slot.
///
/// Starts out as the built-in bitmaps, optionally with some glyphs redrawn from the config file.
#[derive(Clone, Debug, PartialEq)]
pub struct GlyphSet {
    bitmaps: [Bitmap; 8],
}

impl Default for GlyphSet {
    fn default() -> Self {
        Self { bitmaps: BITMAPS }
    }
}

impl GlyphSet {
    pub fn bitmap(&self, glyph: Glyph) -> &Bitmap {
        &self.bitmaps[usize::from(glyph.slot())]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Glyph, &Bitmap)> + '_ {
        Glyph::ALL.iter().map(move |&glyph| (glyph, self.bitmap(glyph)))
    }

    pub fn set(&mut self, glyph: Glyph, bitmap: Bitmap) {
        self.bitmaps[usize::from(glyph.slot())] = bitmap;
    }

    /// Replace glyphs given as a glyph name and its rows, e.g. `lock = ["01110", ...]`
    pub fn with_overrides(overrides: &BTreeMap<String, Vec<String>>) -> Result<Self> {
        let mut glyphs = Self::default();

        for (name, rows) in overrides {
            let glyph = name
                .parse::<Glyph>()
                .context("Bad glyph override in config file")?;
            let bitmap = parse_bitmap(rows)
                .with_context(|| format!("Bad rows for glyph override {:?}", name))?;

            log::info!("Overriding {}", glyph);

            glyphs.set(glyph, bitmap);
        }

        Ok(glyphs)
    }
}
