//! Print the glyphs to the terminal, for checking them without a display attached.

use std::io::Write;

use crossterm::style::{style, Attribute, Color, Stylize};

use crate::lcd_screen::{
    character_pattern::{bitmap_to_rows, COLUMNS},
    glyph_set::GlyphSet,
};

fn pixels(row: u8) -> String {
    (0..COLUMNS)
        .rev()
        .map(|column| if row & (1 << column) == 0 { '·' } else { '█' })
        .collect()
}

pub fn print(mut output: impl Write, glyphs: &GlyphSet) -> std::io::Result<()> {
    for (glyph, bitmap) in glyphs.iter() {
        writeln!(
            output,
            "{} {}",
            style(format!("[{}]", glyph.slot())).with(Color::DarkGrey),
            style(glyph).with(Color::Green).attribute(Attribute::Bold)
        )?;

        for (row, binary) in bitmap.iter().zip(bitmap_to_rows(bitmap).iter()) {
            writeln!(
                output,
                "    {}  {}",
                style(pixels(*row)).with(Color::Cyan),
                style(binary).with(Color::DarkGrey)
            )?;
        }
    }

    output.flush()
}
