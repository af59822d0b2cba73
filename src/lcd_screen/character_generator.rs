//! Loading bespoke characters into the display's character generator RAM.

use super::{character_pattern::Bitmap, glyph_set::GlyphSet};

/// Something with character generator RAM, usually an HD44780 compatible display
pub trait CharacterGenerator {
    /// Position the write pointer at a character generator address.
    /// Each character occupies 8 consecutive addresses, so slot `n` starts at `8 * n`.
    fn seek_cgram(&mut self, address: u8);

    /// Write one pixel row and advance the write pointer
    fn write_row(&mut self, row: u8);
}

pub fn upload_bitmap(generator: &mut impl CharacterGenerator, address: u8, bitmap: &Bitmap) {
    generator.seek_cgram(address);

    for row in bitmap {
        generator.write_row(*row);
    }
}

/// Load every glyph into its slot
pub fn upload(generator: &mut impl CharacterGenerator, glyphs: &GlyphSet) {
    for (glyph, bitmap) in glyphs.iter() {
        log::debug!("Loading {} into slot {}", glyph, glyph.slot());
        upload_bitmap(generator, glyph.cgram_address(), bitmap);
    }
}

#[cfg(test)]
mod tests {
    use super::super::character_pattern::{Glyph, LOCK};
    use super::*;

    #[derive(Debug, PartialEq)]
    enum Write {
        Seek(u8),
        Row(u8),
    }

    #[derive(Default)]
    struct FakeGenerator {
        writes: Vec<Write>,
    }

    impl CharacterGenerator for FakeGenerator {
        fn seek_cgram(&mut self, address: u8) {
            self.writes.push(Write::Seek(address));
        }

        fn write_row(&mut self, row: u8) {
            self.writes.push(Write::Row(row));
        }
    }

    #[test]
    fn bitmap_is_written_top_row_first() {
        let mut generator = FakeGenerator::default();

        upload_bitmap(&mut generator, Glyph::Lock.cgram_address(), &LOCK);

        let mut expected = vec![Write::Seek(32)];
        expected.extend(LOCK.iter().map(|&row| Write::Row(row)));

        assert_eq!(generator.writes, expected);
    }

    #[test]
    fn every_glyph_is_loaded_into_its_slot() {
        let mut generator = FakeGenerator::default();

        upload(&mut generator, &GlyphSet::default());

        assert_eq!(generator.writes.len(), 8 * 9);

        for (chunk, glyph) in generator.writes.chunks(9).zip(Glyph::ALL.iter()) {
            assert_eq!(chunk[0], Write::Seek(glyph.slot() * 8));
            for (write, row) in chunk[1..].iter().zip(glyph.bitmap()) {
                assert_eq!(write, &Write::Row(*row));
            }
        }
    }
}
