//! Bespoke characters for the VFO display.
//!
//! Each bitmap is one 5x8 character cell, one byte per pixel row starting with the topmost.
//! Only the lower five bits of a row are displayed, bit 4 being the leftmost pixel.

use std::fmt;

/// The pixel rows of a single character cell
pub type Bitmap = [u8; ROWS];

/// Number of pixel rows in a character cell
pub const ROWS: usize = 8;

/// Number of pixel columns in a character cell
pub const COLUMNS: usize = 5;

/// The bits of a row which are displayed
pub const COLUMN_MASK: u8 = 0b1_1111;

pub const VFO_A: Bitmap = [
    0b10100, // small "V" in the top left corner
    0b10100, //
    0b01000, //
    0b00110, // "A" in the bottom right
    0b01001, //
    0b01001, //
    0b01111, //
    0b01001,
];

pub const VFO_B: Bitmap = [
    0b10100, //
    0b10100, //
    0b01000, //
    0b01110, // "B" in the bottom right
    0b01001, //
    0b01110, //
    0b01001, //
    0b01110,
];

pub const RIGHT_ARROW: Bitmap = [
    0b00000, //
    0b00000, //
    0b00100, //
    0b00010, //
    0b11111, //
    0b00010, //
    0b00100, //
    0b00000,
];

pub const TRANSMIT: Bitmap = [
    0b00000, //
    0b11111, // "T"
    0b00100, //
    0b00100, //
    0b00100, //
    0b00101, // small "x" in the bottom right
    0b00010, //
    0b00101,
];

pub const LOCK: Bitmap = [
    0b01110, // shackle
    0b10001, //
    0b11111, // top of the body
    0b10001, //
    0b10101, // keyhole
    0b10001, //
    0b11111, //
    0b00000, // bottom row left blank
];

pub const RIT: Bitmap = [
    0b01000, //
    0b11111, //
    0b00000, //
    0b11111, //
    0b00000, //
    0b11101, //
    0b10110, //
    0b11111,
];

pub const SETTINGS: Bitmap = [
    0b00000, //
    0b01110, //
    0b11111, //
    0b11111, //
    0b11111, //
    0b01110, //
    0b00000, //
    0b00000,
];

/// "14" squeezed into a single cell, used to annotate the 2m band
pub const DOUBLE_DIGIT_14: Bitmap = [
    0b10001, //
    0b10011, //
    0b10101, //
    0b10101, //
    0b10111, //
    0b10001, //
    0b10001, //
    0b00000,
];

/// All bespoke characters, indexed by their character generator slot
pub const BITMAPS: [Bitmap; 8] = [
    VFO_A,
    VFO_B,
    RIGHT_ARROW,
    TRANSMIT,
    LOCK,
    RIT,
    SETTINGS,
    DOUBLE_DIGIT_14,
];

const fn fits_cell(bitmaps: &[Bitmap]) -> bool {
    let mut glyph = 0;
    while glyph < bitmaps.len() {
        let mut row = 0;
        while row < ROWS {
            if bitmaps[glyph][row] & !COLUMN_MASK != 0 {
                return false;
            }
            row += 1;
        }
        glyph += 1;
    }
    true
}

const _: () = assert!(
    fits_cell(&BITMAPS),
    "a bespoke character has a pixel outside of the 5 displayed columns"
);

/// A bespoke character, whose discriminant is the character generator slot it is loaded into.
///
/// Writing the slot number as a character code displays the character.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum Glyph {
    VfoA,
    VfoB,
    RightArrow,
    Transmit,
    Lock,
    Rit,
    Settings,
    DoubleDigit14,
}

impl Glyph {
    pub const ALL: [Self; 8] = [
        Self::VfoA,
        Self::VfoB,
        Self::RightArrow,
        Self::Transmit,
        Self::Lock,
        Self::Rit,
        Self::Settings,
        Self::DoubleDigit14,
    ];

    /// The character generator slot, which is also the character code
    pub const fn slot(self) -> u8 {
        self as u8
    }

    /// The character generator address of the topmost row
    pub const fn cgram_address(self) -> u8 {
        self.slot() * ROWS as u8
    }

    pub const fn bitmap(self) -> &'static Bitmap {
        match self {
            Self::VfoA => &VFO_A,
            Self::VfoB => &VFO_B,
            Self::RightArrow => &RIGHT_ARROW,
            Self::Transmit => &TRANSMIT,
            Self::Lock => &LOCK,
            Self::Rit => &RIT,
            Self::Settings => &SETTINGS,
            Self::DoubleDigit14 => &DOUBLE_DIGIT_14,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::VfoA => "vfo_a",
            Self::VfoB => "vfo_b",
            Self::RightArrow => "right_arrow",
            Self::Transmit => "transmit",
            Self::Lock => "lock",
            Self::Rit => "rit",
            Self::Settings => "settings",
            Self::DoubleDigit14 => "double_digit_14",
        }
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("Unknown glyph {0:?}")]
pub struct UnknownGlyph(pub String);

impl std::str::FromStr for Glyph {
    type Err = UnknownGlyph;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|glyph| glyph.name() == s)
            .ok_or_else(|| UnknownGlyph(s.into()))
    }
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ParseBitmapError {
    #[error("Expected 8 rows, got {0}")]
    WrongRowCount(usize),
    #[error("Row {row} is {width} pixels wide, expected 5")]
    WrongRowWidth { row: usize, width: usize },
    #[error("Row {row} has {pixel:?} in column {column}, expected '0' or '1'")]
    BadPixel {
        row: usize,
        column: usize,
        pixel: char,
    },
}

/// Formats a row as five `0` or `1` characters, leftmost pixel first
pub fn row_to_string(row: u8) -> String {
    format!("{:05b}", row & COLUMN_MASK)
}

pub fn bitmap_to_rows(bitmap: &Bitmap) -> [String; ROWS] {
    bitmap.map(row_to_string)
}

/// Parses rows written as they would be in the bitmap constants, e.g. `"01110"`
pub fn parse_bitmap<S: AsRef<str>>(rows: &[S]) -> Result<Bitmap, ParseBitmapError> {
    if rows.len() != ROWS {
        return Err(ParseBitmapError::WrongRowCount(rows.len()));
    }

    let mut bitmap = [0; ROWS];

    for (row, (source, pixels)) in rows.iter().zip(bitmap.iter_mut()).enumerate() {
        let source = source.as_ref();

        let width = source.chars().count();
        if width != COLUMNS {
            return Err(ParseBitmapError::WrongRowWidth { row, width });
        }

        for (column, pixel) in source.chars().enumerate() {
            *pixels = (*pixels << 1)
                | match pixel {
                    '0' => 0,
                    '1' => 1,
                    _ => {
                        return Err(ParseBitmapError::BadPixel { row, column, pixel });
                    }
                };
        }
    }

    Ok(bitmap)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows_of(bitmap: &Bitmap) -> Vec<String> {
        bitmap_to_rows(bitmap).to_vec()
    }

    #[test]
    fn every_glyph_has_eight_rows() {
        for bitmap in &BITMAPS {
            assert_eq!(bitmap.len(), 8);
        }
    }

    #[test]
    fn every_row_fits_five_columns() {
        for glyph in Glyph::ALL.iter() {
            for row in glyph.bitmap() {
                assert!(*row <= 31, "{} has row {:#010b}", glyph, row);
            }
        }
    }

    #[test]
    fn vfo_a_rows_are_transcribed_in_order() {
        let rows = rows_of(&VFO_A);
        assert_eq!(rows[0], "10100");
        assert_eq!(rows[3], "00110");
    }

    #[test]
    fn lock_rows_are_not_reversed_or_inverted() {
        assert_eq!(
            rows_of(&LOCK),
            ["01110", "10001", "11111", "10001", "10101", "10001", "11111", "00000"]
        );
    }

    #[test]
    fn double_digit_14_first_and_last_rows() {
        let rows = rows_of(&DOUBLE_DIGIT_14);
        assert_eq!(rows.first().map(String::as_str), Some("10001"));
        assert_eq!(rows.last().map(String::as_str), Some("00000"));
    }

    #[test]
    fn formatted_rows_parse_back_to_the_same_bitmap() {
        for glyph in Glyph::ALL.iter() {
            let rows = bitmap_to_rows(glyph.bitmap());
            assert_eq!(parse_bitmap(&rows).as_ref(), Ok(glyph.bitmap()));
        }
    }

    #[test]
    fn slots_match_bitmap_table() {
        for (index, glyph) in Glyph::ALL.iter().enumerate() {
            assert_eq!(usize::from(glyph.slot()), index);
            assert_eq!(glyph.bitmap(), &BITMAPS[index]);
            assert_eq!(usize::from(glyph.cgram_address()), index * 8);
        }
    }

    #[test]
    fn named_glyphs_point_at_named_bitmaps() {
        assert_eq!(Glyph::VfoA.bitmap(), &VFO_A);
        assert_eq!(Glyph::VfoB.bitmap(), &VFO_B);
        assert_eq!(Glyph::RightArrow.bitmap(), &RIGHT_ARROW);
        assert_eq!(Glyph::Transmit.bitmap(), &TRANSMIT);
        assert_eq!(Glyph::Lock.bitmap(), &LOCK);
        assert_eq!(Glyph::Rit.bitmap(), &RIT);
        assert_eq!(Glyph::Settings.bitmap(), &SETTINGS);
        assert_eq!(Glyph::DoubleDigit14.bitmap(), &DOUBLE_DIGIT_14);
    }

    #[test]
    fn glyph_names_parse() {
        for glyph in Glyph::ALL.iter() {
            assert_eq!(glyph.name().parse::<Glyph>(), Ok(*glyph));
        }
        assert_eq!(
            "squelch".parse::<Glyph>(),
            Err(UnknownGlyph("squelch".into()))
        );
    }

    #[test]
    fn wrong_row_count() {
        assert_eq!(
            parse_bitmap(&["00000"; 7]),
            Err(ParseBitmapError::WrongRowCount(7))
        );
    }

    #[test]
    fn wrong_row_width() {
        let mut rows = ["00000"; 8];
        rows[2] = "000000";
        assert_eq!(
            parse_bitmap(&rows),
            Err(ParseBitmapError::WrongRowWidth { row: 2, width: 6 })
        );
    }

    #[test]
    fn bad_pixel() {
        let mut rows = ["00000"; 8];
        rows[5] = "01x10";
        assert_eq!(
            parse_bitmap(&rows),
            Err(ParseBitmapError::BadPixel {
                row: 5,
                column: 2,
                pixel: 'x'
            })
        );
    }
}
