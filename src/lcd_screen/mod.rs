use anyhow::{Context, Result};
use clerk::{DataPins4Lines, Pins};

pub mod character_generator;
pub mod character_pattern;
pub mod glyph_set;

use character_generator::CharacterGenerator;
use character_pattern::Glyph;
use glyph_set::GlyphSet;

enum LcdLine {
    Top,
    Bottom,
}

impl LcdLine {
    const ROW_OFFSET: u8 = 0x40; //specified by the chip

    fn offset(self) -> u8 {
        match self {
            LcdLine::Top => 0,
            LcdLine::Bottom => Self::ROW_OFFSET,
        }
    }
}

/// The display is never read from, so the read/write line is tied low
struct FakeLine;

impl clerk::DisplayHardwareLayer for FakeLine {
    fn set_level(&self, _level: clerk::Level) {}
    fn set_direction(&self, _direction: clerk::Direction) {}
    fn get_value(&self) -> u8 {
        0
    }
}

struct Line {
    handle: gpio_cdev::LineHandle,
    consumer: &'static str,
}

impl clerk::DisplayHardwareLayer for Line {
    fn set_level(&self, level: clerk::Level) {
        let value = match level {
            clerk::Level::Low => 0,
            clerk::Level::High => 1,
        };

        if let Err(err) = self.handle.set_value(value) {
            log::error!("Failed to set {} to {}: {}", self.consumer, value, err);
        }
    }
    fn set_direction(&self, _direction: clerk::Direction) {}

    fn get_value(&self) -> u8 {
        0
    }
}

struct Delay;

impl clerk::Delay for Delay {
    const ADDRESS_SETUP_TIME: u16 = 60;
    const ENABLE_PULSE_WIDTH: u16 = 300; // 300ns in the spec sheet 450;
    const DATA_HOLD_TIME: u16 = 10; // 10ns in the spec sheet  20;
    const COMMAND_EXECUTION_TIME: u16 = 37;

    fn delay_ns(ns: u16) {
        std::thread::sleep(std::time::Duration::from_nanos(u64::from(ns)));
    }
}

type Lcd = clerk::Display<
    clerk::ParallelConnection<
        Line,
        FakeLine,
        Line,
        clerk::DataPins4Lines<Line, Line, Line, Line>,
        Delay,
    >,
    clerk::DefaultLines,
>;

impl CharacterGenerator for Lcd {
    fn seek_cgram(&mut self, address: u8) {
        clerk::Display::seek_cgram(self, clerk::SeekFrom::Home(address));
    }

    fn write_row(&mut self, row: u8) {
        clerk::Display::write(self, row);
    }
}

fn get_line(chip: &mut gpio_cdev::Chip, offset: u32, consumer: &'static str) -> Result<Line> {
    let handle = chip
        .get_line(offset)
        .with_context(|| format!("Failed to get GPIO pin for {:?}", consumer))?
        .request(gpio_cdev::LineRequestFlags::OUTPUT, 0, consumer)
        .with_context(|| format!("GPIO pin for {:?} already in use. Are running another copy of the program elsewhere?", consumer))?;
    Ok(Line { handle, consumer })
}

/// GPIO line offsets of the display, wired in 4 bit mode
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct PinDeclarations {
    pub rs: u32,     // Register Select
    pub enable: u32, // Also known as strobe and clock
    pub data4: u32,
    pub data5: u32,
    pub data6: u32,
    pub data7: u32,
}

impl PinDeclarations {
    fn create_display(&self, chip: &mut gpio_cdev::Chip) -> Result<Lcd> {
        let register_select = get_line(chip, self.rs, "register_select")?;
        let read = FakeLine;
        let enable = get_line(chip, self.enable, "enable")?;
        let data4 = get_line(chip, self.data4, "data4")?;
        let data5 = get_line(chip, self.data5, "data5")?;
        let data6 = get_line(chip, self.data6, "data6")?;
        let data7 = get_line(chip, self.data7, "data7")?;

        let pins = Pins {
            register_select,
            read,
            enable,
            data: DataPins4Lines {
                data4,
                data5,
                data6,
                data7,
            },
        };

        let lcd = clerk::Display::<_, clerk::DefaultLines>::new(pins.into_connection::<Delay>());

        lcd.init(clerk::FunctionSetBuilder::default().set_line_number(clerk::LineNumber::Two));
        std::thread::sleep(std::time::Duration::from_millis(3)); // the display ignores writes until initialisation has finished

        lcd.set_display_control(
            clerk::DisplayControlBuilder::default() // display on, blinking off
                .set_cursor(clerk::CursorState::Off), // no underline beneath the glyphs
        );

        lcd.clear();
        std::thread::sleep(std::time::Duration::from_millis(2)); // clearing takes 1.52ms

        Ok(lcd)
    }
}

fn write_text(lcd: &mut Lcd, line: LcdLine, text: &str) {
    lcd.seek(clerk::SeekFrom::Home(line.offset()));

    for character in text.chars() {
        lcd.write(if character.is_ascii() {
            character as u8
        } else {
            b'?'
        });
    }
}

/// Bring up the display, load the glyphs, and optionally show each of them
pub fn run(
    chip_path: &std::path::Path,
    pins: &PinDeclarations,
    glyphs: &GlyphSet,
    show_test_pattern: bool,
) -> Result<()> {
    log::info!("Using {:?}", pins);

    let mut chip = gpio_cdev::Chip::new(chip_path)
        .with_context(|| format!("Failed to open GPIO character device {:?}", chip_path))?;
    let mut lcd = pins.create_display(&mut chip)?;

    character_generator::upload(&mut lcd, glyphs);

    log::info!("Loaded {} glyphs", Glyph::ALL.len());

    if show_test_pattern {
        lcd.seek(clerk::SeekFrom::Home(LcdLine::Top.offset()));

        for glyph in Glyph::ALL.iter() {
            lcd.write(glyph.slot()); // character codes 0 to 7 display the bespoke characters
            lcd.write(b' ');
        }

        write_text(&mut lcd, LcdLine::Bottom, "Smart VFO glyphs");
    }

    Ok(())
}
