//! Display setup and the engine's draw surface over it
//!
//! - `setup_display` brings up the ST7789 over blocking SPI.
//! - `DisplayCanvas` adapts any embedded-graphics target to the engine's
//!   `Canvas` trait.

use cadran_core::render::{Bitmap, TextAlign, TextPaint};
use cadran_core::traits::{Canvas, DrawError};
use embassy_rp::gpio::{Level, Output};
use embassy_rp::peripherals::{PIN_8, PIN_9, PIN_10, PIN_11, PIN_12, PIN_13, SPI1};
use embassy_rp::spi::{Blocking, Config as SpiConfig, Spi};
use embassy_rp::Peri;
use embassy_time::Delay;
use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::Point;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::{Alignment, Text};
use embedded_graphics::Drawable;
use embedded_hal_bus::spi::{ExclusiveDevice, NoDelay};
use mipidsi::interface::SpiInterface;
use mipidsi::models::ST7789;
use mipidsi::options::ColorInversion;
use mipidsi::Builder;
use profont::PROFONT_24_POINT;
use static_cell::StaticCell;

/// Panel resolution
pub const DISPLAY_WIDTH: u32 = 240;
pub const DISPLAY_HEIGHT: u32 = 240;

pub type FaceDisplay = mipidsi::Display<
    SpiInterface<
        'static,
        ExclusiveDevice<Spi<'static, SPI1, Blocking>, Output<'static>, NoDelay>,
        Output<'static>,
    >,
    ST7789,
    Output<'static>,
>;

static DISPLAY_BUF: StaticCell<[u8; 512]> = StaticCell::new();

/// Bring up the ST7789 panel and switch the backlight on
pub fn setup_display(
    spi: Peri<'static, SPI1>,
    clk: Peri<'static, PIN_10>,
    mosi: Peri<'static, PIN_11>,
    cs: Peri<'static, PIN_9>,
    dc: Peri<'static, PIN_8>,
    rst: Peri<'static, PIN_12>,
    bl: Peri<'static, PIN_13>,
) -> FaceDisplay {
    // SPI @ 62.5 MHz, write-only
    let mut config = SpiConfig::default();
    config.frequency = 62_500_000;
    let spi = Spi::new_blocking_txonly(spi, clk, mosi, config);

    let cs = Output::new(cs, Level::High);
    let dc = Output::new(dc, Level::Low);
    let rst = Output::new(rst, Level::Low);
    let mut backlight = Output::new(bl, Level::Low);

    let spi_dev = ExclusiveDevice::new(spi, cs, NoDelay).unwrap();
    let di = SpiInterface::new(spi_dev, dc, DISPLAY_BUF.init([0; 512]));

    let display = Builder::new(ST7789, di)
        .display_size(DISPLAY_WIDTH as u16, DISPLAY_HEIGHT as u16)
        .invert_colors(ColorInversion::Inverted)
        .reset_pin(rst)
        .init(&mut Delay)
        .unwrap();

    backlight.set_high();
    display
}

/// Engine draw surface over an embedded-graphics target
pub struct DisplayCanvas<'a, D> {
    target: &'a mut D,
}

impl<'a, D> DisplayCanvas<'a, D> {
    pub fn new(target: &'a mut D) -> Self {
        Self { target }
    }
}

impl<'a, D> Canvas for DisplayCanvas<'a, D>
where
    D: DrawTarget<Color = Rgb565>,
{
    fn fill(&mut self, color: Rgb565) -> Result<(), DrawError> {
        self.target
            .clear(color)
            .map_err(|_| DrawError::Communication)
    }

    fn blit(&mut self, bitmap: &Bitmap, origin: Point) -> Result<(), DrawError> {
        let area = Rectangle::new(origin, bitmap.size());
        self.target
            .fill_contiguous(&area, bitmap.pixels().iter().copied())
            .map_err(|_| DrawError::Communication)
    }

    // Mono font raster: the paint's nominal size and anti-alias hint are
    // approximated by the fixed 24 pt face.
    fn draw_text(&mut self, text: &str, anchor: Point, paint: &TextPaint) -> Result<(), DrawError> {
        let style = MonoTextStyle::new(&PROFONT_24_POINT, paint.color);
        let alignment = match paint.align {
            TextAlign::Left => Alignment::Left,
            TextAlign::Center => Alignment::Center,
            TextAlign::Right => Alignment::Right,
        };
        Text::with_alignment(text, anchor, style, alignment)
            .draw(self.target)
            .map(|_| ())
            .map_err(|_| DrawError::Communication)
    }
}
