//! Seven segment canvas
//!
//! Renders the segment display line onto any monochrome `DrawTarget`, for
//! hosts that drive a pixel panel rather than a segment LCD.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};

use crate::system::display::{LcdType, Line, Position, SegmentDisplay, LINE_WIDTH};

const WIDTH: i32 = 8;
const HEIGHT: i32 = 15;
const THICKNESS: i32 = 2;
const SPACE: i32 = 2;
/// Distance between the left edges of two neighbouring cells
const PITCH: i32 = WIDTH + SPACE;
/// Extra room left for the colon and decimal point
const SEPARATOR: i32 = THICKNESS + SPACE;
const BOTTOM_Y: i32 = HEIGHT + 2 * SPACE;

fn s(s: u8) -> u8 {
    1 << s
}

/// Segments are numbered top, upper left, upper right, middle, lower left,
/// lower right, bottom. Letters are drawn in whichever case reads best.
fn segments(c: u8) -> u8 {
    match c.to_ascii_lowercase() {
        b'0' => s(0) | s(1) | s(2) | s(4) | s(5) | s(6),
        b'1' => s(2) | s(5),
        b'2' => s(0) | s(2) | s(3) | s(4) | s(6),
        b'3' => s(0) | s(2) | s(3) | s(5) | s(6),
        b'4' => s(1) | s(2) | s(3) | s(5),
        b'5' | b's' => s(0) | s(1) | s(3) | s(5) | s(6),
        b'6' => s(0) | s(1) | s(3) | s(4) | s(5) | s(6),
        b'7' => s(0) | s(2) | s(5),
        b'8' => s(0) | s(1) | s(2) | s(3) | s(4) | s(5) | s(6),
        b'9' => s(0) | s(1) | s(2) | s(3) | s(5) | s(6),
        b'a' => s(0) | s(1) | s(2) | s(3) | s(4) | s(5),
        b'd' => s(2) | s(3) | s(4) | s(5) | s(6),
        b'e' => s(0) | s(1) | s(3) | s(4) | s(6),
        b'g' => s(0) | s(1) | s(4) | s(5) | s(6),
        b'h' => s(1) | s(3) | s(4) | s(5),
        b'i' => s(4),
        b'm' => s(0) | s(1) | s(2) | s(4) | s(5),
        b'n' => s(3) | s(4) | s(5),
        b'o' => s(3) | s(4) | s(5) | s(6),
        b'p' => s(0) | s(1) | s(2) | s(3) | s(4),
        b'r' => s(3) | s(4),
        b't' => s(1) | s(3) | s(4) | s(6),
        b'u' => s(4) | s(5) | s(6),
        b'y' => s(1) | s(2) | s(3) | s(5) | s(6),
        b'-' => s(3),
        _ => 0,
    }
}

/// Top left corner of a cell. The bottom row leaves a separator gap after
/// the hours and after the minutes.
fn cell_origin(cell: usize) -> Point {
    let (bottom, _) = Position::Bottom.span();
    if cell < bottom {
        return Point::new(cell as i32 * PITCH, 0);
    }
    let col = (cell - bottom) as i32;
    let gaps = col / 2;
    Point::new(col * PITCH + gaps * SEPARATOR, BOTTOM_Y)
}

/// Left edge of the separator gap between the hours and minutes
fn separator_origin() -> Point {
    let (minutes, _) = Position::Minutes.span();
    cell_origin(minutes) - Point::new(SEPARATOR, 0)
}

/// A `SegmentDisplay` drawn with rectangles onto a pixel display
pub struct SegmentCanvas<D> {
    target: D,
    lcd: LcdType,
    line: Line,
    colon: bool,
    decimal: bool,
    sleep_animation: Option<u32>,
}

impl<D> SegmentCanvas<D>
where
    D: DrawTarget<Color = BinaryColor>,
{
    pub fn new(target: D, lcd: LcdType) -> Self {
        Self {
            target,
            lcd,
            line: Line::default(),
            colon: false,
            decimal: false,
            sleep_animation: None,
        }
    }

    pub fn target(&self) -> &D {
        &self.target
    }

    pub fn line(&self) -> &Line {
        &self.line
    }

    /// Period of the running sleep animation
    pub fn sleep_animation(&self) -> Option<u32> {
        self.sleep_animation
    }

    pub fn release(self) -> D {
        self.target
    }

    fn refresh(&mut self) {
        if self.redraw().is_err() {
            warn!("Failed to draw the segment canvas");
        }
    }

    fn redraw(&mut self) -> Result<(), D::Error> {
        self.target.clear(BinaryColor::Off)?;
        let cells: [u8; LINE_WIDTH] = *self.line.cells();
        for (cell, c) in cells.iter().enumerate() {
            self.glyph(cell_origin(cell), segments(*c))?;
        }

        let origin = separator_origin();
        let t = THICKNESS;
        if self.colon {
            let intern = (HEIGHT - 3 * t) / 2;
            let h1 = t + intern / 2 - t / 2;
            let h2 = HEIGHT - t - intern / 2 - t / 2;
            self.draw_rect(origin, 0, h1, t - 1, h1 + t - 1)?;
            self.draw_rect(origin, 0, h2, t - 1, h2 + t - 1)?;
        }
        if self.decimal {
            self.draw_rect(origin, 0, HEIGHT - t, t - 1, HEIGHT - 1)?;
        }
        Ok(())
    }

    fn glyph(&mut self, origin: Point, segments: u8) -> Result<(), D::Error> {
        let (h, w, t) = (HEIGHT, WIDTH, THICKNESS);
        let h2 = (h - 3 * t) / 2 + t;
        if segments & 1 != 0 {
            self.draw_rect(origin, 0, 0, w - 1, t - 1)?;
        }
        if segments & (1 << 1) != 0 {
            self.draw_rect(origin, 0, 0, t - 1, h2 + t - 1)?;
        }
        if segments & (1 << 2) != 0 {
            self.draw_rect(origin, w - t, 0, w - 1, h2 + t - 1)?;
        }
        if segments & (1 << 3) != 0 {
            self.draw_rect(origin, t, h2, w - t - 1, h2 + t - 1)?;
        }
        if segments & (1 << 4) != 0 {
            self.draw_rect(origin, 0, h2, t - 1, h - 1)?;
        }
        if segments & (1 << 5) != 0 {
            self.draw_rect(origin, w - t, h2, w - 1, h - 1)?;
        }
        if segments & (1 << 6) != 0 {
            self.draw_rect(origin, 0, h - t, w - 1, h - 1)?;
        }
        Ok(())
    }

    fn draw_rect(&mut self, origin: Point, x1: i32, y1: i32, x2: i32, y2: i32) -> Result<(), D::Error> {
        Rectangle::with_corners(origin + Point::new(x1, y1), origin + Point::new(x2, y2))
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(&mut self.target)
    }
}

impl<D> SegmentDisplay for SegmentCanvas<D>
where
    D: DrawTarget<Color = BinaryColor>,
{
    fn lcd_type(&self) -> LcdType {
        self.lcd
    }

    fn display_text(&mut self, position: Position, text: &str) {
        self.line.write(position, text);
        self.refresh();
    }

    fn set_colon(&mut self) {
        self.colon = true;
        self.refresh();
    }

    fn clear_colon(&mut self) {
        self.colon = false;
        self.refresh();
    }

    fn set_decimal(&mut self) {
        self.decimal = true;
        self.refresh();
    }

    fn clear_decimal(&mut self) {
        self.decimal = false;
        self.refresh();
    }

    fn clear(&mut self) {
        self.line.clear();
        self.colon = false;
        self.decimal = false;
        self.refresh();
    }

    fn sleep_animation_is_running(&self) -> bool {
        self.sleep_animation.is_some()
    }

    fn start_sleep_animation(&mut self, period_ms: u32) {
        self.sleep_animation = Some(period_ms);
    }
}
