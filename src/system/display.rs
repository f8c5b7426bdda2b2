//! Segment display
//!
//! The watch LCD is a single line of character cells split into zones. Faces
//! write text into a zone, writing only touches as many cells as the text has
//! characters so a later write can blank part of a zone without redrawing the
//! rest.
//!
//! ```text
//!  Top             Bottom
//! [0 1 2 3 4] [5 6 | 7 8 | 9 10]
//!              Hours Minutes Seconds
//! ```

/// Number of character cells on the display
pub const LINE_WIDTH: usize = 11;

/// The two LCD variants shipped with the watch
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LcdType {
    /// Original LCD, limited character set and a colon but no decimal point
    Classic,
    /// Newer LCD, full labels and a decimal point
    Custom,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Position {
    Top,
    Bottom,
    Hours,
    Minutes,
    Seconds,
}

impl Position {
    /// First cell and cell count of the zone
    pub const fn span(self) -> (usize, usize) {
        match self {
            Position::Top => (0, 5),
            Position::Bottom => (5, 6),
            Position::Hours => (5, 2),
            Position::Minutes => (7, 2),
            Position::Seconds => (9, 2),
        }
    }
}

pub trait SegmentDisplay {
    fn lcd_type(&self) -> LcdType;

    fn display_text(&mut self, position: Position, text: &str);

    /// Show `text` on the custom LCD and `fallback` on the classic one
    fn display_text_with_fallback(&mut self, position: Position, text: &str, fallback: &str) {
        match self.lcd_type() {
            LcdType::Custom => self.display_text(position, text),
            LcdType::Classic => self.display_text(position, fallback),
        }
    }

    fn set_colon(&mut self);
    fn clear_colon(&mut self);
    fn set_decimal(&mut self);
    fn clear_decimal(&mut self);

    fn clear_decimal_if_available(&mut self) {
        if self.lcd_type() == LcdType::Custom {
            self.clear_decimal();
        }
    }

    /// Show the separator between whole and fractional digits of the bottom zone
    fn set_fraction_separator(&mut self) {
        match self.lcd_type() {
            LcdType::Custom => self.set_decimal(),
            LcdType::Classic => self.set_colon(),
        }
    }

    fn clear_fraction_separator(&mut self) {
        match self.lcd_type() {
            LcdType::Custom => self.clear_decimal(),
            LcdType::Classic => self.clear_colon(),
        }
    }

    /// Blank every cell and both separators
    fn clear(&mut self);

    fn sleep_animation_is_running(&self) -> bool;
    fn start_sleep_animation(&mut self, period_ms: u32);
}

/// Character cells backing a display, shared by display implementations
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Line {
    cells: [u8; LINE_WIDTH],
}

impl Default for Line {
    fn default() -> Self {
        Self {
            cells: [b' '; LINE_WIDTH],
        }
    }
}

impl Line {
    /// Write `text` into the zone, truncating at the end of the zone
    pub fn write(&mut self, position: Position, text: &str) {
        let (start, len) = position.span();
        for (cell, byte) in self.cells[start..start + len].iter_mut().zip(text.bytes()) {
            // cells hold single byte glyphs
            *cell = if byte.is_ascii() { byte } else { b'?' };
        }
    }

    pub fn text(&self, position: Position) -> &str {
        let (start, len) = position.span();
        core::str::from_utf8(&self.cells[start..start + len]).unwrap_or("")
    }

    pub fn cells(&self) -> &[u8; LINE_WIDTH] {
        &self.cells
    }

    pub fn clear(&mut self) {
        self.cells = [b' '; LINE_WIDTH];
    }
}
