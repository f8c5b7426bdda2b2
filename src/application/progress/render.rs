//! Rendering of the progress and settings pages

use core::fmt::Write;

use heapless::String;

use crate::application::prelude::*;

use super::datetime::{DateTime, Field};
use super::math::COMPLETE;
use super::range::Endpoint;

/// Bottom zone text once the end has been reached
pub const COMPLETE_TEXT: &str = "100   ";

fn title(field: Field) -> (&'static str, &'static str) {
    match field {
        Field::Year => ("Year ", "YR"),
        Field::Month => ("Month", "MO"),
        Field::Day => ("Day  ", "DA"),
        Field::Hour => ("Hour ", "HR"),
        Field::Minute => ("Minut", "M1"),
    }
}

/// Show `percent_x10000` as `PP.FFFF`, the separator being a colon or
/// decimal point depending on the LCD.
pub fn progress(display: &mut impl SegmentDisplay, percent_x10000: u32) {
    display.display_text_with_fallback(Position::Top, "PROG ", "PR   ");

    if percent_x10000 >= COMPLETE {
        display.display_text(Position::Bottom, COMPLETE_TEXT);
        display.clear_fraction_separator();
    } else {
        let mut buffer: String<8> = String::new();
        // NOTE(ok): below COMPLETE so at most six digits
        write!(buffer, "{:06}", percent_x10000).ok();
        display.display_text(Position::Bottom, &buffer);
        display.set_fraction_separator();
    }
}

/// Show one field of `value` for editing.
///
/// The edited digits blank on odd ticks, except while quick cycling where the
/// value changes too fast for the blink to be readable.
pub fn field(
    display: &mut impl SegmentDisplay,
    value: &DateTime,
    endpoint: Endpoint,
    field: Field,
    subsecond: u8,
    quick_cycle: bool,
) {
    let (text, fallback) = title(field);
    display.display_text_with_fallback(Position::Top, text, fallback);
    display.display_text(
        Position::Seconds,
        match endpoint {
            Endpoint::Start => "St",
            Endpoint::End => "En",
        },
    );

    let mut buffer: String<8> = String::new();
    match field {
        Field::Year => {
            display.clear_colon();
            write!(buffer, "{:4}", value.year()).ok();
        }
        Field::Month | Field::Day => {
            display.clear_colon();
            write!(buffer, "{:02}{:02}", value.month(), value.day()).ok();
        }
        Field::Hour | Field::Minute => {
            display.set_colon();
            write!(buffer, "{:02}{:02}", value.hour(), value.minute()).ok();
        }
    }
    display.display_text(Position::Bottom, &buffer);

    if subsecond % 2 == 1 && !quick_cycle {
        match field {
            // the year occupies both the hours and minutes
            Field::Year => display.display_text(Position::Bottom, "    "),
            Field::Month | Field::Hour => display.display_text(Position::Hours, "  "),
            Field::Day | Field::Minute => display.display_text(Position::Minutes, "  "),
        }
    }
}

/// Tidy up after the settings pages before showing progress
pub fn leave_settings(display: &mut impl SegmentDisplay) {
    display.clear_decimal_if_available();
    display.clear_colon();
}
