//! Test doubles for the host services

use core::convert::Infallible;
use std::collections::BTreeMap;

use embedded_hal::digital::v2::InputPin;
use time::{Date, Month, PrimitiveDateTime};

use crate::application::face_manager::Signal;
use crate::system::display::{LcdType, Line, Position, SegmentDisplay};
use crate::system::input::{Event, EventKind};
use crate::system::storage::{Error, Storage};
use crate::system::{Clock, Host, Movement, System};

pub struct MockHost;

impl Host for MockHost {
    type Clock = MockClock;
    type Movement = MockMovement;
    type Storage = MockStorage;
    type Button = MockButton;
}

pub fn datetime(year: i32, month: u8, day: u8, hour: u8, minute: u8) -> PrimitiveDateTime {
    datetime_hms(year, month, day, hour, minute, 0)
}

pub fn datetime_hms(
    year: i32,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
) -> PrimitiveDateTime {
    let month = Month::try_from(month).unwrap();
    Date::from_calendar_date(year, month, day)
        .unwrap()
        .with_hms(hour, minute, second)
        .unwrap()
}

pub fn system(now: PrimitiveDateTime) -> System<MockHost> {
    System::new(
        MockClock { now },
        MockMovement::default(),
        MockStorage::default(),
        MockButton::default(),
    )
}

pub struct MockClock {
    pub now: PrimitiveDateTime,
}

impl Clock for MockClock {
    fn local_date_time(&self) -> PrimitiveDateTime {
        self.now
    }
}

#[derive(Default)]
pub struct MockMovement {
    pub tick_frequency: Option<u8>,
    pub illuminations: usize,
    pub unhandled: Vec<Event>,
}

impl Movement for MockMovement {
    fn request_tick_frequency(&mut self, hz: u8) {
        self.tick_frequency = Some(hz);
    }

    fn illuminate_led(&mut self) {
        self.illuminations += 1;
    }

    fn default_loop_handler(&mut self, event: Event) -> Option<Signal> {
        self.unhandled.push(event);
        match event.kind {
            EventKind::ModeButtonUp => Some(Signal::Next),
            EventKind::ModeLongPress => Some(Signal::Home),
            _ => None,
        }
    }
}

#[derive(Default)]
pub struct MockStorage {
    pub files: BTreeMap<String, Vec<u8>>,
    pub reads: usize,
    pub writes: usize,
    pub fail_reads: bool,
    pub fail_writes: bool,
}

impl Storage for MockStorage {
    fn read(&mut self, name: &str, buf: &mut [u8]) -> Result<(), Error> {
        self.reads += 1;
        if self.fail_reads {
            return Err(Error::Io);
        }
        let data = self.files.get(name).ok_or(Error::NotFound)?;
        if data.len() < buf.len() {
            return Err(Error::Truncated);
        }
        buf.copy_from_slice(&data[..buf.len()]);
        Ok(())
    }

    fn write(&mut self, name: &str, data: &[u8]) -> Result<(), Error> {
        if self.fail_writes {
            return Err(Error::Io);
        }
        self.writes += 1;
        self.files.insert(name.into(), data.to_vec());
        Ok(())
    }
}

#[derive(Default)]
pub struct MockButton {
    pub held: bool,
}

impl InputPin for MockButton {
    type Error = Infallible;

    fn is_high(&self) -> Result<bool, Self::Error> {
        Ok(self.held)
    }

    fn is_low(&self) -> Result<bool, Self::Error> {
        Ok(!self.held)
    }
}

pub struct MockDisplay {
    pub line: Line,
    pub lcd: LcdType,
    pub colon: bool,
    pub decimal: bool,
    pub sleep_animation: bool,
}

impl MockDisplay {
    pub fn new(lcd: LcdType) -> Self {
        Self {
            line: Line::default(),
            lcd,
            colon: false,
            decimal: false,
            sleep_animation: false,
        }
    }

    pub fn text(&self, position: Position) -> &str {
        self.line.text(position)
    }
}

impl SegmentDisplay for MockDisplay {
    fn lcd_type(&self) -> LcdType {
        self.lcd
    }

    fn display_text(&mut self, position: Position, text: &str) {
        self.line.write(position, text);
    }

    fn set_colon(&mut self) {
        self.colon = true;
    }

    fn clear_colon(&mut self) {
        self.colon = false;
    }

    fn set_decimal(&mut self) {
        self.decimal = true;
    }

    fn clear_decimal(&mut self) {
        self.decimal = false;
    }

    fn clear(&mut self) {
        self.line.clear();
        self.colon = false;
        self.decimal = false;
    }

    fn sleep_animation_is_running(&self) -> bool {
        self.sleep_animation
    }

    fn start_sleep_animation(&mut self, _period_ms: u32) {
        self.sleep_animation = true;
    }
}
