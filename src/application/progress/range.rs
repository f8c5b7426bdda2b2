//! The start and end of the tracked period

use super::datetime::DateTime;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    End,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DateRange {
    pub start: DateTime,
    pub end: DateTime,
}

impl DateRange {
    pub fn new(start: DateTime, end: DateTime) -> Self {
        Self { start, end }
    }

    /// The whole of `year`, used when nothing has been configured yet
    pub fn year(year: u16) -> Self {
        Self {
            start: DateTime::start_of_year(year),
            end: DateTime::end_of_year(year),
        }
    }

    pub fn get(&self, endpoint: Endpoint) -> &DateTime {
        match endpoint {
            Endpoint::Start => &self.start,
            Endpoint::End => &self.end,
        }
    }

    pub fn get_mut(&mut self, endpoint: Endpoint) -> &mut DateTime {
        match endpoint {
            Endpoint::Start => &mut self.start,
            Endpoint::End => &mut self.end,
        }
    }

    /// Pull the end back up to the start if it lies before it. Returns true
    /// if the end moved.
    pub fn clamp_end(&mut self) -> bool {
        if self.end < self.start {
            self.end = self.start;
            true
        } else {
            false
        }
    }
}
