//! Date time
//!
//! A minute resolution local date and time that packs into a single 32 bit
//! word for storage.

use core::cmp::Ordering;

use time::{Month, PrimitiveDateTime};

pub const YEAR_MAX: u16 = 4095;
/// How far either side of the current year the year field may be set
pub const YEAR_WINDOW: u16 = 100;

const MINUTES_PER_DAY: i64 = 24 * 60;

const MINUTE_SHIFT: u32 = 0;
const HOUR_SHIFT: u32 = 6;
const DAY_SHIFT: u32 = 11;
const MONTH_SHIFT: u32 = 16;
const YEAR_SHIFT: u32 = 20;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Error {
    InvalidYear(u16),
    InvalidMonth(u8),
    InvalidDay(u8),
    InvalidHour(u8),
    InvalidMinute(u8),
}

/// The editable components of a [`DateTime`], in editing order
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Field {
    Year,
    Month,
    Day,
    Hour,
    Minute,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Year,
        Field::Month,
        Field::Day,
        Field::Hour,
        Field::Minute,
    ];

    /// The following field, wrapping from minute back to year
    pub fn next(self) -> Self {
        match self {
            Field::Year => Field::Month,
            Field::Month => Field::Day,
            Field::Day => Field::Hour,
            Field::Hour => Field::Minute,
            Field::Minute => Field::Year,
        }
    }
}

/// Number of days in `month` of `year`
pub fn days_in_month(year: u16, month: u8) -> u8 {
    match Month::try_from(month) {
        Ok(month) => month.length(i32::from(year)),
        Err(_) => 31,
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct DateTime {
    year: u16,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
}

impl DateTime {
    pub fn new(year: u16, month: u8, day: u8, hour: u8, minute: u8) -> Result<Self, Error> {
        if year > YEAR_MAX {
            return Err(Error::InvalidYear(year));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::InvalidMonth(month));
        }
        if day == 0 || day > days_in_month(year, month) {
            return Err(Error::InvalidDay(day));
        }
        if hour > 23 {
            return Err(Error::InvalidHour(hour));
        }
        if minute > 59 {
            return Err(Error::InvalidMinute(minute));
        }
        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
        })
    }

    /// Midnight on the first of January
    pub fn start_of_year(year: u16) -> Self {
        Self {
            year: year.min(YEAR_MAX),
            month: 1,
            day: 1,
            hour: 0,
            minute: 0,
        }
    }

    /// The last minute of the thirty first of December
    pub fn end_of_year(year: u16) -> Self {
        Self {
            year: year.min(YEAR_MAX),
            month: 12,
            day: 31,
            hour: 23,
            minute: 59,
        }
    }

    pub fn year(&self) -> u16 {
        self.year
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Minutes since the start of the Julian period.
    ///
    /// Uses the integer Julian Day Number formula for the proleptic Gregorian
    /// calendar, see https://en.wikipedia.org/wiki/Julian_day#Julian_day_number_calculation
    pub fn to_absolute_minutes(&self) -> i64 {
        let y = i64::from(self.year);
        let m = i64::from(self.month);
        let d = i64::from(self.day);
        let a = (m - 14) / 12; // -1 for January and February, 0 otherwise
        let julian_day = (1461 * (y + 4800 + a)) / 4 + (367 * (m - 2 - 12 * a)) / 12
            - (3 * ((y + 4900 + a) / 100)) / 4
            + d
            - 32075;
        julian_day * MINUTES_PER_DAY + i64::from(self.hour) * 60 + i64::from(self.minute)
    }

    pub fn compare(&self, other: &DateTime) -> Ordering {
        (self.to_absolute_minutes() - other.to_absolute_minutes()).cmp(&0)
    }

    /// Pack into `{minute:6, hour:5, day:5, month:4, year:12}`, least
    /// significant bit first
    pub fn to_bits(&self) -> u32 {
        u32::from(self.minute) << MINUTE_SHIFT
            | u32::from(self.hour) << HOUR_SHIFT
            | u32::from(self.day) << DAY_SHIFT
            | u32::from(self.month) << MONTH_SHIFT
            | u32::from(self.year) << YEAR_SHIFT
    }

    pub fn from_bits(bits: u32) -> Result<Self, Error> {
        let field = |shift: u32, width: u32| (bits >> shift) & ((1 << width) - 1);
        Self::new(
            field(YEAR_SHIFT, 12) as u16,
            field(MONTH_SHIFT, 4) as u8,
            field(DAY_SHIFT, 5) as u8,
            field(HOUR_SHIFT, 5) as u8,
            field(MINUTE_SHIFT, 6) as u8,
        )
    }

    /// Step `field` forward by one, wrapping within its range without
    /// carrying into the next field.
    ///
    /// The year wraps to `current_year - 100` once it passes
    /// `current_year + 100`. Changing the year or month pulls the day back
    /// into the new month if needed.
    pub fn increment(&mut self, field: Field, current_year: u16) {
        match field {
            Field::Year => {
                let year = self.year + 1;
                self.year = if year > current_year.saturating_add(YEAR_WINDOW) || year > YEAR_MAX {
                    current_year.saturating_sub(YEAR_WINDOW).min(YEAR_MAX)
                } else {
                    year
                };
                self.clamp_day();
            }
            Field::Month => {
                self.month = self.month % 12 + 1;
                self.clamp_day();
            }
            Field::Day => {
                self.day = self.day % days_in_month(self.year, self.month) + 1;
            }
            Field::Hour => {
                self.hour = (self.hour + 1) % 24;
            }
            Field::Minute => {
                self.minute = (self.minute + 1) % 60;
            }
        }
    }

    fn clamp_day(&mut self) {
        self.day = self.day.min(days_in_month(self.year, self.month));
    }
}

impl Ord for DateTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl PartialOrd for DateTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<PrimitiveDateTime> for DateTime {
    /// Seconds are dropped and the year is clamped into the storable range
    fn from(dt: PrimitiveDateTime) -> Self {
        let year = dt.year().clamp(0, i32::from(YEAR_MAX)) as u16;
        let month = u8::from(dt.month());
        Self {
            year,
            month,
            day: dt.day().min(days_in_month(year, month)),
            hour: dt.hour(),
            minute: dt.minute(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use time::Date;

    fn dt(year: u16, month: u8, day: u8, hour: u8, minute: u8) -> DateTime {
        DateTime::new(year, month, day, hour, minute).unwrap()
    }

    #[test]
    fn julian_day_matches_time_crate() {
        for year in [0u16, 1, 1582, 1899, 1900, 1970, 2000, 2024, 2025, 2100, 4095] {
            for month in 1..=12u8 {
                for day in [1, days_in_month(year, month)] {
                    let date =
                        Date::from_calendar_date(i32::from(year), Month::try_from(month).unwrap(), day)
                            .unwrap();
                    let expected = i64::from(date.to_julian_day()) * MINUTES_PER_DAY;
                    assert_eq!(dt(year, month, day, 0, 0).to_absolute_minutes(), expected);
                }
            }
        }
    }

    #[test]
    fn known_julian_day() {
        assert_eq!(
            dt(2000, 1, 1, 0, 0).to_absolute_minutes(),
            2_451_545 * MINUTES_PER_DAY
        );
    }

    #[test]
    fn consecutive_minutes_differ_by_one() {
        // walk minute by minute across a leap day and a year boundary
        let mut prev = dt(2024, 2, 28, 23, 58);
        let mut count = 0;
        while count < 3 * 24 * 60 {
            let mut next = prev;
            next.increment(Field::Minute, 2024);
            if next.minute() == 0 {
                next.increment(Field::Hour, 2024);
                if next.hour() == 0 {
                    next.increment(Field::Day, 2024);
                    if next.day() == 1 {
                        next.increment(Field::Month, 2024);
                    }
                }
            }
            assert_eq!(next.to_absolute_minutes(), prev.to_absolute_minutes() + 1);
            prev = next;
            count += 1;
        }
        assert_eq!(prev, dt(2024, 3, 2, 23, 58));

        let new_years_eve = dt(2024, 12, 31, 23, 59);
        let new_year = dt(2025, 1, 1, 0, 0);
        assert_eq!(
            new_year.to_absolute_minutes() - new_years_eve.to_absolute_minutes(),
            1
        );
    }

    #[test]
    fn ordering() {
        let a = dt(2025, 6, 1, 0, 0);
        let b = dt(2025, 6, 1, 0, 1);
        assert_eq!(a.compare(&b), Ordering::Less);
        assert_eq!(b.compare(&a), Ordering::Greater);
        assert_eq!(a.compare(&a), Ordering::Equal);
        assert!(dt(2024, 12, 31, 23, 59) < dt(2025, 1, 1, 0, 0));
    }

    #[test]
    fn packed_layout() {
        let d = dt(2025, 7, 2, 12, 34);
        let bits = d.to_bits();
        assert_eq!(bits & 0x3f, 34);
        assert_eq!((bits >> 6) & 0x1f, 12);
        assert_eq!((bits >> 11) & 0x1f, 2);
        assert_eq!((bits >> 16) & 0xf, 7);
        assert_eq!(bits >> 20, 2025);
        assert_eq!(DateTime::from_bits(bits), Ok(d));
    }

    #[test]
    fn from_bits_rejects_invalid_words() {
        assert_eq!(DateTime::from_bits(0), Err(Error::InvalidMonth(0)));
        // 2025-02-30
        let bits = 2025 << 20 | 2 << 16 | 30 << 11;
        assert_eq!(DateTime::from_bits(bits), Err(Error::InvalidDay(30)));
        // minute 63
        let bits = 2025 << 20 | 1 << 16 | 1 << 11 | 63;
        assert_eq!(DateTime::from_bits(bits), Err(Error::InvalidMinute(63)));
    }

    #[test]
    fn new_rejects_out_of_range() {
        assert_eq!(DateTime::new(4096, 1, 1, 0, 0), Err(Error::InvalidYear(4096)));
        assert_eq!(DateTime::new(2025, 13, 1, 0, 0), Err(Error::InvalidMonth(13)));
        assert_eq!(DateTime::new(2023, 2, 29, 0, 0), Err(Error::InvalidDay(29)));
        assert_eq!(DateTime::new(2025, 1, 1, 24, 0), Err(Error::InvalidHour(24)));
        assert!(DateTime::new(2024, 2, 29, 23, 59).is_ok());
    }

    #[test]
    fn month_wraps() {
        let mut d = dt(2025, 12, 15, 0, 0);
        d.increment(Field::Month, 2025);
        assert_eq!(d.month(), 1);
        assert_eq!(d.year(), 2025);
    }

    #[test]
    fn minute_wraps_without_carry() {
        let mut d = dt(2025, 1, 1, 5, 59);
        d.increment(Field::Minute, 2025);
        assert_eq!(d.minute(), 0);
        assert_eq!(d.hour(), 5);
    }

    #[test]
    fn hour_wraps_without_carry() {
        let mut d = dt(2025, 1, 1, 23, 0);
        d.increment(Field::Hour, 2025);
        assert_eq!(d.hour(), 0);
        assert_eq!(d.day(), 1);
    }

    #[test]
    fn day_wraps_at_month_length() {
        let mut d = dt(2025, 2, 28, 0, 0);
        d.increment(Field::Day, 2025);
        assert_eq!(d.day(), 1);
        assert_eq!(d.month(), 2);

        let mut d = dt(2024, 2, 28, 0, 0);
        d.increment(Field::Day, 2024);
        assert_eq!(d.day(), 29);
    }

    #[test]
    fn month_change_keeps_day_valid() {
        let mut d = dt(2025, 1, 31, 0, 0);
        d.increment(Field::Month, 2025);
        assert_eq!((d.month(), d.day()), (2, 28));
        assert!(DateTime::from_bits(d.to_bits()).is_ok());
    }

    #[test]
    fn year_change_keeps_day_valid() {
        let mut d = dt(2024, 2, 29, 0, 0);
        d.increment(Field::Year, 2024);
        assert_eq!((d.year(), d.month(), d.day()), (2025, 2, 28));
    }

    #[test]
    fn year_wraps_around_the_window() {
        let mut d = dt(2125, 6, 1, 0, 0);
        d.increment(Field::Year, 2025);
        assert_eq!(d.year(), 1925);

        let mut d = dt(2124, 6, 1, 0, 0);
        d.increment(Field::Year, 2025);
        assert_eq!(d.year(), 2125);
    }

    #[test]
    fn year_never_leaves_storable_range() {
        let mut d = dt(YEAR_MAX, 1, 1, 0, 0);
        d.increment(Field::Year, YEAR_MAX);
        assert_eq!(d.year(), YEAR_MAX - YEAR_WINDOW);

        let mut d = dt(49, 1, 1, 0, 0);
        d.increment(Field::Year, 10);
        assert_eq!(d.year(), 50);
        let mut d = dt(110, 1, 1, 0, 0);
        d.increment(Field::Year, 10);
        assert_eq!(d.year(), 0);
    }

    #[test]
    fn field_order_wraps() {
        let mut field = Field::Year;
        for expected in Field::ALL.iter().skip(1) {
            field = field.next();
            assert_eq!(field, *expected);
        }
        assert_eq!(field.next(), Field::Year);
    }

    #[test]
    fn from_primitive() {
        let now = Date::from_calendar_date(2025, Month::July, 2)
            .unwrap()
            .with_hms(12, 30, 45)
            .unwrap();
        assert_eq!(DateTime::from(now), dt(2025, 7, 2, 12, 30));
    }
}
