//! Persistence
//!
//! Each face instance keeps its range in a record of its own, named after
//! the face index. The record is two little endian packed words, start then
//! end.

use core::fmt::Write;

use heapless::String;

use crate::application::FaceIndex;
use crate::system::storage::{Error, Storage};

use super::datetime::DateTime;
use super::range::DateRange;

pub const RECORD_LEN: usize = 8;

/// `progNNN.u64`
pub type RecordName = String<12>;

pub fn record_name(index: FaceIndex) -> RecordName {
    let mut name = RecordName::new();
    // NOTE(ok): at most 11 characters for a u8 index
    write!(name, "prog{:03}.u64", index).ok();
    name
}

pub fn encode(range: &DateRange) -> [u8; RECORD_LEN] {
    let mut record = [0u8; RECORD_LEN];
    record[..4].copy_from_slice(&range.start.to_bits().to_le_bytes());
    record[4..].copy_from_slice(&range.end.to_bits().to_le_bytes());
    record
}

pub fn decode(record: &[u8; RECORD_LEN]) -> Result<DateRange, Error> {
    let word = |offset: usize| {
        u32::from_le_bytes([
            record[offset],
            record[offset + 1],
            record[offset + 2],
            record[offset + 3],
        ])
    };
    let start = DateTime::from_bits(word(0)).map_err(|_| Error::Corrupt)?;
    let end = DateTime::from_bits(word(4)).map_err(|_| Error::Corrupt)?;
    Ok(DateRange::new(start, end))
}

fn read_record(storage: &mut impl Storage, name: &str) -> Result<[u8; RECORD_LEN], Error> {
    let mut record = [0u8; RECORD_LEN];
    storage.read(name, &mut record)?;
    Ok(record)
}

/// Load the range for face `index`. Returns the whole of `current_year` and
/// false when there is no usable record.
pub fn load(storage: &mut impl Storage, index: FaceIndex, current_year: u16) -> (DateRange, bool) {
    let name = record_name(index);
    match read_record(storage, &name).and_then(|record| decode(&record)) {
        Ok(range) => {
            info!("Loaded {}: {:?}", name, range);
            (range, true)
        }
        Err(Error::NotFound) => {
            info!("No {}, starting with {}", name, current_year);
            (DateRange::year(current_year), false)
        }
        Err(e) => {
            warn!("Unable to load {}: {:?}, starting with {}", name, e, current_year);
            (DateRange::year(current_year), false)
        }
    }
}

/// Store the range for face `index`, skipping the write when the stored
/// record already matches. Returns whether anything was written.
pub fn save(storage: &mut impl Storage, index: FaceIndex, range: &DateRange) -> Result<bool, Error> {
    let name = record_name(index);
    let record = encode(range);

    match read_record(storage, &name) {
        Ok(stored) if stored == record => {
            debug!("{} unchanged, skipping write", name);
            return Ok(false);
        }
        Ok(_) | Err(Error::NotFound) => {}
        Err(e) => warn!("Unable to read back {}: {:?}", name, e),
    }

    storage.write(&name, &record)?;
    info!("Saved {}: {:?}", name, range);
    Ok(true)
}
