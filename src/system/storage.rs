//! Storage
//!
//! Named byte blobs in the host's non volatile filesystem.

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Error {
    /// No blob with that name
    NotFound,
    /// The blob is shorter than the requested read
    Truncated,
    /// The blob exists but its contents make no sense
    Corrupt,
    /// The underlying medium failed
    Io,
}

pub trait Storage {
    /// Fill `buf` from the start of the blob called `name`
    fn read(&mut self, name: &str, buf: &mut [u8]) -> Result<(), Error>;
    /// Replace the blob called `name` with `data`, creating it if needed
    fn write(&mut self, name: &str, data: &[u8]) -> Result<(), Error>;
}
