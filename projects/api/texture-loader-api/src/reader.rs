//! Bounds-checked random-access reads over a borrowed byte buffer.

use core::mem::size_of;
use endian_writer::{EndianReader, LittleEndianReader};

/// Non-owning view over a byte buffer with bounds-checked primitive reads.
///
/// Container parsers read their headers and length prefixes through this
/// type. All primitive reads are little-endian and every access is validated
/// against the buffer length first; out-of-bounds requests yield [`None`]
/// rather than touching memory.
///
/// The reader is `Copy` and borrows the buffer for `'a`, so slices handed out
/// by [`bytes_at`](Self::bytes_at) outlive the reader itself and can back
/// zero-copy structures such as mip level spans.
#[derive(Debug, Clone, Copy)]
pub struct DataReader<'a> {
    data: &'a [u8],
}

impl<'a> DataReader<'a> {
    /// Wraps `data` in a reader.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    /// The underlying buffer.
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Total buffer length in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the buffer holds no bytes at all.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Reads a little-endian `u32` starting at `offset`.
    ///
    /// Returns [`None`] if the four bytes would extend past the buffer end.
    pub fn read_u32_at(&self, offset: usize) -> Option<u32> {
        let end = offset.checked_add(size_of::<u32>())?;
        if end > self.data.len() {
            return None;
        }

        // SAFETY: offset + 4 <= data.len() was checked above, so the raw read
        // stays within the borrowed buffer.
        let mut reader = unsafe { LittleEndianReader::new(self.data.as_ptr()) };
        Some(unsafe { reader.read_u32_at(offset as isize) })
    }

    /// Borrows `length` bytes starting at `offset`.
    ///
    /// Returns [`None`] if the range extends past the buffer end.
    pub fn bytes_at(&self, offset: usize, length: usize) -> Option<&'a [u8]> {
        let end = offset.checked_add(length)?;
        self.data.get(offset..end)
    }

    /// A reader restricted to the first `length` bytes of the buffer.
    ///
    /// Returns [`None`] if the buffer is shorter than `length`. Format
    /// recognition runs on such a prefix so it cannot read past the fixed
    /// header even by accident.
    pub fn prefix(&self, length: usize) -> Option<DataReader<'a>> {
        Some(Self::new(self.data.get(..length)?))
    }
}
