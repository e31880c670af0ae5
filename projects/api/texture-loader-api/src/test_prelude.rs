//! Shared fixtures for this crate's tests: a minimal single-level container
//! format plus a recording upload target.

use crate::error::{TextureLoaderError, TextureLoaderResult};
use crate::reader::DataReader;
use crate::traits::{TextureLoader, TextureLoaderFactory, TextureUploadTarget};
use alloc::boxed::Box;
use alloc::vec;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicUsize, Ordering};
use texture_loader_common::{TextureDescriptor, TextureFormat, TextureRangeDesc};

/// Magic byte opening every fixture container.
pub const FIXTURE_MAGIC: u8 = 0x7A;

/// Fixed header length of the fixture format.
pub const FIXTURE_HEADER_LENGTH: usize = 8;

/// Factory for a minimal container format: one magic byte, 7 bytes of
/// padding, then a single-level payload running to the end of the buffer.
#[derive(Default)]
pub struct FixtureLoaderFactory {
    /// Reader length observed by the last `can_create_from_header` call.
    pub seen_header_len: AtomicUsize,
}

impl FixtureLoaderFactory {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TextureLoaderFactory for FixtureLoaderFactory {
    fn header_length(&self) -> usize {
        FIXTURE_HEADER_LENGTH
    }

    fn can_create_from_header(&self, header: DataReader<'_>) -> TextureLoaderResult<()> {
        self.seen_header_len.store(header.len(), Ordering::Relaxed);
        match header.bytes_at(0, 1) {
            Some([FIXTURE_MAGIC]) => Ok(()),
            _ => Err(TextureLoaderError::IncorrectIdentifier),
        }
    }

    fn create_loader<'a>(
        &self,
        reader: DataReader<'a>,
    ) -> TextureLoaderResult<Box<dyn TextureLoader + 'a>> {
        let payload_len = reader.len().saturating_sub(FIXTURE_HEADER_LENGTH);
        let payload = reader
            .bytes_at(FIXTURE_HEADER_LENGTH, payload_len)
            .ok_or(TextureLoaderError::NotEnoughData {
                required: FIXTURE_HEADER_LENGTH,
                actual: reader.len(),
            })?;
        let range = TextureRangeDesc::new_2d(payload.len().max(1), 1);
        let descriptor = TextureDescriptor::from_range(TextureFormat::R8Unorm, &range);
        Ok(Box::new(FixtureLoader {
            descriptor,
            payload,
        }))
    }
}

/// Loader produced by [`FixtureLoaderFactory`]: one span covering the payload.
pub struct FixtureLoader<'a> {
    pub descriptor: TextureDescriptor,
    pub payload: &'a [u8],
}

impl TextureLoader for FixtureLoader<'_> {
    fn descriptor(&self) -> &TextureDescriptor {
        &self.descriptor
    }

    fn can_provide_source_data(&self) -> bool {
        true
    }

    fn upload_to(&self, target: &mut dyn TextureUploadTarget) -> TextureLoaderResult<()> {
        target.upload(&self.descriptor.full_range().at_mip_level(0), self.payload)
    }

    fn copy_to_buffer(&self, destination: &mut [u8]) -> TextureLoaderResult<()> {
        if self.payload.len() > destination.len() {
            return Err(TextureLoaderError::DestinationTooSmall {
                required: self.payload.len(),
                actual: destination.len(),
            });
        }
        destination[..self.payload.len()].copy_from_slice(self.payload);
        Ok(())
    }
}

/// Upload target recording every region write it accepts.
///
/// Optionally fails the write for one configured mip level, for exercising
/// error propagation out of `upload_to`.
#[derive(Default)]
pub struct RecordingUploadTarget {
    /// Accepted writes as `(range, byte count)` pairs, in call order.
    pub uploads: Vec<(TextureRangeDesc, usize)>,
    /// Mip level whose write is rejected, if any.
    pub fail_at_level: Option<usize>,
}

impl RecordingUploadTarget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_at(mip_level: usize) -> Self {
        Self {
            uploads: Vec::new(),
            fail_at_level: Some(mip_level),
        }
    }
}

impl TextureUploadTarget for RecordingUploadTarget {
    fn upload(&mut self, range: &TextureRangeDesc, data: &[u8]) -> TextureLoaderResult<()> {
        if self.fail_at_level == Some(range.mip_level) {
            return Err(TextureLoaderError::RegionWriteFailed {
                mip_level: range.mip_level,
            });
        }
        self.uploads.push((*range, data.len()));
        Ok(())
    }
}

/// Builds a valid fixture container carrying `payload`.
pub fn create_fixture_container(payload: &[u8]) -> Vec<u8> {
    let mut data = vec![0u8; FIXTURE_HEADER_LENGTH + payload.len()];
    data[0] = FIXTURE_MAGIC;
    data[FIXTURE_HEADER_LENGTH..].copy_from_slice(payload);
    data
}
