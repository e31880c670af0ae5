//! Zero-copy loader over a validated KTX v1 container.

use alloc::vec::Vec;
use texture_loader_api::{
    TextureLoader, TextureLoaderError, TextureLoaderResult, TextureUploadTarget,
};
use texture_loader_common::TextureDescriptor;

/// One mip level's bytes inside the source buffer.
///
/// `offset` locates the bytes within the original container (after that
/// level's 4-byte length prefix); the slice borrows them directly. For cube
/// textures the span covers all six faces of the level, face-major.
#[derive(Debug, Clone, Copy)]
pub struct MipLevelSpan<'a> {
    offset: usize,
    data: &'a [u8],
}

impl<'a> MipLevelSpan<'a> {
    pub(crate) fn new(offset: usize, data: &'a [u8]) -> Self {
        Self { offset, data }
    }

    /// Byte offset of this level's data within the source buffer.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The level's bytes, borrowed from the source buffer.
    pub fn bytes(&self) -> &'a [u8] {
        self.data
    }

    /// Length of the level's data in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the span holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Loader for one parsed KTX v1 buffer.
///
/// Holds the derived [`TextureDescriptor`] and one [`MipLevelSpan`] per
/// stored level, base level first. The buffer the spans borrow from must
/// outlive the loader; nothing is copied at construction time.
#[derive(Debug)]
pub struct Ktx1TextureLoader<'a> {
    descriptor: TextureDescriptor,
    mip_spans: Vec<MipLevelSpan<'a>>,
    generate_mipmaps: bool,
}

impl<'a> Ktx1TextureLoader<'a> {
    pub(crate) fn new(
        descriptor: TextureDescriptor,
        mip_spans: Vec<MipLevelSpan<'a>>,
        generate_mipmaps: bool,
    ) -> Self {
        Self {
            descriptor,
            mip_spans,
            generate_mipmaps,
        }
    }

    /// The stored mip levels, base (largest) level first.
    pub fn mip_level_spans(&self) -> &[MipLevelSpan<'a>] {
        &self.mip_spans
    }
}

impl TextureLoader for Ktx1TextureLoader<'_> {
    fn descriptor(&self) -> &TextureDescriptor {
        &self.descriptor
    }

    /// KTX v1 containers always carry pixel bytes.
    fn can_provide_source_data(&self) -> bool {
        true
    }

    fn needs_mipmap_generation(&self) -> bool {
        self.generate_mipmaps
    }

    fn upload_to(&self, target: &mut dyn TextureUploadTarget) -> TextureLoaderResult<()> {
        let full_range = self.descriptor.full_range();
        let count = self.descriptor.num_mip_levels.min(self.mip_spans.len());
        for (mip_level, span) in self.mip_spans.iter().enumerate().take(count) {
            target.upload(&full_range.at_mip_level(mip_level), span.bytes())?;
        }
        Ok(())
    }

    fn copy_to_buffer(&self, destination: &mut [u8]) -> TextureLoaderResult<()> {
        let mut offset = 0;
        for span in &self.mip_spans {
            let end = offset + span.len();
            if end > destination.len() {
                return Err(TextureLoaderError::DestinationTooSmall {
                    required: end,
                    actual: destination.len(),
                });
            }
            destination[offset..end].copy_from_slice(span.bytes());
            offset = end;
        }
        Ok(())
    }
}
