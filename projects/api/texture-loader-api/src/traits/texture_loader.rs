//! Capability contract exposed by every container format's loader.

use crate::error::TextureLoaderResult;
use crate::traits::TextureUploadTarget;
use texture_loader_common::TextureDescriptor;

/// A constructed loader for one parsed container buffer.
///
/// A loader owns no pixel data. It holds spans into the buffer it was
/// constructed from, so that buffer must stay alive (and unmodified) for the
/// loader's lifetime; the borrow checker enforces this through the loader's
/// lifetime parameter. All methods take `&self`, making a loader reusable
/// and safe to drive from several threads at once as long as each thread
/// brings its own destination.
pub trait TextureLoader {
    /// Creation parameters for the texture this buffer describes: pixel
    /// format, inferred shape, dimensions, layer/face/mip counts.
    fn descriptor(&self) -> &TextureDescriptor;

    /// Whether the container carries pixel bytes that can be transferred
    /// as-is.
    ///
    /// Formats that only describe procedural or deferred content return
    /// `false`, in which case [`upload_to`](Self::upload_to) and
    /// [`copy_to_buffer`](Self::copy_to_buffer) have nothing to transfer.
    fn can_provide_source_data(&self) -> bool {
        false
    }

    /// Whether the caller must generate the mip chain after uploading the
    /// base level (the container stored only level 0 and asked for mips).
    fn needs_mipmap_generation(&self) -> bool {
        false
    }

    /// Hands every stored mip level to `target`, level 0 (largest) first.
    ///
    /// Each region write covers the level's full extent (all layers and
    /// faces). Stops at the first region write the target rejects and
    /// returns that failure.
    fn upload_to(&self, target: &mut dyn TextureUploadTarget) -> TextureLoaderResult<()>;

    /// Copies every stored mip level into `destination`, tightly packed,
    /// level 0 first.
    ///
    /// Every copy is bounds-checked against the destination length before
    /// writing; if the levels do not fit, fails with
    /// [`DestinationTooSmall`](crate::error::TextureLoaderError::DestinationTooSmall)
    /// without writing past the end.
    fn copy_to_buffer(&self, destination: &mut [u8]) -> TextureLoaderResult<()>;
}
