//! Destination abstraction for per-level texture uploads.

use crate::error::TextureLoaderResult;
use texture_loader_common::TextureRangeDesc;

/// Receives region writes from a [`TextureLoader`](crate::traits::TextureLoader).
///
/// Implementations wrap the actual texture resource (a GPU texture, a
/// staging buffer, a test recorder). Each call delivers the bytes for one
/// mip level's full extent; `range` carries that level's dimensions and its
/// `mip_level` index, derived by halving from the base level.
///
/// A failed region write is reported back through the result; the driving
/// loader stops at the first failure.
pub trait TextureUploadTarget {
    /// Accepts `data` for the sub-region described by `range`.
    fn upload(&mut self, range: &TextureRangeDesc, data: &[u8]) -> TextureLoaderResult<()>;
}
