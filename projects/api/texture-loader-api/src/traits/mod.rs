//! Core traits for texture container loading.
//!
//! Three complementary traits cover the pipeline from raw bytes to a
//! populated texture resource:
//!
//! 1. **Recognition and construction**: a [`TextureLoaderFactory`] decides
//!    whether a buffer holds its container format (reading only the fixed
//!    header) and, if so, validates the full layout and builds a loader.
//! 2. **Transfer**: the [`TextureLoader`] it returns exposes the parsed
//!    geometry and moves each stored mip level, zero-copy, out of the
//!    caller's buffer.
//! 3. **Destination**: a [`TextureUploadTarget`] stands in for the GPU
//!    texture resource and accepts one region write per mip level.
//!
//! The pipeline is strictly one-way per buffer: recognition, construction,
//! then any number of upload or copy calls. Loaders are immutable; the only
//! mutation anywhere is inside the caller's upload target.
//!
//! Callers that dispatch across several container formats hold a set of
//! factories and try each in turn, moving on when recognition fails with a
//! format mismatch:
//!
//! ```ignore
//! for factory in factories {
//!     match factory.try_create(data) {
//!         Ok(loader) => return Ok(loader),
//!         Err(error) if error.code() == ErrorCode::InvalidOperation => continue,
//!         Err(error) => return Err(error),
//!     }
//! }
//! ```

pub(crate) mod loader_factory;
pub(crate) mod texture_loader;
pub(crate) mod upload_target;

// Re-export the main traits for convenience
pub use loader_factory::*;
pub use texture_loader::*;
pub use upload_target::*;
