//! Format-independent API for GPU texture container loading.
//!
//! This crate defines the contract between container format parsers and the
//! texture-loading subsystem that drives them:
//!
//! - [`TextureLoaderFactory`]: recognizes a format from a buffer's fixed
//!   header and constructs a loader for it.
//! - [`TextureLoader`]: locates each stored mip level as a zero-copy span
//!   into the source buffer and transfers the spans on demand.
//! - [`TextureUploadTarget`]: the destination texture resource stand-in that
//!   accepts per-level region writes.
//! - [`TextureLoaderError`]: one specific code+message pair per validation
//!   failure, classified into coarse [`ErrorCode`]s.
//!
//! # Example
//!
//! ```
//! use texture_loader_api::{TextureLoaderFactory, TextureLoaderResult};
//! use texture_loader_ktx1::Ktx1LoaderFactory;
//!
//! fn describe(data: &[u8]) -> TextureLoaderResult<()> {
//!     let loader = Ktx1LoaderFactory.try_create(data)?;
//!     let descriptor = loader.descriptor();
//!     let mut pixels = vec![0u8; data.len()];
//!     loader.copy_to_buffer(&mut pixels)?;
//!     assert!(descriptor.num_mip_levels >= 1);
//!     Ok(())
//! }
//! ```

#![no_std]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

#[cfg(test)]
pub mod test_prelude;

// Core modules
pub mod error;
pub mod reader;
pub mod traits;

#[cfg(feature = "file-io")]
pub mod file_io;

// Re-export key types
pub use error::{ErrorCode, TextureLoaderError, TextureLoaderResult};
pub use reader::DataReader;
pub use traits::{TextureLoader, TextureLoaderFactory, TextureUploadTarget};

// Re-export file operation types when file-io feature is enabled
#[cfg(feature = "file-io")]
pub use file_io::{FileOperationError, FileOperationResult};
