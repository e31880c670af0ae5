//! Error types for file I/O operations.

use crate::error::TextureLoaderError;
use thiserror::Error;

/// Result type for file operations
pub type FileOperationResult<T> = Result<T, FileOperationError>;

/// Errors that can occur during file operations.
///
/// File operations can fail due to either I/O errors (file not found, permission
/// denied, etc.) or loader-related errors (invalid data, unsupported format, etc.).
#[derive(Debug, Error)]
pub enum FileOperationError {
    /// I/O operation failed
    #[error("I/O operation failed: {0}")]
    Io(#[from] FileIoError),

    /// Texture loading failed
    #[error("Texture loading failed: {0}")]
    Loader(#[from] TextureLoaderError),
}

/// File I/O errors that can occur with the memory mapping backend
#[derive(Debug, Error)]
pub enum FileIoError {
    /// Error opening file handle
    #[cfg(feature = "lightweight-mmap")]
    #[error("Failed to open file handle: {0}")]
    FileHandle(#[from] lightweight_mmap::handles::HandleOpenError),

    /// Error creating memory mapping
    #[cfg(feature = "lightweight-mmap")]
    #[error("Failed to create memory mapping: {0}")]
    MemoryMapping(#[from] lightweight_mmap::mmap::MmapError),
}

// Direct From implementations for specific error types used with ? operator in file operations
#[cfg(feature = "lightweight-mmap")]
impl From<lightweight_mmap::handles::HandleOpenError> for FileOperationError {
    fn from(e: lightweight_mmap::handles::HandleOpenError) -> Self {
        Self::Io(FileIoError::FileHandle(e))
    }
}

#[cfg(feature = "lightweight-mmap")]
impl From<lightweight_mmap::mmap::MmapError> for FileOperationError {
    fn from(e: lightweight_mmap::mmap::MmapError) -> Self {
        Self::Io(FileIoError::MemoryMapping(e))
    }
}
