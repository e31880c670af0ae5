//! Error types for texture container recognition, construction and transfer.

use texture_loader_common::range::RangeError;
use thiserror::Error;

/// Result type for texture loader operations
pub type TextureLoaderResult<T> = Result<T, TextureLoaderError>;

/// Coarse classification of a loader failure.
///
/// Every [`TextureLoaderError`] maps onto exactly one of these codes via
/// [`TextureLoaderError::code`]. Callers that dispatch across several
/// container formats typically retry the next format only on recognition
/// failures; the code tells them apart without string matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// The input itself is absent or unusable (empty buffer).
    ArgumentInvalid,
    /// A buffer or size argument is outside the accepted range.
    ArgumentOutOfRange,
    /// The input is present and sized but semantically invalid for this format.
    InvalidOperation,
}

/// Errors reported by container format factories and loaders.
///
/// Validation stops at the first failure and reports a single specific
/// variant; no error aggregation, no partial loader.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TextureLoaderError {
    /// No input bytes were provided
    #[error("No input data")]
    EmptyInput,

    /// Input buffer is shorter than the format's fixed header
    #[error("Input shorter than the fixed header: required {required} bytes, got {actual} bytes")]
    NotEnoughData { required: usize, actual: usize },

    /// The identifier bytes at the start of the buffer do not match the format's magic
    #[error("Incorrect identifier")]
    IncorrectIdentifier,

    /// The container declares big-endian byte order
    #[error("Big endian containers are not supported")]
    BigEndianNotSupported,

    /// The header's format fields do not map to any known pixel format
    #[error("Unrecognized texture format")]
    UnrecognizedFormat,

    /// Cube maps with more than one array layer are not supported
    #[error("Texture cube arrays are not supported")]
    CubeArraysNotSupported,

    /// Volume textures with more than one array layer are not supported
    #[error("3D texture arrays are not supported")]
    ThreeDArraysNotSupported,

    /// The declared face count is neither 1 nor 6
    #[error("Number of faces must be 1 or 6, got {num_faces}")]
    InvalidFaceCount { num_faces: usize },

    /// A cube map declares a nonzero pixel depth
    #[error("Pixel depth must be 0 for cube textures, got {depth}")]
    CubeDepthNotZero { depth: usize },

    /// A cube map's width and height differ
    #[error("Cube textures must be square, got {width}x{height}")]
    CubeNotSquare { width: usize, height: usize },

    /// The buffer cannot hold what the header declares
    #[error("Length is too short: required at least {required} bytes, got {actual} bytes")]
    LengthTooShort { required: usize, actual: usize },

    /// The buffer is smaller than the computed total container size
    #[error("Length shorter than expected length: expected {expected} bytes, got {actual} bytes")]
    LengthShorterThanExpected { expected: usize, actual: usize },

    /// A mip level's stored length prefix does not match its computed size
    #[error("Unexpected image size at mip level {mip_level}: stored {stored} bytes, expected {expected} bytes")]
    UnexpectedImageSize {
        mip_level: usize,
        stored: usize,
        expected: usize,
    },

    /// The derived texture range failed self-validation
    #[error("Invalid texture range: {0}")]
    InvalidRange(#[from] RangeError),

    /// Destination buffer cannot hold the copied mip levels
    #[error("Destination buffer too small: required {required} bytes, got {actual} bytes")]
    DestinationTooSmall { required: usize, actual: usize },

    /// The upload target rejected a mip level's region write
    #[error("Region write failed at mip level {mip_level}")]
    RegionWriteFailed { mip_level: usize },
}

impl TextureLoaderError {
    /// Classifies this error into its coarse [`ErrorCode`].
    pub fn code(&self) -> ErrorCode {
        use TextureLoaderError::*;
        match self {
            EmptyInput => ErrorCode::ArgumentInvalid,
            NotEnoughData { .. } | DestinationTooSmall { .. } => ErrorCode::ArgumentOutOfRange,
            IncorrectIdentifier
            | BigEndianNotSupported
            | UnrecognizedFormat
            | CubeArraysNotSupported
            | ThreeDArraysNotSupported
            | InvalidFaceCount { .. }
            | CubeDepthNotZero { .. }
            | CubeNotSquare { .. }
            | LengthTooShort { .. }
            | LengthShorterThanExpected { .. }
            | UnexpectedImageSize { .. }
            | InvalidRange(_)
            | RegionWriteFailed { .. } => ErrorCode::InvalidOperation,
        }
    }
}
