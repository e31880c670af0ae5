//! The KTX v1 container layout.

/// Shared constants between modules.
pub mod constants;

/// Map the header's GL enumerant fields to a pixel format.
pub mod format_conversion;

/// Fixed-layout view over the 64-byte header.
pub mod header;

pub use header::Ktx1Header;
