//! Texture geometry and pixel format metadata shared by the `texture-loader` crates.
//!
//! Everything in here is plain data plus bounded arithmetic: pixel formats and
//! their block geometry ([`format`]), normalized sub-range descriptions with
//! mip/face derivation ([`range`]), and the shape classification handed to
//! texture creation ([`descriptor`]). No I/O, no allocation.

#![no_std]
#![warn(missing_docs)]

#[cfg(feature = "std")]
extern crate std;

pub mod descriptor;
pub mod format;
pub mod range;

pub use descriptor::{TextureDescriptor, TextureType};
pub use format::{TextureFormat, TextureFormatProperties};
pub use range::{RangeError, TextureRangeDesc};
