//! Common test imports and utilities for KTX v1 extension tests
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.
#![allow(unused_imports)]

// External crate declaration for no_std compatibility
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

// Re-export commonly used alloc types for tests
pub use alloc::{boxed::Box, format, string::String, vec, vec::Vec};

// External crates commonly used in tests
pub use rstest::rstest;

// Crate and collaborator items exercised across the test modules
pub use crate::ktx1::Ktx1Header;
pub use crate::loader::{Ktx1TextureLoader, MipLevelSpan};
pub use crate::loader_factory::Ktx1LoaderFactory;
pub use texture_loader_api::{
    DataReader, ErrorCode, TextureLoader, TextureLoaderError, TextureLoaderFactory,
    TextureLoaderResult, TextureUploadTarget,
};
pub use texture_loader_common::{
    RangeError, TextureDescriptor, TextureFormat, TextureRangeDesc, TextureType,
};

// Common KTX v1 test data helpers
use crate::ktx1::constants::*;
use crate::ktx1::format_conversion::texture_format_from_gl;
use endian_writer::{EndianWriter, LittleEndianWriter};

/// Header field values for synthesizing test containers.
///
/// Defaults describe a plain little-endian 64x64 RGBA8 texture with one
/// stored mip level.
#[derive(Debug, Clone, Copy)]
pub struct Ktx1Params {
    pub endianness: u32,
    pub gl_type: u32,
    pub gl_type_size: u32,
    pub gl_format: u32,
    pub gl_internal_format: u32,
    pub gl_base_internal_format: u32,
    pub pixel_width: u32,
    pub pixel_height: u32,
    pub pixel_depth: u32,
    pub number_of_array_elements: u32,
    pub number_of_faces: u32,
    pub number_of_mipmap_levels: u32,
}

impl Default for Ktx1Params {
    fn default() -> Self {
        Self {
            endianness: ENDIANNESS_LITTLE,
            gl_type: GL_UNSIGNED_BYTE,
            gl_type_size: 1,
            gl_format: GL_RGBA,
            gl_internal_format: GL_RGBA8,
            gl_base_internal_format: GL_RGBA,
            pixel_width: 64,
            pixel_height: 64,
            pixel_depth: 0,
            number_of_array_elements: 0,
            number_of_faces: 1,
            number_of_mipmap_levels: 1,
        }
    }
}

/// Writes the 12-byte identifier and all thirteen header words into `data`.
pub fn write_ktx1_header(data: &mut [u8], params: &Ktx1Params, key_value_bytes: u32) {
    if data.len() < KTX1_HEADER_LENGTH {
        return;
    }
    data[..KTX1_IDENTIFIER.len()].copy_from_slice(&KTX1_IDENTIFIER);

    let mut writer = unsafe { LittleEndianWriter::new(data.as_mut_ptr()) };
    unsafe {
        writer.write_u32_at(params.endianness, ENDIANNESS_OFFSET as isize);
        writer.write_u32_at(params.gl_type, GL_TYPE_OFFSET as isize);
        writer.write_u32_at(params.gl_type_size, GL_TYPE_SIZE_OFFSET as isize);
        writer.write_u32_at(params.gl_format, GL_FORMAT_OFFSET as isize);
        writer.write_u32_at(params.gl_internal_format, GL_INTERNAL_FORMAT_OFFSET as isize);
        writer.write_u32_at(
            params.gl_base_internal_format,
            GL_BASE_INTERNAL_FORMAT_OFFSET as isize,
        );
        writer.write_u32_at(params.pixel_width, PIXEL_WIDTH_OFFSET as isize);
        writer.write_u32_at(params.pixel_height, PIXEL_HEIGHT_OFFSET as isize);
        writer.write_u32_at(params.pixel_depth, PIXEL_DEPTH_OFFSET as isize);
        writer.write_u32_at(
            params.number_of_array_elements,
            NUMBER_OF_ARRAY_ELEMENTS_OFFSET as isize,
        );
        writer.write_u32_at(params.number_of_faces, NUMBER_OF_FACES_OFFSET as isize);
        writer.write_u32_at(
            params.number_of_mipmap_levels,
            NUMBER_OF_MIPMAP_LEVELS_OFFSET as isize,
        );
        writer.write_u32_at(key_value_bytes, BYTES_OF_KEY_VALUE_DATA_OFFSET as isize);
    }
}

/// Overwrites a little-endian word at `offset`, for corrupting containers.
pub fn overwrite_u32_at(data: &mut [u8], offset: usize, value: u32) {
    assert!(offset + 4 <= data.len());
    let mut writer = unsafe { LittleEndianWriter::new(data.as_mut_ptr()) };
    unsafe { writer.write_u32_at(value, offset as isize) };
}

/// Creates a complete container for `params`: header, zeroed key-value
/// block, then one length-prefixed data block per stored level filled with
/// a repeating byte pattern.
///
/// Cube levels get the canonical per-face length prefix followed by all six
/// faces of data.
pub fn create_ktx1_with_params(params: &Ktx1Params, key_value_bytes: u32) -> Vec<u8> {
    let properties =
        texture_format_from_gl(params.gl_internal_format, params.gl_format, params.gl_type)
            .properties();
    let range = TextureRangeDesc {
        width: (params.pixel_width as usize).max(1),
        height: (params.pixel_height as usize).max(1),
        depth: (params.pixel_depth as usize).max(1),
        num_layers: (params.number_of_array_elements as usize).max(1),
        num_faces: (params.number_of_faces as usize).max(1),
        num_mip_levels: (params.number_of_mipmap_levels as usize).max(1),
        ..TextureRangeDesc::default()
    };

    let mut level_sizes = Vec::with_capacity(range.num_mip_levels);
    let mut total_size = KTX1_HEADER_LENGTH + key_value_bytes as usize;
    for level in 0..range.num_mip_levels {
        let per_face_bytes = properties.bytes_per_range(&range.at_mip_level(level).at_face(0));
        let span_bytes = per_face_bytes * range.num_faces;
        level_sizes.push((per_face_bytes, span_bytes));
        total_size += 4 + span_bytes;
    }

    let mut data = vec![0u8; total_size];
    write_ktx1_header(&mut data, params, key_value_bytes);

    let mut offset = KTX1_HEADER_LENGTH + key_value_bytes as usize;
    for (per_face_bytes, span_bytes) in level_sizes {
        overwrite_u32_at(&mut data, offset, per_face_bytes as u32);
        offset += 4;
        // Fill the level data with a recognizable pattern.
        for x in 0..span_bytes {
            data[offset + x] = (x % 256) as u8;
        }
        offset += span_bytes;
    }

    data
}

/// Creates a valid RGBA8 2D container with the given dimensions and declared
/// mip level count (0 requests runtime mip generation).
pub fn create_valid_rgba8_ktx1(width: u32, height: u32, mipmap_count: u32) -> Vec<u8> {
    create_ktx1_with_params(
        &Ktx1Params {
            pixel_width: width,
            pixel_height: height,
            number_of_mipmap_levels: mipmap_count,
            ..Ktx1Params::default()
        },
        0,
    )
}

/// Creates a valid RGBA8 cube container with per-face length prefixes.
pub fn create_rgba8_cube_ktx1(size: u32, mipmap_count: u32) -> Vec<u8> {
    create_ktx1_with_params(
        &Ktx1Params {
            pixel_width: size,
            pixel_height: size,
            number_of_faces: 6,
            number_of_mipmap_levels: mipmap_count,
            ..Ktx1Params::default()
        },
        0,
    )
}

/// Creates a header-only buffer for `params` with no key-value block and
/// no level data.
/// Use this to exercise construction failures that trigger before the mip
/// level walk.
pub fn create_ktx1_header_only(params: &Ktx1Params) -> Vec<u8> {
    let mut data = vec![0u8; KTX1_HEADER_LENGTH];
    write_ktx1_header(&mut data, params, 0);
    data
}

/// Upload target recording every region write it receives.
#[derive(Debug, Default)]
pub struct RecordingTarget {
    pub uploads: Vec<(TextureRangeDesc, Vec<u8>)>,
    pub fail_at_level: Option<usize>,
}

impl RecordingTarget {
    pub fn new() -> Self {
        Self::default()
    }

    /// A target that rejects the region write for `mip_level`.
    pub fn failing_at(mip_level: usize) -> Self {
        Self {
            fail_at_level: Some(mip_level),
            ..Self::default()
        }
    }
}

impl TextureUploadTarget for RecordingTarget {
    fn upload(&mut self, range: &TextureRangeDesc, data: &[u8]) -> TextureLoaderResult<()> {
        if self.fail_at_level == Some(range.mip_level) {
            return Err(TextureLoaderError::RegionWriteFailed {
                mip_level: range.mip_level,
            });
        }
        self.uploads.push((*range, data.to_vec()));
        Ok(())
    }
}
