//! KTX v1 layout constants and the GL enumerants the format stores.
#![allow(dead_code)]

/// The 12-byte identifier opening every KTX v1 container.
pub(crate) const KTX1_IDENTIFIER: [u8; 12] = [
    0xAB, 0x4B, 0x54, 0x58, 0x20, 0x31, 0x31, 0xBB, 0x0D, 0x0A, 0x1A, 0x0A,
];

/// Size of the fixed header, identifier included.
pub(crate) const KTX1_HEADER_LENGTH: usize = 64;

/// Value of the endianness field when the writer was little-endian.
/// A big-endian writer stores the same sentinel byte-swapped.
pub(crate) const ENDIANNESS_LITTLE: u32 = 0x0403_0201;

// Byte offsets of the header's u32 fields.
pub(crate) const ENDIANNESS_OFFSET: usize = 12;
pub(crate) const GL_TYPE_OFFSET: usize = 16;
pub(crate) const GL_TYPE_SIZE_OFFSET: usize = 20;
pub(crate) const GL_FORMAT_OFFSET: usize = 24;
pub(crate) const GL_INTERNAL_FORMAT_OFFSET: usize = 28;
pub(crate) const GL_BASE_INTERNAL_FORMAT_OFFSET: usize = 32;
pub(crate) const PIXEL_WIDTH_OFFSET: usize = 36;
pub(crate) const PIXEL_HEIGHT_OFFSET: usize = 40;
pub(crate) const PIXEL_DEPTH_OFFSET: usize = 44;
pub(crate) const NUMBER_OF_ARRAY_ELEMENTS_OFFSET: usize = 48;
pub(crate) const NUMBER_OF_FACES_OFFSET: usize = 52;
pub(crate) const NUMBER_OF_MIPMAP_LEVELS_OFFSET: usize = 56;
pub(crate) const BYTES_OF_KEY_VALUE_DATA_OFFSET: usize = 60;

// GL type enumerants stored in the glType field.
pub(crate) const GL_UNSIGNED_BYTE: u32 = 0x1401;
pub(crate) const GL_FLOAT: u32 = 0x1406;
pub(crate) const GL_HALF_FLOAT: u32 = 0x140B;
pub(crate) const GL_UNSIGNED_SHORT_5_6_5: u32 = 0x8363;

// Unsized base formats, also used as legacy internal formats.
pub(crate) const GL_RGB: u32 = 0x1907;
pub(crate) const GL_RGBA: u32 = 0x1908;
pub(crate) const GL_BGRA: u32 = 0x80E1;

// Sized uncompressed internal formats.
pub(crate) const GL_R8: u32 = 0x8229;
pub(crate) const GL_RG8: u32 = 0x822B;
pub(crate) const GL_RGB8: u32 = 0x8051;
pub(crate) const GL_RGBA8: u32 = 0x8058;
pub(crate) const GL_SRGB8_ALPHA8: u32 = 0x8C43;
pub(crate) const GL_RGB565: u32 = 0x8D62;
pub(crate) const GL_RGBA16F: u32 = 0x881A;
pub(crate) const GL_RGBA32F: u32 = 0x8814;
pub(crate) const GL_BGRA8_EXT: u32 = 0x93A1;

// Compressed internal formats.
pub(crate) const GL_COMPRESSED_RGB_S3TC_DXT1_EXT: u32 = 0x83F0;
pub(crate) const GL_COMPRESSED_RGBA_S3TC_DXT1_EXT: u32 = 0x83F1;
pub(crate) const GL_COMPRESSED_RGBA_S3TC_DXT3_EXT: u32 = 0x83F2;
pub(crate) const GL_COMPRESSED_RGBA_S3TC_DXT5_EXT: u32 = 0x83F3;
pub(crate) const GL_COMPRESSED_RGBA_BPTC_UNORM: u32 = 0x8E8C;
pub(crate) const GL_COMPRESSED_SRGB_ALPHA_BPTC_UNORM: u32 = 0x8E8D;
pub(crate) const GL_ETC1_RGB8_OES: u32 = 0x8D64;
pub(crate) const GL_COMPRESSED_RGB8_ETC2: u32 = 0x9274;
pub(crate) const GL_COMPRESSED_SRGB8_ETC2: u32 = 0x9275;
pub(crate) const GL_COMPRESSED_RGBA8_ETC2_EAC: u32 = 0x9278;
pub(crate) const GL_COMPRESSED_SRGB8_ALPHA8_ETC2_EAC: u32 = 0x9279;
pub(crate) const GL_COMPRESSED_RGBA_ASTC_4X4_KHR: u32 = 0x93B0;
pub(crate) const GL_COMPRESSED_SRGB8_ALPHA8_ASTC_4X4_KHR: u32 = 0x93D0;
