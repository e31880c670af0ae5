//! Fixed-layout view over the KTX v1 header.

use crate::ktx1::constants::*;
use crate::ktx1::format_conversion::texture_format_from_gl;
use core::mem::size_of;
use endian_writer::{EndianReader, LittleEndianReader};
use texture_loader_common::TextureFormatProperties;

/// Borrowed view over the fixed 64-byte header at the start of a container.
///
/// Interprets the bytes in place; nothing is copied and nothing is validated
/// beyond the length check in [`from_prefix`](Self::from_prefix). Every field
/// accessor reads a little-endian word straight out of the borrowed array, so
/// a header over arbitrary bytes simply reports arbitrary field values.
#[derive(Debug, Clone, Copy)]
pub struct Ktx1Header<'a> {
    bytes: &'a [u8; KTX1_HEADER_LENGTH],
}

impl<'a> Ktx1Header<'a> {
    /// Interprets the first 64 bytes of `data` as a KTX v1 header.
    ///
    /// Returns [`None`] if `data` is shorter than that.
    pub fn from_prefix(data: &'a [u8]) -> Option<Self> {
        let bytes = data.get(..KTX1_HEADER_LENGTH)?.try_into().ok()?;
        Some(Self { bytes })
    }

    fn word(&self, offset: usize) -> u32 {
        debug_assert!(offset <= KTX1_HEADER_LENGTH - size_of::<u32>());

        // SAFETY: the backing array is KTX1_HEADER_LENGTH bytes long and all
        // callers pass field offsets of at most KTX1_HEADER_LENGTH - 4.
        let mut reader = unsafe { LittleEndianReader::new(self.bytes.as_ptr()) };
        unsafe { reader.read_u32_at(offset as isize) }
    }

    /// Whether the identifier bytes match the KTX v1 magic sequence.
    pub fn tag_is_valid(&self) -> bool {
        self.bytes[..KTX1_IDENTIFIER.len()] == KTX1_IDENTIFIER
    }

    /// Endianness marker as stored. Little-endian writers store
    /// `0x0403_0201`; any other value means the container cannot be read
    /// with this crate's little-endian field accessors.
    pub fn endianness(&self) -> u32 {
        self.word(ENDIANNESS_OFFSET)
    }

    /// `glType` of the stored data. 0 for compressed formats.
    pub fn gl_type(&self) -> u32 {
        self.word(GL_TYPE_OFFSET)
    }

    /// Byte size of one `glType` value, for endianness conversion.
    pub fn gl_type_size(&self) -> u32 {
        self.word(GL_TYPE_SIZE_OFFSET)
    }

    /// `glFormat` of the stored data. 0 for compressed formats.
    pub fn gl_format(&self) -> u32 {
        self.word(GL_FORMAT_OFFSET)
    }

    /// `glInternalFormat` of the stored data.
    pub fn gl_internal_format(&self) -> u32 {
        self.word(GL_INTERNAL_FORMAT_OFFSET)
    }

    /// `glBaseInternalFormat` of the stored data.
    pub fn gl_base_internal_format(&self) -> u32 {
        self.word(GL_BASE_INTERNAL_FORMAT_OFFSET)
    }

    /// Base level width in pixels. 0 means 1.
    pub fn pixel_width(&self) -> u32 {
        self.word(PIXEL_WIDTH_OFFSET)
    }

    /// Base level height in pixels. 0 means 1.
    pub fn pixel_height(&self) -> u32 {
        self.word(PIXEL_HEIGHT_OFFSET)
    }

    /// Base level depth in pixels. 0 for everything but volume textures.
    pub fn pixel_depth(&self) -> u32 {
        self.word(PIXEL_DEPTH_OFFSET)
    }

    /// Number of array layers. 0 for non-array textures.
    pub fn number_of_array_elements(&self) -> u32 {
        self.word(NUMBER_OF_ARRAY_ELEMENTS_OFFSET)
    }

    /// Number of cube faces. 6 for cube maps, otherwise 1.
    pub fn number_of_faces(&self) -> u32 {
        self.word(NUMBER_OF_FACES_OFFSET)
    }

    /// Number of stored mip levels. 0 means one stored level and a request
    /// to generate the rest at load time.
    pub fn number_of_mipmap_levels(&self) -> u32 {
        self.word(NUMBER_OF_MIPMAP_LEVELS_OFFSET)
    }

    /// Byte count of the key-value metadata block after the fixed header.
    pub fn bytes_of_key_value_data(&self) -> u32 {
        self.word(BYTES_OF_KEY_VALUE_DATA_OFFSET)
    }

    /// Pixel format properties derived from the GL enumerant fields.
    ///
    /// Carries the `Invalid` sentinel format when the fields do not name a
    /// format this crate recognizes.
    pub fn format_properties(&self) -> TextureFormatProperties {
        texture_format_from_gl(
            self.gl_internal_format(),
            self.gl_format(),
            self.gl_type(),
        )
        .properties()
    }
}
