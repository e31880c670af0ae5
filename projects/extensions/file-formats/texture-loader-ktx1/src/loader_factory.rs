//! Recognition and construction of KTX v1 container loaders.

use crate::ktx1::constants::*;
use crate::ktx1::Ktx1Header;
use crate::loader::{Ktx1TextureLoader, MipLevelSpan};
use alloc::boxed::Box;
use alloc::vec::Vec;
use core::mem::size_of;
use texture_loader_api::{
    DataReader, TextureLoader, TextureLoaderError, TextureLoaderFactory, TextureLoaderResult,
};
use texture_loader_common::{TextureDescriptor, TextureFormat, TextureRangeDesc};

/// Recognizes KTX v1 containers and builds their loaders.
///
/// Stateless; share one value freely across threads. Recognition reads only
/// the fixed 64-byte header. Construction validates the declared layout
/// against the whole buffer and collects one zero-copy span per stored mip
/// level, failing on the first inconsistency.
///
/// ```
/// use texture_loader_api::{TextureLoaderFactory, TextureLoaderResult};
/// use texture_loader_ktx1::Ktx1LoaderFactory;
///
/// # fn describe(data: &[u8]) -> TextureLoaderResult<()> {
/// let loader = Ktx1LoaderFactory.try_create(data)?;
/// let descriptor = loader.descriptor();
/// println!(
///     "{}x{} with {} mip levels",
///     descriptor.width, descriptor.height, descriptor.num_mip_levels
/// );
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct Ktx1LoaderFactory;

impl TextureLoaderFactory for Ktx1LoaderFactory {
    fn header_length(&self) -> usize {
        KTX1_HEADER_LENGTH
    }

    fn can_create_from_header(&self, header: DataReader<'_>) -> TextureLoaderResult<()> {
        let header = parse_header(&header)?;

        if !header.tag_is_valid() {
            return Err(TextureLoaderError::IncorrectIdentifier);
        }
        if header.endianness() != ENDIANNESS_LITTLE {
            return Err(TextureLoaderError::BigEndianNotSupported);
        }
        if header.format_properties().format == TextureFormat::Invalid {
            return Err(TextureLoaderError::UnrecognizedFormat);
        }
        if header.number_of_faces() == 6 && header.number_of_array_elements() > 1 {
            return Err(TextureLoaderError::CubeArraysNotSupported);
        }
        if header.number_of_array_elements() > 1 && header.pixel_depth() > 1 {
            return Err(TextureLoaderError::ThreeDArraysNotSupported);
        }
        Ok(())
    }

    fn create_loader<'a>(
        &self,
        reader: DataReader<'a>,
    ) -> TextureLoaderResult<Box<dyn TextureLoader + 'a>> {
        Ok(Box::new(parse_ktx1(reader)?))
    }
}

fn parse_header<'a>(reader: &DataReader<'a>) -> TextureLoaderResult<Ktx1Header<'a>> {
    Ktx1Header::from_prefix(reader.data()).ok_or(TextureLoaderError::NotEnoughData {
        required: KTX1_HEADER_LENGTH,
        actual: reader.len(),
    })
}

/// Validates the container layout against the full buffer and collects the
/// mip level spans.
fn parse_ktx1(reader: DataReader<'_>) -> TextureLoaderResult<Ktx1TextureLoader<'_>> {
    let header = parse_header(&reader)?;
    let length = reader.len();

    let key_value_bytes = header.bytes_of_key_value_data() as usize;
    if key_value_bytes > length {
        return Err(TextureLoaderError::LengthTooShort {
            required: key_value_bytes,
            actual: length,
        });
    }

    let num_faces = header.number_of_faces() as usize;
    if num_faces != 1 && num_faces != 6 {
        return Err(TextureLoaderError::InvalidFaceCount { num_faces });
    }
    if num_faces == 6 {
        let depth = header.pixel_depth() as usize;
        if depth != 0 {
            return Err(TextureLoaderError::CubeDepthNotZero { depth });
        }
        if header.pixel_width() != header.pixel_height() {
            return Err(TextureLoaderError::CubeNotSquare {
                width: header.pixel_width() as usize,
                height: header.pixel_height() as usize,
            });
        }
    }

    // 0 declared levels means "one stored level, generate the rest".
    let declared_mip_levels = header.number_of_mipmap_levels() as usize;
    let range = TextureRangeDesc {
        width: (header.pixel_width() as usize).max(1),
        height: (header.pixel_height() as usize).max(1),
        depth: (header.pixel_depth() as usize).max(1),
        num_layers: (header.number_of_array_elements() as usize).max(1),
        num_faces,
        num_mip_levels: declared_mip_levels.max(1),
        ..TextureRangeDesc::default()
    };
    range.validate()?;

    let properties = header.format_properties();
    let range_bytes = properties.bytes_per_range(&range);
    if range_bytes > length {
        return Err(TextureLoaderError::LengthTooShort {
            required: range_bytes,
            actual: length,
        });
    }

    // Lower bound on the container size. Level prefixes are counted for the
    // declared count only, so the prefix a generate-mipmaps container still
    // stores for its base level falls outside the bound.
    let prefix_bytes = declared_mip_levels.saturating_mul(size_of::<u32>());
    let expected_length = KTX1_HEADER_LENGTH
        .saturating_add(key_value_bytes)
        .saturating_add(prefix_bytes)
        .saturating_add(range_bytes);
    if length < expected_length {
        return Err(TextureLoaderError::LengthShorterThanExpected {
            expected: expected_length,
            actual: length,
        });
    }

    let mut offset = KTX1_HEADER_LENGTH + key_value_bytes;
    let mut mip_spans = Vec::with_capacity(range.num_mip_levels);
    for mip_level in 0..range.num_mip_levels {
        let stored = reader.read_u32_at(offset).ok_or(
            TextureLoaderError::LengthShorterThanExpected {
                expected: offset.saturating_add(size_of::<u32>()),
                actual: length,
            },
        )? as usize;

        // A cube level may store the size of one face or of the whole
        // six-face block; the data is laid out face-major either way.
        let per_face_bytes =
            properties.bytes_per_range(&range.at_mip_level(mip_level).at_face(0));
        let span_bytes = per_face_bytes.saturating_mul(range.num_faces);
        if stored != per_face_bytes && stored != span_bytes {
            return Err(TextureLoaderError::UnexpectedImageSize {
                mip_level,
                stored,
                expected: per_face_bytes,
            });
        }

        offset += size_of::<u32>();
        let data = reader.bytes_at(offset, span_bytes).ok_or(
            TextureLoaderError::LengthShorterThanExpected {
                expected: offset.saturating_add(span_bytes),
                actual: length,
            },
        )?;
        mip_spans.push(MipLevelSpan::new(offset, data));
        offset += span_bytes;
    }

    let descriptor = TextureDescriptor::from_range(properties.format, &range);
    Ok(Ktx1TextureLoader::new(
        descriptor,
        mip_spans,
        declared_mip_levels == 0,
    ))
}
