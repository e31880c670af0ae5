//! Pixel formats and the byte-size arithmetic for laying out texture storage.
//!
//! [`TextureFormat`] lists the formats GPU texture containers carry in
//! practice. [`TextureFormatProperties`] describes a format's block geometry
//! and computes the byte size of arbitrary sub-ranges; that computation is
//! what container parsers validate declared lengths against.

use crate::range::TextureRangeDesc;

/// Pixel format of a texture's stored bytes.
///
/// Uncompressed formats store one pixel per block; block-compressed formats
/// (BC, ETC, ASTC) store a fixed-size block covering a 4×4 pixel footprint.
/// [`Invalid`](Self::Invalid) is the sentinel for anything unrecognized and
/// always fails container validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureFormat {
    /// Unrecognized or unsupported format.
    Invalid,
    /// 8-bit red channel, unsigned normalized.
    R8Unorm,
    /// 8-bit red/green channels, unsigned normalized.
    Rg8Unorm,
    /// 8-bit red/green/blue channels, unsigned normalized, tightly packed.
    Rgb8Unorm,
    /// 8-bit RGBA, unsigned normalized.
    Rgba8Unorm,
    /// 8-bit RGBA, sRGB-encoded color with linear alpha.
    Rgba8UnormSrgb,
    /// 8-bit BGRA, unsigned normalized.
    Bgra8Unorm,
    /// Packed 16-bit RGB with 5/6/5 bit channels.
    Rgb565Unorm,
    /// 16-bit float RGBA.
    Rgba16Float,
    /// 32-bit float RGBA.
    Rgba32Float,
    /// BC1 (DXT1) compressed RGB, 8 bytes per 4×4 block.
    Bc1RgbUnorm,
    /// BC1 (DXT1) compressed RGBA with 1-bit alpha, 8 bytes per 4×4 block.
    Bc1RgbaUnorm,
    /// BC2 (DXT3) compressed RGBA, 16 bytes per 4×4 block.
    Bc2RgbaUnorm,
    /// BC3 (DXT5) compressed RGBA, 16 bytes per 4×4 block.
    Bc3RgbaUnorm,
    /// BC7 compressed RGBA, 16 bytes per 4×4 block.
    Bc7RgbaUnorm,
    /// BC7 compressed RGBA, sRGB-encoded color.
    Bc7RgbaUnormSrgb,
    /// ETC1 compressed RGB, 8 bytes per 4×4 block.
    Etc1Rgb8Unorm,
    /// ETC2 compressed RGB, 8 bytes per 4×4 block.
    Etc2Rgb8Unorm,
    /// ETC2 compressed RGB, sRGB-encoded.
    Etc2Rgb8UnormSrgb,
    /// ETC2/EAC compressed RGBA, 16 bytes per 4×4 block.
    Etc2Rgba8Unorm,
    /// ETC2/EAC compressed RGBA, sRGB-encoded color.
    Etc2Rgba8UnormSrgb,
    /// ASTC compressed RGBA with a 4×4 block footprint.
    Astc4x4Unorm,
    /// ASTC compressed RGBA with a 4×4 block footprint, sRGB-encoded color.
    Astc4x4UnormSrgb,
}

impl TextureFormat {
    /// Returns the block geometry and per-block byte size for this format.
    pub const fn properties(self) -> TextureFormatProperties {
        use TextureFormat::*;
        let (bytes_per_block, block_width, block_height) = match self {
            Invalid => (0, 1, 1),
            R8Unorm => (1, 1, 1),
            Rg8Unorm => (2, 1, 1),
            Rgb8Unorm => (3, 1, 1),
            Rgba8Unorm | Rgba8UnormSrgb | Bgra8Unorm => (4, 1, 1),
            Rgb565Unorm => (2, 1, 1),
            Rgba16Float => (8, 1, 1),
            Rgba32Float => (16, 1, 1),
            Bc1RgbUnorm | Bc1RgbaUnorm => (8, 4, 4),
            Bc2RgbaUnorm | Bc3RgbaUnorm => (16, 4, 4),
            Bc7RgbaUnorm | Bc7RgbaUnormSrgb => (16, 4, 4),
            Etc1Rgb8Unorm | Etc2Rgb8Unorm | Etc2Rgb8UnormSrgb => (8, 4, 4),
            Etc2Rgba8Unorm | Etc2Rgba8UnormSrgb => (16, 4, 4),
            Astc4x4Unorm | Astc4x4UnormSrgb => (16, 4, 4),
        };
        TextureFormatProperties {
            format: self,
            bytes_per_block,
            block_width,
            block_height,
        }
    }

    /// Whether this format stores pixels in compressed blocks larger than one pixel.
    pub const fn is_compressed(self) -> bool {
        let properties = self.properties();
        properties.block_width > 1 || properties.block_height > 1
    }
}

/// Block geometry and size metadata for a [`TextureFormat`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureFormatProperties {
    /// The format these properties describe.
    pub format: TextureFormat,
    /// Bytes occupied by one block (one pixel for uncompressed formats).
    pub bytes_per_block: u8,
    /// Block width in pixels. 1 for uncompressed formats.
    pub block_width: u8,
    /// Block height in pixels. 1 for uncompressed formats.
    pub block_height: u8,
}

impl TextureFormatProperties {
    /// Bytes required for one layer and one face of a mip level with the given
    /// pixel dimensions, rounded up to whole blocks.
    pub fn bytes_per_slice(&self, width: usize, height: usize, depth: usize) -> usize {
        let blocks_wide = width.div_ceil(self.block_width as usize);
        let blocks_high = height.div_ceil(self.block_height as usize);
        blocks_wide
            .saturating_mul(blocks_high)
            .saturating_mul(depth)
            .saturating_mul(self.bytes_per_block as usize)
    }

    /// Total bytes required to store `range`.
    ///
    /// Sums the per-level slice size over the range's mip levels, multiplied
    /// by its layer and face counts. Arithmetic saturates rather than wrapping,
    /// so a hostile range can never produce a small value by overflow.
    pub fn bytes_per_range(&self, range: &TextureRangeDesc) -> usize {
        let mut total = 0usize;
        let first = range.mip_level;
        let last = first.saturating_add(range.num_mip_levels);
        for level in first..last {
            let level_range = range.at_mip_level(level);
            let slice =
                self.bytes_per_slice(level_range.width, level_range.height, level_range.depth);
            total = total.saturating_add(
                slice
                    .saturating_mul(range.num_layers)
                    .saturating_mul(range.num_faces),
            );
        }
        total
    }
}
