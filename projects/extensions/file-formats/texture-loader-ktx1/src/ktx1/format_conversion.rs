//! Conversion from the header's GL enumerant fields to a pixel format.

use crate::ktx1::constants::*;
use texture_loader_common::TextureFormat;

/// Resolves the GL enumerant fields stored in a KTX v1 header to a
/// [`TextureFormat`].
///
/// Sized internal formats identify the format on their own. The legacy
/// unsized internal formats (`GL_RGB`, `GL_RGBA`, `GL_BGRA`) carry the real
/// format in the `glFormat`/`glType` pair, so those fall back to that pair.
/// Anything unrecognized maps to [`TextureFormat::Invalid`]; this function
/// reports, it never fails.
pub fn texture_format_from_gl(
    gl_internal_format: u32,
    gl_format: u32,
    gl_type: u32,
) -> TextureFormat {
    use TextureFormat::*;
    match gl_internal_format {
        GL_R8 => R8Unorm,
        GL_RG8 => Rg8Unorm,
        GL_RGB8 => Rgb8Unorm,
        GL_RGBA8 => Rgba8Unorm,
        GL_SRGB8_ALPHA8 => Rgba8UnormSrgb,
        GL_BGRA8_EXT => Bgra8Unorm,
        GL_RGB565 => Rgb565Unorm,
        GL_RGBA16F => Rgba16Float,
        GL_RGBA32F => Rgba32Float,
        GL_COMPRESSED_RGB_S3TC_DXT1_EXT => Bc1RgbUnorm,
        GL_COMPRESSED_RGBA_S3TC_DXT1_EXT => Bc1RgbaUnorm,
        GL_COMPRESSED_RGBA_S3TC_DXT3_EXT => Bc2RgbaUnorm,
        GL_COMPRESSED_RGBA_S3TC_DXT5_EXT => Bc3RgbaUnorm,
        GL_COMPRESSED_RGBA_BPTC_UNORM => Bc7RgbaUnorm,
        GL_COMPRESSED_SRGB_ALPHA_BPTC_UNORM => Bc7RgbaUnormSrgb,
        GL_ETC1_RGB8_OES => Etc1Rgb8Unorm,
        GL_COMPRESSED_RGB8_ETC2 => Etc2Rgb8Unorm,
        GL_COMPRESSED_SRGB8_ETC2 => Etc2Rgb8UnormSrgb,
        GL_COMPRESSED_RGBA8_ETC2_EAC => Etc2Rgba8Unorm,
        GL_COMPRESSED_SRGB8_ALPHA8_ETC2_EAC => Etc2Rgba8UnormSrgb,
        GL_COMPRESSED_RGBA_ASTC_4X4_KHR => Astc4x4Unorm,
        GL_COMPRESSED_SRGB8_ALPHA8_ASTC_4X4_KHR => Astc4x4UnormSrgb,
        GL_RGB | GL_RGBA | GL_BGRA => match (gl_format, gl_type) {
            (GL_RGBA, GL_UNSIGNED_BYTE) => Rgba8Unorm,
            (GL_BGRA, GL_UNSIGNED_BYTE) => Bgra8Unorm,
            (GL_RGB, GL_UNSIGNED_BYTE) => Rgb8Unorm,
            (GL_RGB, GL_UNSIGNED_SHORT_5_6_5) => Rgb565Unorm,
            (GL_RGBA, GL_HALF_FLOAT) => Rgba16Float,
            (GL_RGBA, GL_FLOAT) => Rgba32Float,
            _ => Invalid,
        },
        _ => Invalid,
    }
}
