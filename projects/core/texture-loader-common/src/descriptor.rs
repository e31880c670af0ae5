//! Texture shape classification and the creation parameters derived from a
//! parsed container.

use crate::format::TextureFormat;
use crate::range::TextureRangeDesc;

/// Overall shape of a texture resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureType {
    /// Plain two-dimensional texture.
    TwoD,
    /// Array of two-dimensional layers.
    TwoDArray,
    /// Volume texture.
    ThreeD,
    /// Six-faced cube map.
    Cube,
}

/// Everything needed to create a texture resource matching a container's
/// contents: pixel format, inferred shape, dimensions and counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureDescriptor {
    /// Pixel format of the stored data.
    pub format: TextureFormat,
    /// Inferred shape of the texture.
    pub texture_type: TextureType,
    /// Base level width in pixels.
    pub width: usize,
    /// Base level height in pixels.
    pub height: usize,
    /// Base level depth in pixels. 1 unless the texture is a volume.
    pub depth: usize,
    /// Number of array layers. 1 for non-array textures.
    pub num_layers: usize,
    /// Number of cube faces. 6 for cubes, otherwise 1.
    pub num_faces: usize,
    /// Number of mip levels the resource should allocate.
    pub num_mip_levels: usize,
}

impl TextureDescriptor {
    /// Builds a descriptor from a validated full-texture range.
    ///
    /// The shape is inferred from the range: 6 faces make a cube, otherwise
    /// depth beyond 1 a volume, otherwise layers beyond 1 a 2D array,
    /// otherwise plain 2D.
    pub fn from_range(format: TextureFormat, range: &TextureRangeDesc) -> Self {
        let texture_type = if range.num_faces == 6 {
            TextureType::Cube
        } else if range.depth > 1 {
            TextureType::ThreeD
        } else if range.num_layers > 1 {
            TextureType::TwoDArray
        } else {
            TextureType::TwoD
        };
        Self {
            format,
            texture_type,
            width: range.width,
            height: range.height,
            depth: range.depth,
            num_layers: range.num_layers,
            num_faces: range.num_faces,
            num_mip_levels: range.num_mip_levels,
        }
    }

    /// Reconstitutes the full-texture range this descriptor covers.
    pub fn full_range(&self) -> TextureRangeDesc {
        TextureRangeDesc {
            width: self.width,
            height: self.height,
            depth: self.depth,
            num_layers: self.num_layers,
            num_faces: self.num_faces,
            num_mip_levels: self.num_mip_levels,
            mip_level: 0,
            face: 0,
        }
    }
}
