//! Normalized sub-range geometry for texture storage.

use thiserror::Error;

/// Error returned when a [`TextureRangeDesc`] fails self-validation.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RangeError {
    /// One of the extents or counts is zero.
    #[error("width, height, depth and layer/face/mip counts must all be at least 1")]
    ZeroExtent,

    /// More mip levels are declared than the dimensions can halve down to.
    #[error("{num_mip_levels} mip levels do not fit dimensions {width}x{height}x{depth}")]
    TooManyMipLevels {
        /// Declared number of mip levels.
        num_mip_levels: usize,
        /// Base level width in pixels.
        width: usize,
        /// Base level height in pixels.
        height: usize,
        /// Base level depth in pixels.
        depth: usize,
    },
}

/// Normalized geometry describing a sub-region of a texture's storage.
///
/// `mip_level` and `face` locate the start of the range; the `num_*` fields
/// give its extent. A range covering a whole texture has `mip_level` and
/// `face` at 0. Dimensions are those of the range's own `mip_level`, so a
/// range derived with [`at_mip_level`](Self::at_mip_level) carries the halved
/// dimensions of that level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureRangeDesc {
    /// Width in pixels at `mip_level`.
    pub width: usize,
    /// Height in pixels at `mip_level`.
    pub height: usize,
    /// Depth in pixels at `mip_level`. 1 for non-volume textures.
    pub depth: usize,
    /// Number of array layers covered.
    pub num_layers: usize,
    /// Number of cube faces covered. 1 for non-cube textures, 6 for cubes.
    pub num_faces: usize,
    /// Number of mip levels covered.
    pub num_mip_levels: usize,
    /// First mip level covered. 0 is the base (largest) level.
    pub mip_level: usize,
    /// First face covered.
    pub face: usize,
}

impl Default for TextureRangeDesc {
    fn default() -> Self {
        Self {
            width: 1,
            height: 1,
            depth: 1,
            num_layers: 1,
            num_faces: 1,
            num_mip_levels: 1,
            mip_level: 0,
            face: 0,
        }
    }
}

impl TextureRangeDesc {
    /// Creates a range covering a whole 2D texture of the given size.
    pub fn new_2d(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Returns this range narrowed to the single mip level `level`.
    ///
    /// Dimensions are halved once per level below this range's own
    /// `mip_level`, never dropping under 1 per axis. `level` values above the
    /// representable shift bottom out at 1x1x1.
    pub fn at_mip_level(&self, level: usize) -> Self {
        let delta = u32::try_from(level.saturating_sub(self.mip_level)).unwrap_or(u32::MAX);
        Self {
            width: halved_extent(self.width, delta),
            height: halved_extent(self.height, delta),
            depth: halved_extent(self.depth, delta),
            num_mip_levels: 1,
            mip_level: level,
            ..*self
        }
    }

    /// Returns this range narrowed to the single face `face`.
    pub fn at_face(&self, face: usize) -> Self {
        Self {
            face,
            num_faces: 1,
            ..*self
        }
    }

    /// Longest mip chain the given base dimensions support.
    pub fn max_mip_levels(width: usize, height: usize, depth: usize) -> usize {
        let largest = width.max(height).max(depth).max(1);
        (usize::BITS - largest.leading_zeros()) as usize
    }

    /// Checks that the range is internally consistent.
    ///
    /// All extents and counts must be at least 1, and the covered mip levels
    /// must fit within the chain the base dimensions support.
    pub fn validate(&self) -> Result<(), RangeError> {
        if self.width == 0
            || self.height == 0
            || self.depth == 0
            || self.num_layers == 0
            || self.num_faces == 0
            || self.num_mip_levels == 0
        {
            return Err(RangeError::ZeroExtent);
        }
        let max_levels = Self::max_mip_levels(self.width, self.height, self.depth);
        if self.mip_level.saturating_add(self.num_mip_levels) > max_levels {
            return Err(RangeError::TooManyMipLevels {
                num_mip_levels: self.num_mip_levels,
                width: self.width,
                height: self.height,
                depth: self.depth,
            });
        }
        Ok(())
    }
}

fn halved_extent(extent: usize, times: u32) -> usize {
    extent.checked_shr(times).unwrap_or(0).max(1)
}
