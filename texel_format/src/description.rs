use std::fmt::Debug;

use crate::{
    channel::{Channel, Swizzle},
    error::ConvertError,
    plain::PLAIN,
    s3tc::{self, S3tcFormat},
    zs::{self, DepthCodec, StencilCodec, ZsLayout},
    Format,
};

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Layout {
    Plain,
    BlockCompressed,
    /// Depth and stencil formats.
    Other,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Colorspace {
    Rgb,
    /// RGB channels are sRGB encoded and alpha is linear.
    Srgb,
    Zs,
}

/// The texel group sharing one encoded unit.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Block {
    pub width: u32,
    pub height: u32,
    pub bits: u32,
}

/// The RGBA conversions of a format.
///
/// Packed buffers use strides in bytes between rows of blocks.
/// Unpacked buffers use strides in elements between rows of texels
/// with 4 elements per texel.
/// `width` and `height` are in texels.
#[allow(clippy::too_many_arguments)]
pub trait FormatCodec: Debug + Sync {
    /// Unpacks texel `(i, j)` of the block at the start of `block`.
    fn fetch_rgba_float(
        &self,
        desc: &FormatDescription,
        block: &[u8],
        i: u32,
        j: u32,
    ) -> Result<[f32; 4], ConvertError>;

    fn fetch_rgba_8unorm(
        &self,
        desc: &FormatDescription,
        block: &[u8],
        i: u32,
        j: u32,
    ) -> Result<[u8; 4], ConvertError>;

    fn unpack_rgba_float(
        &self,
        desc: &FormatDescription,
        dst: &mut [f32],
        dst_stride: usize,
        src: &[u8],
        src_stride: usize,
        width: u32,
        height: u32,
    ) -> Result<(), ConvertError>;

    /// Returns `false` if any value was clamped to fit the format.
    fn pack_rgba_float(
        &self,
        desc: &FormatDescription,
        dst: &mut [u8],
        dst_stride: usize,
        src: &[f32],
        src_stride: usize,
        width: u32,
        height: u32,
    ) -> Result<bool, ConvertError>;

    fn unpack_rgba_8unorm(
        &self,
        desc: &FormatDescription,
        dst: &mut [u8],
        dst_stride: usize,
        src: &[u8],
        src_stride: usize,
        width: u32,
        height: u32,
    ) -> Result<(), ConvertError>;

    /// Returns `false` if any value was clamped to fit the format.
    fn pack_rgba_8unorm(
        &self,
        desc: &FormatDescription,
        dst: &mut [u8],
        dst_stride: usize,
        src: &[u8],
        src_stride: usize,
        width: u32,
        height: u32,
    ) -> Result<bool, ConvertError>;
}

/// The immutable description and codecs of a single [Format].
#[derive(Debug)]
pub struct FormatDescription {
    pub format: Format,
    pub name: &'static str,
    pub layout: Layout,
    pub block: Block,
    pub channels: [Channel; 4],
    pub swizzle: [Swizzle; 4],
    pub colorspace: Colorspace,
    /// Channels are byte aligned elements of equal size rather than fields of one word.
    pub(crate) is_array: bool,
    codec: &'static dyn FormatCodec,
    depth: Option<&'static dyn DepthCodec>,
    stencil: Option<&'static dyn StencilCodec>,
}

impl FormatDescription {
    pub fn bytes_per_block(&self) -> usize {
        self.block.bits as usize / 8
    }

    pub fn is_srgb(&self) -> bool {
        self.colorspace == Colorspace::Srgb
    }

    /// The depth conversions or `None` if the format has no depth.
    pub fn depth(&self) -> Option<&'static dyn DepthCodec> {
        self.depth
    }

    /// The stencil conversions or `None` if the format has no stencil.
    pub fn stencil(&self) -> Option<&'static dyn StencilCodec> {
        self.stencil
    }

    pub fn fetch_rgba_float(&self, block: &[u8], i: u32, j: u32) -> Result<[f32; 4], ConvertError> {
        self.codec.fetch_rgba_float(self, block, i, j)
    }

    pub fn fetch_rgba_8unorm(&self, block: &[u8], i: u32, j: u32) -> Result<[u8; 4], ConvertError> {
        self.codec.fetch_rgba_8unorm(self, block, i, j)
    }

    pub fn unpack_rgba_float(
        &self,
        dst: &mut [f32],
        dst_stride: usize,
        src: &[u8],
        src_stride: usize,
        width: u32,
        height: u32,
    ) -> Result<(), ConvertError> {
        self.codec
            .unpack_rgba_float(self, dst, dst_stride, src, src_stride, width, height)
    }

    pub fn pack_rgba_float(
        &self,
        dst: &mut [u8],
        dst_stride: usize,
        src: &[f32],
        src_stride: usize,
        width: u32,
        height: u32,
    ) -> Result<bool, ConvertError> {
        self.codec
            .pack_rgba_float(self, dst, dst_stride, src, src_stride, width, height)
    }

    pub fn unpack_rgba_8unorm(
        &self,
        dst: &mut [u8],
        dst_stride: usize,
        src: &[u8],
        src_stride: usize,
        width: u32,
        height: u32,
    ) -> Result<(), ConvertError> {
        self.codec
            .unpack_rgba_8unorm(self, dst, dst_stride, src, src_stride, width, height)
    }

    pub fn pack_rgba_8unorm(
        &self,
        dst: &mut [u8],
        dst_stride: usize,
        src: &[u8],
        src_stride: usize,
        width: u32,
        height: u32,
    ) -> Result<bool, ConvertError> {
        self.codec
            .pack_rgba_8unorm(self, dst, dst_stride, src, src_stride, width, height)
    }
}

/// Returns the description for `format`.
pub fn lookup(format: Format) -> &'static FormatDescription {
    debug_assert!(
        crate::is_initialized(),
        "format lookup before texel_format::initialize()"
    );
    &DESCRIPTIONS[format as usize]
}

/// Returns the description for the raw format id.
///
/// # Panics
/// Panics if `id` is not a valid [Format].
pub fn lookup_id(id: u32) -> &'static FormatDescription {
    match Format::from_repr(id) {
        Some(format) => lookup(format),
        None => panic!("unknown format id {id}"),
    }
}

/// Finds a description by its name like `"B8G8R8A8_UNORM"`.
pub fn find_by_name(name: &str) -> Option<&'static FormatDescription> {
    DESCRIPTIONS.iter().find(|d| d.name == name)
}

/// All descriptions ordered by format id.
pub fn descriptions() -> &'static [FormatDescription] {
    &DESCRIPTIONS
}

const fn plain(
    format: Format,
    name: &'static str,
    colorspace: Colorspace,
    channels: [Channel; 4],
    swizzle: [Swizzle; 4],
) -> FormatDescription {
    let mut channels = channels;
    let mut is_array = true;
    let mut bits = 0;
    let mut i = 0;
    while i < 4 {
        let size = channels[i].size;
        channels[i].shift = bits;
        bits += size;
        if size != 0 && (size % 8 != 0 || size != channels[0].size) {
            is_array = false;
        }
        i += 1;
    }

    FormatDescription {
        format,
        name,
        layout: Layout::Plain,
        block: Block {
            width: 1,
            height: 1,
            bits,
        },
        channels,
        swizzle,
        colorspace,
        is_array,
        codec: PLAIN,
        depth: None,
        stencil: None,
    }
}

/// A format with `count` identical channels mapped to RGBA in order.
const fn rgba(format: Format, name: &'static str, channel: Channel, count: usize) -> FormatDescription {
    use Swizzle::{One, Zero, W, X, Y, Z};
    const XYZW: [Swizzle; 4] = [X, Y, Z, W];

    let mut channels = [Channel::NONE; 4];
    let mut swizzle = [Zero, Zero, Zero, One];
    let mut i = 0;
    while i < count {
        channels[i] = channel;
        swizzle[i] = XYZW[i];
        i += 1;
    }
    plain(format, name, Colorspace::Rgb, channels, swizzle)
}

/// Depth and stencil map to red and green when converting to RGBA.
const fn depth_stencil(
    format: Format,
    name: &'static str,
    channels: [Channel; 4],
    swizzle: [Swizzle; 4],
    layout: &'static ZsLayout,
) -> FormatDescription {
    let mut desc = plain(format, name, Colorspace::Zs, channels, swizzle);
    desc.layout = Layout::Other;
    desc.depth = zs::depth_codec(layout);
    desc.stencil = zs::stencil_codec(layout);
    desc
}

const fn compressed(format: Format, name: &'static str, codec: &'static S3tcFormat) -> FormatDescription {
    use Swizzle::{One, W, X, Y, Z};

    let rgb_only = matches!(codec.variant, s3tc::S3tcVariant::Dxt1Rgb);
    let unorm8 = Channel::unorm(8);
    FormatDescription {
        format,
        name,
        layout: Layout::BlockCompressed,
        block: Block {
            width: 4,
            height: 4,
            bits: codec.variant.block_bytes() as u32 * 8,
        },
        channels: if rgb_only {
            [unorm8, unorm8, unorm8, Channel::NONE]
        } else {
            [unorm8; 4]
        },
        swizzle: if rgb_only { [X, Y, Z, One] } else { [X, Y, Z, W] },
        colorspace: if codec.srgb {
            Colorspace::Srgb
        } else {
            Colorspace::Rgb
        },
        is_array: false,
        codec,
        depth: None,
        stencil: None,
    }
}

const fn un(size: u32) -> Channel {
    Channel::unorm(size)
}

const fn sn(size: u32) -> Channel {
    Channel::snorm(size)
}

const fn us(size: u32) -> Channel {
    Channel::uscaled(size)
}

const fn ss(size: u32) -> Channel {
    Channel::sscaled(size)
}

const fn fl(size: u32) -> Channel {
    Channel::float(size)
}

const fn void(size: u32) -> Channel {
    Channel::void(size)
}

// Entries are in the same order as the Format variants.
#[rustfmt::skip]
static DESCRIPTIONS: [FormatDescription; <Format as strum::EnumCount>::COUNT] = {
    use Colorspace::{Rgb, Srgb};
    use Format::*;
    use Swizzle::{One, Zero, W, X, Y, Z};

    let none = Channel::NONE;

    [
        plain(B8G8R8A8Unorm, "B8G8R8A8_UNORM", Rgb, [un(8), un(8), un(8), un(8)], [Z, Y, X, W]),
        plain(B8G8R8X8Unorm, "B8G8R8X8_UNORM", Rgb, [un(8), un(8), un(8), void(8)], [Z, Y, X, One]),
        plain(A8R8G8B8Unorm, "A8R8G8B8_UNORM", Rgb, [un(8), un(8), un(8), un(8)], [Y, Z, W, X]),
        plain(X8R8G8B8Unorm, "X8R8G8B8_UNORM", Rgb, [void(8), un(8), un(8), un(8)], [Y, Z, W, One]),
        plain(A8B8G8R8Unorm, "A8B8G8R8_UNORM", Rgb, [un(8), un(8), un(8), un(8)], [W, Z, Y, X]),
        plain(X8B8G8R8Unorm, "X8B8G8R8_UNORM", Rgb, [void(8), un(8), un(8), un(8)], [W, Z, Y, One]),
        plain(R10G10B10A2Unorm, "R10G10B10A2_UNORM", Rgb, [un(10), un(10), un(10), un(2)], [X, Y, Z, W]),
        plain(B5G5R5A1Unorm, "B5G5R5A1_UNORM", Rgb, [un(5), un(5), un(5), un(1)], [Z, Y, X, W]),
        plain(B4G4R4A4Unorm, "B4G4R4A4_UNORM", Rgb, [un(4), un(4), un(4), un(4)], [Z, Y, X, W]),
        plain(B5G6R5Unorm, "B5G6R5_UNORM", Rgb, [un(5), un(6), un(5), none], [Z, Y, X, One]),
        // Luminance, alpha and intensity.
        plain(L8Unorm, "L8_UNORM", Rgb, [un(8), none, none, none], [X, X, X, One]),
        plain(A8Unorm, "A8_UNORM", Rgb, [un(8), none, none, none], [Zero, Zero, Zero, X]),
        plain(I8Unorm, "I8_UNORM", Rgb, [un(8), none, none, none], [X, X, X, X]),
        plain(L8A8Unorm, "L8A8_UNORM", Rgb, [un(8), un(8), none, none], [X, X, X, Y]),
        plain(L16Unorm, "L16_UNORM", Rgb, [un(16), none, none, none], [X, X, X, One]),
        plain(L8Srgb, "L8_SRGB", Srgb, [un(8), none, none, none], [X, X, X, One]),
        plain(L8A8Srgb, "L8A8_SRGB", Srgb, [un(8), un(8), none, none], [X, X, X, Y]),
        plain(R8G8B8Srgb, "R8G8B8_SRGB", Srgb, [un(8), un(8), un(8), none], [X, Y, Z, One]),
        plain(R8G8B8A8Srgb, "R8G8B8A8_SRGB", Srgb, [un(8), un(8), un(8), un(8)], [X, Y, Z, W]),
        plain(A8B8G8R8Srgb, "A8B8G8R8_SRGB", Srgb, [un(8), un(8), un(8), un(8)], [W, Z, Y, X]),
        plain(B8G8R8A8Srgb, "B8G8R8A8_SRGB", Srgb, [un(8), un(8), un(8), un(8)], [Z, Y, X, W]),
        plain(A8R8G8B8Srgb, "A8R8G8B8_SRGB", Srgb, [un(8), un(8), un(8), un(8)], [Y, Z, W, X]),
        // Mixed signedness.
        plain(R8SG8SB8UX8UNorm, "R8SG8SB8UX8U_NORM", Rgb, [sn(8), sn(8), un(8), void(8)], [X, Y, Z, One]),
        plain(R5SG5SB6UNorm, "R5SG5SB6U_NORM", Rgb, [sn(5), sn(5), un(6), none], [X, Y, Z, One]),
        rgba(R8Unorm, "R8_UNORM", un(8), 1),
        rgba(R8G8Unorm, "R8G8_UNORM", un(8), 2),
        rgba(R8G8B8Unorm, "R8G8B8_UNORM", un(8), 3),
        rgba(R8G8B8A8Unorm, "R8G8B8A8_UNORM", un(8), 4),
        rgba(R8Uscaled, "R8_USCALED", us(8), 1),
        rgba(R8G8Uscaled, "R8G8_USCALED", us(8), 2),
        rgba(R8G8B8Uscaled, "R8G8B8_USCALED", us(8), 3),
        rgba(R8G8B8A8Uscaled, "R8G8B8A8_USCALED", us(8), 4),
        rgba(R8Snorm, "R8_SNORM", sn(8), 1),
        rgba(R8G8Snorm, "R8G8_SNORM", sn(8), 2),
        rgba(R8G8B8Snorm, "R8G8B8_SNORM", sn(8), 3),
        rgba(R8G8B8A8Snorm, "R8G8B8A8_SNORM", sn(8), 4),
        rgba(R8Sscaled, "R8_SSCALED", ss(8), 1),
        rgba(R8G8Sscaled, "R8G8_SSCALED", ss(8), 2),
        rgba(R8G8B8Sscaled, "R8G8B8_SSCALED", ss(8), 3),
        rgba(R8G8B8A8Sscaled, "R8G8B8A8_SSCALED", ss(8), 4),
        rgba(R16Unorm, "R16_UNORM", un(16), 1),
        rgba(R16G16Unorm, "R16G16_UNORM", un(16), 2),
        rgba(R16G16B16Unorm, "R16G16B16_UNORM", un(16), 3),
        rgba(R16G16B16A16Unorm, "R16G16B16A16_UNORM", un(16), 4),
        rgba(R16Uscaled, "R16_USCALED", us(16), 1),
        rgba(R16G16Uscaled, "R16G16_USCALED", us(16), 2),
        rgba(R16G16B16Uscaled, "R16G16B16_USCALED", us(16), 3),
        rgba(R16G16B16A16Uscaled, "R16G16B16A16_USCALED", us(16), 4),
        rgba(R16Snorm, "R16_SNORM", sn(16), 1),
        rgba(R16G16Snorm, "R16G16_SNORM", sn(16), 2),
        rgba(R16G16B16Snorm, "R16G16B16_SNORM", sn(16), 3),
        rgba(R16G16B16A16Snorm, "R16G16B16A16_SNORM", sn(16), 4),
        rgba(R16Sscaled, "R16_SSCALED", ss(16), 1),
        rgba(R16G16Sscaled, "R16G16_SSCALED", ss(16), 2),
        rgba(R16G16B16Sscaled, "R16G16B16_SSCALED", ss(16), 3),
        rgba(R16G16B16A16Sscaled, "R16G16B16A16_SSCALED", ss(16), 4),
        rgba(R32Unorm, "R32_UNORM", un(32), 1),
        rgba(R32G32Unorm, "R32G32_UNORM", un(32), 2),
        rgba(R32G32B32Unorm, "R32G32B32_UNORM", un(32), 3),
        rgba(R32G32B32A32Unorm, "R32G32B32A32_UNORM", un(32), 4),
        rgba(R32Uscaled, "R32_USCALED", us(32), 1),
        rgba(R32G32Uscaled, "R32G32_USCALED", us(32), 2),
        rgba(R32G32B32Uscaled, "R32G32B32_USCALED", us(32), 3),
        rgba(R32G32B32A32Uscaled, "R32G32B32A32_USCALED", us(32), 4),
        rgba(R32Snorm, "R32_SNORM", sn(32), 1),
        rgba(R32G32Snorm, "R32G32_SNORM", sn(32), 2),
        rgba(R32G32B32Snorm, "R32G32B32_SNORM", sn(32), 3),
        rgba(R32G32B32A32Snorm, "R32G32B32A32_SNORM", sn(32), 4),
        rgba(R32Sscaled, "R32_SSCALED", ss(32), 1),
        rgba(R32G32Sscaled, "R32G32_SSCALED", ss(32), 2),
        rgba(R32G32B32Sscaled, "R32G32B32_SSCALED", ss(32), 3),
        rgba(R32G32B32A32Sscaled, "R32G32B32A32_SSCALED", ss(32), 4),
        rgba(R32Float, "R32_FLOAT", fl(32), 1),
        rgba(R32G32Float, "R32G32_FLOAT", fl(32), 2),
        rgba(R32G32B32Float, "R32G32B32_FLOAT", fl(32), 3),
        rgba(R32G32B32A32Float, "R32G32B32A32_FLOAT", fl(32), 4),
        rgba(R16Float, "R16_FLOAT", fl(16), 1),
        rgba(R16G16Float, "R16G16_FLOAT", fl(16), 2),
        rgba(R16G16B16Float, "R16G16B16_FLOAT", fl(16), 3),
        rgba(R16G16B16A16Float, "R16G16B16A16_FLOAT", fl(16), 4),
        // Depth and stencil.
        depth_stencil(S8Uscaled, "S8_USCALED", [us(8), none, none, none], [Zero, X, Zero, One], &zs::S8),
        depth_stencil(Z16Unorm, "Z16_UNORM", [un(16), none, none, none], [X, Zero, Zero, One], &zs::Z16),
        depth_stencil(Z32Unorm, "Z32_UNORM", [un(32), none, none, none], [X, Zero, Zero, One], &zs::Z32_UNORM),
        depth_stencil(Z32Float, "Z32_FLOAT", [fl(32), none, none, none], [X, Zero, Zero, One], &zs::Z32_FLOAT),
        depth_stencil(Z24UnormS8Uscaled, "Z24_UNORM_S8_USCALED", [un(24), us(8), none, none], [X, Y, Zero, One], &zs::Z24S8),
        depth_stencil(S8UscaledZ24Unorm, "S8_USCALED_Z24_UNORM", [us(8), un(24), none, none], [Y, X, Zero, One], &zs::S8Z24),
        depth_stencil(Z24X8Unorm, "Z24X8_UNORM", [un(24), void(8), none, none], [X, Zero, Zero, One], &zs::Z24X8),
        depth_stencil(X8Z24Unorm, "X8Z24_UNORM", [void(8), un(24), none, none], [Y, Zero, Zero, One], &zs::X8Z24),
        depth_stencil(Z32FloatS8X24Uscaled, "Z32_FLOAT_S8X24_USCALED", [fl(32), us(8), void(24), none], [X, Y, Zero, One], &zs::Z32F_S8X24),
        depth_stencil(X24S8Uscaled, "X24S8_USCALED", [void(24), us(8), none, none], [Zero, Y, Zero, One], &zs::X24S8),
        depth_stencil(S8X24Uscaled, "S8X24_USCALED", [us(8), void(24), none, none], [Zero, X, Zero, One], &zs::S8X24),
        // S3TC
        compressed(Dxt1Rgb, "DXT1_RGB", &s3tc::DXT1_RGB),
        compressed(Dxt1Rgba, "DXT1_RGBA", &s3tc::DXT1_RGBA),
        compressed(Dxt3Rgba, "DXT3_RGBA", &s3tc::DXT3_RGBA),
        compressed(Dxt5Rgba, "DXT5_RGBA", &s3tc::DXT5_RGBA),
        compressed(Dxt1Srgb, "DXT1_SRGB", &s3tc::DXT1_SRGB),
        compressed(Dxt1Srgba, "DXT1_SRGBA", &s3tc::DXT1_SRGBA),
        compressed(Dxt3Srgba, "DXT3_SRGBA", &s3tc::DXT3_SRGBA),
        compressed(Dxt5Srgba, "DXT5_SRGBA", &s3tc::DXT5_SRGBA),
    ]
};

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn descriptions_match_formats() {
        crate::initialize();
        for format in Format::iter() {
            assert_eq!(format, lookup(format).format);
            assert_eq!(format, lookup_id(format.id()).format);
        }
    }

    #[test]
    fn block_bits_are_whole_bytes() {
        for desc in descriptions() {
            assert_eq!(0, desc.block.bits % 8, "{}", desc.name);
        }
    }

    #[test]
    fn plain_channel_sizes_sum_to_block_bits() {
        for desc in descriptions().iter().filter(|d| d.layout != Layout::BlockCompressed) {
            let sum: u32 = desc.channels.iter().map(|c| c.size).sum();
            assert_eq!(desc.block.bits, sum, "{}", desc.name);
        }
    }

    #[test]
    fn names_are_unique() {
        for desc in descriptions() {
            assert_eq!(desc.format, find_by_name(desc.name).unwrap().format);
        }
        assert!(find_by_name("R8G8B8A8_UINT").is_none());
    }

    #[test]
    fn channel_shifts() {
        crate::initialize();
        let desc = lookup(Format::R10G10B10A2Unorm);
        assert_eq!(
            [0, 10, 20, 30],
            [0, 1, 2, 3].map(|i| desc.channels[i].shift)
        );
        assert!(!desc.is_array);
        assert!(lookup(Format::B8G8R8X8Unorm).is_array);
        assert!(lookup(Format::R32G32B32A32Float).is_array);
        assert!(!lookup(Format::Z24UnormS8Uscaled).is_array);
    }

    #[test]
    fn block_sizes() {
        crate::initialize();
        assert_eq!(
            Block {
                width: 4,
                height: 4,
                bits: 64
            },
            lookup(Format::Dxt1Rgba).block
        );
        assert_eq!(128, lookup(Format::Dxt5Srgba).block.bits);
        assert_eq!(64, lookup(Format::Z32FloatS8X24Uscaled).block.bits);
        assert_eq!(24, lookup(Format::R8G8B8Srgb).block.bits);
    }

    #[test]
    fn depth_stencil_capabilities() {
        crate::initialize();
        assert!(lookup(Format::S8Uscaled).depth().is_none());
        assert!(lookup(Format::S8Uscaled).stencil().is_some());
        assert!(lookup(Format::Z24X8Unorm).stencil().is_none());
        assert!(lookup(Format::Z24UnormS8Uscaled).depth().is_some());
        assert!(lookup(Format::B8G8R8A8Unorm).depth().is_none());
    }

    #[test]
    #[should_panic]
    fn lookup_unknown_id() {
        lookup_id(u32::MAX);
    }
}
