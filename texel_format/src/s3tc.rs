//! DXT1, DXT3 and DXT5 block compression through an optional native library.
//!
//! The block algorithms themselves are provided by an [S3tcCodec].
//! The codec is bound once by [crate::initialize] and conversions return
//! [ConvertError::Unsupported] if no codec could be bound.
use std::{
    ffi::{c_int, c_uint},
    path::Path,
    sync::OnceLock,
};

use log::{info, warn};

use crate::{
    channel::ubyte_to_float,
    description::{FormatCodec, FormatDescription},
    error::ConvertError,
    srgb::{
        linear_8unorm_to_srgb_8unorm, linear_float_to_srgb_8unorm, srgb_8unorm_to_linear_8unorm,
        srgb_8unorm_to_linear_float,
    },
    InitOptions,
};

const BLOCK_DIM: usize = 4;

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum S3tcVariant {
    /// DXT1 without alpha.
    Dxt1Rgb,
    /// DXT1 with 1-bit punch through alpha.
    Dxt1Rgba,
    /// DXT3 with explicit 4-bit alpha.
    Dxt3Rgba,
    /// DXT5 with interpolated alpha.
    Dxt5Rgba,
}

impl S3tcVariant {
    pub const fn block_bytes(self) -> usize {
        match self {
            S3tcVariant::Dxt1Rgb | S3tcVariant::Dxt1Rgba => 8,
            S3tcVariant::Dxt3Rgba | S3tcVariant::Dxt5Rgba => 16,
        }
    }

    /// The number of 8-bit components per texel passed to the compressor.
    pub fn components(self) -> usize {
        match self {
            S3tcVariant::Dxt1Rgb => 3,
            _ => 4,
        }
    }

    pub fn gl_format(self) -> c_uint {
        match self {
            S3tcVariant::Dxt1Rgb => dxtn_sys::GL_COMPRESSED_RGB_S3TC_DXT1_EXT,
            S3tcVariant::Dxt1Rgba => dxtn_sys::GL_COMPRESSED_RGBA_S3TC_DXT1_EXT,
            S3tcVariant::Dxt3Rgba => dxtn_sys::GL_COMPRESSED_RGBA_S3TC_DXT3_EXT,
            S3tcVariant::Dxt5Rgba => dxtn_sys::GL_COMPRESSED_RGBA_S3TC_DXT5_EXT,
        }
    }
}

/// The block decoder and encoder used for S3TC formats.
pub trait S3tcCodec: Send + Sync {
    /// Decodes texel `(i, j)` with `i` and `j` in `0..4` of the block at the start of `block`.
    fn fetch_texel(&self, variant: S3tcVariant, block: &[u8], i: u32, j: u32) -> [u8; 4];

    /// Encodes `width` x `height` texels with `components` bytes each into one block.
    fn compress_block(
        &self,
        variant: S3tcVariant,
        components: usize,
        width: u32,
        height: u32,
        src: &[u8],
        dst: &mut [u8],
    );
}

/// An [S3tcCodec] backed by the native txc_dxtn entry points.
pub struct NativeCodec {
    library: dxtn_sys::Library,
}

impl NativeCodec {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, dxtn_sys::LoadError> {
        // The library is only called through the five txc_dxtn signatures.
        let library = unsafe { dxtn_sys::Library::open(path.as_ref().as_os_str())? };
        Ok(Self { library })
    }
}

impl S3tcCodec for NativeCodec {
    fn fetch_texel(&self, variant: S3tcVariant, block: &[u8], i: u32, j: u32) -> [u8; 4] {
        assert!(block.len() >= variant.block_bytes());
        assert!(i < BLOCK_DIM as u32 && j < BLOCK_DIM as u32);

        let fetch = match variant {
            S3tcVariant::Dxt1Rgb => self.library.fetch_2d_texel_rgb_dxt1,
            S3tcVariant::Dxt1Rgba => self.library.fetch_2d_texel_rgba_dxt1,
            S3tcVariant::Dxt3Rgba => self.library.fetch_2d_texel_rgba_dxt3,
            S3tcVariant::Dxt5Rgba => self.library.fetch_2d_texel_rgba_dxt5,
        };

        let mut texel = [0u8; 4];
        // A row stride of 0 addresses texels within the single block.
        unsafe {
            fetch(
                0,
                block.as_ptr(),
                i as c_int,
                j as c_int,
                texel.as_mut_ptr().cast(),
            )
        };
        texel
    }

    fn compress_block(
        &self,
        variant: S3tcVariant,
        components: usize,
        width: u32,
        height: u32,
        src: &[u8],
        dst: &mut [u8],
    ) {
        assert!(src.len() >= components * width as usize * height as usize);
        assert!(dst.len() >= variant.block_bytes());

        unsafe {
            (self.library.tx_compress_dxtn)(
                components as c_int,
                width as c_int,
                height as c_int,
                src.as_ptr(),
                variant.gl_format(),
                dst.as_mut_ptr(),
                0,
            )
        };
    }
}

static CODEC: OnceLock<Option<Box<dyn S3tcCodec>>> = OnceLock::new();

pub(crate) fn initialize(options: &InitOptions) {
    CODEC.get_or_init(|| {
        let path = options.dxtn_library_path();
        match NativeCodec::open(&path) {
            Ok(codec) => {
                info!("Loaded DXTn library {path:?}");
                Some(Box::new(codec) as Box<dyn S3tcCodec>)
            }
            Err(e) => {
                warn!("S3TC formats are unavailable: {path:?}: {e}");
                None
            }
        }
    });
}

/// Returns `true` if S3TC formats can be converted.
pub fn is_available() -> bool {
    codec().is_some()
}

/// The bound codec or `None` if S3TC formats are unavailable.
pub fn codec() -> Option<&'static dyn S3tcCodec> {
    CODEC.get().and_then(|codec| codec.as_deref())
}

/// The compression variant and color space of an S3TC format.
#[derive(Debug)]
pub struct S3tcFormat {
    pub variant: S3tcVariant,
    /// RGB is sRGB encoded and alpha is linear.
    pub srgb: bool,
}

pub(crate) const DXT1_RGB: S3tcFormat = S3tcFormat::new(S3tcVariant::Dxt1Rgb, false);
pub(crate) const DXT1_RGBA: S3tcFormat = S3tcFormat::new(S3tcVariant::Dxt1Rgba, false);
pub(crate) const DXT3_RGBA: S3tcFormat = S3tcFormat::new(S3tcVariant::Dxt3Rgba, false);
pub(crate) const DXT5_RGBA: S3tcFormat = S3tcFormat::new(S3tcVariant::Dxt5Rgba, false);
pub(crate) const DXT1_SRGB: S3tcFormat = S3tcFormat::new(S3tcVariant::Dxt1Rgb, true);
pub(crate) const DXT1_SRGBA: S3tcFormat = S3tcFormat::new(S3tcVariant::Dxt1Rgba, true);
pub(crate) const DXT3_SRGBA: S3tcFormat = S3tcFormat::new(S3tcVariant::Dxt3Rgba, true);
pub(crate) const DXT5_SRGBA: S3tcFormat = S3tcFormat::new(S3tcVariant::Dxt5Rgba, true);

/// Calls `f` with the byte offset of each block and the texel rectangle it covers.
fn for_each_block(
    block_bytes: usize,
    stride: usize,
    width: u32,
    height: u32,
    mut f: impl FnMut(usize, usize, usize, usize, usize),
) {
    let (width, height) = (width as usize, height as usize);
    for y in (0..height).step_by(BLOCK_DIM) {
        for x in (0..width).step_by(BLOCK_DIM) {
            let offset = y / BLOCK_DIM * stride + x / BLOCK_DIM * block_bytes;
            let bw = BLOCK_DIM.min(width - x);
            let bh = BLOCK_DIM.min(height - y);
            f(offset, x, y, bw, bh);
        }
    }
}

impl S3tcFormat {
    const fn new(variant: S3tcVariant, srgb: bool) -> Self {
        Self { variant, srgb }
    }

    pub fn fetch_rgba_8unorm_with(
        &self,
        codec: &dyn S3tcCodec,
        block: &[u8],
        i: u32,
        j: u32,
    ) -> [u8; 4] {
        let mut rgba = codec.fetch_texel(self.variant, block, i, j);
        if self.srgb {
            for c in &mut rgba[..3] {
                *c = srgb_8unorm_to_linear_8unorm(*c);
            }
        }
        rgba
    }

    pub fn fetch_rgba_float_with(
        &self,
        codec: &dyn S3tcCodec,
        block: &[u8],
        i: u32,
        j: u32,
    ) -> [f32; 4] {
        let rgba = codec.fetch_texel(self.variant, block, i, j);
        let mut result = rgba.map(ubyte_to_float);
        if self.srgb {
            for (c, v) in result[..3].iter_mut().zip(rgba) {
                *c = srgb_8unorm_to_linear_float(v);
            }
        }
        result
    }

    #[allow(clippy::too_many_arguments)]
    pub fn unpack_rgba_float_with(
        &self,
        codec: &dyn S3tcCodec,
        dst: &mut [f32],
        dst_stride: usize,
        src: &[u8],
        src_stride: usize,
        width: u32,
        height: u32,
    ) {
        let block_bytes = self.variant.block_bytes();
        for_each_block(block_bytes, src_stride, width, height, |offset, x, y, bw, bh| {
            let block = &src[offset..offset + block_bytes];
            for j in 0..bh {
                for i in 0..bw {
                    let start = (y + j) * dst_stride + (x + i) * 4;
                    dst[start..start + 4]
                        .copy_from_slice(&self.fetch_rgba_float_with(codec, block, i as u32, j as u32));
                }
            }
        });
    }

    #[allow(clippy::too_many_arguments)]
    pub fn unpack_rgba_8unorm_with(
        &self,
        codec: &dyn S3tcCodec,
        dst: &mut [u8],
        dst_stride: usize,
        src: &[u8],
        src_stride: usize,
        width: u32,
        height: u32,
    ) {
        let block_bytes = self.variant.block_bytes();
        for_each_block(block_bytes, src_stride, width, height, |offset, x, y, bw, bh| {
            let block = &src[offset..offset + block_bytes];
            for j in 0..bh {
                for i in 0..bw {
                    let start = (y + j) * dst_stride + (x + i) * 4;
                    dst[start..start + 4]
                        .copy_from_slice(&self.fetch_rgba_8unorm_with(codec, block, i as u32, j as u32));
                }
            }
        });
    }

    /// Returns `false` if any value was clamped to `[0, 1]`.
    #[allow(clippy::too_many_arguments)]
    pub fn pack_rgba_float_with(
        &self,
        codec: &dyn S3tcCodec,
        dst: &mut [u8],
        dst_stride: usize,
        src: &[f32],
        src_stride: usize,
        width: u32,
        height: u32,
    ) -> bool {
        let mut exact = true;
        self.pack_blocks(codec, dst, dst_stride, width, height, |x, y| {
            let start = y * src_stride + x * 4;
            let rgba = &src[start..start + 4];
            let mut texel = [0u8; 4];
            for (c, (out, value)) in texel.iter_mut().zip(rgba).enumerate() {
                exact &= (0.0..=1.0).contains(value);
                *out = if self.srgb && c < 3 {
                    linear_float_to_srgb_8unorm(*value)
                } else {
                    // Truncate toward zero.
                    (value.clamp(0.0, 1.0) * 255.0) as u8
                };
            }
            texel
        });
        exact
    }

    #[allow(clippy::too_many_arguments)]
    pub fn pack_rgba_8unorm_with(
        &self,
        codec: &dyn S3tcCodec,
        dst: &mut [u8],
        dst_stride: usize,
        src: &[u8],
        src_stride: usize,
        width: u32,
        height: u32,
    ) {
        self.pack_blocks(codec, dst, dst_stride, width, height, |x, y| {
            let start = y * src_stride + x * 4;
            let mut texel = [0u8; 4];
            texel.copy_from_slice(&src[start..start + 4]);
            if self.srgb {
                for c in &mut texel[..3] {
                    *c = linear_8unorm_to_srgb_8unorm(*c);
                }
            }
            texel
        });
    }

    /// Compresses each block from the RGBA8 texels returned by `texel(x, y)`.
    fn pack_blocks(
        &self,
        codec: &dyn S3tcCodec,
        dst: &mut [u8],
        dst_stride: usize,
        width: u32,
        height: u32,
        mut texel: impl FnMut(usize, usize) -> [u8; 4],
    ) {
        let block_bytes = self.variant.block_bytes();
        let components = self.variant.components();
        for_each_block(block_bytes, dst_stride, width, height, |offset, x, y, bw, bh| {
            let mut tmp = [[[0u8; 4]; BLOCK_DIM]; BLOCK_DIM];
            for (j, row) in tmp.iter_mut().enumerate().take(bh) {
                for (i, rgba) in row.iter_mut().enumerate().take(bw) {
                    *rgba = texel(x + i, y + j);
                }
            }

            let rgba: &[u8] = bytemuck::cast_slice(&tmp);
            let mut rgb = [0u8; BLOCK_DIM * BLOCK_DIM * 3];
            let texels = if components == 3 {
                for (out, value) in rgb.chunks_exact_mut(3).zip(rgba.chunks_exact(4)) {
                    out.copy_from_slice(&value[..3]);
                }
                &rgb[..]
            } else {
                rgba
            };

            codec.compress_block(
                self.variant,
                components,
                BLOCK_DIM as u32,
                BLOCK_DIM as u32,
                texels,
                &mut dst[offset..offset + block_bytes],
            );
        });
    }
}

fn require_codec(desc: &FormatDescription) -> Result<&'static dyn S3tcCodec, ConvertError> {
    codec().ok_or(ConvertError::Unsupported {
        format: desc.format,
    })
}

impl FormatCodec for S3tcFormat {
    fn fetch_rgba_float(
        &self,
        desc: &FormatDescription,
        block: &[u8],
        i: u32,
        j: u32,
    ) -> Result<[f32; 4], ConvertError> {
        let codec = require_codec(desc)?;
        Ok(self.fetch_rgba_float_with(codec, block, i, j))
    }

    fn fetch_rgba_8unorm(
        &self,
        desc: &FormatDescription,
        block: &[u8],
        i: u32,
        j: u32,
    ) -> Result<[u8; 4], ConvertError> {
        let codec = require_codec(desc)?;
        Ok(self.fetch_rgba_8unorm_with(codec, block, i, j))
    }

    fn unpack_rgba_float(
        &self,
        desc: &FormatDescription,
        dst: &mut [f32],
        dst_stride: usize,
        src: &[u8],
        src_stride: usize,
        width: u32,
        height: u32,
    ) -> Result<(), ConvertError> {
        let codec = require_codec(desc)?;
        self.unpack_rgba_float_with(codec, dst, dst_stride, src, src_stride, width, height);
        Ok(())
    }

    fn pack_rgba_float(
        &self,
        desc: &FormatDescription,
        dst: &mut [u8],
        dst_stride: usize,
        src: &[f32],
        src_stride: usize,
        width: u32,
        height: u32,
    ) -> Result<bool, ConvertError> {
        let codec = require_codec(desc)?;
        Ok(self.pack_rgba_float_with(codec, dst, dst_stride, src, src_stride, width, height))
    }

    fn unpack_rgba_8unorm(
        &self,
        desc: &FormatDescription,
        dst: &mut [u8],
        dst_stride: usize,
        src: &[u8],
        src_stride: usize,
        width: u32,
        height: u32,
    ) -> Result<(), ConvertError> {
        let codec = require_codec(desc)?;
        self.unpack_rgba_8unorm_with(codec, dst, dst_stride, src, src_stride, width, height);
        Ok(())
    }

    fn pack_rgba_8unorm(
        &self,
        desc: &FormatDescription,
        dst: &mut [u8],
        dst_stride: usize,
        src: &[u8],
        src_stride: usize,
        width: u32,
        height: u32,
    ) -> Result<bool, ConvertError> {
        let codec = require_codec(desc)?;
        self.pack_rgba_8unorm_with(codec, dst, dst_stride, src, src_stride, width, height);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Decodes texels as `[block[0], block[1], i * 64, j * 64 + 63]`
    /// and records every compressed block.
    #[derive(Default)]
    struct MockCodec {
        compressed: Mutex<Vec<(S3tcVariant, usize, Vec<u8>)>>,
    }

    impl S3tcCodec for MockCodec {
        fn fetch_texel(&self, _variant: S3tcVariant, block: &[u8], i: u32, j: u32) -> [u8; 4] {
            [block[0], block[1], i as u8 * 64, j as u8 * 64 + 63]
        }

        fn compress_block(
            &self,
            variant: S3tcVariant,
            components: usize,
            width: u32,
            height: u32,
            src: &[u8],
            dst: &mut [u8],
        ) {
            assert_eq!((4, 4), (width, height));
            dst.fill(0xee);
            dst[0] = src[0];
            self.compressed
                .lock()
                .unwrap()
                .push((variant, components, src.to_vec()));
        }
    }

    #[test]
    fn block_bytes() {
        assert_eq!(8, S3tcVariant::Dxt1Rgb.block_bytes());
        assert_eq!(8, S3tcVariant::Dxt1Rgba.block_bytes());
        assert_eq!(16, S3tcVariant::Dxt3Rgba.block_bytes());
        assert_eq!(16, S3tcVariant::Dxt5Rgba.block_bytes());
    }

    #[test]
    fn fetch_float() {
        let codec = MockCodec::default();
        assert_eq!(
            [1.0, 0.0, 128.0 / 255.0, 1.0],
            DXT5_RGBA.fetch_rgba_float_with(&codec, &[0xff, 0x00], 2, 3)
        );
    }

    #[test]
    fn fetch_srgb_leaves_alpha_linear() {
        crate::initialize();
        let codec = MockCodec::default();
        assert_eq!(
            [255, 0, 0, 63],
            DXT1_SRGBA.fetch_rgba_8unorm_with(&codec, &[0xff, 0x00], 0, 0)
        );
        let rgba = DXT1_SRGBA.fetch_rgba_float_with(&codec, &[0xbc, 0x00], 0, 0);
        assert!((rgba[0] - 0.502886458).abs() < 1e-6);
        assert_eq!(63.0 / 255.0, rgba[3]);
    }

    #[test]
    fn unpack_partial_blocks() {
        let codec = MockCodec::default();
        // 6x2 texels spans two 8-byte blocks.
        let mut src = [0u8; 16];
        src[0] = 0x10;
        src[8] = 0x20;
        let mut dst = [0u8; 6 * 2 * 4];
        DXT1_RGBA.unpack_rgba_8unorm_with(&codec, &mut dst, 6 * 4, &src, 16, 6, 2);

        assert_eq!([0x10, 0, 0, 63], dst[0..4]);
        assert_eq!([0x10, 0, 192, 63], dst[12..16]);
        assert_eq!([0x20, 0, 0, 63], dst[16..20]);
        assert_eq!([0x20, 0, 64, 127], dst[44..48]);
    }

    #[test]
    fn pack_rgb_uses_three_components() {
        let codec = MockCodec::default();
        let src = [0.5f32, 0.25, 1.0, 1.0].repeat(16);
        let mut dst = [0u8; 8];
        assert!(DXT1_RGB.pack_rgba_float_with(&codec, &mut dst, 8, &src, 16, 4, 4));

        // 0.5 * 255 = 127.5 truncates to 127.
        assert_eq!(0x7f, dst[0]);
        let compressed = codec.compressed.lock().unwrap();
        assert_eq!(1, compressed.len());
        let (variant, components, texels) = &compressed[0];
        assert_eq!(S3tcVariant::Dxt1Rgb, *variant);
        assert_eq!(3, *components);
        assert_eq!(&[0x7f, 0x3f, 0xff], &texels[..3]);
        assert_eq!(48, texels.len());
    }

    #[test]
    fn pack_partial_block_pads_with_zero() {
        let codec = MockCodec::default();
        let src = [0xff; 2 * 4];
        let mut dst = [0u8; 16];
        assert!(!DXT5_RGBA.pack_rgba_float_with(
            &codec,
            &mut dst,
            16,
            &[2.0f32; 8],
            8,
            2,
            1
        ));
        DXT5_RGBA.pack_rgba_8unorm_with(&codec, &mut dst, 16, &src, 8, 2, 1);

        let compressed = codec.compressed.lock().unwrap();
        let (_, components, texels) = &compressed[1];
        assert_eq!(4, *components);
        assert_eq!(&[0xff; 8], &texels[..8]);
        assert!(texels[8..].iter().all(|b| *b == 0));
    }

    #[test]
    fn pack_srgb_encodes_rgb_only() {
        crate::initialize();
        let codec = MockCodec::default();
        let src = [188u8, 188, 188, 188].repeat(16);
        let mut dst = [0u8; 16];
        DXT3_SRGBA.pack_rgba_8unorm_with(&codec, &mut dst, 16, &src, 16, 4, 4);

        let compressed = codec.compressed.lock().unwrap();
        let texels = &compressed[0].2;
        assert_eq!(linear_8unorm_to_srgb_8unorm(188), texels[0]);
        assert_eq!(188, texels[3]);
    }

    #[test]
    fn missing_library_is_unsupported() {
        crate::initialize();
        if is_available() {
            return;
        }
        let desc = crate::lookup(crate::Format::Dxt1Rgb);
        assert_eq!(
            Err(ConvertError::Unsupported {
                format: crate::Format::Dxt1Rgb
            }),
            desc.fetch_rgba_float(&[0u8; 8], 0, 0)
        );
        let mut dst = [0u8; 8];
        assert!(desc
            .pack_rgba_8unorm(&mut dst, 8, &[0u8; 64], 16, 4, 4)
            .is_err());
    }
}
