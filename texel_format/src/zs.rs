//! Depth and stencil conversions.
//!
//! Each layout stores depth and stencil at fixed bit positions of a little endian word.
//! Packing one component keeps the other component already in the destination.
//! Padding bits are written as zero.
use std::fmt::Debug;

/// Depth conversions for a rectangle of texels.
///
/// Packed buffers use strides in bytes.
/// Unpacked buffers use strides in elements with 1 element per texel.
#[allow(clippy::too_many_arguments)]
pub trait DepthCodec: Debug + Sync {
    fn unpack_z_float(
        &self,
        dst: &mut [f32],
        dst_stride: usize,
        src: &[u8],
        src_stride: usize,
        width: u32,
        height: u32,
    );

    /// Returns `false` if any value was clamped to fit the format.
    fn pack_z_float(
        &self,
        dst: &mut [u8],
        dst_stride: usize,
        src: &[f32],
        src_stride: usize,
        width: u32,
        height: u32,
    ) -> bool;

    fn unpack_z_32unorm(
        &self,
        dst: &mut [u32],
        dst_stride: usize,
        src: &[u8],
        src_stride: usize,
        width: u32,
        height: u32,
    );

    fn pack_z_32unorm(
        &self,
        dst: &mut [u8],
        dst_stride: usize,
        src: &[u32],
        src_stride: usize,
        width: u32,
        height: u32,
    );
}

/// Stencil conversions for a rectangle of texels.
///
/// Stencil values are integers and are copied without any rescaling.
pub trait StencilCodec: Debug + Sync {
    fn unpack_s_8uscaled(
        &self,
        dst: &mut [u8],
        dst_stride: usize,
        src: &[u8],
        src_stride: usize,
        width: u32,
        height: u32,
    );

    fn pack_s_8uscaled(
        &self,
        dst: &mut [u8],
        dst_stride: usize,
        src: &[u8],
        src_stride: usize,
        width: u32,
        height: u32,
    );
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum DepthKind {
    /// Normalized unsigned integer with the given number of bits.
    Unorm(u32),
    Float,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct DepthField {
    pub kind: DepthKind,
    pub shift: u32,
}

/// The bit positions of depth and stencil within a texel.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct ZsLayout {
    pub bytes: usize,
    pub depth: Option<DepthField>,
    /// The shift of the 8-bit stencil value.
    pub stencil: Option<u32>,
}

const fn depth(kind: DepthKind, shift: u32) -> Option<DepthField> {
    Some(DepthField { kind, shift })
}

pub(crate) const S8: ZsLayout = ZsLayout {
    bytes: 1,
    depth: None,
    stencil: Some(0),
};

pub(crate) const Z16: ZsLayout = ZsLayout {
    bytes: 2,
    depth: depth(DepthKind::Unorm(16), 0),
    stencil: None,
};

pub(crate) const Z32_UNORM: ZsLayout = ZsLayout {
    bytes: 4,
    depth: depth(DepthKind::Unorm(32), 0),
    stencil: None,
};

pub(crate) const Z32_FLOAT: ZsLayout = ZsLayout {
    bytes: 4,
    depth: depth(DepthKind::Float, 0),
    stencil: None,
};

pub(crate) const Z24S8: ZsLayout = ZsLayout {
    bytes: 4,
    depth: depth(DepthKind::Unorm(24), 0),
    stencil: Some(24),
};

pub(crate) const S8Z24: ZsLayout = ZsLayout {
    bytes: 4,
    depth: depth(DepthKind::Unorm(24), 8),
    stencil: Some(0),
};

pub(crate) const Z24X8: ZsLayout = ZsLayout {
    bytes: 4,
    depth: depth(DepthKind::Unorm(24), 0),
    stencil: None,
};

pub(crate) const X8Z24: ZsLayout = ZsLayout {
    bytes: 4,
    depth: depth(DepthKind::Unorm(24), 8),
    stencil: None,
};

// The float occupies the first 4 bytes and the stencil the fifth byte.
pub(crate) const Z32F_S8X24: ZsLayout = ZsLayout {
    bytes: 8,
    depth: depth(DepthKind::Float, 0),
    stencil: Some(32),
};

pub(crate) const X24S8: ZsLayout = ZsLayout {
    bytes: 4,
    depth: None,
    stencil: Some(24),
};

pub(crate) const S8X24: ZsLayout = ZsLayout {
    bytes: 4,
    depth: None,
    stencil: Some(0),
};

pub(crate) const fn depth_codec(layout: &'static ZsLayout) -> Option<&'static dyn DepthCodec> {
    if layout.depth.is_some() {
        Some(layout)
    } else {
        None
    }
}

pub(crate) const fn stencil_codec(layout: &'static ZsLayout) -> Option<&'static dyn StencilCodec> {
    if layout.stencil.is_some() {
        Some(layout)
    } else {
        None
    }
}

impl DepthKind {
    fn bits(self) -> u32 {
        match self {
            DepthKind::Unorm(bits) => bits,
            DepthKind::Float => 32,
        }
    }

    fn max(self) -> u32 {
        (u32::MAX as u64 >> (32 - self.bits())) as u32
    }

    fn to_float(self, z: u32) -> f32 {
        match self {
            DepthKind::Unorm(_) => (z as f64 * (1.0 / self.max() as f64)) as f32,
            DepthKind::Float => f32::from_bits(z),
        }
    }

    /// Converts `z` to the stored bits, truncating toward zero.
    fn from_float(self, z: f32) -> (u32, bool) {
        match self {
            DepthKind::Unorm(_) => {
                let in_range = (0.0..=1.0).contains(&z);
                let clamped = if z.is_nan() { 0.0 } else { z.clamp(0.0, 1.0) };
                ((clamped as f64 * self.max() as f64) as u32, in_range)
            }
            DepthKind::Float => (z.to_bits(), true),
        }
    }

    /// Rescales to 32 bits by replicating the high bits into the low bits.
    fn to_32unorm(self, z: u32) -> u32 {
        match self {
            DepthKind::Unorm(32) => z,
            DepthKind::Unorm(bits) => {
                let mut value = z << (32 - bits);
                let mut filled = bits;
                while filled < 32 {
                    value |= value >> filled;
                    filled *= 2;
                }
                value
            }
            DepthKind::Float => {
                let z = f32::from_bits(z);
                let clamped = if z.is_nan() { 0.0 } else { z.clamp(0.0, 1.0) };
                (clamped as f64 * u32::MAX as f64) as u32
            }
        }
    }

    fn from_32unorm(self, z: u32) -> u32 {
        match self {
            DepthKind::Unorm(bits) => z >> (32 - bits),
            DepthKind::Float => ((z as f64 * (1.0 / u32::MAX as f64)) as f32).to_bits(),
        }
    }
}

fn field_mask(shift: u32, bits: u32) -> u64 {
    (u64::MAX >> (64 - bits)) << shift
}

impl ZsLayout {
    fn depth_field(&self) -> DepthField {
        self.depth.expect("format has no depth")
    }

    fn stencil_shift(&self) -> u32 {
        self.stencil.expect("format has no stencil")
    }

    fn depth_mask(&self) -> u64 {
        self.depth
            .map(|d| field_mask(d.shift, d.kind.bits()))
            .unwrap_or_default()
    }

    fn stencil_mask(&self) -> u64 {
        self.stencil
            .map(|shift| field_mask(shift, 8))
            .unwrap_or_default()
    }

    // Byte swapping on big endian targets happens in the conversion from bytes.
    fn read_word(&self, texel: &[u8]) -> u64 {
        let mut word = [0u8; 8];
        word[..self.bytes].copy_from_slice(&texel[..self.bytes]);
        u64::from_le_bytes(word)
    }

    fn write_word(&self, texel: &mut [u8], word: u64) {
        texel[..self.bytes].copy_from_slice(&word.to_le_bytes()[..self.bytes]);
    }

    fn load_z(&self, texel: &[u8]) -> u32 {
        let field = self.depth_field();
        ((self.read_word(texel) & field_mask(field.shift, field.kind.bits())) >> field.shift) as u32
    }

    fn store_z(&self, texel: &mut [u8], z: u32) {
        let field = self.depth_field();
        let kept = self.read_word(texel) & self.stencil_mask();
        self.write_word(texel, kept | ((z as u64) << field.shift));
    }

    fn load_s(&self, texel: &[u8]) -> u8 {
        (self.read_word(texel) >> self.stencil_shift()) as u8
    }

    fn store_s(&self, texel: &mut [u8], s: u8) {
        let kept = self.read_word(texel) & self.depth_mask();
        self.write_word(texel, kept | ((s as u64) << self.stencil_shift()));
    }

    #[allow(clippy::too_many_arguments)]
    fn for_each_unpack<T>(
        &self,
        dst: &mut [T],
        dst_stride: usize,
        src: &[u8],
        src_stride: usize,
        width: u32,
        height: u32,
        f: impl Fn(&[u8]) -> T,
    ) {
        for y in 0..height as usize {
            let src_row = &src[y * src_stride..];
            let dst_row = &mut dst[y * dst_stride..];
            for (texel, value) in src_row
                .chunks_exact(self.bytes)
                .zip(dst_row.iter_mut())
                .take(width as usize)
            {
                *value = f(texel);
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn for_each_pack<T: Copy>(
        &self,
        dst: &mut [u8],
        dst_stride: usize,
        src: &[T],
        src_stride: usize,
        width: u32,
        height: u32,
        mut f: impl FnMut(&mut [u8], T),
    ) {
        for y in 0..height as usize {
            let src_row = &src[y * src_stride..];
            let dst_row = &mut dst[y * dst_stride..];
            for (texel, value) in dst_row
                .chunks_exact_mut(self.bytes)
                .zip(src_row.iter())
                .take(width as usize)
            {
                f(texel, *value);
            }
        }
    }
}

impl DepthCodec for ZsLayout {
    fn unpack_z_float(
        &self,
        dst: &mut [f32],
        dst_stride: usize,
        src: &[u8],
        src_stride: usize,
        width: u32,
        height: u32,
    ) {
        let kind = self.depth_field().kind;
        self.for_each_unpack(dst, dst_stride, src, src_stride, width, height, |texel| {
            kind.to_float(self.load_z(texel))
        });
    }

    fn pack_z_float(
        &self,
        dst: &mut [u8],
        dst_stride: usize,
        src: &[f32],
        src_stride: usize,
        width: u32,
        height: u32,
    ) -> bool {
        let kind = self.depth_field().kind;
        let mut exact = true;
        self.for_each_pack(dst, dst_stride, src, src_stride, width, height, |texel, z| {
            let (z, in_range) = kind.from_float(z);
            exact &= in_range;
            self.store_z(texel, z);
        });
        exact
    }

    fn unpack_z_32unorm(
        &self,
        dst: &mut [u32],
        dst_stride: usize,
        src: &[u8],
        src_stride: usize,
        width: u32,
        height: u32,
    ) {
        let kind = self.depth_field().kind;
        self.for_each_unpack(dst, dst_stride, src, src_stride, width, height, |texel| {
            kind.to_32unorm(self.load_z(texel))
        });
    }

    fn pack_z_32unorm(
        &self,
        dst: &mut [u8],
        dst_stride: usize,
        src: &[u32],
        src_stride: usize,
        width: u32,
        height: u32,
    ) {
        let kind = self.depth_field().kind;
        self.for_each_pack(dst, dst_stride, src, src_stride, width, height, |texel, z| {
            self.store_z(texel, kind.from_32unorm(z))
        });
    }
}

impl StencilCodec for ZsLayout {
    fn unpack_s_8uscaled(
        &self,
        dst: &mut [u8],
        dst_stride: usize,
        src: &[u8],
        src_stride: usize,
        width: u32,
        height: u32,
    ) {
        self.for_each_unpack(dst, dst_stride, src, src_stride, width, height, |texel| {
            self.load_s(texel)
        });
    }

    fn pack_s_8uscaled(
        &self,
        dst: &mut [u8],
        dst_stride: usize,
        src: &[u8],
        src_stride: usize,
        width: u32,
        height: u32,
    ) {
        self.for_each_pack(dst, dst_stride, src, src_stride, width, height, |texel, s| {
            self.store_s(texel, s)
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unpack_z(layout: &ZsLayout, texel: &[u8]) -> f32 {
        let mut z = [0.0];
        layout.unpack_z_float(&mut z, 0, texel, 0, 1, 1);
        z[0]
    }

    fn unpack_z32(layout: &ZsLayout, texel: &[u8]) -> u32 {
        let mut z = [0];
        layout.unpack_z_32unorm(&mut z, 0, texel, 0, 1, 1);
        z[0]
    }

    fn unpack_s(layout: &ZsLayout, texel: &[u8]) -> u8 {
        let mut s = [0];
        layout.unpack_s_8uscaled(&mut s, 0, texel, 0, 1, 1);
        s[0]
    }

    #[test]
    fn z24s8_unpack() {
        let texel = 0x00ffffffu32.to_le_bytes();
        assert_eq!(1.0, unpack_z(&Z24S8, &texel));
        assert_eq!(0, unpack_s(&Z24S8, &texel));

        let texel = 0xff000000u32.to_le_bytes();
        assert_eq!(0.0, unpack_z(&Z24S8, &texel));
        assert_eq!(255, unpack_s(&Z24S8, &texel));
    }

    #[test]
    fn s8z24_unpack() {
        let texel = 0xffffff12u32.to_le_bytes();
        assert_eq!(1.0, unpack_z(&S8Z24, &texel));
        assert_eq!(0x12, unpack_s(&S8Z24, &texel));
    }

    #[test]
    fn x8z24_ignores_padding() {
        assert_eq!(0.0, unpack_z(&X8Z24, &0x000000ffu32.to_le_bytes()));
        assert_eq!(1.0, unpack_z(&Z24X8, &0x00ffffffu32.to_le_bytes()));
    }

    #[test]
    fn z16_unpack() {
        assert_eq!(1.0, unpack_z(&Z16, &[0xff, 0xff]));
        assert_eq!(0xffffffff, unpack_z32(&Z16, &[0xff, 0xff]));
        assert_eq!(0x80008000, unpack_z32(&Z16, &[0x00, 0x80]));
    }

    #[test]
    fn z24_to_32unorm_replicates_bits() {
        assert_eq!(0xffffffff, unpack_z32(&Z24S8, &0x00ffffffu32.to_le_bytes()));
        assert_eq!(0x80000080, unpack_z32(&Z24S8, &0x00800000u32.to_le_bytes()));
        assert_eq!(0x12345612, unpack_z32(&S8Z24, &0x12345600u32.to_le_bytes()));
        assert_eq!(0, unpack_z32(&Z24X8, &0xff000000u32.to_le_bytes()));
    }

    #[test]
    fn z32_unorm_unpack() {
        assert_eq!(1.0, unpack_z(&Z32_UNORM, &[0xff; 4]));
        assert_eq!(0xdeadbeef, unpack_z32(&Z32_UNORM, &0xdeadbeefu32.to_le_bytes()));
    }

    #[test]
    fn z32_float_unpack() {
        assert_eq!(0.25, unpack_z(&Z32_FLOAT, &0.25f32.to_le_bytes()));
        assert_eq!(0xffffffff, unpack_z32(&Z32_FLOAT, &1.0f32.to_le_bytes()));
        assert_eq!(0, unpack_z32(&Z32_FLOAT, &(-1.0f32).to_le_bytes()));
    }

    #[test]
    fn z32f_s8x24_unpack() {
        let mut texel = [0u8; 8];
        texel[..4].copy_from_slice(&0.5f32.to_le_bytes());
        texel[4] = 0x7f;
        texel[5] = 0xaa;
        assert_eq!(0.5, unpack_z(&Z32F_S8X24, &texel));
        assert_eq!(0x7f, unpack_s(&Z32F_S8X24, &texel));
    }

    #[test]
    fn pack_z_keeps_stencil() {
        let mut texel = 0xab000000u32.to_le_bytes();
        assert!(Z24S8.pack_z_float(&mut texel, 0, &[1.0], 0, 1, 1));
        assert_eq!(0xabffffff, u32::from_le_bytes(texel));

        let mut texel = 0x000000abu32.to_le_bytes();
        assert!(S8Z24.pack_z_float(&mut texel, 0, &[1.0], 0, 1, 1));
        assert_eq!(0xffffffab, u32::from_le_bytes(texel));
    }

    #[test]
    fn pack_s_keeps_depth() {
        let mut texel = 0x00123456u32.to_le_bytes();
        Z24S8.pack_s_8uscaled(&mut texel, 0, &[0xcd], 0, 1, 1);
        assert_eq!(0xcd123456, u32::from_le_bytes(texel));

        let mut texel = [0u8; 8];
        texel[..4].copy_from_slice(&1.0f32.to_le_bytes());
        Z32F_S8X24.pack_s_8uscaled(&mut texel, 0, &[0x42], 0, 1, 1);
        assert_eq!(1.0, unpack_z(&Z32F_S8X24, &texel));
        assert_eq!(0x42, texel[4]);
    }

    #[test]
    fn pack_z_clears_padding() {
        let mut texel = [0xff; 4];
        Z24X8.pack_z_float(&mut texel, 0, &[0.0], 0, 1, 1);
        assert_eq!([0; 4], texel);
    }

    #[test]
    fn pack_z_float_clamps_and_truncates() {
        let mut texel = [0u8; 2];
        assert!(!Z16.pack_z_float(&mut texel, 0, &[2.0], 0, 1, 1));
        assert_eq!([0xff, 0xff], texel);

        // 0.5 * 65535 = 32767.5 truncates to 32767.
        assert!(Z16.pack_z_float(&mut texel, 0, &[0.5], 0, 1, 1));
        assert_eq!(0x7fff, u16::from_le_bytes(texel));

        let mut texel = [0u8; 4];
        assert!(!Z32_UNORM.pack_z_float(&mut texel, 0, &[-1.0], 0, 1, 1));
        assert_eq!(0, u32::from_le_bytes(texel));
        assert!(Z32_UNORM.pack_z_float(&mut texel, 0, &[1.0], 0, 1, 1));
        assert_eq!(0xffffffff, u32::from_le_bytes(texel));
    }

    #[test]
    fn pack_z_32unorm() {
        let mut texel = 0xee000000u32.to_le_bytes();
        Z24S8.pack_z_32unorm(&mut texel, 0, &[0x12345678], 0, 1, 1);
        assert_eq!(0xee123456, u32::from_le_bytes(texel));

        let mut texel = [0u8; 2];
        Z16.pack_z_32unorm(&mut texel, 0, &[0xabcdffff], 0, 1, 1);
        assert_eq!(0xabcd, u16::from_le_bytes(texel));

        let mut texel = [0u8; 4];
        Z32_FLOAT.pack_z_32unorm(&mut texel, 0, &[0xffffffff], 0, 1, 1);
        assert_eq!(1.0, f32::from_le_bytes(texel));
    }

    #[test]
    fn stencil_only_layouts() {
        assert_eq!(0x9a, unpack_s(&S8, &[0x9a]));
        assert_eq!(0x9a, unpack_s(&X24S8, &0x9a000000u32.to_le_bytes()));
        assert_eq!(0x9a, unpack_s(&S8X24, &0xffffff9au32.to_le_bytes()));

        let mut texel = [0xff; 4];
        S8X24.pack_s_8uscaled(&mut texel, 0, &[0x01], 0, 1, 1);
        assert_eq!([0x01, 0, 0, 0], texel);
    }

    #[test]
    fn rectangle_with_strides() {
        // 2x2 Z16 texels in rows of 6 bytes.
        let src = [
            0x00, 0x00, 0xff, 0xff, 0x11, 0x11, //
            0xff, 0xff, 0x00, 0x00, 0x22, 0x22,
        ];
        let mut dst = [-1.0f32; 6];
        Z16.unpack_z_float(&mut dst, 3, &src, 6, 2, 2);
        assert_eq!([0.0, 1.0, -1.0, 1.0, 0.0, -1.0], dst);
    }

    #[test]
    fn codecs_match_components() {
        assert!(depth_codec(&S8).is_none());
        assert!(stencil_codec(&S8).is_some());
        assert!(depth_codec(&Z24X8).is_some());
        assert!(stencil_codec(&Z24X8).is_none());
    }
}
