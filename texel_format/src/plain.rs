//! Generic conversions for formats described entirely by their channels.
use crate::{
    channel::{float_to_ubyte, ubyte_to_float, ChannelKind},
    description::{FormatCodec, FormatDescription},
    error::ConvertError,
    srgb::{
        linear_8unorm_to_srgb_8unorm, linear_float_to_srgb_8unorm, srgb_8unorm_to_linear_8unorm,
        srgb_8unorm_to_linear_float,
    },
};

#[derive(Debug)]
pub(crate) struct PlainCodec;

pub(crate) const PLAIN: &dyn FormatCodec = &PlainCodec;

/// Reads the raw bits of each channel from a single texel.
fn read_channels(desc: &FormatDescription, texel: &[u8]) -> [u64; 4] {
    let mut raw = [0u64; 4];
    if desc.is_array {
        for (value, channel) in raw.iter_mut().zip(&desc.channels) {
            if channel.size > 0 {
                let start = channel.shift as usize / 8;
                *value = read_le(&texel[start..start + channel.size as usize / 8]);
            }
        }
    } else {
        let word = read_le(&texel[..desc.bytes_per_block()]);
        for (value, channel) in raw.iter_mut().zip(&desc.channels) {
            if channel.size > 0 {
                *value = (word >> channel.shift) & channel.mask();
            }
        }
    }
    raw
}

fn write_channels(desc: &FormatDescription, raw: &[u64; 4], texel: &mut [u8]) {
    if desc.is_array {
        for (value, channel) in raw.iter().zip(&desc.channels) {
            if channel.size > 0 {
                let start = channel.shift as usize / 8;
                write_le(&mut texel[start..start + channel.size as usize / 8], *value);
            }
        }
    } else {
        let word = raw
            .iter()
            .zip(&desc.channels)
            .filter(|(_, c)| c.size > 0)
            .fold(0u64, |word, (value, c)| word | ((value & c.mask()) << c.shift));
        write_le(&mut texel[..desc.bytes_per_block()], word);
    }
}

// Words are stored little endian regardless of the host byte order.
fn read_le(bytes: &[u8]) -> u64 {
    let mut word = [0u8; 8];
    word[..bytes.len()].copy_from_slice(bytes);
    u64::from_le_bytes(word)
}

fn write_le(bytes: &mut [u8], value: u64) {
    let len = bytes.len();
    bytes.copy_from_slice(&value.to_le_bytes()[..len]);
}

/// Returns true if RGBA slot `slot` is sRGB encoded in this format.
fn is_srgb_slot(desc: &FormatDescription, slot: usize) -> bool {
    slot < 3 && desc.is_srgb()
}

/// The RGBA slot whose value is stored in channel `index` when packing.
fn source_slot(desc: &FormatDescription, index: usize) -> Option<usize> {
    desc.swizzle.iter().position(|s| s.channel() == Some(index))
}

pub(crate) fn unpack_texel_float(desc: &FormatDescription, texel: &[u8]) -> [f32; 4] {
    let raw = read_channels(desc, texel);
    let mut rgba = [0.0; 4];
    for (slot, swizzle) in desc.swizzle.iter().enumerate() {
        rgba[slot] = match swizzle.channel() {
            Some(c) if is_srgb_slot(desc, slot) => srgb_8unorm_to_linear_float(raw[c] as u8),
            Some(c) => desc.channels[c].decode(raw[c]) as f32,
            None => swizzle.constant_f32(),
        };
    }
    rgba
}

pub(crate) fn pack_texel_float(desc: &FormatDescription, rgba: &[f32], texel: &mut [u8]) -> bool {
    let mut raw = [0u64; 4];
    let mut exact = true;
    for (c, channel) in desc.channels.iter().enumerate() {
        if channel.kind == ChannelKind::Void {
            continue;
        }
        if let Some(slot) = source_slot(desc, c) {
            let value = rgba[slot];
            if is_srgb_slot(desc, slot) {
                exact &= (0.0..=1.0).contains(&value);
                raw[c] = linear_float_to_srgb_8unorm(value) as u64;
            } else {
                let (bits, in_range) = channel.encode(value);
                exact &= in_range;
                raw[c] = bits;
            }
        }
    }
    write_channels(desc, &raw, texel);
    exact
}

pub(crate) fn unpack_texel_8unorm(desc: &FormatDescription, texel: &[u8]) -> [u8; 4] {
    let raw = read_channels(desc, texel);
    let mut rgba = [0u8; 4];
    for (slot, swizzle) in desc.swizzle.iter().enumerate() {
        rgba[slot] = match swizzle.channel() {
            Some(c) if is_srgb_slot(desc, slot) => srgb_8unorm_to_linear_8unorm(raw[c] as u8),
            Some(c) if desc.channels[c].is_unorm8() => raw[c] as u8,
            Some(c) => float_to_ubyte(desc.channels[c].decode(raw[c]) as f32),
            None => swizzle.constant_u8(),
        };
    }
    rgba
}

pub(crate) fn pack_texel_8unorm(desc: &FormatDescription, rgba: &[u8], texel: &mut [u8]) -> bool {
    let mut raw = [0u64; 4];
    let mut exact = true;
    for (c, channel) in desc.channels.iter().enumerate() {
        if channel.kind == ChannelKind::Void {
            continue;
        }
        if let Some(slot) = source_slot(desc, c) {
            let value = rgba[slot];
            raw[c] = if is_srgb_slot(desc, slot) {
                linear_8unorm_to_srgb_8unorm(value) as u64
            } else if channel.is_unorm8() {
                value as u64
            } else {
                let (bits, in_range) = channel.encode(ubyte_to_float(value));
                exact &= in_range;
                bits
            };
        }
    }
    write_channels(desc, &raw, texel);
    exact
}

impl FormatCodec for PlainCodec {
    fn fetch_rgba_float(
        &self,
        desc: &FormatDescription,
        block: &[u8],
        _i: u32,
        _j: u32,
    ) -> Result<[f32; 4], ConvertError> {
        Ok(unpack_texel_float(desc, block))
    }

    fn fetch_rgba_8unorm(
        &self,
        desc: &FormatDescription,
        block: &[u8],
        _i: u32,
        _j: u32,
    ) -> Result<[u8; 4], ConvertError> {
        Ok(unpack_texel_8unorm(desc, block))
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
        let bytes = desc.bytes_per_block();
        for y in 0..height as usize {
            let src_row = &src[y * src_stride..];
            let dst_row = &mut dst[y * dst_stride..];
            for (texel, rgba) in src_row
                .chunks_exact(bytes)
                .zip(dst_row.chunks_exact_mut(4))
                .take(width as usize)
            {
                rgba.copy_from_slice(&unpack_texel_float(desc, texel));
            }
        }
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
        let bytes = desc.bytes_per_block();
        let mut exact = true;
        for y in 0..height as usize {
            let src_row = &src[y * src_stride..];
            let dst_row = &mut dst[y * dst_stride..];
            for (texel, rgba) in dst_row
                .chunks_exact_mut(bytes)
                .zip(src_row.chunks_exact(4))
                .take(width as usize)
            {
                exact &= pack_texel_float(desc, rgba, texel);
            }
        }
        Ok(exact)
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
        let bytes = desc.bytes_per_block();
        for y in 0..height as usize {
            let src_row = &src[y * src_stride..];
            let dst_row = &mut dst[y * dst_stride..];
            for (texel, rgba) in src_row
                .chunks_exact(bytes)
                .zip(dst_row.chunks_exact_mut(4))
                .take(width as usize)
            {
                rgba.copy_from_slice(&unpack_texel_8unorm(desc, texel));
            }
        }
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
        let bytes = desc.bytes_per_block();
        let mut exact = true;
        for y in 0..height as usize {
            let src_row = &src[y * src_stride..];
            let dst_row = &mut dst[y * dst_stride..];
            for (texel, rgba) in dst_row
                .chunks_exact_mut(bytes)
                .zip(src_row.chunks_exact(4))
                .take(width as usize)
            {
                exact &= pack_texel_8unorm(desc, rgba, texel);
            }
        }
        Ok(exact)
    }
}

#[cfg(test)]
mod tests {
    use crate::{lookup, Format};

    fn unpack(format: Format, texel: &[u8]) -> [f32; 4] {
        crate::initialize();
        lookup(format).fetch_rgba_float(texel, 0, 0).unwrap()
    }

    fn pack(format: Format, rgba: [f32; 4]) -> (Vec<u8>, bool) {
        crate::initialize();
        let desc = lookup(format);
        let mut texel = vec![0u8; desc.bytes_per_block()];
        let exact = desc.pack_rgba_float(&mut texel, 0, &rgba, 0, 1, 1).unwrap();
        (texel, exact)
    }

    #[test]
    fn unpack_bgra8() {
        assert_eq!(
            [1.0, 0.0, 0.0, 1.0],
            unpack(Format::B8G8R8A8Unorm, &[0x00, 0x00, 0xff, 0xff])
        );
    }

    #[test]
    fn pack_bgra8() {
        assert_eq!(
            (vec![0x00, 0x80, 0xff, 0xff], true),
            pack(Format::B8G8R8A8Unorm, [1.0, 0.5, 0.0, 1.0])
        );
    }

    #[test]
    fn pack_bgra8_clamped() {
        assert_eq!(
            (vec![0x00, 0x00, 0xff, 0xff], false),
            pack(Format::B8G8R8A8Unorm, [2.0, -1.0, 0.0, 1.0])
        );
    }

    #[test]
    fn unpack_b5g6r5() {
        assert_eq!([0.0, 1.0, 0.0, 1.0], unpack(Format::B5G6R5Unorm, &[0xe0, 0x07]));
        assert_eq!([1.0, 0.0, 0.0, 1.0], unpack(Format::B5G6R5Unorm, &[0x00, 0xf8]));
    }

    #[test]
    fn pack_r10g10b10a2() {
        assert_eq!(
            (0xc00003ffu32.to_le_bytes().to_vec(), true),
            pack(Format::R10G10B10A2Unorm, [1.0, 0.0, 0.0, 1.0])
        );
    }

    #[test]
    fn padding_is_written_as_zero() {
        assert_eq!(
            (vec![0xff, 0xff, 0xff, 0x00], true),
            pack(Format::B8G8R8X8Unorm, [1.0, 1.0, 1.0, 1.0])
        );
    }

    #[test]
    fn luminance_alpha_swizzles() {
        assert_eq!([1.0, 1.0, 1.0, 0.0], unpack(Format::L8A8Unorm, &[0xff, 0x00]));
        assert_eq!([0.0, 0.0, 0.0, 1.0], unpack(Format::A8Unorm, &[0xff]));
        assert_eq!([1.0, 1.0, 1.0, 1.0], unpack(Format::I8Unorm, &[0xff]));
        assert_eq!((vec![0xff], true), pack(Format::A8Unorm, [0.0, 0.0, 0.0, 1.0]));
    }

    #[test]
    fn mixed_sign() {
        assert_eq!(
            [-1.0, 1.0, 1.0, 1.0],
            unpack(Format::R8SG8SB8UX8UNorm, &[0x81, 0x7f, 0xff, 0x12])
        );
        assert_eq!([-1.0, 0.0, 0.0, 1.0], unpack(Format::R5SG5SB6UNorm, &[0x11, 0x00]));
    }

    #[test]
    fn unpack_half_float() {
        assert_eq!(
            [1.0, -2.0, 0.5, 1.0],
            unpack(Format::R16G16B16Float, &[0x00, 0x3c, 0x00, 0xc0, 0x00, 0x38])
        );
    }

    #[test]
    fn srgb_alpha_is_linear() {
        let rgba = unpack(Format::R8G8B8A8Srgb, &[0xbc, 0x00, 0xff, 0xbc]);
        assert!((rgba[0] - 0.502886).abs() < 1e-6);
        assert_eq!(0.0, rgba[1]);
        assert_eq!(1.0, rgba[2]);
        assert!((rgba[3] - 188.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn pack_srgb() {
        assert_eq!(
            (vec![0xbc, 0x00, 0xff, 0x80], true),
            pack(Format::R8G8B8A8Srgb, [0.502886, 0.0, 1.0, 0.5])
        );
    }

    #[test]
    fn unpack_8unorm_conversions() {
        crate::initialize();
        let fetch = |format, texel: &[u8]| lookup(format).fetch_rgba_8unorm(texel, 0, 0).unwrap();
        assert_eq!([0, 0, 255, 255], fetch(Format::B8G8R8A8Unorm, &[0xff, 0x00, 0x00, 0xff]));
        assert_eq!([0, 255, 255, 255], fetch(Format::R8G8B8Snorm, &[0x81, 0x7f, 0x7f]));
        assert_eq!([255, 0, 0, 255], fetch(Format::R16Unorm, &[0xff, 0xff]));
        assert_eq!([128, 128, 128, 255], fetch(Format::L8Srgb, &[188]));
    }

    #[test]
    fn pack_8unorm_conversions() {
        crate::initialize();
        let pack = |format, rgba: [u8; 4]| {
            let desc = lookup(format);
            let mut texel = vec![0u8; desc.bytes_per_block()];
            let exact = desc.pack_rgba_8unorm(&mut texel, 0, &rgba, 0, 1, 1).unwrap();
            (texel, exact)
        };
        assert_eq!((vec![3, 2, 1, 4], true), pack(Format::B8G8R8A8Unorm, [1, 2, 3, 4]));
        assert_eq!((vec![0xff, 0xff], true), pack(Format::R16Unorm, [255, 0, 0, 0]));
        assert_eq!((vec![188], true), pack(Format::L8Srgb, [128, 128, 128, 255]));
    }

    #[test]
    fn unpack_rectangle_with_strides() {
        crate::initialize();
        let desc = lookup(Format::R8Unorm);
        // 2x2 texels in rows of 3 bytes.
        let src = [0x00, 0xff, 0x11, 0xff, 0x00, 0x22];
        let mut dst = [0.5f32; 16];
        desc.unpack_rgba_float(&mut dst, 8, &src, 3, 2, 2).unwrap();
        assert_eq!(
            [
                0.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0
            ],
            dst
        );
    }

    #[test]
    fn pack_rectangle_leaves_row_padding() {
        crate::initialize();
        let desc = lookup(Format::R8G8Unorm);
        let src = [1.0f32; 8];
        let mut dst = [0x55u8; 6];
        let exact = desc.pack_rgba_float(&mut dst, 3, &src, 4, 1, 2).unwrap();
        assert!(exact);
        assert_eq!([0xff, 0xff, 0x55, 0xff, 0xff, 0x55], dst);
    }
}
