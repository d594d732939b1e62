//! Rectangle conversions for any [Format].
//!
//! The packed buffer is addressed at the rectangle's origin.
//! The unpacked RGBA buffer always starts at the first texel of the rectangle.
use crate::{error::ConvertError, lookup, Format, FormatDescription};

/// A rectangle of texels in a packed image.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Unpacks `rect` from the packed image `src` to RGBA floats in `dst`.
///
/// `src_stride` is in bytes between rows of blocks.
/// `dst_stride` is in floats between rows of texels.
///
/// # Panics
/// Panics if the origin of `rect` is not aligned to the format's block size.
pub fn read_float(
    format: Format,
    dst: &mut [f32],
    dst_stride: usize,
    src: &[u8],
    src_stride: usize,
    rect: Rect,
) -> Result<(), ConvertError> {
    let desc = lookup(format);
    if rect.is_empty() {
        return Ok(());
    }
    let src = packed_rect(desc, src, src_stride, rect)?;
    check_len(unpacked_len(dst_stride, rect), dst.len())?;
    desc.unpack_rgba_float(dst, dst_stride, src, src_stride, rect.width, rect.height)
}

/// Packs RGBA floats in `src` to `rect` of the packed image `dst`.
///
/// Returns `false` if any value was clamped to fit the format.
///
/// # Panics
/// Panics if the origin of `rect` is not aligned to the format's block size.
pub fn write_float(
    format: Format,
    dst: &mut [u8],
    dst_stride: usize,
    src: &[f32],
    src_stride: usize,
    rect: Rect,
) -> Result<bool, ConvertError> {
    let desc = lookup(format);
    if rect.is_empty() {
        return Ok(true);
    }
    check_len(unpacked_len(src_stride, rect), src.len())?;
    let dst = packed_rect_mut(desc, dst, dst_stride, rect)?;
    desc.pack_rgba_float(dst, dst_stride, src, src_stride, rect.width, rect.height)
}

/// Unpacks `rect` from the packed image `src` to RGBA8 in `dst`.
///
/// `dst_stride` is in bytes between rows of texels.
///
/// # Panics
/// Panics if the origin of `rect` is not aligned to the format's block size.
pub fn read_8unorm(
    format: Format,
    dst: &mut [u8],
    dst_stride: usize,
    src: &[u8],
    src_stride: usize,
    rect: Rect,
) -> Result<(), ConvertError> {
    let desc = lookup(format);
    if rect.is_empty() {
        return Ok(());
    }
    let src = packed_rect(desc, src, src_stride, rect)?;
    check_len(unpacked_len(dst_stride, rect), dst.len())?;
    desc.unpack_rgba_8unorm(dst, dst_stride, src, src_stride, rect.width, rect.height)
}

/// Packs RGBA8 in `src` to `rect` of the packed image `dst`.
///
/// Returns `false` if any value was clamped to fit the format.
///
/// # Panics
/// Panics if the origin of `rect` is not aligned to the format's block size.
pub fn write_8unorm(
    format: Format,
    dst: &mut [u8],
    dst_stride: usize,
    src: &[u8],
    src_stride: usize,
    rect: Rect,
) -> Result<bool, ConvertError> {
    let desc = lookup(format);
    if rect.is_empty() {
        return Ok(true);
    }
    check_len(unpacked_len(src_stride, rect), src.len())?;
    let dst = packed_rect_mut(desc, dst, dst_stride, rect)?;
    desc.pack_rgba_8unorm(dst, dst_stride, src, src_stride, rect.width, rect.height)
}

/// The byte offset of the rectangle's first block and the bytes needed to reach its last block.
fn packed_range(desc: &FormatDescription, stride: usize, rect: Rect) -> (usize, usize) {
    let block = desc.block;
    assert!(
        rect.x % block.width == 0 && rect.y % block.height == 0,
        "{rect:?} is not aligned to the {}x{} blocks of {}",
        block.width,
        block.height,
        desc.name
    );

    let bytes = desc.bytes_per_block();
    let offset = (rect.y / block.height) as usize * stride + (rect.x / block.width) as usize * bytes;
    let rows = rect.height.div_ceil(block.height) as usize;
    let columns = rect.width.div_ceil(block.width) as usize;
    (offset, (rows - 1) * stride + columns * bytes)
}

fn packed_rect<'a>(
    desc: &FormatDescription,
    data: &'a [u8],
    stride: usize,
    rect: Rect,
) -> Result<&'a [u8], ConvertError> {
    let (offset, len) = packed_range(desc, stride, rect);
    check_len(offset + len, data.len())?;
    Ok(&data[offset..])
}

fn packed_rect_mut<'a>(
    desc: &FormatDescription,
    data: &'a mut [u8],
    stride: usize,
    rect: Rect,
) -> Result<&'a mut [u8], ConvertError> {
    let (offset, len) = packed_range(desc, stride, rect);
    check_len(offset + len, data.len())?;
    Ok(&mut data[offset..])
}

fn unpacked_len(stride: usize, rect: Rect) -> usize {
    (rect.height as usize - 1) * stride + rect.width as usize * 4
}

fn check_len(expected: usize, actual: usize) -> Result<(), ConvertError> {
    if actual < expected {
        Err(ConvertError::NotEnoughData { expected, actual })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_float_bgra8() {
        crate::initialize();
        let mut rgba = [0.0; 4];
        read_float(
            Format::B8G8R8A8Unorm,
            &mut rgba,
            4,
            &[0x00, 0x00, 0xff, 0xff],
            4,
            Rect::new(0, 0, 1, 1),
        )
        .unwrap();
        assert_eq!([1.0, 0.0, 0.0, 1.0], rgba);
    }

    #[test]
    fn read_8unorm_offset_rect() {
        crate::initialize();
        // 2x2 R8G8 image with 1 byte of padding per row.
        let src = [1, 2, 3, 4, 0, 5, 6, 7, 8, 0];
        let mut rgba = [0u8; 4];
        read_8unorm(Format::R8G8Unorm, &mut rgba, 4, &src, 5, Rect::new(1, 1, 1, 1)).unwrap();
        assert_eq!([7, 8, 0, 255], rgba);
    }

    #[test]
    fn write_8unorm_offset_rect() {
        crate::initialize();
        let mut dst = [0u8; 8];
        let exact = write_8unorm(
            Format::L8A8Unorm,
            &mut dst,
            4,
            &[10, 20, 30, 40, 50, 60, 70, 80],
            4,
            Rect::new(1, 0, 1, 2),
        )
        .unwrap();
        assert!(exact);
        assert_eq!([0, 0, 10, 40, 0, 0, 50, 80], dst);
    }

    #[test]
    fn write_float_reports_clamping() {
        crate::initialize();
        let mut dst = [0u8; 2];
        let exact = write_float(
            Format::R8G8Snorm,
            &mut dst,
            2,
            &[-2.0, 1.0, 0.0, 1.0],
            4,
            Rect::new(0, 0, 1, 1),
        )
        .unwrap();
        assert!(!exact);
        assert_eq!([0x81, 0x7f], dst);
    }

    #[test]
    fn read_float_z24s8() {
        crate::initialize();
        let mut rgba = [0.0; 4];
        read_float(
            Format::Z24UnormS8Uscaled,
            &mut rgba,
            4,
            &0x07ffffffu32.to_le_bytes(),
            4,
            Rect::new(0, 0, 1, 1),
        )
        .unwrap();
        assert_eq!([1.0, 7.0, 0.0, 1.0], rgba);
    }

    #[test]
    fn write_float_z24s8_rounds_depth() {
        crate::initialize();
        let mut rgba_packed = [0u8; 4];
        write_float(
            Format::Z24UnormS8Uscaled,
            &mut rgba_packed,
            4,
            &[0.5, 0.0, 0.0, 1.0],
            4,
            Rect::new(0, 0, 1, 1),
        )
        .unwrap();
        assert_eq!(0x00800000, u32::from_le_bytes(rgba_packed));

        // The depth codec truncates instead.
        let mut depth_packed = [0u8; 4];
        let depth = lookup(Format::Z24UnormS8Uscaled).depth().unwrap();
        depth.pack_z_float(&mut depth_packed, 4, &[0.5], 1, 1, 1);
        assert_eq!(0x007fffff, u32::from_le_bytes(depth_packed));
    }

    #[test]
    fn empty_rect() {
        crate::initialize();
        assert_eq!(
            Ok(()),
            read_float(Format::R32Float, &mut [], 0, &[], 0, Rect::new(0, 0, 0, 4))
        );
        assert_eq!(
            Ok(true),
            write_8unorm(Format::R32Float, &mut [], 0, &[], 0, Rect::new(0, 0, 4, 0))
        );
    }

    #[test]
    fn not_enough_packed_data() {
        crate::initialize();
        let mut rgba = [0.0; 8];
        assert_eq!(
            Err(ConvertError::NotEnoughData {
                expected: 8,
                actual: 7
            }),
            read_float(Format::R16G16Unorm, &mut rgba, 8, &[0u8; 7], 8, Rect::new(0, 0, 2, 1))
        );
    }

    #[test]
    fn not_enough_unpacked_data() {
        crate::initialize();
        let mut dst = [0u8; 8];
        assert_eq!(
            Err(ConvertError::NotEnoughData {
                expected: 12,
                actual: 8
            }),
            write_8unorm(Format::R8Unorm, &mut dst, 4, &[0u8; 8], 8, Rect::new(0, 0, 1, 2))
        );
    }

    #[test]
    fn compressed_without_library() {
        crate::initialize();
        if crate::s3tc::is_available() {
            return;
        }
        let mut rgba = [0.0; 64];
        assert_eq!(
            Err(ConvertError::Unsupported {
                format: Format::Dxt5Rgba
            }),
            read_float(Format::Dxt5Rgba, &mut rgba, 16, &[0u8; 16], 16, Rect::new(0, 0, 4, 4))
        );
    }

    #[test]
    fn compressed_block_offset() {
        crate::initialize();
        let desc = lookup(Format::Dxt1Rgba);
        // The third block of the second row of blocks.
        assert_eq!((40 + 16, 8), packed_range(desc, 40, Rect::new(8, 4, 3, 2)));
        assert_eq!((0, 40 + 16), packed_range(desc, 40, Rect::new(0, 0, 5, 5)));
    }

    #[test]
    #[should_panic]
    fn compressed_misaligned_rect() {
        crate::initialize();
        let mut rgba = [0.0; 64];
        let _ = read_float(Format::Dxt1Rgb, &mut rgba, 16, &[0u8; 64], 16, Rect::new(2, 0, 2, 2));
    }
}
