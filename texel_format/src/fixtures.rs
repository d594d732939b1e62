//! Known packed texels and their RGBA values for every supported format.
//!
//! Each case is a single block. The mask marks the packed bits that must
//! match after packing. Unused bits and non canonical encodings are masked out.
use crate::Format;

/// A single packed block and its expected RGBA values.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct FormatTestCase {
    pub format: Format,
    /// Bytes of `packed` that must match after packing.
    pub mask: [u8; 16],
    pub packed: [u8; 16],
    /// RGBA values indexed by `[y][x][channel]`.
    /// Only the texels in the format's block are used.
    pub unpacked: [[[f64; 4]; 4]; 4],
}

impl FormatTestCase {
    /// The expected RGBA value of the texel at `(x, y)` in the block.
    pub fn expected(&self, x: usize, y: usize) -> [f64; 4] {
        self.unpacked[y][x]
    }
}

const fn packed8<const N: usize>(values: [u8; N]) -> [u8; 16] {
    let mut bytes = [0u8; 16];
    let mut i = 0;
    while i < N {
        bytes[i] = values[i];
        i += 1;
    }
    bytes
}

const fn packed16<const N: usize>(values: [u16; N]) -> [u8; 16] {
    let mut bytes = [0u8; 16];
    let mut i = 0;
    while i < N {
        let le = values[i].to_le_bytes();
        bytes[i * 2] = le[0];
        bytes[i * 2 + 1] = le[1];
        i += 1;
    }
    bytes
}

const fn packed32<const N: usize>(values: [u32; N]) -> [u8; 16] {
    let mut bytes = [0u8; 16];
    let mut i = 0;
    while i < N {
        let le = values[i].to_le_bytes();
        let mut j = 0;
        while j < 4 {
            bytes[i * 4 + j] = le[j];
            j += 1;
        }
        i += 1;
    }
    bytes
}

/// A case for a format with 1x1 blocks.
const fn case(format: Format, mask: [u8; 16], packed: [u8; 16], rgba: [f64; 4]) -> FormatTestCase {
    let mut unpacked = [[[0.0; 4]; 4]; 4];
    unpacked[0][0] = rgba;
    FormatTestCase {
        format,
        mask,
        packed,
        unpacked,
    }
}

/// A case for a 4x4 block where every texel in a row has the same value.
const fn block_case(
    format: Format,
    mask: [u8; 16],
    packed: [u8; 16],
    rows: [[f64; 4]; 4],
) -> FormatTestCase {
    FormatTestCase {
        format,
        mask,
        packed,
        unpacked: [
            [rows[0]; 4],
            [rows[1]; 4],
            [rows[2]; 4],
            [rows[3]; 4],
        ],
    }
}

// sRGB values decoded to linear.
const SRGB_01: f64 = 0.0003035269835488375;
const SRGB_BC: f64 = 0.5028864580325687;
const LINEAR_BC: f64 = 188.0 / 255.0;

const RED: [f64; 4] = [1.0, 0.0, 0.0, 1.0];
const BLUE: [f64; 4] = [0.0, 0.0, 1.0, 1.0];
const CLEAR_BLUE: [f64; 4] = [0.0, 0.0, 1.0, 0.0];
const TRANSPARENT: [f64; 4] = [0.0; 4];

// Color endpoints red and blue with the rows alternating between them.
const DXT1_RED_BLUE: [u8; 8] = [0x00, 0xf8, 0x1f, 0x00, 0x00, 0x55, 0x00, 0x55];

const fn dxt_block(alpha: [u8; 8], color: [u8; 8]) -> [u8; 16] {
    let mut bytes = [0u8; 16];
    let mut i = 0;
    while i < 8 {
        bytes[i] = alpha[i];
        bytes[i + 8] = color[i];
        i += 1;
    }
    bytes
}

// Explicit alpha of 1 for rows 0 and 2 and 0 for rows 1 and 3.
const DXT3_ALPHA: [u8; 8] = [0xff, 0xff, 0x00, 0x00, 0xff, 0xff, 0x00, 0x00];
// Endpoints 1 and 0 with index 0 for rows 0 and 2 and index 1 for rows 1 and 3.
const DXT5_ALPHA: [u8; 8] = [0xff, 0x00, 0x00, 0x90, 0x24, 0x00, 0x90, 0x24];

/// Every test case ordered by format.
#[rustfmt::skip]
pub static TEST_CASES: &[FormatTestCase] = {
    use Format::*;

    &[
        case(B8G8R8A8Unorm, packed32([0xffffffff]), packed32([0x00000000]), [0.0, 0.0, 0.0, 0.0]),
        case(B8G8R8A8Unorm, packed32([0xffffffff]), packed32([0x000000ff]), [0.0, 0.0, 1.0, 0.0]),
        case(B8G8R8A8Unorm, packed32([0xffffffff]), packed32([0x0000ff00]), [0.0, 1.0, 0.0, 0.0]),
        case(B8G8R8A8Unorm, packed32([0xffffffff]), packed32([0x00ff0000]), [1.0, 0.0, 0.0, 0.0]),
        case(B8G8R8A8Unorm, packed32([0xffffffff]), packed32([0xff000000]), [0.0, 0.0, 0.0, 1.0]),
        case(B8G8R8A8Unorm, packed32([0xffffffff]), packed32([0xffffffff]), [1.0, 1.0, 1.0, 1.0]),

        case(B8G8R8X8Unorm, packed32([0x00ffffff]), packed32([0x00000000]), [0.0, 0.0, 0.0, 1.0]),
        case(B8G8R8X8Unorm, packed32([0x00ffffff]), packed32([0x000000ff]), [0.0, 0.0, 1.0, 1.0]),
        case(B8G8R8X8Unorm, packed32([0x00ffffff]), packed32([0x0000ff00]), [0.0, 1.0, 0.0, 1.0]),
        case(B8G8R8X8Unorm, packed32([0x00ffffff]), packed32([0x00ff0000]), [1.0, 0.0, 0.0, 1.0]),
        case(B8G8R8X8Unorm, packed32([0x00ffffff]), packed32([0xff000000]), [0.0, 0.0, 0.0, 1.0]),
        case(B8G8R8X8Unorm, packed32([0x00ffffff]), packed32([0xffffffff]), [1.0, 1.0, 1.0, 1.0]),

        case(A8R8G8B8Unorm, packed32([0xffffffff]), packed32([0x00000000]), [0.0, 0.0, 0.0, 0.0]),
        case(A8R8G8B8Unorm, packed32([0xffffffff]), packed32([0x000000ff]), [0.0, 0.0, 0.0, 1.0]),
        case(A8R8G8B8Unorm, packed32([0xffffffff]), packed32([0x0000ff00]), [1.0, 0.0, 0.0, 0.0]),
        case(A8R8G8B8Unorm, packed32([0xffffffff]), packed32([0x00ff0000]), [0.0, 1.0, 0.0, 0.0]),
        case(A8R8G8B8Unorm, packed32([0xffffffff]), packed32([0xff000000]), [0.0, 0.0, 1.0, 0.0]),
        case(A8R8G8B8Unorm, packed32([0xffffffff]), packed32([0xffffffff]), [1.0, 1.0, 1.0, 1.0]),

        case(X8R8G8B8Unorm, packed32([0xffffff00]), packed32([0x00000000]), [0.0, 0.0, 0.0, 1.0]),
        case(X8R8G8B8Unorm, packed32([0xffffff00]), packed32([0x000000ff]), [0.0, 0.0, 0.0, 1.0]),
        case(X8R8G8B8Unorm, packed32([0xffffff00]), packed32([0x0000ff00]), [1.0, 0.0, 0.0, 1.0]),
        case(X8R8G8B8Unorm, packed32([0xffffff00]), packed32([0x00ff0000]), [0.0, 1.0, 0.0, 1.0]),
        case(X8R8G8B8Unorm, packed32([0xffffff00]), packed32([0xff000000]), [0.0, 0.0, 1.0, 1.0]),
        case(X8R8G8B8Unorm, packed32([0xffffff00]), packed32([0xffffffff]), [1.0, 1.0, 1.0, 1.0]),

        case(A8B8G8R8Unorm, packed32([0xffffffff]), packed32([0x00000000]), [0.0, 0.0, 0.0, 0.0]),
        case(A8B8G8R8Unorm, packed32([0xffffffff]), packed32([0x000000ff]), [0.0, 0.0, 0.0, 1.0]),
        case(A8B8G8R8Unorm, packed32([0xffffffff]), packed32([0x0000ff00]), [0.0, 0.0, 1.0, 0.0]),
        case(A8B8G8R8Unorm, packed32([0xffffffff]), packed32([0x00ff0000]), [0.0, 1.0, 0.0, 0.0]),
        case(A8B8G8R8Unorm, packed32([0xffffffff]), packed32([0xff000000]), [1.0, 0.0, 0.0, 0.0]),
        case(A8B8G8R8Unorm, packed32([0xffffffff]), packed32([0xffffffff]), [1.0, 1.0, 1.0, 1.0]),

        case(X8B8G8R8Unorm, packed32([0xffffff00]), packed32([0x00000000]), [0.0, 0.0, 0.0, 1.0]),
        case(X8B8G8R8Unorm, packed32([0xffffff00]), packed32([0x000000ff]), [0.0, 0.0, 0.0, 1.0]),
        case(X8B8G8R8Unorm, packed32([0xffffff00]), packed32([0x0000ff00]), [0.0, 0.0, 1.0, 1.0]),
        case(X8B8G8R8Unorm, packed32([0xffffff00]), packed32([0x00ff0000]), [0.0, 1.0, 0.0, 1.0]),
        case(X8B8G8R8Unorm, packed32([0xffffff00]), packed32([0xff000000]), [1.0, 0.0, 0.0, 1.0]),
        case(X8B8G8R8Unorm, packed32([0xffffff00]), packed32([0xffffffff]), [1.0, 1.0, 1.0, 1.0]),

        case(R10G10B10A2Unorm, packed32([0xffffffff]), packed32([0x00000000]), [0.0, 0.0, 0.0, 0.0]),
        case(R10G10B10A2Unorm, packed32([0xffffffff]), packed32([0x000003ff]), [1.0, 0.0, 0.0, 0.0]),
        case(R10G10B10A2Unorm, packed32([0xffffffff]), packed32([0x000ffc00]), [0.0, 1.0, 0.0, 0.0]),
        case(R10G10B10A2Unorm, packed32([0xffffffff]), packed32([0x3ff00000]), [0.0, 0.0, 1.0, 0.0]),
        case(R10G10B10A2Unorm, packed32([0xffffffff]), packed32([0xc0000000]), [0.0, 0.0, 0.0, 1.0]),
        case(R10G10B10A2Unorm, packed32([0xffffffff]), packed32([0xffffffff]), [1.0, 1.0, 1.0, 1.0]),

        case(B5G5R5A1Unorm, packed16([0xffff]), packed16([0x0000]), [0.0, 0.0, 0.0, 0.0]),
        case(B5G5R5A1Unorm, packed16([0xffff]), packed16([0x001f]), [0.0, 0.0, 1.0, 0.0]),
        case(B5G5R5A1Unorm, packed16([0xffff]), packed16([0x03e0]), [0.0, 1.0, 0.0, 0.0]),
        case(B5G5R5A1Unorm, packed16([0xffff]), packed16([0x7c00]), [1.0, 0.0, 0.0, 0.0]),
        case(B5G5R5A1Unorm, packed16([0xffff]), packed16([0x8000]), [0.0, 0.0, 0.0, 1.0]),
        case(B5G5R5A1Unorm, packed16([0xffff]), packed16([0xffff]), [1.0, 1.0, 1.0, 1.0]),

        case(B4G4R4A4Unorm, packed16([0xffff]), packed16([0x0000]), [0.0, 0.0, 0.0, 0.0]),
        case(B4G4R4A4Unorm, packed16([0xffff]), packed16([0x000f]), [0.0, 0.0, 1.0, 0.0]),
        case(B4G4R4A4Unorm, packed16([0xffff]), packed16([0x00f0]), [0.0, 1.0, 0.0, 0.0]),
        case(B4G4R4A4Unorm, packed16([0xffff]), packed16([0x0f00]), [1.0, 0.0, 0.0, 0.0]),
        case(B4G4R4A4Unorm, packed16([0xffff]), packed16([0xf000]), [0.0, 0.0, 0.0, 1.0]),
        case(B4G4R4A4Unorm, packed16([0xffff]), packed16([0xffff]), [1.0, 1.0, 1.0, 1.0]),

        case(B5G6R5Unorm, packed16([0xffff]), packed16([0x0000]), [0.0, 0.0, 0.0, 1.0]),
        case(B5G6R5Unorm, packed16([0xffff]), packed16([0x001f]), [0.0, 0.0, 1.0, 1.0]),
        case(B5G6R5Unorm, packed16([0xffff]), packed16([0x07e0]), [0.0, 1.0, 0.0, 1.0]),
        case(B5G6R5Unorm, packed16([0xffff]), packed16([0xf800]), [1.0, 0.0, 0.0, 1.0]),
        case(B5G6R5Unorm, packed16([0xffff]), packed16([0xffff]), [1.0, 1.0, 1.0, 1.0]),

        case(L8Unorm, packed8([0xff]), packed8([0x00]), [0.0, 0.0, 0.0, 1.0]),
        case(L8Unorm, packed8([0xff]), packed8([0xff]), [1.0, 1.0, 1.0, 1.0]),

        case(A8Unorm, packed8([0xff]), packed8([0x00]), [0.0, 0.0, 0.0, 0.0]),
        case(A8Unorm, packed8([0xff]), packed8([0xff]), [0.0, 0.0, 0.0, 1.0]),

        case(I8Unorm, packed8([0xff]), packed8([0x00]), [0.0, 0.0, 0.0, 0.0]),
        case(I8Unorm, packed8([0xff]), packed8([0xff]), [1.0, 1.0, 1.0, 1.0]),

        case(L8A8Unorm, packed16([0xffff]), packed16([0x0000]), [0.0, 0.0, 0.0, 0.0]),
        case(L8A8Unorm, packed16([0xffff]), packed16([0x00ff]), [1.0, 1.0, 1.0, 0.0]),
        case(L8A8Unorm, packed16([0xffff]), packed16([0xff00]), [0.0, 0.0, 0.0, 1.0]),
        case(L8A8Unorm, packed16([0xffff]), packed16([0xffff]), [1.0, 1.0, 1.0, 1.0]),

        case(L16Unorm, packed16([0xffff]), packed16([0x0000]), [0.0, 0.0, 0.0, 1.0]),
        case(L16Unorm, packed16([0xffff]), packed16([0xffff]), [1.0, 1.0, 1.0, 1.0]),

        case(R8SG8SB8UX8UNorm, packed8([0xff, 0xff, 0xff, 0x00]), packed8([0x00, 0x00, 0x00, 0x00]), [0.0, 0.0, 0.0, 1.0]),
        case(R8SG8SB8UX8UNorm, packed8([0xff, 0xff, 0xff, 0x00]), packed8([0x7f, 0x00, 0x00, 0x00]), [1.0, 0.0, 0.0, 1.0]),
        case(R8SG8SB8UX8UNorm, packed8([0xff, 0xff, 0xff, 0x00]), packed8([0x81, 0x00, 0x00, 0x00]), [-1.0, 0.0, 0.0, 1.0]),
        case(R8SG8SB8UX8UNorm, packed8([0xff, 0xff, 0xff, 0x00]), packed8([0x00, 0x7f, 0x00, 0x00]), [0.0, 1.0, 0.0, 1.0]),
        case(R8SG8SB8UX8UNorm, packed8([0xff, 0xff, 0xff, 0x00]), packed8([0x00, 0x81, 0x00, 0x00]), [0.0, -1.0, 0.0, 1.0]),
        case(R8SG8SB8UX8UNorm, packed8([0xff, 0xff, 0xff, 0x00]), packed8([0x00, 0x00, 0xff, 0x00]), [0.0, 0.0, 1.0, 1.0]),

        case(R5SG5SB6UNorm, packed16([0xffff]), packed16([0x0000]), [0.0, 0.0, 0.0, 1.0]),
        case(R5SG5SB6UNorm, packed16([0xffff]), packed16([0x000f]), [1.0, 0.0, 0.0, 1.0]),
        case(R5SG5SB6UNorm, packed16([0xffff]), packed16([0x0011]), [-1.0, 0.0, 0.0, 1.0]),
        case(R5SG5SB6UNorm, packed16([0xffff]), packed16([0x01e0]), [0.0, 1.0, 0.0, 1.0]),
        case(R5SG5SB6UNorm, packed16([0xffff]), packed16([0x0220]), [0.0, -1.0, 0.0, 1.0]),
        case(R5SG5SB6UNorm, packed16([0xffff]), packed16([0xfc00]), [0.0, 0.0, 1.0, 1.0]),

        case(R8Unorm, packed8([0xff]), packed8([0x00]), [0.0, 0.0, 0.0, 1.0]),
        case(R8Unorm, packed8([0xff]), packed8([0xff]), [1.0, 0.0, 0.0, 1.0]),

        case(R8G8Unorm, packed8([0xff, 0xff]), packed8([0x00, 0x00]), [0.0, 0.0, 0.0, 1.0]),
        case(R8G8Unorm, packed8([0xff, 0xff]), packed8([0xff, 0x00]), [1.0, 0.0, 0.0, 1.0]),
        case(R8G8Unorm, packed8([0xff, 0xff]), packed8([0x00, 0xff]), [0.0, 1.0, 0.0, 1.0]),
        case(R8G8Unorm, packed8([0xff, 0xff]), packed8([0xff, 0xff]), [1.0, 1.0, 0.0, 1.0]),

        case(R8G8B8Unorm, packed8([0xff, 0xff, 0xff]), packed8([0x00, 0x00, 0x00]), [0.0, 0.0, 0.0, 1.0]),
        case(R8G8B8Unorm, packed8([0xff, 0xff, 0xff]), packed8([0xff, 0x00, 0x00]), [1.0, 0.0, 0.0, 1.0]),
        case(R8G8B8Unorm, packed8([0xff, 0xff, 0xff]), packed8([0x00, 0xff, 0x00]), [0.0, 1.0, 0.0, 1.0]),
        case(R8G8B8Unorm, packed8([0xff, 0xff, 0xff]), packed8([0x00, 0x00, 0xff]), [0.0, 0.0, 1.0, 1.0]),
        case(R8G8B8Unorm, packed8([0xff, 0xff, 0xff]), packed8([0xff, 0xff, 0xff]), [1.0, 1.0, 1.0, 1.0]),

        case(R8G8B8A8Unorm, packed8([0xff, 0xff, 0xff, 0xff]), packed8([0x00, 0x00, 0x00, 0x00]), [0.0, 0.0, 0.0, 0.0]),
        case(R8G8B8A8Unorm, packed8([0xff, 0xff, 0xff, 0xff]), packed8([0xff, 0x00, 0x00, 0x00]), [1.0, 0.0, 0.0, 0.0]),
        case(R8G8B8A8Unorm, packed8([0xff, 0xff, 0xff, 0xff]), packed8([0x00, 0xff, 0x00, 0x00]), [0.0, 1.0, 0.0, 0.0]),
        case(R8G8B8A8Unorm, packed8([0xff, 0xff, 0xff, 0xff]), packed8([0x00, 0x00, 0xff, 0x00]), [0.0, 0.0, 1.0, 0.0]),
        case(R8G8B8A8Unorm, packed8([0xff, 0xff, 0xff, 0xff]), packed8([0x00, 0x00, 0x00, 0xff]), [0.0, 0.0, 0.0, 1.0]),
        case(R8G8B8A8Unorm, packed8([0xff, 0xff, 0xff, 0xff]), packed8([0xff, 0xff, 0xff, 0xff]), [1.0, 1.0, 1.0, 1.0]),

        case(R8Uscaled, packed8([0xff]), packed8([0x00]), [0.0, 0.0, 0.0, 1.0]),
        case(R8Uscaled, packed8([0xff]), packed8([0xff]), [255.0, 0.0, 0.0, 1.0]),

        case(R8G8Uscaled, packed8([0xff, 0xff]), packed8([0x00, 0x00]), [0.0, 0.0, 0.0, 1.0]),
        case(R8G8Uscaled, packed8([0xff, 0xff]), packed8([0xff, 0x00]), [255.0, 0.0, 0.0, 1.0]),
        case(R8G8Uscaled, packed8([0xff, 0xff]), packed8([0x00, 0xff]), [0.0, 255.0, 0.0, 1.0]),
        case(R8G8Uscaled, packed8([0xff, 0xff]), packed8([0xff, 0xff]), [255.0, 255.0, 0.0, 1.0]),

        case(R8G8B8Uscaled, packed8([0xff, 0xff, 0xff]), packed8([0x00, 0x00, 0x00]), [0.0, 0.0, 0.0, 1.0]),
        case(R8G8B8Uscaled, packed8([0xff, 0xff, 0xff]), packed8([0xff, 0x00, 0x00]), [255.0, 0.0, 0.0, 1.0]),
        case(R8G8B8Uscaled, packed8([0xff, 0xff, 0xff]), packed8([0x00, 0xff, 0x00]), [0.0, 255.0, 0.0, 1.0]),
        case(R8G8B8Uscaled, packed8([0xff, 0xff, 0xff]), packed8([0x00, 0x00, 0xff]), [0.0, 0.0, 255.0, 1.0]),
        case(R8G8B8Uscaled, packed8([0xff, 0xff, 0xff]), packed8([0xff, 0xff, 0xff]), [255.0, 255.0, 255.0, 1.0]),

        case(R8G8B8A8Uscaled, packed8([0xff, 0xff, 0xff, 0xff]), packed8([0x00, 0x00, 0x00, 0x00]), [0.0, 0.0, 0.0, 0.0]),
        case(R8G8B8A8Uscaled, packed8([0xff, 0xff, 0xff, 0xff]), packed8([0xff, 0x00, 0x00, 0x00]), [255.0, 0.0, 0.0, 0.0]),
        case(R8G8B8A8Uscaled, packed8([0xff, 0xff, 0xff, 0xff]), packed8([0x00, 0xff, 0x00, 0x00]), [0.0, 255.0, 0.0, 0.0]),
        case(R8G8B8A8Uscaled, packed8([0xff, 0xff, 0xff, 0xff]), packed8([0x00, 0x00, 0xff, 0x00]), [0.0, 0.0, 255.0, 0.0]),
        case(R8G8B8A8Uscaled, packed8([0xff, 0xff, 0xff, 0xff]), packed8([0x00, 0x00, 0x00, 0xff]), [0.0, 0.0, 0.0, 255.0]),
        case(R8G8B8A8Uscaled, packed8([0xff, 0xff, 0xff, 0xff]), packed8([0xff, 0xff, 0xff, 0xff]), [255.0, 255.0, 255.0, 255.0]),

        case(R8Snorm, packed8([0xff]), packed8([0x00]), [0.0, 0.0, 0.0, 1.0]),
        case(R8Snorm, packed8([0xff]), packed8([0x7f]), [1.0, 0.0, 0.0, 1.0]),
        case(R8Snorm, packed8([0xff]), packed8([0x81]), [-1.0, 0.0, 0.0, 1.0]),

        case(R8G8Snorm, packed8([0xff, 0xff]), packed8([0x00, 0x00]), [0.0, 0.0, 0.0, 1.0]),
        case(R8G8Snorm, packed8([0xff, 0xff]), packed8([0x7f, 0x00]), [1.0, 0.0, 0.0, 1.0]),
        case(R8G8Snorm, packed8([0xff, 0xff]), packed8([0x81, 0x00]), [-1.0, 0.0, 0.0, 1.0]),
        case(R8G8Snorm, packed8([0xff, 0xff]), packed8([0x00, 0x7f]), [0.0, 1.0, 0.0, 1.0]),
        case(R8G8Snorm, packed8([0xff, 0xff]), packed8([0x00, 0x81]), [0.0, -1.0, 0.0, 1.0]),

        case(R8G8B8Snorm, packed8([0xff, 0xff, 0xff]), packed8([0x00, 0x00, 0x00]), [0.0, 0.0, 0.0, 1.0]),
        case(R8G8B8Snorm, packed8([0xff, 0xff, 0xff]), packed8([0x7f, 0x00, 0x00]), [1.0, 0.0, 0.0, 1.0]),
        case(R8G8B8Snorm, packed8([0xff, 0xff, 0xff]), packed8([0x81, 0x00, 0x00]), [-1.0, 0.0, 0.0, 1.0]),
        case(R8G8B8Snorm, packed8([0xff, 0xff, 0xff]), packed8([0x00, 0x7f, 0x00]), [0.0, 1.0, 0.0, 1.0]),
        case(R8G8B8Snorm, packed8([0xff, 0xff, 0xff]), packed8([0x00, 0x81, 0x00]), [0.0, -1.0, 0.0, 1.0]),
        case(R8G8B8Snorm, packed8([0xff, 0xff, 0xff]), packed8([0x00, 0x00, 0x7f]), [0.0, 0.0, 1.0, 1.0]),
        case(R8G8B8Snorm, packed8([0xff, 0xff, 0xff]), packed8([0x00, 0x00, 0x81]), [0.0, 0.0, -1.0, 1.0]),

        case(R8G8B8A8Snorm, packed8([0xff, 0xff, 0xff, 0xff]), packed8([0x00, 0x00, 0x00, 0x00]), [0.0, 0.0, 0.0, 0.0]),
        case(R8G8B8A8Snorm, packed8([0xff, 0xff, 0xff, 0xff]), packed8([0x7f, 0x00, 0x00, 0x00]), [1.0, 0.0, 0.0, 0.0]),
        case(R8G8B8A8Snorm, packed8([0xff, 0xff, 0xff, 0xff]), packed8([0x81, 0x00, 0x00, 0x00]), [-1.0, 0.0, 0.0, 0.0]),
        case(R8G8B8A8Snorm, packed8([0xff, 0xff, 0xff, 0xff]), packed8([0x00, 0x7f, 0x00, 0x00]), [0.0, 1.0, 0.0, 0.0]),
        case(R8G8B8A8Snorm, packed8([0xff, 0xff, 0xff, 0xff]), packed8([0x00, 0x81, 0x00, 0x00]), [0.0, -1.0, 0.0, 0.0]),
        case(R8G8B8A8Snorm, packed8([0xff, 0xff, 0xff, 0xff]), packed8([0x00, 0x00, 0x7f, 0x00]), [0.0, 0.0, 1.0, 0.0]),
        case(R8G8B8A8Snorm, packed8([0xff, 0xff, 0xff, 0xff]), packed8([0x00, 0x00, 0x81, 0x00]), [0.0, 0.0, -1.0, 0.0]),
        case(R8G8B8A8Snorm, packed8([0xff, 0xff, 0xff, 0xff]), packed8([0x00, 0x00, 0x00, 0x7f]), [0.0, 0.0, 0.0, 1.0]),
        case(R8G8B8A8Snorm, packed8([0xff, 0xff, 0xff, 0xff]), packed8([0x00, 0x00, 0x00, 0x81]), [0.0, 0.0, 0.0, -1.0]),

        case(R8Sscaled, packed8([0xff]), packed8([0x00]), [0.0, 0.0, 0.0, 1.0]),
        case(R8Sscaled, packed8([0xff]), packed8([0x7f]), [127.0, 0.0, 0.0, 1.0]),
        case(R8Sscaled, packed8([0xff]), packed8([0x80]), [-128.0, 0.0, 0.0, 1.0]),

        case(R8G8Sscaled, packed8([0xff, 0xff]), packed8([0x00, 0x00]), [0.0, 0.0, 0.0, 1.0]),
        case(R8G8Sscaled, packed8([0xff, 0xff]), packed8([0x7f, 0x00]), [127.0, 0.0, 0.0, 1.0]),
        case(R8G8Sscaled, packed8([0xff, 0xff]), packed8([0x80, 0x00]), [-128.0, 0.0, 0.0, 1.0]),
        case(R8G8Sscaled, packed8([0xff, 0xff]), packed8([0x00, 0x7f]), [0.0, 127.0, 0.0, 1.0]),
        case(R8G8Sscaled, packed8([0xff, 0xff]), packed8([0x00, 0x80]), [0.0, -128.0, 0.0, 1.0]),

        case(R8G8B8Sscaled, packed8([0xff, 0xff, 0xff]), packed8([0x00, 0x00, 0x00]), [0.0, 0.0, 0.0, 1.0]),
        case(R8G8B8Sscaled, packed8([0xff, 0xff, 0xff]), packed8([0x7f, 0x00, 0x00]), [127.0, 0.0, 0.0, 1.0]),
        case(R8G8B8Sscaled, packed8([0xff, 0xff, 0xff]), packed8([0x80, 0x00, 0x00]), [-128.0, 0.0, 0.0, 1.0]),
        case(R8G8B8Sscaled, packed8([0xff, 0xff, 0xff]), packed8([0x00, 0x7f, 0x00]), [0.0, 127.0, 0.0, 1.0]),
        case(R8G8B8Sscaled, packed8([0xff, 0xff, 0xff]), packed8([0x00, 0x80, 0x00]), [0.0, -128.0, 0.0, 1.0]),
        case(R8G8B8Sscaled, packed8([0xff, 0xff, 0xff]), packed8([0x00, 0x00, 0x7f]), [0.0, 0.0, 127.0, 1.0]),
        case(R8G8B8Sscaled, packed8([0xff, 0xff, 0xff]), packed8([0x00, 0x00, 0x80]), [0.0, 0.0, -128.0, 1.0]),

        case(R8G8B8A8Sscaled, packed8([0xff, 0xff, 0xff, 0xff]), packed8([0x00, 0x00, 0x00, 0x00]), [0.0, 0.0, 0.0, 0.0]),
        case(R8G8B8A8Sscaled, packed8([0xff, 0xff, 0xff, 0xff]), packed8([0x7f, 0x00, 0x00, 0x00]), [127.0, 0.0, 0.0, 0.0]),
        case(R8G8B8A8Sscaled, packed8([0xff, 0xff, 0xff, 0xff]), packed8([0x80, 0x00, 0x00, 0x00]), [-128.0, 0.0, 0.0, 0.0]),
        case(R8G8B8A8Sscaled, packed8([0xff, 0xff, 0xff, 0xff]), packed8([0x00, 0x7f, 0x00, 0x00]), [0.0, 127.0, 0.0, 0.0]),
        case(R8G8B8A8Sscaled, packed8([0xff, 0xff, 0xff, 0xff]), packed8([0x00, 0x80, 0x00, 0x00]), [0.0, -128.0, 0.0, 0.0]),
        case(R8G8B8A8Sscaled, packed8([0xff, 0xff, 0xff, 0xff]), packed8([0x00, 0x00, 0x7f, 0x00]), [0.0, 0.0, 127.0, 0.0]),
        case(R8G8B8A8Sscaled, packed8([0xff, 0xff, 0xff, 0xff]), packed8([0x00, 0x00, 0x80, 0x00]), [0.0, 0.0, -128.0, 0.0]),
        case(R8G8B8A8Sscaled, packed8([0xff, 0xff, 0xff, 0xff]), packed8([0x00, 0x00, 0x00, 0x7f]), [0.0, 0.0, 0.0, 127.0]),
        case(R8G8B8A8Sscaled, packed8([0xff, 0xff, 0xff, 0xff]), packed8([0x00, 0x00, 0x00, 0x80]), [0.0, 0.0, 0.0, -128.0]),

        case(R16Unorm, packed16([0xffff]), packed16([0x0000]), [0.0, 0.0, 0.0, 1.0]),
        case(R16Unorm, packed16([0xffff]), packed16([0xffff]), [1.0, 0.0, 0.0, 1.0]),

        case(R16G16Unorm, packed16([0xffff, 0xffff]), packed16([0x0000, 0x0000]), [0.0, 0.0, 0.0, 1.0]),
        case(R16G16Unorm, packed16([0xffff, 0xffff]), packed16([0xffff, 0x0000]), [1.0, 0.0, 0.0, 1.0]),
        case(R16G16Unorm, packed16([0xffff, 0xffff]), packed16([0x0000, 0xffff]), [0.0, 1.0, 0.0, 1.0]),
        case(R16G16Unorm, packed16([0xffff, 0xffff]), packed16([0xffff, 0xffff]), [1.0, 1.0, 0.0, 1.0]),

        case(R16G16B16Unorm, packed16([0xffff, 0xffff, 0xffff]), packed16([0x0000, 0x0000, 0x0000]), [0.0, 0.0, 0.0, 1.0]),
        case(R16G16B16Unorm, packed16([0xffff, 0xffff, 0xffff]), packed16([0xffff, 0x0000, 0x0000]), [1.0, 0.0, 0.0, 1.0]),
        case(R16G16B16Unorm, packed16([0xffff, 0xffff, 0xffff]), packed16([0x0000, 0xffff, 0x0000]), [0.0, 1.0, 0.0, 1.0]),
        case(R16G16B16Unorm, packed16([0xffff, 0xffff, 0xffff]), packed16([0x0000, 0x0000, 0xffff]), [0.0, 0.0, 1.0, 1.0]),
        case(R16G16B16Unorm, packed16([0xffff, 0xffff, 0xffff]), packed16([0xffff, 0xffff, 0xffff]), [1.0, 1.0, 1.0, 1.0]),

        case(R16G16B16A16Unorm, packed16([0xffff, 0xffff, 0xffff, 0xffff]), packed16([0x0000, 0x0000, 0x0000, 0x0000]), [0.0, 0.0, 0.0, 0.0]),
        case(R16G16B16A16Unorm, packed16([0xffff, 0xffff, 0xffff, 0xffff]), packed16([0xffff, 0x0000, 0x0000, 0x0000]), [1.0, 0.0, 0.0, 0.0]),
        case(R16G16B16A16Unorm, packed16([0xffff, 0xffff, 0xffff, 0xffff]), packed16([0x0000, 0xffff, 0x0000, 0x0000]), [0.0, 1.0, 0.0, 0.0]),
        case(R16G16B16A16Unorm, packed16([0xffff, 0xffff, 0xffff, 0xffff]), packed16([0x0000, 0x0000, 0xffff, 0x0000]), [0.0, 0.0, 1.0, 0.0]),
        case(R16G16B16A16Unorm, packed16([0xffff, 0xffff, 0xffff, 0xffff]), packed16([0x0000, 0x0000, 0x0000, 0xffff]), [0.0, 0.0, 0.0, 1.0]),
        case(R16G16B16A16Unorm, packed16([0xffff, 0xffff, 0xffff, 0xffff]), packed16([0xffff, 0xffff, 0xffff, 0xffff]), [1.0, 1.0, 1.0, 1.0]),

        case(R16Uscaled, packed16([0xffff]), packed16([0x0000]), [0.0, 0.0, 0.0, 1.0]),
        case(R16Uscaled, packed16([0xffff]), packed16([0xffff]), [65535.0, 0.0, 0.0, 1.0]),

        case(R16G16Uscaled, packed16([0xffff, 0xffff]), packed16([0x0000, 0x0000]), [0.0, 0.0, 0.0, 1.0]),
        case(R16G16Uscaled, packed16([0xffff, 0xffff]), packed16([0xffff, 0x0000]), [65535.0, 0.0, 0.0, 1.0]),
        case(R16G16Uscaled, packed16([0xffff, 0xffff]), packed16([0x0000, 0xffff]), [0.0, 65535.0, 0.0, 1.0]),
        case(R16G16Uscaled, packed16([0xffff, 0xffff]), packed16([0xffff, 0xffff]), [65535.0, 65535.0, 0.0, 1.0]),

        case(R16G16B16Uscaled, packed16([0xffff, 0xffff, 0xffff]), packed16([0x0000, 0x0000, 0x0000]), [0.0, 0.0, 0.0, 1.0]),
        case(R16G16B16Uscaled, packed16([0xffff, 0xffff, 0xffff]), packed16([0xffff, 0x0000, 0x0000]), [65535.0, 0.0, 0.0, 1.0]),
        case(R16G16B16Uscaled, packed16([0xffff, 0xffff, 0xffff]), packed16([0x0000, 0xffff, 0x0000]), [0.0, 65535.0, 0.0, 1.0]),
        case(R16G16B16Uscaled, packed16([0xffff, 0xffff, 0xffff]), packed16([0x0000, 0x0000, 0xffff]), [0.0, 0.0, 65535.0, 1.0]),
        case(R16G16B16Uscaled, packed16([0xffff, 0xffff, 0xffff]), packed16([0xffff, 0xffff, 0xffff]), [65535.0, 65535.0, 65535.0, 1.0]),

        case(R16G16B16A16Uscaled, packed16([0xffff, 0xffff, 0xffff, 0xffff]), packed16([0x0000, 0x0000, 0x0000, 0x0000]), [0.0, 0.0, 0.0, 0.0]),
        case(R16G16B16A16Uscaled, packed16([0xffff, 0xffff, 0xffff, 0xffff]), packed16([0xffff, 0x0000, 0x0000, 0x0000]), [65535.0, 0.0, 0.0, 0.0]),
        case(R16G16B16A16Uscaled, packed16([0xffff, 0xffff, 0xffff, 0xffff]), packed16([0x0000, 0xffff, 0x0000, 0x0000]), [0.0, 65535.0, 0.0, 0.0]),
        case(R16G16B16A16Uscaled, packed16([0xffff, 0xffff, 0xffff, 0xffff]), packed16([0x0000, 0x0000, 0xffff, 0x0000]), [0.0, 0.0, 65535.0, 0.0]),
        case(R16G16B16A16Uscaled, packed16([0xffff, 0xffff, 0xffff, 0xffff]), packed16([0x0000, 0x0000, 0x0000, 0xffff]), [0.0, 0.0, 0.0, 65535.0]),
        case(R16G16B16A16Uscaled, packed16([0xffff, 0xffff, 0xffff, 0xffff]), packed16([0xffff, 0xffff, 0xffff, 0xffff]), [65535.0, 65535.0, 65535.0, 65535.0]),

        case(R16Snorm, packed16([0xffff]), packed16([0x0000]), [0.0, 0.0, 0.0, 1.0]),
        case(R16Snorm, packed16([0xffff]), packed16([0x7fff]), [1.0, 0.0, 0.0, 1.0]),
        case(R16Snorm, packed16([0xffff]), packed16([0x8001]), [-1.0, 0.0, 0.0, 1.0]),

        case(R16G16Snorm, packed16([0xffff, 0xffff]), packed16([0x0000, 0x0000]), [0.0, 0.0, 0.0, 1.0]),
        case(R16G16Snorm, packed16([0xffff, 0xffff]), packed16([0x7fff, 0x0000]), [1.0, 0.0, 0.0, 1.0]),
        case(R16G16Snorm, packed16([0xffff, 0xffff]), packed16([0x8001, 0x0000]), [-1.0, 0.0, 0.0, 1.0]),
        case(R16G16Snorm, packed16([0xffff, 0xffff]), packed16([0x0000, 0x7fff]), [0.0, 1.0, 0.0, 1.0]),
        case(R16G16Snorm, packed16([0xffff, 0xffff]), packed16([0x0000, 0x8001]), [0.0, -1.0, 0.0, 1.0]),

        case(R16G16B16Snorm, packed16([0xffff, 0xffff, 0xffff]), packed16([0x0000, 0x0000, 0x0000]), [0.0, 0.0, 0.0, 1.0]),
        case(R16G16B16Snorm, packed16([0xffff, 0xffff, 0xffff]), packed16([0x7fff, 0x0000, 0x0000]), [1.0, 0.0, 0.0, 1.0]),
        case(R16G16B16Snorm, packed16([0xffff, 0xffff, 0xffff]), packed16([0x8001, 0x0000, 0x0000]), [-1.0, 0.0, 0.0, 1.0]),
        case(R16G16B16Snorm, packed16([0xffff, 0xffff, 0xffff]), packed16([0x0000, 0x7fff, 0x0000]), [0.0, 1.0, 0.0, 1.0]),
        case(R16G16B16Snorm, packed16([0xffff, 0xffff, 0xffff]), packed16([0x0000, 0x8001, 0x0000]), [0.0, -1.0, 0.0, 1.0]),
        case(R16G16B16Snorm, packed16([0xffff, 0xffff, 0xffff]), packed16([0x0000, 0x0000, 0x7fff]), [0.0, 0.0, 1.0, 1.0]),
        case(R16G16B16Snorm, packed16([0xffff, 0xffff, 0xffff]), packed16([0x0000, 0x0000, 0x8001]), [0.0, 0.0, -1.0, 1.0]),

        case(R16G16B16A16Snorm, packed16([0xffff, 0xffff, 0xffff, 0xffff]), packed16([0x0000, 0x0000, 0x0000, 0x0000]), [0.0, 0.0, 0.0, 0.0]),
        case(R16G16B16A16Snorm, packed16([0xffff, 0xffff, 0xffff, 0xffff]), packed16([0x7fff, 0x0000, 0x0000, 0x0000]), [1.0, 0.0, 0.0, 0.0]),
        case(R16G16B16A16Snorm, packed16([0xffff, 0xffff, 0xffff, 0xffff]), packed16([0x8001, 0x0000, 0x0000, 0x0000]), [-1.0, 0.0, 0.0, 0.0]),
        case(R16G16B16A16Snorm, packed16([0xffff, 0xffff, 0xffff, 0xffff]), packed16([0x0000, 0x7fff, 0x0000, 0x0000]), [0.0, 1.0, 0.0, 0.0]),
        case(R16G16B16A16Snorm, packed16([0xffff, 0xffff, 0xffff, 0xffff]), packed16([0x0000, 0x8001, 0x0000, 0x0000]), [0.0, -1.0, 0.0, 0.0]),
        case(R16G16B16A16Snorm, packed16([0xffff, 0xffff, 0xffff, 0xffff]), packed16([0x0000, 0x0000, 0x7fff, 0x0000]), [0.0, 0.0, 1.0, 0.0]),
        case(R16G16B16A16Snorm, packed16([0xffff, 0xffff, 0xffff, 0xffff]), packed16([0x0000, 0x0000, 0x8001, 0x0000]), [0.0, 0.0, -1.0, 0.0]),
        case(R16G16B16A16Snorm, packed16([0xffff, 0xffff, 0xffff, 0xffff]), packed16([0x0000, 0x0000, 0x0000, 0x7fff]), [0.0, 0.0, 0.0, 1.0]),
        case(R16G16B16A16Snorm, packed16([0xffff, 0xffff, 0xffff, 0xffff]), packed16([0x0000, 0x0000, 0x0000, 0x8001]), [0.0, 0.0, 0.0, -1.0]),

        case(R16Sscaled, packed16([0xffff]), packed16([0x0000]), [0.0, 0.0, 0.0, 1.0]),
        case(R16Sscaled, packed16([0xffff]), packed16([0x7fff]), [32767.0, 0.0, 0.0, 1.0]),
        case(R16Sscaled, packed16([0xffff]), packed16([0x8000]), [-32768.0, 0.0, 0.0, 1.0]),

        case(R16G16Sscaled, packed16([0xffff, 0xffff]), packed16([0x0000, 0x0000]), [0.0, 0.0, 0.0, 1.0]),
        case(R16G16Sscaled, packed16([0xffff, 0xffff]), packed16([0x7fff, 0x0000]), [32767.0, 0.0, 0.0, 1.0]),
        case(R16G16Sscaled, packed16([0xffff, 0xffff]), packed16([0x8000, 0x0000]), [-32768.0, 0.0, 0.0, 1.0]),
        case(R16G16Sscaled, packed16([0xffff, 0xffff]), packed16([0x0000, 0x7fff]), [0.0, 32767.0, 0.0, 1.0]),
        case(R16G16Sscaled, packed16([0xffff, 0xffff]), packed16([0x0000, 0x8000]), [0.0, -32768.0, 0.0, 1.0]),

        case(R16G16B16Sscaled, packed16([0xffff, 0xffff, 0xffff]), packed16([0x0000, 0x0000, 0x0000]), [0.0, 0.0, 0.0, 1.0]),
        case(R16G16B16Sscaled, packed16([0xffff, 0xffff, 0xffff]), packed16([0x7fff, 0x0000, 0x0000]), [32767.0, 0.0, 0.0, 1.0]),
        case(R16G16B16Sscaled, packed16([0xffff, 0xffff, 0xffff]), packed16([0x8000, 0x0000, 0x0000]), [-32768.0, 0.0, 0.0, 1.0]),
        case(R16G16B16Sscaled, packed16([0xffff, 0xffff, 0xffff]), packed16([0x0000, 0x7fff, 0x0000]), [0.0, 32767.0, 0.0, 1.0]),
        case(R16G16B16Sscaled, packed16([0xffff, 0xffff, 0xffff]), packed16([0x0000, 0x8000, 0x0000]), [0.0, -32768.0, 0.0, 1.0]),
        case(R16G16B16Sscaled, packed16([0xffff, 0xffff, 0xffff]), packed16([0x0000, 0x0000, 0x7fff]), [0.0, 0.0, 32767.0, 1.0]),
        case(R16G16B16Sscaled, packed16([0xffff, 0xffff, 0xffff]), packed16([0x0000, 0x0000, 0x8000]), [0.0, 0.0, -32768.0, 1.0]),

        case(R16G16B16A16Sscaled, packed16([0xffff, 0xffff, 0xffff, 0xffff]), packed16([0x0000, 0x0000, 0x0000, 0x0000]), [0.0, 0.0, 0.0, 0.0]),
        case(R16G16B16A16Sscaled, packed16([0xffff, 0xffff, 0xffff, 0xffff]), packed16([0x7fff, 0x0000, 0x0000, 0x0000]), [32767.0, 0.0, 0.0, 0.0]),
        case(R16G16B16A16Sscaled, packed16([0xffff, 0xffff, 0xffff, 0xffff]), packed16([0x8000, 0x0000, 0x0000, 0x0000]), [-32768.0, 0.0, 0.0, 0.0]),
        case(R16G16B16A16Sscaled, packed16([0xffff, 0xffff, 0xffff, 0xffff]), packed16([0x0000, 0x7fff, 0x0000, 0x0000]), [0.0, 32767.0, 0.0, 0.0]),
        case(R16G16B16A16Sscaled, packed16([0xffff, 0xffff, 0xffff, 0xffff]), packed16([0x0000, 0x8000, 0x0000, 0x0000]), [0.0, -32768.0, 0.0, 0.0]),
        case(R16G16B16A16Sscaled, packed16([0xffff, 0xffff, 0xffff, 0xffff]), packed16([0x0000, 0x0000, 0x7fff, 0x0000]), [0.0, 0.0, 32767.0, 0.0]),
        case(R16G16B16A16Sscaled, packed16([0xffff, 0xffff, 0xffff, 0xffff]), packed16([0x0000, 0x0000, 0x8000, 0x0000]), [0.0, 0.0, -32768.0, 0.0]),
        case(R16G16B16A16Sscaled, packed16([0xffff, 0xffff, 0xffff, 0xffff]), packed16([0x0000, 0x0000, 0x0000, 0x7fff]), [0.0, 0.0, 0.0, 32767.0]),
        case(R16G16B16A16Sscaled, packed16([0xffff, 0xffff, 0xffff, 0xffff]), packed16([0x0000, 0x0000, 0x0000, 0x8000]), [0.0, 0.0, 0.0, -32768.0]),

        case(R32Unorm, packed32([0xffffffff]), packed32([0x00000000]), [0.0, 0.0, 0.0, 1.0]),
        case(R32Unorm, packed32([0xffffffff]), packed32([0xffffffff]), [1.0, 0.0, 0.0, 1.0]),

        case(R32G32Unorm, packed32([0xffffffff, 0xffffffff]), packed32([0x00000000, 0x00000000]), [0.0, 0.0, 0.0, 1.0]),
        case(R32G32Unorm, packed32([0xffffffff, 0xffffffff]), packed32([0xffffffff, 0x00000000]), [1.0, 0.0, 0.0, 1.0]),
        case(R32G32Unorm, packed32([0xffffffff, 0xffffffff]), packed32([0x00000000, 0xffffffff]), [0.0, 1.0, 0.0, 1.0]),
        case(R32G32Unorm, packed32([0xffffffff, 0xffffffff]), packed32([0xffffffff, 0xffffffff]), [1.0, 1.0, 0.0, 1.0]),

        case(R32G32B32Unorm, packed32([0xffffffff, 0xffffffff, 0xffffffff]), packed32([0x00000000, 0x00000000, 0x00000000]), [0.0, 0.0, 0.0, 1.0]),
        case(R32G32B32Unorm, packed32([0xffffffff, 0xffffffff, 0xffffffff]), packed32([0xffffffff, 0x00000000, 0x00000000]), [1.0, 0.0, 0.0, 1.0]),
        case(R32G32B32Unorm, packed32([0xffffffff, 0xffffffff, 0xffffffff]), packed32([0x00000000, 0xffffffff, 0x00000000]), [0.0, 1.0, 0.0, 1.0]),
        case(R32G32B32Unorm, packed32([0xffffffff, 0xffffffff, 0xffffffff]), packed32([0x00000000, 0x00000000, 0xffffffff]), [0.0, 0.0, 1.0, 1.0]),
        case(R32G32B32Unorm, packed32([0xffffffff, 0xffffffff, 0xffffffff]), packed32([0xffffffff, 0xffffffff, 0xffffffff]), [1.0, 1.0, 1.0, 1.0]),

        case(R32G32B32A32Unorm, packed32([0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff]), packed32([0x00000000, 0x00000000, 0x00000000, 0x00000000]), [0.0, 0.0, 0.0, 0.0]),
        case(R32G32B32A32Unorm, packed32([0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff]), packed32([0xffffffff, 0x00000000, 0x00000000, 0x00000000]), [1.0, 0.0, 0.0, 0.0]),
        case(R32G32B32A32Unorm, packed32([0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff]), packed32([0x00000000, 0xffffffff, 0x00000000, 0x00000000]), [0.0, 1.0, 0.0, 0.0]),
        case(R32G32B32A32Unorm, packed32([0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff]), packed32([0x00000000, 0x00000000, 0xffffffff, 0x00000000]), [0.0, 0.0, 1.0, 0.0]),
        case(R32G32B32A32Unorm, packed32([0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff]), packed32([0x00000000, 0x00000000, 0x00000000, 0xffffffff]), [0.0, 0.0, 0.0, 1.0]),
        case(R32G32B32A32Unorm, packed32([0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff]), packed32([0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff]), [1.0, 1.0, 1.0, 1.0]),

        case(R32Uscaled, packed32([0xffffffff]), packed32([0x00000000]), [0.0, 0.0, 0.0, 1.0]),
        case(R32Uscaled, packed32([0xffffffff]), packed32([0x01000000]), [16777216.0, 0.0, 0.0, 1.0]),

        case(R32G32Uscaled, packed32([0xffffffff, 0xffffffff]), packed32([0x00000000, 0x00000000]), [0.0, 0.0, 0.0, 1.0]),
        case(R32G32Uscaled, packed32([0xffffffff, 0xffffffff]), packed32([0x01000000, 0x00000000]), [16777216.0, 0.0, 0.0, 1.0]),
        case(R32G32Uscaled, packed32([0xffffffff, 0xffffffff]), packed32([0x00000000, 0x01000000]), [0.0, 16777216.0, 0.0, 1.0]),
        case(R32G32Uscaled, packed32([0xffffffff, 0xffffffff]), packed32([0x01000000, 0x01000000]), [16777216.0, 16777216.0, 0.0, 1.0]),

        case(R32G32B32Uscaled, packed32([0xffffffff, 0xffffffff, 0xffffffff]), packed32([0x00000000, 0x00000000, 0x00000000]), [0.0, 0.0, 0.0, 1.0]),
        case(R32G32B32Uscaled, packed32([0xffffffff, 0xffffffff, 0xffffffff]), packed32([0x01000000, 0x00000000, 0x00000000]), [16777216.0, 0.0, 0.0, 1.0]),
        case(R32G32B32Uscaled, packed32([0xffffffff, 0xffffffff, 0xffffffff]), packed32([0x00000000, 0x01000000, 0x00000000]), [0.0, 16777216.0, 0.0, 1.0]),
        case(R32G32B32Uscaled, packed32([0xffffffff, 0xffffffff, 0xffffffff]), packed32([0x00000000, 0x00000000, 0x01000000]), [0.0, 0.0, 16777216.0, 1.0]),
        case(R32G32B32Uscaled, packed32([0xffffffff, 0xffffffff, 0xffffffff]), packed32([0x01000000, 0x01000000, 0x01000000]), [16777216.0, 16777216.0, 16777216.0, 1.0]),

        case(R32G32B32A32Uscaled, packed32([0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff]), packed32([0x00000000, 0x00000000, 0x00000000, 0x00000000]), [0.0, 0.0, 0.0, 0.0]),
        case(R32G32B32A32Uscaled, packed32([0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff]), packed32([0x01000000, 0x00000000, 0x00000000, 0x00000000]), [16777216.0, 0.0, 0.0, 0.0]),
        case(R32G32B32A32Uscaled, packed32([0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff]), packed32([0x00000000, 0x01000000, 0x00000000, 0x00000000]), [0.0, 16777216.0, 0.0, 0.0]),
        case(R32G32B32A32Uscaled, packed32([0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff]), packed32([0x00000000, 0x00000000, 0x01000000, 0x00000000]), [0.0, 0.0, 16777216.0, 0.0]),
        case(R32G32B32A32Uscaled, packed32([0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff]), packed32([0x00000000, 0x00000000, 0x00000000, 0x01000000]), [0.0, 0.0, 0.0, 16777216.0]),
        case(R32G32B32A32Uscaled, packed32([0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff]), packed32([0x01000000, 0x01000000, 0x01000000, 0x01000000]), [16777216.0, 16777216.0, 16777216.0, 16777216.0]),

        case(R32Snorm, packed32([0xffffffff]), packed32([0x00000000]), [0.0, 0.0, 0.0, 1.0]),
        case(R32Snorm, packed32([0xffffffff]), packed32([0x7fffffff]), [1.0, 0.0, 0.0, 1.0]),
        case(R32Snorm, packed32([0xffffffff]), packed32([0x80000001]), [-1.0, 0.0, 0.0, 1.0]),

        case(R32G32Snorm, packed32([0xffffffff, 0xffffffff]), packed32([0x00000000, 0x00000000]), [0.0, 0.0, 0.0, 1.0]),
        case(R32G32Snorm, packed32([0xffffffff, 0xffffffff]), packed32([0x7fffffff, 0x00000000]), [1.0, 0.0, 0.0, 1.0]),
        case(R32G32Snorm, packed32([0xffffffff, 0xffffffff]), packed32([0x80000001, 0x00000000]), [-1.0, 0.0, 0.0, 1.0]),
        case(R32G32Snorm, packed32([0xffffffff, 0xffffffff]), packed32([0x00000000, 0x7fffffff]), [0.0, 1.0, 0.0, 1.0]),
        case(R32G32Snorm, packed32([0xffffffff, 0xffffffff]), packed32([0x00000000, 0x80000001]), [0.0, -1.0, 0.0, 1.0]),

        case(R32G32B32Snorm, packed32([0xffffffff, 0xffffffff, 0xffffffff]), packed32([0x00000000, 0x00000000, 0x00000000]), [0.0, 0.0, 0.0, 1.0]),
        case(R32G32B32Snorm, packed32([0xffffffff, 0xffffffff, 0xffffffff]), packed32([0x7fffffff, 0x00000000, 0x00000000]), [1.0, 0.0, 0.0, 1.0]),
        case(R32G32B32Snorm, packed32([0xffffffff, 0xffffffff, 0xffffffff]), packed32([0x80000001, 0x00000000, 0x00000000]), [-1.0, 0.0, 0.0, 1.0]),
        case(R32G32B32Snorm, packed32([0xffffffff, 0xffffffff, 0xffffffff]), packed32([0x00000000, 0x7fffffff, 0x00000000]), [0.0, 1.0, 0.0, 1.0]),
        case(R32G32B32Snorm, packed32([0xffffffff, 0xffffffff, 0xffffffff]), packed32([0x00000000, 0x80000001, 0x00000000]), [0.0, -1.0, 0.0, 1.0]),
        case(R32G32B32Snorm, packed32([0xffffffff, 0xffffffff, 0xffffffff]), packed32([0x00000000, 0x00000000, 0x7fffffff]), [0.0, 0.0, 1.0, 1.0]),
        case(R32G32B32Snorm, packed32([0xffffffff, 0xffffffff, 0xffffffff]), packed32([0x00000000, 0x00000000, 0x80000001]), [0.0, 0.0, -1.0, 1.0]),

        case(R32G32B32A32Snorm, packed32([0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff]), packed32([0x00000000, 0x00000000, 0x00000000, 0x00000000]), [0.0, 0.0, 0.0, 0.0]),
        case(R32G32B32A32Snorm, packed32([0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff]), packed32([0x7fffffff, 0x00000000, 0x00000000, 0x00000000]), [1.0, 0.0, 0.0, 0.0]),
        case(R32G32B32A32Snorm, packed32([0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff]), packed32([0x80000001, 0x00000000, 0x00000000, 0x00000000]), [-1.0, 0.0, 0.0, 0.0]),
        case(R32G32B32A32Snorm, packed32([0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff]), packed32([0x00000000, 0x7fffffff, 0x00000000, 0x00000000]), [0.0, 1.0, 0.0, 0.0]),
        case(R32G32B32A32Snorm, packed32([0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff]), packed32([0x00000000, 0x80000001, 0x00000000, 0x00000000]), [0.0, -1.0, 0.0, 0.0]),
        case(R32G32B32A32Snorm, packed32([0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff]), packed32([0x00000000, 0x00000000, 0x7fffffff, 0x00000000]), [0.0, 0.0, 1.0, 0.0]),
        case(R32G32B32A32Snorm, packed32([0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff]), packed32([0x00000000, 0x00000000, 0x80000001, 0x00000000]), [0.0, 0.0, -1.0, 0.0]),
        case(R32G32B32A32Snorm, packed32([0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff]), packed32([0x00000000, 0x00000000, 0x00000000, 0x7fffffff]), [0.0, 0.0, 0.0, 1.0]),
        case(R32G32B32A32Snorm, packed32([0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff]), packed32([0x00000000, 0x00000000, 0x00000000, 0x80000001]), [0.0, 0.0, 0.0, -1.0]),

        case(R32Sscaled, packed32([0xffffffff]), packed32([0x00000000]), [0.0, 0.0, 0.0, 1.0]),
        case(R32Sscaled, packed32([0xffffffff]), packed32([0x01000000]), [16777216.0, 0.0, 0.0, 1.0]),
        case(R32Sscaled, packed32([0xffffffff]), packed32([0xff000000]), [-16777216.0, 0.0, 0.0, 1.0]),

        case(R32G32Sscaled, packed32([0xffffffff, 0xffffffff]), packed32([0x00000000, 0x00000000]), [0.0, 0.0, 0.0, 1.0]),
        case(R32G32Sscaled, packed32([0xffffffff, 0xffffffff]), packed32([0x01000000, 0x00000000]), [16777216.0, 0.0, 0.0, 1.0]),
        case(R32G32Sscaled, packed32([0xffffffff, 0xffffffff]), packed32([0xff000000, 0x00000000]), [-16777216.0, 0.0, 0.0, 1.0]),
        case(R32G32Sscaled, packed32([0xffffffff, 0xffffffff]), packed32([0x00000000, 0x01000000]), [0.0, 16777216.0, 0.0, 1.0]),
        case(R32G32Sscaled, packed32([0xffffffff, 0xffffffff]), packed32([0x00000000, 0xff000000]), [0.0, -16777216.0, 0.0, 1.0]),

        case(R32G32B32Sscaled, packed32([0xffffffff, 0xffffffff, 0xffffffff]), packed32([0x00000000, 0x00000000, 0x00000000]), [0.0, 0.0, 0.0, 1.0]),
        case(R32G32B32Sscaled, packed32([0xffffffff, 0xffffffff, 0xffffffff]), packed32([0x01000000, 0x00000000, 0x00000000]), [16777216.0, 0.0, 0.0, 1.0]),
        case(R32G32B32Sscaled, packed32([0xffffffff, 0xffffffff, 0xffffffff]), packed32([0xff000000, 0x00000000, 0x00000000]), [-16777216.0, 0.0, 0.0, 1.0]),
        case(R32G32B32Sscaled, packed32([0xffffffff, 0xffffffff, 0xffffffff]), packed32([0x00000000, 0x01000000, 0x00000000]), [0.0, 16777216.0, 0.0, 1.0]),
        case(R32G32B32Sscaled, packed32([0xffffffff, 0xffffffff, 0xffffffff]), packed32([0x00000000, 0xff000000, 0x00000000]), [0.0, -16777216.0, 0.0, 1.0]),
        case(R32G32B32Sscaled, packed32([0xffffffff, 0xffffffff, 0xffffffff]), packed32([0x00000000, 0x00000000, 0x01000000]), [0.0, 0.0, 16777216.0, 1.0]),
        case(R32G32B32Sscaled, packed32([0xffffffff, 0xffffffff, 0xffffffff]), packed32([0x00000000, 0x00000000, 0xff000000]), [0.0, 0.0, -16777216.0, 1.0]),

        case(R32G32B32A32Sscaled, packed32([0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff]), packed32([0x00000000, 0x00000000, 0x00000000, 0x00000000]), [0.0, 0.0, 0.0, 0.0]),
        case(R32G32B32A32Sscaled, packed32([0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff]), packed32([0x01000000, 0x00000000, 0x00000000, 0x00000000]), [16777216.0, 0.0, 0.0, 0.0]),
        case(R32G32B32A32Sscaled, packed32([0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff]), packed32([0xff000000, 0x00000000, 0x00000000, 0x00000000]), [-16777216.0, 0.0, 0.0, 0.0]),
        case(R32G32B32A32Sscaled, packed32([0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff]), packed32([0x00000000, 0x01000000, 0x00000000, 0x00000000]), [0.0, 16777216.0, 0.0, 0.0]),
        case(R32G32B32A32Sscaled, packed32([0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff]), packed32([0x00000000, 0xff000000, 0x00000000, 0x00000000]), [0.0, -16777216.0, 0.0, 0.0]),
        case(R32G32B32A32Sscaled, packed32([0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff]), packed32([0x00000000, 0x00000000, 0x01000000, 0x00000000]), [0.0, 0.0, 16777216.0, 0.0]),
        case(R32G32B32A32Sscaled, packed32([0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff]), packed32([0x00000000, 0x00000000, 0xff000000, 0x00000000]), [0.0, 0.0, -16777216.0, 0.0]),
        case(R32G32B32A32Sscaled, packed32([0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff]), packed32([0x00000000, 0x00000000, 0x00000000, 0x01000000]), [0.0, 0.0, 0.0, 16777216.0]),
        case(R32G32B32A32Sscaled, packed32([0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff]), packed32([0x00000000, 0x00000000, 0x00000000, 0xff000000]), [0.0, 0.0, 0.0, -16777216.0]),

        case(R32Float, packed32([0xffffffff]), packed32([0x00000000]), [0.0, 0.0, 0.0, 1.0]),
        case(R32Float, packed32([0xffffffff]), packed32([0x3f800000]), [1.0, 0.0, 0.0, 1.0]),
        case(R32Float, packed32([0xffffffff]), packed32([0xbf800000]), [-1.0, 0.0, 0.0, 1.0]),

        case(R32G32Float, packed32([0xffffffff, 0xffffffff]), packed32([0x00000000, 0x00000000]), [0.0, 0.0, 0.0, 1.0]),
        case(R32G32Float, packed32([0xffffffff, 0xffffffff]), packed32([0x3f800000, 0x00000000]), [1.0, 0.0, 0.0, 1.0]),
        case(R32G32Float, packed32([0xffffffff, 0xffffffff]), packed32([0xbf800000, 0x00000000]), [-1.0, 0.0, 0.0, 1.0]),
        case(R32G32Float, packed32([0xffffffff, 0xffffffff]), packed32([0x00000000, 0x3f800000]), [0.0, 1.0, 0.0, 1.0]),
        case(R32G32Float, packed32([0xffffffff, 0xffffffff]), packed32([0x00000000, 0xbf800000]), [0.0, -1.0, 0.0, 1.0]),
        case(R32G32Float, packed32([0xffffffff, 0xffffffff]), packed32([0x3f800000, 0x3f800000]), [1.0, 1.0, 0.0, 1.0]),

        case(R32G32B32Float, packed32([0xffffffff, 0xffffffff, 0xffffffff]), packed32([0x00000000, 0x00000000, 0x00000000]), [0.0, 0.0, 0.0, 1.0]),
        case(R32G32B32Float, packed32([0xffffffff, 0xffffffff, 0xffffffff]), packed32([0x3f800000, 0x00000000, 0x00000000]), [1.0, 0.0, 0.0, 1.0]),
        case(R32G32B32Float, packed32([0xffffffff, 0xffffffff, 0xffffffff]), packed32([0xbf800000, 0x00000000, 0x00000000]), [-1.0, 0.0, 0.0, 1.0]),
        case(R32G32B32Float, packed32([0xffffffff, 0xffffffff, 0xffffffff]), packed32([0x00000000, 0x3f800000, 0x00000000]), [0.0, 1.0, 0.0, 1.0]),
        case(R32G32B32Float, packed32([0xffffffff, 0xffffffff, 0xffffffff]), packed32([0x00000000, 0xbf800000, 0x00000000]), [0.0, -1.0, 0.0, 1.0]),
        case(R32G32B32Float, packed32([0xffffffff, 0xffffffff, 0xffffffff]), packed32([0x00000000, 0x00000000, 0x3f800000]), [0.0, 0.0, 1.0, 1.0]),
        case(R32G32B32Float, packed32([0xffffffff, 0xffffffff, 0xffffffff]), packed32([0x00000000, 0x00000000, 0xbf800000]), [0.0, 0.0, -1.0, 1.0]),
        case(R32G32B32Float, packed32([0xffffffff, 0xffffffff, 0xffffffff]), packed32([0x3f800000, 0x3f800000, 0x3f800000]), [1.0, 1.0, 1.0, 1.0]),

        case(R32G32B32A32Float, packed32([0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff]), packed32([0x00000000, 0x00000000, 0x00000000, 0x00000000]), [0.0, 0.0, 0.0, 0.0]),
        case(R32G32B32A32Float, packed32([0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff]), packed32([0x3f800000, 0x00000000, 0x00000000, 0x00000000]), [1.0, 0.0, 0.0, 0.0]),
        case(R32G32B32A32Float, packed32([0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff]), packed32([0xbf800000, 0x00000000, 0x00000000, 0x00000000]), [-1.0, 0.0, 0.0, 0.0]),
        case(R32G32B32A32Float, packed32([0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff]), packed32([0x00000000, 0x3f800000, 0x00000000, 0x00000000]), [0.0, 1.0, 0.0, 0.0]),
        case(R32G32B32A32Float, packed32([0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff]), packed32([0x00000000, 0xbf800000, 0x00000000, 0x00000000]), [0.0, -1.0, 0.0, 0.0]),
        case(R32G32B32A32Float, packed32([0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff]), packed32([0x00000000, 0x00000000, 0x3f800000, 0x00000000]), [0.0, 0.0, 1.0, 0.0]),
        case(R32G32B32A32Float, packed32([0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff]), packed32([0x00000000, 0x00000000, 0xbf800000, 0x00000000]), [0.0, 0.0, -1.0, 0.0]),
        case(R32G32B32A32Float, packed32([0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff]), packed32([0x00000000, 0x00000000, 0x00000000, 0x3f800000]), [0.0, 0.0, 0.0, 1.0]),
        case(R32G32B32A32Float, packed32([0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff]), packed32([0x00000000, 0x00000000, 0x00000000, 0xbf800000]), [0.0, 0.0, 0.0, -1.0]),
        case(R32G32B32A32Float, packed32([0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff]), packed32([0x3f800000, 0x3f800000, 0x3f800000, 0x3f800000]), [1.0, 1.0, 1.0, 1.0]),

        // sRGB
        case(L8Srgb, packed8([0xff]), packed8([0x00]), [0.0, 0.0, 0.0, 1.0]),
        case(L8Srgb, packed8([0xff]), packed8([0xbc]), [SRGB_BC, SRGB_BC, SRGB_BC, 1.0]),
        case(L8Srgb, packed8([0xff]), packed8([0xff]), [1.0, 1.0, 1.0, 1.0]),

        case(L8A8Srgb, packed16([0xffff]), packed16([0x0000]), [0.0, 0.0, 0.0, 0.0]),
        case(L8A8Srgb, packed16([0xffff]), packed16([0xbcff]), [1.0, 1.0, 1.0, LINEAR_BC]),
        case(L8A8Srgb, packed16([0xffff]), packed16([0x00bc]), [SRGB_BC, SRGB_BC, SRGB_BC, 0.0]),

        case(R8G8B8Srgb, packed8([0xff, 0xff, 0xff]), packed8([0x00, 0x00, 0x00]), [0.0, 0.0, 0.0, 1.0]),
        case(R8G8B8Srgb, packed8([0xff, 0xff, 0xff]), packed8([0x01, 0x00, 0x00]), [SRGB_01, 0.0, 0.0, 1.0]),
        case(R8G8B8Srgb, packed8([0xff, 0xff, 0xff]), packed8([0x00, 0xbc, 0x00]), [0.0, SRGB_BC, 0.0, 1.0]),
        case(R8G8B8Srgb, packed8([0xff, 0xff, 0xff]), packed8([0x00, 0x00, 0xff]), [0.0, 0.0, 1.0, 1.0]),

        case(R8G8B8A8Srgb, packed8([0xff, 0xff, 0xff, 0xff]), packed8([0x00, 0x00, 0x00, 0x00]), [0.0, 0.0, 0.0, 0.0]),
        case(R8G8B8A8Srgb, packed8([0xff, 0xff, 0xff, 0xff]), packed8([0xff, 0x00, 0x00, 0xbc]), [1.0, 0.0, 0.0, LINEAR_BC]),
        case(R8G8B8A8Srgb, packed8([0xff, 0xff, 0xff, 0xff]), packed8([0x00, 0xbc, 0x01, 0xff]), [0.0, SRGB_BC, SRGB_01, 1.0]),

        case(A8B8G8R8Srgb, packed8([0xff, 0xff, 0xff, 0xff]), packed8([0xbc, 0x00, 0x00, 0xff]), [1.0, 0.0, 0.0, LINEAR_BC]),
        case(A8B8G8R8Srgb, packed8([0xff, 0xff, 0xff, 0xff]), packed8([0xff, 0xbc, 0x00, 0x00]), [0.0, 0.0, SRGB_BC, 1.0]),

        case(B8G8R8A8Srgb, packed8([0xff, 0xff, 0xff, 0xff]), packed8([0xbc, 0x00, 0x00, 0xff]), [0.0, 0.0, SRGB_BC, 1.0]),
        case(B8G8R8A8Srgb, packed8([0xff, 0xff, 0xff, 0xff]), packed8([0x00, 0x00, 0xff, 0xbc]), [1.0, 0.0, 0.0, LINEAR_BC]),

        case(A8R8G8B8Srgb, packed8([0xff, 0xff, 0xff, 0xff]), packed8([0xff, 0xbc, 0x00, 0x00]), [SRGB_BC, 0.0, 0.0, 1.0]),
        case(A8R8G8B8Srgb, packed8([0xff, 0xff, 0xff, 0xff]), packed8([0xbc, 0x00, 0x00, 0xff]), [0.0, 0.0, 1.0, LINEAR_BC]),

        // Half float
        case(R16Float, packed16([0xffff]), packed16([0x0000]), [0.0, 0.0, 0.0, 1.0]),
        case(R16Float, packed16([0xffff]), packed16([0x3c00]), [1.0, 0.0, 0.0, 1.0]),
        case(R16Float, packed16([0xffff]), packed16([0xbc00]), [-1.0, 0.0, 0.0, 1.0]),
        case(R16Float, packed16([0xffff]), packed16([0x3800]), [0.5, 0.0, 0.0, 1.0]),
        case(R16Float, packed16([0xffff]), packed16([0x7bff]), [65504.0, 0.0, 0.0, 1.0]),
        case(R16Float, packed16([0xffff]), packed16([0x0001]), [5.960464477539063e-8, 0.0, 0.0, 1.0]),

        case(R16G16Float, packed16([0xffff, 0xffff]), packed16([0x3c00, 0xbc00]), [1.0, -1.0, 0.0, 1.0]),

        case(R16G16B16Float, packed16([0xffff, 0xffff, 0xffff]), packed16([0x0000, 0x3800, 0x3c00]), [0.0, 0.5, 1.0, 1.0]),

        case(R16G16B16A16Float, packed16([0xffff, 0xffff, 0xffff, 0xffff]), packed16([0x0000, 0x0000, 0x0000, 0x0000]), [0.0, 0.0, 0.0, 0.0]),
        case(R16G16B16A16Float, packed16([0xffff, 0xffff, 0xffff, 0xffff]), packed16([0x3c00, 0x3800, 0xbc00, 0x7bff]), [1.0, 0.5, -1.0, 65504.0]),

        // Depth and stencil
        case(S8Uscaled, packed8([0xff]), packed8([0x00]), [0.0, 0.0, 0.0, 1.0]),
        case(S8Uscaled, packed8([0xff]), packed8([0xff]), [0.0, 255.0, 0.0, 1.0]),

        case(Z16Unorm, packed16([0xffff]), packed16([0x0000]), [0.0, 0.0, 0.0, 1.0]),
        case(Z16Unorm, packed16([0xffff]), packed16([0xffff]), [1.0, 0.0, 0.0, 1.0]),

        case(Z32Unorm, packed32([0xffffffff]), packed32([0x00000000]), [0.0, 0.0, 0.0, 1.0]),
        case(Z32Unorm, packed32([0xffffffff]), packed32([0xffffffff]), [1.0, 0.0, 0.0, 1.0]),

        case(Z32Float, packed32([0xffffffff]), packed32([0x00000000]), [0.0, 0.0, 0.0, 1.0]),
        case(Z32Float, packed32([0xffffffff]), packed32([0x3f800000]), [1.0, 0.0, 0.0, 1.0]),

        case(Z24UnormS8Uscaled, packed32([0xffffffff]), packed32([0x00000000]), [0.0, 0.0, 0.0, 1.0]),
        case(Z24UnormS8Uscaled, packed32([0xffffffff]), packed32([0x00ffffff]), [1.0, 0.0, 0.0, 1.0]),
        case(Z24UnormS8Uscaled, packed32([0xffffffff]), packed32([0xff000000]), [0.0, 255.0, 0.0, 1.0]),
        case(Z24UnormS8Uscaled, packed32([0xffffffff]), packed32([0xffffffff]), [1.0, 255.0, 0.0, 1.0]),

        case(S8UscaledZ24Unorm, packed32([0xffffffff]), packed32([0x00000000]), [0.0, 0.0, 0.0, 1.0]),
        case(S8UscaledZ24Unorm, packed32([0xffffffff]), packed32([0xffffff00]), [1.0, 0.0, 0.0, 1.0]),
        case(S8UscaledZ24Unorm, packed32([0xffffffff]), packed32([0x000000ff]), [0.0, 255.0, 0.0, 1.0]),
        case(S8UscaledZ24Unorm, packed32([0xffffffff]), packed32([0xffffffff]), [1.0, 255.0, 0.0, 1.0]),

        case(Z24X8Unorm, packed32([0x00ffffff]), packed32([0x00000000]), [0.0, 0.0, 0.0, 1.0]),
        case(Z24X8Unorm, packed32([0x00ffffff]), packed32([0x00ffffff]), [1.0, 0.0, 0.0, 1.0]),
        case(Z24X8Unorm, packed32([0x00ffffff]), packed32([0xff000000]), [0.0, 0.0, 0.0, 1.0]),

        case(X8Z24Unorm, packed32([0xffffff00]), packed32([0x00000000]), [0.0, 0.0, 0.0, 1.0]),
        case(X8Z24Unorm, packed32([0xffffff00]), packed32([0xffffff00]), [1.0, 0.0, 0.0, 1.0]),
        case(X8Z24Unorm, packed32([0xffffff00]), packed32([0x000000ff]), [0.0, 0.0, 0.0, 1.0]),

        case(Z32FloatS8X24Uscaled, packed32([0xffffffff, 0x000000ff]), packed32([0x00000000, 0x00000000]), [0.0, 0.0, 0.0, 1.0]),
        case(Z32FloatS8X24Uscaled, packed32([0xffffffff, 0x000000ff]), packed32([0x3f800000, 0x00000000]), [1.0, 0.0, 0.0, 1.0]),
        case(Z32FloatS8X24Uscaled, packed32([0xffffffff, 0x000000ff]), packed32([0x00000000, 0x000000ff]), [0.0, 255.0, 0.0, 1.0]),

        case(X24S8Uscaled, packed32([0xff000000]), packed32([0x00000000]), [0.0, 0.0, 0.0, 1.0]),
        case(X24S8Uscaled, packed32([0xff000000]), packed32([0xff000000]), [0.0, 255.0, 0.0, 1.0]),

        case(S8X24Uscaled, packed32([0x000000ff]), packed32([0x00000000]), [0.0, 0.0, 0.0, 1.0]),
        case(S8X24Uscaled, packed32([0x000000ff]), packed32([0x000000ff]), [0.0, 255.0, 0.0, 1.0]),

        // S3TC
        block_case(Dxt1Rgb, packed8([0; 8]), packed8(DXT1_RED_BLUE), [RED, BLUE, RED, BLUE]),
        block_case(Dxt1Srgb, packed8([0; 8]), packed8(DXT1_RED_BLUE), [RED, BLUE, RED, BLUE]),

        // Blue with transparent black for rows 1 and 3.
        block_case(Dxt1Rgba, packed8([0; 8]), packed8([0x1f, 0x00, 0x00, 0xf8, 0x00, 0xff, 0x00, 0xff]), [BLUE, TRANSPARENT, BLUE, TRANSPARENT]),
        block_case(Dxt1Srgba, packed8([0; 8]), packed8([0x1f, 0x00, 0x00, 0xf8, 0x00, 0xff, 0x00, 0xff]), [BLUE, TRANSPARENT, BLUE, TRANSPARENT]),

        block_case(Dxt3Rgba, packed8([0xff; 8]), dxt_block(DXT3_ALPHA, DXT1_RED_BLUE), [RED, CLEAR_BLUE, RED, CLEAR_BLUE]),
        block_case(Dxt3Srgba, packed8([0xff; 8]), dxt_block(DXT3_ALPHA, DXT1_RED_BLUE), [RED, CLEAR_BLUE, RED, CLEAR_BLUE]),

        block_case(Dxt5Rgba, packed8([0; 8]), dxt_block(DXT5_ALPHA, DXT1_RED_BLUE), [RED, CLEAR_BLUE, RED, CLEAR_BLUE]),
        block_case(Dxt5Srgba, packed8([0; 8]), dxt_block(DXT5_ALPHA, DXT1_RED_BLUE), [RED, CLEAR_BLUE, RED, CLEAR_BLUE]),
    ]
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use strum::IntoEnumIterator;

    #[test]
    fn every_format_has_a_case() {
        let tested: HashSet<_> = TEST_CASES.iter().map(|c| c.format).collect();
        for format in Format::iter() {
            assert!(tested.contains(&format), "{format:?}");
        }
    }

    #[test]
    fn packed_helpers() {
        assert_eq!([0x78, 0x56, 0x34, 0x12], packed32([0x12345678])[..4]);
        assert_eq!([0xcd, 0xab, 0x34, 0x12], packed16([0xabcd, 0x1234])[..4]);
        assert_eq!([0; 12], packed32([0x12345678])[4..]);
    }

    #[test]
    fn masks_fit_in_block() {
        crate::initialize();
        for case in TEST_CASES {
            let bytes = crate::lookup(case.format).bytes_per_block();
            assert!(case.mask[bytes..].iter().all(|b| *b == 0), "{case:?}");
            assert!(case.packed[bytes..].iter().all(|b| *b == 0), "{case:?}");
        }
    }
}
