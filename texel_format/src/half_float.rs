//! Conversions between IEEE 754 binary16 and binary32 bit patterns.
//!
//! The conversions use the table based method from
//! "Fast Half Float Conversions" by Jeroen van der Zijp,
//! so no hardware support for half precision floats is required.
//! Float to half conversion truncates the mantissa.
use std::sync::OnceLock;

struct HalfTables {
    mantissa: [u32; 2048],
    exponent: [u32; 64],
    offset: [u16; 64],
    base: [u16; 512],
    shift: [u8; 512],
}

static TABLES: OnceLock<Box<HalfTables>> = OnceLock::new();

pub(crate) fn initialize() {
    TABLES.get_or_init(|| Box::new(HalfTables::new()));
}

fn tables() -> &'static HalfTables {
    TABLES
        .get()
        .expect("half float tables used before texel_format::initialize()")
}

impl HalfTables {
    fn new() -> Self {
        let mut tables = Self {
            mantissa: [0; 2048],
            exponent: [0; 64],
            offset: [0; 64],
            base: [0; 512],
            shift: [0; 512],
        };

        // Subnormal halves are renormalized to normal floats.
        for i in 1..1024 {
            let mut m = (i as u32) << 13;
            let mut e = 0u32;
            while m & 0x0080_0000 == 0 {
                e = e.wrapping_sub(0x0080_0000);
                m <<= 1;
            }
            m &= !0x0080_0000;
            e = e.wrapping_add(0x3880_0000);
            tables.mantissa[i] = m | e;
        }
        for i in 1024..2048 {
            tables.mantissa[i] = 0x3800_0000 + ((i as u32 - 1024) << 13);
        }

        for i in 1..31 {
            tables.exponent[i] = (i as u32) << 23;
            tables.offset[i] = 1024;
        }
        // Infinity and NaN.
        tables.exponent[31] = 0x4780_0000;
        tables.offset[31] = 1024;

        for i in 0..256usize {
            let e = i as i32 - 127;
            let (base, shift) = if e < -24 {
                // Too small for a subnormal half.
                (0x0000, 24)
            } else if e < -14 {
                (0x0400 >> (-e - 14), (-e - 1) as u8)
            } else if e <= 15 {
                (((e + 15) as u16) << 10, 13)
            } else if e < 128 {
                // Overflows to infinity.
                (0x7c00, 24)
            } else {
                // Infinity and NaN keep their mantissa.
                (0x7c00, 13)
            };
            tables.base[i] = base;
            tables.shift[i] = shift;
        }

        // Negative values are the positive entries with the sign bit set.
        for i in 0..32 {
            tables.exponent[i + 32] = tables.exponent[i] | 0x8000_0000;
            tables.offset[i + 32] = tables.offset[i];
        }
        for i in 0..256 {
            tables.base[i | 0x100] = tables.base[i] | 0x8000;
            tables.shift[i | 0x100] = tables.shift[i];
        }

        tables
    }
}

/// Converts the bits of a binary16 value to the bits of the equivalent binary32 value.
pub fn half_to_float_bits(h: u16) -> u32 {
    let tables = tables();
    let e = (h >> 10) as usize;
    tables.mantissa[tables.offset[e] as usize + (h & 0x03ff) as usize]
        .wrapping_add(tables.exponent[e])
}

/// Converts the bits of a binary32 value to binary16, truncating excess mantissa bits.
pub fn float_to_half_bits(f: u32) -> u16 {
    let tables = tables();
    let i = ((f >> 23) & 0x01ff) as usize;
    let h = tables.base[i] + ((f & 0x007f_ffff) >> tables.shift[i]) as u16;
    if h & 0x7fff == 0x7c00 && f & 0x7fff_ffff > 0x7f80_0000 {
        // NaN payload only in the discarded bits.
        h | 0x0200
    } else {
        h
    }
}

/// Converts a binary16 value to `f32`.
///
/// Subnormal results may be flushed to zero on targets that do so for `f32`.
pub fn half_to_float(h: u16) -> f32 {
    f32::from_bits(half_to_float_bits(h))
}

/// Converts `f` to binary16 with the same truncation as [float_to_half_bits].
pub fn float_to_half(f: f32) -> u16 {
    float_to_half_bits(f.to_bits())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_round_trip_exhaustive() {
        crate::initialize();
        for h in 0..=u16::MAX {
            assert_eq!(h, float_to_half_bits(half_to_float_bits(h)), "{h:#06x}");
        }
    }

    #[test]
    fn half_to_float_matches_half_crate() {
        crate::initialize();
        for h in 0..=u16::MAX {
            let expected = half::f16::from_bits(h).to_f32();
            let actual = half_to_float(h);
            if expected.is_nan() {
                assert!(actual.is_nan(), "{h:#06x}");
            } else {
                assert_eq!(expected.to_bits(), actual.to_bits(), "{h:#06x}");
            }
        }
    }

    #[test]
    fn half_to_float_special_values() {
        crate::initialize();
        assert_eq!(1.0, half_to_float(0x3c00));
        assert_eq!(-2.0, half_to_float(0xc000));
        assert_eq!(65504.0, half_to_float(0x7bff));
        assert_eq!(2.0f32.powi(-24), half_to_float(0x0001));
        assert_eq!(2.0f32.powi(-14), half_to_float(0x0400));
        assert_eq!(f32::INFINITY, half_to_float(0x7c00));
        assert_eq!(f32::NEG_INFINITY, half_to_float(0xfc00));
        assert_eq!(0x8000_0000, half_to_float_bits(0x8000));
        assert!(half_to_float(0x7e00).is_nan());
    }

    #[test]
    fn float_to_half_special_values() {
        crate::initialize();
        assert_eq!(0x0000, float_to_half(0.0));
        assert_eq!(0x8000, float_to_half(-0.0));
        assert_eq!(0x3c00, float_to_half(1.0));
        assert_eq!(0xb800, float_to_half(-0.5));
        assert_eq!(0x7c00, float_to_half(65536.0));
        assert_eq!(0x7c00, float_to_half(f32::MAX));
        assert_eq!(0xfc00, float_to_half(f32::NEG_INFINITY));
        assert_eq!(0x0000, float_to_half(1.0e-10));
        assert_eq!(0x0001, float_to_half(2.0f32.powi(-24)));
        assert_eq!(0x0003, float_to_half(3.0 * 2.0f32.powi(-24)));
    }

    #[test]
    fn float_to_half_truncates() {
        crate::initialize();
        // 1 + 2^-10 - 2^-20 rounds down rather than to nearest.
        let f = 1.0 + 2.0f32.powi(-10) - 2.0f32.powi(-20);
        assert_eq!(0x3c00, float_to_half(f));
    }

    #[test]
    fn float_to_half_nan_stays_nan() {
        crate::initialize();
        let h = float_to_half(f32::from_bits(0x7f80_0001));
        assert_eq!(0x7c00, h & 0x7c00);
        assert_ne!(0, h & 0x03ff);
    }
}
