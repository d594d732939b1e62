//! sRGB transfer function conversions.
//!
//! The 8-bit conversions are 256 entry lookup tables.
//! Linear float to 8-bit sRGB avoids `powf` by interpolating linearly within
//! 104 buckets selected by the exponent and the top 3 mantissa bits of the input.
use std::sync::OnceLock;

use crate::channel::float_to_ubyte;

// 2^-13 and the largest float below 1.0.
const MIN_LINEAR_BITS: u32 = (127 - 13) << 23;
const ALMOST_ONE_BITS: u32 = 0x3f7f_ffff;

const BUCKETS: usize = 104;

struct SrgbTables {
    srgb_to_linear_float: [f32; 256],
    srgb_to_linear_8unorm: [u8; 256],
    linear_8unorm_to_srgb: [u8; 256],
    /// `(bias, scale)` for each bucket in 16.16 fixed point.
    linear_float_to_srgb: [(u32, u32); BUCKETS],
}

static TABLES: OnceLock<Box<SrgbTables>> = OnceLock::new();

pub(crate) fn initialize() {
    TABLES.get_or_init(|| Box::new(SrgbTables::new()));
}

fn tables() -> &'static SrgbTables {
    TABLES
        .get()
        .expect("sRGB tables used before texel_format::initialize()")
}

impl SrgbTables {
    fn new() -> Self {
        let mut tables = Self {
            srgb_to_linear_float: [0.0; 256],
            srgb_to_linear_8unorm: [0; 256],
            linear_8unorm_to_srgb: [0; 256],
            linear_float_to_srgb: [(0, 0); BUCKETS],
        };

        for i in 0..256 {
            let linear = srgb_to_linear_float(i as f32 / 255.0);
            tables.srgb_to_linear_float[i] = linear;
            tables.srgb_to_linear_8unorm[i] = float_to_ubyte(linear);
            tables.linear_8unorm_to_srgb[i] = float_to_ubyte(linear_to_srgb_float(i as f32 / 255.0));
        }

        for (i, entry) in tables.linear_float_to_srgb.iter_mut().enumerate() {
            let scale = 2f64.powi(i as i32 / 8 - 13);
            let start = scale * (1.0 + (i % 8) as f64 / 8.0);
            // The residual byte steps through the next 8 mantissa bits.
            let x = |t: f64| start + scale * t / 2048.0;
            let y = |t: f64| 255.0 * linear_to_srgb_f64(x(t));

            let (y0, y1) = (y(0.0), y(256.0));
            // Center the chord between the curve and its endpoints.
            let sag = y(128.0) - (y0 + y1) / 2.0;
            let bias = (y0 + sag / 2.0 + 0.5) * 65536.0;
            let slope = (y1 - y0) * 256.0;
            *entry = (bias.round() as u32, slope.round() as u32);
        }

        tables
    }
}

fn srgb_to_linear_f64(x: f64) -> f64 {
    if x <= 0.04045 {
        x / 12.92
    } else {
        ((x + 0.055) / 1.055).powf(2.4)
    }
}

fn linear_to_srgb_f64(x: f64) -> f64 {
    if x <= 0.0031308 {
        x * 12.92
    } else {
        1.055 * x.powf(1.0 / 2.4) - 0.055
    }
}

/// The exact sRGB to linear transfer function.
pub fn srgb_to_linear_float(x: f32) -> f32 {
    srgb_to_linear_f64(x as f64) as f32
}

/// The exact linear to sRGB transfer function.
pub fn linear_to_srgb_float(x: f32) -> f32 {
    linear_to_srgb_f64(x as f64) as f32
}

pub fn srgb_8unorm_to_linear_float(x: u8) -> f32 {
    tables().srgb_to_linear_float[x as usize]
}

pub fn srgb_8unorm_to_linear_8unorm(x: u8) -> u8 {
    tables().srgb_to_linear_8unorm[x as usize]
}

pub fn linear_8unorm_to_srgb_8unorm(x: u8) -> u8 {
    tables().linear_8unorm_to_srgb[x as usize]
}

/// Converts linear `x` to 8-bit sRGB without calling `powf`.
///
/// Inputs are clamped to `[2^-13, 1)` and NaN maps to 0.
/// The result is within 1 of the correctly rounded value.
pub fn linear_float_to_srgb_8unorm(x: f32) -> u8 {
    let bits = if x.is_nan() || x <= f32::from_bits(MIN_LINEAR_BITS) {
        MIN_LINEAR_BITS
    } else if x > f32::from_bits(ALMOST_ONE_BITS) {
        ALMOST_ONE_BITS
    } else {
        x.to_bits()
    };

    let (bias, scale) = tables().linear_float_to_srgb[((bits - MIN_LINEAR_BITS) >> 20) as usize];
    let t = (bits >> 12) & 0xff;
    ((bias + scale * t) >> 16).min(255) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn max_relative_error() -> f64 {
        2f64.powi(-20)
    }

    #[test]
    fn linear_float_to_srgb_8unorm_endpoints() {
        crate::initialize();
        assert_eq!(0, linear_float_to_srgb_8unorm(0.0));
        assert_eq!(0, linear_float_to_srgb_8unorm(-5.0));
        assert_eq!(0, linear_float_to_srgb_8unorm(f32::NAN));
        assert_eq!(255, linear_float_to_srgb_8unorm(1.0));
        assert_eq!(255, linear_float_to_srgb_8unorm(100.0));
        assert_eq!(188, linear_float_to_srgb_8unorm(0.502886458));
        assert_eq!(1, linear_float_to_srgb_8unorm(0.000303527));
    }

    #[test]
    fn linear_float_to_srgb_8unorm_within_one() {
        crate::initialize();
        for i in 0..=100_000 {
            let x = i as f32 / 100_000.0;
            let expected = (255.0 * linear_to_srgb_f64(x as f64)).round() as i32;
            let actual = linear_float_to_srgb_8unorm(x) as i32;
            assert!((expected - actual).abs() <= 1, "{x}: {expected} != {actual}");
        }
    }

    #[test]
    fn srgb_8unorm_round_trip() {
        crate::initialize();
        for x in 0..=255u8 {
            let round_trip = linear_float_to_srgb_8unorm(srgb_8unorm_to_linear_float(x));
            assert!((x as i32 - round_trip as i32).abs() <= 1, "{x} != {round_trip}");
        }
    }

    #[test]
    fn srgb_8unorm_tables() {
        crate::initialize();
        assert_eq!(0.0, srgb_8unorm_to_linear_float(0));
        assert_eq!(1.0, srgb_8unorm_to_linear_float(255));
        assert_eq!(0, srgb_8unorm_to_linear_8unorm(0));
        assert_eq!(255, srgb_8unorm_to_linear_8unorm(255));
        assert_eq!(128, srgb_8unorm_to_linear_8unorm(188));
        assert_eq!(188, linear_8unorm_to_srgb_8unorm(128));
        assert_eq!(255, linear_8unorm_to_srgb_8unorm(255));
    }

    #[test]
    fn srgb_8unorm_tables_monotonic() {
        crate::initialize();
        for x in 1..=255u8 {
            assert!(srgb_8unorm_to_linear_float(x) > srgb_8unorm_to_linear_float(x - 1));
            assert!(linear_8unorm_to_srgb_8unorm(x) >= linear_8unorm_to_srgb_8unorm(x - 1));
        }
    }

    #[test]
    fn linear_float_to_srgb_interpolation_error() {
        crate::initialize();
        let tables = tables();
        for (i, (bias, scale)) in tables.linear_float_to_srgb.iter().enumerate() {
            for t in 0..256u32 {
                let x = f32::from_bits(MIN_LINEAR_BITS + ((i as u32) << 20) + (t << 12));
                // 16.16 fixed point before the final shift.
                let actual = (bias + scale * t) as f64 / 65536.0;
                let expected = 255.0 * linear_to_srgb_f64(x as f64) + 0.5;
                assert!(
                    (actual - expected).abs() < 0.05,
                    "bucket {i} residual {t}: {actual} != {expected}"
                );
            }
        }
    }

    #[test]
    fn closed_form_reference_values() {
        let check = |actual: f32, expected: f64| {
            let error = (actual as f64 - expected).abs() / expected;
            assert!(error < max_relative_error(), "{actual} != {expected}");
        };
        check(linear_to_srgb_float(0.001), 0.01292);
        check(linear_to_srgb_float(0.18), 0.461356129500442);
        check(linear_to_srgb_float(0.5), 0.735356983052449);
        check(linear_to_srgb_float(0.9), 0.954687171885866);
        check(srgb_to_linear_float(0.001), 0.0000773993808049536);
        check(srgb_to_linear_float(0.18), 0.0272117809513814);
        check(srgb_to_linear_float(0.5), 0.214041140482232);
        check(srgb_to_linear_float(0.9), 0.787412289395617);
    }
}
