//! Per channel descriptions and scalar conversions shared by the codecs.
use crate::half_float::{float_to_half, half_to_float};

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ChannelKind {
    /// Padding or an unused channel.
    Void,
    Unsigned,
    Signed,
    Float,
}

/// The storage of one channel of a texel.
///
/// `shift` is the bit offset from the start of the texel.
/// For word layouts this is counted from the least significant bit
/// of the little endian word.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Channel {
    pub kind: ChannelKind,
    pub normalized: bool,
    pub size: u32,
    pub shift: u32,
}

impl Channel {
    pub const NONE: Self = Self::new(ChannelKind::Void, false, 0);

    pub const fn new(kind: ChannelKind, normalized: bool, size: u32) -> Self {
        Self {
            kind,
            normalized,
            size,
            shift: 0,
        }
    }

    pub const fn void(size: u32) -> Self {
        Self::new(ChannelKind::Void, false, size)
    }

    pub const fn unorm(size: u32) -> Self {
        Self::new(ChannelKind::Unsigned, true, size)
    }

    pub const fn snorm(size: u32) -> Self {
        Self::new(ChannelKind::Signed, true, size)
    }

    pub const fn uscaled(size: u32) -> Self {
        Self::new(ChannelKind::Unsigned, false, size)
    }

    pub const fn sscaled(size: u32) -> Self {
        Self::new(ChannelKind::Signed, false, size)
    }

    pub const fn float(size: u32) -> Self {
        Self::new(ChannelKind::Float, false, size)
    }

    pub fn is_unorm8(&self) -> bool {
        self.kind == ChannelKind::Unsigned && self.normalized && self.size == 8
    }

    pub(crate) fn mask(&self) -> u64 {
        if self.size >= 64 {
            u64::MAX
        } else {
            (1u64 << self.size) - 1
        }
    }

    /// Converts the raw channel bits to a value in double precision.
    pub(crate) fn decode(&self, raw: u64) -> f64 {
        match self.kind {
            ChannelKind::Void => 0.0,
            ChannelKind::Unsigned => {
                if self.normalized {
                    raw as f64 / self.mask() as f64
                } else {
                    raw as f64
                }
            }
            ChannelKind::Signed => {
                let value = sign_extend(raw, self.size);
                if self.normalized {
                    (value as f64 / signed_max(self.size) as f64).max(-1.0)
                } else {
                    value as f64
                }
            }
            ChannelKind::Float => match self.size {
                16 => half_to_float(raw as u16) as f64,
                32 => f32::from_bits(raw as u32) as f64,
                _ => f64::from_bits(raw),
            },
        }
    }

    /// Converts `value` to raw channel bits.
    ///
    /// Out of range values are clamped and reported by returning `false`.
    /// Normalized values round to nearest and scaled values truncate toward zero.
    pub(crate) fn encode(&self, value: f32) -> (u64, bool) {
        match self.kind {
            ChannelKind::Void => (0, true),
            ChannelKind::Float => match self.size {
                16 => (float_to_half(value) as u64, true),
                32 => (value.to_bits() as u64, true),
                _ => ((value as f64).to_bits(), true),
            },
            ChannelKind::Unsigned => {
                let max = self.mask() as f64;
                let (value, in_range) = if self.normalized {
                    clamp(value as f64, 0.0, 1.0)
                } else {
                    clamp(value as f64, 0.0, max)
                };
                let raw = if self.normalized {
                    (value * max).round()
                } else {
                    value.trunc()
                };
                (raw as u64, in_range)
            }
            ChannelKind::Signed => {
                let max = signed_max(self.size) as f64;
                let (value, in_range) = if self.normalized {
                    clamp(value as f64, -1.0, 1.0)
                } else {
                    clamp(value as f64, -max - 1.0, max)
                };
                let raw = if self.normalized {
                    (value * max).round()
                } else {
                    value.trunc()
                };
                ((raw as i64 as u64) & self.mask(), in_range)
            }
        }
    }
}

fn clamp(value: f64, min: f64, max: f64) -> (f64, bool) {
    if value.is_nan() {
        (0.0, false)
    } else if value < min {
        (min, false)
    } else if value > max {
        (max, false)
    } else {
        (value, true)
    }
}

fn signed_max(size: u32) -> i64 {
    (1i64 << (size - 1)) - 1
}

fn sign_extend(raw: u64, size: u32) -> i64 {
    let unused = 64 - size;
    ((raw << unused) as i64) >> unused
}

/// Where an RGBA output slot gets its value from.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Swizzle {
    X,
    Y,
    Z,
    W,
    Zero,
    One,
    None,
}

impl Swizzle {
    /// The source channel index or `None` for constants.
    pub fn channel(self) -> Option<usize> {
        match self {
            Swizzle::X => Some(0),
            Swizzle::Y => Some(1),
            Swizzle::Z => Some(2),
            Swizzle::W => Some(3),
            Swizzle::Zero | Swizzle::One | Swizzle::None => None,
        }
    }

    pub(crate) fn constant_f32(self) -> f32 {
        if self == Swizzle::One {
            1.0
        } else {
            0.0
        }
    }

    pub(crate) fn constant_u8(self) -> u8 {
        if self == Swizzle::One {
            255
        } else {
            0
        }
    }
}

/// Converts a float in `[0, 1]` to 8-bit unorm, rounding to nearest.
pub fn float_to_ubyte(f: f32) -> u8 {
    if f.is_nan() || f <= 0.0 {
        0
    } else if f >= 1.0 {
        255
    } else {
        (f * 255.0 + 0.5) as u8
    }
}

pub fn ubyte_to_float(u: u8) -> f32 {
    u as f32 / 255.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_unorm() {
        assert_eq!(0.0, Channel::unorm(8).decode(0));
        assert_eq!(1.0, Channel::unorm(8).decode(0xff));
        assert_eq!(1.0, Channel::unorm(5).decode(0x1f));
        assert_eq!(1.0, Channel::unorm(32).decode(0xffffffff));
    }

    #[test]
    fn decode_snorm() {
        assert_eq!(1.0, Channel::snorm(8).decode(0x7f));
        assert_eq!(-1.0, Channel::snorm(8).decode(0x81));
        assert_eq!(-1.0, Channel::snorm(8).decode(0x80));
        assert_eq!(-1.0, Channel::snorm(5).decode(0x11));
        assert_eq!(-1.0, Channel::snorm(16).decode(0x8001));
    }

    #[test]
    fn decode_scaled() {
        assert_eq!(-128.0, Channel::sscaled(8).decode(0x80));
        assert_eq!(16777216.0, Channel::uscaled(32).decode(0x01000000));
        assert_eq!(-16777216.0, Channel::sscaled(32).decode(0xff000000));
    }

    #[test]
    fn encode_unorm() {
        assert_eq!((0xff, true), Channel::unorm(8).encode(1.0));
        assert_eq!((0x80, true), Channel::unorm(8).encode(0.5));
        assert_eq!((0xff, false), Channel::unorm(8).encode(2.0));
        assert_eq!((0, false), Channel::unorm(8).encode(-0.5));
        assert_eq!((0, false), Channel::unorm(8).encode(f32::NAN));
        assert_eq!((0xffffffff, true), Channel::unorm(32).encode(1.0));
    }

    #[test]
    fn encode_snorm() {
        assert_eq!((0x81, true), Channel::snorm(8).encode(-1.0));
        assert_eq!((0x7f, true), Channel::snorm(8).encode(1.0));
        assert_eq!((0x11, true), Channel::snorm(5).encode(-1.0));
        assert_eq!((0x81, false), Channel::snorm(8).encode(-3.0));
    }

    #[test]
    fn encode_scaled_truncates() {
        assert_eq!((2, true), Channel::uscaled(8).encode(2.9));
        assert_eq!((0xfe, true), Channel::sscaled(8).encode(-2.9));
        assert_eq!((0xff, false), Channel::uscaled(8).encode(300.0));
        assert_eq!((0x80, true), Channel::sscaled(8).encode(-128.0));
        assert_eq!((0x80, false), Channel::sscaled(8).encode(-1000.0));
    }

    #[test]
    fn float_to_ubyte_rounds_and_clamps() {
        assert_eq!(0, float_to_ubyte(-1.0));
        assert_eq!(0, float_to_ubyte(f32::NAN));
        assert_eq!(128, float_to_ubyte(0.5));
        assert_eq!(255, float_to_ubyte(1.0));
        assert_eq!(255, float_to_ubyte(7.0));
    }

    #[test]
    fn ubyte_float_round_trip() {
        for u in 0..=255u8 {
            assert_eq!(u, float_to_ubyte(ubyte_to_float(u)));
        }
    }

    #[test]
    fn swizzle_channels() {
        assert_eq!(Some(3), Swizzle::W.channel());
        assert_eq!(None, Swizzle::One.channel());
        assert_eq!(1.0, Swizzle::One.constant_f32());
        assert_eq!(0, Swizzle::None.constant_u8());
    }
}
