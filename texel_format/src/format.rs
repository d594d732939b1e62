use strum::{EnumCount, EnumIter, FromRepr};

/// A stable identifier for a packed texel encoding.
///
/// Channel names are listed from the lowest addressed byte or least significant bit.
/// `X` channels are padding and are ignored when unpacking.
/// The discriminants are dense and usable as raw ids with [Format::from_repr].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, EnumIter, EnumCount, FromRepr)]
#[repr(u32)]
pub enum Format {
    B8G8R8A8Unorm,
    B8G8R8X8Unorm,
    A8R8G8B8Unorm,
    X8R8G8B8Unorm,
    A8B8G8R8Unorm,
    X8B8G8R8Unorm,
    R10G10B10A2Unorm,
    B5G5R5A1Unorm,
    B4G4R4A4Unorm,
    B5G6R5Unorm,

    L8Unorm,
    A8Unorm,
    I8Unorm,
    L8A8Unorm,
    L16Unorm,

    L8Srgb,
    L8A8Srgb,
    R8G8B8Srgb,
    R8G8B8A8Srgb,
    A8B8G8R8Srgb,
    B8G8R8A8Srgb,
    A8R8G8B8Srgb,

    R8SG8SB8UX8UNorm,
    R5SG5SB6UNorm,

    R8Unorm,
    R8G8Unorm,
    R8G8B8Unorm,
    R8G8B8A8Unorm,
    R8Uscaled,
    R8G8Uscaled,
    R8G8B8Uscaled,
    R8G8B8A8Uscaled,
    R8Snorm,
    R8G8Snorm,
    R8G8B8Snorm,
    R8G8B8A8Snorm,
    R8Sscaled,
    R8G8Sscaled,
    R8G8B8Sscaled,
    R8G8B8A8Sscaled,

    R16Unorm,
    R16G16Unorm,
    R16G16B16Unorm,
    R16G16B16A16Unorm,
    R16Uscaled,
    R16G16Uscaled,
    R16G16B16Uscaled,
    R16G16B16A16Uscaled,
    R16Snorm,
    R16G16Snorm,
    R16G16B16Snorm,
    R16G16B16A16Snorm,
    R16Sscaled,
    R16G16Sscaled,
    R16G16B16Sscaled,
    R16G16B16A16Sscaled,

    R32Unorm,
    R32G32Unorm,
    R32G32B32Unorm,
    R32G32B32A32Unorm,
    R32Uscaled,
    R32G32Uscaled,
    R32G32B32Uscaled,
    R32G32B32A32Uscaled,
    R32Snorm,
    R32G32Snorm,
    R32G32B32Snorm,
    R32G32B32A32Snorm,
    R32Sscaled,
    R32G32Sscaled,
    R32G32B32Sscaled,
    R32G32B32A32Sscaled,

    R32Float,
    R32G32Float,
    R32G32B32Float,
    R32G32B32A32Float,
    R16Float,
    R16G16Float,
    R16G16B16Float,
    R16G16B16A16Float,

    S8Uscaled,
    Z16Unorm,
    Z32Unorm,
    Z32Float,
    Z24UnormS8Uscaled,
    S8UscaledZ24Unorm,
    Z24X8Unorm,
    X8Z24Unorm,
    Z32FloatS8X24Uscaled,
    X24S8Uscaled,
    S8X24Uscaled,

    Dxt1Rgb,
    Dxt1Rgba,
    Dxt3Rgba,
    Dxt5Rgba,
    Dxt1Srgb,
    Dxt1Srgba,
    Dxt3Srgba,
    Dxt5Srgba,
}

impl Format {
    pub fn id(self) -> u32 {
        self as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_dense() {
        for (i, format) in <Format as strum::IntoEnumIterator>::iter().enumerate() {
            assert_eq!(i as u32, format.id());
            assert_eq!(Some(format), Format::from_repr(i as u32));
        }
        assert_eq!(None, Format::from_repr(Format::COUNT as u32));
    }
}
