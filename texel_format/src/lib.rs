//! Conversions between packed texel formats and RGBA.
//!
//! Every [Format] has a static [FormatDescription] with its block size,
//! channels and swizzle. The description converts rectangles of texels
//! to and from RGBA as 32-bit floats or 8-bit normalized values.
//! Most callers only need the rectangle functions like [read_float] and [write_float].
//!
//! The half float and sRGB tables as well as the optional DXTn library
//! are set up once by calling [initialize] before any conversions.
//!
//! ```no_run
//! use texel_format::{read_float, Format, Rect};
//!
//! texel_format::initialize();
//!
//! let texels = [0x00, 0x00, 0xff, 0xff];
//! let mut rgba = [0.0; 4];
//! read_float(Format::B8G8R8A8Unorm, &mut rgba, 4, &texels, 4, Rect::new(0, 0, 1, 1)).unwrap();
//! assert_eq!([1.0, 0.0, 0.0, 1.0], rgba);
//! ```
use std::{path::PathBuf, sync::Once};

use log::debug;

pub mod channel;
mod description;
mod dispatch;
mod error;
pub mod fixtures;
mod format;
pub mod half_float;
pub mod harness;
mod plain;
pub mod s3tc;
pub mod srgb;
pub mod zs;

pub use description::{
    descriptions, find_by_name, lookup, lookup_id, Block, Colorspace, FormatCodec,
    FormatDescription, Layout,
};
pub use dispatch::{read_8unorm, read_float, write_8unorm, write_float, Rect};
pub use error::ConvertError;
pub use format::Format;

/// The environment variable checked for the DXTn library path by [InitOptions::from_env].
pub const DXTN_LIBRARY_ENV: &str = "TEXEL_FORMAT_DXTN_LIBRARY";

/// Settings for [initialize_with].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InitOptions {
    /// The path or file name of the native DXTn library.
    /// Uses [dxtn_sys::DEFAULT_LIBRARY_NAME] if `None`.
    pub dxtn_library: Option<PathBuf>,
}

impl InitOptions {
    /// Reads the library path from [DXTN_LIBRARY_ENV] if set.
    pub fn from_env() -> Self {
        Self {
            dxtn_library: std::env::var_os(DXTN_LIBRARY_ENV).map(PathBuf::from),
        }
    }

    pub(crate) fn dxtn_library_path(&self) -> PathBuf {
        self.dxtn_library
            .clone()
            .unwrap_or_else(|| PathBuf::from(dxtn_sys::DEFAULT_LIBRARY_NAME))
    }
}

static INIT: Once = Once::new();

/// Builds the conversion tables and binds the DXTn library using [InitOptions::from_env].
pub fn initialize() {
    initialize_with(InitOptions::from_env());
}

/// Builds the conversion tables and binds the DXTn library.
///
/// Only the first call has any effect.
/// Later calls keep the existing tables and library binding.
pub fn initialize_with(options: InitOptions) {
    let mut first = false;
    INIT.call_once(|| {
        half_float::initialize();
        srgb::initialize();
        s3tc::initialize(&options);
        first = true;
    });
    if !first {
        debug!("texel_format is already initialized");
    }
}

/// Returns `true` if [initialize] or [initialize_with] has completed.
pub fn is_initialized() -> bool {
    INIT.is_completed()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initialize_twice() {
        initialize();
        initialize_with(InitOptions {
            dxtn_library: Some(PathBuf::from("/nonexistent/libtxc_dxtn.so")),
        });
        assert!(is_initialized());
    }

    #[test]
    fn default_library_path() {
        assert_eq!(
            PathBuf::from(dxtn_sys::DEFAULT_LIBRARY_NAME),
            InitOptions::default().dxtn_library_path()
        );
        assert_eq!(
            PathBuf::from("a/b.so"),
            InitOptions {
                dxtn_library: Some("a/b.so".into())
            }
            .dxtn_library_path()
        );
    }
}
