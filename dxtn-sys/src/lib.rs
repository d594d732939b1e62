use std::ffi::{c_int, c_uint, c_void, OsStr};

use thiserror::Error;

// GL enums accepted by tx_compress_dxtn as the destination format.
pub const GL_COMPRESSED_RGB_S3TC_DXT1_EXT: c_uint = 0x83F0;
pub const GL_COMPRESSED_RGBA_S3TC_DXT1_EXT: c_uint = 0x83F1;
pub const GL_COMPRESSED_RGBA_S3TC_DXT3_EXT: c_uint = 0x83F2;
pub const GL_COMPRESSED_RGBA_S3TC_DXT5_EXT: c_uint = 0x83F3;

/// The platform specific file name searched for when no explicit path is given.
#[cfg(target_os = "windows")]
pub const DEFAULT_LIBRARY_NAME: &str = "dxtn.dll";
#[cfg(target_os = "macos")]
pub const DEFAULT_LIBRARY_NAME: &str = "libtxc_dxtn.dylib";
#[cfg(not(any(target_os = "windows", target_os = "macos")))]
pub const DEFAULT_LIBRARY_NAME: &str = "libtxc_dxtn.so";

/// Writes the RGBA8 texel at `(i, j)` to `texel`.
///
/// `src_row_stride` is the image width in texels.
/// Passing 0 with `i` and `j` in `0..4` reads from the block at `pix_data`.
pub type FetchTexelFn = unsafe extern "C" fn(
    src_row_stride: c_int,
    pix_data: *const u8,
    i: c_int,
    j: c_int,
    texel: *mut c_void,
);

/// Compresses `width` x `height` texels with `src_comps` bytes each.
pub type CompressFn = unsafe extern "C" fn(
    src_comps: c_int,
    width: c_int,
    height: c_int,
    src_pix_data: *const u8,
    dest_format: c_uint,
    dest: *mut u8,
    dst_row_stride: c_int,
);

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open library: {0}")]
    Open(#[source] libloading::Error),

    #[error("failed to resolve symbol {name}: {source}")]
    MissingSymbol {
        name: &'static str,
        #[source]
        source: libloading::Error,
    },
}

/// The five entry points of an opened txc_dxtn library.
///
/// The function pointers are only valid while the library stays loaded,
/// so they are kept together with the library handle.
pub struct Library {
    pub fetch_2d_texel_rgb_dxt1: FetchTexelFn,
    pub fetch_2d_texel_rgba_dxt1: FetchTexelFn,
    pub fetch_2d_texel_rgba_dxt3: FetchTexelFn,
    pub fetch_2d_texel_rgba_dxt5: FetchTexelFn,
    pub tx_compress_dxtn: CompressFn,
    _library: libloading::Library,
}

impl Library {
    /// Opens the library at `path` and resolves all five symbols.
    ///
    /// # Safety
    /// The library's initialization routines are run and the resolved symbols
    /// are assumed to have the signatures of txc_dxtn.
    pub unsafe fn open<P: AsRef<OsStr>>(path: P) -> Result<Self, LoadError> {
        let library = libloading::Library::new(path).map_err(LoadError::Open)?;

        Ok(Self {
            fetch_2d_texel_rgb_dxt1: symbol(&library, "fetch_2d_texel_rgb_dxt1\0")?,
            fetch_2d_texel_rgba_dxt1: symbol(&library, "fetch_2d_texel_rgba_dxt1\0")?,
            fetch_2d_texel_rgba_dxt3: symbol(&library, "fetch_2d_texel_rgba_dxt3\0")?,
            fetch_2d_texel_rgba_dxt5: symbol(&library, "fetch_2d_texel_rgba_dxt5\0")?,
            tx_compress_dxtn: symbol(&library, "tx_compress_dxtn\0")?,
            _library: library,
        })
    }
}

unsafe fn symbol<T: Copy>(library: &libloading::Library, name: &'static str) -> Result<T, LoadError> {
    library
        .get::<T>(name.as_bytes())
        .map(|s| *s)
        .map_err(|source| LoadError::MissingSymbol {
            name: name.trim_end_matches('\0'),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_missing_library() {
        let result = unsafe { Library::open("/nonexistent/libtxc_dxtn_missing.so") };
        assert!(matches!(result, Err(LoadError::Open(_))));
    }
}
