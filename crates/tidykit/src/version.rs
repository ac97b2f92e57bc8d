// SPDX-License-Identifier: MIT
//! Build version metadata for the umbrella. The constants are this
//! crate's own; the parsed `Version` form is shared with the low-level
//! facade.

use std::ffi::CStr;

pub use swlibtidy::version::{Version, VersionError};

/// Build version as a MAJOR.MINOR scalar.
pub const VERSION_NUMBER: f64 = 0.1;

/// Build version as a NUL-terminated byte string.
pub const VERSION_STRING: &[u8] = concat!(env!("CARGO_PKG_VERSION"), "\0").as_bytes();

/// `VERSION_STRING` as a C string, checked at compile time.
pub const VERSION_CSTR: &CStr = match CStr::from_bytes_with_nul(VERSION_STRING) {
    Ok(v) => v,
    Err(_) => panic!("package version contains an interior NUL"),
};

/// Build version without the trailing NUL.
pub fn version_str() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
