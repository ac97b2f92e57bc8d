// SPDX-License-Identifier: MIT
//! TidyKit - umbrella over the HTML Tidy library
//!
//! This crate provides:
//! - Every public enumeration of tidy-html5, re-exported at the crate root
//!   with the same spelling and values as the low-level facade
//! - Build version metadata: `VERSION_NUMBER` and `VERSION_STRING`
//! - The `swlibtidy` low-level facade, republished for consumers that
//!   want to reach below the umbrella

pub mod version;

#[cfg(feature = "ffi")]
pub mod ffi;

pub use tidy_sys::*;

pub use swlibtidy;
pub use tidy_sys;

pub use version::{Version, VersionError, VERSION_CSTR, VERSION_NUMBER, VERSION_STRING};

#[cfg(feature = "ffi")]
pub use ffi::{tidykit_version, tidykit_version_number};
