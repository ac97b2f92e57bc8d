// SPDX-License-Identifier: MIT
//! SwLibTidy - low-level facade over the HTML Tidy library
//!
//! This crate provides:
//! - Every public enumeration of tidy-html5 (option identifiers, report
//!   levels, node types, tag and attribute identifiers, ...) re-exported
//!   at the crate root
//! - Build version metadata: `VERSION_NUMBER` and `VERSION_STRING`
//! - The raw `tidy_sys` bindings for consumers that need the full C surface
//!
//! A single `use swlibtidy::*;` resolves every upstream enumeration name;
//! nothing is re-declared here, the symbols are the upstream ones.

pub mod version;

#[cfg(feature = "ffi")]
pub mod ffi;

// Hoist the upstream symbols into this crate's root so downstream code
// never has to name the bindings crate itself.
pub use tidy_sys::*;

pub use tidy_sys;

pub use version::{Version, VersionError, VERSION_CSTR, VERSION_NUMBER, VERSION_STRING};

// Re-export FFI accessors when enabled
#[cfg(feature = "ffi")]
pub use ffi::{swlibtidy_version, swlibtidy_version_number};
