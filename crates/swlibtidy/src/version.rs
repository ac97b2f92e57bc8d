// SPDX-License-Identifier: MIT
//! Build version metadata for the facade
//!
//! Provides:
//! - `VERSION_NUMBER`, the build version as a floating point scalar
//! - `VERSION_STRING`, the build version as a NUL-terminated byte string
//! - `Version`, the parsed MAJOR.MINOR.PATCH form

use std::ffi::CStr;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Build version as a MAJOR.MINOR scalar. Kept in sync with the crate
/// version; see the tests in this module.
pub const VERSION_NUMBER: f64 = 0.1;

/// Build version as a NUL-terminated byte string, taken from the crate
/// manifest so the two can never drift.
pub const VERSION_STRING: &[u8] = concat!(env!("CARGO_PKG_VERSION"), "\0").as_bytes();

/// `VERSION_STRING` as a C string. An interior NUL in the package version
/// would fail this constant at compile time.
pub const VERSION_CSTR: &CStr = match CStr::from_bytes_with_nul(VERSION_STRING) {
    Ok(v) => v,
    Err(_) => panic!("package version contains an interior NUL"),
};

/// Build version without the trailing NUL.
pub fn version_str() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Version parsing errors
#[derive(Debug, Error)]
pub enum VersionError {
    /// Fewer than three dot-separated components
    #[error("expected MAJOR.MINOR.PATCH, got {input:?}")]
    MissingComponent { input: String },

    /// A component is not an unsigned integer
    #[error("invalid {name} component in {input:?}")]
    InvalidComponent { input: String, name: &'static str },

    /// More than three dot-separated components
    #[error("trailing characters after the patch component in {input:?}")]
    TrailingInput { input: String },
}

/// A parsed MAJOR.MINOR.PATCH version
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Version {
    /// The version this crate was built as.
    pub fn current() -> Self {
        env!("CARGO_PKG_VERSION")
            .parse()
            .expect("manifest version is a MAJOR.MINOR.PATCH triple")
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut parts = input.split('.');
        let major = component(input, "major", parts.next())?;
        let minor = component(input, "minor", parts.next())?;
        let patch = component(input, "patch", parts.next())?;
        if parts.next().is_some() {
            return Err(VersionError::TrailingInput {
                input: input.to_string(),
            });
        }
        Ok(Version {
            major,
            minor,
            patch,
        })
    }
}

fn component(input: &str, name: &'static str, raw: Option<&str>) -> Result<u32, VersionError> {
    let raw = raw.ok_or_else(|| VersionError::MissingComponent {
        input: input.to_string(),
    })?;
    raw.parse().map_err(|_| VersionError::InvalidComponent {
        input: input.to_string(),
        name,
    })
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn version_number_is_finite_and_non_negative() {
        assert!(VERSION_NUMBER.is_finite());
        assert!(VERSION_NUMBER >= 0.0);
    }

    #[test]
    fn version_number_matches_the_package_version() {
        let v = Version::current();
        let expected: f64 = format!("{}.{}", v.major, v.minor).parse().unwrap();
        assert_eq!(VERSION_NUMBER, expected);
    }

    #[test]
    fn version_string_is_nul_terminated_and_non_empty() {
        assert!(VERSION_STRING.len() > 1);
        assert_eq!(VERSION_STRING.last(), Some(&0));
        assert!(!VERSION_STRING[..VERSION_STRING.len() - 1].contains(&0));
    }

    #[test]
    fn version_cstr_round_trips_to_the_package_version() {
        assert_eq!(VERSION_CSTR.to_str().unwrap(), version_str());
        assert_eq!(version_str(), env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn parses_the_current_version() {
        let v: Version = version_str().parse().unwrap();
        assert_eq!(v, Version::current());
        assert_eq!(v.to_string(), version_str());
    }

    #[test]
    fn rejects_missing_components() {
        assert!(matches!(
            "1.2".parse::<Version>(),
            Err(VersionError::MissingComponent { .. })
        ));
        assert!(matches!(
            "".parse::<Version>(),
            Err(VersionError::InvalidComponent { .. })
        ));
    }

    #[test]
    fn rejects_non_numeric_components() {
        assert!(matches!(
            "1.x.3".parse::<Version>(),
            Err(VersionError::InvalidComponent { name: "minor", .. })
        ));
        assert!(matches!(
            "1.2.3-rc1".parse::<Version>(),
            Err(VersionError::InvalidComponent { name: "patch", .. })
        ));
    }

    #[test]
    fn rejects_trailing_components() {
        assert!(matches!(
            "1.2.3.4".parse::<Version>(),
            Err(VersionError::TrailingInput { .. })
        ));
    }

    #[test]
    fn version_serializes_as_plain_fields() {
        let v = Version {
            major: 1,
            minor: 2,
            patch: 3,
        };
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, r#"{"major":1,"minor":2,"patch":3}"#);
        assert_eq!(serde_json::from_str::<Version>(&json).unwrap(), v);
    }

    proptest! {
        #[test]
        fn well_formed_triples_round_trip(major in 0u32..=999, minor in 0u32..=999, patch in 0u32..=999) {
            let rendered = format!("{major}.{minor}.{patch}");
            let parsed: Version = rendered.parse().unwrap();
            prop_assert_eq!(parsed, Version { major, minor, patch });
            prop_assert_eq!(parsed.to_string(), rendered);
        }
    }
}
