use crate::error::SchemaError;
use std::fmt;

/// The schema version declared by a configuration document.
///
/// The major component selects the validation rule set; documents without a
/// version marker are treated as the earliest supported version, matching
/// legacy document forms that predate the marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Version {
    pub const EARLIEST_SUPPORTED: Version = Version::new(1, 0, 0);

    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Parses a `<major>[.<minor>[.<patch>]]` marker. Missing trailing
    /// components default to zero.
    pub fn parse(marker: &str) -> Result<Self, SchemaError> {
        let invalid = || SchemaError::InvalidVersion {
            marker: marker.to_string(),
        };

        let mut parts = marker.trim().split('.');
        let mut component = |required: bool| -> Result<Option<u32>, SchemaError> {
            match parts.next() {
                Some(text) => text.parse::<u32>().map(Some).map_err(|_| invalid()),
                None if required => Err(invalid()),
                None => Ok(None),
            }
        };

        let major = component(true)?.ok_or_else(invalid)?;
        let minor = component(false)?.unwrap_or(0);
        let patch = component(false)?.unwrap_or(0);
        if parts.next().is_some() {
            return Err(invalid());
        }

        Ok(Version::new(major, minor, patch))
    }
}

impl Default for Version {
    fn default() -> Self {
        Version::EARLIEST_SUPPORTED
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_marker() {
        assert_eq!(Version::parse("1.0.0").unwrap(), Version::new(1, 0, 0));
        assert_eq!(Version::parse("2.13.4").unwrap(), Version::new(2, 13, 4));
    }

    #[test]
    fn test_parse_partial_marker_defaults_to_zero() {
        assert_eq!(Version::parse("1").unwrap(), Version::new(1, 0, 0));
        assert_eq!(Version::parse("1.2").unwrap(), Version::new(1, 2, 0));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Version::parse("").is_err());
        assert!(Version::parse("one.two").is_err());
        assert!(Version::parse("1.0.0.0").is_err());
        assert!(Version::parse("-1.0.0").is_err());
    }

    #[test]
    fn test_display_round_trips() {
        let version = Version::new(1, 2, 3);
        assert_eq!(Version::parse(&version.to_string()).unwrap(), version);
    }
}
