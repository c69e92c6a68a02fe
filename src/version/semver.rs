//! Package version parsing and ordering.
//!
//! A version is `MAJOR.MINOR.PATCH`, optionally followed by a `-beta.N`
//! pre-release counter: `1.2.3` is a stable release, `1.2.3-beta.4` is the
//! fourth beta of `1.2.3`. A beta always orders below the stable release
//! carrying the same triple.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::version::error::ParseVersionError;

/// Structured form of a package version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    /// Beta counter; `None` marks a stable release.
    pub beta: Option<u64>,
}

impl Version {
    /// Baseline used when a repository has no prior release tag.
    pub const ZERO: Version = Version {
        major: 0,
        minor: 0,
        patch: 0,
        beta: None,
    };

    /// Returns true when this is a beta pre-release.
    pub fn is_beta(&self) -> bool {
        self.beta.is_some()
    }
}

impl FromStr for Version {
    type Err = ParseVersionError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseVersionError::new(input);

        let (triple, beta) = match input.split_once('-') {
            Some((triple, suffix)) => {
                let counter = suffix.strip_prefix("beta.").ok_or_else(invalid)?;
                (triple, Some(counter.parse::<u64>().map_err(|_| invalid())?))
            }
            None => (input, None),
        };

        let parts: Vec<&str> = triple.split('.').collect();
        if parts.len() != 3 {
            return Err(invalid());
        }

        Ok(Version {
            major: parts[0].parse().map_err(|_| invalid())?,
            minor: parts[1].parse().map_err(|_| invalid())?,
            patch: parts[2].parse().map_err(|_| invalid())?,
            beta,
        })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(beta) = self.beta {
            write!(f, "-beta.{}", beta)?;
        }
        Ok(())
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.major, self.minor, self.patch)
            .cmp(&(other.major, other.minor, other.patch))
            .then_with(|| match (self.beta, other.beta) {
                (None, None) => Ordering::Equal,
                // A stable release outranks every beta of the same triple.
                (None, Some(_)) => Ordering::Greater,
                (Some(_), None) => Ordering::Less,
                (Some(a), Some(b)) => a.cmp(&b),
            })
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
