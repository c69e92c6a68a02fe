//! Version model and release-track selection
//!
//! The heart of the crate: parsing version strings into a comparable
//! form and selecting the latest previously released version from a
//! repository's tag names.
//!
//! # Modules
//!
//! - [`semver`]: `Version` parsing, stringification, and total ordering
//! - [`selector`]: picks the latest released version on a release track
//! - [`error`]: parse error type

pub mod error;
pub mod selector;
pub mod semver;
