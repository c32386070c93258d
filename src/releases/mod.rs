//! Release listing lookup.
//!
//! Queries a GitHub-style releases endpoint and selects the newest stable
//! version: the first entry in listing order that is neither a draft nor
//! a pre-release. The listing order is authoritative; records are never
//! re-sorted by version.

pub mod client;
pub mod record;

pub use client::{ReleaseClient, DEFAULT_API_URL, DEFAULT_OWNER, DEFAULT_REPO};
pub use record::{first_stable, strip_tag_marker, ReleaseRecord};
