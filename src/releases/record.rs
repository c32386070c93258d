//! Release records and stable-release selection.

use serde::{Deserialize, Serialize};

use crate::error::{LabprobeError, Result};

/// A single release entry from the releases listing.
///
/// Only the fields labprobe acts on are deserialized; the GitHub payload
/// carries many more.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReleaseRecord {
    /// The git tag of the release (e.g., "v3.2.1").
    pub tag_name: String,
    /// Whether the release is an unpublished draft.
    #[serde(default)]
    pub draft: bool,
    /// Whether the release is marked as a pre-release.
    #[serde(default)]
    pub prerelease: bool,
    /// Browser URL of the release page, when present.
    #[serde(default)]
    pub html_url: Option<String>,
}

impl ReleaseRecord {
    /// Build a stable (non-draft, non-prerelease) record.
    pub fn stable(tag: &str) -> Self {
        Self {
            tag_name: tag.to_string(),
            draft: false,
            prerelease: false,
            html_url: None,
        }
    }

    /// Build a pre-release record.
    pub fn prerelease(tag: &str) -> Self {
        Self {
            prerelease: true,
            ..Self::stable(tag)
        }
    }

    /// Build a draft record.
    pub fn draft(tag: &str) -> Self {
        Self {
            draft: true,
            ..Self::stable(tag)
        }
    }
}

/// Strip the leading `v` marker from a release tag.
///
/// The remainder of the tag is returned verbatim, so suffixes like
/// `-rc1` survive. Tags without the marker are a hard error: a repo
/// that tags releases differently needs operator attention, not a
/// silently mangled version string.
pub fn strip_tag_marker(tag: &str) -> Result<&str> {
    tag.strip_prefix('v')
        .ok_or_else(|| LabprobeError::UnexpectedTagFormat {
            tag: tag.to_string(),
        })
}

/// Select the first stable release from a listing.
///
/// Walks the records in listing order, skipping drafts and pre-releases.
/// Returns `Ok(None)` when no record qualifies. The first qualifying
/// record must carry a `v`-prefixed tag.
pub fn first_stable(records: &[ReleaseRecord]) -> Result<Option<String>> {
    for record in records {
        if record.draft || record.prerelease {
            tracing::debug!(tag = %record.tag_name, "skipping draft/pre-release");
            continue;
        }
        let version = strip_tag_marker(&record.tag_name)?;
        return Ok(Some(version.to_string()));
    }
    Ok(None)
}
