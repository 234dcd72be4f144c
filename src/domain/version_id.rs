use std::fmt;

use log::debug;
use regex::Regex;

use crate::domain::ProjectUrl;
use crate::error::{Result, SvnVersionError};

/// Version identity of a directory: project relative path plus revision,
/// rendered as `<path>@<revision>` (e.g. `tags/1.2.0@4821`).
///
/// `path` is empty only when the metadata url is the project url itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionId {
    pub path: String,
    pub revision: String,
}

impl VersionId {
    pub fn new(path: impl Into<String>, revision: impl Into<String>) -> Self {
        VersionId {
            path: path.into(),
            revision: revision.into(),
        }
    }

    /// Numeric revision, if it fits in a `u64`.
    pub fn revision_number(&self) -> Option<u64> {
        self.revision.parse().ok()
    }
}

impl fmt::Display for VersionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.path, self.revision)
    }
}

/// Returns the numeric revision after the last `@` of a rendered version id.
pub fn revision_of(version_id: &str) -> Option<u64> {
    let (_, revision) = version_id.rsplit_once('@')?;
    revision.trim().parse().ok()
}

/// Extracts the value of a `<name>: <value>` line from `svn info` output.
fn info_field<'a>(info: &'a str, name: &str) -> Option<&'a str> {
    let re = Regex::new(&format!(r"(?m)^{}: (.*)", regex::escape(name))).ok()?;
    re.captures(info)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim_end())
}

/// Converts raw `svn info` output (live or frozen) into a version id.
///
/// # Returns
/// * `Ok(Some(VersionId))` - url and revision found, url inside the project
/// * `Ok(None)` - no usable metadata (empty text, missing or non-numeric fields)
/// * `Err(MismatchedRepository)` - the metadata url lies outside `project_url`
///
/// # Example
/// ```
/// # use svn_version::domain::{identify, ProjectUrl};
/// let project = ProjectUrl::resolve("https://host/proj");
/// let id = identify("URL: https://host/proj/tags/1.0\nRevision: 42", &project).unwrap();
/// assert_eq!(id.unwrap().to_string(), "tags/1.0@42");
/// ```
pub fn identify(raw_metadata: &str, project_url: &ProjectUrl) -> Result<Option<VersionId>> {
    if raw_metadata.trim().is_empty() {
        return Ok(None);
    }

    let (url, revision) = match (
        info_field(raw_metadata, "URL"),
        info_field(raw_metadata, "Revision"),
    ) {
        (Some(url), Some(revision)) => (url, revision),
        _ => {
            debug!("metadata carries no URL/Revision lines");
            return Ok(None);
        }
    };

    let relative = url.strip_prefix(project_url.as_str()).ok_or_else(|| {
        SvnVersionError::mismatched_repository(project_url.as_str(), url)
    })?;

    if revision.is_empty() || !revision.bytes().all(|b| b.is_ascii_digit()) {
        debug!("ignoring non-numeric revision '{}'", revision);
        return Ok(None);
    }

    Ok(Some(VersionId::new(relative.trim_start_matches('/'), revision)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project() -> ProjectUrl {
        ProjectUrl::resolve("https://host/proj")
    }

    #[test]
    fn test_identify_empty() {
        assert_eq!(identify("", &project()).unwrap(), None);
        assert_eq!(identify("  \n\t", &project()).unwrap(), None);
    }

    #[test]
    fn test_identify_tag() {
        let id = identify("URL: https://host/proj/tags/1.0\nRevision: 42", &project())
            .unwrap()
            .unwrap();
        assert_eq!(id, VersionId::new("tags/1.0", "42"));
        assert_eq!(id.to_string(), "tags/1.0@42");
    }

    #[test]
    fn test_identify_full_svn_info() {
        let info = "Path: .\r\n\
                    Working Copy Root Path: /home/me/proj\r\n\
                    URL: https://host/proj/branches/fix\r\n\
                    Relative URL: ^/proj/branches/fix\r\n\
                    Repository Root: https://host\r\n\
                    Revision: 4821\r\n\
                    Node Kind: directory\r\n\
                    Last Changed Rev: 4800\r\n";
        let id = identify(info, &project()).unwrap().unwrap();
        assert_eq!(id.to_string(), "branches/fix@4821");
        assert_eq!(id.revision_number(), Some(4821));
    }

    #[test]
    fn test_identify_line_anchored() {
        // `Relative URL:` and `Last Changed Rev:` must not be picked up
        let info = "Relative URL: ^/proj/trunk\nLast Changed Revision: 3\n";
        assert_eq!(identify(info, &project()).unwrap(), None);
    }

    #[test]
    fn test_identify_missing_revision() {
        assert_eq!(
            identify("URL: https://host/proj/trunk\n", &project()).unwrap(),
            None
        );
    }

    #[test]
    fn test_identify_non_numeric_revision() {
        assert_eq!(
            identify("URL: https://host/proj/trunk\nRevision: HEAD\n", &project()).unwrap(),
            None
        );
    }

    #[test]
    fn test_identify_mismatched_repository() {
        let err = identify("URL: https://other/proj/trunk\nRevision: 1", &project()).unwrap_err();
        match err {
            SvnVersionError::MismatchedRepository {
                project_url,
                vcs_url,
            } => {
                assert_eq!(project_url, "https://host/proj");
                assert_eq!(vcs_url, "https://other/proj/trunk");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_identify_mismatch_wins_over_bad_revision() {
        let err = identify("URL: https://other/x\nRevision: HEAD\n", &project()).unwrap_err();
        assert!(matches!(err, SvnVersionError::MismatchedRepository { .. }));
    }

    #[test]
    fn test_identify_trunk_root() {
        let id = identify("URL: https://host/proj\nRevision: 7", &project())
            .unwrap()
            .unwrap();
        assert_eq!(id.path, "");
        assert_eq!(id.to_string(), "@7");
    }

    #[test]
    fn test_revision_of() {
        assert_eq!(revision_of("trunk@5"), Some(5));
        assert_eq!(revision_of("@7"), Some(7));
        assert_eq!(revision_of("tags/a@b@12"), Some(12));
        assert_eq!(revision_of("trunk"), None);
        assert_eq!(revision_of("trunk@HEAD"), None);
    }
}
