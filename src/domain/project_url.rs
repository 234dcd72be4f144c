use std::fmt;

/// Canonical project root url, the base under which `trunk`, `tags/*` and
/// `branches/*` live.
///
/// Never ends in `/`, `trunk` or `branches/<name>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectUrl(String);

impl ProjectUrl {
    /// Derive the project root from the url of a working copy.
    ///
    /// Strips a trailing `trunk` or `branches/<name>` segment and any trailing
    /// slashes. Urls pointing at a tag or an arbitrary path are only trimmed.
    ///
    /// # Example
    /// ```
    /// # use svn_version::domain::ProjectUrl;
    /// assert_eq!(ProjectUrl::resolve("https://host/proj/trunk").as_str(), "https://host/proj");
    /// assert_eq!(ProjectUrl::resolve("https://host/proj/branches/fix/").as_str(), "https://host/proj");
    /// assert_eq!(ProjectUrl::resolve("https://host/proj/tags/1.0").as_str(), "https://host/proj/tags/1.0");
    /// ```
    pub fn resolve(raw_url: &str) -> Self {
        let url = raw_url.trim_end().trim_end_matches('/');
        let url = strip_line_segment(url).unwrap_or(url);
        ProjectUrl(url.trim_end_matches('/').to_string())
    }

    /// Normalize an explicitly configured project url.
    pub fn from_configured(url: &str) -> Self {
        Self::resolve(url.trim())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `<project>/<path>`
    pub fn abs(&self, path: &str) -> String {
        format!("{}/{}", self.0, path.trim_start_matches('/'))
    }

    pub fn tags_url(&self) -> String {
        self.abs("tags")
    }

    pub fn branches_url(&self) -> String {
        self.abs("branches")
    }

    /// Render the `svn diff` command comparing two project paths.
    ///
    /// The command is only rendered, never executed. Without `verbose` the
    /// diff is limited to a summary of changed paths.
    pub fn diff_command(&self, left: &str, right: &str, verbose: bool) -> String {
        let mut command = format!("svn diff {} {}", self.abs(left), self.abs(right));
        if !verbose {
            command.push_str(" --summarize");
        }
        command
    }
}

impl fmt::Display for ProjectUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Returns `url` without its trailing `trunk` or `branches/<name>` segment,
/// or `None` when it does not end in one.
fn strip_line_segment(url: &str) -> Option<&str> {
    if url == "trunk" {
        return Some("");
    }
    if let Some(head) = url.strip_suffix("/trunk") {
        return Some(head);
    }

    let (head, name) = url.rsplit_once('/')?;
    if name.is_empty() {
        return None;
    }
    if head == "branches" {
        return Some("");
    }
    head.strip_suffix("/branches")
}
