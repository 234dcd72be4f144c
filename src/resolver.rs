//! Version resolution for a working directory.
//!
//! [VersionResolver] ties the pieces together with explicitly injected
//! collaborators: an svn client, a version order and the configuration.
//! Nothing is cached beyond the project url of one resolver instance.

use std::cell::OnceCell;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::analyzer::{check_consistency, last_change, list_versions};
use crate::config::Config;
use crate::domain::{identify, ConsistencyResult, ProjectUrl, VersionId};
use crate::error::{Result, SvnVersionError};
use crate::source::{read_metadata, MetadataSource};
use crate::svn::Subversion;
use crate::version::VersionOrder;
use crate::warning::ConsistencyWarning;

/// The version of the current directory plus the consistency verdict
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentVersion {
    pub id: VersionId,
    pub warning: Option<ConsistencyWarning>,
}

/// Resolves version identities against one project
pub struct VersionResolver<S, O> {
    svn: S,
    order: O,
    config: Config,
    cwd: PathBuf,
    project_url: OnceCell<ProjectUrl>,
}

impl<S: Subversion, O: VersionOrder> VersionResolver<S, O> {
    /// Create a resolver working from `cwd`
    pub fn new(svn: S, order: O, config: Config, cwd: impl Into<PathBuf>) -> Self {
        VersionResolver {
            svn,
            order,
            config,
            cwd: cwd.into(),
            project_url: OnceCell::new(),
        }
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// The project root url (`vcs.url`).
    ///
    /// Taken from the configuration when set, otherwise derived from the
    /// `URL:` line of the working directory's metadata: live `svn info`
    /// first, then the frozen revision file of an exported tree.
    ///
    /// # Errors
    /// `Config` when no source provides a url.
    pub fn project_url(&self) -> Result<ProjectUrl> {
        if let Some(url) = self.project_url.get() {
            return Ok(url.clone());
        }

        let url = match self.config.project_url() {
            Some(url) => url,
            None => self.derive_project_url()?,
        };
        debug!("project url: {}", url);
        Ok(self.project_url.get_or_init(|| url).clone())
    }

    fn derive_project_url(&self) -> Result<ProjectUrl> {
        let sources = MetadataSource::chain_for(&self.cwd, &self.config.vcs.export.revfile);
        let info = read_metadata(&self.svn, &sources)?.unwrap_or_default();
        let url = info
            .lines()
            .find_map(|line| line.strip_prefix("URL: "))
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .ok_or_else(|| {
                SvnVersionError::config(format!(
                    "cannot determine the project url of {}; set vcs.url in the configuration",
                    self.cwd.display()
                ))
            })?;
        Ok(ProjectUrl::resolve(url))
    }

    /// Version id of `dir` (`versionof(dir)`).
    ///
    /// # Returns
    /// * `Ok(Some(VersionId))` - From live metadata or the frozen revision file
    /// * `Ok(None)` - Neither source yielded usable metadata
    /// * `Err(MismatchedRepository)` - `dir` belongs to another project
    pub fn version_of(&self, dir: &Path) -> Result<Option<VersionId>> {
        let sources = MetadataSource::chain_for(dir, &self.config.vcs.export.revfile);
        let Some(info) = read_metadata(&self.svn, &sources)? else {
            debug!("no version metadata for {}", dir.display());
            return Ok(None);
        };
        identify(&info, &self.project_url()?)
    }

    /// Version of the working directory (`vcs.current`), checked for
    /// mixed revisions.
    ///
    /// The consistency check is advisory: when it finds newer files the
    /// warning is returned alongside the id for the caller to report, and
    /// when the status query itself fails the check is skipped.
    pub fn current(&self) -> Result<Option<CurrentVersion>> {
        let Some(id) = self.version_of(&self.cwd)? else {
            return Ok(None);
        };

        let warning = match last_change(&self.svn, &self.cwd) {
            Ok(result) => check_consistency(&id.to_string(), &result),
            Err(e) => {
                warn!("skipping working copy consistency check: {}", e);
                None
            }
        };
        if let Some(warning) = &warning {
            debug!("{}", warning);
        }

        Ok(Some(CurrentVersion { id, warning }))
    }

    /// Ordered tags and `dev-` branches of the project (`vcs.versions`)
    pub fn versions(&self) -> Result<Vec<String>> {
        list_versions(&self.project_url()?, &self.svn, &self.order)
    }

    /// Highest revision in `dir` and the file carrying it (`svn.wc.lastchange`)
    pub fn last_change(&self, dir: &Path) -> Result<ConsistencyResult> {
        last_change(&self.svn, dir)
    }

    /// Absolute url of a project path (`vcs.abs`)
    pub fn abs(&self, path: &str) -> Result<String> {
        Ok(self.project_url()?.abs(path))
    }

    /// Diff command between two project paths (`vcs.diff`); not executed
    pub fn diff(&self, left: &str, right: &str, verbose: bool) -> Result<String> {
        Ok(self.project_url()?.diff_command(left, right, verbose))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StatusEntry;
    use crate::svn::MockSubversion;
    use crate::version::SemverOrder;

    fn resolver(svn: MockSubversion) -> VersionResolver<MockSubversion, SemverOrder> {
        VersionResolver::new(svn, SemverOrder, Config::default(), "/wc")
    }

    #[test]
    fn test_project_url_from_info() {
        let mut svn = MockSubversion::new();
        svn.set_info("/wc", "Path: .\nURL: https://host/proj/branches/fix\nRevision: 3\n");
        assert_eq!(resolver(svn).project_url().unwrap().as_str(), "https://host/proj");
    }

    #[test]
    fn test_project_url_from_config() {
        let mut config = Config::default();
        config.vcs.url = Some("https://host/proj/trunk".to_string());
        let resolver = VersionResolver::new(MockSubversion::new(), SemverOrder, config, "/wc");
        assert_eq!(resolver.project_url().unwrap().as_str(), "https://host/proj");
    }

    #[test]
    fn test_project_url_unknown() {
        let err = resolver(MockSubversion::new()).project_url().unwrap_err();
        assert!(matches!(err, SvnVersionError::Config(_)));
    }

    #[test]
    fn test_project_url_from_revision_file() {
        let export = tempfile::TempDir::new().unwrap();
        std::fs::write(
            export.path().join("REVISION"),
            "URL: https://host/proj/branches/fix\nRevision: 900\n",
        )
        .unwrap();

        let resolver =
            VersionResolver::new(MockSubversion::new(), SemverOrder, Config::default(), export.path());
        assert_eq!(resolver.project_url().unwrap().as_str(), "https://host/proj");

        let current = resolver.current().unwrap().unwrap();
        assert_eq!(current.id.to_string(), "branches/fix@900");
        assert_eq!(current.warning, None);
    }

    #[test]
    fn test_current_consistent() {
        let mut svn = MockSubversion::new();
        svn.set_info("/wc", "URL: https://host/proj/trunk\nRevision: 5\n");
        svn.set_status("/wc", vec![StatusEntry::new("/wc/a", 5)]);

        let current = resolver(svn).current().unwrap().unwrap();
        assert_eq!(current.id.to_string(), "trunk@5");
        assert_eq!(current.warning, None);
    }

    #[test]
    fn test_current_mixed_revision_still_returns_id() {
        let mut svn = MockSubversion::new();
        svn.set_info("/wc", "URL: https://host/proj/trunk\nRevision: 5\n");
        svn.set_status(
            "/wc",
            vec![StatusEntry::new("/wc/a", 5), StatusEntry::new("/wc/b", 9)],
        );

        let current = resolver(svn).current().unwrap().unwrap();
        assert_eq!(current.id.to_string(), "trunk@5");
        assert!(matches!(
            current.warning,
            Some(ConsistencyWarning::MixedRevision {
                last_revision: 9,
                root_revision: 5,
                ..
            })
        ));
    }

    #[test]
    fn test_current_without_status_skips_check() {
        let mut svn = MockSubversion::new();
        svn.set_info("/wc", "URL: https://host/proj/trunk\nRevision: 5\n");

        let current = resolver(svn).current().unwrap().unwrap();
        assert_eq!(current.warning, None);
    }

    #[test]
    fn test_abs_and_diff() {
        let mut svn = MockSubversion::new();
        svn.set_info("/wc", "URL: https://host/proj/trunk\nRevision: 5\n");
        let resolver = resolver(svn);

        assert_eq!(resolver.abs("tags/1.0").unwrap(), "https://host/proj/tags/1.0");
        assert_eq!(
            resolver.diff("tags/1.0", "trunk", false).unwrap(),
            "svn diff https://host/proj/tags/1.0 https://host/proj/trunk --summarize"
        );
    }
}
