use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::domain::StatusEntry;
use crate::error::{Result, SvnVersionError};
use crate::svn::Subversion;

/// Mock svn client for testing without a working copy
pub struct MockSubversion {
    info: HashMap<PathBuf, String>,
    listings: HashMap<String, Vec<String>>,
    status: HashMap<PathBuf, Vec<StatusEntry>>,
}

impl MockSubversion {
    /// Create a mock with no working copies and no remote directories
    pub fn new() -> Self {
        MockSubversion {
            info: HashMap::new(),
            listings: HashMap::new(),
            status: HashMap::new(),
        }
    }

    /// Set the `svn info` output for a directory
    pub fn set_info(&mut self, dir: impl Into<PathBuf>, info: impl Into<String>) {
        self.info.insert(dir.into(), info.into());
    }

    /// Set the entries of a remote directory
    pub fn set_listing<I, S>(&mut self, url: impl Into<String>, entries: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.listings
            .insert(url.into(), entries.into_iter().map(Into::into).collect());
    }

    /// Set the status rows of a working copy
    pub fn set_status(&mut self, dir: impl Into<PathBuf>, entries: Vec<StatusEntry>) {
        self.status.insert(dir.into(), entries);
    }
}

impl Default for MockSubversion {
    fn default() -> Self {
        Self::new()
    }
}

impl Subversion for MockSubversion {
    fn info(&self, dir: &Path) -> Result<Option<String>> {
        Ok(self
            .info
            .get(dir)
            .filter(|info| !info.trim().is_empty())
            .cloned())
    }

    fn list(&self, url: &str) -> Result<Vec<String>> {
        self.listings
            .get(url)
            .cloned()
            .ok_or_else(|| SvnVersionError::command(format!("svn list {}: path not found", url)))
    }

    fn status(&self, dir: &Path) -> Result<Vec<StatusEntry>> {
        self.status.get(dir).cloned().ok_or_else(|| {
            SvnVersionError::command(format!("{} is not a working copy", dir.display()))
        })
    }
}
