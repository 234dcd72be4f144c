//! Subversion operations abstraction layer
//!
//! The [Subversion] trait covers the three read-only svn capabilities the
//! version resolver needs: `svn info`, `svn list` and `svn status --xml`.
//!
//! - [client::SvnClient]: runs the `svn` command line client
//! - [mock::MockSubversion]: canned answers for tests
//!
//! Code should depend on the trait so the resolver can be exercised without
//! a working copy.

pub mod client;
pub mod mock;
pub mod status_xml;

pub use client::SvnClient;
pub use mock::MockSubversion;
pub use status_xml::parse_status_xml;

use std::path::Path;

use crate::domain::StatusEntry;
use crate::error::Result;

/// Read-only svn operations
///
/// All implementors must be `Send + Sync`.
pub trait Subversion: Send + Sync {
    /// Raw `svn info` output for a directory
    ///
    /// # Returns
    /// * `Ok(Some(String))` - The command succeeded and printed something
    /// * `Ok(None)` - No live metadata: not a working copy, svn missing,
    ///   or empty output
    fn info(&self, dir: &Path) -> Result<Option<String>>;

    /// Entry names of a remote directory, as printed by `svn list`
    ///
    /// Directory entries keep their trailing `/`.
    ///
    /// # Example
    /// ```rust
    /// # use svn_version::svn::Subversion;
    /// # fn example<S: Subversion>(svn: &S) -> svn_version::Result<()> {
    /// for tag in svn.list("https://host/proj/tags")? {
    ///     println!("{}", tag.trim_end_matches('/'));
    /// }
    /// # Ok(())
    /// # }
    /// ```
    fn list(&self, url: &str) -> Result<Vec<String>>;

    /// Per-file status of a working copy (`svn status -v --xml`)
    ///
    /// # Returns
    /// * `Ok(Vec<StatusEntry>)` - One entry per versioned or unversioned path
    /// * `Err` - If the command fails or its output cannot be parsed
    fn status(&self, dir: &Path) -> Result<Vec<StatusEntry>>;
}
