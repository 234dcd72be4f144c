//! Where raw version metadata comes from.
//!
//! A working copy answers `svn info` directly. An exported tree carries a
//! frozen copy of that output in a revision file instead. Sources are tried
//! in order and the first one yielding text wins.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::Result;
use crate::svn::Subversion;

/// A single source of `svn info` formatted metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetadataSource {
    /// Live `svn info` of a directory
    Live(PathBuf),
    /// Frozen revision file written when the tree was exported
    RevisionFile(PathBuf),
}

impl MetadataSource {
    /// The default chain for `dir`: live metadata, then `<dir>/<revfile>`.
    pub fn chain_for(dir: &Path, revfile: &str) -> Vec<MetadataSource> {
        vec![
            MetadataSource::Live(dir.to_path_buf()),
            MetadataSource::RevisionFile(dir.join(revfile)),
        ]
    }

    /// Reads this source, yielding `None` when it has nothing to offer.
    pub fn read<S: Subversion + ?Sized>(&self, svn: &S) -> Result<Option<String>> {
        match self {
            MetadataSource::Live(dir) => svn.info(dir),
            MetadataSource::RevisionFile(path) => {
                if !path.is_file() {
                    return Ok(None);
                }
                let content = fs::read_to_string(path)?;
                Ok(Some(content).filter(|c| !c.trim().is_empty()))
            }
        }
    }
}

/// Returns the text of the first source that yields any.
pub fn read_metadata<S: Subversion + ?Sized>(
    svn: &S,
    sources: &[MetadataSource],
) -> Result<Option<String>> {
    for source in sources {
        if let Some(text) = source.read(svn)? {
            debug!("using version metadata from {:?}", source);
            return Ok(Some(text));
        }
    }
    Ok(None)
}
