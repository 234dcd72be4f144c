//! Analyses built on svn queries: the version list of a project and the
//! revision consistency of a working copy.

pub mod consistency;
pub mod versions;

pub use consistency::{analyze_consistency, check_consistency, last_change};
pub use versions::{list_versions, sort_versions};
