//! Domain logic - pure rules on urls, version ids and status rows,
//! independent of the svn command line

pub mod project_url;
pub mod status;
pub mod version_id;

pub use project_url::ProjectUrl;
pub use status::{find_last_change, relative_path, ConsistencyResult, StatusEntry};
pub use version_id::{identify, revision_of, VersionId};
