pub mod analyzer;
pub mod config;
pub mod domain;
pub mod error;
pub mod resolver;
pub mod source;
pub mod svn;
pub mod ui;
pub mod version;
pub mod warning;

pub use error::{Result, SvnVersionError};
