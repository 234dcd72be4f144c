//! Terminal output for the command line interface.

pub mod formatter;

pub use formatter::{
    display_error, display_status, display_versions, display_warning, format_version_label,
};
