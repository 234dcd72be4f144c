use console::style;

use crate::analyzer::versions::BRANCH_PREFIX;
use crate::warning::ConsistencyWarning;

pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

pub fn display_status(message: &str) {
    eprintln!("{} {}", style("→").yellow(), message);
}

/// Prints a consistency warning to stderr, keeping stdout for the version id.
pub fn display_warning(warning: &ConsistencyWarning) {
    eprintln!("{} {}", style("WARNING:").yellow().bold(), warning);
}

/// Formats one version label, dimming `dev-` branches.
pub fn format_version_label(label: &str) -> String {
    if label.starts_with(BRANCH_PREFIX) {
        style(label).dim().to_string()
    } else {
        label.to_string()
    }
}

pub fn display_versions(versions: &[String]) {
    for version in versions {
        println!("{}", format_version_label(version));
    }
}
