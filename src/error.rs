use thiserror::Error;

/// Unified error type for svn-version operations
#[derive(Error, Debug)]
pub enum SvnVersionError {
    #[error(
        "The project url {project_url} does not match the VCS url {vcs_url}\nMaybe you need to relocate your working copy?"
    )]
    MismatchedRepository {
        project_url: String,
        vcs_url: String,
    },

    #[error("SVN command failed: {0}")]
    Command(String),

    #[error("XML parsing error: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in svn-version
pub type Result<T> = std::result::Result<T, SvnVersionError>;

impl SvnVersionError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        SvnVersionError::Config(msg.into())
    }

    /// Create a command error with context
    pub fn command(msg: impl Into<String>) -> Self {
        SvnVersionError::Command(msg.into())
    }

    /// Create a repository mismatch error
    pub fn mismatched_repository(project_url: impl Into<String>, vcs_url: impl Into<String>) -> Self {
        SvnVersionError::MismatchedRepository {
            project_url: project_url.into(),
            vcs_url: vcs_url.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SvnVersionError::config("test config issue");
        assert_eq!(err.to_string(), "Configuration error: test config issue");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: SvnVersionError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_from_xml() {
        let xml_err = roxmltree::Document::parse("<status>").err().unwrap();
        let err: SvnVersionError = xml_err.into();
        assert!(err.to_string().starts_with("XML parsing error"));
    }

    #[test]
    fn test_mismatched_repository_message() {
        let err = SvnVersionError::mismatched_repository(
            "https://host/proj",
            "https://other/proj/trunk",
        );
        let msg = err.to_string();
        assert!(msg.contains("https://host/proj"));
        assert!(msg.contains("https://other/proj/trunk"));
        assert!(msg.contains("relocate your working copy"));
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (SvnVersionError::config("x"), "Configuration error"),
            (SvnVersionError::command("x"), "SVN command failed"),
            (
                SvnVersionError::mismatched_repository("a", "b"),
                "The project url",
            ),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }

    #[test]
    fn test_error_special_characters_in_messages() {
        let special_chars = vec![
            "svn: E155007: '/tmp/x' is not a working copy",
            "message with\nnewline",
            "message with 'quotes'",
        ];

        for msg in special_chars {
            let err = SvnVersionError::command(msg);
            assert!(err.to_string().contains(msg));
        }
    }
}
