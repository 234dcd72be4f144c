use std::fmt;

/// Non-fatal findings about a working copy, reported to the user.
///
/// A warning never invalidates the version id it accompanies.
#[derive(Debug, Clone, PartialEq)]
pub enum ConsistencyWarning {
    /// Some file is at a newer revision than the working copy root
    MixedRevision {
        last_revision: u64,
        root_revision: u64,
        file: Option<String>,
    },
}

impl fmt::Display for ConsistencyWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsistencyWarning::MixedRevision {
                last_revision,
                root_revision,
                file,
            } => {
                writeln!(f, "Mixed revision working copy.")?;
                write!(f, "The last revision number is @{}", last_revision)?;
                if let Some(file) = file {
                    write!(f, " ({})", file)?;
                }
                writeln!(f)?;
                writeln!(f, "Your working copy root is   @{}.", root_revision)?;
                write!(f, "You should consider updating your working copy.")
            }
        }
    }
}
