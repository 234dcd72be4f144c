use std::path::Path;
use std::process::{Command, Output};

use log::debug;

use crate::domain::StatusEntry;
use crate::error::{Result, SvnVersionError};
use crate::svn::parse_status_xml;

/// [super::Subversion] backed by the `svn` command line client
#[derive(Debug, Clone)]
pub struct SvnClient {
    program: String,
}

impl SvnClient {
    /// Uses `svn` from `PATH`
    pub fn new() -> Self {
        Self::with_program("svn")
    }

    /// Uses a specific svn executable
    pub fn with_program(program: impl Into<String>) -> Self {
        SvnClient {
            program: program.into(),
        }
    }

    fn command(&self) -> Command {
        Command::new(&self.program)
    }
}

impl Default for SvnClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs a command, failing on a non-zero exit status.
fn execute_command(mut command: Command) -> Result<Output> {
    let output = command
        .output()
        .map_err(|e| SvnVersionError::command(format!("{:?}: {}", command, e)))?;

    if !output.status.success() {
        return Err(SvnVersionError::command(format!(
            "{:?} exited with {}\nStderr: {}",
            command,
            output.status.code().unwrap_or(-1),
            String::from_utf8_lossy(&output.stderr).trim()
        )));
    }

    Ok(output)
}

impl super::Subversion for SvnClient {
    fn info(&self, dir: &Path) -> Result<Option<String>> {
        let mut command = self.command();
        command.arg("info").arg(dir);

        match execute_command(command) {
            Ok(output) => {
                let info = String::from_utf8_lossy(&output.stdout).into_owned();
                Ok(Some(info).filter(|s| !s.trim().is_empty()))
            }
            Err(e) => {
                debug!("no live svn metadata for {}: {}", dir.display(), e);
                Ok(None)
            }
        }
    }

    fn list(&self, url: &str) -> Result<Vec<String>> {
        let mut command = self.command();
        command.arg("list").arg(url);
        let output = execute_command(command)?;

        Ok(String::from_utf8_lossy(&output.stdout)
            .lines()
            .map(str::to_string)
            .collect())
    }

    fn status(&self, dir: &Path) -> Result<Vec<StatusEntry>> {
        let mut command = self.command();
        command.args(["status", "-v", "--xml"]).arg(dir);
        let output = execute_command(command)?;

        parse_status_xml(&String::from_utf8_lossy(&output.stdout))
    }
}
