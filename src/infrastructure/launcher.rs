//! Launch command adapter

use std::process::{Command, Stdio};

use crate::application::ports::{AppLauncher, LaunchError};

/// Launches the application by spawning a configured command line.
///
/// The command is split on whitespace; the child is detached and not
/// waited on, since launches arrive on the facility's callback thread.
pub struct CommandLauncher {
    program: String,
    args: Vec<String>,
}

impl CommandLauncher {
    pub fn new(command_line: &str) -> Result<Self, LaunchError> {
        let mut parts = command_line.split_whitespace().map(str::to_string);
        let program = parts.next().ok_or(LaunchError::EmptyCommand)?;
        Ok(Self {
            program,
            args: parts.collect(),
        })
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl AppLauncher for CommandLauncher {
    fn launch(&self) -> Result<(), LaunchError> {
        Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| LaunchError::SpawnFailed(format!("{}: {}", self.program, e)))?;

        log::debug!("notify: launched {}", self.program);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_program_and_args() {
        let launcher = CommandLauncher::new("app --show-window  main").unwrap();
        assert_eq!(launcher.program(), "app");
        assert_eq!(launcher.args(), ["--show-window", "main"]);
    }

    #[test]
    fn empty_command_is_rejected() {
        assert!(matches!(
            CommandLauncher::new("   "),
            Err(LaunchError::EmptyCommand)
        ));
    }

    #[test]
    fn missing_program_fails_to_spawn() {
        let launcher = CommandLauncher::new("/nonexistent/toast-notifier-app").unwrap();
        assert!(matches!(
            launcher.launch(),
            Err(LaunchError::SpawnFailed(_))
        ));
    }
}
