//! CLI argument definitions using Clap

use clap::{Parser, Subcommand};

use crate::domain::{Action, Duration};

/// Toast Notifier - show desktop notifications and report the chosen action
#[derive(Parser, Debug)]
#[command(name = "toast-notifier")]
#[command(version)]
#[command(about = "Show desktop toast notifications and report which action the user picked")]
#[command(long_about = None)]
pub struct Cli {
    /// Verbose logging (overridden by RUST_LOG)
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show a notification and wait for the user's response
    Show(ShowArgs),
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Arguments of the show subcommand
#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Notification title
    #[arg(short = 't', long)]
    pub title: String,

    /// Notification body
    #[arg(short = 'm', long)]
    pub message: String,

    /// Button as <id>:<label>, in display order (repeatable)
    #[arg(short = 'a', long = "action", value_name = "ID:LABEL")]
    pub actions: Vec<String>,

    /// Application event this notification reports on
    #[arg(long, value_name = "ID")]
    pub event_id: Option<String>,

    /// How long to wait for a response before cancelling (e.g., 30s, 5m)
    #[arg(short = 'w', long, value_name = "TIME", conflicts_with = "no_wait")]
    pub wait: Option<String>,

    /// Show and exit without waiting for a response
    #[arg(long)]
    pub no_wait: bool,

    /// Directory containing the native notification library
    /// (overrides TOAST_NOTIFIER_DATA_DIR and the config file)
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<String>,
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Parsed show options
#[derive(Debug, Clone)]
pub struct ShowOptions {
    pub title: String,
    pub message: String,
    pub actions: Vec<Action>,
    pub event_id: Option<String>,
    /// None means do not wait
    pub wait: Option<Duration>,
}

impl ShowArgs {
    /// Validate actions and wait time
    pub fn into_options(self) -> Result<ShowOptions, String> {
        let actions = self
            .actions
            .iter()
            .map(|a| a.parse::<Action>().map_err(|e| e.to_string()))
            .collect::<Result<Vec<_>, _>>()?;

        let wait = if self.no_wait {
            None
        } else {
            match self.wait.as_deref() {
                Some(s) => Some(s.parse::<Duration>().map_err(|e| e.to_string())?),
                None => Some(Duration::default_wait()),
            }
        };

        Ok(ShowOptions {
            title: self.title,
            message: self.message,
            actions,
            event_id: self.event_id,
            wait,
        })
    }
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &[
    "data_dir",
    "library",
    "icon",
    "app_name",
    "vendor",
    "product",
    "sub_product",
    "version",
    "sound",
    "launch_command",
    "release_on",
];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn show_args(extra: &[&str]) -> ShowArgs {
        let mut argv = vec!["toast-notifier", "show", "-t", "Title", "-m", "Body"];
        argv.extend_from_slice(extra);
        match Cli::parse_from(argv).command {
            Commands::Show(args) => args,
            other => panic!("Expected Show command, got {:?}", other),
        }
    }

    #[test]
    fn show_parses_defaults() {
        let args = show_args(&[]);
        assert_eq!(args.title, "Title");
        assert_eq!(args.message, "Body");
        assert!(args.actions.is_empty());
        assert!(!args.no_wait);
        assert!(args.wait.is_none());
    }

    #[test]
    fn show_parses_repeated_actions_in_order() {
        let args = show_args(&["-a", "open:Open", "--action", "block:Block"]);
        let options = args.into_options().unwrap();
        let ids: Vec<_> = options.actions.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, ["open", "block"]);
    }

    #[test]
    fn show_defaults_to_waiting() {
        let options = show_args(&[]).into_options().unwrap();
        assert_eq!(options.wait, Some(Duration::default_wait()));
    }

    #[test]
    fn show_no_wait_disables_waiting() {
        let options = show_args(&["--no-wait"]).into_options().unwrap();
        assert!(options.wait.is_none());
    }

    #[test]
    fn show_rejects_bad_action() {
        let err = show_args(&["-a", "open"]).into_options().unwrap_err();
        assert!(err.contains("Invalid action"));
    }

    #[test]
    fn show_rejects_bad_wait() {
        let err = show_args(&["-w", "soon"]).into_options().unwrap_err();
        assert!(err.contains("Invalid duration"));
    }

    #[test]
    fn cli_parses_config_set() {
        let cli = Cli::parse_from(["toast-notifier", "config", "set", "sound", "silent"]);
        if let Commands::Config {
            action: ConfigAction::Set { key, value },
        } = cli.command
        {
            assert_eq!(key, "sound");
            assert_eq!(value, "silent");
        } else {
            panic!("Expected Config Set command");
        }
    }

    #[test]
    fn verbose_is_global() {
        let cli = Cli::parse_from(["toast-notifier", "config", "path", "-v"]);
        assert!(cli.verbose);
    }

    #[test]
    fn valid_config_keys() {
        assert!(is_valid_config_key("data_dir"));
        assert!(is_valid_config_key("release_on"));
        assert!(!is_valid_config_key("api_key"));
    }

    #[test]
    fn data_dir_flag_does_not_read_env() {
        let cmd = Cli::command();
        let show = cmd.find_subcommand("show").unwrap();
        let data_dir = show
            .get_arguments()
            .find(|arg| arg.get_id() == "data_dir")
            .unwrap();
        assert!(data_dir.get_env().is_none());
    }

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }
}
