//! Composition root and the show command runner

use std::env;
use std::process::ExitCode;
use std::sync::Arc;

use tokio::sync::mpsc;

use crate::application::ports::{AppLauncher, ConfigStore, NoOpLauncher, NotificationListener};
use crate::application::{
    CallbackDispatcher, DismissalPolicy, FacilityHandle, IdentifierRegistry, NotificationCenter,
};
use crate::domain::config::AppConfig;
use crate::domain::{DismissalReason, Notification, NotificationStatus};
use crate::infrastructure::{CommandLauncher, DataDirPaths, WinToastLoader, XdgConfigStore};

use super::args::ShowOptions;
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;
/// The notification was dismissed, or the wait ran out
pub const EXIT_NO_RESPONSE: u8 = 3;

/// Environment variable overriding the configured data directory
pub const DATA_DIR_ENV: &str = "TOAST_NOTIFIER_DATA_DIR";

/// What became of a shown notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationEvent {
    ActionSelected(String),
    Clicked,
    Dismissed(DismissalReason),
}

/// Listener forwarding outcomes from the facility thread to the runtime
pub struct ChannelListener {
    sender: mpsc::UnboundedSender<NotificationEvent>,
}

impl ChannelListener {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<NotificationEvent>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }

    fn send(&self, event: NotificationEvent) {
        // Receiver gone means nobody waits anymore.
        let _ = self.sender.send(event);
    }
}

impl NotificationListener for ChannelListener {
    fn action_selected(&self, _notification: &Arc<Notification>, action_id: &str) {
        self.send(NotificationEvent::ActionSelected(action_id.to_string()));
    }

    fn clicked(&self, _notification: &Arc<Notification>) {
        self.send(NotificationEvent::Clicked);
    }

    fn dismissed(&self, _notification: &Arc<Notification>, reason: DismissalReason) {
        self.send(NotificationEvent::Dismissed(reason));
    }
}

/// Wire the notification core to its adapters.
pub fn build_center(
    config: &AppConfig,
    listener: Option<Arc<dyn NotificationListener>>,
) -> NotificationCenter {
    let registry = Arc::new(IdentifierRegistry::new());
    let paths = Arc::new(DataDirPaths::from_config(config));

    let mut dispatcher = CallbackDispatcher::new(Arc::clone(&registry), build_launcher(config))
        .with_policy(DismissalPolicy::new(config.release_on_or_default()));
    if let Some(listener) = listener {
        dispatcher = dispatcher.with_listener(listener);
    }

    let facility = Arc::new(FacilityHandle::new(
        config.identity(),
        paths.clone(),
        Arc::new(WinToastLoader),
        Arc::new(dispatcher),
    ));

    NotificationCenter::new(facility, registry, paths).with_sound(config.sound_or_default())
}

fn build_launcher(config: &AppConfig) -> Arc<dyn AppLauncher> {
    match config.launch_command().map(CommandLauncher::new) {
        Some(Ok(launcher)) => Arc::new(launcher),
        Some(Err(e)) => {
            log::warn!("notify: ignoring launch_command: {}", e);
            Arc::new(NoOpLauncher)
        }
        None => Arc::new(NoOpLauncher),
    }
}

/// Show a notification and, if asked to, wait for the user's response.
pub async fn run_show(options: ShowOptions, config: AppConfig) -> ExitCode {
    let mut presenter = Presenter::new();

    let (listener, mut events) = ChannelListener::new();
    let center = Arc::new(build_center(&config, Some(Arc::new(listener))));

    let mut notification = Notification::new(options.title, options.message, options.actions);
    if let Some(event_id) = options.event_id {
        notification = notification.with_event_id(event_id);
    }
    let notification = Arc::new(notification);

    // Native calls block, keep them off the async workers.
    let shown = {
        let center = Arc::clone(&center);
        let notification = Arc::clone(&notification);
        tokio::task::spawn_blocking(move || {
            center.show(&notification);
            notification.status() == NotificationStatus::Shown
        })
        .await
        .unwrap_or(false)
    };

    if !shown {
        presenter.error("Notification could not be shown (run with --verbose for details)");
        return ExitCode::from(EXIT_ERROR);
    }

    let Some(wait) = options.wait else {
        presenter.success("Notification shown");
        return ExitCode::from(EXIT_SUCCESS);
    };

    presenter.start_spinner(&format!("Waiting for a response ({})...", wait));

    let outcome = tokio::select! {
        event = events.recv() => event,
        _ = tokio::time::sleep(wait.as_std()) => None,
        _ = tokio::signal::ctrl_c() => None,
    };

    presenter.stop_spinner();

    match outcome {
        Some(NotificationEvent::ActionSelected(action_id)) => {
            presenter.output(&action_id);
            ExitCode::from(EXIT_SUCCESS)
        }
        Some(NotificationEvent::Clicked) => {
            presenter.info("Notification clicked");
            ExitCode::from(EXIT_SUCCESS)
        }
        Some(NotificationEvent::Dismissed(reason)) => {
            presenter.warn(&format!("Notification dismissed ({})", reason));
            ExitCode::from(EXIT_NO_RESPONSE)
        }
        None => {
            let center = Arc::clone(&center);
            let notification = Arc::clone(&notification);
            let _ = tokio::task::spawn_blocking(move || center.cancel(&notification)).await;
            presenter.warn("No response, notification cancelled");
            ExitCode::from(EXIT_NO_RESPONSE)
        }
    }
}

/// Load and merge configuration from file, env, and CLI
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = store.load_or_empty().await;
    merge_layers(file_config, env_config(), cli_config)
}

fn env_config() -> AppConfig {
    AppConfig {
        data_dir: env::var(DATA_DIR_ENV).ok().filter(|s| !s.is_empty()),
        ..Default::default()
    }
}

/// Merge: defaults < file < env < cli
fn merge_layers(file: AppConfig, env: AppConfig, cli: AppConfig) -> AppConfig {
    AppConfig::defaults().merge(file).merge(env).merge(cli)
}
