//! Config command handler

use crate::application::ports::ConfigStore;
use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;
use crate::domain::{DismissalReason, SoundProfile};

use super::args::{is_valid_config_key, ConfigAction, VALID_CONFIG_KEYS};
use super::presenter::Presenter;

const NOT_SET: &str = "(not set)";

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter).await,
        ConfigAction::Set { key, value } => handle_set(store, presenter, &key, &value).await,
        ConfigAction::Get { key } => handle_get(store, presenter, &key).await,
        ConfigAction::List => handle_list(store, presenter).await,
        ConfigAction::Path => {
            presenter.output(&store.path().to_string_lossy());
            Ok(())
        }
    }
}

async fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    store.init().await?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.path().display()
    ));
    Ok(())
}

async fn handle_set<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    check_key(key)?;
    validate_config_value(key, value)?;

    let mut config = store.load().await?;
    match key {
        "release_on" => config.release_on = Some(split_list(value)),
        _ => {
            if let Some(field) = string_field(&mut config, key) {
                *field = Some(value.trim().to_string());
            }
        }
    }

    store.save(&config).await?;
    presenter.success(&format!("{} = {}", key, value));
    Ok(())
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    check_key(key)?;
    let mut config = store.load().await?;
    presenter.output(&display_value(&mut config, key).unwrap_or_else(|| NOT_SET.to_string()));
    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let mut config = store.load().await?;
    for key in VALID_CONFIG_KEYS {
        let value = display_value(&mut config, key).unwrap_or_else(|| NOT_SET.to_string());
        presenter.key_value(key, &value);
    }
    Ok(())
}

fn check_key(key: &str) -> Result<(), ConfigError> {
    if is_valid_config_key(key) {
        Ok(())
    } else {
        Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
        })
    }
}

/// The `Option<String>` behind a plain string key
fn string_field<'a>(config: &'a mut AppConfig, key: &str) -> Option<&'a mut Option<String>> {
    let field = match key {
        "data_dir" => &mut config.data_dir,
        "library" => &mut config.library,
        "icon" => &mut config.icon,
        "app_name" => &mut config.app_name,
        "vendor" => &mut config.vendor,
        "product" => &mut config.product,
        "sub_product" => &mut config.sub_product,
        "version" => &mut config.version,
        "sound" => &mut config.sound,
        "launch_command" => &mut config.launch_command,
        _ => return None,
    };
    Some(field)
}

fn display_value(config: &mut AppConfig, key: &str) -> Option<String> {
    match key {
        "release_on" => config.release_on.as_ref().map(|list| list.join(", ")),
        _ => string_field(config, key).and_then(|field| field.clone()),
    }
}

/// Validate a config value based on key type
fn validate_config_value(key: &str, value: &str) -> Result<(), ConfigError> {
    let invalid = |message: String| ConfigError::ValidationError {
        key: key.to_string(),
        message,
    };

    match key {
        "sound" => {
            value
                .parse::<SoundProfile>()
                .map_err(|e| invalid(e.to_string()))?;
        }
        "release_on" => {
            for name in split_list(value) {
                name.parse::<DismissalReason>()
                    .map_err(|e| invalid(e.to_string()))?;
            }
        }
        "app_name" | "vendor" | "product" | "sub_product" | "version" | "library" => {
            if value.trim().is_empty() {
                return Err(invalid("Value must not be empty".to_string()));
            }
        }
        _ => {} // paths and commands accept any string
    }
    Ok(())
}

/// Split a comma separated list, dropping blanks
fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_list_trims_and_drops_blanks() {
        assert_eq!(
            split_list(" user_canceled, ,failed "),
            vec!["user_canceled".to_string(), "failed".to_string()]
        );
        assert!(split_list("").is_empty());
    }

    #[test]
    fn validate_sound() {
        assert!(validate_config_value("sound", "loop").is_ok());
        assert!(validate_config_value("sound", "beep").is_err());
    }

    #[test]
    fn validate_release_on() {
        assert!(validate_config_value("release_on", "user_canceled,timed_out").is_ok());
        assert!(validate_config_value("release_on", "").is_ok());
        assert!(validate_config_value("release_on", "user_canceled,expired").is_err());
    }

    #[test]
    fn validate_identity_not_empty() {
        assert!(validate_config_value("app_name", "  ").is_err());
        assert!(validate_config_value("app_name", "Guard").is_ok());
    }

    #[test]
    fn unknown_key_is_rejected() {
        assert!(check_key("api_key").is_err());
        assert!(check_key("data_dir").is_ok());
    }

    #[test]
    fn every_key_is_readable() {
        let mut config = AppConfig::defaults();
        for key in VALID_CONFIG_KEYS {
            if *key != "release_on" {
                assert!(string_field(&mut config, key).is_some(), "{}", key);
            }
        }
        assert_eq!(
            display_value(&mut config, "release_on"),
            Some("user_canceled, timed_out, failed".to_string())
        );
    }

    #[tokio::test]
    async fn set_then_get_round_trips_through_store() {
        use crate::infrastructure::XdgConfigStore;

        let dir = tempfile::tempdir().unwrap();
        let store = XdgConfigStore::with_path(dir.path().join("config.toml"));
        let presenter = Presenter::new();

        handle_set(&store, &presenter, "data_dir", "/opt/app/data")
            .await
            .unwrap();
        handle_set(&store, &presenter, "release_on", "failed")
            .await
            .unwrap();

        let config = store.load().await.unwrap();
        assert_eq!(config.data_dir, Some("/opt/app/data".to_string()));
        assert_eq!(config.release_on, Some(vec!["failed".to_string()]));
    }
}
