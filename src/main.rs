//! Toast Notifier CLI entry point

use std::process::ExitCode;

use clap::Parser;

use toast_notifier::cli::{
    app::load_merged_config,
    args::{Cli, Commands},
    config_cmd::handle_config_command,
    run_show, Presenter, EXIT_ERROR, EXIT_USAGE_ERROR,
};
use toast_notifier::domain::config::AppConfig;
use toast_notifier::infrastructure::XdgConfigStore;
use toast_notifier::logging::init_logger;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);
    let presenter = Presenter::new();

    match cli.command {
        Commands::Config { action } => {
            let store = XdgConfigStore::new();
            if let Err(e) = handle_config_command(action, &store, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            ExitCode::SUCCESS
        }
        Commands::Show(args) => {
            let cli_config = AppConfig {
                data_dir: args.data_dir.clone(),
                ..Default::default()
            };

            let options = match args.into_options() {
                Ok(options) => options,
                Err(e) => {
                    presenter.error(&e);
                    return ExitCode::from(EXIT_USAGE_ERROR);
                }
            };

            let config = load_merged_config(cli_config).await;
            run_show(options, config).await
        }
    }
}
