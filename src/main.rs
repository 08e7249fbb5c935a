use std::process::ExitCode;

use clap::Parser;

use studiehub::cli::Cli;
use studiehub::commands::{print_notice, run};
use studiehub::config::Config;
use studiehub::core::client::StudieHub;
use studiehub::error::StudieHubError;
use studiehub::logging::init_logging;
use studiehub::view::notice::Notice;

fn load_config(cli: &Cli) -> Result<Config, String> {
    let mut config = Config::from_env()?;
    if let Some(base_url) = &cli.base_url {
        config = config.with_base_url(base_url)?;
    }
    if let Some(session) = &cli.session {
        config.session_path = session.clone();
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Configuration error: {}", err);
            return ExitCode::FAILURE;
        }
    };
    log::debug!("Using backend {}", config.base_url);

    let result: Result<(), StudieHubError> = async {
        let hub = StudieHub::new(config)?;
        run(&hub, cli.command).await
    }
    .await;

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            print_notice(&Notice::from(&err));
            ExitCode::FAILURE
        }
    }
}
