mod alert;
mod api;
mod app;
mod cli;
mod clipboard;
mod config;
mod consts;
mod controller;
mod error;
mod logging;
mod nav;
mod render;
mod session;

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use tracing::debug;

use api::HttpApi;
use app::{CommandContext, handle_command};
use cli::{Cli, Commands};
use clipboard::SystemClipboard;
use config::Config;
use controller::Controller;
use error::AppError;
use render::TerminalOptions;
use session::{FileStorage, SessionStore, default_storage_path};

fn run(mut cli: Cli, config: &Config) -> Result<bool, AppError> {
    let storage_path = default_storage_path().ok_or(AppError::NoHomeDir)?;
    debug!("Using storage {}", storage_path.display());
    let session = SessionStore::new(Box::new(FileStorage::open(storage_path)?));

    let api = HttpApi::new(cli.api_url(), config.timeout_secs.map(Duration::from_secs))?;
    let mut clipboard = SystemClipboard;
    let mut controller = Controller::new(&api, &mut clipboard, session);

    let command = cli.command.take().unwrap_or(Commands::Show);
    let ctx = CommandContext {
        cli: &cli,
        terminal: TerminalOptions {
            use_color: cli.use_color(),
        },
    };
    handle_command(command, &mut controller, &ctx)
}

fn main() -> ExitCode {
    let config = Config::load();
    let cli = Cli::parse().with_config(&config);
    logging::init(cli.debug);
    if let Some(path) = &config.source {
        debug!("Loaded config from {}", path.display());
    }

    match run(cli, &config) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
