mod bootstrap;
mod cli;
mod config;
mod viewer;

use std::env;
use std::io;
use std::process::ExitCode;

use tracing::{error, info};

use cli::{parse_args, usage_text, CliCommand};

pub(crate) fn run() -> ExitCode {
    let args = env::args().skip(1).collect::<Vec<_>>();
    let cli = match parse_args(&args) {
        Ok(CliCommand::Help) => {
            println!("{}", usage_text());
            return ExitCode::SUCCESS;
        }
        Ok(CliCommand::View(cli)) => cli,
        Err(message) => {
            eprintln!("{message}\n\n{}", usage_text());
            return ExitCode::from(2);
        }
    };

    bootstrap::init_tracing();
    info!(version = env!("CARGO_PKG_VERSION"), "boxisle_startup");

    let result = bootstrap::build_settings(cli)
        .and_then(|settings| viewer::run_viewer(&settings, &mut io::stdout().lock()));
    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "viewer_failed");
            ExitCode::from(1)
        }
    }
}
