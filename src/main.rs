use std::process::ExitCode;

use clap::Parser;
use cli::Cli;
use provider::ConfigProvider;
use service::FormatService;

mod cli;
mod domain;
mod logger;
mod provider;
mod service;

fn main() -> ExitCode {
    logger::init_logger();
    let args = Cli::parse();

    match service::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            FormatService::error(&format!("{:#}", err));
            ExitCode::FAILURE
        }
    }
}
