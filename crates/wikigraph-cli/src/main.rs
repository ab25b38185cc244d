use clap::Parser;
use std::process::ExitCode;
use wikigraph_cli::app::WikigraphCli;
use wikigraph_cli::cli::CliArgs;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let app = match WikigraphCli::from_args("wikigraph", &args) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match app.run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
