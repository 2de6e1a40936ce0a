//! janitor - find stale applications in a Cloud Foundry space.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use janitor::Result;
use janitor::app::AppContext;
use janitor::cli::Cli;
use janitor::cli::output::robot_error;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let ctx = AppContext::from_cli(&cli);
    // Config and env may select robot output; a broken config falls back to the flags.
    let json = ctx
        .as_ref()
        .map_or_else(|_| cli.wants_json(), |ctx| ctx.output_format.is_json());
    init_tracing(&cli, json);

    match ctx.and_then(|ctx| run(&cli, &ctx)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if json {
                // Robot mode: JSON error output to stdout
                let response = robot_error(e.code(), e.to_string());
                println!("{}", serde_json::to_string(&response).unwrap_or_default());
            } else {
                eprintln!("Error: {e}");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, ctx: &AppContext) -> Result<()> {
    janitor::cli::commands::run(ctx, &cli.command)
}

fn init_tracing(cli: &Cli, json: bool) {
    if cli.quiet {
        return;
    }

    let filter = match cli.verbose {
        0 => "warn,janitor=info",
        1 => "info,janitor=debug",
        2 => "debug,janitor=trace",
        _ => "trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if json {
        // JSON logging for robot mode
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        // Human-readable logging
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
