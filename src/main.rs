use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use avail_cli::cli::{Cli, Command};
use avail_cli::commands;

#[tokio::main]
async fn main() -> ExitCode {
	let cli = Cli::parse();
	init_tracing(cli.verbose);

	match run(&cli).await {
		Ok(code) => ExitCode::from(code),
		Err(err) => {
			eprintln!("{err:#}");
			ExitCode::FAILURE
		}
	}
}

async fn run(cli: &Cli) -> Result<u8> {
	match &cli.command {
		Command::Transfer {
			to,
			value,
			keep_alive,
			tx,
		} => commands::transfer::run(to, value, *keep_alive, tx).await?,
		Command::Data { command } => commands::data::run(command).await?,
		Command::Lc { command } => {
			let code = commands::lc::run(command).await?;
			return Ok(u8::try_from(code).unwrap_or(1));
		}
		Command::SetId { seed } => commands::set_id::run(seed)?,
	}
	Ok(0)
}

/// Logs go to stderr so command output on stdout stays clean. `RUST_LOG`
/// takes precedence over `-v`.
fn init_tracing(verbose: u8) {
	let default = match verbose {
		0 => "warn",
		1 => "info",
		_ => "debug",
	};
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.init();
}
