use anyhow::Result;

use crate::cli::LcCommand;
use crate::launcher;

/// Run the light client installer and return its exit code.
pub async fn run(cmd: &LcCommand) -> Result<i32> {
	match cmd {
		LcCommand::Up {
			network,
			identity,
			config,
			upgrade,
		} => {
			let args = launcher::installer_args(
				*network,
				config.as_deref(),
				identity.as_deref(),
				*upgrade,
			);
			let script = launcher::fetch_installer(launcher::INSTALLER_URL).await?;
			let status = launcher::run_installer(&script, &args).await?;
			// Killed by a signal: no exit code to forward.
			Ok(status.code().unwrap_or(1))
		}
	}
}
