use std::path::Path;
use std::process::{ExitStatus, Stdio};

use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::debug;

use crate::cli::Network;
use crate::error::Error;

/// Where availup, the light client installer, is served from.
pub const INSTALLER_URL: &str = "https://avail.sh";

/// Flags passed through to the installer script.
pub fn installer_args(
	network: Network,
	config: Option<&Path>,
	identity: Option<&Path>,
	upgrade: bool,
) -> Vec<String> {
	let mut args = Vec::new();

	// A config file already names the network.
	match config {
		Some(path) => {
			args.push("--config".to_owned());
			args.push(path.display().to_string());
		}
		None => {
			args.push("--network".to_owned());
			args.push(network.as_str().to_owned());
		}
	}

	if let Some(path) = identity {
		args.push("--identity".to_owned());
		args.push(path.display().to_string());
	}

	if upgrade {
		args.push("--upgrade".to_owned());
		args.push("y".to_owned());
	}

	args
}

/// Download the installer script.
pub async fn fetch_installer(url: &str) -> anyhow::Result<String> {
	debug!(url, "fetching light client installer");
	let resp = reqwest::get(url).await?;
	if !resp.status().is_success() {
		return Err(Error::Installer(format!("GET {url} returned {}", resp.status())).into());
	}
	Ok(resp.text().await?)
}

/// Run `script` through `sh -s -- args` in the current directory, with the
/// child's output going straight to the terminal.
pub async fn run_installer(script: &str, args: &[String]) -> anyhow::Result<ExitStatus> {
	debug!(?args, "starting installer");
	let mut child = Command::new("sh")
		.arg("-s")
		.arg("--")
		.args(args)
		.stdin(Stdio::piped())
		.stdout(Stdio::inherit())
		.stderr(Stdio::inherit())
		.spawn()
		.map_err(|e| Error::Installer(format!("failed to start sh: {e}")))?;

	let mut stdin = child
		.stdin
		.take()
		.ok_or_else(|| Error::Installer("installer stdin unavailable".into()))?;
	// The script may exit before sh has read all of it; its exit code is
	// still what we report.
	match stdin.write_all(script.as_bytes()).await {
		Err(e) if e.kind() == std::io::ErrorKind::BrokenPipe => {
			debug!("installer closed stdin before the whole script was written");
		}
		other => other?,
	}
	// Closing stdin lets `sh -s` see the end of the script.
	drop(stdin);

	Ok(child.wait().await?)
}
