use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::Error;

/// The file the light client reads its signing identity from.
#[derive(Serialize)]
struct Identity<'a> {
	avail_secret_seed_phrase: &'a str,
}

/// `~/.availup`, where availup keeps light client state.
pub fn availup_dir() -> Result<PathBuf, Error> {
	dirs::home_dir()
		.map(|home| home.join(".availup"))
		.ok_or(Error::NoHomeDir)
}

/// Write `identity.toml` into `dir`, creating the directory if needed, and
/// restrict it to the current user. Returns the path written.
pub fn write_identity(dir: &Path, seed: &str) -> anyhow::Result<PathBuf> {
	let seed = seed.trim();
	if seed.is_empty() {
		return Err(Error::InvalidSeed("seed phrase is empty".into()).into());
	}

	std::fs::create_dir_all(dir)?;
	let path = dir.join("identity.toml");
	let content = toml::to_string(&Identity {
		avail_secret_seed_phrase: seed,
	})?;
	std::fs::write(&path, content)?;
	restrict_permissions(&path)?;

	Ok(path)
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) -> std::io::Result<()> {
	use std::os::unix::fs::PermissionsExt;
	std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> std::io::Result<()> {
	Ok(())
}
