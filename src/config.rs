use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::cli::Network;
use crate::error::Error;

pub const KATE_RPC: &str = "wss://kate.avail.tools/ws";
pub const GOLDBERG_RPC: &str = "wss://goldberg.avail.tools/ws";
pub const LOCAL_RPC: &str = "ws://127.0.0.1:9944";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
	#[serde(default)]
	pub network: NetworkConfig,
}

/// Per-network RPC endpoints. Any field missing from the file keeps its
/// built-in value.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
	pub default: Network,
	pub kate_rpc: String,
	pub goldberg_rpc: String,
	pub local_rpc: String,
}

impl Default for NetworkConfig {
	fn default() -> Self {
		Self {
			default: Network::Goldberg,
			kate_rpc: KATE_RPC.into(),
			goldberg_rpc: GOLDBERG_RPC.into(),
			local_rpc: LOCAL_RPC.into(),
		}
	}
}

impl Config {
	/// Directory where CLI state is stored (~/.avail-cli/).
	pub fn dir() -> Result<PathBuf, Error> {
		dirs::home_dir()
			.map(|home| home.join(".avail-cli"))
			.ok_or(Error::NoHomeDir)
	}

	/// Path to the config file.
	pub fn path() -> Result<PathBuf, Error> {
		Ok(Self::dir()?.join("config.toml"))
	}

	/// Load config from disk, falling back to defaults if no file exists.
	pub fn load() -> anyhow::Result<Self> {
		let path = Self::path()?;
		if path.exists() {
			tracing::debug!(path = %path.display(), "loading config");
			Self::parse(&std::fs::read_to_string(&path)?)
		} else {
			Ok(Self::default())
		}
	}

	pub fn parse(content: &str) -> anyhow::Result<Self> {
		Ok(toml::from_str(content)?)
	}

	/// Return the RPC URL for the given network.
	pub fn rpc_url(&self, network: Network) -> &str {
		match network {
			Network::Kate => &self.network.kate_rpc,
			Network::Goldberg => &self.network.goldberg_rpc,
			Network::Local => &self.network.local_rpc,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_are_sensible() {
		let c = Config::default();
		assert_eq!(c.network.default, Network::Goldberg);
		assert_eq!(c.rpc_url(Network::Kate), "wss://kate.avail.tools/ws");
		assert_eq!(c.rpc_url(Network::Goldberg), "wss://goldberg.avail.tools/ws");
		assert_eq!(c.rpc_url(Network::Local), "ws://127.0.0.1:9944");
	}

	#[test]
	fn partial_file_keeps_builtin_urls() {
		let c = Config::parse(
			r#"
			[network]
			default = "local"
			local_rpc = "ws://10.0.0.5:9944"
			"#,
		)
		.unwrap();
		assert_eq!(c.network.default, Network::Local);
		assert_eq!(c.rpc_url(Network::Local), "ws://10.0.0.5:9944");
		assert_eq!(c.rpc_url(Network::Goldberg), GOLDBERG_RPC);
	}

	#[test]
	fn empty_file_is_default() {
		let c = Config::parse("").unwrap();
		assert_eq!(c.network.default, Network::Goldberg);
	}

	#[test]
	fn rejects_unknown_network_name() {
		assert!(Config::parse("[network]\ndefault = \"mainnet\"\n").is_err());
	}
}
