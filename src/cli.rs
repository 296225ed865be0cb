use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(
	name = "avail",
	about = "A simple CLI for Avail network utilities",
	version
)]
pub struct Cli {
	/// Increase log verbosity (-v info, -vv debug).
	#[arg(short, long, action = ArgAction::Count, global = true)]
	pub verbose: u8,

	#[command(subcommand)]
	pub command: Command,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
	Kate,
	Goldberg,
	Local,
}

impl Network {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Kate => "kate",
			Self::Goldberg => "goldberg",
			Self::Local => "local",
		}
	}

	/// Block explorer link for a block hash, if the network has a public
	/// explorer.
	pub fn explorer_link(&self, block_hash: &str) -> Option<String> {
		match self {
			Self::Local => None,
			other => Some(format!(
				"https://{}.avail.tools/#/explorer/query/{block_hash}",
				other.as_str()
			)),
		}
	}
}

/// How long to block after submitting an extrinsic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Wait {
	/// Wait until the extrinsic is included in a block.
	Yes,
	/// Return as soon as the node accepts the extrinsic.
	No,
	/// Wait until the including block is finalized.
	Final,
}

#[derive(Subcommand)]
pub enum Command {
	/// Transfer AVL token to another account.
	Transfer {
		/// The recipient address.
		to: String,

		/// The amount of AVL (10e18 units) to transfer.
		value: String,

		/// Use transfer_keep_alive so the sender account cannot be reaped.
		#[arg(long)]
		keep_alive: bool,

		#[command(flatten)]
		tx: TxArgs,
	},

	/// Utilities to operate with data on Avail network.
	Data {
		#[command(subcommand)]
		command: DataCommand,
	},

	/// Utilities to operate an Avail light client.
	Lc {
		#[command(subcommand)]
		command: LcCommand,
	},

	/// Creates an identity file for the light client.
	SetId {
		/// The seed phrase for the Avail account.
		seed: String,
	},
}

/// Connection and signing flags shared by every extrinsic-submitting command.
#[derive(Args, Clone, Debug)]
pub struct TxArgs {
	/// Network name.
	#[arg(short, long, conflicts_with = "rpc")]
	pub network: Option<Network>,

	/// The RPC url to connect to.
	#[arg(short, long, env = "AVAIL_RPC_URL")]
	pub rpc: Option<String>,

	/// The seed phrase for the Avail account.
	#[arg(short, long, env = "AVAIL_SEED", hide_env_values = true)]
	pub seed: String,

	/// Wait for extrinsic inclusion.
	#[arg(short, long, value_enum, default_value = "yes")]
	pub wait: Wait,
}

// -- Data subcommands --

#[derive(Subcommand)]
pub enum DataCommand {
	/// Submit a data blob to an Avail network.
	Submit {
		/// The data blob to submit (0x-prefixed hex is decoded to bytes).
		blob: String,

		/// The blob will be submitted with this app ID.
		#[arg(short, long, default_value = "0")]
		app_id: u32,

		#[command(flatten)]
		tx: TxArgs,
	},
}

// -- Light client subcommands --

#[derive(Subcommand)]
pub enum LcCommand {
	/// Spawns a new Avail light client or runs an existing one.
	Up {
		/// Network name.
		#[arg(short, long, value_enum, default_value = "goldberg")]
		network: Network,

		/// The identity to use.
		#[arg(short, long)]
		identity: Option<PathBuf>,

		/// The config file to use.
		#[arg(short, long)]
		config: Option<PathBuf>,

		/// Upgrade the version of the light client.
		#[arg(short, long)]
		upgrade: bool,
	},
}

#[cfg(test)]
mod tests {
	use super::*;
	use clap::CommandFactory;

	fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
		Cli::try_parse_from(std::iter::once("avail").chain(args.iter().copied()))
	}

	#[test]
	fn command_definition_is_consistent() {
		Cli::command().debug_assert();
	}

	#[test]
	fn transfer_defaults() {
		let cli = parse(&["transfer", "5Grw", "1.5", "--seed", "//Alice"]).unwrap();
		match cli.command {
			Command::Transfer { to, value, keep_alive, tx } => {
				assert_eq!(to, "5Grw");
				assert_eq!(value, "1.5");
				assert!(!keep_alive);
				assert_eq!(tx.wait, Wait::Yes);
				assert_eq!(tx.seed, "//Alice");
				assert!(tx.network.is_none());
			}
			_ => panic!("expected transfer"),
		}
	}

	#[test]
	fn network_and_rpc_conflict() {
		let err = parse(&[
			"transfer", "5Grw", "1", "-s", "//Alice", "-n", "kate", "-r", "ws://x",
		])
		.err()
		.expect("network and rpc should conflict");
		assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
	}

	#[test]
	fn data_submit_flags() {
		let cli = parse(&[
			"data", "submit", "hello", "-a", "7", "-w", "final", "-s", "//Bob", "-n", "local",
		])
		.unwrap();
		match cli.command {
			Command::Data {
				command: DataCommand::Submit { blob, app_id, tx },
			} => {
				assert_eq!(blob, "hello");
				assert_eq!(app_id, 7);
				assert_eq!(tx.wait, Wait::Final);
				assert_eq!(tx.network, Some(Network::Local));
			}
			_ => panic!("expected data submit"),
		}
	}

	#[test]
	fn rejects_unknown_wait_mode() {
		assert!(parse(&["transfer", "5Grw", "1", "-s", "x", "-w", "maybe"]).is_err());
	}

	#[test]
	fn lc_up_defaults_to_goldberg() {
		let cli = parse(&["lc", "up", "-u", "-i", "id.toml"]).unwrap();
		match cli.command {
			Command::Lc {
				command: LcCommand::Up { network, identity, config, upgrade },
			} => {
				assert_eq!(network, Network::Goldberg);
				assert_eq!(identity, Some(PathBuf::from("id.toml")));
				assert!(config.is_none());
				assert!(upgrade);
			}
			_ => panic!("expected lc up"),
		}
	}

	#[test]
	fn explorer_links() {
		assert_eq!(
			Network::Goldberg.explorer_link("0xabc").as_deref(),
			Some("https://goldberg.avail.tools/#/explorer/query/0xabc")
		);
		assert!(Network::Local.explorer_link("0xabc").is_none());
	}
}
