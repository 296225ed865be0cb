pub mod data;
pub mod lc;
pub mod set_id;
pub mod transfer;

use crate::cli::{Network, TxArgs};
use crate::client::AvailClient;
use crate::config::Config;
use crate::submit::{hex_hash, Submission};

/// Where to send extrinsics, and which explorer (if any) can show them.
#[derive(Debug, Clone, PartialEq)]
pub struct Endpoint {
	pub url: String,
	pub network: Option<Network>,
}

/// Resolve the RPC URL from CLI flag, environment, or config.
///
/// An explicit `--rpc` URL wins; the network is then unknown, so no
/// explorer link is printed and `load_config` is never called.
pub fn resolve_endpoint<F>(args: &TxArgs, load_config: F) -> anyhow::Result<Endpoint>
where
	F: FnOnce() -> anyhow::Result<Config>,
{
	if let (Some(url), None) = (&args.rpc, args.network) {
		return Ok(Endpoint {
			url: url.clone(),
			network: None,
		});
	}

	let config = load_config()?;
	let network = args.network.unwrap_or(config.network.default);
	Ok(Endpoint {
		url: config.rpc_url(network).to_owned(),
		network: Some(network),
	})
}

/// Connect to the endpoint `args` resolves to.
pub async fn connect(args: &TxArgs) -> anyhow::Result<(AvailClient, Endpoint)> {
	let endpoint = resolve_endpoint(args, Config::load)?;
	let client = AvailClient::connect(&endpoint.url).await?;
	Ok((client, endpoint))
}

/// Lines describing where a submission landed, with an explorer link when
/// the network has one.
pub fn report_lines(kind: &str, submission: &Submission, endpoint: &Endpoint) -> Vec<String> {
	match submission {
		Submission::Sent { extrinsic_hash } => {
			vec![format!(
				"{kind} submitted with extrinsic hash: {}",
				hex_hash(extrinsic_hash)
			)]
		}
		Submission::Included {
			stage, block_hash, ..
		} => {
			let block = hex_hash(block_hash);
			let mut lines = vec![format!("{kind} {} at block hash: {block}", stage.verb())];
			if let Some(link) = endpoint.network.and_then(|n| n.explorer_link(&block)) {
				lines.push(format!("Link to explorer: {link}"));
			}
			lines
		}
	}
}

pub fn report(kind: &str, submission: &Submission, endpoint: &Endpoint) {
	for line in report_lines(kind, submission, endpoint) {
		println!("{line}");
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::cli::Wait;
	use crate::submit::Stage;
	use subxt::utils::H256;

	fn args(network: Option<Network>, rpc: Option<&str>) -> TxArgs {
		TxArgs {
			network,
			rpc: rpc.map(str::to_owned),
			seed: "//Alice".into(),
			wait: Wait::Yes,
		}
	}

	fn default_config() -> anyhow::Result<Config> {
		Ok(Config::default())
	}

	fn included(stage: Stage) -> Submission {
		Submission::Included {
			stage,
			block_hash: H256::repeat_byte(0x11),
			extrinsic_hash: H256::repeat_byte(0x22),
		}
	}

	fn endpoint(network: Option<Network>) -> Endpoint {
		Endpoint {
			url: "wss://node".into(),
			network,
		}
	}

	#[test]
	fn defaults_to_configured_network() {
		let ep = resolve_endpoint(&args(None, None), default_config).unwrap();
		assert_eq!(ep.url, "wss://goldberg.avail.tools/ws");
		assert_eq!(ep.network, Some(Network::Goldberg));
	}

	#[test]
	fn named_network_uses_table() {
		let ep = resolve_endpoint(&args(Some(Network::Kate), None), default_config).unwrap();
		assert_eq!(ep.url, "wss://kate.avail.tools/ws");
		assert_eq!(ep.network, Some(Network::Kate));
	}

	#[test]
	fn explicit_rpc_has_no_network() {
		let ep = resolve_endpoint(&args(None, Some("wss://my-node:443")), default_config).unwrap();
		assert_eq!(ep.url, "wss://my-node:443");
		assert!(ep.network.is_none());
	}

	#[test]
	fn explicit_rpc_does_not_read_config() {
		let ep = resolve_endpoint(&args(None, Some("wss://my-node:443")), || {
			anyhow::bail!("malformed config.toml")
		})
		.unwrap();
		assert_eq!(ep.url, "wss://my-node:443");
	}

	#[test]
	fn config_errors_surface_when_needed() {
		let err = resolve_endpoint(&args(None, None), || anyhow::bail!("malformed config.toml"))
			.unwrap_err();
		assert_eq!(err.to_string(), "malformed config.toml");
	}

	#[test]
	fn config_overrides_builtin_url() {
		let ep = resolve_endpoint(&args(None, None), || {
			let mut config = Config::default();
			config.network.default = Network::Local;
			config.network.local_rpc = "ws://192.168.1.2:9944".into();
			Ok(config)
		})
		.unwrap();
		assert_eq!(ep.url, "ws://192.168.1.2:9944");
		assert_eq!(ep.network, Some(Network::Local));
	}

	#[test]
	fn included_report_links_to_explorer() {
		let block = format!("0x{}", "11".repeat(32));
		let lines = report_lines(
			"Transfer",
			&included(Stage::InBlock),
			&endpoint(Some(Network::Goldberg)),
		);
		assert_eq!(
			lines,
			[
				format!("Transfer included at block hash: {block}"),
				format!("Link to explorer: https://goldberg.avail.tools/#/explorer/query/{block}"),
			]
		);
	}

	#[test]
	fn finalized_report_without_explorer() {
		let block = format!("0x{}", "11".repeat(32));
		let expected = [format!("Blob finalized at block hash: {block}")];

		// A custom --rpc endpoint and the local network both have no explorer.
		for network in [None, Some(Network::Local)] {
			let lines = report_lines("Blob", &included(Stage::Finalized), &endpoint(network));
			assert_eq!(lines, expected);
		}
	}

	#[test]
	fn sent_report_prints_extrinsic_hash() {
		let sent = Submission::Sent {
			extrinsic_hash: H256::repeat_byte(0x22),
		};
		let lines = report_lines("Blob", &sent, &endpoint(Some(Network::Kate)));
		assert_eq!(
			lines,
			[format!("Blob submitted with extrinsic hash: 0x{}", "22".repeat(32))]
		);
	}
}
