use anyhow::Result;

use crate::amount::{self, SYMBOL};
use crate::cli::TxArgs;
use crate::commands::{connect, report};
use crate::keys;

pub async fn run(to: &str, value: &str, keep_alive: bool, args: &TxArgs) -> Result<()> {
	// Validate everything local before touching the network.
	let dest = keys::parse_address(to)?;
	let amount = amount::parse_balance(value)?;
	let signer = keys::keypair_from_seed(&args.seed)?;

	let (client, endpoint) = connect(args).await?;
	let submission = client
		.transfer(&signer, &dest, amount, keep_alive, args.wait)
		.await?;

	report("Transfer", &submission, &endpoint);
	println!("{value} {SYMBOL} successfully sent to {to}");
	Ok(())
}
