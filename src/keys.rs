use std::str::FromStr;

use subxt::utils::AccountId32;
use subxt_signer::sr25519::Keypair;
use subxt_signer::SecretUri;

use crate::error::{Error, Result};

/// Derive an sr25519 signing key from a seed phrase or secret URI.
///
/// Accepts a BIP-39 mnemonic optionally followed by `//hard/soft`
/// derivation junctions and a `///password`, or a dev URI such as
/// `//Alice`.
pub fn keypair_from_seed(seed: &str) -> Result<Keypair> {
	let uri = SecretUri::from_str(seed.trim()).map_err(|e| Error::InvalidSeed(e.to_string()))?;
	Keypair::from_uri(&uri).map_err(|e| Error::InvalidSeed(e.to_string()))
}

/// Parse and checksum-validate an SS58 address.
pub fn parse_address(address: &str) -> Result<AccountId32> {
	AccountId32::from_str(address).map_err(|_| Error::InvalidAddress(address.to_owned()))
}
