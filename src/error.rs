use thiserror::Error;

/// Failures the CLI reports with a specific message instead of a raw
/// library error.
#[derive(Debug, Error)]
pub enum Error {
	#[error("{0} recipient address is invalid")]
	InvalidAddress(String),

	#[error("invalid amount {value:?}: {reason}")]
	InvalidAmount { value: String, reason: &'static str },

	#[error("invalid data blob: {0}")]
	InvalidBlob(String),

	#[error("invalid seed phrase: {0}")]
	InvalidSeed(String),

	#[error("Transaction failed: {0}")]
	TxFailed(String),

	#[error("could not determine home directory")]
	NoHomeDir,

	#[error("light client installer failed: {0}")]
	Installer(String),
}

pub type Result<T> = std::result::Result<T, Error>;
