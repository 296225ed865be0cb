use scale_info::PortableRegistry;
use subxt::client::ClientState;
use subxt::config::signed_extensions::{
	AnyOf, ChargeTransactionPayment, CheckGenesis, CheckMortality, CheckNonce, CheckSpecVersion,
	CheckTxVersion, SignedExtension,
};
use subxt::config::substrate::{BlakeTwo256, SubstrateHeader};
use subxt::config::{Config, ExtrinsicParams, ExtrinsicParamsEncoder, RefineParams};
use subxt::dynamic::Value;
use subxt::error::ExtrinsicParamsError;
use subxt::ext::codec::{Compact, Encode};
use subxt::tx::Payload;
use subxt::utils::{AccountId32, MultiAddress, MultiSignature, H256};
use subxt::OnlineClient;
use subxt_signer::sr25519::Keypair;
use tracing::{debug, warn};

use crate::cli::Wait;
use crate::submit::{self, Submission};

/// Chain configuration for Avail: a Substrate chain with u32 block numbers
/// whose transactions carry an extra `CheckAppId` signed extension.
pub enum AvailConfig {}

impl Config for AvailConfig {
	type Hash = H256;
	type AccountId = AccountId32;
	type Address = MultiAddress<AccountId32, u32>;
	type Signature = MultiSignature;
	type Hasher = BlakeTwo256;
	type Header = SubstrateHeader<u32, BlakeTwo256>;
	type ExtrinsicParams = AvailExtrinsicParams;
	type AssetId = u32;
}

/// Signed extensions understood by the Avail runtime. `AnyOf` orders them
/// according to the chain metadata, so the tuple order only has to match
/// the `Params` tuple built in [`tx_params`].
pub type AvailExtrinsicParams = AnyOf<
	AvailConfig,
	(
		CheckSpecVersion,
		CheckTxVersion,
		CheckNonce,
		CheckGenesis<AvailConfig>,
		CheckMortality<AvailConfig>,
		ChargeTransactionPayment,
		CheckAppId,
	),
>;

type TxParams = <AvailExtrinsicParams as ExtrinsicParams<AvailConfig>>::Params;

/// Avail's app-id extension: the application namespace a transaction is
/// submitted under, encoded as a compact u32 in the signed extra.
#[derive(Debug, Clone, Copy)]
pub struct CheckAppId(pub u32);

/// Parameters for [`CheckAppId`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AppId(pub u32);

impl<T: Config> RefineParams<T> for AppId {}

impl<T: Config> ExtrinsicParams<T> for CheckAppId {
	type Params = AppId;

	fn new(_client: &ClientState<T>, params: Self::Params) -> Result<Self, ExtrinsicParamsError> {
		Ok(CheckAppId(params.0))
	}
}

impl ExtrinsicParamsEncoder for CheckAppId {
	fn encode_extra_to(&self, v: &mut Vec<u8>) {
		Compact(self.0).encode_to(v);
	}
}

impl<T: Config> SignedExtension<T> for CheckAppId {
	type Decoded = Value;

	fn matches(identifier: &str, _type_id: u32, _types: &PortableRegistry) -> bool {
		identifier == "CheckAppId"
	}
}

fn tx_params(app_id: u32) -> TxParams {
	(
		Default::default(),
		Default::default(),
		Default::default(),
		Default::default(),
		Default::default(),
		Default::default(),
		AppId(app_id),
	)
}

/// Connection to an Avail node.
pub struct AvailClient {
	api: OnlineClient<AvailConfig>,
}

impl AvailClient {
	pub async fn connect(url: &str) -> anyhow::Result<Self> {
		debug!(url, "connecting to Avail node");
		let api = if url.starts_with("ws://") || url.starts_with("http://") {
			warn!(url, "connecting over an unencrypted transport");
			OnlineClient::<AvailConfig>::from_insecure_url(url).await?
		} else {
			OnlineClient::<AvailConfig>::from_url(url).await?
		};
		debug!(
			spec_version = api.runtime_version().spec_version,
			"connected"
		);
		Ok(Self { api })
	}

	/// Move `amount` base units to `dest`.
	pub async fn transfer(
		&self,
		signer: &Keypair,
		dest: &AccountId32,
		amount: u128,
		keep_alive: bool,
		wait: Wait,
	) -> anyhow::Result<Submission> {
		let call_name = if keep_alive {
			"transfer_keep_alive"
		} else {
			"transfer_allow_death"
		};
		let call = subxt::dynamic::tx(
			"Balances",
			call_name,
			vec![
				Value::unnamed_variant("Id", [Value::from_bytes(dest.0)]),
				Value::u128(amount),
			],
		);
		self.submit(&call, signer, 0, wait).await
	}

	/// Submit `data` through `DataAvailability::submit_data` under `app_id`.
	pub async fn submit_data(
		&self,
		signer: &Keypair,
		data: Vec<u8>,
		app_id: u32,
		wait: Wait,
	) -> anyhow::Result<Submission> {
		let call = subxt::dynamic::tx(
			"DataAvailability",
			"submit_data",
			vec![Value::from_bytes(data)],
		);
		self.submit(&call, signer, app_id, wait).await
	}

	async fn submit<Call: Payload>(
		&self,
		call: &Call,
		signer: &Keypair,
		app_id: u32,
		wait: Wait,
	) -> anyhow::Result<Submission> {
		let tx = self.api.tx();

		if wait == Wait::No {
			let hash = tx
				.sign_and_submit(call, signer, tx_params(app_id))
				.await
				.map_err(submit::failed)?;
			debug!(hash = %submit::hex_hash(&hash), "extrinsic submitted");
			return Ok(Submission::Sent { extrinsic_hash: hash });
		}

		let progress = tx
			.sign_and_submit_then_watch(call, signer, tx_params(app_id))
			.await
			.map_err(submit::failed)?;
		submit::watch(progress, wait).await
	}
}
