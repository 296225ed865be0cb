use std::pin::pin;

use futures::stream::{self, Stream, StreamExt};
use subxt::tx::{TxInBlock, TxProgress, TxStatus};
use subxt::utils::H256;
use subxt::OnlineClient;
use tracing::{debug, info};

use crate::cli::Wait;
use crate::client::AvailConfig;
use crate::error::Error;

/// How far an extrinsic got before we stopped waiting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
	InBlock,
	Finalized,
}

impl Stage {
	pub fn verb(&self) -> &'static str {
		match self {
			Self::InBlock => "included",
			Self::Finalized => "finalized",
		}
	}
}

#[derive(Debug, Clone)]
pub enum Submission {
	/// Accepted into the pool; nobody waited for a block.
	Sent { extrinsic_hash: H256 },
	/// Reached the requested stage and dispatched successfully.
	Included {
		stage: Stage,
		block_hash: H256,
		extrinsic_hash: H256,
	},
}

/// A transaction status reduced to what the wait logic cares about. `B` is
/// whatever identifies the including block.
#[derive(Debug, PartialEq)]
pub enum Event<B> {
	Pending,
	Included(Stage, B),
	Failed(String),
}

/// Whether reaching `stage` satisfies the requested wait mode.
pub fn satisfies(wait: Wait, stage: Stage) -> bool {
	match wait {
		Wait::No => true,
		Wait::Yes => matches!(stage, Stage::InBlock | Stage::Finalized),
		Wait::Final => stage == Stage::Finalized,
	}
}

pub fn classify<C>(status: TxStatus<AvailConfig, C>) -> Event<TxInBlock<AvailConfig, C>> {
	match status {
		TxStatus::InBestBlock(b) => Event::Included(Stage::InBlock, b),
		TxStatus::InFinalizedBlock(b) => Event::Included(Stage::Finalized, b),
		TxStatus::Error { message }
		| TxStatus::Invalid { message }
		| TxStatus::Dropped { message } => Event::Failed(message),
		_ => Event::Pending,
	}
}

/// Consume events until one satisfies `wait`. A failure event, or the
/// stream ending first, is a `TxFailed` error.
pub async fn follow<B, S>(events: S, wait: Wait) -> Result<(Stage, B), Error>
where
	S: Stream<Item = Result<Event<B>, Error>>,
{
	let mut events = pin!(events);
	while let Some(event) = events.next().await {
		match event? {
			Event::Pending => debug!("extrinsic not in a block yet"),
			Event::Failed(message) => return Err(Error::TxFailed(message)),
			Event::Included(stage, block) => {
				info!(stage = stage.verb(), "extrinsic in block");
				if satisfies(wait, stage) {
					return Ok((stage, block));
				}
			}
		}
	}

	Err(Error::TxFailed(
		"status subscription ended before the extrinsic was included".into(),
	))
}

/// Follow a watched extrinsic until it reaches the stage `wait` asks for,
/// then confirm it dispatched without an `ExtrinsicFailed` event.
pub async fn watch(
	progress: TxProgress<AvailConfig, OnlineClient<AvailConfig>>,
	wait: Wait,
) -> anyhow::Result<Submission> {
	let events = stream::unfold(progress, |mut p| async move {
		p.next().await.map(|status| (status, p))
	})
	.map(|status| {
		status
			.map(classify)
			.map_err(|e| Error::TxFailed(e.to_string()))
	});

	let (stage, in_block) = follow(events, wait).await?;
	in_block.wait_for_success().await.map_err(failed)?;

	Ok(Submission::Included {
		stage,
		block_hash: in_block.block_hash(),
		extrinsic_hash: in_block.extrinsic_hash(),
	})
}

pub fn failed(err: subxt::Error) -> anyhow::Error {
	Error::TxFailed(err.to_string()).into()
}

pub fn hex_hash(hash: &H256) -> String {
	format!("0x{}", hex::encode(hash.as_bytes()))
}
