use anyhow::Result;

use crate::blob;
use crate::cli::DataCommand;
use crate::commands::{connect, report};
use crate::keys;

pub async fn run(cmd: &DataCommand) -> Result<()> {
	match cmd {
		DataCommand::Submit { blob, app_id, tx } => {
			let data = blob::blob_bytes(blob)?;
			let signer = keys::keypair_from_seed(&tx.seed)?;

			let (client, endpoint) = connect(tx).await?;
			tracing::debug!(bytes = data.len(), app_id, "submitting data blob");
			let submission = client.submit_data(&signer, data, *app_id, tx.wait).await?;

			report("Blob", &submission, &endpoint);
			println!("Data blob sent to Avail");
			Ok(())
		}
	}
}
