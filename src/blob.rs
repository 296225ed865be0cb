use crate::error::{Error, Result};

/// Turn the `<blob>` argument into the bytes to submit.
///
/// A `0x`-prefixed argument that is valid hex is decoded, anything else is
/// submitted as its UTF-8 bytes.
pub fn blob_bytes(blob: &str) -> Result<Vec<u8>> {
	if blob.is_empty() {
		return Err(Error::InvalidBlob("blob is empty".into()));
	}

	if let Some(hex_part) = blob.strip_prefix("0x") {
		if let Ok(bytes) = hex::decode(hex_part) {
			if bytes.is_empty() {
				return Err(Error::InvalidBlob("blob is empty".into()));
			}
			return Ok(bytes);
		}
	}

	Ok(blob.as_bytes().to_vec())
}
