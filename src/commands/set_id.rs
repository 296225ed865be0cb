use anyhow::Result;

use crate::identity;

pub fn run(seed: &str) -> Result<()> {
	let dir = identity::availup_dir()?;
	let path = identity::write_identity(&dir, seed)?;
	println!("Identity written to {}", path.display());
	Ok(())
}
