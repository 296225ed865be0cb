use crate::error::{Error, Result};

/// Number of decimals of the AVL token.
pub const DECIMALS: u32 = 18;

/// Ticker printed next to human-readable amounts.
pub const SYMBOL: &str = "AVL";

/// Convert a decimal AVL amount such as `"1.5"` into base units
/// (`1.5 * 10^18`). Arithmetic is exact; no floating point is involved.
pub fn parse_balance(value: &str) -> Result<u128> {
	let invalid = |reason| Error::InvalidAmount {
		value: value.to_owned(),
		reason,
	};

	let trimmed = value.trim();
	if trimmed.is_empty() {
		return Err(invalid("amount is empty"));
	}

	let (whole, frac) = match trimmed.split_once('.') {
		Some((w, f)) => (w, f),
		None => (trimmed, ""),
	};
	if whole.is_empty() && frac.is_empty() {
		return Err(invalid("amount has no digits"));
	}
	if !whole.bytes().all(|b| b.is_ascii_digit()) || !frac.bytes().all(|b| b.is_ascii_digit()) {
		return Err(invalid("amount must be a non-negative decimal number"));
	}
	if frac.len() > DECIMALS as usize {
		return Err(invalid("more than 18 decimal places"));
	}

	let unit = 10u128.pow(DECIMALS);
	let whole_units = if whole.is_empty() {
		0
	} else {
		whole
			.parse::<u128>()
			.map_err(|_| invalid("amount is too large"))?
	};

	// Right-pad the fractional part to exactly DECIMALS digits.
	let frac_units = if frac.is_empty() {
		0
	} else {
		let scale = 10u128.pow(DECIMALS - frac.len() as u32);
		frac.parse::<u128>()
			.map_err(|_| invalid("amount is too large"))?
			* scale
	};

	whole_units
		.checked_mul(unit)
		.and_then(|w| w.checked_add(frac_units))
		.ok_or_else(|| invalid("amount is too large"))
}
