use std::str::FromStr;


/// Unit suffix of a [`CssLength`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthUnit {
	Px,
	Percent,
	Vh,
	Vw,
	Em,
	Rem,
}

impl LengthUnit {
	/// Suffixes ordered so that longer ones are tried first (`rem` before `em`).
	const SUFFIXES: [(&'static str, LengthUnit); 6] = [
		("rem", LengthUnit::Rem),
		("px", LengthUnit::Px),
		("vh", LengthUnit::Vh),
		("vw", LengthUnit::Vw),
		("em", LengthUnit::Em),
		("%", LengthUnit::Percent),
	];

	pub fn as_str(self) -> &'static str {
		match self {
			LengthUnit::Px => "px",
			LengthUnit::Percent => "%",
			LengthUnit::Vh => "vh",
			LengthUnit::Vw => "vw",
			LengthUnit::Em => "em",
			LengthUnit::Rem => "rem",
		}
	}
}

/// A non-negative CSS length such as `400px` or `50vh`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CssLength {
	pub value: f64,
	pub unit: LengthUnit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LengthError {
	#[error("empty length")]
	Empty,
	#[error("missing unit in '{0}' (expected px, %, vh, vw, em or rem)")]
	MissingUnit(String),
	#[error("invalid number in '{0}'")]
	InvalidNumber(String),
	#[error("negative length '{0}'")]
	Negative(String),
}

impl FromStr for CssLength {
	type Err = LengthError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let s = s.trim();
		if s.is_empty() {
			return Err(LengthError::Empty);
		}

		// A bare zero needs no unit.
		if s.parse::<f64>().is_ok_and(|n| n == 0.0) {
			return Ok(Self {
				value: 0.0,
				unit: LengthUnit::Px,
			});
		}

		let (number, unit) = LengthUnit::SUFFIXES
			.iter()
			.find_map(|(suffix, unit)| s.strip_suffix(suffix).map(|n| (n, *unit)))
			.ok_or_else(|| LengthError::MissingUnit(s.to_string()))?;

		let value = number
			.parse::<f64>()
			.ok()
			.filter(|n| n.is_finite() && !number.contains(char::is_whitespace))
			.ok_or_else(|| LengthError::InvalidNumber(s.to_string()))?;
		if value < 0.0 {
			return Err(LengthError::Negative(s.to_string()));
		}

		Ok(Self { value, unit })
	}
}

impl core::fmt::Display for CssLength {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		write!(f, "{}{}", self.value, self.unit.as_str())
	}
}
