const COLOR_FUNCTIONS: [&str; 5] = ["rgb(", "rgba(", "hsl(", "hsla(", "var("];

/// Returns whether `s` is a color literal the host can paint: `#rgb`, `#rgba`, `#rrggbb`,
/// `#rrggbbaa`, or a functional notation such as `rgb(0, 0, 0)` and `var(--primary)`.
pub fn is_css_color(s: &str) -> bool {
	let s = s.trim();
	if let Some(hex) = s.strip_prefix('#') {
		return matches!(hex.len(), 3 | 4 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit());
	}

	let lower = s.to_ascii_lowercase();
	COLOR_FUNCTIONS
		.iter()
		.any(|prefix| lower.starts_with(prefix) && lower.len() > prefix.len() + 1 && lower.ends_with(')'))
}
