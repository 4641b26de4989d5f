//! CSS length parsing

/// Parse a computed CSS pixel value the way `parseInt` would.
///
/// Leading whitespace is skipped and the leading integer digits are taken;
/// everything after them (fraction, unit) is ignored. Anything without
/// leading digits yields 0, and negative values clamp to 0.
pub fn parse_css_pixels(value: &str) -> u32 {
    let trimmed = value.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if negative || digits_end == 0 {
        return 0;
    }

    // Saturate rather than fail on absurd font sizes
    rest[..digits_end].parse::<u32>().unwrap_or(u32::MAX)
}
