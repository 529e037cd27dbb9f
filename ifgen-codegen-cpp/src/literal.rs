//! Integer literal parsing for explicit enum values.

use std::num::ParseIntError;

/// Parse a C++ integer literal into its numeric value.
///
/// Accepts an optional sign followed by a decimal, `0x` hexadecimal, `0b`
/// binary or leading-zero octal literal. Surrounding whitespace is ignored.
/// The magnitude must fit in 64 unsigned bits.
pub fn parse_literal(text: &str) -> Result<i128, ParseIntError> {
    let text = text.trim();
    let (negative, unsigned) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };

    let (radix, digits) = if let Some(hex) = strip_radix_prefix(unsigned, 'x') {
        (16, hex)
    } else if let Some(bin) = strip_radix_prefix(unsigned, 'b') {
        (2, bin)
    } else if unsigned.len() > 1 && unsigned.starts_with('0') {
        (8, &unsigned[1..])
    } else {
        (10, unsigned)
    };

    // `from_str_radix` tolerates a sign of its own; a second one is malformed.
    let digits = match digits.strip_prefix(['+', '-']) {
        Some(_) => "-",
        None => digits,
    };

    let magnitude = i128::from(u64::from_str_radix(digits, radix)?);
    Ok(if negative { -magnitude } else { magnitude })
}

fn strip_radix_prefix(text: &str, marker: char) -> Option<&str> {
    let rest = text.strip_prefix('0')?;
    rest.strip_prefix(marker)
        .or_else(|| rest.strip_prefix(marker.to_ascii_uppercase()))
}
