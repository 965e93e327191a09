//! Parsing of numeric inputs given on the command line.

use anyhow::{Context, Result, bail};

/// Parse a `u32` written in decimal or `0x` hexadecimal. Underscores are ignored.
pub fn parse_u32(s: &str) -> Result<u32> {
    let cleaned: String = s.trim().chars().filter(|c| *c != '_').collect();
    if cleaned.is_empty() {
        bail!("Empty input");
    }

    let parsed = match cleaned
        .strip_prefix("0x")
        .or_else(|| cleaned.strip_prefix("0X"))
    {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => cleaned.parse::<u32>(),
    };
    parsed.with_context(|| format!("Invalid u32 input: {s}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decimal_and_hex() {
        assert_eq!(parse_u32("100").unwrap(), 100);
        assert_eq!(parse_u32("2_000_000_000").unwrap(), 2_000_000_000);
        assert_eq!(parse_u32("0xFFFFFFFF").unwrap(), u32::MAX);
        assert_eq!(parse_u32("0X10").unwrap(), 16);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_u32("").is_err());
        assert!(parse_u32("-1").is_err());
        assert!(parse_u32("0x1_0000_0000").is_err());
        assert!(parse_u32("ten").is_err());
    }
}
