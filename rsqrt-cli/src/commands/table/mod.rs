//! `rsqrt table`: print the initial estimate table.

use std::io::Write;

use anyhow::Result;
use rsqrt_builtins::{RSQRT_TABLE, rsqrt_reference};

pub fn handle_table(out: &mut dyn Write) -> Result<()> {
    writeln!(out, " exp  estimate  floor(65536/sqrt(2^exp))")?;
    for (exp, &entry) in RSQRT_TABLE.iter().enumerate() {
        let reference = rsqrt_reference(1u32 << exp).unwrap_or(0);
        writeln!(out, "{exp:>4}  {entry:>8}  {reference:>8}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_output() {
        let mut out = Vec::new();
        handle_table(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 33);
        assert_eq!(lines[1], "   0     65535     65536");
        assert_eq!(lines[20], "  19        90        90");
        assert_eq!(lines[32], "  31         1         1");
    }
}
