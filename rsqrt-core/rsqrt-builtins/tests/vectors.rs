//! Fixed vectors from the bare-metal firmware test suite.

use rsqrt_builtins::{RSQRT_OF_ONE, RSQRT_OF_ZERO, fast_rsqrt, fast_rsqrt_stages};

#[test_log::test]
fn test_exact_vectors() {
    let cases = [
        (0u32, RSQRT_OF_ZERO),
        (1, RSQRT_OF_ONE),
        (0xFFFF_FFFF, 1),
        (4, 32768),
        (16, 16384),
        (1024, 2048),
        (65536, 256),
        (1048576, 64),
    ];
    for (x, expected) in cases {
        assert_eq!(fast_rsqrt(x), expected, "rsqrt({x:#x})");
    }
}

#[test_log::test]
fn test_approximate_vectors() {
    let cases = [
        (100u32, 6554u32),
        (2, 46341),
        (10, 20723),
        (42, 10103),
        (12345, 590),
        (1_000_000, 66),
        (2_000_000_000, 1),
    ];
    for (x, expected) in cases {
        let stages = fast_rsqrt_stages(x);
        log::info!("{stages:?}");

        let margin = match expected / 10 {
            0 => 2,
            m => m,
        };
        assert!(
            stages.result.abs_diff(expected) <= margin,
            "rsqrt({x}): expected ~{expected}, got {}",
            stages.result
        );
    }
}

#[test_log::test]
fn test_saturating_edges() {
    // Top segment interpolates toward an implicit zero entry
    assert_eq!(fast_rsqrt(0x8000_0000), 1);
    assert_eq!(fast_rsqrt(0xC000_0000), 1);
    assert_eq!(fast_rsqrt(0xFFFF_FFFE), 1);
    assert_eq!(fast_rsqrt(2), 46341);
}
