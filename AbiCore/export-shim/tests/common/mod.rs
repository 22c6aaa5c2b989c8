//! Shared test helpers for export shim integration tests.

#![allow(dead_code)]

/// Operand values that exercise sign handling and the 32-bit extremes.
pub const EDGE_OPERANDS: &[i32] = &[
    i32::MIN,
    i32::MIN + 1,
    -150,
    -2,
    -1,
    0,
    1,
    2,
    3,
    11,
    12,
    150,
    i32::MAX - 1,
    i32::MAX,
];

/// Deterministic xorshift64 stream for sampling the full `i32` domain.
pub struct XorShift(u64);

impl XorShift {
    pub fn new(seed: u64) -> Self {
        Self(seed.max(1))
    }

    pub fn next_i32(&mut self) -> i32 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        (x >> 32) as u32 as i32
    }
}

/// Mathematical maximum, written independently of the crates under test.
pub fn expected_max(a: i32, b: i32, c: i32) -> i32 {
    let mut m = a;
    if b > m {
        m = b;
    }
    if c > m {
        m = c;
    }
    m
}
