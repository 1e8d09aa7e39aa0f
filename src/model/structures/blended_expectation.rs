use serde::Serialize;

/// The inputs and result of blending a language's record toward the puzzle record.
///
/// `sb = (n / (n + m)) * s + (m / (n + m)) * sa`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BlendedExpectation {
    pub n: u32,
    pub m: f64,
    pub s: u32,
    pub sa: u32,
    pub sb: f64
}

impl BlendedExpectation {
    /// Blends an arbitrary language minimum `s` with the puzzle record `sa`.
    pub fn blend(n: u32, m: f64, s: f64, sa: f64) -> f64 {
        let n = n as f64;

        (n / (n + m)) * s + (m / (n + m)) * sa
    }

    pub fn new(n: u32, m: f64, s: u32, sa: u32) -> BlendedExpectation {
        BlendedExpectation {
            n,
            m,
            s,
            sa,
            sb: Self::blend(n, m, s as f64, sa as f64)
        }
    }
}
