// Linear congruential generator over a signed 32-bit register
// https://en.wikipedia.org/wiki/Linear_congruential_generator

const LCG_A: i32 = 843314861;
const LCG_C: i32 = 453816693;

/// 2^31, the rebias added to a register that wrapped negative.
pub const Y_VALUE_LIMIT: i64 = 1 << (i32::BITS - 1);

/// Uniform source on `[0, 1]` backed by a single wrapping `i32` register.
///
/// The register width is part of the algorithm: multiplication and addition
/// wrap in two's complement on 32 bits, and a negative result is shifted up
/// by [`Y_VALUE_LIMIT`] once. With this width the shifted register always lands
/// in `[0, 2^31 - 1]`, so the largest possible draw is exactly `1.0`.
#[derive(Debug, Clone, Default)]
pub struct Lcg32 {
    state: i32,
}

impl Lcg32 {
    pub fn new(seed: i32) -> Self {
        Lcg32 { state: seed }
    }

    pub fn state(&self) -> i32 {
        self.state
    }

    /// Advances the register and returns its new value.
    pub fn next_i32(&mut self) -> i32 {
        let mut y = self.state.wrapping_mul(LCG_A).wrapping_add(LCG_C);
        if y < 0 {
            y = (y as i64 + Y_VALUE_LIMIT) as i32;
        }
        self.state = y;
        y
    }

    pub fn next_f64(&mut self) -> f64 {
        self.next_i32() as f64 / (Y_VALUE_LIMIT - 1) as f64
    }

    /// Draws `n` values in generation order.
    pub fn sample(&mut self, n: usize) -> Vec<f64> {
        (0..n).map(|_| self.next_f64()).collect()
    }
}
