//! Vector magnitude estimation
//!
//! Approximates `sqrt(x² + y² + z²)` for three accelerometer axes with a
//! handful of integer operations:
//!
//! 1. Large sums are pre-scaled by a fixed divisor so the refinement runs
//!    in the range where the seed polynomial is accurate. Each ÷256 pass is
//!    paid back with a ×16 on the root, so the estimate tracks the full sum
//!    instead of the root of a single coarse divide left unscaled.
//! 2. A seed is derived from `log(sum) / 4` (a quadratic in `sum`) raised as
//!    a power of 7, since `7 ≈ e²`.
//! 3. Four Newton corrections refine the seed.
//!
//! The result is within a few percent of the true root, which is plenty for
//! a shake threshold.

/// Sums above this are pre-scaled before taking the root
pub const PRESCALE_THRESHOLD: u64 = 0xFFFF;

/// Fixed divisor applied per pre-scaling pass
pub const PRESCALE_DIVISOR: u64 = 256;

/// `sqrt(PRESCALE_DIVISOR)`, applied to the root once per pass
const PRESCALE_ROOT: u32 = 16;

/// Number of Newton corrections
pub const REFINEMENT_STEPS: usize = 4;

/// Integer stand-in for e²
const SEED_BASE: i64 = 7;

/// Sum of squared axis readings in an explicit 64-bit accumulator
///
/// Three full-scale `i16` axes reach `3 · 2³⁰`, which already overflows a
/// signed 32-bit sum.
pub fn sum_of_squares(x: i16, y: i16, z: i16) -> u64 {
    let sq = |v: i16| {
        let v = v as i64;
        (v * v) as u64
    };
    sq(x) + sq(y) + sq(z)
}

/// `trunc(log(s) / 4)` approximated by `1.93 + 3e-5·s − 3e-10·s²`
///
/// Evaluated scaled by 100 so no fraction is ever formed.
fn seed_exponent(s: i64) -> i64 {
    let scaled = 193 + 3 * s / 1_000 - 3 * s * s / 100_000_000;
    scaled / 100
}

/// Approximate integer square root
///
/// `0` and `1` are answered directly; the seed polynomial is poor at
/// these extremes. Pre-scaling may run several passes, each multiplying
/// the root back by [`PRESCALE_ROOT`].
pub fn isqrt_approx(sum: u64) -> u32 {
    match sum {
        0 => return 0,
        1 => return 1,
        _ => {}
    }

    let mut s = sum;
    let mut scale: u32 = 1;
    while s > PRESCALE_THRESHOLD {
        s /= PRESCALE_DIVISOR;
        scale *= PRESCALE_ROOT;
    }
    let s = s as i64;

    let mut guess: i64 = 1;
    for _ in 0..seed_exponent(s).max(0) {
        guess *= SEED_BASE;
    }

    for _ in 0..REFINEMENT_STEPS {
        if guess == 0 {
            break;
        }
        guess += (s - guess * guess) / (2 * guess);
    }

    (guess.max(0) as u32).saturating_mul(scale)
}

/// Approximate magnitude of a three-axis reading
pub fn magnitude(x: i16, y: i16, z: i16) -> u32 {
    isqrt_approx(sum_of_squares(x, y, z))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_and_one() {
        assert_eq!(magnitude(0, 0, 0), 0);
        assert_eq!(magnitude(1, 0, 0), 1);
        assert_eq!(magnitude(0, -1, 0), 1);
        assert_eq!(magnitude(0, 0, 1), 1);
    }

    #[test]
    fn test_sum_does_not_overflow() {
        let sum = sum_of_squares(i16::MIN, i16::MIN, i16::MIN);
        assert_eq!(sum, 3 * (1u64 << 30));
    }

    #[test]
    fn test_seed_exponent() {
        // Below ~2300 the seed is 7, above it 49
        assert_eq!(seed_exponent(2), 1);
        assert_eq!(seed_exponent(1_000), 1);
        assert_eq!(seed_exponent(10_000), 2);
        assert_eq!(seed_exponent(65_535), 2);
    }

    #[test]
    fn test_unscaled_value() {
        // 100² refines 49 -> 126 -> 103 -> 101 -> 101
        assert_eq!(magnitude(100, 0, 0), 101);
        // Same magnitude spread over two axes
        assert_eq!(magnitude(60, 80, 0), 101);
    }

    #[test]
    fn test_one_g_at_rest() {
        // 16384 LSB per g at ±2 g: two pre-scaling passes
        let m = magnitude(0, 0, 16_384);
        assert!((16_000..=16_800).contains(&m), "got {}", m);
    }

    #[test]
    fn test_full_scale() {
        let m = magnitude(i16::MAX, i16::MAX, i16::MAX);
        // True root is ~56754
        assert!((55_000..=58_500).contains(&m), "got {}", m);
    }

    #[test]
    fn test_sign_does_not_matter() {
        assert_eq!(magnitude(-300, 400, -1200), magnitude(300, -400, 1200));
    }
}
