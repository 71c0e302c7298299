//! Numeric value generators.

use rand::Rng;

/// Round `value` to `decimals` places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Generate a random integer in the given range (inclusive).
pub fn int_range<R: Rng>(rng: &mut R, min: i64, max: i64) -> i64 {
    rng.gen_range(min..=max)
}

/// Generate a random float in the given range (inclusive), rounded to `decimals`.
///
/// Rounding never leaves the range because both bounds are expected to be
/// representable at the requested precision.
pub fn float_range<R: Rng>(rng: &mut R, min: f64, max: f64, decimals: u32) -> f64 {
    round_to(rng.gen_range(min..=max), decimals).clamp(min, max)
}

/// Generate a random float in `[-bound, bound]`, rounded to `decimals`.
pub fn symmetric<R: Rng>(rng: &mut R, bound: f64, decimals: u32) -> f64 {
    float_range(rng, -bound, bound, decimals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(1.23456, 2), 1.23);
        assert_eq!(round_to(1.23556, 3), 1.236);
        assert_eq!(round_to(-0.005, 0), -0.0);
    }

    #[test]
    fn test_int_range() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let v = int_range(&mut rng, 1_000, 1_000_000);
            assert!((1_000..=1_000_000).contains(&v));
        }
    }

    #[test]
    fn test_float_range() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let v = float_range(&mut rng, 0.5, 8.0, 2);
            assert!((0.5..=8.0).contains(&v));
            assert_eq!(v, round_to(v, 2));
        }
    }

    #[test]
    fn test_symmetric() {
        let mut rng = StdRng::seed_from_u64(7);

        let values: Vec<f64> = (0..200).map(|_| symmetric(&mut rng, 1.0, 2)).collect();
        assert!(values.iter().all(|v| (-1.0..=1.0).contains(v)));
        assert!(values.iter().any(|v| *v < 0.0));
        assert!(values.iter().any(|v| *v > 0.0));
    }
}
