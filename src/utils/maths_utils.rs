use rand::Rng;

/// Uniform sample in `[-span / 2, span / 2)`.
#[inline]
pub fn centered_random<R: Rng + ?Sized>(rng: &mut R, span: f64) -> f64 {
    (rng.r#gen::<f64>() - 0.5) * span
}

/// Uniform sample in `[min, max)`. Degenerate ranges return `min`.
#[inline]
pub fn uniform_in<R: Rng + ?Sized>(rng: &mut R, (min, max): (f64, f64)) -> f64 {
    if max <= min {
        return min;
    }
    rng.gen_range(min..max)
}

/// Percentage change from `from` to `to`. Zero when `from` is (nearly) zero.
#[inline]
pub fn percent_change(from: f64, to: f64) -> f64 {
    if from.abs() < f64::EPSILON {
        return 0.0;
    }
    (to - from) / from * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn centered_random_stays_in_band() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10_000 {
            let v = centered_random(&mut rng, 5.0);
            assert!((-2.5..2.5).contains(&v), "{v} escaped the band");
        }
    }

    #[test]
    fn uniform_in_handles_empty_range() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(uniform_in(&mut rng, (3.0, 3.0)), 3.0);
    }

    #[test]
    fn percent_change_of_zero_base() {
        assert_eq!(percent_change(0.0, 10.0), 0.0);
        assert!((percent_change(200.0, 210.0) - 5.0).abs() < 1e-12);
    }
}
