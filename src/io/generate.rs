//! Seeded random point sets for benchmarks and tests.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::Point;

/// Generates `n` points with integer coordinates drawn uniformly from
/// `0..=width` and `0..=height`.
///
/// The same seed always yields the same points, so generated files can
/// stand in for fixed benchmark inputs.
///
/// # Examples
///
/// ```
/// use u_autoroute::io::generate_points;
///
/// let a = generate_points(100, 1000, 1000, 7);
/// let b = generate_points(100, 1000, 1000, 7);
/// assert_eq!(a.len(), 100);
/// assert_eq!(a, b);
/// ```
pub fn generate_points(n: usize, width: u32, height: u32, seed: u64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let x = rng.random_range(0..=width);
            let y = rng.random_range(0..=height);
            Point::new(f64::from(x), f64::from(y))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_bounds() {
        let pts = generate_points(500, 50, 20, 1);
        assert_eq!(pts.len(), 500);
        for p in &pts {
            assert!((0.0..=50.0).contains(&p.x()));
            assert!((0.0..=20.0).contains(&p.y()));
            assert_eq!(p.x().fract(), 0.0);
            assert_eq!(p.y().fract(), 0.0);
        }
    }

    #[test]
    fn test_generate_seeded() {
        assert_eq!(generate_points(10, 100, 100, 3), generate_points(10, 100, 100, 3));
        assert_ne!(generate_points(10, 100, 100, 3), generate_points(10, 100, 100, 4));
    }

    #[test]
    fn test_generate_empty() {
        assert!(generate_points(0, 10, 10, 0).is_empty());
    }
}
