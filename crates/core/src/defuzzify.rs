//! Defuzzifier
//!
//! Centroid (center of mass) of the aggregated distribution.

use crate::aggregate::AggregatedDistribution;

/// Crisp value returned when the aggregated curve is identically zero
pub const DEGENERATE_FALLBACK: f64 = 0.0;

/// Centroid of the aggregated distribution
///
/// `sum(x_i * degree_i) / sum(degree_i)`, or [`DEGENERATE_FALLBACK`] when no
/// rule contributed any mass.
pub fn centroid(distribution: &AggregatedDistribution) -> f64 {
    let mass = distribution.total_degree();
    if mass > 0.0 {
        distribution.xs().dot(distribution.degrees()) / mass
    } else {
        tracing::warn!(
            samples = distribution.len(),
            fallback = DEGENERATE_FALLBACK,
            "aggregated distribution is empty, no rule matched the inputs"
        );
        DEGENERATE_FALLBACK
    }
}

/// Centroid over raw `(x, degree)` pairs
pub fn centroid_points(points: &[(f64, f64)]) -> f64 {
    let (moment, mass) = points
        .iter()
        .fold((0.0, 0.0), |(moment, mass), &(x, degree)| {
            (moment + x * degree, mass + degree)
        });
    if mass > 0.0 {
        moment / mass
    } else {
        DEGENERATE_FALLBACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::{aggregate, Discretization};
    use crate::rules::{AllowanceCategory, FiredRule};

    #[test]
    fn test_zero_distribution_falls_back() {
        let dist = aggregate(&[], &Discretization::default());
        let value = centroid(&dist);
        assert_eq!(value, DEGENERATE_FALLBACK);
        assert!(!value.is_nan());
    }

    #[test]
    fn test_symmetric_curve_centroid() {
        // menengah is a symmetric triangle around 500k
        let d = Discretization::new(0.0, 1_000_000.0, 5).unwrap();
        let dist = aggregate(
            &[FiredRule {
                strength: 0.5,
                output: AllowanceCategory::Medium,
            }],
            &d,
        );
        assert_eq!(centroid(&dist), 500_000.0);
    }

    #[test]
    fn test_clipped_small_curve() {
        let d = Discretization::new(0.0, 1_000_000.0, 5).unwrap();
        let dist = aggregate(
            &[FiredRule {
                strength: 1.0,
                output: AllowanceCategory::Small,
            }],
            &d,
        );
        assert_eq!(centroid(&dist), 125_000.0);
    }

    #[test]
    fn test_points_matches_distribution() {
        let dist = aggregate(
            &[
                FiredRule {
                    strength: 0.25,
                    output: AllowanceCategory::Small,
                },
                FiredRule {
                    strength: 0.2,
                    output: AllowanceCategory::Medium,
                },
            ],
            &Discretization::default(),
        );
        let points: Vec<_> = dist.points().collect();
        assert!((centroid(&dist) - centroid_points(&points)).abs() < 1e-6);
    }

    #[test]
    fn test_points_empty_and_zero() {
        assert_eq!(centroid_points(&[]), DEGENERATE_FALLBACK);
        assert_eq!(centroid_points(&[(1.0, 0.0), (2.0, 0.0)]), DEGENERATE_FALLBACK);
        assert_eq!(centroid_points(&[(2.0, 1.0), (4.0, 1.0)]), 3.0);
    }
}
