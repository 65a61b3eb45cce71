//! Aggregator
//!
//! Mamdani implication and aggregation over a discretized output domain:
//! every fired rule clips its output curve at its strength (min) and the
//! clipped curves are united pointwise (max).

use ndarray::{Array1, Zip};
use serde::{de, Deserialize, Deserializer, Serialize};

use crate::error::{InferenceError, Result};
use crate::rules::FiredRule;

/// Lower bound of the reference output domain
pub const DEFAULT_LOWER: f64 = 0.0;
/// Upper bound of the reference output domain
pub const DEFAULT_UPPER: f64 = 1_000_000.0;
/// Number of evenly spaced samples in the reference model
pub const DEFAULT_RESOLUTION: usize = 1000;
/// Largest accepted sample count
pub const MAX_RESOLUTION: usize = 10_000_000;

/// Sampling of the output domain
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Discretization {
    lower: f64,
    upper: f64,
    resolution: usize,
}

impl Discretization {
    pub fn new(lower: f64, upper: f64, resolution: usize) -> Result<Self> {
        if !lower.is_finite() || !upper.is_finite() {
            return Err(InferenceError::InvalidDiscretization(format!(
                "bounds must be finite, got [{}, {}]",
                lower, upper
            )));
        }
        if upper <= lower {
            return Err(InferenceError::InvalidDiscretization(format!(
                "upper bound {} must exceed lower bound {}",
                upper, lower
            )));
        }
        if resolution == 0 || resolution > MAX_RESOLUTION {
            return Err(InferenceError::InvalidDiscretization(format!(
                "resolution must be between 1 and {}, got {}",
                MAX_RESOLUTION, resolution
            )));
        }
        Ok(Self {
            lower,
            upper,
            resolution,
        })
    }

    pub fn lower(&self) -> f64 {
        self.lower
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }

    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// Distance between neighbouring samples (0 for a single sample)
    pub fn step(&self) -> f64 {
        if self.resolution > 1 {
            (self.upper - self.lower) / (self.resolution - 1) as f64
        } else {
            0.0
        }
    }

    /// Evenly spaced sample points, both bounds included
    pub fn samples(&self) -> Array1<f64> {
        let n = self.resolution;
        let step = self.step();
        Array1::from_shape_fn(n, |i| {
            if n > 1 && i == n - 1 {
                self.upper
            } else {
                self.lower + step * i as f64
            }
        })
    }
}

impl Default for Discretization {
    fn default() -> Self {
        Self {
            lower: DEFAULT_LOWER,
            upper: DEFAULT_UPPER,
            resolution: DEFAULT_RESOLUTION,
        }
    }
}

/// Envelope of all clipped output curves, sampled at `xs`
///
/// `xs` and `degrees` always have the same length.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregatedDistribution {
    xs: Array1<f64>,
    degrees: Array1<f64>,
}

#[derive(Deserialize)]
struct DistributionParts {
    xs: Array1<f64>,
    degrees: Array1<f64>,
}

impl<'de> Deserialize<'de> for AggregatedDistribution {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let parts = DistributionParts::deserialize(deserializer)?;
        Self::from_parts(parts.xs, parts.degrees).map_err(de::Error::custom)
    }
}

impl AggregatedDistribution {
    /// Pair sample points with degrees, rejecting mismatched lengths
    pub fn from_parts(xs: Array1<f64>, degrees: Array1<f64>) -> Result<Self> {
        if xs.len() != degrees.len() {
            return Err(InferenceError::MismatchedDistribution {
                xs: xs.len(),
                degrees: degrees.len(),
            });
        }
        Ok(Self { xs, degrees })
    }

    /// All-zero distribution over the discretization
    pub fn zeros(discretization: &Discretization) -> Self {
        let xs = discretization.samples();
        let degrees = Array1::zeros(xs.len());
        Self { xs, degrees }
    }

    /// Fold one fired rule into the envelope
    pub fn absorb(&mut self, fired: &FiredRule) {
        let strength = fired.strength;
        let output = fired.output;
        Zip::from(&mut self.degrees)
            .and(&self.xs)
            .for_each(|degree, &x| *degree = degree.max(strength.min(output.degree(x))));
    }

    pub fn xs(&self) -> &Array1<f64> {
        &self.xs
    }

    pub fn degrees(&self) -> &Array1<f64> {
        &self.degrees
    }

    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// `(x, degree)` pairs in ascending x order
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.xs.iter().copied().zip(self.degrees.iter().copied())
    }

    pub fn total_degree(&self) -> f64 {
        self.degrees.sum()
    }

    /// True when no rule contributed anything
    pub fn is_zero(&self) -> bool {
        self.degrees.iter().all(|d| *d == 0.0)
    }

    /// Highest degree reached anywhere on the domain
    pub fn peak(&self) -> f64 {
        self.degrees.iter().copied().fold(0.0, f64::max)
    }
}

/// Build the aggregated distribution for a set of fired rules
pub fn aggregate(fired: &[FiredRule], discretization: &Discretization) -> AggregatedDistribution {
    let mut distribution = AggregatedDistribution::zeros(discretization);
    for rule in fired {
        distribution.absorb(rule);
    }
    tracing::trace!(
        rules = fired.len(),
        samples = distribution.len(),
        peak = distribution.peak(),
        "aggregated rule outputs"
    );
    distribution
}
