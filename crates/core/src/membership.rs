//! Membership Functions
//!
//! Piecewise-linear fuzzy partitions for the four linguistic variables of the
//! allowance model. Every variable is split into three overlapping categories
//! and evaluated by one generic ramp evaluator parameterized by [`Thresholds`].
//!
//! ```text
//!  1 |####\        /\        /####
//!    |     \      /  \      /
//!  0 |      \____/    \____/
//!      low        mid       high
//! ```

use ndarray::{Array1, ArrayView1};
use serde::{Deserialize, Serialize};

/// Linguistic category selector shared by all variables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Low,
    Mid,
    High,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Low, Category::Mid, Category::High];

    pub fn index(self) -> usize {
        match self {
            Category::Low => 0,
            Category::Mid => 1,
            Category::High => 2,
        }
    }
}

/// Breakpoints of one three-category partition
///
/// - low: `(low_zero - v) / low_width`, reaching 0 at `low_zero`
/// - mid: `min((v - mid_start) / mid_rise, (mid_end - v) / mid_fall)`
/// - high: `(v - high_start) / high_width`, leaving 0 at `high_start`
///
/// Each ramp is clamped to [0, 1]. All four widths must be positive and
/// finite, otherwise the ramps divide by zero and yield NaN.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    pub low_zero: f64,
    pub low_width: f64,
    pub mid_start: f64,
    pub mid_rise: f64,
    pub mid_end: f64,
    pub mid_fall: f64,
    pub high_start: f64,
    pub high_width: f64,
}

impl Thresholds {
    /// Degree of `value` in the given category
    pub fn degree(&self, category: Category, value: f64) -> f64 {
        debug_assert!(self.has_valid_widths(), "non-positive ramp width in {:?}", self);
        match category {
            Category::Low => clamp01((self.low_zero - value) / self.low_width),
            Category::Mid => clamp01(
                ((value - self.mid_start) / self.mid_rise)
                    .min((self.mid_end - value) / self.mid_fall),
            ),
            Category::High => clamp01((value - self.high_start) / self.high_width),
        }
    }

    pub fn has_valid_widths(&self) -> bool {
        [self.low_width, self.mid_rise, self.mid_fall, self.high_width]
            .iter()
            .all(|w| w.is_finite() && *w > 0.0)
    }

    /// Value at which the low category is still fully satisfied
    pub fn low_full(&self) -> f64 {
        self.low_zero - self.low_width
    }

    /// Value from which the high category is fully satisfied
    pub fn high_full(&self) -> f64 {
        self.high_start + self.high_width
    }
}

#[inline]
pub fn clamp01(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}

/// Membership degrees of a single crisp value
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Memberships {
    pub low: f64,
    pub mid: f64,
    pub high: f64,
}

impl Memberships {
    pub fn degree(&self, category: Category) -> f64 {
        match category {
            Category::Low => self.low,
            Category::Mid => self.mid,
            Category::High => self.high,
        }
    }

    pub fn as_array(&self) -> [f64; 3] {
        [self.low, self.mid, self.high]
    }
}

/// A named scalar domain partitioned into low/mid/high categories
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinguisticVariable {
    pub name: &'static str,
    /// Display labels in `Category::ALL` order
    pub labels: [&'static str; 3],
    pub thresholds: Thresholds,
}

impl LinguisticVariable {
    pub fn label(&self, category: Category) -> &'static str {
        self.labels[category.index()]
    }

    pub fn degree(&self, category: Category, value: f64) -> f64 {
        self.thresholds.degree(category, value)
    }

    /// Fuzzify a crisp value into all three category degrees
    pub fn fuzzify(&self, value: f64) -> Memberships {
        Memberships {
            low: self.degree(Category::Low, value),
            mid: self.degree(Category::Mid, value),
            high: self.degree(Category::High, value),
        }
    }

    /// Evaluate one category elementwise over a domain sample
    pub fn curve<'a>(&self, category: Category, xs: impl Into<ArrayView1<'a, f64>>) -> Array1<f64> {
        let thresholds = self.thresholds;
        xs.into().mapv(|x| thresholds.degree(category, x))
    }
}

/// Age in years (usia)
pub const AGE: LinguisticVariable = LinguisticVariable {
    name: "usia",
    labels: ["muda", "paruh_baya", "tua"],
    thresholds: Thresholds {
        low_zero: 35.0,
        low_width: 15.0,
        mid_start: 30.0,
        mid_rise: 10.0,
        mid_end: 50.0,
        mid_fall: 10.0,
        high_start: 45.0,
        high_width: 15.0,
    },
};

/// Tenure in years (masa kerja)
pub const TENURE: LinguisticVariable = LinguisticVariable {
    name: "masa_kerja",
    labels: ["sedikit", "sedang", "lama"],
    thresholds: Thresholds {
        low_zero: 10.0,
        low_width: 10.0,
        mid_start: 5.0,
        mid_rise: 5.0,
        mid_end: 20.0,
        mid_fall: 5.0,
        high_start: 15.0,
        high_width: 10.0,
    },
};

/// Base salary (gaji)
pub const SALARY: LinguisticVariable = LinguisticVariable {
    name: "gaji",
    labels: ["rendah", "sedang", "tinggi"],
    thresholds: Thresholds {
        low_zero: 1_000_000.0,
        low_width: 500_000.0,
        mid_start: 750_000.0,
        mid_rise: 250_000.0,
        mid_end: 1_500_000.0,
        mid_fall: 500_000.0,
        high_start: 1_250_000.0,
        high_width: 500_000.0,
    },
};

/// Allowance amount (tunjangan), the output variable
pub const ALLOWANCE: LinguisticVariable = LinguisticVariable {
    name: "tunjangan",
    labels: ["kecil", "menengah", "besar"],
    thresholds: Thresholds {
        low_zero: 500_000.0,
        low_width: 250_000.0,
        mid_start: 250_000.0,
        mid_rise: 250_000.0,
        mid_end: 750_000.0,
        mid_fall: 250_000.0,
        high_start: 500_000.0,
        high_width: 250_000.0,
    },
};
