//! Fuzzy allowance (tunjangan) inference
//!
//! Mamdani-style pipeline computing an employee allowance from age, tenure
//! and base salary:
//! - Membership functions (fuzzification)
//! - Rule base (firing strength via min)
//! - Aggregation (implication via min, union via max)
//! - Centroid defuzzification

pub mod aggregate;
pub mod batch;
pub mod defuzzify;
pub mod error;
pub mod inference;
pub mod membership;
pub mod record;
pub mod rules;

pub use aggregate::{aggregate, AggregatedDistribution, Discretization};
pub use batch::{evaluate_batch, evaluate_record};
pub use defuzzify::{centroid, centroid_points, DEGENERATE_FALLBACK};
pub use error::{BatchError, InferenceError, Result};
pub use inference::{
    compute_allowance, output_curves, AllowanceEngine, ApplicantProfile, Inference, OutputCurves,
};
pub use membership::{
    Category, LinguisticVariable, Memberships, Thresholds, AGE, ALLOWANCE, SALARY, TENURE,
};
pub use record::{AllowanceRow, EmployeeRecord};
pub use rules::{AllowanceCategory, FiredRule, Fuzzified, Rule, RuleBase, REFERENCE_RULES};
