//! Allowance Inference Engine
//!
//! Composes fuzzification, rule evaluation, aggregation and centroid
//! defuzzification into one pure pipeline per applicant.

use ndarray::{Array1, ArrayView1};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::aggregate::{aggregate, AggregatedDistribution, Discretization};
use crate::defuzzify::centroid;
use crate::error::{InferenceError, Result};
use crate::membership::ALLOWANCE;
use crate::rules::{AllowanceCategory, FiredRule, Fuzzified, RuleBase};

static REFERENCE_ENGINE: Lazy<AllowanceEngine> = Lazy::new(AllowanceEngine::default);

/// Crisp inputs of one pipeline run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ApplicantProfile {
    pub age: f64,
    pub tenure_years: f64,
    pub salary: f64,
}

impl ApplicantProfile {
    pub fn new(age: f64, tenure_years: f64, salary: f64) -> Self {
        Self {
            age,
            tenure_years,
            salary,
        }
    }

    /// Reject NaN and infinite inputs
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("age", self.age),
            ("tenure_years", self.tenure_years),
            ("salary", self.salary),
        ] {
            if !value.is_finite() {
                return Err(InferenceError::NonFiniteInput { field, value });
            }
        }
        Ok(())
    }
}

/// Every intermediate artifact of one run, for inspection and plotting
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Inference {
    pub profile: ApplicantProfile,
    pub fuzzified: Fuzzified,
    pub fired: Vec<FiredRule>,
    pub distribution: AggregatedDistribution,
    pub allowance: f64,
}

/// The three allowance category curves over a domain sample
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputCurves {
    pub xs: Array1<f64>,
    pub small: Array1<f64>,
    pub medium: Array1<f64>,
    pub large: Array1<f64>,
}

/// Rule base plus output discretization
#[derive(Debug, Clone, PartialEq)]
pub struct AllowanceEngine {
    rule_base: RuleBase,
    discretization: Discretization,
}

impl AllowanceEngine {
    pub fn new(rule_base: RuleBase, discretization: Discretization) -> Self {
        Self {
            rule_base,
            discretization,
        }
    }

    /// Reference rules with a custom discretization
    pub fn with_discretization(discretization: Discretization) -> Self {
        Self::new(RuleBase::reference(), discretization)
    }

    pub fn rule_base(&self) -> &RuleBase {
        &self.rule_base
    }

    pub fn discretization(&self) -> &Discretization {
        &self.discretization
    }

    /// Run the full pipeline and keep every intermediate result
    pub fn infer(&self, profile: &ApplicantProfile) -> Result<Inference> {
        profile.validate()?;

        let fuzzified = Fuzzified::new(profile.age, profile.tenure_years, profile.salary);
        let fired = self.rule_base.fire(&fuzzified);
        tracing::debug!(
            age = profile.age,
            tenure_years = profile.tenure_years,
            salary = profile.salary,
            strengths = ?fired.iter().map(|f| f.strength).collect::<Vec<_>>(),
            "fired allowance rules"
        );

        let distribution = aggregate(&fired, &self.discretization);
        let allowance = centroid(&distribution);

        Ok(Inference {
            profile: *profile,
            fuzzified,
            fired,
            distribution,
            allowance,
        })
    }

    /// Crisp allowance only
    pub fn compute(&self, profile: &ApplicantProfile) -> Result<f64> {
        self.infer(profile).map(|inference| inference.allowance)
    }

    /// Output category curves over the engine's own discretization
    pub fn reference_curves(&self) -> OutputCurves {
        output_curves(&self.discretization.samples())
    }
}

impl Default for AllowanceEngine {
    fn default() -> Self {
        Self::new(RuleBase::reference(), Discretization::default())
    }
}

/// Evaluate the kecil / menengah / besar curves over an external sample
pub fn output_curves<'a>(xs: impl Into<ArrayView1<'a, f64>>) -> OutputCurves {
    let xs = xs.into();
    let [small, medium, large] =
        AllowanceCategory::ALL.map(|output| ALLOWANCE.curve(output.category(), xs));
    OutputCurves {
        xs: xs.to_owned(),
        small,
        medium,
        large,
    }
}

/// Compute the allowance for one applicant with the reference model
pub fn compute_allowance(age: f64, tenure_years: f64, salary: f64) -> Result<f64> {
    REFERENCE_ENGINE.compute(&ApplicantProfile::new(age, tenure_years, salary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::membership::Category;
    use crate::rules::Rule;

    #[test]
    fn test_reference_scenario() {
        let allowance = compute_allowance(30.0, 6.0, 750_000.0).unwrap();
        assert!((allowance - 229_547.375_715_786_6).abs() < 1e-3);
    }

    #[test]
    fn test_two_rule_scenario() {
        let allowance = compute_allowance(30.0, 6.0, 875_000.0).unwrap();
        assert!((allowance - 343_706.955_817_201_2).abs() < 1e-3);
    }

    #[test]
    fn test_large_allowance_scenario() {
        let allowance = compute_allowance(45.0, 18.0, 1_600_000.0).unwrap();
        assert!((allowance - 768_493.845_068_718_4).abs() < 1e-3);
    }

    #[test]
    fn test_uncovered_inputs_fall_back_to_zero() {
        assert_eq!(compute_allowance(60.0, 2.0, 500_000.0).unwrap(), 0.0);
    }

    #[test]
    fn test_non_finite_input_rejected() {
        let err = compute_allowance(f64::NAN, 6.0, 750_000.0).unwrap_err();
        assert!(matches!(
            err,
            InferenceError::NonFiniteInput { field: "age", .. }
        ));

        let err = compute_allowance(30.0, 6.0, f64::INFINITY).unwrap_err();
        assert!(matches!(
            err,
            InferenceError::NonFiniteInput { field: "salary", .. }
        ));
    }

    #[test]
    fn test_idempotent() {
        let a = compute_allowance(33.0, 7.5, 900_000.0).unwrap();
        let b = compute_allowance(33.0, 7.5, 900_000.0).unwrap();
        assert_eq!(a.to_bits(), b.to_bits());
    }

    #[test]
    fn test_infer_exposes_intermediates() {
        let engine = AllowanceEngine::default();
        let inference = engine
            .infer(&ApplicantProfile::new(30.0, 6.0, 750_000.0))
            .unwrap();

        assert_eq!(inference.fired.len(), 4);
        assert_eq!(inference.distribution.len(), 1000);
        assert!((inference.distribution.peak() - 1.0 / 3.0).abs() < 1e-12);
        assert!((inference.fuzzified.tenure.low - 0.4).abs() < 1e-12);
        assert_eq!(inference.allowance, engine.compute(&inference.profile).unwrap());
    }

    #[test]
    fn test_resolution_is_a_parameter() {
        let coarse = AllowanceEngine::with_discretization(
            Discretization::new(0.0, 1_000_000.0, 5).unwrap(),
        );
        // one fired rule, kecil clipped at 1/3: [1/3, 1/3, 0, 0, 0]
        let allowance = coarse
            .compute(&ApplicantProfile::new(30.0, 6.0, 750_000.0))
            .unwrap();
        assert!((allowance - 125_000.0).abs() < 1e-6);
    }

    #[test]
    fn test_custom_rule_base_covers_gap() {
        let mut rules = RuleBase::reference().rules().to_vec();
        rules.push(Rule::new(
            Category::High,
            Category::Low,
            Category::Low,
            AllowanceCategory::Small,
        ));
        let engine = AllowanceEngine::new(RuleBase::new(rules), Discretization::default());
        let allowance = engine
            .compute(&ApplicantProfile::new(60.0, 2.0, 500_000.0))
            .unwrap();
        assert!(allowance > 0.0 && allowance < 500_000.0);
    }

    #[test]
    fn test_output_curves() {
        let curves = output_curves(&[0.0, 500_000.0, 1_000_000.0][..]);
        assert_eq!(curves.small.to_vec(), vec![1.0, 0.0, 0.0]);
        assert_eq!(curves.medium.to_vec(), vec![0.0, 1.0, 0.0]);
        assert_eq!(curves.large.to_vec(), vec![0.0, 0.0, 1.0]);

        let reference = AllowanceEngine::default().reference_curves();
        assert_eq!(reference.xs.len(), 1000);
    }

    #[test]
    fn test_output_curves_follow_category_degrees() {
        let xs = [125_000.0, 375_000.0, 600_000.0, 900_000.0];
        let curves = output_curves(&xs[..]);
        for (i, x) in xs.iter().enumerate() {
            assert_eq!(curves.small[i], AllowanceCategory::Small.degree(*x));
            assert_eq!(curves.medium[i], AllowanceCategory::Medium.degree(*x));
            assert_eq!(curves.large[i], AllowanceCategory::Large.degree(*x));
        }
        assert_eq!(curves.xs.to_vec(), xs.to_vec());
    }
}
