//! Rule Base
//!
//! Fixed IF-THEN rules over age, tenure and salary. A rule fires with the
//! minimum of its three selected input degrees (fuzzy AND).

use serde::{Deserialize, Serialize};

use crate::membership::{Category, Memberships, AGE, ALLOWANCE, SALARY, TENURE};

/// Output categories of the allowance variable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AllowanceCategory {
    /// kecil
    Small,
    /// menengah
    Medium,
    /// besar
    Large,
}

impl AllowanceCategory {
    pub const ALL: [AllowanceCategory; 3] = [
        AllowanceCategory::Small,
        AllowanceCategory::Medium,
        AllowanceCategory::Large,
    ];

    /// Partition category of the allowance variable this maps onto
    pub fn category(self) -> Category {
        match self {
            AllowanceCategory::Small => Category::Low,
            AllowanceCategory::Medium => Category::Mid,
            AllowanceCategory::Large => Category::High,
        }
    }

    /// Membership of `x` in this output category's curve
    pub fn degree(self, x: f64) -> f64 {
        ALLOWANCE.degree(self.category(), x)
    }

    pub fn label(self) -> &'static str {
        ALLOWANCE.label(self.category())
    }
}

/// One IF age AND tenure AND salary THEN output rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub age: Category,
    pub tenure: Category,
    pub salary: Category,
    pub output: AllowanceCategory,
}

impl Rule {
    pub const fn new(
        age: Category,
        tenure: Category,
        salary: Category,
        output: AllowanceCategory,
    ) -> Self {
        Self {
            age,
            tenure,
            salary,
            output,
        }
    }

    /// Firing strength against already fuzzified inputs
    pub fn strength(&self, inputs: &Fuzzified) -> f64 {
        inputs
            .age
            .degree(self.age)
            .min(inputs.tenure.degree(self.tenure))
            .min(inputs.salary.degree(self.salary))
    }

    /// Human readable form using the variables' labels
    pub fn describe(&self) -> String {
        format!(
            "{} AND {} AND {} -> {}",
            AGE.label(self.age),
            TENURE.label(self.tenure),
            SALARY.label(self.salary),
            self.output.label()
        )
    }
}

/// Reference rule set, in declaration order
pub const REFERENCE_RULES: [Rule; 4] = [
    // muda, sedikit, rendah
    Rule::new(Category::Low, Category::Low, Category::Low, AllowanceCategory::Small),
    // muda, sedang, sedang
    Rule::new(Category::Low, Category::Mid, Category::Mid, AllowanceCategory::Medium),
    // paruh_baya, lama, tinggi
    Rule::new(Category::Mid, Category::High, Category::High, AllowanceCategory::Large),
    // tua, lama, tinggi
    Rule::new(Category::High, Category::High, Category::High, AllowanceCategory::Large),
];

/// Membership triples of the three input variables
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Fuzzified {
    pub age: Memberships,
    pub tenure: Memberships,
    pub salary: Memberships,
}

impl Fuzzified {
    pub fn new(age: f64, tenure: f64, salary: f64) -> Self {
        Self {
            age: AGE.fuzzify(age),
            tenure: TENURE.fuzzify(tenure),
            salary: SALARY.fuzzify(salary),
        }
    }
}

/// A rule's firing strength paired with its output category
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FiredRule {
    pub strength: f64,
    pub output: AllowanceCategory,
}

/// Immutable list of rules
#[derive(Debug, Clone, PartialEq)]
pub struct RuleBase {
    rules: Vec<Rule>,
}

impl RuleBase {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn reference() -> Self {
        Self::new(REFERENCE_RULES.to_vec())
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Fire every rule against fuzzified inputs, one entry per rule
    pub fn fire(&self, inputs: &Fuzzified) -> Vec<FiredRule> {
        self.rules
            .iter()
            .map(|rule| FiredRule {
                strength: rule.strength(inputs),
                output: rule.output,
            })
            .collect()
    }

    /// Fuzzify the crisp inputs and fire every rule
    pub fn evaluate(&self, age: f64, tenure: f64, salary: f64) -> Vec<FiredRule> {
        self.fire(&Fuzzified::new(age, tenure, salary))
    }
}

impl Default for RuleBase {
    fn default() -> Self {
        Self::reference()
    }
}
