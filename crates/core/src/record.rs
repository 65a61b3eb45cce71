//! Employee Records
//!
//! Row types exchanged with the tabular I/O layer. Field aliases accept the
//! original Indonesian column names.

use serde::{Deserialize, Serialize};

use crate::inference::ApplicantProfile;

/// One input row: identity plus the three crisp inputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    pub id: u64,
    #[serde(alias = "nama")]
    pub name: String,
    #[serde(alias = "usia")]
    pub age: f64,
    #[serde(alias = "masa_kerja", alias = "masa kerja")]
    pub tenure_years: f64,
    #[serde(alias = "gaji")]
    pub salary: f64,
}

impl EmployeeRecord {
    pub fn new(
        id: u64,
        name: impl Into<String>,
        age: f64,
        tenure_years: f64,
        salary: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            age,
            tenure_years,
            salary,
        }
    }

    pub fn profile(&self) -> ApplicantProfile {
        ApplicantProfile::new(self.age, self.tenure_years, self.salary)
    }

    /// Attach a computed allowance to this record
    pub fn with_allowance(&self, allowance: f64) -> AllowanceRow {
        AllowanceRow {
            id: self.id,
            name: self.name.clone(),
            allowance,
        }
    }
}

/// One output row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllowanceRow {
    pub id: u64,
    #[serde(alias = "nama")]
    pub name: String,
    #[serde(alias = "tunjangan")]
    pub allowance: f64,
}
