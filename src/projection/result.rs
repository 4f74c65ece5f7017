//! Projection output structures

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::profile::YearMonth;

/// Monthly pension for one year after retirement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PensionDetail {
    pub year: i32,

    /// Prior-year social average salary used as the basic pension base
    pub social_average_salary: f64,

    pub basic_pension: f64,
    pub personal_account_pension: f64,
    pub monthly_pension: f64,
}

/// Aggregates over the contribution history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PensionSummary {
    pub retirement_age: u8,
    pub retirement_year: i32,
    pub retirement_date: YearMonth,

    /// Sum of contribution months over all years
    pub total_months: u64,

    /// Total months in years, one decimal
    pub payment_years: f64,

    /// Pooled fund contributions (20% of salary)
    pub basic_pension_total: f64,

    /// Personal account balance (8% of salary)
    pub personal_pension_total: f64,

    /// Mean yearly index over years with contributions, two decimals
    pub average_index: f64,

    /// Divisor for the personal account; 0 when the retirement age is not tabulated
    pub pension_months: u32,
}

/// Complete projection result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    pub summary: PensionSummary,
    pub schedule: Vec<PensionDetail>,
}

impl ProjectionResult {
    /// Monthly pension in the first year of retirement
    pub fn first_monthly_pension(&self) -> f64 {
        self.schedule.first().map(|d| d.monthly_pension).unwrap_or(0.0)
    }

    /// Write the payout schedule as CSV
    pub fn write_schedule<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        for detail in &self.schedule {
            csv_writer.serialize(detail)?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}
