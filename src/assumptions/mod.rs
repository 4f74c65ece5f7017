//! Reference tables and statutory rates used by the pension calculation

mod annuity;
mod salary;
pub mod loader;
pub mod statutory;

pub use annuity::PensionMonthsTable;
pub use loader::LoadedTables;
pub use salary::SalaryTable;

use std::path::Path;

use crate::error::Result;

/// Container for all reference tables
#[derive(Debug, Clone, Default)]
pub struct Assumptions {
    pub salary: SalaryTable,
    pub pension_months: PensionMonthsTable,
}

impl Assumptions {
    /// Create assumptions from the built-in published tables
    pub fn default_tables() -> Self {
        Self {
            salary: SalaryTable::national_averages(),
            pension_months: PensionMonthsTable::statutory(),
        }
    }

    /// Load tables from CSV files in a specific directory
    pub fn from_csv_path(path: &Path) -> Result<Self> {
        let loaded = LoadedTables::load_from(path)?;
        log::debug!(
            "loaded {} salary rows and {} payment-month rows from {}",
            loaded.social_average_salary.len(),
            loaded.pension_months.len(),
            path.display()
        );

        Ok(Self {
            salary: SalaryTable::from_loaded(&loaded.social_average_salary),
            pension_months: PensionMonthsTable::from_loaded(&loaded.pension_months),
        })
    }

    /// Social average salary for a year, projected past the published range
    pub fn salary_for_year(&self, year: i32) -> f64 {
        self.salary.salary_for_year(year)
    }

    /// Personal account divisor for a retirement age
    pub fn pension_months_for_age(&self, age: u8) -> u32 {
        self.pension_months.pension_months_for_age(age)
    }
}
