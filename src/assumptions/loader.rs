//! CSV-based reference table loader
//!
//! Loads reference tables from CSV files in data/tables/

use std::fs::File;
use std::path::Path;

use crate::error::{PensionError, Result};

/// Default path to the reference tables directory
pub const DEFAULT_TABLES_PATH: &str = "data/tables";

pub const SALARY_FILE: &str = "social_average_salary.csv";
pub const PENSION_MONTHS_FILE: &str = "pension_months.csv";

/// Load social average salaries from CSV
/// Returns Vec<(year, salary)> in file order
pub fn load_social_average_salary(path: &Path) -> Result<Vec<(i32, f64)>> {
    let file = File::open(path.join(SALARY_FILE))?;
    let mut reader = csv::Reader::from_reader(file);

    let mut rows = Vec::new();

    for result in reader.records() {
        let record = result?;
        let year: i32 = parse_field(&record, 0, SALARY_FILE)?;
        let salary: f64 = parse_field(&record, 1, SALARY_FILE)?;
        rows.push((year, salary));
    }

    Ok(rows)
}

/// Load pension payment months from CSV
/// Returns Vec<(retirement_age, months)>
pub fn load_pension_months(path: &Path) -> Result<Vec<(u8, u32)>> {
    let file = File::open(path.join(PENSION_MONTHS_FILE))?;
    let mut reader = csv::Reader::from_reader(file);

    let mut rows = Vec::new();

    for result in reader.records() {
        let record = result?;
        let age: u8 = parse_field(&record, 0, PENSION_MONTHS_FILE)?;
        let months: u32 = parse_field(&record, 1, PENSION_MONTHS_FILE)?;
        rows.push((age, months));
    }

    Ok(rows)
}

fn parse_field<T: std::str::FromStr>(record: &csv::StringRecord, idx: usize, file: &str) -> Result<T> {
    let raw = record
        .get(idx)
        .ok_or_else(|| PensionError::Table(format!("{}: missing column {}", file, idx)))?;
    raw.trim()
        .parse()
        .map_err(|_| PensionError::Table(format!("{}: cannot parse '{}'", file, raw)))
}

/// All reference tables loaded from one directory
#[derive(Debug, Clone)]
pub struct LoadedTables {
    pub social_average_salary: Vec<(i32, f64)>,
    pub pension_months: Vec<(u8, u32)>,
}

impl LoadedTables {
    /// Load all tables from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        Ok(Self {
            social_average_salary: load_social_average_salary(path)?,
            pension_months: load_pension_months(path)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_bundled_tables() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_TABLES_PATH);
        let result = LoadedTables::load_from(&path);
        assert!(result.is_ok(), "Failed to load tables: {:?}", result.err());

        let tables = result.unwrap();
        assert_eq!(tables.social_average_salary.len(), 32);
        assert_eq!(tables.social_average_salary[0], (1993, 471.0));
        assert!(tables.pension_months.contains(&(63, 117)));
    }

    #[test]
    fn test_missing_directory() {
        let result = LoadedTables::load_from(Path::new("does/not/exist"));
        assert!(matches!(result, Err(PensionError::Io(_))));
    }
}
