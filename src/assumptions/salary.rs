//! Social average salary by calendar year
//!
//! Historical values come from the published provincial averages. Years past
//! the last published value are projected by compounding the wage growth one
//! year at a time, rounding to whole currency units at each step.

use std::collections::BTreeMap;

use super::statutory::DEFAULT_WAGE_GROWTH;

/// Published monthly social average salary, 1993-2024
const NATIONAL_AVERAGES: [(i32, f64); 32] = [
    (1993, 471.0), (1994, 617.0), (1995, 773.0), (1996, 889.0), (1997, 952.0),
    (1998, 1005.0), (1999, 1179.0), (2000, 1285.0), (2001, 1480.0), (2002, 1623.0),
    (2003, 1847.0), (2004, 2033.0), (2005, 2235.0), (2006, 2464.0), (2007, 2892.0),
    (2008, 3292.0), (2009, 3566.0), (2010, 3896.0), (2011, 4331.0), (2012, 4692.0),
    (2013, 5036.0), (2014, 5451.0), (2015, 5939.0), (2016, 6504.0), (2017, 7132.0),
    (2018, 8765.0), (2019, 9580.0), (2020, 10338.0), (2021, 11396.0), (2022, 12183.0),
    (2023, 12307.0), (2024, 12307.0),
];

/// Social average salary table with forward projection
#[derive(Debug, Clone)]
pub struct SalaryTable {
    values: BTreeMap<i32, f64>,
    growth_rate: f64,
}

impl SalaryTable {
    /// Built-in table of published averages
    pub fn national_averages() -> Self {
        Self::new(NATIONAL_AVERAGES.iter().copied().collect(), DEFAULT_WAGE_GROWTH)
    }

    pub fn new(values: BTreeMap<i32, f64>, growth_rate: f64) -> Self {
        Self { values, growth_rate }
    }

    /// Create from loaded CSV data
    pub fn from_loaded(values: &[(i32, f64)]) -> Self {
        Self::new(values.iter().copied().collect(), DEFAULT_WAGE_GROWTH)
    }

    /// Published value for a year, if any
    pub fn tabulated(&self, year: i32) -> Option<f64> {
        self.values.get(&year).copied()
    }

    pub fn last_tabulated_year(&self) -> Option<i32> {
        self.values.keys().next_back().copied()
    }

    /// Last published value
    pub fn latest(&self) -> f64 {
        self.values.values().next_back().copied().unwrap_or(0.0)
    }

    /// Whether the value for `year` is a projection rather than a published figure
    pub fn is_estimated(&self, year: i32) -> bool {
        self.last_tabulated_year().map_or(true, |last| year > last)
    }

    /// Social average salary for any year
    ///
    /// Untabulated years up to the last published year yield 0.
    pub fn salary_for_year(&self, year: i32) -> f64 {
        let Some(last) = self.last_tabulated_year() else {
            return 0.0;
        };
        if year <= last {
            return self.tabulated(year).unwrap_or(0.0);
        }

        let mut salary = self.latest();
        for _ in last..year {
            salary = (salary * (1.0 + self.growth_rate)).round();
        }
        salary
    }
}

impl Default for SalaryTable {
    fn default() -> Self {
        Self::national_averages()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tabulated_years_exact() {
        let table = SalaryTable::national_averages();
        for (year, value) in NATIONAL_AVERAGES {
            assert_eq!(table.salary_for_year(year), value);
        }
        assert_eq!(table.salary_for_year(2020), 10338.0);
        assert_eq!(table.salary_for_year(2024), 12307.0);
    }

    #[test]
    fn test_projection_rounds_each_year() {
        let table = SalaryTable::national_averages();
        assert_eq!(table.salary_for_year(2025), 12430.0);
        assert_eq!(table.salary_for_year(2026), 12554.0);

        // Compounding from the previous rounded year must match the direct lookup
        let mut expected = 12307.0_f64;
        for year in 2025..=2060 {
            expected = (expected * 1.01).round();
            assert_eq!(table.salary_for_year(year), expected, "year {}", year);
        }
    }

    #[test]
    fn test_years_before_table() {
        let table = SalaryTable::national_averages();
        assert_eq!(table.salary_for_year(1990), 0.0);
        assert!(!table.is_estimated(1990));
        assert!(!table.is_estimated(2024));
        assert!(table.is_estimated(2025));
    }

    #[test]
    fn test_empty_table() {
        let table = SalaryTable::new(BTreeMap::new(), 0.01);
        assert_eq!(table.salary_for_year(2030), 0.0);
        assert_eq!(table.latest(), 0.0);
        assert!(table.is_estimated(2000));
    }
}
