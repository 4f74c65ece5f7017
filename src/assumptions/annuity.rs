//! Pension payment months: the divisor that annuitizes the personal account

use std::collections::BTreeMap;

/// Payment months by retirement age, 50 through 70
const PAYMENT_MONTHS_BY_AGE: [(u8, u32); 21] = [
    (50, 195), (51, 190), (52, 185), (53, 180), (54, 175), (55, 170),
    (56, 164), (57, 158), (58, 152), (59, 145), (60, 139), (61, 132),
    (62, 125), (63, 117), (64, 109), (65, 101), (66, 93), (67, 84),
    (68, 75), (69, 65), (70, 56),
];

/// Lookup of the personal account divisor by retirement age
#[derive(Debug, Clone)]
pub struct PensionMonthsTable {
    months: BTreeMap<u8, u32>,
}

impl PensionMonthsTable {
    /// Statutory divisor table
    pub fn statutory() -> Self {
        Self {
            months: PAYMENT_MONTHS_BY_AGE.iter().copied().collect(),
        }
    }

    /// Create from loaded CSV data
    pub fn from_loaded(rows: &[(u8, u32)]) -> Self {
        Self {
            months: rows.iter().copied().collect(),
        }
    }

    /// Divisor for a retirement age; ages outside the table map to 0
    pub fn pension_months_for_age(&self, age: u8) -> u32 {
        self.months.get(&age).copied().unwrap_or(0)
    }
}

impl Default for PensionMonthsTable {
    fn default() -> Self {
        Self::statutory()
    }
}
