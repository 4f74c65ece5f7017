//! One row of the contribution history

use serde::{Deserialize, Serialize};

use crate::assumptions::statutory::{
    payment_index, personal_contribution, MAX_PAYMENT_MONTHS, PERSONAL_CONTRIBUTION_RATE,
};

/// Contributions for a single calendar year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionRecord {
    pub year: i32,

    /// Social average salary for the year (projected past the published range)
    pub social_average_salary: f64,

    /// Months with contributions paid, 0-24
    pub payment_months: u32,

    pub monthly_salary: f64,

    /// Personal account contributions for the year
    pub yearly_payment: f64,

    /// Monthly salary relative to the social average, capped at 3
    pub payment_index: f64,
}

/// A single user edit to a record; exactly one field changes per edit
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RecordEdit {
    /// Out-of-range values are clamped to 0-24
    PaymentMonths(i64),
    MonthlySalary(f64),
    YearlyPayment(f64),
}

impl ContributionRecord {
    /// Empty record for a year
    pub fn new(year: i32, social_average_salary: f64) -> Self {
        Self {
            year,
            social_average_salary,
            payment_months: 0,
            monthly_salary: 0.0,
            yearly_payment: 0.0,
            payment_index: 0.0,
        }
    }

    /// Whether this year counts towards the aggregates
    pub fn has_contributions(&self) -> bool {
        self.payment_months > 0
    }

    /// Apply an edit and re-derive the dependent fields
    pub fn apply_edit(&mut self, edit: RecordEdit) {
        match edit {
            RecordEdit::PaymentMonths(months) => {
                self.payment_months = clamp_months(months);
                if self.monthly_salary > 0.0 {
                    self.yearly_payment = personal_contribution(self.monthly_salary, self.payment_months);
                }
            }
            RecordEdit::MonthlySalary(salary) => {
                self.monthly_salary = salary.max(0.0);
                self.yearly_payment = personal_contribution(self.monthly_salary, self.payment_months);
            }
            RecordEdit::YearlyPayment(payment) => {
                self.yearly_payment = payment.max(0.0);
                self.monthly_salary = if self.payment_months > 0 {
                    (self.yearly_payment / (PERSONAL_CONTRIBUTION_RATE * self.payment_months as f64)).round()
                } else {
                    0.0
                };
            }
        }
        self.refresh_index();
    }

    /// Take months, salary and payment from another row, keeping this row's average
    pub fn copy_contributions_from(&mut self, source: &ContributionRecord) {
        self.payment_months = source.payment_months;
        self.monthly_salary = source.monthly_salary;
        self.yearly_payment = source.yearly_payment;
        self.refresh_index();
    }

    pub fn refresh_index(&mut self) {
        self.payment_index = payment_index(self.monthly_salary, self.social_average_salary);
    }
}

fn clamp_months(months: i64) -> u32 {
    months.clamp(0, MAX_PAYMENT_MONTHS as i64) as u32
}
