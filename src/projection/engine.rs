//! Pension projection: contribution aggregates and the post-retirement payout schedule

use crate::assumptions::statutory::{
    personal_contribution, pooled_contribution, round_to, BASIC_PENSION_ACCRUAL,
    DEFAULT_SCHEDULE_YEARS, DEFAULT_WAGE_GROWTH,
};
use crate::assumptions::Assumptions;
use crate::profile::UserInfo;
use crate::records::ContributionRecord;

use super::result::{PensionDetail, PensionSummary, ProjectionResult};

/// Configuration for a projection run
#[derive(Debug, Clone)]
pub struct ProjectionConfig {
    /// Number of years in the payout schedule
    pub schedule_years: u32,

    /// Annual growth applied to the basic pension base after each schedule year
    pub wage_growth: f64,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            schedule_years: DEFAULT_SCHEDULE_YEARS,
            wage_growth: DEFAULT_WAGE_GROWTH,
        }
    }
}

/// Sums over a contribution history
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContributionTotals {
    pub total_months: u64,
    pub payment_years: f64,
    pub basic_pension_total: f64,
    pub personal_pension_total: f64,
    pub average_index: f64,
}

impl ContributionTotals {
    /// Records without contribution months add nothing
    pub fn from_records(records: &[ContributionRecord]) -> Self {
        let total_months: u64 = records.iter().map(|r| u64::from(r.payment_months)).sum();
        let basic_pension_total: f64 = records
            .iter()
            .map(|r| pooled_contribution(r.monthly_salary, r.payment_months))
            .sum();
        let personal_pension_total: f64 = records
            .iter()
            .map(|r| personal_contribution(r.monthly_salary, r.payment_months))
            .sum();

        let contributing: Vec<f64> = records
            .iter()
            .filter(|r| r.has_contributions())
            .map(|r| r.payment_index)
            .collect();
        let average_index = if contributing.is_empty() {
            0.0
        } else {
            round_to(contributing.iter().sum::<f64>() / contributing.len() as f64, 2)
        };

        Self {
            total_months,
            payment_years: round_to(total_months as f64 / 12.0, 1),
            basic_pension_total,
            personal_pension_total,
            average_index,
        }
    }
}

/// Monthly pension for one schedule year
///
/// A zero divisor yields a zero personal account pension.
pub fn pension_detail(
    year: i32,
    base_salary: f64,
    average_index: f64,
    payment_years: f64,
    personal_pension_total: f64,
    pension_months: u32,
) -> PensionDetail {
    let basic_pension =
        (base_salary * (1.0 + average_index) / 2.0 * payment_years * BASIC_PENSION_ACCRUAL).round();
    let personal_account_pension = if pension_months > 0 {
        (personal_pension_total / pension_months as f64).round()
    } else {
        0.0
    };

    PensionDetail {
        year,
        social_average_salary: base_salary.round(),
        basic_pension,
        personal_account_pension,
        monthly_pension: basic_pension + personal_account_pension,
    }
}

/// Main projection engine
#[derive(Debug, Clone)]
pub struct PensionProjector {
    assumptions: Assumptions,
    config: ProjectionConfig,
}

impl PensionProjector {
    /// Create a new projector with given tables and config
    pub fn new(assumptions: Assumptions, config: ProjectionConfig) -> Self {
        Self { assumptions, config }
    }

    pub fn assumptions(&self) -> &Assumptions {
        &self.assumptions
    }

    /// Aggregate the history and project the payout schedule
    pub fn project(&self, info: &UserInfo, records: &[ContributionRecord]) -> ProjectionResult {
        let totals = ContributionTotals::from_records(records);
        let retirement_age = info.retirement_age();
        let retirement_year = info.retirement_year();
        let pension_months = self.assumptions.pension_months_for_age(retirement_age);

        if pension_months == 0 {
            log::warn!(
                "no pension payment months for retirement age {}; personal account pension set to 0",
                retirement_age
            );
        }

        log::debug!(
            "projecting from {}: {} months, avg index {}, personal total {:.2}",
            retirement_year,
            totals.total_months,
            totals.average_index,
            totals.personal_pension_total
        );

        let summary = PensionSummary {
            retirement_age,
            retirement_year,
            retirement_date: info.retirement_date(),
            total_months: totals.total_months,
            payment_years: totals.payment_years,
            basic_pension_total: totals.basic_pension_total,
            personal_pension_total: totals.personal_pension_total,
            average_index: totals.average_index,
            pension_months,
        };

        let schedule = self.schedule(retirement_year, &totals, pension_months);

        ProjectionResult { summary, schedule }
    }

    fn schedule(&self, retirement_year: i32, totals: &ContributionTotals, pension_months: u32) -> Vec<PensionDetail> {
        let salary = &self.assumptions.salary;
        let mut base_salary = salary
            .tabulated(retirement_year - 1)
            .unwrap_or_else(|| salary.latest());

        let mut schedule = Vec::with_capacity(self.config.schedule_years as usize);
        for offset in 0..self.config.schedule_years {
            schedule.push(pension_detail(
                retirement_year + offset as i32,
                base_salary,
                totals.average_index,
                totals.payment_years,
                totals.personal_pension_total,
                pension_months,
            ));
            base_salary = (base_salary * (1.0 + self.config.wage_growth)).round();
        }
        schedule
    }
}

impl Default for PensionProjector {
    fn default() -> Self {
        Self::new(Assumptions::default_tables(), ProjectionConfig::default())
    }
}
