//! Statutory rates of the basic pension scheme and the rounding rules used with them

/// Share of the monthly salary paid into the personal account
pub const PERSONAL_CONTRIBUTION_RATE: f64 = 0.08;

/// Share of the monthly salary paid into the pooled (basic pension) fund
pub const POOLED_CONTRIBUTION_RATE: f64 = 0.20;

/// Upper bound of the yearly contribution index
pub const MAX_PAYMENT_INDEX: f64 = 3.0;

/// Upper bound of contribution months recorded for one calendar year
pub const MAX_PAYMENT_MONTHS: u32 = 24;

/// Assumed annual growth of the social average salary
pub const DEFAULT_WAGE_GROWTH: f64 = 0.01;

/// Number of post-retirement years in the payout schedule
pub const DEFAULT_SCHEDULE_YEARS: u32 = 20;

/// Basic pension accrual per year of contributions (1% of the base)
pub const BASIC_PENSION_ACCRUAL: f64 = 0.01;

/// Round half away from zero to `decimals` places
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Contribution index for one year: salary over social average, 2 decimals, capped
pub fn payment_index(monthly_salary: f64, social_average_salary: f64) -> f64 {
    if social_average_salary > 0.0 {
        round_to(monthly_salary / social_average_salary, 2).min(MAX_PAYMENT_INDEX)
    } else {
        0.0
    }
}

/// Personal account contribution for a year
pub fn personal_contribution(monthly_salary: f64, payment_months: u32) -> f64 {
    monthly_salary * PERSONAL_CONTRIBUTION_RATE * payment_months as f64
}

/// Pooled fund contribution for a year
pub fn pooled_contribution(monthly_salary: f64, payment_months: u32) -> f64 {
    monthly_salary * POOLED_CONTRIBUTION_RATE * payment_months as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_round_to() {
        assert_relative_eq!(round_to(0.967305, 2), 0.97);
        assert_relative_eq!(round_to(20.04, 1), 20.0);
        assert_relative_eq!(round_to(2424.479, 0), 2424.0);
    }

    #[test]
    fn test_payment_index_capped() {
        assert_relative_eq!(payment_index(10_000.0, 10_338.0), 0.97);
        assert_relative_eq!(payment_index(50_000.0, 10_338.0), 3.0);
        assert_relative_eq!(payment_index(10_000.0, 0.0), 0.0);
    }

    #[test]
    fn test_contributions() {
        assert_relative_eq!(personal_contribution(10_000.0, 12), 9_600.0);
        assert_relative_eq!(pooled_contribution(10_000.0, 12), 24_000.0);
    }
}
