//! Edits to a contribution history
//!
//! Both operations take the current sequence and return the updated one,
//! leaving the input untouched.

use crate::error::{PensionError, Result};

use super::{ContributionRecord, RecordEdit};

/// Apply one edit to the record at `index`
pub fn update_record(
    records: &[ContributionRecord],
    index: usize,
    edit: RecordEdit,
) -> Result<Vec<ContributionRecord>> {
    check_index(records, index)?;

    let mut updated = records.to_vec();
    updated[index].apply_edit(edit);
    Ok(updated)
}

/// Copy months, salary and payment from `source_index` into every later row
///
/// Each target row recomputes its index against its own social average salary.
pub fn copy_forward(records: &[ContributionRecord], source_index: usize) -> Result<Vec<ContributionRecord>> {
    check_index(records, source_index)?;

    let mut updated = records.to_vec();
    let (head, tail) = updated.split_at_mut(source_index + 1);
    let source = &head[source_index];
    for record in tail.iter_mut() {
        record.copy_contributions_from(source);
    }
    Ok(updated)
}

/// Position of the record for a calendar year
pub fn index_of_year(records: &[ContributionRecord], year: i32) -> Option<usize> {
    records.iter().position(|r| r.year == year)
}

fn check_index(records: &[ContributionRecord], index: usize) -> Result<()> {
    if index < records.len() {
        Ok(())
    } else {
        Err(PensionError::RecordIndex {
            index,
            len: records.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assumptions::Assumptions;
    use crate::profile::UserInfo;
    use crate::records::build_records;
    use approx::assert_relative_eq;

    fn default_records() -> Vec<ContributionRecord> {
        build_records(&UserInfo::default(), &Assumptions::default_tables())
    }

    #[test]
    fn test_scenario_2020() {
        let records = default_records();
        let idx = index_of_year(&records, 2020).unwrap();

        let records = update_record(&records, idx, RecordEdit::PaymentMonths(12)).unwrap();
        let records = update_record(&records, idx, RecordEdit::MonthlySalary(10_000.0)).unwrap();

        assert_relative_eq!(records[idx].yearly_payment, 9_600.0);
        assert_relative_eq!(records[idx].payment_index, 0.97);
    }

    #[test]
    fn test_update_is_idempotent() {
        let records = default_records();
        let edits = [
            RecordEdit::PaymentMonths(12),
            RecordEdit::MonthlySalary(8_000.0),
            RecordEdit::YearlyPayment(7_000.0),
            RecordEdit::PaymentMonths(40),
        ];

        let mut state = records;
        for edit in edits {
            let once = update_record(&state, 5, edit).unwrap();
            let twice = update_record(&once, 5, edit).unwrap();
            assert_eq!(once, twice, "edit {:?}", edit);
            state = once;
        }
    }

    #[test]
    fn test_update_leaves_input_untouched() {
        let records = default_records();
        let updated = update_record(&records, 0, RecordEdit::MonthlySalary(3_000.0)).unwrap();
        assert_relative_eq!(records[0].monthly_salary, 0.0);
        assert_relative_eq!(updated[0].monthly_salary, 3_000.0);
    }

    #[test]
    fn test_update_out_of_range() {
        let records = default_records();
        let err = update_record(&records, records.len(), RecordEdit::PaymentMonths(1)).unwrap_err();
        assert!(matches!(err, PensionError::RecordIndex { index: 41, len: 41 }));
    }

    #[test]
    fn test_copy_forward() {
        let records = default_records();
        let records = update_record(&records, 0, RecordEdit::PaymentMonths(6)).unwrap();
        let records = update_record(&records, 3, RecordEdit::PaymentMonths(12)).unwrap();
        let records = update_record(&records, 3, RecordEdit::MonthlySalary(5_000.0)).unwrap();

        let copied = copy_forward(&records, 3).unwrap();

        assert_eq!(copied[..3], records[..3]);
        for record in &copied[3..] {
            assert_eq!(record.payment_months, 12);
            assert_relative_eq!(record.monthly_salary, 5_000.0);
            assert_relative_eq!(record.yearly_payment, 4_800.0);
            let expected = ((5_000.0 / record.social_average_salary) * 100.0_f64).round() / 100.0;
            assert_relative_eq!(record.payment_index, expected.min(3.0));
        }

        // 2007 average is 2892, 2044 is projected
        assert_relative_eq!(copied[3].payment_index, 1.73);
        assert!(copied[40].payment_index < copied[3].payment_index);
    }

    #[test]
    fn test_copy_forward_last_row_is_noop() {
        let records = default_records();
        let last = records.len() - 1;
        assert_eq!(copy_forward(&records, last).unwrap(), records);
        assert!(copy_forward(&records, last + 1).is_err());
    }
}
