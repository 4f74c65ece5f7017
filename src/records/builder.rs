//! Default contribution history for a career

use crate::assumptions::Assumptions;
use crate::profile::UserInfo;

use super::ContributionRecord;

/// One zeroed record per year from the work-start year to the retirement year inclusive
pub fn build_records(info: &UserInfo, assumptions: &Assumptions) -> Vec<ContributionRecord> {
    let start = info.work_start_year();
    let end = info.retirement_year();

    if start > end {
        log::warn!(
            "work start year {} is after retirement year {}; no contribution years",
            start,
            end
        );
        return Vec::new();
    }

    log::debug!("building {} contribution records ({}..={})", end - start + 1, start, end);

    (start..=end)
        .map(|year| ContributionRecord::new(year, assumptions.salary_for_year(year)))
        .collect()
}
