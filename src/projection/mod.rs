//! Pension projection from a contribution history

mod engine;
mod result;

pub use engine::{pension_detail, ContributionTotals, PensionProjector, ProjectionConfig};
pub use result::{PensionDetail, PensionSummary, ProjectionResult};
