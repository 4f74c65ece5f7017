//! Pension Estimator - contribution-history based state pension estimates
//!
//! This library provides:
//! - Reference tables (social average salary, pension payment months)
//! - Contribution record building and editing
//! - Spreadsheet-style CSV import/export of contribution records
//! - Basic and personal-account pension projection over a payout schedule
//! - A three-screen wizard session with pure state transitions

pub mod error;
pub mod profile;
pub mod assumptions;
pub mod records;
pub mod projection;
pub mod session;

// Re-export commonly used types
pub use error::{PensionError, Result};
pub use profile::{Gender, UserInfo, UserInfoForm, YearMonth};
pub use assumptions::{Assumptions, SalaryTable, PensionMonthsTable};
pub use records::{ContributionRecord, RecordEdit};
pub use projection::{PensionProjector, ProjectionConfig, ProjectionResult, PensionDetail, PensionSummary};
pub use session::{Action, AppState, Screen};
