//! Contributor profile: demographic inputs and form validation

mod data;
mod form;

pub use data::{Gender, UserInfo, YearMonth, FEMALE_RETIREMENT_AGE, MALE_RETIREMENT_AGE};
pub use form::UserInfoForm;
