//! Raw personal-information form and its validation

use serde::{Deserialize, Serialize};

use super::{Gender, UserInfo, YearMonth};
use crate::error::PensionError;

/// Form fields as submitted; `None` means the field was left empty
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfoForm {
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub birth_date: Option<String>,
    #[serde(default)]
    pub work_start_date: Option<String>,
}

impl UserInfoForm {
    pub fn new(gender: &str, birth_date: &str, work_start_date: &str) -> Self {
        Self {
            gender: Some(gender.to_string()),
            birth_date: Some(birth_date.to_string()),
            work_start_date: Some(work_start_date.to_string()),
        }
    }

    /// Pre-fill the form from existing info
    pub fn from_info(info: &UserInfo) -> Self {
        Self::new(
            info.gender.as_str(),
            &info.birth_date.to_string(),
            &info.work_start_date.to_string(),
        )
    }

    /// Validate every field, collecting all messages before failing
    pub fn validate(&self) -> Result<UserInfo, PensionError> {
        let mut messages = Vec::new();

        let gender = match present(&self.gender) {
            None => {
                messages.push("gender is required".to_string());
                None
            }
            Some(raw) => match raw.parse::<Gender>() {
                Ok(g) => Some(g),
                Err(_) => {
                    messages.push(format!("invalid gender '{}'", raw));
                    None
                }
            },
        };

        let birth_date = parse_month(&self.birth_date, "birth date", &mut messages);
        let work_start_date = parse_month(&self.work_start_date, "work start date", &mut messages);

        match (gender, birth_date, work_start_date) {
            (Some(gender), Some(birth_date), Some(work_start_date)) if messages.is_empty() => {
                Ok(UserInfo::new(gender, birth_date, work_start_date))
            }
            _ => Err(PensionError::Validation(messages)),
        }
    }
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn parse_month(field: &Option<String>, label: &str, messages: &mut Vec<String>) -> Option<YearMonth> {
    match present(field) {
        None => {
            messages.push(format!("{} is required", label));
            None
        }
        Some(raw) => match raw.parse::<YearMonth>() {
            Ok(ym) => Some(ym),
            Err(_) => {
                messages.push(format!("invalid {} '{}', expected YYYY-MM", label, raw));
                None
            }
        },
    }
}
