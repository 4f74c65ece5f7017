//! Demographic inputs that drive the retirement-age policy and career span

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::PensionError;

/// Statutory retirement age for men
pub const MALE_RETIREMENT_AGE: u8 = 63;

/// Statutory retirement age for women
pub const FEMALE_RETIREMENT_AGE: u8 = 55;

/// Gender of the contributor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Age at which pension payments start
    pub fn retirement_age(&self) -> u8 {
        match self {
            Gender::Male => MALE_RETIREMENT_AGE,
            Gender::Female => FEMALE_RETIREMENT_AGE,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl FromStr for Gender {
    type Err = PensionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            other => Err(PensionError::Validation(vec![format!(
                "invalid gender '{}', expected male or female",
                other
            )])),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A calendar month, written `YYYY-MM`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Result<Self, PensionError> {
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(Self::from_date)
            .ok_or_else(|| PensionError::InvalidYearMonth(format!("{}-{}", year, month)))
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Same month `years` years later
    pub fn add_years(&self, years: u32) -> Option<Self> {
        self.first_day()?
            .checked_add_months(Months::new(years * 12))
            .map(Self::from_date)
    }

    fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl FromStr for YearMonth {
    type Err = PensionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        NaiveDate::parse_from_str(&format!("{}-01", trimmed), "%Y-%m-%d")
            .map(Self::from_date)
            .map_err(|_| PensionError::InvalidYearMonth(trimmed.to_string()))
    }
}

impl TryFrom<String> for YearMonth {
    type Error = PensionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<YearMonth> for String {
    fn from(value: YearMonth) -> Self {
        value.to_string()
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Inputs collected on the personal information screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub gender: Gender,
    pub birth_date: YearMonth,
    pub work_start_date: YearMonth,
}

impl UserInfo {
    pub fn new(gender: Gender, birth_date: YearMonth, work_start_date: YearMonth) -> Self {
        Self {
            gender,
            birth_date,
            work_start_date,
        }
    }

    pub fn retirement_age(&self) -> u8 {
        self.gender.retirement_age()
    }

    /// Calendar year in which the contributor retires
    pub fn retirement_year(&self) -> i32 {
        self.birth_date.year() + self.retirement_age() as i32
    }

    pub fn work_start_year(&self) -> i32 {
        self.work_start_date.year()
    }

    /// Birth month shifted by the retirement age
    pub fn retirement_date(&self) -> YearMonth {
        self.birth_date
            .add_years(self.retirement_age() as u32)
            .unwrap_or(YearMonth {
                year: self.retirement_year(),
                month: self.birth_date.month(),
            })
    }
}

impl Default for UserInfo {
    /// Pre-filled values shown when a session starts
    fn default() -> Self {
        Self {
            gender: Gender::Male,
            birth_date: YearMonth {
                year: 1981,
                month: 10,
            },
            work_start_date: YearMonth {
                year: 2004,
                month: 7,
            },
        }
    }
}
