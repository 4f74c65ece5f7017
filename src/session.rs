//! Wizard session: the three-screen flow and its state transitions
//!
//! Screens run PersonalInfo -> PaymentRecords -> Result, with a back edge from
//! Result to PaymentRecords and a reset from Result to a fresh session. Every
//! transition is a pure function of the current state and an [`Action`].
//!
//! # Example
//! ```ignore
//! let state = AppState::default()
//!     .apply(Action::SubmitInfo(UserInfoForm::new("male", "1981-10", "2004-07")))?
//!     .apply(Action::EditRecord { index: 0, edit: RecordEdit::PaymentMonths(12) })?
//!     .apply(Action::Calculate)?;
//! let result = state.result();
//! ```

use std::fmt;

use crate::error::{PensionError, Result};
use crate::profile::{UserInfo, UserInfoForm};
use crate::projection::{PensionProjector, ProjectionResult};
use crate::records::{build_records, copy_forward, import_warnings, update_record, ContributionRecord, RecordEdit};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    PersonalInfo,
    PaymentRecords,
    Result,
}

impl Screen {
    pub fn as_str(&self) -> &'static str {
        match self {
            Screen::PersonalInfo => "personal info",
            Screen::PaymentRecords => "payment records",
            Screen::Result => "result",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User actions that change the session
#[derive(Debug, Clone)]
pub enum Action {
    /// Submit the personal information form; rebuilds the records
    SubmitInfo(UserInfoForm),
    /// Replace the whole record sequence (spreadsheet import)
    ReplaceRecords(Vec<ContributionRecord>),
    EditRecord { index: usize, edit: RecordEdit },
    CopyForward { index: usize },
    /// Show the estimate
    Calculate,
    /// Return from the result to the records
    Back,
    /// Discard everything and start over
    Reset,
}

impl Action {
    fn name(&self) -> &'static str {
        match self {
            Action::SubmitInfo(_) => "submit info",
            Action::ReplaceRecords(_) => "replace records",
            Action::EditRecord { .. } => "edit a record",
            Action::CopyForward { .. } => "copy a record forward",
            Action::Calculate => "calculate",
            Action::Back => "go back",
            Action::Reset => "reset",
        }
    }
}

/// Session state for one user
#[derive(Debug, Clone)]
pub struct AppState {
    screen: Screen,
    user_info: UserInfo,
    records: Vec<ContributionRecord>,
    projector: PensionProjector,
}

impl AppState {
    /// Fresh session using the given projector
    pub fn new(projector: PensionProjector) -> Self {
        Self {
            screen: Screen::PersonalInfo,
            user_info: UserInfo::default(),
            records: Vec::new(),
            projector,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn user_info(&self) -> &UserInfo {
        &self.user_info
    }

    pub fn records(&self) -> &[ContributionRecord] {
        &self.records
    }

    /// Form values to pre-fill the personal information screen
    pub fn info_form(&self) -> UserInfoForm {
        UserInfoForm::from_info(&self.user_info)
    }

    /// The estimate, available on the result screen only
    pub fn result(&self) -> Option<ProjectionResult> {
        (self.screen == Screen::Result).then(|| self.projector.project(&self.user_info, &self.records))
    }

    /// Apply one action and return the next state
    ///
    /// The current state is left untouched, so a rejected action keeps every edit.
    pub fn apply(&self, action: Action) -> Result<Self> {
        let name = action.name();
        match (self.screen, action) {
            (Screen::PersonalInfo | Screen::PaymentRecords, Action::SubmitInfo(form)) => {
                let user_info = form.validate()?;
                let records = build_records(&user_info, self.projector.assumptions());
                Ok(Self {
                    screen: Screen::PaymentRecords,
                    user_info,
                    records,
                    projector: self.projector.clone(),
                })
            }
            (Screen::PaymentRecords, Action::ReplaceRecords(records)) => {
                for warning in import_warnings(&self.user_info, &records) {
                    log::warn!("imported records: {}", warning);
                }
                Ok(self.with_records(records))
            }
            (Screen::PaymentRecords, Action::EditRecord { index, edit }) => {
                Ok(self.with_records(update_record(&self.records, index, edit)?))
            }
            (Screen::PaymentRecords, Action::CopyForward { index }) => {
                Ok(self.with_records(copy_forward(&self.records, index)?))
            }
            (Screen::PaymentRecords, Action::Calculate) => Ok(self.on_screen(Screen::Result)),
            (Screen::Result, Action::Back) => Ok(self.on_screen(Screen::PaymentRecords)),
            (Screen::Result, Action::Reset) => Ok(Self::new(self.projector.clone())),
            (screen, _) => Err(PensionError::InvalidTransition {
                action: name,
                screen: screen.as_str(),
            }),
        }
    }

    fn with_records(&self, records: Vec<ContributionRecord>) -> Self {
        Self {
            screen: self.screen,
            user_info: self.user_info.clone(),
            records,
            projector: self.projector.clone(),
        }
    }

    fn on_screen(&self, screen: Screen) -> Self {
        Self {
            screen,
            ..self.clone()
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(PensionProjector::default())
    }
}
