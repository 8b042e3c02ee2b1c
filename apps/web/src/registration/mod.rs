//! Multi-step registration wizard: one typed form per step, validated
//! server-side before the client may advance.

pub mod handlers;
pub mod validation;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationStep {
    Account,
    Professional,
    Preferences,
}

impl RegistrationStep {
    pub const ALL: [RegistrationStep; 3] = [
        RegistrationStep::Account,
        RegistrationStep::Professional,
        RegistrationStep::Preferences,
    ];

    /// Zero-based position in the wizard.
    pub fn index(&self) -> usize {
        match self {
            RegistrationStep::Account => 0,
            RegistrationStep::Professional => 1,
            RegistrationStep::Preferences => 2,
        }
    }

    /// `None` after the last step.
    pub fn next(&self) -> Option<RegistrationStep> {
        Self::ALL.get(self.index() + 1).copied()
    }

    /// Progress once this step is complete.
    pub fn progress_percent(&self) -> u8 {
        (((self.index() + 1) * 100) / Self::ALL.len()) as u8
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccountForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfessionalForm {
    pub current_company: String,
    pub designation: String,
    /// Signed so out-of-range input reaches validation instead of failing to parse.
    pub experience_years: i32,
    #[serde(default)]
    pub city: String,
    pub country: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PreferencesForm {
    #[serde(default)]
    pub target_companies: Vec<String>,
    #[serde(default)]
    pub target_roles: Vec<String>,
    #[serde(default)]
    pub open_to_refer: bool,
}

/// Form payload for one wizard step, tagged by `step`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum RegistrationForm {
    Account(AccountForm),
    Professional(ProfessionalForm),
    Preferences(PreferencesForm),
}

impl RegistrationForm {
    pub fn step(&self) -> RegistrationStep {
        match self {
            RegistrationForm::Account(_) => RegistrationStep::Account,
            RegistrationForm::Professional(_) => RegistrationStep::Professional,
            RegistrationForm::Preferences(_) => RegistrationStep::Preferences,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct StepResult {
    pub step: RegistrationStep,
    pub valid: bool,
    pub errors: Vec<FieldError>,
    pub next_step: Option<RegistrationStep>,
    pub progress_percent: u8,
}

impl StepResult {
    /// An invalid step does not advance and reports the progress before it.
    pub fn evaluate(form: &RegistrationForm) -> Self {
        let step = form.step();
        let errors = validation::validate(form);
        let valid = errors.is_empty();

        let progress_percent = if valid {
            step.progress_percent()
        } else {
            ((step.index() * 100) / RegistrationStep::ALL.len()) as u8
        };

        Self {
            step,
            valid,
            next_step: if valid { step.next() } else { Some(step) },
            errors,
            progress_percent,
        }
    }
}
