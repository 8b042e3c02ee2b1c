use super::{AccountForm, FieldError, PreferencesForm, ProfessionalForm, RegistrationForm};

const MIN_PASSWORD_LEN: usize = 8;
const MAX_EXPERIENCE_YEARS: i32 = 50;

pub fn validate(form: &RegistrationForm) -> Vec<FieldError> {
    match form {
        RegistrationForm::Account(f) => validate_account(f),
        RegistrationForm::Professional(f) => validate_professional(f),
        RegistrationForm::Preferences(f) => validate_preferences(f),
    }
}

fn validate_account(form: &AccountForm) -> Vec<FieldError> {
    let mut errors = Vec::new();

    require(&mut errors, "full_name", &form.full_name);

    if require(&mut errors, "email", &form.email) && !is_valid_email(&form.email) {
        errors.push(error("email", "Enter a valid email address"));
    }

    if require(&mut errors, "phone", &form.phone) && !is_valid_phone(&form.phone) {
        errors.push(error("phone", "Phone number must have 10 to 15 digits"));
    }

    if form.password.chars().count() < MIN_PASSWORD_LEN {
        errors.push(error(
            "password",
            format!("Password must be at least {MIN_PASSWORD_LEN} characters"),
        ));
    } else if !form.password.chars().any(|c| c.is_alphabetic())
        || !form.password.chars().any(|c| c.is_ascii_digit())
    {
        errors.push(error("password", "Password must contain a letter and a digit"));
    }

    errors
}

fn validate_professional(form: &ProfessionalForm) -> Vec<FieldError> {
    let mut errors = Vec::new();

    require(&mut errors, "current_company", &form.current_company);
    require(&mut errors, "designation", &form.designation);
    require(&mut errors, "country", &form.country);

    if !(0..=MAX_EXPERIENCE_YEARS).contains(&form.experience_years) {
        errors.push(error(
            "experience_years",
            format!("Experience must be between 0 and {MAX_EXPERIENCE_YEARS} years"),
        ));
    }

    errors
}

fn validate_preferences(form: &PreferencesForm) -> Vec<FieldError> {
    let has_any = form
        .target_companies
        .iter()
        .chain(form.target_roles.iter())
        .any(|v| !v.trim().is_empty());

    if has_any {
        Vec::new()
    } else {
        vec![error(
            "target_companies",
            "Pick at least one target company or role",
        )]
    }
}

/// Pushes a "required" error for blank values. Returns whether the value was present.
fn require(errors: &mut Vec<FieldError>, field: &'static str, value: &str) -> bool {
    if value.trim().is_empty() {
        errors.push(error(field, "This field is required"));
        false
    } else {
        true
    }
}

fn error(field: &'static str, message: impl Into<String>) -> FieldError {
    FieldError {
        field,
        message: message.into(),
    }
}

fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !email.chars().any(char::is_whitespace)
        && !domain.contains('@')
        && domain
            .rsplit_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && tld.len() >= 2)
}

fn is_valid_phone(phone: &str) -> bool {
    let phone = phone.trim();
    let digits = phone.strip_prefix('+').unwrap_or(phone);
    let digits: String = digits
        .chars()
        .filter(|c| !matches!(c, ' ' | '-'))
        .collect();
    (10..=15).contains(&digits.len()) && digits.chars().all(|c| c.is_ascii_digit())
}
