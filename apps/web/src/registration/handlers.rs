use axum::Json;
use tracing::debug;

use crate::registration::{RegistrationForm, StepResult};

/// POST /api/v1/registration/validate
///
/// Invalid forms are a normal outcome and come back as 200 with field errors.
pub async fn handle_validate_step(Json(form): Json<RegistrationForm>) -> Json<StepResult> {
    let result = StepResult::evaluate(&form);
    debug!(
        "Registration step {:?} validated: {} error(s)",
        result.step,
        result.errors.len()
    );
    Json(result)
}
