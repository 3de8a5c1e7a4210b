use regex::Regex;
use std::sync::LazyLock;
use crate::models::{DelayRange, NewVote, RouteId, VoteSubmission};

// ASCII digits only; `\d` in this regex engine also matches other scripts.
static TIME_FORMAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{2}:[0-9]{2}$").expect("valid regex"));

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Missing field: {0}")]
    MissingField(&'static str),
    #[error("Unknown route: {0}")]
    UnknownRoute(String),
    #[error("Unknown delay range: {0}")]
    UnknownDelayRange(String),
    #[error("Time must be HH:MM, got {0:?}")]
    InvalidTime(String),
}

/// Shape check only: `"99:99"` is accepted.
pub fn is_time_format(value: &str) -> bool {
    TIME_FORMAT.is_match(value)
}

pub fn validate_time(value: &str) -> Result<(), ValidationError> {
    if is_time_format(value) {
        Ok(())
    } else {
        Err(ValidationError::InvalidTime(value.to_string()))
    }
}

pub fn validate_submission(submission: &VoteSubmission) -> Result<NewVote, ValidationError> {
    let rota_id = submission.rota_id.as_deref().ok_or(ValidationError::MissingField("rotaId"))?;
    let faixa = submission.faixa.as_deref().ok_or(ValidationError::MissingField("faixa"))?;
    let horario = submission.horario_previsto.as_deref()
        .ok_or(ValidationError::MissingField("horario_previsto"))?;

    let route = rota_id.parse::<RouteId>()
        .map_err(|_| ValidationError::UnknownRoute(rota_id.to_string()))?;
    let delay_range = faixa.parse::<DelayRange>()
        .map_err(|_| ValidationError::UnknownDelayRange(faixa.to_string()))?;
    validate_time(horario)?;

    Ok(NewVote {
        route,
        delay_range,
        scheduled_time: horario.to_string(),
    })
}
