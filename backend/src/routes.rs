use std::sync::Arc;
use rocket::{State, get, post, http::Status, serde::json::Json};
use rocket::data::{Data, ToByteUnit};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info, instrument, warn};
use shared::{
    models::{SubmitResponse, VoteSubmission},
    tally::{tally_records, Tally},
    validation::{validate_submission, validate_time},
};
use crate::{error::ApiError, store::VoteStore};

pub struct AppState {
    pub store: Arc<dyn VoteStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn VoteStore>) -> Self {
        Self { store }
    }
}

/// Largest vote body read before it is rejected as malformed.
const VOTE_BODY_LIMIT_MIB: u64 = 1;

#[rocket::options("/<_..>")]
pub async fn all_options() -> Status {
    Status::Ok
}

/// Decodes a raw vote body. Only unparseable bytes and `null` are malformed;
/// any other value without fields decodes to an empty submission.
fn decode_submission(bytes: &[u8]) -> Result<VoteSubmission, ApiError> {
    let value: Value = serde_json::from_slice(bytes).map_err(|e| {
        debug!("Rejecting unparseable vote body: {}", e);
        ApiError::MalformedBody
    })?;

    match value {
        Value::Null => Err(ApiError::MalformedBody),
        Value::Object(_) => VoteSubmission::deserialize(value).map_err(|e| {
            debug!("Rejecting vote body: {}", e);
            ApiError::MalformedBody
        }),
        _ => Ok(VoteSubmission::default()),
    }
}

#[instrument(skip(state, body))]
#[post("/votar", data = "<body>")]
pub async fn submit_vote(
    state: &State<AppState>,
    body: Data<'_>,
) -> Result<Json<SubmitResponse>, ApiError> {
    let bytes = body.open(VOTE_BODY_LIMIT_MIB.mebibytes()).into_bytes().await.map_err(|e| {
        debug!("Failed to read vote body: {}", e);
        ApiError::MalformedBody
    })?;
    if !bytes.is_complete() {
        debug!("Rejecting vote body over {} MiB", VOTE_BODY_LIMIT_MIB);
        return Err(ApiError::MalformedBody);
    }

    let submission = decode_submission(&bytes.value)?;

    let vote = validate_submission(&submission).map_err(|e| {
        debug!("Rejecting vote: {}", e);
        ApiError::from(e)
    })?;

    state.store.insert(&vote).await.map_err(|e| {
        warn!("Failed to store vote: {}", e);
        ApiError::from(e)
    })?;

    info!(route = %vote.route, delay_range = %vote.delay_range, scheduled_time = %vote.scheduled_time, "Vote recorded");
    Ok(Json(SubmitResponse::ok()))
}

#[instrument(skip(state))]
#[get("/votar?<horario>")]
pub async fn get_tally(
    state: &State<AppState>,
    horario: Option<&str>,
) -> Result<Json<Tally>, ApiError> {
    let horario = horario.ok_or(ApiError::InvalidTime)?;
    validate_time(horario).map_err(|_| ApiError::InvalidTime)?;

    let records = state.store.votes_at(horario).await.map_err(|e| {
        warn!("Failed to query votes for {}: {}", horario, e);
        ApiError::from(e)
    })?;

    let (tally, skipped) = tally_records(&records);
    if skipped > 0 {
        warn!("Skipped {} unrecognised vote records for {}", skipped, horario);
    }
    debug!("Tallied {} votes for {}", tally.total(), horario);

    Ok(Json(tally))
}
