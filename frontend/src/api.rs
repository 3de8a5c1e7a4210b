use gloo_net::http::{Request, Response};
use shared::{ErrorResponse, Slot, SubmitResponse, Tally, VoteRequest};
use crate::config::CONFIG;

pub async fn fetch_tally(slot: Slot) -> Result<Tally, String> {
    let response = Request::get(&format!("{}/votar?horario={}", CONFIG.api_base_url, slot))
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !response.ok() {
        return Err(error_message(&response).await);
    }
    response.json::<Tally>().await
        .map_err(|e| format!("Failed to parse tally: {}", e))
}

pub async fn submit_vote(request: &VoteRequest) -> Result<SubmitResponse, String> {
    let response = Request::post(&format!("{}/votar", CONFIG.api_base_url))
        .json(request)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !response.ok() {
        return Err(error_message(&response).await);
    }
    response.json::<SubmitResponse>().await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

async fn error_message(response: &Response) -> String {
    let status = response.status();
    match response.json::<ErrorResponse>().await {
        Ok(body) => format!("HTTP {}: {}", status, body.error),
        Err(_) => format!("HTTP {}", status),
    }
}
