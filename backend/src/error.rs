use rocket::http::Status;
use rocket::response::Responder;
use rocket::serde::json::Json;
use shared::{ErrorResponse, ValidationError};
use thiserror::Error;
use crate::store::StoreError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("invalid request body")]
    MalformedBody,
    #[error("invalid data")]
    InvalidData(#[from] ValidationError),
    #[error("invalid time")]
    InvalidTime,
    #[error("{0}")]
    Store(#[from] StoreError),
}

impl ApiError {
    pub fn status(&self) -> Status {
        match self {
            ApiError::MalformedBody => Status::BadRequest,
            ApiError::InvalidData(_) => Status::BadRequest,
            ApiError::InvalidTime => Status::BadRequest,
            ApiError::Store(_) => Status::InternalServerError,
        }
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for ApiError {
    fn respond_to(self, req: &'r rocket::Request<'_>) -> rocket::response::Result<'o> {
        let status = self.status();
        let body = Json(ErrorResponse::new(self.to_string()));

        rocket::Response::build_from(body.respond_to(req)?)
            .status(status)
            .ok()
    }
}
