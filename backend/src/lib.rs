pub mod routes;
pub mod store;
pub mod cors;
pub mod config;
pub mod error;
pub mod catchers;
pub mod spa;
pub use shared::{models::*, error::*, tally::*};

use rocket::{catchers, routes, Build, Rocket};
use crate::{
    catchers::{bad_request, internal_error, not_found},
    config::ServerConfig,
    cors::CORS,
    routes::{all_options, get_tally, submit_vote, AppState},
};

pub const API_BASE: &str = "/api";

/// Mounts the API and error catchers. The frontend is added on top with
/// [`spa::mount_spa`].
pub fn build_rocket(state: AppState, config: ServerConfig) -> Rocket<Build> {
    rocket::build()
        .attach(CORS::new(config))
        .manage(state)
        .mount(API_BASE, routes![submit_vote, get_tally, all_options])
        .register(
            "/",
            catchers![bad_request, not_found, internal_error],
        )
}

#[cfg(test)]
mod tests;
