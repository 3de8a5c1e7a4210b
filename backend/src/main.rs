use std::path::PathBuf;
use std::sync::Arc;
use backend::{
    build_rocket,
    config::ServerConfig,
    routes::AppState,
    spa::mount_spa,
    store::PgVoteStore,
};
use shuttle_runtime::CustomError;
use sqlx::PgPool;
use tracing::info;
use include_dir::{include_dir, Dir};
use uuid::Uuid;

static STATIC_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/static");

fn extract_static_files() -> Result<PathBuf, CustomError> {
    let dir = std::env::temp_dir().join(format!("vlt_monitor_static_{}", Uuid::new_v4()));
    std::fs::create_dir_all(&dir).map_err(CustomError::new)?;
    STATIC_DIR.extract(&dir).map_err(CustomError::new)?;
    Ok(dir)
}

#[shuttle_runtime::main]
async fn rocket(
    #[shuttle_shared_db::Postgres] pool: PgPool,
    #[shuttle_runtime::Secrets] secret_store: shuttle_runtime::SecretStore,
) -> shuttle_rocket::ShuttleRocket {
    info!("🚃 Starting VLT delay monitor");

    let config = ServerConfig::from_secrets(&secret_store);

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .map_err(CustomError::new)?;

    info!("📋 Migrations complete");

    let static_dir = extract_static_files()?;
    let state = AppState::new(Arc::new(PgVoteStore::new(pool)));

    let rocket = mount_spa(build_rocket(state, config), static_dir);

    Ok(rocket.into())
}
