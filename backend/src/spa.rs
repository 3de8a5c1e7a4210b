use std::path::PathBuf;
use rocket::{Build, Rocket, State, fs::NamedFile, get, routes};
use crate::API_BASE;

/// Directory holding the built frontend.
pub struct StaticDir(pub PathBuf);

#[get("/<path..>", rank = 20)]
pub async fn spa_handler(path: PathBuf, static_dir: &State<StaticDir>) -> Option<NamedFile> {
    // Unmatched API paths fall through to the JSON catchers.
    if path.starts_with(API_BASE.trim_start_matches('/')) {
        return None;
    }

    let file_path = static_dir.0.join(&path);
    if file_path.is_file() {
        NamedFile::open(&file_path).await.ok()
    } else {
        NamedFile::open(static_dir.0.join("index.html")).await.ok()
    }
}

/// Serves the frontend from `static_dir`, with `index.html` for client-side paths.
pub fn mount_spa(rocket: Rocket<Build>, static_dir: PathBuf) -> Rocket<Build> {
    rocket
        .manage(StaticDir(static_dir))
        .mount("/", routes![spa_handler])
}
