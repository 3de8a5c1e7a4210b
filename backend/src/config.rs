use shuttle_runtime::SecretStore;
use tracing::{info, warn};

const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Origin prefixes allowed to call the API cross-origin.
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![DEFAULT_ALLOWED_ORIGIN.to_string()],
        }
    }
}

impl ServerConfig {
    pub fn from_secrets(secrets: &SecretStore) -> Self {
        match secrets.get("ALLOWED_ORIGINS") {
            Some(raw) => {
                let config = Self::from_origin_list(&raw);
                info!("CORS origins: {:?}", config.allowed_origins);
                config
            }
            None => {
                warn!("ALLOWED_ORIGINS not set, using default: {}", DEFAULT_ALLOWED_ORIGIN);
                Self::default()
            }
        }
    }

    pub fn from_origin_list(raw: &str) -> Self {
        let allowed_origins: Vec<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(String::from)
            .collect();

        if allowed_origins.is_empty() {
            warn!("ALLOWED_ORIGINS is empty, using default: {}", DEFAULT_ALLOWED_ORIGIN);
            return Self::default();
        }
        Self { allowed_origins }
    }

    pub fn allows_origin(&self, origin: &str) -> bool {
        self.allowed_origins.iter().any(|allowed| origin.starts_with(allowed.as_str()))
    }
}
