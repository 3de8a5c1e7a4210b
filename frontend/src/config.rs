pub struct Config {
    pub api_base_url: &'static str,
    pub refresh_interval_ms: u32,
    /// Pause between a vote request finishing and the card switching to the
    /// thank-you message.
    pub vote_settle_ms: u32,
    pub community_url: &'static str,
}

impl Config {
    pub const fn new() -> Self {
        Self {
            api_base_url: "/api",
            refresh_interval_ms: 5 * 60 * 1000,
            vote_settle_ms: 400,
            community_url: "https://chat.whatsapp.com/HyUySWZjnmVDhoXwx81EoA",
        }
    }
}

pub const CONFIG: Config = Config::new();
