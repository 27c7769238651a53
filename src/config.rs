use std::env;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_OEMBED_ENDPOINT: &str = "https://www.youtube.com/oembed";
const DEFAULT_LOOKUP_TIMEOUT_SECS: u64 = 5;
const DEFAULT_PROCESSING_DELAY_MS: u64 = 2000;
const DEFAULT_USER_ID: &str = "demo_user_123";

#[derive(Debug, Clone)]
pub struct Config {
    /// oEmbed endpoint queried by the metadata resolver.
    pub oembed_endpoint: String,
    /// Per-request timeout for the oEmbed lookup.
    pub lookup_timeout: Duration,
    /// Simulated processing delay before a project reaches a terminal state.
    pub processing_delay: Duration,
    /// Path of the JSON store file. Unset means projects live in memory only.
    pub store_path: Option<PathBuf>,
    /// Owner recorded on created projects.
    pub user_id: String,
    /// Base seed for template selection, mixed with the project id.
    pub template_seed: u64,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let oembed_endpoint = env::var("CATALYST_OEMBED_ENDPOINT")
            .unwrap_or_else(|_| DEFAULT_OEMBED_ENDPOINT.to_string());
        let lookup_timeout = env::var("CATALYST_LOOKUP_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(DEFAULT_LOOKUP_TIMEOUT_SECS));
        let processing_delay = env::var("CATALYST_PROCESSING_DELAY_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_millis)
            .unwrap_or(Duration::from_millis(DEFAULT_PROCESSING_DELAY_MS));
        let store_path = env::var("CATALYST_STORE_PATH").ok().map(PathBuf::from);
        let user_id =
            env::var("CATALYST_USER_ID").unwrap_or_else(|_| DEFAULT_USER_ID.to_string());
        let template_seed = env::var("CATALYST_TEMPLATE_SEED")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(0);

        Self {
            oembed_endpoint,
            lookup_timeout,
            processing_delay,
            store_path,
            user_id,
            template_seed,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            oembed_endpoint: DEFAULT_OEMBED_ENDPOINT.to_string(),
            lookup_timeout: Duration::from_secs(DEFAULT_LOOKUP_TIMEOUT_SECS),
            processing_delay: Duration::from_millis(DEFAULT_PROCESSING_DELAY_MS),
            store_path: None,
            user_id: DEFAULT_USER_ID.to_string(),
            template_seed: 0,
        }
    }
}
