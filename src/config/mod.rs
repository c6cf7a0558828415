use chrono::{DateTime, TimeZone, Utc};
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub server: ServerConfig,
    pub api: ApiConfig,
    pub launch: LaunchConfig,
    #[serde(default)]
    pub forms: FormConfig,
    #[serde(default)]
    pub assets: AssetConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub base_url: String,
}

/// External contact API. Submissions go to `{base_url}/api/contact`.
#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LaunchConfig {
    /// Launch instant, RFC 3339 (e.g. `2025-09-04T08:00:00Z`).
    pub target: DateTime<Utc>,
    pub tick_millis: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FormConfig {
    /// How long the success toast stays up before it dismisses itself.
    pub success_dismiss_ms: u64,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self { success_dismiss_ms: 2500 }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct AssetConfig {
    pub dir: String,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self { dir: "public".to_string() }
    }
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let config = Config::builder()
            // Start with default values
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("server.base_url", "http://localhost:8080")?
            .set_default("api.base_url", "http://localhost:4000")?
            .set_default("api.timeout_secs", 10)?
            .set_default("launch.target", "2025-09-04T08:00:00Z")?
            .set_default("launch.tick_millis", 1000)?
            .set_default("forms.success_dismiss_ms", 2500)?
            .set_default("assets.dir", "public")?

            // Add config file if it exists
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))

            // Environment variables (GAANET__ prefix, double underscore separates levels)
            .add_source(Environment::with_prefix("GAANET").separator("__"))

            .build()?;

        let settings: Settings = config.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Values the config crate accepts but the server can't run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.launch.tick_millis == 0 {
            return Err(ConfigError::Message(
                "launch.tick_millis must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// `{api.base_url}/api/contact`, tolerating a trailing slash on the base.
    pub fn contact_endpoint(&self) -> String {
        format!("{}/api/contact", self.api.base_url.trim_end_matches('/'))
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
                base_url: "http://localhost:8080".to_string(),
            },
            api: ApiConfig {
                base_url: "http://localhost:4000".to_string(),
                timeout_secs: 10,
            },
            launch: LaunchConfig {
                // 9AM WAT
                target: Utc.with_ymd_and_hms(2025, 9, 4, 8, 0, 0).unwrap(),
                tick_millis: 1000,
            },
            forms: FormConfig::default(),
            assets: AssetConfig::default(),
        }
    }
}
