/// Env vars checked, in order, for a document-store connection string.
pub const DATABASE_URL_VARS: [&str; 3] = ["MONGODB_URI", "MONGO_URI", "DATABASE_URL"];

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development; without a
/// connection string the service runs on the in-memory backend.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins from comma-separated `CORS_ORIGINS`; `*` allows any.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Document-store connection string, if any of [`DATABASE_URL_VARS`] is set.
    pub database_url: Option<String>,
    /// Seed the demo sites at startup when the store is empty (default: `true`).
    pub seed_sample_sites: bool,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default   |
    /// |-------------------------|-----------|
    /// | `HOST`                  | `0.0.0.0` |
    /// | `PORT`                  | `3000`    |
    /// | `CORS_ORIGINS`          | `*`       |
    /// | `REQUEST_TIMEOUT_SECS`  | `30`      |
    /// | `MONGODB_URI` / `MONGO_URI` / `DATABASE_URL` | unset |
    /// | `SEED_SAMPLE_SITES`     | `true`    |
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    ///
    /// Panics on malformed numeric or boolean values so misconfiguration
    /// fails at startup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());

        let port: u16 = lookup("PORT")
            .unwrap_or_else(|| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = lookup("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let database_url = DATABASE_URL_VARS
            .iter()
            .copied()
            .filter_map(|key| lookup(key))
            .map(|v| v.trim().to_string())
            .find(|v| !v.is_empty());

        let seed_sample_sites: bool = lookup("SEED_SAMPLE_SITES")
            .unwrap_or_else(|| "true".into())
            .parse()
            .expect("SEED_SAMPLE_SITES must be true or false");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            database_url,
            seed_sample_sites,
        }
    }

    /// Whether CORS should accept requests from any origin.
    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.is_empty() || self.cors_origins.iter().any(|o| o == "*")
    }
}
