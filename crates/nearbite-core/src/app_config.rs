use std::net::SocketAddr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// How a requested price tier is mapped onto the provider's price bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriceBound {
    /// Tier is sent as both `minprice` and `maxprice`.
    #[default]
    Exact,
    /// Tier is sent as `minprice` only.
    Minimum,
}

impl std::fmt::Display for PriceBound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PriceBound::Exact => write!(f, "exact"),
            PriceBound::Minimum => write!(f, "min"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub google_places_api_key: String,
    pub places_base_url: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub page_token_delay_ms: u64,
    pub price_bound: PriceBound,
    pub photo_max_width: u32,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("google_places_api_key", &"[redacted]")
            .field("places_base_url", &self.places_base_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("page_token_delay_ms", &self.page_token_delay_ms)
            .field("price_bound", &self.price_bound)
            .field("photo_max_width", &self.photo_max_width)
            .finish()
    }
}
