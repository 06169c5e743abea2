pub mod app_config;
pub mod config;
pub mod criteria;
pub mod error;

pub use app_config::{AppConfig, Environment, PriceBound};
pub use config::{load_app_config, load_app_config_from_env, MIN_PAGE_TOKEN_DELAY_MS};
pub use criteria::{LatLng, PriceLevel, SearchCriteria};
pub use error::{ConfigError, ValidationError};
