/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::constants::{DEFAULT_BASE_URL, DEFAULT_PAGE_SIZE, DEFAULT_TIMEOUT_SECS, DEFAULT_WEB_URL};
use crate::utils::config::{get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize, Serializer};
use tracing::{debug, error};

const REDACTED: &str = "***";

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Authentication credentials for the Gitee API
pub struct Credentials {
    /// Personal access token sent as the `access_token` parameter
    ///
    /// Serialized (and therefore printed) as `***`.
    #[serde(serialize_with = "redact")]
    pub access_token: String,
}

fn redact<S: Serializer>(value: &str, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_empty() {
        serializer.serialize_str("")
    } else {
        serializer.serialize_str(REDACTED)
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL for the Gitee REST API (e.g. `https://gitee.com/api/v5`)
    pub base_url: String,
    /// Web URL used to build repository links
    pub web_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Defaults applied to list endpoints
pub struct ListDefaults {
    /// Number of items requested per page
    pub per_page: u32,
    /// Optional sort field (`created`, `updated`, `pushed`, `full_name`)
    pub sort: Option<String>,
    /// Optional sort direction (`asc`, `desc`)
    pub direction: Option<String>,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the Gitee API client
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Defaults for paginated requests
    pub list: ListDefaults,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a new configuration from the environment (and `.env`, if present)
    ///
    /// Reads `GITEE_ACCESS_TOKEN`, `GITEE_BASE_URL`, `GITEE_WEB_URL`,
    /// `GITEE_TIMEOUT`, `GITEE_PAGE_SIZE`, `GITEE_SORT` and `GITEE_DIRECTION`.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let access_token = get_env_or_default("GITEE_ACCESS_TOKEN", String::new());
        if access_token.is_empty() {
            error!("GITEE_ACCESS_TOKEN not found in environment variables or .env file");
        }

        Config {
            credentials: Credentials { access_token },
            rest_api: RestApiConfig {
                base_url: get_env_or_default("GITEE_BASE_URL", String::from(DEFAULT_BASE_URL)),
                web_url: get_env_or_default("GITEE_WEB_URL", String::from(DEFAULT_WEB_URL)),
                timeout: get_env_or_default("GITEE_TIMEOUT", DEFAULT_TIMEOUT_SECS),
            },
            list: ListDefaults {
                per_page: get_env_or_default("GITEE_PAGE_SIZE", DEFAULT_PAGE_SIZE),
                sort: get_env_or_none("GITEE_SORT"),
                direction: get_env_or_none("GITEE_DIRECTION"),
            },
        }
    }

    /// Creates a configuration with an explicit token and API base URL
    ///
    /// Nothing is read from the environment; the remaining settings take their
    /// defaults.
    pub fn with_token(access_token: &str, base_url: &str) -> Self {
        Config {
            credentials: Credentials {
                access_token: access_token.to_string(),
            },
            rest_api: RestApiConfig {
                base_url: base_url.trim_end_matches('/').to_string(),
                web_url: String::from(DEFAULT_WEB_URL),
                timeout: DEFAULT_TIMEOUT_SECS,
            },
            list: ListDefaults {
                per_page: DEFAULT_PAGE_SIZE,
                sort: None,
                direction: None,
            },
        }
    }
}
