use crate::client::error::Error;

pub const API_URL_VAR: &str = "BUDGETWISE_API_URL";
pub const DEFAULT_API_URL: &str = "http://localhost:8080";
/// Fixed application key the session is persisted under
pub const SESSION_STORAGE_KEY: &str = "budgetwise:session";

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub api_url: String,
    pub storage_key: String,
}

impl Config {
    /// Native builds read `BUDGETWISE_API_URL` at run time, the WASM bundle has it baked in
    /// at compile time. Both fall back to [`DEFAULT_API_URL`].
    pub fn from_env() -> Result<Self, Error> {
        #[cfg(not(target_arch = "wasm32"))]
        let api_url = std::env::var(API_URL_VAR).ok();
        #[cfg(target_arch = "wasm32")]
        let api_url: Option<String> = None;

        let api_url = api_url
            .or_else(|| option_env!("BUDGETWISE_API_URL").map(str::to_string))
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Self::with_api_url(&api_url)
    }

    pub fn with_api_url(api_url: &str) -> Result<Self, Error> {
        let api_url = api_url.trim().trim_end_matches('/');

        if !(api_url.starts_with("http://") || api_url.starts_with("https://")) {
            return Err(Error::InvalidConfig {
                var: API_URL_VAR,
                reason: format!("expected an http(s) URL, got `{}`", api_url),
            });
        }

        Ok(Self {
            api_url: api_url.to_string(),
            storage_key: SESSION_STORAGE_KEY.to_string(),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            storage_key: SESSION_STORAGE_KEY.to_string(),
        }
    }
}
