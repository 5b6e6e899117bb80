use anyhow::bail;
use birthday_core::DEFAULT_BASE_URL;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let api_url = std::env::var("BIRTHDAY_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());
        Self::new(api_url)
    }

    pub fn new(api_url: impl Into<String>) -> anyhow::Result<Self> {
        let api_url = api_url.into();
        if !(api_url.starts_with("http://") || api_url.starts_with("https://")) {
            bail!("BIRTHDAY_API_URL must be an http(s) URL, got {api_url:?}");
        }
        Ok(Self { api_url })
    }
}
