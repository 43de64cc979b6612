use anyhow::Context;
use reqwest::Url;

pub const DEFAULT_API_URL: &str = "http://localhost:3000";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: Url,
    pub user_agent: Option<String>,
}

impl ClientConfig {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        let base_url = Url::parse(base_url).with_context(|| format!("parse api url {base_url}"))?;
        Ok(Self {
            base_url,
            user_agent: None,
        })
    }

    pub fn from_env() -> anyhow::Result<Self> {
        let base_url =
            std::env::var("FITTRACK_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.into());
        let mut config = Self::new(&base_url)?;
        config.user_agent = std::env::var("FITTRACK_USER_AGENT")
            .ok()
            .filter(|v| !v.trim().is_empty());
        Ok(config)
    }
}
