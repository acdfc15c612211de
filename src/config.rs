use anyhow::{Error, Result, anyhow};
use dotenvy::dotenv;
use serde::Deserialize;

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SenderMode {
    Rest,
    Typed,
}

#[derive(Clone, Deserialize, Debug)]
pub struct Config {
    pub rabbitmq_url: String,
    pub notification_queue_name: String,
    #[serde(default = "default_prefetch_count")]
    pub prefetch_count: u16,

    pub notification_service_url: String,
    #[serde(default = "default_sender_mode")]
    pub sender_mode: SenderMode,

    pub jwt_secret: String,
    #[serde(default)]
    pub jwt_audience: Option<String>,
    #[serde(default)]
    pub jwt_issuer: Option<String>,
    #[serde(default = "default_jwt_ttl_seconds")]
    pub jwt_ttl_seconds: i64,
}

// A prefetch of one keeps delivery strictly sequential per consumer.
fn default_prefetch_count() -> u16 {
    1
}

fn default_sender_mode() -> SenderMode {
    SenderMode::Rest
}

fn default_jwt_ttl_seconds() -> i64 {
    300
}

impl Config {
    pub fn load() -> Result<Self, Error> {
        dotenv().ok();

        let config = envy::from_env::<Self>()
            .map_err(|_| anyhow!("Invalid or missing environmental variable"))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sender_mode_parses_lowercase() {
        let mode: SenderMode = serde_json::from_str("\"rest\"").unwrap();
        assert_eq!(mode, SenderMode::Rest);

        let mode: SenderMode = serde_json::from_str("\"typed\"").unwrap();
        assert_eq!(mode, SenderMode::Typed);
    }
}
