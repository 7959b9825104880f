use anyhow::anyhow;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::{env, net::SocketAddr};

use crate::services::holiday_source::DEFAULT_HOLIDAY_API_URL;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub holiday_api_url: String,
    pub holiday_api_timeout_seconds: u64,
    pub time_zone: Tz,
    pub cors_allow_origins: Vec<String>,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let bind_addr_value =
            env::var("LIBURKU_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let bind_addr: SocketAddr = bind_addr_value
            .parse()
            .map_err(|_| anyhow!("Invalid LIBURKU_BIND_ADDR value: {}", bind_addr_value))?;

        let holiday_api_url =
            env::var("HOLIDAY_API_URL").unwrap_or_else(|_| DEFAULT_HOLIDAY_API_URL.to_string());

        let timeout_value =
            env::var("HOLIDAY_API_TIMEOUT_SECONDS").unwrap_or_else(|_| "10".to_string());
        let holiday_api_timeout_seconds: u64 = timeout_value.parse().map_err(|_| {
            anyhow!("Invalid HOLIDAY_API_TIMEOUT_SECONDS value: {}", timeout_value)
        })?;

        let time_zone_name = env::var("APP_TIMEZONE").unwrap_or_else(|_| "Asia/Jakarta".to_string());
        let time_zone: Tz = time_zone_name
            .parse()
            .map_err(|_| anyhow!("Invalid APP_TIMEZONE value: {}", time_zone_name))?;

        let cors_allow_origins =
            parse_origins(&env::var("CORS_ALLOW_ORIGINS").unwrap_or_else(|_| "*".to_string()));

        Ok(Config {
            bind_addr,
            holiday_api_url,
            holiday_api_timeout_seconds,
            time_zone,
            cors_allow_origins,
        })
    }

    pub fn allows_any_origin(&self) -> bool {
        self.cors_allow_origins.is_empty() || self.cors_allow_origins.iter().any(|o| o == "*")
    }
}

fn parse_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            holiday_api_url: DEFAULT_HOLIDAY_API_URL.to_string(),
            holiday_api_timeout_seconds: 10,
            time_zone: chrono_tz::Asia::Jakarta,
            cors_allow_origins: vec!["*".to_string()],
        }
    }
}
