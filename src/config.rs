use crate::error::AppError;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub region: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let api_key = env::var("RIOT_API_KEY").map_err(|_| {
            AppError::ConfigError(
                "RIOT_API_KEY not found in .env file".to_string(),
            )
        })?;

        // The static-data endpoints reject upper-case regions.
        let region = env::var("RIOT_REGION")
            .unwrap_or_else(|_| "na".to_string())
            .to_lowercase();

        Ok(Config { api_key, region })
    }

    /// Platform id for the champion mastery endpoints ("na" maps to "NA1").
    pub fn platform(&self) -> &'static str {
        platform_for_region(&self.region)
    }
}

pub fn platform_for_region(region: &str) -> &'static str {
    match region {
        "na" => "NA1",
        "br" => "BR1",
        "lan" => "LA1",
        "las" => "LA2",
        "euw" => "EUW1",
        "eune" => "EUN1",
        "tr" => "TR1",
        "ru" => "RU",
        "kr" => "KR",
        "jp" => "JP1",
        "oce" => "OC1",
        _ => "NA1", // default
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_for_known_regions() {
        assert_eq!(platform_for_region("na"), "NA1");
        assert_eq!(platform_for_region("euw"), "EUW1");
        assert_eq!(platform_for_region("kr"), "KR");
    }

    #[test]
    fn platform_falls_back_to_na1() {
        assert_eq!(platform_for_region("xx"), "NA1");
    }
}
