use crate::config::Config;
use crate::error::AppError;
use governor::{Quota, RateLimiter, state::{InMemoryState, NotKeyed}, clock::DefaultClock};
use std::collections::HashMap;
use std::num::NonZeroU32;
use std::thread;
use std::time::Duration;

use super::endpoints;
use super::models::*;

const USER_AGENT: &str = "summoner_card/0.1.0";
const MAX_RETRIES: u32 = 3;
// Added on top of the Retry-After hint, as a margin against clock skew.
const RETRY_GRACE_SECS: u64 = 2;
// Upper bound applied to server-sent Retry-After hints.
const MAX_RETRY_AFTER_SECS: u64 = 60;

/// Single GET request: resolves with the response body on success, fails
/// with the underlying transport error untouched otherwise. No retry, no
/// timeout, no caching here.
pub fn get(url: &str) -> Result<String, AppError> {
    let response = ureq::get(url)
        .set("User-Agent", USER_AGENT)
        .call()?;
    response.into_string().map_err(AppError::BodyError)
}

pub struct RiotApiClient {
    config: Config,
    rate_limiter: RateLimiter<NotKeyed, InMemoryState, DefaultClock>,
}

impl RiotApiClient {
    pub fn new(config: Config) -> Self {
        // 20 requests per second, the dev key ceiling.
        let rate_limiter = RateLimiter::direct(Quota::per_second(NonZeroU32::new(20).unwrap()));
        RiotApiClient {
            config,
            rate_limiter,
        }
    }

    fn throttle(&self) {
        while self.rate_limiter.check().is_err() {
            thread::sleep(Duration::from_millis(50));
        }
    }

    /// Throttled GET with 429 handling: waits out the Retry-After hint
    /// (or a fixed backoff) and retries up to MAX_RETRIES times.
    fn execute_request(&self, url: &str) -> Result<String, AppError> {
        let mut retry_count: u32 = 0;

        loop {
            self.throttle();

            let err = match get(url) {
                Ok(body) => return Ok(body),
                Err(e) => e,
            };

            let rate_limited = match &err {
                AppError::HttpError(http) => match http.as_ref() {
                    ureq::Error::Status(429, resp) => {
                        Some(parse_retry_after(resp.header("Retry-After")))
                    }
                    _ => None,
                },
                _ => None,
            };

            match rate_limited {
                Some(hint) => {
                    if retry_count >= MAX_RETRIES {
                        return Err(AppError::RateLimited);
                    }
                    let wait_secs = retry_wait_secs(hint, retry_count);
                    println!("⏳ Rate limited, waiting {}s before retry...", wait_secs);
                    thread::sleep(Duration::from_secs(wait_secs));
                    retry_count += 1;
                }
                None => return Err(err),
            }
        }
    }

    pub fn get_summoner(&self, name: &str) -> Result<SummonerDto, AppError> {
        let normalized = endpoints::normalize_name(name);
        let url = endpoints::full_url(
            &endpoints::base_url(&self.config.region),
            &endpoints::summoner_by_name(&self.config.region, &normalized),
            &[],
            &self.config.api_key,
        );

        let body = match self.execute_request(&url) {
            Ok(body) => body,
            Err(AppError::HttpError(err)) if is_not_found(&err) => {
                return Err(AppError::PlayerNotFound(name.to_string()));
            }
            Err(e) => return Err(e),
        };

        parse_summoner_response(&body, &normalized, name)
    }

    pub fn get_masteries(&self, summoner_id: i64) -> Result<Vec<MasteryDto>, AppError> {
        let url = endpoints::full_url(
            &endpoints::base_url(&self.config.region),
            &endpoints::mastery_player_all(self.config.platform(), summoner_id),
            &[],
            &self.config.api_key,
        );

        let body = self.execute_request(&url)?;
        parse_masteries(&body)
    }

    pub fn get_champions(&self) -> Result<Vec<ChampionDto>, AppError> {
        let url = endpoints::full_url(
            endpoints::STATIC_BASE_URL,
            &endpoints::champ_all(&self.config.region),
            &[],
            &self.config.api_key,
        );

        let body = self.execute_request(&url)?;
        parse_champions(&body)
    }
}

fn is_not_found(err: &ureq::Error) -> bool {
    matches!(err, ureq::Error::Status(404, _))
}

fn parse_retry_after(header: Option<&str>) -> Option<u64> {
    header
        .and_then(|v| v.trim().parse::<u64>().ok())
        .map(|secs| secs.min(MAX_RETRY_AFTER_SECS))
}

/// Grace on top of a server hint; plain backoff when there was none.
fn retry_wait_secs(hint: Option<u64>, retry_count: u32) -> u64 {
    match hint {
        Some(secs) => secs + RETRY_GRACE_SECS,
        None => backoff_secs(retry_count),
    }
}

fn backoff_secs(retry_count: u32) -> u64 {
    2 * (retry_count as u64 + 1)
}

/// By-name responses arrive as `{ "<normalized name>": { ...summoner } }`.
fn parse_summoner_response(
    body: &str,
    normalized: &str,
    requested: &str,
) -> Result<SummonerDto, AppError> {
    let mut by_name: HashMap<String, SummonerDto> =
        serde_json::from_str(body).map_err(|e| AppError::JsonError(e.to_string()))?;

    by_name
        .remove(normalized)
        .ok_or_else(|| AppError::PlayerNotFound(requested.to_string()))
}

fn parse_masteries(body: &str) -> Result<Vec<MasteryDto>, AppError> {
    serde_json::from_str(body).map_err(|e| AppError::JsonError(e.to_string()))
}

fn parse_champions(body: &str) -> Result<Vec<ChampionDto>, AppError> {
    let list: ChampionListDto =
        serde_json::from_str(body).map_err(|e| AppError::JsonError(e.to_string()))?;
    Ok(list.data.into_values().collect())
}
