use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// Summoner v1.4 response. By-name lookups return a map keyed by the
// normalized name; the client unwraps that.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummonerDto {
    pub id: i64,
    pub name: String,
    pub profile_icon_id: i32,
    pub revision_date: i64,
    pub summoner_level: i32,
}

// Champion mastery response entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MasteryDto {
    pub player_id: i64,
    pub champion_id: i64,
    pub champion_level: i32,
    pub champion_points: i64,
    pub champion_points_since_last_level: i64,
    pub champion_points_until_next_level: i64,
    pub chest_granted: bool,
    pub last_play_time: i64,
}

impl MasteryDto {
    /// `lastPlayTime` comes as epoch milliseconds.
    pub fn last_played(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.last_play_time).single()
    }
}

// Static-data v1.2 champion entry. `id` is numeric; `key` is the short
// string ("Ezreal") that names icon assets.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChampionDto {
    pub id: i64,
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub struct ChampionListDto {
    pub data: HashMap<String, ChampionDto>,
}
