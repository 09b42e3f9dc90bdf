use crate::api::models::{ChampionDto, MasteryDto, SummonerDto};
use crate::error::AppError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Profiles go stale quickly; players keep playing.
pub const PROFILE_MAX_AGE_MINS: u64 = 30;
/// The champion list only moves with patches.
pub const CHAMPION_MAX_AGE_MINS: u64 = 7 * 24 * 60;

fn cache_dir() -> PathBuf {
    let dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".summoner_card");

    let _ = fs::create_dir_all(&dir);

    dir
}

/// Cached summoner and mastery data for one player, keyed by
/// normalized name.
#[derive(Debug, Serialize, Deserialize)]
pub struct ProfileCache {
    pub player: String,
    pub region: String,
    pub last_updated: DateTime<Utc>,
    pub summoner: Option<SummonerDto>,
    pub masteries: Vec<MasteryDto>,
}

impl ProfileCache {
    pub fn new(player: &str, region: &str) -> Self {
        ProfileCache {
            player: player.to_string(),
            region: region.to_string(),
            last_updated: Utc::now(),
            summoner: None,
            masteries: Vec::new(),
        }
    }

    pub fn set_profile(&mut self, summoner: SummonerDto, masteries: Vec<MasteryDto>) {
        self.summoner = Some(summoner);
        self.masteries = masteries;
        self.last_updated = Utc::now();
    }

    pub fn cache_path(player: &str) -> PathBuf {
        cache_dir().join(format!("{}.json", player))
    }

    pub fn load(player: &str, region: &str) -> Result<Self, AppError> {
        match load_path(&Self::cache_path(player)) {
            Ok(Some(cache)) => Ok(cache),
            Ok(None) => Ok(ProfileCache::new(player, region)),
            Err(e) => Err(e),
        }
    }

    pub fn save(&self) -> Result<(), AppError> {
        save_path(&Self::cache_path(&self.player), self)
    }

    pub fn is_stale(&self, max_age_mins: u64) -> bool {
        minutes_old(self.last_updated) > max_age_mins as i64
    }

    pub fn has_profile(&self) -> bool {
        self.summoner.is_some()
    }
}

/// Cached static champion list for one Data Dragon version.
#[derive(Debug, Serialize, Deserialize)]
pub struct ChampionCache {
    pub version: String,
    pub last_updated: DateTime<Utc>,
    pub champions: Vec<ChampionDto>,
}

impl ChampionCache {
    pub fn new(version: &str) -> Self {
        ChampionCache {
            version: version.to_string(),
            last_updated: Utc::now(),
            champions: Vec::new(),
        }
    }

    pub fn set_champions(&mut self, champions: Vec<ChampionDto>) {
        self.champions = champions;
        self.last_updated = Utc::now();
    }

    pub fn cache_path() -> PathBuf {
        cache_dir().join("champions.json")
    }

    pub fn load(version: &str) -> Result<Self, AppError> {
        Self::load_from(&Self::cache_path(), version)
    }

    fn load_from(path: &Path, version: &str) -> Result<Self, AppError> {
        match load_path::<ChampionCache>(path) {
            // A version bump invalidates whatever was on disk.
            Ok(Some(cache)) if cache.version == version => Ok(cache),
            Ok(_) => Ok(ChampionCache::new(version)),
            Err(e) => Err(e),
        }
    }

    pub fn save(&self) -> Result<(), AppError> {
        save_path(&Self::cache_path(), self)
    }

    pub fn is_stale(&self, max_age_mins: u64) -> bool {
        minutes_old(self.last_updated) > max_age_mins as i64
    }

    pub fn has_champions(&self) -> bool {
        !self.champions.is_empty()
    }
}

fn minutes_old(when: DateTime<Utc>) -> i64 {
    Utc::now().signed_duration_since(when).num_minutes()
}

fn load_path<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Option<T>, AppError> {
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content)
            .map(Some)
            .map_err(|e| AppError::JsonError(format!("failed to parse cache: {}", e))),
        // Not cached yet.
        Err(_) => Ok(None),
    }
}

fn save_path<T: Serialize>(path: &Path, value: &T) -> Result<(), AppError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| AppError::JsonError(format!("failed to serialize cache: {}", e)))?;

    fs::write(path, json)
        .map_err(|e| AppError::CacheError(format!("failed to write {}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn sample_summoner() -> SummonerDto {
        SummonerDto {
            id: 4460427,
            name: "Hide on Bush".to_string(),
            profile_icon_id: 6,
            revision_date: 1462935156000,
            summoner_level: 30,
        }
    }

    fn sample_mastery() -> MasteryDto {
        MasteryDto {
            player_id: 4460427,
            champion_id: 81,
            champion_level: 7,
            champion_points: 123456,
            champion_points_since_last_level: 2000,
            champion_points_until_next_level: 0,
            chest_granted: true,
            last_play_time: 1462935156000,
        }
    }

    #[test]
    fn profile_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hideonbush.json");

        let mut cache = ProfileCache::new("hideonbush", "na");
        cache.set_profile(sample_summoner(), vec![sample_mastery()]);
        save_path(&path, &cache).unwrap();

        let loaded: ProfileCache = load_path(&path).unwrap().unwrap();
        assert_eq!(loaded.player, "hideonbush");
        assert_eq!(loaded.summoner.unwrap().name, "Hide on Bush");
        assert_eq!(loaded.masteries.len(), 1);
        assert_eq!(loaded.masteries[0].champion_points, 123456);
    }

    #[test]
    fn missing_cache_file_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nobody.json");
        let loaded: Option<ProfileCache> = load_path(&path).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn corrupted_cache_file_is_a_json_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{ not json").unwrap();
        let err = load_path::<ProfileCache>(&path).unwrap_err();
        assert!(matches!(err, AppError::JsonError(_)));
    }

    #[test]
    fn fresh_profile_is_not_stale() {
        let mut cache = ProfileCache::new("hideonbush", "na");
        cache.set_profile(sample_summoner(), Vec::new());
        assert!(!cache.is_stale(PROFILE_MAX_AGE_MINS));
    }

    #[test]
    fn old_profile_is_stale() {
        let mut cache = ProfileCache::new("hideonbush", "na");
        cache.last_updated = Utc::now() - Duration::minutes(45);
        assert!(cache.is_stale(PROFILE_MAX_AGE_MINS));
        assert!(!cache.is_stale(60));
    }

    #[test]
    fn champion_cache_tracks_version_and_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("champions.json");

        let mut cache = ChampionCache::new("6.8.1");
        assert!(!cache.has_champions());
        cache.set_champions(vec![ChampionDto {
            id: 81,
            key: "Ezreal".to_string(),
            name: "Ezreal".to_string(),
            title: "the Prodigal Explorer".to_string(),
        }]);
        save_path(&path, &cache).unwrap();

        let loaded: ChampionCache = load_path(&path).unwrap().unwrap();
        assert_eq!(loaded.version, "6.8.1");
        assert!(loaded.has_champions());
        assert_eq!(loaded.champions[0].key, "Ezreal");
    }

    #[test]
    fn champion_cache_version_bump_invalidates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("champions.json");

        let mut cache = ChampionCache::new("6.8.1");
        cache.set_champions(vec![ChampionDto {
            id: 81,
            key: "Ezreal".to_string(),
            name: "Ezreal".to_string(),
            title: "the Prodigal Explorer".to_string(),
        }]);
        save_path(&path, &cache).unwrap();

        let same_version = ChampionCache::load_from(&path, "6.8.1").unwrap();
        assert!(same_version.has_champions());

        let bumped = ChampionCache::load_from(&path, "6.9.1").unwrap();
        assert_eq!(bumped.version, "6.9.1");
        assert!(!bumped.has_champions());
    }
}
