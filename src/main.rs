mod api;
mod cache;
mod config;
mod display;
mod error;

use anyhow::Context;
use api::client::RiotApiClient;
use api::endpoints;
use api::models::{ChampionDto, MasteryDto, SummonerDto};
use clap::Parser;
use config::Config;
use display::card::{self, SummonerInfo};
use display::host::{self, PageHost};
use display::output::{display_error, display_info, display_mastery_table, display_success};
use indicatif::ProgressBar;
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

/// Nominal window the generated page is modeled against.
const DEFAULT_VIEWPORT_PX: u32 = 768;
const RESULTS_TOP_PX: u32 = 60;

#[derive(Parser, Debug)]
#[command(name = "Summoner Card")]
#[command(about = "Render champion mastery profile cards for a summoner", long_about = None)]
struct Args {
    /// Summoner name (spaces and case are ignored by the lookup)
    summoner_name: String,

    /// Region (default: na)
    #[arg(short, long)]
    region: Option<String>,

    /// Number of cards to render (default: 10)
    #[arg(short, long, default_value = "10")]
    top_n: usize,

    /// Render a single champion's card instead of the top masteries.
    /// Champions the player never touched come out as "First Timer"
    #[arg(short, long)]
    champion: Option<String>,

    /// Where to write the results page
    #[arg(short, long, default_value = "summoner_card.html")]
    out: PathBuf,

    /// Force refresh from Riot API (ignore cache)
    #[arg(long)]
    refresh: bool,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    // Load configuration
    let mut config = Config::from_env()?;
    if let Some(region) = args.region {
        // Static-data routes reject uppercase region codes.
        config.region = region.to_lowercase();
    }

    let player_key = endpoints::normalize_name(&args.summoner_name);

    display_info(&format!(
        "Fetching data for {} in region {}",
        args.summoner_name, config.region
    ));

    let client = RiotApiClient::new(config.clone());

    // Step 1 & 2: summoner and masteries, cached per player
    let mut profile = cache::ProfileCache::load(&player_key, &config.region)
        .unwrap_or_else(|_| cache::ProfileCache::new(&player_key, &config.region));

    let cache_usable = profile.has_profile()
        && profile.region == config.region
        && !profile.is_stale(cache::PROFILE_MAX_AGE_MINS);

    let (summoner, masteries) = if cache_usable && !args.refresh {
        display_success("⚡ Using cached profile");
        (profile.summoner.clone().unwrap(), profile.masteries.clone())
    } else {
        display_info("Step 1: Looking up summoner...");
        let summoner = client
            .get_summoner(&args.summoner_name)
            .context("summoner lookup failed")?;
        display_success(&format!(
            "Found {} (level {})",
            summoner.name, summoner.summoner_level
        ));

        display_info("Step 2: Fetching champion masteries...");
        let masteries = client
            .get_masteries(summoner.id)
            .context("mastery fetch failed")?;
        display_success(&format!("Found {} mastery entries", masteries.len()));

        profile.region = config.region.clone();
        profile.set_profile(summoner.clone(), masteries.clone());
        let _ = profile.save(); // Save to disk silently
        (summoner, masteries)
    };

    // Step 3: static champion list, cached per Data Dragon version
    let mut champ_cache = cache::ChampionCache::load(endpoints::DDRAGON_VERSION)
        .unwrap_or_else(|_| cache::ChampionCache::new(endpoints::DDRAGON_VERSION));

    let champions = if champ_cache.has_champions()
        && !champ_cache.is_stale(cache::CHAMPION_MAX_AGE_MINS)
        && !args.refresh
    {
        champ_cache.champions.clone()
    } else {
        display_info("Step 3: Fetching champion data...");
        let pb = ProgressBar::new_spinner();
        pb.set_message("Downloading champion list");
        pb.enable_steady_tick(Duration::from_millis(120));

        let champions = client
            .get_champions()
            .context("champion data fetch failed")?;

        pb.finish_with_message(format!("✓ {} champions loaded", champions.len()));
        champ_cache.set_champions(champions.clone());
        let _ = champ_cache.save(); // Save to disk silently
        champions
    };

    let champs_by_id: HashMap<i64, &ChampionDto> =
        champions.iter().map(|c| (c.id, c)).collect();

    // Highest mastery first, the order the profile page shows
    let mut ranked: Vec<&MasteryDto> = masteries.iter().collect();
    ranked.sort_by(|a, b| b.champion_points.cmp(&a.champion_points));

    let cells = match &args.champion {
        Some(champion_name) => {
            let champ = find_champion(&champions, champion_name)?;
            let mastery = ranked
                .iter()
                .find(|m| m.champion_id == champ.id)
                .copied();

            match mastery {
                Some(m) => display_success(&format!(
                    "{}: level {}, {} points",
                    champ.name, m.champion_level, m.champion_points
                )),
                None => display_info(&format!(
                    "{} was never played, the card will read First Timer",
                    champ.name
                )),
            }

            vec![card::summoner_table_view_cell(
                &summoner_info(&summoner, champ),
                mastery,
            )]
        }
        None => {
            let mut top_entries: Vec<(&ChampionDto, &MasteryDto)> = Vec::new();
            for &mastery in ranked.iter().take(args.top_n) {
                if let Some(champ) = champs_by_id.get(&mastery.champion_id).copied() {
                    top_entries.push((champ, mastery));
                }
            }

            display_mastery_table(&summoner.name, &top_entries);

            let mut cells = Vec::new();
            for &(champ, mastery) in &top_entries {
                cells.push(card::summoner_table_view_cell(
                    &summoner_info(&summoner, champ),
                    Some(mastery),
                ));
            }
            cells
        }
    };

    // Model the generated page and run the startup sizing hook before
    // writing the document out.
    let panel_height = DEFAULT_VIEWPORT_PX - (RESULTS_TOP_PX + host::RESULTS_MARGIN_PX);
    let mut page = PageHost::new(DEFAULT_VIEWPORT_PX)
        .with_element(host::RESULTS_SELECTOR, RESULTS_TOP_PX, panel_height);
    host::init(&mut page);

    let document = card::results_page(&cells);
    std::fs::write(&args.out, document)
        .with_context(|| format!("failed to write {}", args.out.display()))?;

    display_success(&format!(
        "Wrote {} card(s) to {}",
        cells.len(),
        args.out.display()
    ));

    Ok(())
}

fn summoner_info(summoner: &SummonerDto, champ: &ChampionDto) -> SummonerInfo {
    SummonerInfo {
        champ_key: champ.key.clone(),
        summoner_name: summoner.name.clone(),
        champ_name: champ.name.clone(),
    }
}

fn find_champion<'a>(champions: &'a [ChampionDto], name: &str) -> anyhow::Result<&'a ChampionDto> {
    let wanted = endpoints::normalize_name(name);
    champions
        .iter()
        .find(|c| {
            endpoints::normalize_name(&c.name) == wanted
                || endpoints::normalize_name(&c.key) == wanted
        })
        .with_context(|| format!("unknown champion: {}", name))
}
