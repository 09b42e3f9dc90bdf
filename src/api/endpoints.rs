// URL builders for the Riot API and Data Dragon assets.

/// Host for static data (champion list). Regions must be lower-case here,
/// the static endpoints reject upper-case.
pub const STATIC_BASE_URL: &str = "https://global.api.pvp.net";

pub const DDRAGON_CDN: &str = "http://ddragon.leagueoflegends.com/cdn";
pub const DDRAGON_VERSION: &str = "6.8.1";

/// Host for player data (summoners, masteries) in the given region.
pub fn base_url(region: &str) -> String {
    format!("https://{}.api.pvp.net", region)
}

pub fn summoner_by_name(region: &str, summoner_names: &str) -> String {
    format!(
        "/api/lol/{region}/v1.4/summoner/by-name/{names}",
        region = region,
        names = summoner_names
    )
}

pub fn mastery_player_all(platform_id: &str, player_id: i64) -> String {
    format!(
        "/championmastery/location/{platform}/player/{player}/champions",
        platform = platform_id,
        player = player_id
    )
}

pub fn champ_all(region: &str) -> String {
    format!("/api/lol/static-data/{region}/v1.2/champion", region = region)
}

/// Joins base, path and query params, always appending the api_key param.
/// Param values here are plain ASCII tokens; no percent-encoding needed.
pub fn full_url(base: &str, path: &str, params: &[(&str, &str)], api_key: &str) -> String {
    let mut query = String::new();
    for (key, value) in params {
        query.push_str(key);
        query.push('=');
        query.push_str(value);
        query.push('&');
    }
    format!(
        "{base}{path}?{query}api_key={key}",
        base = base,
        path = path,
        query = query,
        key = api_key
    )
}

/// Square champion icon, the image the summoner cell embeds.
pub fn champion_square_url(champ_key: &str) -> String {
    format!("{}/{}/img/champion/{}.png", DDRAGON_CDN, DDRAGON_VERSION, champ_key)
}

/// Summoner names are matched with spaces stripped and lower-cased; the
/// same form keys the profile cache.
pub fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
}
