use crate::api::endpoints;
use crate::api::models::MasteryDto;

/// What one profile cell shows: the champion played (`champ_key` names the
/// icon asset) and who played it.
#[derive(Debug, Clone)]
pub struct SummonerInfo {
    pub champ_key: String,
    pub summoner_name: String,
    pub champ_name: String,
}

/// Renders one summoner cell as an HTML snippet. A missing mastery means
/// the player has never touched the champion.
pub fn summoner_table_view_cell(info: &SummonerInfo, mastery: Option<&MasteryDto>) -> String {
    let level = match mastery {
        Some(m) => m.champion_level.to_string(),
        None => "First Timer".to_string(),
    };

    format!(
        r#"
<div class="clearfix summoner-cell">
    <div class="float-left">
        <img src="{icon}">
    </div>
    <div class="float-left pad-lefty">
        <h4 class="champ-title"> {summoner} </h4>
        <h5 class="champ-title"> {champ} </h5>
        <p> Champion Level: {level} </p>
    </div>
</div>"#,
        icon = endpoints::champion_square_url(&info.champ_key),
        summoner = info.summoner_name,
        champ = info.champ_name,
        level = level,
    )
}

const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>Summoner Card</title>
<style>
.summoner-cell { padding: 8px 0; border-bottom: 1px solid #ddd; }
.clearfix::after { content: ""; clear: both; display: table; }
.float-left { float: left; }
.pad-lefty { padding-left: 12px; }
.champ-title { margin: 0; }
#results { max-width: 480px; margin: 0 auto; font-family: sans-serif; }
</style>
</head>
<body>
<div id="results">"#;

const PAGE_TAIL: &str = "\n</div>\n</body>\n</html>\n";

/// Wraps rendered cells in the results page shell.
pub fn results_page(cells: &[String]) -> String {
    let mut page = String::with_capacity(PAGE_HEAD.len() + PAGE_TAIL.len() + cells.len() * 256);
    page.push_str(PAGE_HEAD);
    for cell in cells {
        page.push_str(cell);
    }
    page.push_str(PAGE_TAIL);
    page
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ezreal_info() -> SummonerInfo {
        SummonerInfo {
            champ_key: "Ezreal".to_string(),
            summoner_name: "Faker".to_string(),
            champ_name: "Ezreal".to_string(),
        }
    }

    fn level_seven() -> MasteryDto {
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
    fn cell_embeds_icon_names_and_level() {
        let mastery = level_seven();
        let cell = summoner_table_view_cell(&ezreal_info(), Some(&mastery));

        assert!(cell.contains("Ezreal.png"));
        assert!(cell.contains("Faker"));
        assert!(cell.contains("Ezreal"));
        assert!(cell.contains("Champion Level: 7"));
    }

    #[test]
    fn cell_without_mastery_reads_first_timer() {
        let cell = summoner_table_view_cell(&ezreal_info(), None);

        assert!(cell.contains("Champion Level: First Timer"));

        // The level line must carry no numeric level at all.
        let level_line = cell
            .lines()
            .find(|line| line.contains("Champion Level:"))
            .unwrap();
        assert!(!level_line.chars().any(|c| c.is_ascii_digit()));
    }

    #[test]
    fn cell_render_is_deterministic() {
        let mastery = level_seven();
        let first = summoner_table_view_cell(&ezreal_info(), Some(&mastery));
        let second = summoner_table_view_cell(&ezreal_info(), Some(&mastery));
        assert_eq!(first, second);
    }

    #[test]
    fn cell_icon_url_follows_cdn_pattern() {
        let cell = summoner_table_view_cell(&ezreal_info(), None);
        assert!(cell
            .contains("http://ddragon.leagueoflegends.com/cdn/6.8.1/img/champion/Ezreal.png"));
    }

    #[test]
    fn results_page_wraps_cells_in_results_container() {
        let mastery = level_seven();
        let cells = vec![
            summoner_table_view_cell(&ezreal_info(), Some(&mastery)),
            summoner_table_view_cell(&ezreal_info(), None),
        ];
        let page = results_page(&cells);

        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<div id=\"results\">"));
        assert!(page.contains("Champion Level: 7"));
        assert!(page.contains("Champion Level: First Timer"));
        assert!(page.ends_with("</html>\n"));
    }

    #[test]
    fn empty_results_page_is_still_a_document() {
        let page = results_page(&[]);
        assert!(page.contains("<div id=\"results\">"));
        assert!(page.contains("</html>"));
    }
}
