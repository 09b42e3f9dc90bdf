use crate::api::models::{ChampionDto, MasteryDto};
use colored::*;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct MasteryRow {
    rank: String,
    champion: String,
    level: String,
    points: String,
    chest: String,
    #[tabled(rename = "last played")]
    last_played: String,
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_info(message: &str) {
    println!("{} {}", "ℹ️".cyan(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

pub fn display_mastery_table(player_name: &str, entries: &[(&ChampionDto, &MasteryDto)]) {
    println!(
        "\n{}",
        format!("📊 Champion Mastery for {} ", player_name)
            .bold()
            .cyan()
    );
    println!("{}\n", "=".repeat(60).cyan());

    if entries.is_empty() {
        println!(
            "{}",
            "No mastery data available (brand new account?)".yellow()
        );
        return;
    }

    let total_points: i64 = entries.iter().map(|(_, m)| m.champion_points).sum();
    println!(
        "{} {} champion(s), {} mastery points\n",
        "📈 Overall:".bold(),
        entries.len(),
        total_points
    );

    let mut rows = vec![];
    for (idx, (champion, mastery)) in entries.iter().enumerate() {
        let rank = format!("#{}", idx + 1);
        let level = format!("{}", mastery.champion_level);
        let points = format!("{}", mastery.champion_points);
        let chest = if mastery.chest_granted {
            "✔".green().to_string()
        } else {
            "✘".red().to_string()
        };
        let last_played = match mastery.last_played() {
            Some(when) => when.format("%Y-%m-%d").to_string(),
            None => "-".to_string(),
        };

        rows.push(MasteryRow {
            rank,
            champion: champion.name.clone(),
            level,
            points,
            chest,
            last_played,
        });
    }

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);

    if let Some((champion, mastery)) = entries.first() {
        println!("\n{}", "Main Champion".bold().yellow());
        println!(
            "  {} at level {} with {} points",
            champion.name, mastery.champion_level, mastery.champion_points
        );
        if mastery.champion_level >= 5 {
            println!("  {} Mastered - eligible for higher tiers", "🏆".yellow());
        } else if !mastery.chest_granted {
            println!("  {} Chest still available this season", "🎁".cyan());
        }
    }

    println!();
}
