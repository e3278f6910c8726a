use crate::analysis::classifier::CounterTier;
use crate::analysis::composer::DraftSuggestions;
use crate::analysis::composition::TeamProfile;
use crate::analysis::items::CounterItem;
use crate::analysis::meta::{is_currently_strong, is_trending};
use crate::analysis::position::PositionEntry;
use crate::analysis::scorer::CounterScore;
use crate::api::models::Hero;
use colored::*;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct SuggestionRow {
    rank: String,
    hero: String,
    edge: String,
    #[tabled(rename = "win rate")]
    win_rate: String,
    tier: String,
}

#[derive(Tabled)]
struct ItemRow {
    rank: String,
    item: String,
    priority: String,
    reason: String,
}

#[derive(Tabled)]
struct PositionRow {
    rank: String,
    hero: String,
    picks: String,
    #[tabled(rename = "win rate")]
    win_rate: String,
}

fn hero_by_id(all_heroes: &[Hero], id: u32) -> Option<&Hero> {
    all_heroes.iter().find(|h| h.id == id)
}

fn tier_label(tier: CounterTier) -> String {
    match tier {
        CounterTier::Meta => "Meta".green().bold().to_string(),
        CounterTier::Specialist => "Specialist".yellow().to_string(),
        CounterTier::Situational => "Situational".blue().to_string(),
        CounterTier::General => "General".to_string(),
    }
}

fn edge_label(score: f64) -> String {
    let text = format!("{:+.1}%", score * 100.0);
    if score > 0.0 {
        text.green().to_string()
    } else {
        text.red().to_string()
    }
}

fn suggestion_rows(
    suggestions: &[CounterScore],
    all_heroes: &[Hero],
    top_n: usize,
) -> Vec<SuggestionRow> {
    suggestions
        .iter()
        .take(top_n)
        .enumerate()
        .filter_map(|(idx, s)| {
            let hero = hero_by_id(all_heroes, s.hero_id)?;

            let mut name = hero.localized_name.clone();
            if is_trending(hero) {
                name.push_str(" 🔥");
            }
            if is_currently_strong(hero) {
                name.push_str(" ★");
            }

            Some(SuggestionRow {
                rank: format!("#{}", idx + 1),
                hero: name,
                edge: edge_label(s.score),
                win_rate: format!("{:.1}%", s.win_rate),
                tier: tier_label(s.tier),
            })
        })
        .collect()
}

pub fn display_suggestions(suggestions: &DraftSuggestions, all_heroes: &[Hero], top_n: usize) {
    println!("\n{}", "🎯 COUNTER SUGGESTIONS".bold().cyan());
    println!("{}\n", "=".repeat(60).cyan());

    if suggestions.cores.is_empty() && suggestions.supports.is_empty() {
        println!(
            "{}",
            "No suggestions available (waiting for enemy picks)".yellow()
        );
        return;
    }

    if !suggestions.cores.is_empty() {
        println!("{}", "Core Picks".bold().yellow());
        let mut table = Table::new(suggestion_rows(&suggestions.cores, all_heroes, top_n));
        table.with(Style::rounded());
        println!("{}\n", table);
    }

    if !suggestions.supports.is_empty() {
        println!("{}", "Support Picks".bold().yellow());
        let mut table = Table::new(suggestion_rows(&suggestions.supports, all_heroes, top_n));
        table.with(Style::rounded());
        println!("{}\n", table);
    }

    println!("{}", "Interpretation".bold().yellow());
    println!("• Edge: average historical win-rate advantage against this lineup");
    println!("• Meta: strong everywhere right now · Specialist: strong only here");
    println!("• 🔥 pick rate climbing · ★ validated in professional play\n");
}

pub fn display_items(items: &[CounterItem]) {
    if items.is_empty() {
        return;
    }

    println!("{}", "🛡️  ITEM COUNTERS".bold().cyan());
    println!("{}\n", "=".repeat(60).cyan());

    let mut rows = vec![];
    for (idx, item) in items.iter().enumerate() {
        rows.push(ItemRow {
            rank: format!("#{}", idx + 1),
            item: item.name.clone(),
            priority: format!("{:.1}", item.priority),
            reason: item.reason.clone(),
        });
    }

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);
}

fn profile_bar(value: f64) -> String {
    let filled = (value / 10.0).round() as usize;
    let bar = "█".repeat(filled.min(10)) + &"░".repeat(10usize.saturating_sub(filled));
    format!("{} {:>3.0}%", bar, value)
}

pub fn display_team_profile(label: &str, profile: &TeamProfile) {
    println!("{}", format!("⚔️  {} Composition", label).bold().cyan());
    println!("   Disable:    {}", profile_bar(profile.disable));
    println!("   Durability: {}", profile_bar(profile.durability));
    println!("   Push:       {}", profile_bar(profile.push));
    println!("   Initiation: {}", profile_bar(profile.initiation));
    println!(
        "   Damage mix: {} magic / {} physical\n",
        format!("{:.0}%", profile.magic_share).blue(),
        format!("{:.0}%", 100.0 - profile.magic_share).yellow()
    );
}

pub fn display_draft_advantage(advantage: f64) {
    let label = format!("{:+.1}%", advantage * 100.0);
    let colored_label = if advantage >= 0.0 {
        label.green().bold()
    } else {
        label.red().bold()
    };
    println!("{} {}\n", "📈 Draft advantage:".bold(), colored_label);
}

pub fn display_position_meta(entries: &[PositionEntry], all_heroes: &[Hero], position: u8) {
    println!(
        "{}",
        format!("📊 POSITION {} META (min 500 picks)", position)
            .bold()
            .cyan()
    );
    println!("{}\n", "=".repeat(60).cyan());

    if entries.is_empty() {
        println!("{}", "No data available".yellow());
        return;
    }

    let mut rows = vec![];
    for (idx, entry) in entries.iter().enumerate() {
        let name = hero_by_id(all_heroes, entry.hero_id)
            .map(|h| h.localized_name.clone())
            .unwrap_or_else(|| format!("Hero {}", entry.hero_id));

        rows.push(PositionRow {
            rank: format!("#{}", idx + 1),
            hero: name,
            picks: format!("{}", entry.picks),
            win_rate: format!("{:.1}%", entry.win_rate),
        });
    }

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);
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
