mod analysis;
mod api;
mod cache;
mod config;
mod display;
mod error;
mod rate_limit;

use analysis::composer;
use analysis::composition::team_profile;
use analysis::position::position_top_heroes;
use analysis::scorer::draft_advantage;
use api::client::StatsApiClient;
use api::models::Hero;
use cache::SnapshotCache;
use clap::Parser;
use config::Config;
use display::output::{
    display_draft_advantage, display_error, display_info, display_items, display_position_meta,
    display_success, display_suggestions, display_team_profile,
};
use error::AppError;
use indicatif::ProgressBar;
use rate_limit::RequestLog;
use std::collections::HashSet;
use std::thread;
use std::time::Duration;

const TEAM_SLOTS: usize = 5;

// Polite delay between bulk matchup fetches (OpenDota free tier is 60/min)
const BULK_FETCH_DELAY_MS: u64 = 1000;

#[derive(Parser, Debug)]
#[command(name = "Draft Gap")]
#[command(about = "Counter-pick and item suggestions for a Dota 2 draft", long_about = None)]
struct Args {
    /// Enemy hero names, e.g. "Axe" "Phantom Assassin"
    #[arg(required_unless_present = "refresh")]
    enemies: Vec<String>,

    /// Heroes already picked on your team
    #[arg(short, long)]
    team: Vec<String>,

    /// Number of suggestions to display per list
    #[arg(short = 'n', long, default_value = "5")]
    top_n: usize,

    /// Also show the strongest heroes for this position (1-5)
    #[arg(short, long)]
    position: Option<u8>,

    /// Re-download the hero roster and every matchup table
    #[arg(long)]
    refresh: bool,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        display_error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), AppError> {
    let config = Config::from_env()?;

    if let Some(position) = args.position {
        if !(1..=5).contains(&position) {
            return Err(AppError::InvalidPosition(position));
        }
    }

    let mut request_log = RequestLog::load()?;
    let client = StatsApiClient::new(config.clone());
    let mut snapshot = SnapshotCache::load()?;

    if args.refresh {
        refresh_snapshot(&client, &mut snapshot, &mut request_log)?;
    } else if snapshot.heroes.is_empty() || snapshot.is_stale(config.snapshot_max_age_hours) {
        display_info("Hero snapshot missing or stale, downloading roster...");
        fetch_roster(&client, &mut snapshot, &mut request_log)?;
    }

    if args.enemies.is_empty() {
        // --refresh without a draft: nothing to analyze
        request_log.display_status();
        return Ok(());
    }

    if snapshot.heroes.is_empty() {
        return Err(AppError::EmptySnapshot);
    }

    let enemy_team = resolve_heroes(&snapshot.heroes, &args.enemies)?;
    let my_team = resolve_heroes(&snapshot.heroes, &args.team)?;
    validate_draft(&enemy_team, &my_team)?;

    // Matchup lists arrive lazily, one hero at a time. The analysis pass
    // tolerates a partially populated table, so a failed fetch only weakens
    // the signal for that enemy.
    for hero in enemy_team.iter().chain(my_team.iter()) {
        if snapshot.has_matchups(hero.id) {
            continue;
        }
        if !request_log.can_make_request() {
            display_info("API budget exhausted, analyzing with cached matchups only");
            break;
        }
        match client.get_matchups(hero.id) {
            Ok(matchups) => {
                request_log.record_request();
                request_log.save().ok();
                snapshot.insert_matchups(hero.id, matchups);
            }
            Err(e) => display_info(&format!(
                "Could not fetch matchups for {}: {}",
                hero.localized_name, e
            )),
        }
    }
    snapshot.save().ok();

    let table = snapshot.matchup_table();
    let my_slots = roster_slots(&my_team);

    let suggestions = composer::suggest(&snapshot.heroes, &enemy_team, &table, &my_slots);
    display_suggestions(&suggestions, &snapshot.heroes, args.top_n);
    display_items(&suggestions.items);

    display_team_profile("Enemy", &team_profile(&enemy_team));
    if !my_team.is_empty() {
        display_team_profile("Your", &team_profile(&my_team));
        display_draft_advantage(draft_advantage(&my_team, &enemy_team, &table));
    }

    if let Some(position) = args.position {
        let entries = position_top_heroes(&snapshot.heroes, position);
        display_position_meta(&entries, &snapshot.heroes, position);
    }

    request_log.display_status();

    Ok(())
}

fn fetch_roster(
    client: &StatsApiClient,
    snapshot: &mut SnapshotCache,
    request_log: &mut RequestLog,
) -> Result<(), AppError> {
    if !request_log.can_make_request() {
        request_log.display_status();
        return Err(AppError::RateLimited);
    }

    let heroes = client.get_hero_stats()?;
    request_log.record_request();
    request_log.save().ok();

    display_success(&format!("Downloaded {} heroes", heroes.len()));
    snapshot.set_heroes(heroes);
    snapshot.save()?;

    Ok(())
}

fn refresh_snapshot(
    client: &StatsApiClient,
    snapshot: &mut SnapshotCache,
    request_log: &mut RequestLog,
) -> Result<(), AppError> {
    display_info("Refreshing hero roster...");
    fetch_roster(client, snapshot, request_log)?;

    let hero_ids: Vec<(u32, String)> = snapshot
        .heroes
        .iter()
        .map(|h| (h.id, h.localized_name.clone()))
        .collect();

    let pb = ProgressBar::new(hero_ids.len() as u64);
    pb.set_message("Fetching matchup tables");

    for (hero_id, name) in hero_ids {
        pb.inc(1);

        if !request_log.can_make_request() {
            display_info("API budget exhausted, stopping refresh early");
            break;
        }

        match client.get_matchups(hero_id) {
            Ok(matchups) => {
                request_log.record_request();
                request_log.save().ok();
                snapshot.insert_matchups(hero_id, matchups);
            }
            Err(e) => display_info(&format!("Skipping {}: {}", name, e)),
        }

        thread::sleep(Duration::from_millis(BULK_FETCH_DELAY_MS));
    }

    pb.finish_with_message("✓ Matchup tables fetched");

    snapshot.save()?;
    display_success(&format!(
        "Snapshot saved ({} heroes, {} matchup tables)",
        snapshot.heroes.len(),
        snapshot.matchups.len()
    ));

    Ok(())
}

fn resolve_heroes(roster: &[Hero], names: &[String]) -> Result<Vec<Hero>, AppError> {
    names
        .iter()
        .map(|name| {
            roster
                .iter()
                .find(|h| h.localized_name.eq_ignore_ascii_case(name))
                .cloned()
                .ok_or_else(|| AppError::HeroNotFound(name.clone()))
        })
        .collect()
}

// Selection invariants live here, not in the analysis pass: five slots per
// side, no hero picked twice across both sides.
fn validate_draft(enemy_team: &[Hero], my_team: &[Hero]) -> Result<(), AppError> {
    if enemy_team.len() > TEAM_SLOTS || my_team.len() > TEAM_SLOTS {
        return Err(AppError::TeamFull);
    }

    let mut seen = HashSet::new();
    for hero in enemy_team.iter().chain(my_team.iter()) {
        if !seen.insert(hero.id) {
            return Err(AppError::DuplicatePick(hero.localized_name.clone()));
        }
    }

    Ok(())
}

fn roster_slots(team: &[Hero]) -> Vec<Option<Hero>> {
    let mut slots: Vec<Option<Hero>> = team.iter().cloned().map(Some).collect();
    slots.resize(TEAM_SLOTS, None);
    slots
}
