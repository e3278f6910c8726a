use crate::api::models::{Hero, Matchup, MatchupTable};
use crate::error::AppError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// On-disk snapshot of the hero roster and every matchup list fetched so
/// far. Matchup lists accumulate lazily; only the roster goes stale.
#[derive(Debug, Serialize, Deserialize)]
pub struct SnapshotCache {
    pub fetched_at: DateTime<Utc>,
    pub heroes: Vec<Hero>,
    pub matchups: HashMap<u32, Vec<Matchup>>,
}

impl SnapshotCache {
    pub fn new() -> Self {
        SnapshotCache {
            fetched_at: Utc::now(),
            heroes: Vec::new(),
            matchups: HashMap::new(),
        }
    }

    pub fn cache_path() -> PathBuf {
        let cache_dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".draft_gap");

        let _ = fs::create_dir_all(&cache_dir);

        cache_dir.join("snapshot.json")
    }

    pub fn load() -> Result<Self, AppError> {
        let path = Self::cache_path();

        match fs::read_to_string(&path) {
            Ok(content) => {
                serde_json::from_str(&content).map_err(|e| {
                    AppError::JsonError(format!("Failed to parse snapshot: {}", e))
                })
            }
            Err(_) => {
                // Snapshot doesn't exist yet, return empty
                Ok(SnapshotCache::new())
            }
        }
    }

    pub fn save(&self) -> Result<(), AppError> {
        let path = Self::cache_path();
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            AppError::JsonError(format!("Failed to serialize snapshot: {}", e))
        })?;

        fs::write(&path, json).map_err(|e| {
            AppError::JsonError(format!("Failed to write snapshot: {}", e))
        })?;

        Ok(())
    }

    pub fn set_heroes(&mut self, heroes: Vec<Hero>) {
        self.heroes = heroes;
        self.fetched_at = Utc::now();
    }

    pub fn insert_matchups(&mut self, hero_id: u32, matchups: Vec<Matchup>) {
        self.matchups.insert(hero_id, matchups);
    }

    pub fn has_matchups(&self, hero_id: u32) -> bool {
        self.matchups.contains_key(&hero_id)
    }

    /// Immutable snapshot handed to the analysis pass.
    pub fn matchup_table(&self) -> MatchupTable {
        MatchupTable::from_map(self.matchups.clone())
    }

    pub fn is_stale(&self, max_age_hours: u64) -> bool {
        let now = Utc::now();
        let age = now.signed_duration_since(self.fetched_at);
        age.num_hours() > max_age_hours as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_round_trips_through_json() {
        let mut snapshot = SnapshotCache::new();
        snapshot.heroes = vec![Hero {
            id: 1,
            localized_name: "Anti-Mage".to_string(),
            primary_attr: "agi".to_string(),
            attack_type: "Melee".to_string(),
            roles: vec!["Carry".to_string(), "Escape".to_string()],
            pub_pick: 1000,
            pub_win: 520,
            ..Default::default()
        }];
        snapshot.insert_matchups(
            1,
            vec![Matchup {
                hero_id: 2,
                games_played: 100,
                wins: 55,
            }],
        );

        let json = serde_json::to_string(&snapshot).unwrap();
        let restored: SnapshotCache = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.heroes.len(), 1);
        assert_eq!(restored.heroes[0].localized_name, "Anti-Mage");
        assert_eq!(restored.heroes[0].pub_pick, 1000);
        assert_eq!(restored.matchups[&1][0].wins, 55);
    }

    #[test]
    fn hero_stat_fields_deserialize_from_api_names() {
        let json = r#"{
            "id": 2,
            "localized_name": "Axe",
            "primary_attr": "str",
            "attack_type": "Melee",
            "roles": ["Initiator", "Durable"],
            "1_pick": 600,
            "1_win": 310,
            "pub_pick": 5000,
            "pub_win": 2600,
            "pub_pick_trend": [100, 120],
            "pro_pick": 30,
            "pro_ban": 25
        }"#;

        let hero: Hero = serde_json::from_str(json).unwrap();
        assert_eq!(hero.position_stats(1), Some((600, 310)));
        assert_eq!(hero.position_stats(6), None);
        assert!(hero.has_role("Durable"));
        assert_eq!(hero.pro_ban, 25);
        assert_eq!(hero.pub_pick_trend, vec![100, 120]);
    }

    #[test]
    fn fresh_snapshot_is_not_stale() {
        let snapshot = SnapshotCache::new();
        assert!(!snapshot.is_stale(24));
    }
}
