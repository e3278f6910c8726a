use crate::api::models::Hero;

/// Minimum sample size for a hero to appear on a position board.
pub const MIN_POSITION_PICKS: u64 = 500;

const MAX_ENTRIES: usize = 10;

#[derive(Debug, Clone)]
pub struct PositionEntry {
    pub hero_id: u32,
    pub win_rate: f64,
    pub picks: u64,
}

/// Strongest heroes at one of the five positions by public win rate,
/// capped at 10. Out-of-range positions yield an empty list.
pub fn position_top_heroes(all_heroes: &[Hero], position: u8) -> Vec<PositionEntry> {
    let mut entries: Vec<PositionEntry> = all_heroes
        .iter()
        .filter_map(|hero| {
            let (picks, wins) = hero.position_stats(position)?;
            if picks < MIN_POSITION_PICKS {
                return None;
            }
            Some(PositionEntry {
                hero_id: hero.id,
                win_rate: wins as f64 / picks as f64 * 100.0,
                picks,
            })
        })
        .collect();

    entries.sort_by(|a, b| b.win_rate.partial_cmp(&a.win_rate).unwrap_or(std::cmp::Ordering::Equal));
    entries.truncate(MAX_ENTRIES);

    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hero(id: u32, pos1_pick: u64, pos1_win: u64) -> Hero {
        Hero {
            id,
            localized_name: format!("Hero {}", id),
            pos1_pick,
            pos1_win,
            ..Default::default()
        }
    }

    #[test]
    fn low_sample_heroes_are_excluded() {
        let roster = vec![hero(1, 499, 400), hero(2, 500, 250)];
        let entries = position_top_heroes(&roster, 1);

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].hero_id, 2);
        assert!((entries[0].win_rate - 50.0).abs() < 1e-9);
    }

    #[test]
    fn entries_are_sorted_by_win_rate() {
        let roster = vec![hero(1, 1000, 480), hero(2, 1000, 540), hero(3, 1000, 510)];
        let entries = position_top_heroes(&roster, 1);

        let ids: Vec<u32> = entries.iter().map(|e| e.hero_id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn output_caps_at_ten() {
        let roster: Vec<Hero> = (1..=15).map(|id| hero(id, 1000, 450 + id as u64)).collect();
        assert_eq!(position_top_heroes(&roster, 1).len(), 10);
    }

    #[test]
    fn invalid_position_yields_nothing() {
        let roster = vec![hero(1, 1000, 500)];
        assert!(position_top_heroes(&roster, 0).is_empty());
        assert!(position_top_heroes(&roster, 6).is_empty());
    }
}
