use crate::analysis::classifier::{classify_counter, CounterTier};
use crate::analysis::meta::global_win_rate;
use crate::analysis::roles::{classify_role, Role};
use crate::api::models::{Hero, MatchupTable};
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct CounterScore {
    pub hero_id: u32,
    /// Mean per-enemy edge, roughly [-0.5, 0.5]. Positive means the hero
    /// historically beats this lineup.
    pub score: f64,
    pub role: Role,
    pub win_rate: f64,
    pub tier: CounterTier,
}

/// Signed advantage of every roster hero against the enemy lineup.
///
/// Each enemy's own matchup list holds the ENEMY's record per opponent, so a
/// 55% enemy win rate against a candidate is a -0.05 edge for the candidate.
/// The sum is always divided by the full enemy count: enemies without data
/// contribute nothing, which pulls sparse-data heroes toward zero instead of
/// inflating them.
pub fn calculate_advantage(
    all_heroes: &[Hero],
    enemy_team: &[Hero],
    matchups: &MatchupTable,
) -> Vec<CounterScore> {
    if enemy_team.is_empty() {
        return Vec::new();
    }

    let mut sums: HashMap<u32, f64> = all_heroes.iter().map(|h| (h.id, 0.0)).collect();

    for enemy in enemy_team {
        for m in matchups.for_subject(enemy.id) {
            if m.games_played == 0 {
                continue;
            }
            if let Some(sum) = sums.get_mut(&m.hero_id) {
                let enemy_win_rate = m.wins as f64 / m.games_played as f64;
                *sum += 0.5 - enemy_win_rate;
            }
        }
    }

    let mut scores: Vec<CounterScore> = all_heroes
        .iter()
        .filter_map(|hero| {
            let sum = sums.get(&hero.id)?;
            let score = sum / enemy_team.len() as f64;
            let win_rate = global_win_rate(hero);

            Some(CounterScore {
                hero_id: hero.id,
                score,
                role: classify_role(hero),
                win_rate,
                tier: classify_counter(win_rate, score),
            })
        })
        .collect();

    // Stable sort: ties keep roster order
    scores.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));

    scores
}

/// Mean pairwise edge of my picked heroes over the enemy picks, positive
/// when my side is favored. Reads each of MY heroes' own matchup lists, so
/// the stored wins are my wins and no inversion applies. Pairs without data
/// count toward the divisor but add nothing.
pub fn draft_advantage(my_team: &[Hero], enemy_team: &[Hero], matchups: &MatchupTable) -> f64 {
    if my_team.is_empty() || enemy_team.is_empty() {
        return 0.0;
    }

    let mut total = 0.0;
    for mine in my_team {
        let list = matchups.for_subject(mine.id);
        for enemy in enemy_team {
            if let Some(m) = list.iter().find(|m| m.hero_id == enemy.id) {
                if m.games_played > 0 {
                    total += m.wins as f64 / m.games_played as f64 - 0.5;
                }
            }
        }
    }

    total / (my_team.len() * enemy_team.len()) as f64
}
