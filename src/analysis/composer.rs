use crate::analysis::items::{suggest_items, CounterItem};
use crate::analysis::roles::Role;
use crate::analysis::scorer::{calculate_advantage, CounterScore};
use crate::api::models::{Hero, MatchupTable};
use std::collections::HashSet;

const MAX_SUGGESTIONS: usize = 10;

#[derive(Debug, Default)]
pub struct DraftSuggestions {
    pub cores: Vec<CounterScore>,
    pub supports: Vec<CounterScore>,
    pub items: Vec<CounterItem>,
}

/// Role-partitioned counter-pick lists plus the item shortlist.
///
/// Already-picked heroes on either side are excluded. Flex heroes appear in
/// BOTH lists: they are viable in either slot type.
pub fn suggest(
    all_heroes: &[Hero],
    enemy_team: &[Hero],
    matchups: &MatchupTable,
    my_team: &[Option<Hero>],
) -> DraftSuggestions {
    if enemy_team.is_empty() {
        return DraftSuggestions::default();
    }

    let scored = calculate_advantage(all_heroes, enemy_team, matchups);
    let items = suggest_items(enemy_team);

    let picked: HashSet<u32> = my_team
        .iter()
        .flatten()
        .map(|h| h.id)
        .chain(enemy_team.iter().map(|h| h.id))
        .collect();

    let available: Vec<&CounterScore> =
        scored.iter().filter(|s| !picked.contains(&s.hero_id)).collect();

    let cores = available
        .iter()
        .filter(|s| matches!(s.role, Role::Core | Role::Flex))
        .take(MAX_SUGGESTIONS)
        .map(|s| (*s).clone())
        .collect();

    let supports = available
        .iter()
        .filter(|s| matches!(s.role, Role::Support | Role::Flex))
        .take(MAX_SUGGESTIONS)
        .map(|s| (*s).clone())
        .collect();

    DraftSuggestions {
        cores,
        supports,
        items,
    }
}
