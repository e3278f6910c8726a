use crate::api::models::Hero;
use std::collections::BTreeMap;

const MAX_ITEMS: usize = 6;
const MAX_REASONS: usize = 2;

const GENERIC_CATEGORY_WEIGHT: f64 = 0.5;
const NAMED_CATEGORY_WEIGHT: f64 = 1.0;

#[derive(Debug, Clone)]
pub struct CounterItem {
    pub id: String,
    pub name: String,
    pub reason: String,
    pub priority: f64,
}

struct CategoryCounters {
    items: &'static [&'static str],
    reason: &'static str,
}

fn category_counters(category: &str) -> Option<CategoryCounters> {
    let (items, reason): (&'static [&'static str], &'static str) = match category {
        "evasion" => (&["monkey_king_bar"], "To counter Evasion"),
        "passives" => (&["silver_edge"], "To break strong passives"),
        "regen" => (&["spirit_vessel", "shivas_guard"], "To reduce healing/regen"),
        "magic" => (&["black_king_bar", "pipe"], "To survive magic burst/CC"),
        "elusive" => (
            &["orchid", "bloodthorn", "scythe_of_vyse"],
            "To lock down elusive targets",
        ),
        "physical" => (
            &["ghost", "crimson_guard", "shivas_guard"],
            "To mitigate physical damage",
        ),
        "buffs" => (&["nullifier"], "To dispel buffs and items"),
        "mana" => (&["diffusal_blade"], "To burn mana"),
        _ => return None,
    };
    Some(CategoryCounters { items, reason })
}

fn hero_item_categories(localized_name: &str) -> &'static [&'static str] {
    match localized_name {
        "Phantom Assassin" => &["evasion", "passives"],
        "Bristleback" => &["passives", "regen"],
        "Spectre" => &["passives"],
        "Dragon Knight" => &["passives"],
        "Alchemist" => &["regen"],
        "Morphling" => &["regen", "elusive"],
        "Huskar" => &["regen"],
        "Necrophos" => &["regen", "buffs"],
        "Anti-Mage" => &["elusive", "mana"],
        "Storm Spirit" => &["elusive"],
        "Puck" => &["elusive"],
        "Ember Spirit" => &["elusive"],
        "Void Spirit" => &["elusive"],
        "Medusa" => &["mana"],
        "Timbersaw" => &["regen", "passives"],
        "Windranger" => &["evasion"],
        "Slark" => &["passives", "elusive"],
        "Life Stealer" => &["physical"],
        "Omniknight" => &["buffs"],
        "Ursa" => &["physical", "buffs"],
        _ => &[],
    }
}

// Accumulator keyed by item id; BTreeMap keeps tie order deterministic.
type ItemAccumulator = BTreeMap<&'static str, (f64, Vec<&'static str>)>;

fn apply_category(acc: &mut ItemAccumulator, category: &str, weight: f64) {
    if let Some(counters) = category_counters(category) {
        for &item in counters.items {
            let entry = acc.entry(item).or_insert((0.0, Vec::new()));
            entry.0 += weight;
            if !entry.1.contains(&counters.reason) {
                entry.1.push(counters.reason);
            }
        }
    }
}

/// Ranked equipment shortlist against an enemy lineup, at most 6 entries.
///
/// Name-specific categories add a full point per contributing enemy.
/// Role-implied categories (Nuker -> magic, Escape -> elusive) are deduped
/// first and each applied once at half weight, no matter how many enemies
/// imply them.
pub fn suggest_items(enemy_team: &[Hero]) -> Vec<CounterItem> {
    let mut acc = ItemAccumulator::new();
    let mut generic_categories: Vec<&'static str> = Vec::new();

    for enemy in enemy_team {
        for category in hero_item_categories(&enemy.localized_name) {
            apply_category(&mut acc, category, NAMED_CATEGORY_WEIGHT);
        }

        if enemy.has_role("Nuker") && !generic_categories.contains(&"magic") {
            generic_categories.push("magic");
        }
        if enemy.has_role("Escape") && !generic_categories.contains(&"elusive") {
            generic_categories.push("elusive");
        }
    }

    for category in generic_categories {
        apply_category(&mut acc, category, GENERIC_CATEGORY_WEIGHT);
    }

    let mut items: Vec<CounterItem> = acc
        .into_iter()
        .map(|(id, (priority, reasons))| CounterItem {
            id: id.to_string(),
            name: display_name(id),
            reason: reasons
                .iter()
                .take(MAX_REASONS)
                .copied()
                .collect::<Vec<_>>()
                .join(", "),
            priority,
        })
        .collect();

    items.sort_by(|a, b| b.priority.partial_cmp(&a.priority).unwrap_or(std::cmp::Ordering::Equal));
    items.truncate(MAX_ITEMS);

    items
}

/// "monkey_king_bar" -> "Monkey King Bar"
fn display_name(id: &str) -> String {
    id.split('_')
        .map(|token| {
            let mut chars = token.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enemy(name: &str, roles: &[&str]) -> Hero {
        Hero {
            id: 1,
            localized_name: name.to_string(),
            roles: roles.iter().map(|r| r.to_string()).collect(),
            ..Default::default()
        }
    }

    fn find<'a>(items: &'a [CounterItem], id: &str) -> &'a CounterItem {
        items.iter().find(|i| i.id == id).expect("item missing")
    }

    #[test]
    fn empty_enemy_team_suggests_nothing() {
        assert!(suggest_items(&[]).is_empty());
    }

    #[test]
    fn named_categories_add_a_full_point() {
        let items = suggest_items(&[enemy("Phantom Assassin", &[])]);

        assert_eq!(find(&items, "monkey_king_bar").priority, 1.0);
        assert_eq!(find(&items, "silver_edge").priority, 1.0);
        assert_eq!(find(&items, "monkey_king_bar").name, "Monkey King Bar");
        assert_eq!(find(&items, "monkey_king_bar").reason, "To counter Evasion");
    }

    #[test]
    fn disjoint_categories_stay_at_priority_one() {
        let team = vec![enemy("Phantom Assassin", &[]), enemy("Alchemist", &[])];
        let items = suggest_items(&team);

        for item in &items {
            assert_eq!(item.priority, 1.0, "item {} double counted", item.id);
        }
    }

    #[test]
    fn role_implied_categories_are_half_weight_and_deduped() {
        // Two Nukers imply the magic category once, not twice
        let team = vec![enemy("Unknown One", &["Nuker"]), enemy("Unknown Two", &["Nuker"])];
        let items = suggest_items(&team);

        assert_eq!(find(&items, "black_king_bar").priority, 0.5);
        assert_eq!(find(&items, "pipe").priority, 0.5);
    }

    #[test]
    fn named_and_generic_paths_stack() {
        // Storm Spirit maps to elusive by name; his Escape role implies
        // elusive again at half weight
        let team = vec![enemy("Storm Spirit", &["Escape"])];
        let items = suggest_items(&team);

        assert_eq!(find(&items, "orchid").priority, 1.5);
    }

    #[test]
    fn items_shared_across_categories_accumulate_reasons() {
        // Shivas Guard counters both regen (Alchemist) and physical (Ursa)
        let team = vec![enemy("Alchemist", &[]), enemy("Ursa", &[])];
        let items = suggest_items(&team);

        let shivas = find(&items, "shivas_guard");
        assert_eq!(shivas.priority, 2.0);
        assert_eq!(
            shivas.reason,
            "To reduce healing/regen, To mitigate physical damage"
        );
        assert_eq!(items[0].id, "shivas_guard");
    }

    #[test]
    fn output_is_capped_at_six() {
        let team = vec![
            enemy("Phantom Assassin", &[]),
            enemy("Necrophos", &["Nuker"]),
            enemy("Anti-Mage", &["Escape"]),
            enemy("Ursa", &[]),
        ];
        let items = suggest_items(&team);

        assert_eq!(items.len(), 6);
        assert!(items.windows(2).all(|w| w[0].priority >= w[1].priority));
    }

    #[test]
    fn unknown_heroes_without_roles_contribute_nothing() {
        assert!(suggest_items(&[enemy("Unknown Hero", &["Carry"])]).is_empty());
    }
}
