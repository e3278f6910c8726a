use crate::api::models::Hero;

const TEAM_SIZE: usize = 5;

/// Coverage percentages of a five-slot draft, plus the magic/physical
/// damage split. Percentages are over the full five slots, so a partial
/// draft reads as partial coverage.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeamProfile {
    pub disable: f64,
    pub durability: f64,
    pub push: f64,
    pub initiation: f64,
    /// Share of damage sources that are magic, in [0, 100].
    pub magic_share: f64,
}

pub fn team_profile(team: &[Hero]) -> TeamProfile {
    if team.is_empty() {
        return TeamProfile::default();
    }

    let coverage = |role: &str| {
        team.iter().filter(|h| h.has_role(role)).count() as f64 / TEAM_SIZE as f64 * 100.0
    };

    let magic_sources = team.iter().filter(|h| h.has_role("Nuker")).count();
    let physical_sources = team
        .iter()
        .filter(|h| h.attack_type == "Melee" || h.has_role("Carry"))
        .count();
    let damage_sources = (magic_sources + physical_sources).max(1);

    TeamProfile {
        disable: coverage("Disabler"),
        durability: coverage("Durable"),
        push: coverage("Pusher"),
        initiation: coverage("Initiator"),
        magic_share: magic_sources as f64 / damage_sources as f64 * 100.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hero(roles: &[&str], attack_type: &str) -> Hero {
        Hero {
            id: 1,
            localized_name: "Test".to_string(),
            attack_type: attack_type.to_string(),
            roles: roles.iter().map(|r| r.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn empty_team_profiles_to_zero() {
        assert_eq!(team_profile(&[]), TeamProfile::default());
    }

    #[test]
    fn coverage_is_over_five_slots() {
        let team = vec![
            hero(&["Disabler"], "Ranged"),
            hero(&["Disabler", "Durable"], "Melee"),
        ];
        let profile = team_profile(&team);

        assert!((profile.disable - 40.0).abs() < 1e-9);
        assert!((profile.durability - 20.0).abs() < 1e-9);
        assert_eq!(profile.push, 0.0);
    }

    #[test]
    fn magic_share_balances_nukers_against_physical() {
        // One Nuker against one Carry; a ranged Carry still counts as a
        // physical source through its role
        let team = vec![
            hero(&["Nuker"], "Ranged"),
            hero(&["Carry"], "Ranged"),
        ];
        let profile = team_profile(&team);
        assert!((profile.magic_share - 50.0).abs() < 1e-9);
    }

    #[test]
    fn magic_share_survives_a_team_with_no_damage_tags() {
        let team = vec![hero(&["Escape"], "Ranged")];
        assert_eq!(team_profile(&team).magic_share, 0.0);
    }
}
