use crate::api::models::Hero;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Core,
    Support,
    Flex,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Core => write!(f, "Core"),
            Role::Support => write!(f, "Support"),
            Role::Flex => write!(f, "Flex"),
        }
    }
}

/// Team-role tag from the hero's static role list and primary attribute.
///
/// Heroes tagged both Carry and Support lean on their attribute: agility
/// leans Core, intelligence leans Support, strength stays a true Flex.
pub fn classify_role(hero: &Hero) -> Role {
    let is_carry = hero.has_role("Carry");
    let is_support = hero.has_role("Support");

    if is_carry && !is_support {
        return Role::Core;
    }
    if is_support && !is_carry {
        return Role::Support;
    }

    if is_carry && is_support {
        return match hero.primary_attr.as_str() {
            "agi" => Role::Core,
            "int" => Role::Support,
            _ => Role::Flex,
        };
    }

    Role::Flex
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hero(roles: &[&str], primary_attr: &str) -> Hero {
        Hero {
            id: 1,
            localized_name: "Test".to_string(),
            primary_attr: primary_attr.to_string(),
            roles: roles.iter().map(|r| r.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn carry_only_is_core() {
        assert_eq!(classify_role(&hero(&["Carry", "Durable"], "str")), Role::Core);
    }

    #[test]
    fn support_only_is_support() {
        assert_eq!(
            classify_role(&hero(&["Support", "Disabler"], "int")),
            Role::Support
        );
    }

    #[test]
    fn dual_tagged_follows_primary_attribute() {
        assert_eq!(classify_role(&hero(&["Carry", "Support"], "agi")), Role::Core);
        assert_eq!(
            classify_role(&hero(&["Carry", "Support"], "int")),
            Role::Support
        );
        assert_eq!(classify_role(&hero(&["Carry", "Support"], "str")), Role::Flex);
        assert_eq!(classify_role(&hero(&["Carry", "Support"], "all")), Role::Flex);
    }

    #[test]
    fn neither_tag_is_flex() {
        assert_eq!(classify_role(&hero(&["Nuker", "Pusher"], "int")), Role::Flex);
        assert_eq!(classify_role(&hero(&[], "str")), Role::Flex);
    }
}
