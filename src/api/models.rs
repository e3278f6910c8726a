use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// OpenDota /heroStats response. The numeric stat fields are defaulted because
// the API omits them for heroes with no recorded games in a bracket.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Hero {
    pub id: u32,
    #[serde(default)]
    pub name: String,
    pub localized_name: String,
    pub primary_attr: String,
    pub attack_type: String,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub img: String,

    #[serde(rename = "1_pick", default)]
    pub pos1_pick: u64,
    #[serde(rename = "1_win", default)]
    pub pos1_win: u64,
    #[serde(rename = "2_pick", default)]
    pub pos2_pick: u64,
    #[serde(rename = "2_win", default)]
    pub pos2_win: u64,
    #[serde(rename = "3_pick", default)]
    pub pos3_pick: u64,
    #[serde(rename = "3_win", default)]
    pub pos3_win: u64,
    #[serde(rename = "4_pick", default)]
    pub pos4_pick: u64,
    #[serde(rename = "4_win", default)]
    pub pos4_win: u64,
    #[serde(rename = "5_pick", default)]
    pub pos5_pick: u64,
    #[serde(rename = "5_win", default)]
    pub pos5_win: u64,

    #[serde(default)]
    pub pub_pick: u64,
    #[serde(default)]
    pub pub_win: u64,
    #[serde(default)]
    pub pub_pick_trend: Vec<u64>,
    #[serde(default)]
    pub pro_pick: u64,
    #[serde(default)]
    pub pro_win: u64,
    #[serde(default)]
    pub pro_ban: u64,
}

impl Hero {
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }

    /// Pick/win counts for one of the five positions, None outside 1-5.
    pub fn position_stats(&self, position: u8) -> Option<(u64, u64)> {
        match position {
            1 => Some((self.pos1_pick, self.pos1_win)),
            2 => Some((self.pos2_pick, self.pos2_win)),
            3 => Some((self.pos3_pick, self.pos3_win)),
            4 => Some((self.pos4_pick, self.pos4_win)),
            5 => Some((self.pos5_pick, self.pos5_win)),
            _ => None,
        }
    }
}

// OpenDota /heroes/{id}/matchups entry: the SUBJECT hero's record against
// one opponent. `wins` are wins by the subject, not by `hero_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Matchup {
    pub hero_id: u32,
    pub games_played: u64,
    pub wins: u64,
}

/// Matchup lists keyed by the subject hero's id.
///
/// `for_subject(axe_id)` answers "how did Axe fare against each opponent he
/// has faced" - reading it as the opponents' record against Axe inverts the
/// sign of every edge, so call sites go through this named lookup instead of
/// the raw map.
#[derive(Debug, Clone, Default)]
pub struct MatchupTable {
    by_subject: HashMap<u32, Vec<Matchup>>,
}

impl MatchupTable {
    pub fn new() -> Self {
        MatchupTable {
            by_subject: HashMap::new(),
        }
    }

    pub fn from_map(by_subject: HashMap<u32, Vec<Matchup>>) -> Self {
        MatchupTable { by_subject }
    }

    pub fn insert(&mut self, subject: u32, matchups: Vec<Matchup>) {
        self.by_subject.insert(subject, matchups);
    }

    /// The subject's per-opponent records. An unknown subject yields an
    /// empty slice; partially populated tables are expected.
    pub fn for_subject(&self, subject: u32) -> &[Matchup] {
        self.by_subject
            .get(&subject)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn contains_subject(&self, subject: u32) -> bool {
        self.by_subject.contains_key(&subject)
    }
}
