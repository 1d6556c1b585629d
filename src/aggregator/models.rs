use crate::warcraftlogs::models::{CharacterParse, Fight};

/// Roster entry: an exported character enriched from the friendlies table.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub name: String,
    pub server: String,
    pub region: String,
    pub class: Option<String>,
    pub spec: Option<String>,
}

/// A historical parse tagged with the owning player's name.
#[derive(Debug, Clone)]
pub struct TaggedParse {
    pub player_name: String,
    pub parse: CharacterParse,
}

/// One row of a per-fight ranking table.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedParse {
    pub player_name: String,
    pub percentile: i32,
    pub spec: Option<String>,
    pub class: Option<String>,
}

/// Ranked parses of one raid fight, labelled by the fight's display name.
#[derive(Debug, Clone)]
pub struct FightParses {
    pub name: String,
    pub fight: Fight,
    /// Sorted descending by percentile, ties keep their order.
    pub parses: Vec<RankedParse>,
}

/// Cross-fight average for one player.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerAverage {
    pub player_name: String,
    pub class: Option<String>,
    pub spec: Option<String>,
    /// Mean percentile, rounded half away from zero.
    pub average: i32,
    /// Number of parses contributing to the average.
    pub n_fights: usize,
}
