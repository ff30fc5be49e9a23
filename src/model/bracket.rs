use serde::Serialize;

use crate::model::TeamRef;

/// A single-elimination bracket, widest round first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bracket {
    pub rounds: Vec<BracketRound>,
}

/// One round of bracket play.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BracketRound {
    /// 1-based; round 1 holds the most matches.
    pub round: u32,
    pub matches: Vec<BracketMatch>,
}

/// A bracket pairing. Empty slots are first-round byes or await winners from
/// the previous round.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BracketMatch {
    pub home: Option<TeamRef>,
    pub away: Option<TeamRef>,
}
