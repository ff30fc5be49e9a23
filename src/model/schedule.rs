use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;
use strum_macros::{Display, EnumString};

use crate::model::TeamRef;

/// How a game's location was determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum LocationSource {
    /// The home team's own field.
    TeamHome,
    /// A league-owned facility.
    LeagueField,
    /// No venue could be resolved; the caller must collect one.
    Manual,
}

/// One row of a generated season schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleEntry {
    pub division: String,
    /// 1-based calendar week within the season.
    pub week: u32,
    /// Shared by every entry in the week.
    pub date: NaiveDate,
    #[serde(flatten)]
    pub kind: EntryKind,
}

/// What a schedule row represents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum EntryKind {
    /// A real matchup between two teams.
    Game(GameFixture),
    /// A single team's idle turn arising from an odd team count.
    TeamBye(ByeFixture),
    /// A league-wide rest week; no team plays.
    RestWeek,
}

/// A scheduled matchup with resolved time and venue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameFixture {
    pub home: TeamRef,
    pub away: TeamRef,
    pub time: NaiveTime,
    /// Empty when `location_source` is `manual`.
    pub location: String,
    pub location_source: LocationSource,
}

impl GameFixture {
    /// Replace the resolved venue with a manually entered one.
    pub fn override_location(&mut self, location: impl Into<String>) {
        self.location = location.into();
        self.location_source = LocationSource::Manual;
    }
}

/// A natural bye: the team sits out this week's round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ByeFixture {
    pub team: TeamRef,
}

/// Summary numbers shown to the user before a schedule is committed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SchedulePreview {
    pub team_count: u32,
    pub games_per_team: u32,
    pub total_games: u32,
    pub natural_byes: u32,
    pub round_count: u32,
    pub bye_week_count: u32,
    pub total_weeks: u32,
}
