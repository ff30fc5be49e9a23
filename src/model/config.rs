use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::error::{Result, ScheduleError};
use crate::model::Venue;

/// Game day used to anchor each week when `game_days` is empty.
pub const DEFAULT_GAME_DAY: Weekday = Weekday::Sat;

/// Kickoff time used when `time_slots` is empty.
pub const DEFAULT_TIME_SLOT: NaiveTime = match NaiveTime::from_hms_opt(9, 0, 0) {
    Some(time) => time,
    None => panic!("9:00 is a valid time of day"),
};

const TIME_SLOT_FORMAT: &str = "%I:%M %p";
const TIME_SLOT_FORMAT_ALT: &str = "%H:%M";

/// Whether each pair of teams meets once or twice in a season.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum RoundRobinType {
    Single,
    Double,
}

/// Policy for inserting league-wide rest weeks into the season.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum ByeMode {
    None,
    Auto,
    Custom,
}

/// Immutable generation parameters for one season schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// Desired season length in calendar weeks. Only the `auto` bye policy
    /// consults this; the generated season is as long as its rounds and rest
    /// weeks require.
    pub season_weeks: u32,
    pub round_robin: RoundRobinType,
    pub bye_mode: ByeMode,
    /// Number of rest weeks when `bye_mode` is `custom`; ignored otherwise.
    pub bye_week_count: u32,
    /// The first entry anchors every game week; [`DEFAULT_GAME_DAY`] when empty.
    pub game_days: Vec<Weekday>,
    /// Cycled across a week's games in order; [`DEFAULT_TIME_SLOT`] when empty.
    pub time_slots: Vec<NaiveTime>,
}

/// How game locations are resolved.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum FieldMode {
    /// Games are hosted on the home team's own field.
    TeamHome,
    /// All games run at the league's first configured venue.
    LeagueCentral,
    /// Home field when the team has one, league venue otherwise.
    Mixed,
}

/// Venue-resolution policy plus the league's own fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldConfig {
    pub mode: FieldMode,
    pub venues: Vec<Venue>,
}

/// Parse a stored game-day value ("saturday", "Sun", ...) into a weekday.
pub fn parse_game_day(value: &str) -> Result<Weekday> {
    value
        .trim()
        .parse()
        .map_err(|_| ScheduleError::GameDay(value.to_owned()))
}

/// Parse a stored time-slot value in either 12-hour ("6:30 PM") or 24-hour
/// ("18:30") form.
pub fn parse_time_slot(value: &str) -> Result<NaiveTime> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, TIME_SLOT_FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(value, TIME_SLOT_FORMAT_ALT))
        .map_err(ScheduleError::TimeSlot)
}
