use chrono::{Datelike, Duration, NaiveDate, Weekday};
use itertools::Itertools;

use crate::model::{ByeMode, ScheduleConfig};

/// Most rest weeks the `auto` policy will insert.
pub(crate) const MAX_AUTO_BYE_WEEKS: u32 = 3;

/// Number of league-wide rest weeks for the configured policy.
pub(crate) fn bye_week_count(total_rounds: u32, schedule: &ScheduleConfig) -> u32 {
    match schedule.bye_mode {
        ByeMode::None => 0,
        ByeMode::Auto => schedule
            .season_weeks
            .saturating_sub(total_rounds)
            .min(MAX_AUTO_BYE_WEEKS),
        ByeMode::Custom => schedule.bye_week_count,
    }
}

/// Week numbers (1-based) that rest instead of hosting a round.
///
/// With `k` rest weeks over `W` total weeks they land at
/// `floor(W / (k + 1)) * i` for `i = 1..=k`, spreading them as evenly as
/// integer division allows.
pub(crate) fn bye_week_numbers(total_rounds: u32, schedule: &ScheduleConfig) -> Vec<u32> {
    let count = bye_week_count(total_rounds, schedule);
    let total_weeks = total_rounds + count;
    let gap = total_weeks / (count + 1);
    (1..=count).map(|i| gap * i).collect_vec()
}

/// Date for calendar week `week`: the season start advanced by whole weeks,
/// then forward to the next `game_day`. A date already on `game_day` stays.
pub(crate) fn week_date(season_start: NaiveDate, week: u32, game_day: Weekday) -> NaiveDate {
    let base = season_start + Duration::weeks(i64::from(week) - 1);
    let ahead = (7 + i64::from(game_day.num_days_from_monday())
        - i64::from(base.weekday().num_days_from_monday()))
        % 7;
    base + Duration::days(ahead)
}
