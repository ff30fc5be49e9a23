pub(crate) mod balance;
pub(crate) mod bracket;
pub(crate) mod preview;
pub(crate) mod rounds;
pub(crate) mod venue;
pub(crate) mod weeks;

use chrono::NaiveDate;
use tracing::{debug, instrument};

use crate::model::{
    ByeFixture, EntryKind, FieldConfig, GameFixture, ScheduleConfig, ScheduleEntry, Team, TeamRef,
    DEFAULT_GAME_DAY, DEFAULT_TIME_SLOT,
};
use self::rounds::RoundSlot;

/// Generate a complete season schedule for one division.
///
/// Entries come back ordered by week, then by matchup order within the week.
/// Each calendar week holds either one round of games (plus a natural bye
/// entry when the team count is odd) or a single league-wide rest marker.
/// Fewer than two teams yields an empty schedule; there is nothing to play.
#[instrument(skip(teams, fields), fields(teams = teams.len()))]
pub fn generate_schedule(
    teams: &[Team],
    schedule: &ScheduleConfig,
    fields: &FieldConfig,
    season_start: NaiveDate,
) -> Vec<ScheduleEntry> {
    if teams.len() < 2 {
        debug!("nothing to schedule");
        return Vec::new();
    }

    let division = teams[0].division.clone();
    let rounds = rounds::build_rounds(teams.len(), schedule.round_robin);
    let rest_weeks = weeks::bye_week_numbers(rounds.len() as u32, schedule);
    let total_weeks = rounds.len() as u32 + rest_weeks.len() as u32;
    let game_day = schedule
        .game_days
        .first()
        .copied()
        .unwrap_or(DEFAULT_GAME_DAY);
    debug!(
        rounds = rounds.len(),
        rest_weeks = rest_weeks.len(),
        total_weeks,
        "assembled season outline"
    );

    let mut ledger = balance::HomeAwayLedger::new(teams.len());
    let mut entries = Vec::new();
    let mut remaining = rounds.into_iter();
    for week in 1..=total_weeks {
        let date = weeks::week_date(season_start, week, game_day);
        if rest_weeks.contains(&week) {
            entries.push(ScheduleEntry {
                division: division.clone(),
                week,
                date,
                kind: EntryKind::RestWeek,
            });
            continue;
        }
        let Some(round) = remaining.next() else { break };

        let mut slot_cursor = 0;
        for (first, second) in round {
            let kind = match (first, second) {
                (RoundSlot::Team(a), RoundSlot::Team(b)) => {
                    let (home, away) = ledger.assign(a, b);
                    let (location, location_source) = venue::resolve_location(fields, &teams[home]);
                    let time = if schedule.time_slots.is_empty() {
                        DEFAULT_TIME_SLOT
                    } else {
                        schedule.time_slots[slot_cursor % schedule.time_slots.len()]
                    };
                    slot_cursor += 1;
                    EntryKind::Game(GameFixture {
                        home: TeamRef::from(&teams[home]),
                        away: TeamRef::from(&teams[away]),
                        time,
                        location,
                        location_source,
                    })
                }
                (RoundSlot::Team(idle), RoundSlot::Bye)
                | (RoundSlot::Bye, RoundSlot::Team(idle)) => EntryKind::TeamBye(ByeFixture {
                    team: TeamRef::from(&teams[idle]),
                }),
                // the rotation never holds more than one padding slot
                (RoundSlot::Bye, RoundSlot::Bye) => continue,
            };
            entries.push(ScheduleEntry {
                division: division.clone(),
                week,
                date,
                kind,
            });
        }
    }
    entries
}
