use tracing::instrument;

use crate::model::{RoundRobinType, ScheduleConfig, SchedulePreview, Team};
use crate::scheduler::weeks;

/// Summary numbers for a team list and configuration, computed without
/// materializing the schedule. Agrees with what [`generate_schedule`]
/// produces for the same inputs, so the host UI can show it beforehand.
///
/// [`generate_schedule`]: crate::generate_schedule
#[instrument(skip(teams, schedule), fields(teams = teams.len()))]
pub fn schedule_preview(teams: &[Team], schedule: &ScheduleConfig) -> SchedulePreview {
    let team_count = teams.len() as u32;
    if team_count < 2 {
        return SchedulePreview {
            team_count,
            ..SchedulePreview::default()
        };
    }

    let padded = team_count + team_count % 2;
    let passes = match schedule.round_robin {
        RoundRobinType::Single => 1,
        RoundRobinType::Double => 2,
    };
    let round_count = passes * (padded - 1);
    let bye_week_count = weeks::bye_week_count(round_count, schedule);
    SchedulePreview {
        team_count,
        games_per_team: passes * (team_count - 1),
        total_games: passes * team_count * (team_count - 1) / 2,
        natural_byes: if team_count % 2 == 1 { passes * team_count } else { 0 },
        round_count,
        bye_week_count,
        total_weeks: round_count + bye_week_count,
    }
}
