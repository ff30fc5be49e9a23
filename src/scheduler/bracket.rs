use itertools::Itertools;
use tracing::{debug, instrument};

use crate::error::{Result, ScheduleError};
use crate::model::{Bracket, BracketMatch, BracketRound, Team, TeamRef};

/// Build a single-elimination bracket from a seeded team list.
///
/// `bracket_size` must be a power of two, at least 2. First-round slots are
/// filled from `seeds` in order (seed `2i` hosts seed `2i + 1`); slots beyond
/// the seed list and all later rounds stay empty until winners are known.
#[instrument(skip(seeds), fields(seeds = seeds.len()))]
pub fn generate_bracket(seeds: &[Team], bracket_size: usize) -> Result<Bracket> {
    if bracket_size < 2 || !bracket_size.is_power_of_two() {
        return Err(ScheduleError::BracketSize(bracket_size));
    }

    let round_count = bracket_size.trailing_zeros();
    let rounds = (1..=round_count)
        .map(|round| {
            let match_count = 2usize.pow(round_count - round);
            let matches = (0..match_count)
                .map(|i| {
                    if round == 1 {
                        BracketMatch {
                            home: seeds.get(2 * i).map(TeamRef::from),
                            away: seeds.get(2 * i + 1).map(TeamRef::from),
                        }
                    } else {
                        BracketMatch::default()
                    }
                })
                .collect_vec();
            BracketRound { round, matches }
        })
        .collect_vec();

    debug!(rounds = rounds.len(), bracket_size, "built bracket");
    Ok(Bracket { rounds })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster(count: usize) -> Vec<Team> {
        (0..count)
            .map(|i| Team {
                id: format!("team-{i}"),
                name: format!("Team {i}"),
                club_id: format!("club-{i}"),
                division: "U10".into(),
                home_venue: None,
            })
            .collect()
    }

    #[test]
    fn eight_team_bracket_shape() {
        let bracket = generate_bracket(&roster(8), 8).unwrap();
        assert_eq!(bracket.rounds.len(), 3);
        let sizes = bracket.rounds.iter().map(|r| r.matches.len()).collect_vec();
        assert_eq!(sizes, vec![4, 2, 1]);

        let first = &bracket.rounds[0];
        assert_eq!(first.matches[0].home.as_ref().unwrap().id, "team-0");
        assert_eq!(first.matches[0].away.as_ref().unwrap().id, "team-1");
        assert_eq!(first.matches[3].home.as_ref().unwrap().id, "team-6");
        assert_eq!(first.matches[3].away.as_ref().unwrap().id, "team-7");

        assert!(bracket
            .rounds[1..]
            .iter()
            .flat_map(|r| &r.matches)
            .all(|m| m.home.is_none() && m.away.is_none()));
    }

    #[test]
    fn short_seed_list_leaves_open_slots() {
        let bracket = generate_bracket(&roster(5), 8).unwrap();
        let first = &bracket.rounds[0];
        assert_eq!(first.matches[2].home.as_ref().unwrap().id, "team-4");
        assert!(first.matches[2].away.is_none());
        assert!(first.matches[3].home.is_none());
        assert!(first.matches[3].away.is_none());
    }

    #[test]
    fn two_team_bracket_is_a_final() {
        let bracket = generate_bracket(&roster(2), 2).unwrap();
        assert_eq!(bracket.rounds.len(), 1);
        assert_eq!(bracket.rounds[0].matches.len(), 1);
    }

    #[test]
    fn rejects_sizes_that_cannot_host_single_elimination() {
        assert!(matches!(
            generate_bracket(&roster(6), 6),
            Err(ScheduleError::BracketSize(6))
        ));
        assert!(matches!(
            generate_bracket(&roster(2), 1),
            Err(ScheduleError::BracketSize(1))
        ));
        assert!(matches!(
            generate_bracket(&roster(2), 0),
            Err(ScheduleError::BracketSize(0))
        ));
    }
}
