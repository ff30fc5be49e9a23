use itertools::Itertools;

use crate::model::RoundRobinType;

/// One slot in the rotation: a team (by index into the caller's list) or the
/// padding slot that turns an odd count even and marks natural byes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum RoundSlot {
    Team(usize),
    Bye,
}

/// Ordered pairings for one logical round, not yet mapped to a week.
pub(crate) type Round = Vec<(RoundSlot, RoundSlot)>;

/// Circle-method pairings: slot 0 stays fixed while the rest rotate, so each
/// unordered pair meets exactly once over `m - 1` rounds. A double
/// round-robin appends the same rounds with every pairing swapped, giving the
/// return fixtures.
pub(crate) fn build_rounds(team_count: usize, round_robin: RoundRobinType) -> Vec<Round> {
    let mut slots = (0..team_count).map(RoundSlot::Team).collect_vec();
    if team_count % 2 != 0 {
        slots.push(RoundSlot::Bye);
    }

    let m = slots.len();
    let fixed = slots[0];
    let mut rotation = slots[1..].to_vec();
    let mut rounds = Vec::with_capacity(m - 1);
    for _ in 0..m - 1 {
        let order = std::iter::once(fixed)
            .chain(rotation.iter().copied())
            .collect_vec();
        let pairings = (0..m / 2).map(|i| (order[i], order[m - 1 - i])).collect_vec();
        rounds.push(pairings);
        rotation = rotated(&rotation);
    }

    if round_robin == RoundRobinType::Double {
        let second_leg = rounds
            .iter()
            .map(|round| round.iter().map(|&(a, b)| (b, a)).collect_vec())
            .collect_vec();
        rounds.extend(second_leg);
    }
    rounds
}

/// The next rotation: the last slot moves to the front, the rest shift right.
fn rotated(rotation: &[RoundSlot]) -> Vec<RoundSlot> {
    let Some((&last, rest)) = rotation.split_last() else {
        return Vec::new();
    };
    std::iter::once(last).chain(rest.iter().copied()).collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn real_pairs(rounds: &[Round]) -> Vec<(usize, usize)> {
        rounds
            .iter()
            .flatten()
            .filter_map(|&(a, b)| match (a, b) {
                (RoundSlot::Team(x), RoundSlot::Team(y)) => Some((x.min(y), x.max(y))),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn single_covers_every_pair_exactly_once() {
        for n in 2..=11usize {
            let rounds = build_rounds(n, RoundRobinType::Single);
            let m = n + n % 2;
            assert_eq!(rounds.len(), m - 1, "n={n}");

            let pairs = real_pairs(&rounds);
            let unique: HashSet<_> = pairs.iter().copied().collect();
            assert_eq!(pairs.len(), n * (n - 1) / 2, "n={n}");
            assert_eq!(unique.len(), pairs.len(), "n={n}");
        }
    }

    #[test]
    fn every_slot_plays_once_per_round() {
        let rounds = build_rounds(8, RoundRobinType::Single);
        for round in &rounds {
            let mut seen = HashSet::new();
            for &(a, b) in round {
                assert!(seen.insert(a));
                assert!(seen.insert(b));
            }
            assert_eq!(seen.len(), 8);
        }
    }

    #[test]
    fn odd_count_gives_each_team_one_bye() {
        let rounds = build_rounds(5, RoundRobinType::Single);
        assert_eq!(rounds.len(), 5);

        let mut byes = vec![0usize; 5];
        for round in &rounds {
            let bye_pairings = round
                .iter()
                .filter(|&&(a, b)| a == RoundSlot::Bye || b == RoundSlot::Bye)
                .count();
            assert_eq!(bye_pairings, 1);
            for &(a, b) in round {
                if let (RoundSlot::Team(idle), RoundSlot::Bye)
                | (RoundSlot::Bye, RoundSlot::Team(idle)) = (a, b)
                {
                    byes[idle] += 1;
                }
            }
        }
        assert_eq!(byes, vec![1; 5]);
    }

    #[test]
    fn double_appends_the_swapped_first_leg() {
        let rounds = build_rounds(4, RoundRobinType::Double);
        assert_eq!(rounds.len(), 6);
        for (first_leg, second_leg) in rounds[..3].iter().zip(&rounds[3..]) {
            let swapped = first_leg.iter().map(|&(a, b)| (b, a)).collect_vec();
            assert_eq!(*second_leg, swapped);
        }
    }

    #[test]
    fn two_teams_meet_in_a_single_round() {
        let rounds = build_rounds(2, RoundRobinType::Single);
        assert_eq!(
            rounds,
            vec![vec![(RoundSlot::Team(0), RoundSlot::Team(1))]]
        );
    }
}
