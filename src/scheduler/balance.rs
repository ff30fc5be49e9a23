use std::cmp::Ordering;
use std::collections::HashMap;

/// Running home/away tallies used to orient each matchup as it is emitted.
///
/// The side further behind on `home - away` hosts. On a tie the pair's
/// first-listed member hosts if its total game count is even, otherwise the
/// second. A pair's second meeting (double round-robin) is always the
/// reverse fixture of its first.
pub(crate) struct HomeAwayLedger {
    tallies: Vec<Tally>,
    first_homes: HashMap<(usize, usize), usize>,
}

#[derive(Default, Clone)]
struct Tally {
    home: u32,
    away: u32,
}

impl Tally {
    fn balance(&self) -> i64 {
        i64::from(self.home) - i64::from(self.away)
    }

    fn games(&self) -> u32 {
        self.home + self.away
    }
}

impl HomeAwayLedger {
    pub(crate) fn new(team_count: usize) -> Self {
        Self {
            tallies: vec![Tally::default(); team_count],
            first_homes: HashMap::new(),
        }
    }

    /// Orient the pairing `(first, second)` and record the outcome.
    /// Returns `(home, away)` team indices.
    pub(crate) fn assign(&mut self, first: usize, second: usize) -> (usize, usize) {
        let key = (first.min(second), first.max(second));
        let home = match self.first_homes.get(&key) {
            Some(&earlier) if earlier == first => second,
            Some(_) => first,
            None => {
                let home = self.pick_home(first, second);
                self.first_homes.insert(key, home);
                home
            }
        };
        let away = if home == first { second } else { first };
        self.tallies[home].home += 1;
        self.tallies[away].away += 1;
        (home, away)
    }

    fn pick_home(&self, first: usize, second: usize) -> usize {
        match self.tallies[first]
            .balance()
            .cmp(&self.tallies[second].balance())
        {
            Ordering::Less => first,
            Ordering::Greater => second,
            Ordering::Equal if self.tallies[first].games() % 2 == 0 => first,
            Ordering::Equal => second,
        }
    }
}
