use tracing::debug;

use crate::model::{FieldConfig, FieldMode, LocationSource, Team};

/// Resolve the venue for a matchup per the league's field policy.
///
/// Only the home side's venue is ever consulted. When nothing resolves, the
/// location is left empty and flagged `manual` so the caller can collect one.
pub(crate) fn resolve_location(fields: &FieldConfig, home: &Team) -> (String, LocationSource) {
    let resolved = match fields.mode {
        FieldMode::TeamHome => team_venue(home),
        FieldMode::LeagueCentral => league_venue(fields),
        FieldMode::Mixed => team_venue(home).or_else(|| league_venue(fields)),
    };
    match resolved {
        Some(location) => location,
        None => {
            debug!(team = %home.id, mode = %fields.mode, "no venue available, flagging for manual entry");
            (String::new(), LocationSource::Manual)
        }
    }
}

fn team_venue(home: &Team) -> Option<(String, LocationSource)> {
    home.home_venue
        .as_ref()
        .map(|venue| (venue.label(), LocationSource::TeamHome))
}

fn league_venue(fields: &FieldConfig) -> Option<(String, LocationSource)> {
    fields
        .venues
        .first()
        .map(|venue| (venue.label(), LocationSource::LeagueField))
}
