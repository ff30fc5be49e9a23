use serde::{Deserialize, Serialize};

/// A playing field, either a team's home ground or a league-owned facility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Venue {
    pub name: String,
    pub locality: Option<String>,
}

impl Venue {
    /// Human-readable label: `"name, locality"`, or just the name when no
    /// locality is recorded.
    pub fn label(&self) -> String {
        match &self.locality {
            Some(locality) => format!("{}, {}", self.name, locality),
            None => self.name.clone(),
        }
    }
}

/// A participant in one age division, as supplied by the caller.
///
/// The scheduler never mutates teams; `id` is opaque to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: String,
    pub name: String,
    /// Owning club, used by the host application to label cross-club matchups.
    pub club_id: String,
    /// Age-group tag; every team handed to the scheduler shares one.
    pub division: String,
    pub home_venue: Option<Venue>,
}

/// The two-field team projection embedded in generated schedule rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamRef {
    pub id: String,
    pub name: String,
}

impl From<&Team> for TeamRef {
    fn from(team: &Team) -> Self {
        Self {
            id: team.id.clone(),
            name: team.name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn venue_label_includes_locality_when_present() {
        let venue = Venue {
            name: "Riverside Park".into(),
            locality: Some("Springfield".into()),
        };
        assert_eq!(venue.label(), "Riverside Park, Springfield");
    }

    #[test]
    fn venue_label_without_locality_is_just_the_name() {
        let venue = Venue {
            name: "Riverside Park".into(),
            locality: None,
        };
        assert_eq!(venue.label(), "Riverside Park");
    }
}
