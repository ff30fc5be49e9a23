use strum::ParseError;

/// All errors that can occur while preparing scheduling inputs.
///
/// Schedule generation itself is infallible; these arise at the parsing
/// boundary where raw form values become typed configuration, and from the
/// bracket generator's size precondition.
#[derive(thiserror::Error, Debug)]
pub enum ScheduleError {
    /// A game-day string did not name a weekday.
    #[error("unrecognized game day: {0}")]
    GameDay(String),

    /// A time-slot string could not be parsed as a time of day.
    #[error("failed to parse time slot: {0}")]
    TimeSlot(#[from] chrono::ParseError),

    /// A configuration choice did not match any known variant.
    #[error("unrecognized configuration value: {0}")]
    Choice(#[from] ParseError),

    /// Requested bracket size cannot host single-elimination play.
    #[error("bracket size {0} is not a power of two")]
    BracketSize(usize),
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
