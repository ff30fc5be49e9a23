//! Season scheduling for youth sports leagues.
//!
//! The core is [`generate_schedule`]: a pure function that turns a division's
//! team list and configuration into an ordered list of [`ScheduleEntry`] rows
//! (games, natural byes, and league-wide rest weeks), with balanced home/away
//! assignments, evenly spread rest weeks, and venues resolved per league
//! policy. [`schedule_preview`] computes the summary shown before a schedule
//! is committed, and [`generate_bracket`] builds single-elimination brackets
//! from a seeded team list.
//!
//! Generation performs no I/O and keeps no state between calls; persisting
//! the result is the caller's concern.
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use league_scheduler::{
//!     ByeMode, FieldConfig, FieldMode, RoundRobinType, ScheduleConfig, Team,
//! };
//!
//! let teams = vec![
//!     Team {
//!         id: "a".into(),
//!         name: "Ants".into(),
//!         club_id: "north".into(),
//!         division: "U10".into(),
//!         home_venue: None,
//!     },
//!     Team {
//!         id: "b".into(),
//!         name: "Bees".into(),
//!         club_id: "south".into(),
//!         division: "U10".into(),
//!         home_venue: None,
//!     },
//! ];
//! let schedule = ScheduleConfig {
//!     season_weeks: 6,
//!     round_robin: RoundRobinType::Single,
//!     bye_mode: ByeMode::None,
//!     bye_week_count: 0,
//!     game_days: vec![],
//!     time_slots: vec![],
//! };
//! let fields = FieldConfig { mode: FieldMode::TeamHome, venues: vec![] };
//! let start = NaiveDate::from_ymd_opt(2026, 9, 5).unwrap();
//!
//! let entries = league_scheduler::generate_schedule(&teams, &schedule, &fields, start);
//! assert_eq!(entries.len(), 1);
//! ```

pub use error::{Result, ScheduleError};
pub use model::*;
pub use scheduler::bracket::generate_bracket;
pub use scheduler::generate_schedule;
pub use scheduler::preview::schedule_preview;

pub mod error;
pub mod model;
pub(crate) mod scheduler;
