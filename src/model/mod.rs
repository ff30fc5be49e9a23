mod bracket;
mod config;
mod schedule;
mod team;

pub use bracket::*;
pub use config::*;
pub use schedule::*;
pub use team::*;
