//! stats.nba.com access and static league data.

pub mod champions;
pub mod height;
pub mod http;
pub mod source;
pub mod teams;
pub mod types;

pub use champions::ChampionTable;
pub use height::{format_height, parse_height};
pub use http::NbaStatsClient;
pub use source::StatsSource;
pub use teams::Team;
