// Library root: leaderboard extraction, statistics, and lookups for
// pro-player mouse settings.

pub mod config;
pub mod extract;
pub mod fetch;
pub mod loader;
pub mod normalize;
pub mod player;
pub mod query;
pub mod report;
pub mod stats;
pub mod store;
