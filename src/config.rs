//! Runtime configuration passed into each pipeline component.
//!
//! Built from CLI flags in `main`; tests build one with [`Config::for_dir`]
//! so every cache write lands in a temporary directory.

use clap::ValueEnum;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::cli::types::DEFAULT_START_END_YEAR;
use crate::core::{default_cache_dir, RetryPolicy};

/// Environment variable that overrides the cache directory.
pub const CACHE_DIR_ENV_VAR: &str = "NBA_HEIGHTS_CACHE_DIR";

pub const SUMMARY_CSV_FILE: &str = "nba_heights_by_season.csv";
pub const CHART_FILE: &str = "nba_heights.svg";

/// Where season rosters come from on a cache miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum RosterSource {
    /// One `commonteamroster` request per active franchise.
    #[default]
    TeamRosters,
    /// A single league-wide `leaguedashplayerbiostats` request.
    LeagueBio,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub cache_dir: PathBuf,
    pub out_dir: PathBuf,
    pub start_year: u16,
    /// Last end-year to process; `None` means the current calendar year.
    pub end_year: Option<u16>,
    pub roster_source: RosterSource,
    /// Cached rosters shorter than this are fetched again. 0 accepts every
    /// cached roster, including empty ones.
    pub min_cached_roster_size: usize,
    /// Return a cached "unavailable" champion average instead of recomputing it.
    pub reuse_unavailable_champion: bool,
    /// Ignore cached rosters and champion averages, fetch again and overwrite.
    pub refresh: bool,
    pub request_timeout: Duration,
    /// Minimum spacing between API requests.
    pub request_interval: Duration,
    /// Pause after each season that went to the network.
    pub season_pause: Duration,
    pub roster_retry: RetryPolicy,
    pub champion_retry: RetryPolicy,
    pub memory_cache_capacity: usize,
    pub render_chart: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_dir: default_cache_dir(),
            out_dir: PathBuf::from("."),
            start_year: DEFAULT_START_END_YEAR,
            end_year: None,
            roster_source: RosterSource::default(),
            min_cached_roster_size: 0,
            reuse_unavailable_champion: false,
            refresh: false,
            request_timeout: Duration::from_secs(60),
            request_interval: Duration::from_millis(600),
            season_pause: Duration::from_millis(1500),
            roster_retry: RetryPolicy::new(3, Duration::from_secs(5)),
            champion_retry: RetryPolicy::new(2, Duration::from_secs(2)),
            memory_cache_capacity: 64,
            render_chart: true,
        }
    }
}

impl Config {
    /// Defaults rooted at `dir` with every delay set to zero.
    pub fn for_dir(dir: &Path) -> Self {
        Self {
            cache_dir: dir.join("cache"),
            out_dir: dir.join("out"),
            request_interval: Duration::ZERO,
            season_pause: Duration::ZERO,
            roster_retry: RetryPolicy::new(3, Duration::ZERO),
            champion_retry: RetryPolicy::new(2, Duration::ZERO),
            ..Self::default()
        }
    }

    pub fn season_cache_dir(&self) -> PathBuf {
        self.cache_dir.join("season_cache")
    }

    pub fn champ_cache_dir(&self) -> PathBuf {
        self.cache_dir.join("champ_cache")
    }

    pub fn summary_csv_path(&self) -> PathBuf {
        self.out_dir.join(SUMMARY_CSV_FILE)
    }

    pub fn chart_path(&self) -> PathBuf {
        self.out_dir.join(CHART_FILE)
    }
}

/// Cache directory from the flag, then `NBA_HEIGHTS_CACHE_DIR`, then the
/// platform cache directory.
pub fn resolve_cache_dir(cache_dir: Option<PathBuf>) -> PathBuf {
    cache_dir
        .or_else(|| {
            std::env::var(CACHE_DIR_ENV_VAR)
                .ok()
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from)
        })
        .unwrap_or_else(default_cache_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_script_pacing() {
        let config = Config::default();
        assert_eq!(config.start_year, 1980);
        assert_eq!(config.end_year, None);
        assert_eq!(config.min_cached_roster_size, 0);
        assert!(!config.reuse_unavailable_champion);
        assert!(!config.refresh);
        assert_eq!(config.roster_retry.max_attempts, 3);
        assert_eq!(config.roster_retry.delay, Duration::from_secs(5));
        assert_eq!(config.champion_retry.max_attempts, 2);
        assert_eq!(config.champion_retry.delay, Duration::from_secs(2));
        assert_eq!(config.season_pause, Duration::from_millis(1500));
        assert_eq!(config.roster_source, RosterSource::TeamRosters);
    }

    #[test]
    fn test_for_dir_paths_and_zero_delays() {
        let config = Config::for_dir(Path::new("/tmp/heights-test"));
        assert_eq!(
            config.season_cache_dir(),
            PathBuf::from("/tmp/heights-test/cache/season_cache")
        );
        assert_eq!(
            config.champ_cache_dir(),
            PathBuf::from("/tmp/heights-test/cache/champ_cache")
        );
        assert_eq!(
            config.summary_csv_path(),
            PathBuf::from("/tmp/heights-test/out/nba_heights_by_season.csv")
        );
        assert_eq!(
            config.chart_path(),
            PathBuf::from("/tmp/heights-test/out/nba_heights.svg")
        );
        assert!(config.request_interval.is_zero());
        assert!(config.season_pause.is_zero());
        assert!(config.roster_retry.delay.is_zero());
    }

    #[test]
    fn test_resolve_cache_dir_prefers_explicit() {
        let explicit = PathBuf::from("/explicit/cache");
        assert_eq!(resolve_cache_dir(Some(explicit.clone())), explicit);
    }

    #[test]
    fn test_resolve_cache_dir_env_then_default() {
        std::env::set_var(CACHE_DIR_ENV_VAR, "/from/env");
        assert_eq!(resolve_cache_dir(None), PathBuf::from("/from/env"));

        std::env::remove_var(CACHE_DIR_ENV_VAR);
        assert_eq!(resolve_cache_dir(None), default_cache_dir());
    }
}
