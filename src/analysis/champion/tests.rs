//! Unit tests for the champion-starter aggregator

use super::*;
use crate::nba::teams::nba_teams;
use crate::testing_utils::{entry, totals, FakeStatsSource, LAKERS};
use std::sync::atomic::Ordering;
use tempfile::TempDir;

/// 1979-80 Lakers: five starters at 85..81 inches plus a bench player.
fn lakers_1980_roster() -> SeasonRoster {
    SeasonRoster::from_entries(vec![
        entry(1, LAKERS, "7-1"),
        entry(2, LAKERS, "7-0"),
        entry(3, LAKERS, "6-11"),
        entry(4, LAKERS, "6-10"),
        entry(5, LAKERS, "6-9"),
        entry(6, LAKERS, "6-0"),
    ])
}

fn lakers_1980_totals() -> Vec<PlayerSeasonTotals> {
    vec![
        totals(6, 400.0),
        totals(1, 3100.0),
        totals(2, 2900.0),
        totals(3, 2800.0),
        totals(4, 2500.0),
        totals(5, 2300.0),
    ]
}

fn lakers_source() -> FakeStatsSource {
    FakeStatsSource::new().with_totals(LAKERS, "1979-80", lakers_1980_totals())
}

#[cfg(test)]
mod selection_tests {
    use super::*;

    #[test]
    fn test_top_minutes_leaders_orders_by_minutes() {
        let ids = top_minutes_leaders(&lakers_1980_totals(), STARTER_COUNT);
        let ids: Vec<u64> = ids.iter().map(|p| p.as_u64()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_top_minutes_ties_break_by_player_id() {
        let rows = vec![totals(30, 1000.0), totals(10, 1000.0), totals(20, 1000.0)];
        let ids: Vec<u64> = top_minutes_leaders(&rows, 2).iter().map(|p| p.as_u64()).collect();
        assert_eq!(ids, vec![10, 20]);
    }

    #[test]
    fn test_top_minutes_short_team() {
        let rows = vec![totals(1, 10.0), totals(2, 20.0)];
        assert_eq!(top_minutes_leaders(&rows, STARTER_COUNT).len(), 2);
    }

    #[test]
    fn test_starter_average_partial_match() {
        let roster = lakers_1980_roster();
        let starters = [PlayerId::new(1), PlayerId::new(5), PlayerId::new(999)];

        let (avg, matched) = starter_average(&roster, &starters);
        assert_eq!(matched, 2);
        assert_eq!(avg, ChampionAverage::Value(83.0));
    }

    #[test]
    fn test_starter_average_no_match_is_unavailable() {
        let (avg, matched) = starter_average(&lakers_1980_roster(), &[PlayerId::new(42)]);
        assert_eq!(matched, 0);
        assert_eq!(avg, ChampionAverage::Unavailable);
        assert_eq!(avg.value(), None);
    }

    #[test]
    fn test_champion_average_serde_format() {
        let json = serde_json::to_string(&ChampionAverage::Value(83.0)).unwrap();
        assert_eq!(json, r#"{"status":"value","value":83.0}"#);

        let json = serde_json::to_string(&ChampionAverage::Unavailable).unwrap();
        assert_eq!(json, r#"{"status":"unavailable"}"#);
        assert_eq!(
            serde_json::from_str::<ChampionAverage>(&json).unwrap(),
            ChampionAverage::Unavailable
        );
    }
}

#[cfg(test)]
mod aggregator_tests {
    use super::*;

    fn aggregator(source: Arc<FakeStatsSource>, config: &Config) -> ChampionAggregator {
        ChampionAggregator::new(source, ChampionTable::nba(), config)
    }

    #[tokio::test]
    async fn test_lakers_1980_starters_average_83() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::for_dir(temp_dir.path());
        let agg = aggregator(Arc::new(lakers_source()), &config);

        let avg = agg
            .champion_starter_avg(EndYear::new(1980), &lakers_1980_roster())
            .await;

        assert_eq!(avg, Some(83.0));
        assert!(config.champ_cache_dir().join("champ_1980.json").exists());
    }

    #[tokio::test]
    async fn test_cached_value_skips_network() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::for_dir(temp_dir.path());
        let source = Arc::new(lakers_source());
        let agg = aggregator(source.clone(), &config);
        agg.evaluate(EndYear::new(1980), &lakers_1980_roster()).await;

        let reopened_source = Arc::new(FakeStatsSource::new());
        let reopened = aggregator(reopened_source.clone(), &config);
        let eval = reopened
            .evaluate(EndYear::new(1980), &lakers_1980_roster())
            .await;

        assert_eq!(eval.status, CacheStatus::Hit);
        assert!(!eval.fetched);
        assert_eq!(eval.outcome, Outcome::Ok(ChampionAverage::Value(83.0)));
        assert_eq!(reopened_source.total_calls(), 0);
    }

    #[tokio::test]
    async fn test_year_without_champion_returns_none() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::for_dir(temp_dir.path());
        let source = Arc::new(lakers_source());
        let agg = aggregator(source.clone(), &config);

        let outcome = agg.evaluate(EndYear::new(1975), &lakers_1980_roster()).await.outcome;

        assert!(outcome.is_skipped());
        assert_eq!(
            agg.champion_starter_avg(EndYear::new(1975), &lakers_1980_roster()).await,
            None
        );
        assert_eq!(source.total_calls(), 0);
        assert!(!config.champ_cache_dir().join("champ_1975.json").exists());
    }

    #[tokio::test]
    async fn test_empty_roster_returns_none_without_caching() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::for_dir(temp_dir.path());
        let source = Arc::new(lakers_source());
        let agg = aggregator(source.clone(), &config);

        let avg = agg
            .champion_starter_avg(EndYear::new(1980), &SeasonRoster::default())
            .await;

        assert_eq!(avg, None);
        assert_eq!(source.total_calls(), 0);
        assert!(!config.champ_cache_dir().join("champ_1980.json").exists());
    }

    #[tokio::test]
    async fn test_unknown_champion_team_fails_quietly() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::for_dir(temp_dir.path());
        let teams: Vec<_> = nba_teams()
            .into_iter()
            .filter(|t| t.full_name != "Los Angeles Lakers")
            .collect();
        let source = Arc::new(lakers_source().with_teams(teams));
        let agg = aggregator(source.clone(), &config);

        let eval = agg.evaluate(EndYear::new(1980), &lakers_1980_roster()).await;

        assert!(eval.outcome.is_failed());
        assert!(!eval.fetched);
        assert_eq!(source.total_calls(), 0);
        assert!(!config.champ_cache_dir().join("champ_1980.json").exists());
    }

    #[tokio::test]
    async fn test_timeout_retried_then_succeeds() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::for_dir(temp_dir.path());
        let source = Arc::new(lakers_source().with_totals_timeouts(1));
        let agg = aggregator(source.clone(), &config);

        let avg = agg
            .champion_starter_avg(EndYear::new(1980), &lakers_1980_roster())
            .await;

        assert_eq!(avg, Some(83.0));
        assert_eq!(source.totals_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_exhausted_retries_not_cached() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::for_dir(temp_dir.path());
        let source = Arc::new(lakers_source().with_totals_timeouts(5));
        let agg = aggregator(source.clone(), &config);

        let outcome = agg.evaluate(EndYear::new(1980), &lakers_1980_roster()).await.outcome;

        assert!(outcome.is_failed());
        assert_eq!(
            source.totals_calls.load(Ordering::SeqCst),
            config.champion_retry.max_attempts as usize
        );
        assert!(!config.champ_cache_dir().join("champ_1980.json").exists());
    }

    #[tokio::test]
    async fn test_no_starters_on_roster_caches_unavailable() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::for_dir(temp_dir.path());
        let roster = SeasonRoster::from_entries(vec![entry(100, LAKERS, "6-5")]);
        let source = Arc::new(lakers_source());
        let agg = aggregator(source.clone(), &config);

        let outcome = agg.evaluate(EndYear::new(1980), &roster).await.outcome;
        assert_eq!(outcome, Outcome::Ok(ChampionAverage::Unavailable));
        assert!(config.champ_cache_dir().join("champ_1980.json").exists());

        // An unavailable entry is recomputed on the next call by default.
        agg.evaluate(EndYear::new(1980), &lakers_1980_roster()).await;
        assert_eq!(source.totals_calls.load(Ordering::SeqCst), 2);
        assert_eq!(
            agg.champion_starter_avg(EndYear::new(1980), &lakers_1980_roster())
                .await,
            Some(83.0)
        );
    }

    #[tokio::test]
    async fn test_reuse_unavailable_when_configured() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = Config::for_dir(temp_dir.path());
        config.reuse_unavailable_champion = true;
        let roster = SeasonRoster::from_entries(vec![entry(100, LAKERS, "6-5")]);
        let source = Arc::new(lakers_source());
        let agg = aggregator(source.clone(), &config);

        agg.evaluate(EndYear::new(1980), &roster).await;
        let eval = agg.evaluate(EndYear::new(1980), &lakers_1980_roster()).await;

        assert_eq!(eval.status, CacheStatus::Hit);
        assert_eq!(eval.outcome, Outcome::Ok(ChampionAverage::Unavailable));
        assert_eq!(source.totals_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_refresh_ignores_cached_value() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::for_dir(temp_dir.path());
        let source = Arc::new(lakers_source());
        let agg = aggregator(source.clone(), &config);
        agg.evaluate(EndYear::new(1980), &lakers_1980_roster()).await;

        let eval = agg.refresh(EndYear::new(1980), &lakers_1980_roster()).await;

        assert_eq!(eval.status, CacheStatus::Refreshed);
        assert!(eval.fetched);
        assert_eq!(eval.outcome, Outcome::Ok(ChampionAverage::Value(83.0)));
        assert_eq!(source.totals_calls.load(Ordering::SeqCst), 2);
    }
}
