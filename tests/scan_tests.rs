//! League scanning through the match and odds ports.

mod support;

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use arbradar::application::{ProfitFilter, ScanService};
use arbradar::domain::{ArbitrageResult, BookmakerOdds, LeagueRef, MatchRef, NotFeasible};
use arbradar::error::Error;
use arbradar::port::outbound::{MatchSource, OddsSource};
use support::odds::{board, budget, league, match_ref};

/// In-memory source with optional per-call latency.
#[derive(Default)]
struct StubSource {
    leagues: HashMap<String, Vec<MatchRef>>,
    boards: HashMap<MatchRef, BookmakerOdds>,
    failing_league: Option<String>,
    delay: Option<Duration>,
    odds_calls: AtomicUsize,
    in_flight: AtomicUsize,
    peak_in_flight: AtomicUsize,
}

impl StubSource {
    fn with_league(mut self, name: &str, refs: &[&str]) -> Self {
        self.leagues
            .insert(name.to_string(), refs.iter().map(|r| match_ref(r)).collect());
        self
    }

    fn with_board(mut self, name: &str, odds: BookmakerOdds) -> Self {
        self.boards.insert(match_ref(name), odds);
        self
    }
}

#[async_trait]
impl MatchSource for StubSource {
    async fn matches(&self, league: &LeagueRef) -> Result<Vec<MatchRef>, Error> {
        if self.failing_league.as_deref() == Some(league.as_str()) {
            return Err(Error::Source("listing page unavailable".into()));
        }
        Ok(self.leagues.get(league.as_str()).cloned().unwrap_or_default())
    }
}

#[async_trait]
impl OddsSource for StubSource {
    async fn odds(&self, match_ref: &MatchRef) -> BookmakerOdds {
        self.odds_calls.fetch_add(1, Ordering::SeqCst);
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak_in_flight.fetch_max(now, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        self.boards.get(match_ref).cloned().unwrap_or_default()
    }
}

fn service(source: &Arc<StubSource>) -> ScanService {
    ScanService::new(source.clone(), source.clone())
}

fn arbitrage_board() -> BookmakerOdds {
    board(&[
        ("Bet365", [Some(2.3), Some(3.2), Some(4.0)]),
        ("Unibet", [Some(2.1), Some(3.6), Some(4.4)]),
    ])
}

fn overround_board() -> BookmakerOdds {
    board(&[("Bet365", [Some(1.5), Some(3.0), Some(5.0)])])
}

#[tokio::test]
async fn evaluates_every_match_in_listing_order() {
    let source = Arc::new(
        StubSource::default()
            .with_league("premier-league", &["ars-che", "liv-mci", "new-tot"])
            .with_board("ars-che", overround_board())
            .with_board("liv-mci", arbitrage_board()),
    );

    let report = service(&source)
        .scan_league(&league("premier-league"), budget(100.0))
        .await;

    let refs: Vec<_> = report.matches.iter().map(|m| m.match_ref.as_str()).collect();
    assert_eq!(refs, vec!["ars-che", "liv-mci", "new-tot"]);
    assert_eq!(report.feasible_count(), 1);
    assert!(matches!(
        report.matches[2].result,
        ArbitrageResult::NotFeasible(NotFeasible::IncompleteOutcomeSet { .. })
    ));
    assert_eq!(report.matches[2].bookmakers, 0);
}

#[tokio::test]
async fn duplicate_listings_are_fetched_once() {
    let source = Arc::new(
        StubSource::default()
            .with_league("la-liga", &["rma-bar", "atm-sev", "rma-bar"])
            .with_board("rma-bar", arbitrage_board()),
    );

    let report = service(&source)
        .scan_league(&league("la-liga"), budget(100.0))
        .await;

    assert_eq!(report.matches.len(), 2);
    assert_eq!(source.odds_calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn failed_discovery_leaves_league_empty_and_scan_continues() {
    let source = Arc::new(StubSource {
        failing_league: Some("serie-a".into()),
        ..StubSource::default()
            .with_league("bundesliga", &["bay-bvb"])
            .with_board("bay-bvb", arbitrage_board())
    });

    let report = service(&source)
        .scan(&[league("serie-a"), league("bundesliga")], budget(100.0))
        .await;

    assert_eq!(report.leagues.len(), 2);
    assert!(report.leagues[0].matches.is_empty());
    assert_eq!(report.leagues[1].matches.len(), 1);
    assert_eq!(report.feasible_count(), 1);
    assert_eq!(report.total_stake, 100.0);
}

#[test]
fn unknown_league_yields_no_matches() {
    let source = Arc::new(StubSource::default());

    let report = tokio_test::block_on(
        service(&source).scan_league(&league("ligue-1"), budget(100.0)),
    );

    assert!(report.matches.is_empty());
    assert_eq!(source.odds_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn concurrency_is_bounded() {
    let refs: Vec<String> = (0..12).map(|i| format!("m{i}")).collect();
    let ref_strs: Vec<&str> = refs.iter().map(String::as_str).collect();
    let source = Arc::new(StubSource {
        delay: Some(Duration::from_millis(5)),
        ..StubSource::default().with_league("eredivisie", &ref_strs)
    });

    let report = service(&source)
        .with_max_concurrent(3)
        .scan_league(&league("eredivisie"), budget(100.0))
        .await;

    assert_eq!(report.matches.len(), 12);
    assert!(source.peak_in_flight.load(Ordering::SeqCst) <= 3);
    let order: Vec<_> = report.matches.iter().map(|m| m.match_ref.as_str()).collect();
    assert_eq!(order, ref_strs);
}

#[tokio::test]
async fn ranking_and_filter_drive_presentation() {
    let source = Arc::new(
        StubSource::default()
            .with_league("premier-league", &["ars-che", "liv-mci"])
            .with_league("la-liga", &["rma-bar"])
            .with_board("ars-che", overround_board())
            .with_board("liv-mci", arbitrage_board())
            .with_board(
                "rma-bar",
                board(&[("Betway", [Some(2.5), Some(3.6), Some(4.4)])]),
            ),
    );

    let report = service(&source)
        .scan(&[league("premier-league"), league("la-liga")], budget(100.0))
        .await;

    let ranked: Vec<_> = report
        .ranked()
        .into_iter()
        .map(|m| m.match_ref.as_str())
        .collect();
    assert_eq!(ranked, vec!["rma-bar", "liv-mci", "ars-che"]);

    let shown = ProfitFilter::new(true, 8.0).apply(report.ranked());
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].match_ref.as_str(), "rma-bar");

    let everything = ProfitFilter::show_all().apply(report.all_matches());
    assert_eq!(everything.len(), 3);
}
