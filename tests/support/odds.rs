use arbradar::domain::{
    BestOdds, BookmakerId, BookmakerOdds, BookmakerQuote, LeagueRef, MatchRef, Odds, Outcome,
    StakeBudget,
};

pub fn odds(value: f64) -> Odds {
    Odds::try_new(value).expect("valid odds")
}

pub fn budget(amount: f64) -> StakeBudget {
    StakeBudget::try_new(amount).expect("valid budget")
}

pub fn league(name: &str) -> LeagueRef {
    LeagueRef::try_new(name).expect("valid league")
}

pub fn match_ref(name: &str) -> MatchRef {
    MatchRef::try_new(name).expect("valid match ref")
}

pub fn best(home: f64, draw: f64, away: f64) -> BestOdds {
    BestOdds::complete(odds(home), odds(draw), odds(away))
}

/// Build a quote from optional Home/Draw/Away prices.
pub fn quote(prices: [Option<f64>; 3]) -> BookmakerQuote {
    let mut quote = BookmakerQuote::new();
    for (outcome, price) in Outcome::ALL.into_iter().zip(prices) {
        if let Some(price) = price {
            quote.set(outcome, odds(price));
        }
    }
    quote
}

/// Build a board from `(bookmaker, [home, draw, away])` rows.
pub fn board(rows: &[(&str, [Option<f64>; 3])]) -> BookmakerOdds {
    let mut board = BookmakerOdds::new();
    for (name, prices) in rows {
        board.insert(
            BookmakerId::try_new(name).expect("valid bookmaker"),
            quote(*prices),
        );
    }
    board
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
