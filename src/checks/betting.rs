use serde_json::Value;

use crate::api::types::{BetLeg, BetSlip, OddsEvent, PlacedBets};
use crate::odds::potential_payout;
use crate::runner::RunContext;

const SPORT_KEY: &str = "americanfootball_nfl";
const STAKE: u32 = 10;
const MARKET_TYPE: &str = "h2h";
const HISTORY_LIMIT: &str = "5";

/// Place a single-leg bet on the first available NFL outcome, then read
/// back the betting history. Missing odds data degrades to a recorded
/// FAIL, never an abort.
pub async fn run(ctx: &mut RunContext) -> bool {
    let path = format!("/api/sports/{}/odds", SPORT_KEY);
    let events = match ctx
        .client
        .get_data::<Vec<OddsEvent>>(&path, &[("limit", "1")])
        .await
    {
        Ok(events) => events,
        Err(err) => {
            let message = if err.is_protocol() {
                "Could not get odds for betting test"
            } else {
                "Betting exception"
            };
            ctx.fail("Get Odds for Betting", message, Some(err.diagnostic()));
            return true;
        }
    };

    let Some(event) = events.first() else {
        ctx.fail("Place Bet", "No events available for testing", None);
        return true;
    };

    // First bookmaker / market / outcome, the same selection a punter
    // would see at the top of the board
    let selection = event.bookmakers.first().and_then(|bookmaker| {
        bookmaker
            .markets
            .first()
            .and_then(|market| market.outcomes.first())
            .map(|outcome| (bookmaker, outcome))
    });
    let Some((bookmaker, outcome)) = selection else {
        ctx.fail("Place Bet", "No bookmakers available for testing", None);
        return true;
    };

    let slip = BetSlip {
        bets: vec![BetLeg {
            event_id: event.id.clone(),
            selected_team: outcome.name.clone(),
            odds: outcome.price,
            stake: STAKE,
            market_type: MARKET_TYPE.to_string(),
            bookmaker: bookmaker.title.clone(),
        }],
        bet_type: "single".to_string(),
        total_stake: STAKE,
        potential_payout: potential_payout(outcome.price, f64::from(STAKE)),
    };

    match ctx
        .client
        .post_data::<PlacedBets, _>("/api/bets/place", &slip)
        .await
    {
        Ok(placed) => {
            let id = placed.first_id().unwrap_or_else(|| "<none>".to_string());
            ctx.pass("Place Bet", format!("Bet placed successfully, ID: {}", id));
        }
        Err(err) => {
            let message = if err.is_protocol() {
                "Bet placement failed"
            } else {
                "Betting exception"
            };
            ctx.fail("Place Bet", message, Some(err.diagnostic()));
            return true;
        }
    }

    match ctx
        .client
        .get_data::<Vec<Value>>("/api/bets/history", &[("limit", HISTORY_LIMIT)])
        .await
    {
        Ok(history) => {
            ctx.pass(
                "Get Betting History",
                format!("Retrieved {} bets", history.len()),
            );
        }
        Err(err) => {
            let message = if err.is_protocol() {
                "History retrieval failed"
            } else {
                "Betting exception"
            };
            ctx.fail("Get Betting History", message, Some(err.diagnostic()));
        }
    }

    true
}
