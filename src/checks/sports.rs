use crate::api::types::{OddsEvent, Sport};
use crate::runner::RunContext;

/// Sports catalogue plus a nested odds lookup for the first sport.
/// Never aborts the run; a failed catalogue fetch only skips the
/// nested call.
pub async fn run(ctx: &mut RunContext) -> bool {
    let sports = match ctx.client.get_data::<Vec<Sport>>("/api/sports", &[]).await {
        Ok(sports) => {
            ctx.pass("Get Sports", format!("Retrieved {} sports", sports.len()));
            sports
        }
        Err(err) => {
            let message = if err.is_protocol() {
                "Sports retrieval failed"
            } else {
                "Sports exception"
            };
            ctx.fail("Get Sports", message, Some(err.diagnostic()));
            return true;
        }
    };

    let Some(first) = sports.first() else {
        return true;
    };

    let path = format!("/api/sports/{}/odds", first.key);
    match ctx.client.get_data::<Vec<OddsEvent>>(&path, &[]).await {
        Ok(events) => {
            ctx.pass(
                "Get Odds",
                format!("Retrieved odds for {} events", events.len()),
            );
        }
        Err(err) => {
            let message = if err.is_protocol() {
                "Odds retrieval failed"
            } else {
                "Odds exception"
            };
            ctx.fail("Get Odds", message, Some(err.diagnostic()));
        }
    }

    true
}
