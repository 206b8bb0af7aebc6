use crate::api::types::Sport;
use crate::runner::RunContext;

/// Re-fetch the sports list only to inspect the quota block the envelope
/// carries alongside it.
pub async fn run(ctx: &mut RunContext) -> bool {
    match ctx
        .client
        .get_envelope::<Vec<Sport>>("/api/sports", &[])
        .await
    {
        Ok(envelope) => match envelope.quota {
            Some(quota) => {
                ctx.pass(
                    "API Quota Monitoring",
                    format!(
                        "Used: {}/{} ({}%)",
                        quota.used, quota.total, quota.percent_used
                    ),
                );
            }
            None => {
                ctx.fail("API Quota Monitoring", "No quota information returned", None);
            }
        },
        Err(err) => {
            let message = if err.is_protocol() {
                "Could not check quota"
            } else {
                "Quota check exception"
            };
            ctx.fail("API Quota Monitoring", message, Some(err.diagnostic()));
        }
    }

    true
}
