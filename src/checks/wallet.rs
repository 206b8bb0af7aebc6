use crate::api::types::{BalanceData, DepositData, DepositRequest};
use crate::runner::RunContext;

const DEPOSIT_AMOUNT: u32 = 100;
const PAYMENT_METHOD: &str = "test";

/// Balance lookup followed by a deposit. The deposit is a real mutation
/// against the live server; re-running the suite compounds the balance.
pub async fn run(ctx: &mut RunContext) -> bool {
    let balance = match ctx
        .client
        .get_data::<BalanceData>("/api/wallet/balance", &[])
        .await
    {
        Ok(data) => {
            ctx.pass("Get Wallet Balance", format!("Balance: ${}", data.balance));
            data.balance
        }
        Err(err) => {
            let message = if err.is_protocol() {
                "Balance retrieval failed"
            } else {
                "Wallet exception"
            };
            ctx.fail("Get Wallet Balance", message, Some(err.diagnostic()));
            return true;
        }
    };

    let deposit = DepositRequest {
        amount: DEPOSIT_AMOUNT,
        payment_method: PAYMENT_METHOD.to_string(),
    };
    match ctx
        .client
        .post_data::<DepositData, _>("/api/wallet/deposit", &deposit)
        .await
    {
        Ok(data) => {
            ctx.pass(
                "Wallet Deposit",
                format!(
                    "Deposited ${}, balance ${} -> ${}",
                    DEPOSIT_AMOUNT, balance, data.new_balance
                ),
            );
        }
        Err(err) => {
            let message = if err.is_protocol() {
                "Deposit failed"
            } else {
                "Wallet exception"
            };
            ctx.fail("Wallet Deposit", message, Some(err.diagnostic()));
        }
    }

    true
}
