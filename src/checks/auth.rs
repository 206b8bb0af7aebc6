use serde_json::json;

use crate::api::types::LoginData;
use crate::runner::RunContext;

const USERNAME: &str = "testuser2";
const PASSWORD: &str = "testuser2";

/// Login plus profile lookup. This is the only fatal group: without the
/// bearer token none of the later groups can run.
pub async fn run(ctx: &mut RunContext) -> bool {
    let credentials = json!({ "username": USERNAME, "password": PASSWORD });

    match ctx
        .client
        .post_data::<LoginData, _>("/api/auth/login", &credentials)
        .await
    {
        Ok(login) => {
            ctx.client.authenticate(&login.token, login.user.id);
            ctx.pass("User Login", "Successfully logged in");
        }
        Err(err) => {
            let message = if err.is_protocol() {
                "Login failed"
            } else {
                "Login exception"
            };
            ctx.fail("User Login", message, Some(err.diagnostic()));
            return false;
        }
    }

    match ctx
        .client
        .get_data::<serde_json::Value>("/api/auth/profile", &[])
        .await
    {
        Ok(_) => {
            ctx.pass("Get Profile", "Profile retrieved successfully");
            true
        }
        Err(err) if err.is_protocol() => {
            // A rejected profile request is recorded but not fatal
            ctx.fail("Get Profile", "Profile retrieval failed", Some(err.diagnostic()));
            true
        }
        Err(err) => {
            ctx.fail("Get Profile", "Profile exception", Some(err.diagnostic()));
            false
        }
    }
}
