use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Payload of a successful login.
#[derive(Debug, Deserialize)]
pub struct LoginData {
    pub token: String,
    pub user: UserInfo,
}

#[derive(Debug, Deserialize)]
pub struct UserInfo {
    pub id: i64,
}

/// One entry of the sports catalogue. Only the key is required for the
/// nested odds lookup; the rest is kept for log output.
#[derive(Debug, Deserialize)]
pub struct Sport {
    pub key: String,
    #[serde(default)]
    pub title: Option<String>,
}

/// An event with its bookmaker odds, as returned by the odds endpoints.
#[derive(Debug, Deserialize)]
pub struct OddsEvent {
    pub id: String,
    #[serde(default)]
    pub bookmakers: Vec<Bookmaker>,
}

#[derive(Debug, Deserialize)]
pub struct Bookmaker {
    pub title: String,
    #[serde(default)]
    pub markets: Vec<Market>,
}

#[derive(Debug, Deserialize)]
pub struct Market {
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub outcomes: Vec<Outcome>,
}

#[derive(Debug, Deserialize)]
pub struct Outcome {
    pub name: String,
    pub price: f64,
}

#[derive(Debug, Deserialize)]
pub struct BalanceData {
    pub balance: f64,
}

#[derive(Debug, Deserialize)]
pub struct DepositData {
    #[serde(rename = "newBalance")]
    pub new_balance: f64,
}

#[derive(Debug, Serialize)]
pub struct DepositRequest {
    pub amount: u32,
    #[serde(rename = "paymentMethod")]
    pub payment_method: String,
}

/// A single-leg bet slip for the bet placement endpoint.
#[derive(Debug, Serialize)]
pub struct BetSlip {
    pub bets: Vec<BetLeg>,
    #[serde(rename = "betType")]
    pub bet_type: String,
    #[serde(rename = "totalStake")]
    pub total_stake: u32,
    #[serde(rename = "potentialPayout")]
    pub potential_payout: f64,
}

#[derive(Debug, Serialize)]
pub struct BetLeg {
    #[serde(rename = "eventId")]
    pub event_id: String,
    #[serde(rename = "selectedTeam")]
    pub selected_team: String,
    pub odds: f64,
    pub stake: u32,
    #[serde(rename = "marketType")]
    pub market_type: String,
    pub bookmaker: String,
}

/// Payload returned after placing bets. Ids may be numeric or string
/// depending on the backend, so they are kept as raw values.
#[derive(Debug, Deserialize)]
pub struct PlacedBets {
    #[serde(rename = "betIds")]
    pub bet_ids: Vec<Value>,
}

impl PlacedBets {
    /// First bet id rendered without JSON string quoting.
    pub fn first_id(&self) -> Option<String> {
        self.bet_ids.first().map(|id| match id.as_str() {
            Some(s) => s.to_string(),
            None => id.to_string(),
        })
    }
}
