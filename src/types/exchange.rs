// exchange wire types the adapter needs to look inside of
use serde::{Deserialize, Serialize};

/// Error body returned by the exchange on rejected requests.
#[derive(Deserialize, Debug)]
pub struct ApiErrorBody {
    pub code: i64,
    pub msg: String,
}

#[derive(Deserialize, Debug)]
pub struct ServerTime {
    #[serde(rename = "serverTime")]
    pub server_time: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Balance {
    pub asset: String,
    pub free: String,
    pub locked: String,
}

impl Balance {
    pub fn zero(asset: &str) -> Self {
        Self {
            asset: asset.to_string(),
            free: "0.00000000".to_string(),
            locked: "0.00000000".to_string(),
        }
    }

    /// Fails with the offending field when an amount is not a number.
    pub fn is_zero(&self) -> Result<bool, String> {
        let amount = |field: &str, value: &str| {
            value.trim().parse::<f64>().map_err(|_| {
                format!("balance {} of {} is not a number: {:?}", field, self.asset, value)
            })
        };
        let free = amount("free", &self.free)?;
        let locked = amount("locked", &self.locked)?;
        Ok(free <= 0.0 && locked <= 0.0)
    }
}

#[derive(Deserialize, Debug)]
pub struct AccountBalances {
    #[serde(default)]
    pub balances: Vec<Balance>,
}
