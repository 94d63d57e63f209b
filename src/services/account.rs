use serde_json::{Value, json};
use tracing::{debug, warn};

use super::api::SpotApi;
use crate::error::ExchangeError;
use crate::types::{AccountBalances, Balance, BalanceParams};

pub struct Account<'a> {
    api: &'a dyn SpotApi,
}

impl<'a> Account<'a> {
    pub(crate) fn new(api: &'a dyn SpotApi) -> Self {
        Self { api }
    }

    pub async fn get_account_info(&self) -> Result<Value, ExchangeError> {
        let result = self
            .api
            .account()
            .await
            .inspect_err(|e| warn!(error = %e, "failed to get account info"))?;
        debug!("retrieved account information");
        Ok(result)
    }

    /// One asset's balance, or every non-zero balance.
    ///
    /// Unknown assets come back as an explicit zero balance rather than an
    /// error. A blank asset means every balance.
    pub async fn get_balance(&self, params: &BalanceParams) -> Result<Value, ExchangeError> {
        let body = self
            .api
            .account()
            .await
            .inspect_err(|e| warn!(error = %e, "failed to get balance"))?;
        let AccountBalances { balances } = serde_json::from_value(body)?;

        match params.asset.as_deref().map(str::trim).filter(|a| !a.is_empty()) {
            Some(asset) => {
                let balance = balances
                    .into_iter()
                    .find(|b| b.asset == asset)
                    .unwrap_or_else(|| {
                        warn!(asset, "asset not found in balances");
                        Balance::zero(asset)
                    });
                Ok(serde_json::to_value(balance)?)
            }
            None => {
                let mut non_zero = Vec::new();
                for balance in balances {
                    if !balance.is_zero().map_err(ExchangeError::Malformed)? {
                        non_zero.push(balance);
                    }
                }
                debug!(count = non_zero.len(), "retrieved non-zero balances");
                Ok(json!({ "balances": non_zero }))
            }
        }
    }

    pub async fn get_account_status(&self) -> Result<Value, ExchangeError> {
        let result = self
            .api
            .account_status()
            .await
            .inspect_err(|e| warn!(error = %e, "failed to get account status"))?;
        debug!("retrieved account status");
        Ok(result)
    }
}
