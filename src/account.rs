use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type AccountId = String;

/// Named balance record kept by the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub account_id: AccountId,
    pub balance: Decimal,
}

impl Account {
    pub fn new(account_id: impl Into<AccountId>, balance: Decimal) -> Self {
        Self {
            account_id: account_id.into(),
            balance,
        }
    }
}

/// Body of an account creation call, before validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountRequest {
    pub account_id: Option<String>,
    pub balance: Option<Decimal>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccountRequestError {
    #[error("Account id can not be null or blank")]
    BlankAccountId,
    #[error("Initial balance can not be null")]
    BalanceRequired,
    #[error("Initial balance must be positive.")]
    NegativeBalance,
}

impl CreateAccountRequest {
    pub fn into_account(self) -> Result<Account, AccountRequestError> {
        let Some(account_id) = self.account_id.filter(|id| !id.trim().is_empty()) else {
            return Err(AccountRequestError::BlankAccountId);
        };
        let Some(balance) = self.balance else {
            return Err(AccountRequestError::BalanceRequired);
        };
        if balance < Decimal::ZERO {
            return Err(AccountRequestError::NegativeBalance);
        }
        Ok(Account {
            account_id,
            balance,
        })
    }
}
