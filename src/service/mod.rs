use std::str::FromStr;

use thiserror::Error;

use crate::{
    account::{AccountId, AccountRequestError},
    command::CommandError,
    store::StoreError,
};

pub mod accounts_service;

pub use accounts_service::AccountsService;

/// Every failure the ledger reports to its callers.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Account id {0} already exists!")]
    DuplicateAccountId(AccountId),
    #[error("{0}")]
    Validation(String),
    #[error("FromAccount balance is less than amount to be transferred. So transfer is not done.")]
    InsufficientFunds,
    #[error("{0}")]
    Unknown(String),
}

impl From<StoreError> for LedgerError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateAccountId(id) => Self::DuplicateAccountId(id),
            err @ (StoreError::AccountNotFound(_) | StoreError::BalanceOverflow(_)) => {
                Self::Unknown(err.to_string())
            }
        }
    }
}

impl From<CommandError> for LedgerError {
    fn from(err: CommandError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<AccountRequestError> for LedgerError {
    fn from(err: AccountRequestError) -> Self {
        Self::Validation(err.to_string())
    }
}

/// How much of a transfer runs under one critical section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TransferMode {
    /// Balance checks and the two balance updates run as independent store
    /// calls. Two concurrent transfers out of the same account can both pass
    /// the balance check and overdraw it.
    Sequential,
    /// Lookup, validation, withdraw and deposit all run while holding the
    /// service's transfer gate, so a balance check cannot go stale.
    #[default]
    Serialized,
}

#[derive(Debug, Error)]
#[error("unknown transfer mode `{0}`, expected `sequential` or `serialized`")]
pub struct ParseTransferModeError(String);

impl FromStr for TransferMode {
    type Err = ParseTransferModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sequential" => Ok(Self::Sequential),
            "serialized" => Ok(Self::Serialized),
            _ => Err(ParseTransferModeError(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convert_errors() {
        let err: LedgerError = StoreError::DuplicateAccountId("A1".to_string()).into();
        assert_eq!(err, LedgerError::DuplicateAccountId("A1".to_string()));
        assert_eq!(err.to_string(), "Account id A1 already exists!");

        let err: LedgerError = StoreError::AccountNotFound("A2".to_string()).into();
        assert_eq!(err, LedgerError::Unknown("Account A2 does not exist".to_string()));

        let err: LedgerError = CommandError::AmountRequired.into();
        assert_eq!(
            err,
            LedgerError::Validation("Amount to be transferred can not be null".to_string())
        );
    }

    #[test]
    fn parse_transfer_mode() {
        assert_eq!("sequential".parse::<TransferMode>().unwrap(), TransferMode::Sequential);
        assert_eq!(" Serialized ".parse::<TransferMode>().unwrap(), TransferMode::Serialized);
        assert!("atomic".parse::<TransferMode>().is_err());
        assert_eq!(TransferMode::default(), TransferMode::Serialized);
    }
}
