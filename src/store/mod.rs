use rust_decimal::Decimal;
use thiserror::Error;

use crate::account::{Account, AccountId};

pub mod in_memory_store;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Account id {0} already exists!")]
    DuplicateAccountId(AccountId),
    #[error("Account {0} does not exist")]
    AccountNotFound(AccountId),
    #[error("Balance of account {0} would overflow")]
    BalanceOverflow(AccountId),
}

/// Storage of accounts keyed by account id.
///
/// `deposit` and `withdraw` only move money: callers validate existence and
/// sufficient funds before calling them.
pub trait LedgerStore: Send + Sync {
    /// Inserts the account only if its id is not taken yet.
    fn create_account(&self, account: Account) -> Result<(), StoreError>;

    /// Snapshot of the account, `None` if the id is unknown.
    fn get_account(&self, account_id: &str) -> Option<Account>;

    fn deposit(&self, account_id: &str, amount: Decimal) -> Result<(), StoreError>;

    fn withdraw(&self, account_id: &str, amount: Decimal) -> Result<(), StoreError>;

    fn clear_accounts(&self);
}
