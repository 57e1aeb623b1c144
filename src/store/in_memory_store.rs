use std::collections::{HashMap, hash_map::Entry};

use parking_lot::RwLock;
use rust_decimal::Decimal;

use crate::account::{Account, AccountId};

use super::{LedgerStore, StoreError};

/// Process-lifetime store guarded by a single reader/writer lock.
///
/// Reads share the lock, every mutation (create, deposit, withdraw, clear)
/// takes it exclusively. Guards are scoped to each call.
#[derive(Debug, Default)]
pub struct InMemoryLedgerStore {
    accounts: RwLock<HashMap<AccountId, Account>>,
}

impl InMemoryLedgerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.accounts.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.read().is_empty()
    }

    fn update_balance(
        &self,
        account_id: &str,
        update: impl FnOnce(Decimal) -> Option<Decimal>,
    ) -> Result<(), StoreError> {
        let mut accounts = self.accounts.write();
        let Some(account) = accounts.get_mut(account_id) else {
            return Err(StoreError::AccountNotFound(account_id.to_owned()));
        };
        let Some(balance) = update(account.balance) else {
            return Err(StoreError::BalanceOverflow(account_id.to_owned()));
        };
        account.balance = balance;
        tracing::debug!(account_id, balance = %account.balance, "balance updated");
        Ok(())
    }
}

impl LedgerStore for InMemoryLedgerStore {
    fn create_account(&self, account: Account) -> Result<(), StoreError> {
        match self.accounts.write().entry(account.account_id.clone()) {
            Entry::Occupied(entry) => Err(StoreError::DuplicateAccountId(entry.key().clone())),
            Entry::Vacant(entry) => {
                entry.insert(account);
                Ok(())
            }
        }
    }

    fn get_account(&self, account_id: &str) -> Option<Account> {
        self.accounts.read().get(account_id).cloned()
    }

    fn deposit(&self, account_id: &str, amount: Decimal) -> Result<(), StoreError> {
        self.update_balance(account_id, |balance| balance.checked_add(amount))
    }

    fn withdraw(&self, account_id: &str, amount: Decimal) -> Result<(), StoreError> {
        // no overdraft check here, the caller has validated the balance
        self.update_balance(account_id, |balance| balance.checked_sub(amount))
    }

    fn clear_accounts(&self) {
        self.accounts.write().clear();
    }
}
