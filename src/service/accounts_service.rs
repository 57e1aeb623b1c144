use std::sync::Arc;

use parking_lot::Mutex;
use rust_decimal::Decimal;

use crate::{
    account::Account,
    command::{FundsTransferRequest, TransferCommand},
    notification::NotificationSink,
    store::LedgerStore,
};

use super::{LedgerError, TransferMode};

/// Account operations plus the funds transfer workflow on top of a
/// [`LedgerStore`].
pub struct AccountsService {
    store: Arc<dyn LedgerStore>,
    notifications: Arc<dyn NotificationSink>,
    mode: TransferMode,
    transfer_gate: Mutex<()>,
}

impl AccountsService {
    pub fn new(
        store: Arc<dyn LedgerStore>,
        notifications: Arc<dyn NotificationSink>,
        mode: TransferMode,
    ) -> Self {
        Self {
            store,
            notifications,
            mode,
            transfer_gate: Mutex::new(()),
        }
    }

    #[cfg(test)]
    pub(crate) fn store(&self) -> &Arc<dyn LedgerStore> {
        &self.store
    }

    pub fn create_account(&self, account: Account) -> Result<(), LedgerError> {
        tracing::info!(account_id = %account.account_id, balance = %account.balance, "creating account");
        self.store.create_account(account)?;
        Ok(())
    }

    pub fn get_account(&self, account_id: &str) -> Option<Account> {
        self.store.get_account(account_id)
    }

    /// Moves `amount` from one account to another, then notifies both owners.
    ///
    /// Checks run in a fixed order and the first failure wins: negative
    /// amount, unknown source, insufficient source balance, unknown target.
    /// A zero amount passes and still produces notifications.
    pub fn transfer_funds(&self, request: FundsTransferRequest) -> Result<(), LedgerError> {
        let command = TransferCommand::parse_command(request)?;
        let (from_account, to_account) = match self.mode {
            TransferMode::Sequential => self.execute_transfer(&command)?,
            TransferMode::Serialized => {
                let _gate = self.transfer_gate.lock();
                self.execute_transfer(&command)?
            }
        };
        tracing::info!(
            from = %command.from_account_id,
            to = %command.to_account_id,
            amount = %command.amount,
            "funds transferred"
        );
        self.notify(&command, from_account, to_account);
        Ok(())
    }

    fn execute_transfer(&self, command: &TransferCommand) -> Result<(Account, Account), LedgerError> {
        let TransferCommand {
            from_account_id,
            to_account_id,
            amount,
        } = command;
        let from_account = self.store.get_account(from_account_id);
        let to_account = self.store.get_account(to_account_id);

        if *amount < Decimal::ZERO {
            return Err(LedgerError::Validation(
                "Amount to be transferred should be greater than 0".to_string(),
            ));
        }
        let Some(from_account) = from_account else {
            return Err(LedgerError::Validation(format!(
                "Could not find FromAccount for id {from_account_id}"
            )));
        };
        if from_account.balance < *amount {
            return Err(LedgerError::InsufficientFunds);
        }
        let Some(to_account) = to_account else {
            return Err(LedgerError::Validation(format!(
                "Could not find ToAccount for id {to_account_id}"
            )));
        };

        self.store.withdraw(from_account_id, *amount)?;
        if let Err(err) = self.store.deposit(to_account_id, *amount) {
            // put the money back so the debit does not go missing
            if let Err(refund_err) = self.store.deposit(from_account_id, *amount) {
                tracing::error!(
                    from = %from_account_id,
                    %amount,
                    "refund after failed deposit did not succeed: {refund_err}"
                );
            }
            return Err(err.into());
        }

        // snapshots are taken before the gate is released
        let from_account = self
            .store
            .get_account(from_account_id)
            .unwrap_or(from_account);
        let to_account = self.store.get_account(to_account_id).unwrap_or(to_account);
        Ok((from_account, to_account))
    }

    fn notify(&self, command: &TransferCommand, from_account: Account, to_account: Account) {
        self.notifications.notify_about_transfer(
            &from_account,
            &format!(
                "Transferred amount {} to account {}",
                command.amount, command.to_account_id
            ),
        );
        self.notifications.notify_about_transfer(
            &to_account,
            &format!(
                "Transferred amount {} from account {}",
                command.amount, command.from_account_id
            ),
        );
    }
}
