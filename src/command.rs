use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

use crate::account::AccountId;

/// Funds transfer request as it arrives on the wire.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundsTransferRequest {
    pub from_account_id: Option<String>,
    pub to_account_id: Option<String>,
    pub amount: Option<Decimal>,
}

impl FundsTransferRequest {
    pub fn new(from: impl Into<String>, to: impl Into<String>, amount: Decimal) -> Self {
        Self {
            from_account_id: Some(from.into()),
            to_account_id: Some(to.into()),
            amount: Some(amount),
        }
    }
}

/// Transfer with all required fields present. Business rules (sign of the
/// amount, account existence, balance) are checked by the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferCommand {
    pub from_account_id: AccountId,
    pub to_account_id: AccountId,
    pub amount: Decimal,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("From Account Id can not be null or blank")]
    BlankFromAccountId,
    #[error("To Account Id can not be null or blank")]
    BlankToAccountId,
    #[error("Amount to be transferred can not be null")]
    AmountRequired,
}

impl TransferCommand {
    pub fn parse_command(request: FundsTransferRequest) -> Result<Self, CommandError> {
        let from_account_id =
            non_blank(request.from_account_id).ok_or(CommandError::BlankFromAccountId)?;
        let to_account_id =
            non_blank(request.to_account_id).ok_or(CommandError::BlankToAccountId)?;
        let amount = request.amount.ok_or(CommandError::AmountRequired)?;
        Ok(Self {
            from_account_id,
            to_account_id,
            amount,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn parse_transfer_command() {
        let cmd = TransferCommand::parse_command(FundsTransferRequest::new("A100", "A101", dec!(100)))
            .unwrap();
        assert_eq!(
            cmd,
            TransferCommand {
                from_account_id: "A100".to_string(),
                to_account_id: "A101".to_string(),
                amount: dec!(100),
            }
        );

        // negative amounts are a business rule, not a shape error
        let cmd = TransferCommand::parse_command(FundsTransferRequest::new("A100", "A101", dec!(-1)))
            .unwrap();
        assert_eq!(cmd.amount, dec!(-1));
    }

    #[test]
    fn reject_missing_fields() {
        let err = TransferCommand::parse_command(FundsTransferRequest::new("", "A101", dec!(1)))
            .unwrap_err();
        assert!(matches!(err, CommandError::BlankFromAccountId));

        let err = TransferCommand::parse_command(FundsTransferRequest::new("A100", " \t", dec!(1)))
            .unwrap_err();
        assert!(matches!(err, CommandError::BlankToAccountId));

        let err = TransferCommand::parse_command(FundsTransferRequest {
            amount: None,
            ..FundsTransferRequest::new("A100", "A101", dec!(1))
        })
        .unwrap_err();
        assert_eq!(err.to_string(), "Amount to be transferred can not be null");

        // the first missing field wins
        let err = TransferCommand::parse_command(FundsTransferRequest::default()).unwrap_err();
        assert!(matches!(err, CommandError::BlankFromAccountId));
    }

    #[test]
    fn deserialize_request() {
        let request: FundsTransferRequest = serde_json::from_str(
            r#"{"fromAccountId":"A100","toAccountId":"A101","amount":"12.50"}"#,
        )
        .unwrap();
        assert_eq!(request.from_account_id.as_deref(), Some("A100"));
        assert_eq!(request.to_account_id.as_deref(), Some("A101"));
        assert_eq!(request.amount, Some(dec!(12.50)));

        let request: FundsTransferRequest =
            serde_json::from_str(r#"{"fromAccountId":"A100"}"#).unwrap();
        assert!(request.to_account_id.is_none());
        assert!(request.amount.is_none());
    }
}
