use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::service::LedgerError;

impl LedgerError {
    /// Status code the HTTP layer answers with.
    ///
    /// `InsufficientFunds` is a business rule violation but is answered with
    /// 500 so existing clients keep seeing the same status.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::DuplicateAccountId(_) | Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::InsufficientFunds | Self::Unknown(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for LedgerError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

impl IntoResponse for LedgerError {
    fn into_response(self) -> Response {
        (self.status_code(), self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_errors_to_status() {
        assert_eq!(
            LedgerError::DuplicateAccountId("A1".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            LedgerError::Validation("bad".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            LedgerError::InsufficientFunds.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            LedgerError::Unknown("boom".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
