//! HTTP surface of the ledger.
//!
//! | Method | Path | Success |
//! |--------|------|---------|
//! | POST | /v1/accounts | 201 |
//! | GET | /v1/accounts/{account_id} | 200 account JSON, 404 if unknown |
//! | POST | /v1/accounts/funds-transfer | 200 `Funds Transfer is successful` |
//! | GET | /health | 200 |

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;

use crate::{
    account::{Account, CreateAccountRequest},
    command::FundsTransferRequest,
    service::{AccountsService, LedgerError},
};

mod error;

pub const TRANSFER_SUCCESS_MESSAGE: &str = "Funds Transfer is successful";

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<AccountsService>,
}

impl AppState {
    pub fn new(service: AccountsService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/v1/accounts", post(create_account))
        .route("/v1/accounts/funds-transfer", post(transfer_funds))
        .route("/v1/accounts/{account_id}", get(get_account))
        .route("/health", get(health_check))
        .with_state(state)
}

async fn create_account(
    State(state): State<AppState>,
    body: Result<Json<CreateAccountRequest>, JsonRejection>,
) -> Result<StatusCode, LedgerError> {
    let Json(request) = body?;
    tracing::info!(?request, "Creating account");
    let account = request.into_account().inspect_err(|err| {
        tracing::warn!("Rejected account creation: {err}");
    })?;
    state.service.create_account(account).inspect_err(|err| {
        tracing::warn!("Rejected account creation: {err}");
    })?;
    Ok(StatusCode::CREATED)
}

async fn get_account(
    State(state): State<AppState>,
    Path(account_id): Path<String>,
) -> Result<Json<Account>, Response> {
    tracing::info!(%account_id, "Retrieving account");
    state.service.get_account(&account_id).map(Json).ok_or_else(|| {
        (StatusCode::NOT_FOUND, format!("Account {account_id} not found")).into_response()
    })
}

async fn transfer_funds(
    State(state): State<AppState>,
    body: Result<Json<FundsTransferRequest>, JsonRejection>,
) -> Result<&'static str, LedgerError> {
    let Json(request) = body?;
    tracing::info!(?request, "Request received to transfer funds");
    if let Err(err) = state.service.transfer_funds(request.clone()) {
        match err {
            LedgerError::Validation(_) => {
                tracing::warn!(?request, "Funds Transfer is failed: {err}")
            }
            _ => tracing::error!(?request, "Funds Transfer is failed: {err}"),
        }
        return Err(err);
    }
    Ok(TRANSFER_SUCCESS_MESSAGE)
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}
