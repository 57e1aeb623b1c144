/// Account record, its id type and creation request validation.
pub mod account;

/// Funds transfer request and its parsing into a [`command::TransferCommand`].
pub mod command;

/// Ledger store interface, plus "in memory" implementation guarded by a
/// reader/writer lock.
pub mod store;

/// Best-effort sink informed about completed transfers.
pub mod notification;

/// Account operations and the transfer workflow, with the error taxonomy
/// reported to callers.
pub mod service;

/// Settings read from the environment.
pub mod config;

/// Axum router exposing the service over HTTP.
pub mod web;
