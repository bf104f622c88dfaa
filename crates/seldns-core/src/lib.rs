//! Reconciliation core between `seldns-api` and the `seldns` CLI.
//!
//! This crate owns the decision procedure that turns "what should exist"
//! into the smallest set of DNS API calls:
//!
//! - **[`Reconciler`]**: Single entry point. [`reconcile()`](Reconciler::reconcile)
//!   reads current remote state, diffs it against a [`RecordSpec`], and
//!   applies the difference. In dry-run mode every read still happens but no
//!   mutating call is issued; the [`Outcome`] is classified the same way.
//!
//! - **[`DnsService`]**: The seam between the reconciler and the network.
//!   `seldns_api::DnsClient` implements it; tests swap in an in-memory fake.
//!
//! - **Domain model** ([`model`]): [`RecordSpec`] (the desired state),
//!   [`RecordType`], [`DesiredState`], and the [`Outcome`] / [`Report`] pair
//!   that becomes the process result.
//!
//! - **[`ServiceConfig`]**: How to reach the API. Built by the CLI from
//!   flags and profiles; core never reads the environment or config files.

pub mod config;
pub mod error;
pub mod model;
pub mod reconcile;
pub mod service;

#[cfg(test)]
mod testing;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::ServiceConfig;
pub use error::{CoreError, FailureKind};
pub use model::{DesiredState, Entity, Outcome, RecordSpec, RecordType, Report};
pub use reconcile::{Reconciler, normalize_record_name};
pub use service::DnsService;

pub use seldns_api::{DEFAULT_BASE_URL, DnsClient, Domain, Record, RecordPayload};
