//! MediCheck Core
//!
//! Pure logic behind the ward drug-check forms:
//! - unit: units and the dashboard filter
//! - drug: inventory rows and their reducers
//! - audit: checklist rows and their reducers
//! - signature: the attestation block
//! - config / fixtures: loading the static data
//!
//! Reducers take the current rows by value and return the updated rows.
//! Only the addressed row changes; an unknown id leaves everything as is.

mod entity;

pub mod audit;
pub mod config;
pub mod drug;
pub mod fixtures;
pub mod signature;
pub mod unit;

pub use audit::{AuditItem, AuditResult, AuditSummary, FAIL_REASON_MAX_CHARS};
pub use config::AppConfig;
pub use drug::{CheckStatus, DrugItem, ExpiryWarning, InventorySummary};
pub use entity::{find_by_id, update_by_id, DomainError, DomainResult, Entity};
pub use signature::{SignatureData, SignatureField};
pub use unit::{filter_units, find_unit, Status, StatusFilter, Unit};
