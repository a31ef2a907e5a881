//! Fixture Loading
//!
//! Parses the JSON fixture files (units, drug catalogue, audit checklist).
//! Row ids must be unique within a file since every reducer addresses rows by id.

use std::collections::HashSet;

use serde::de::DeserializeOwned;

use crate::audit::AuditItem;
use crate::drug::DrugItem;
use crate::entity::{DomainError, DomainResult, Entity};
use crate::unit::Unit;

pub fn parse_units(json: &str) -> DomainResult<Vec<Unit>> {
    let units: Vec<Unit> = parse_rows("units", json)?;
    if let Some(unit) = units.iter().find(|u| u.inventory_progress > 100) {
        return Err(DomainError::Fixture(format!(
            "units: `{}` has inventory progress {} above 100",
            unit.id, unit.inventory_progress
        )));
    }
    Ok(units)
}

/// Drug rows come back with `check_status` re-derived from their stock figures
pub fn parse_drugs(json: &str) -> DomainResult<Vec<DrugItem>> {
    let drugs: Vec<DrugItem> = parse_rows("drugs", json)?;
    Ok(drugs.into_iter().map(DrugItem::reconciled).collect())
}

pub fn parse_audit_items(json: &str) -> DomainResult<Vec<AuditItem>> {
    parse_rows("audit items", json)
}

fn parse_rows<T: Entity + DeserializeOwned>(what: &str, json: &str) -> DomainResult<Vec<T>> {
    let rows: Vec<T> =
        serde_json::from_str(json).map_err(|e| DomainError::Fixture(format!("{}: {}", what, e)))?;

    {
        let mut seen = HashSet::new();
        if let Some(dup) = rows.iter().find(|row| !seen.insert(row.id())) {
            return Err(DomainError::Fixture(format!("{}: duplicate id `{}`", what, dup.id())));
        }
    }
    log::debug!("loaded {} {}", rows.len(), what);
    Ok(rows)
}
