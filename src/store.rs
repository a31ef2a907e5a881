//! Global Application State Store
//!
//! Read-only data loaded from the fixture files, held in a reactive_stores
//! Store. Per-visit form rows live in the form components.

use leptos::prelude::*;
use medicheck_core::fixtures;
use reactive_stores::Store;

use crate::models::{AppConfig, AuditItem, DrugItem, Unit};

const UNITS_JSON: &str = include_str!("../fixtures/units.json");
const DRUGS_JSON: &str = include_str!("../fixtures/drugs.json");
const AUDIT_ITEMS_JSON: &str = include_str!("../fixtures/audit_items.json");
const CONFIG_JSON: &str = include_str!("../fixtures/config.json");

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Units shown on the dashboard
    pub units: Vec<Unit>,
    /// Template rows for a new inventory sheet
    pub drug_catalog: Vec<DrugItem>,
    /// Template rows for a new audit
    pub audit_checklist: Vec<AuditItem>,
    pub config: AppConfig,
}

impl AppState {
    /// Load the embedded fixtures. A broken file is logged and left empty.
    pub fn from_fixtures() -> Self {
        Self {
            units: fixtures::parse_units(UNITS_JSON).unwrap_or_else(log_and_default),
            drug_catalog: fixtures::parse_drugs(DRUGS_JSON).unwrap_or_else(log_and_default),
            audit_checklist: fixtures::parse_audit_items(AUDIT_ITEMS_JSON).unwrap_or_else(log_and_default),
            config: AppConfig::from_json(CONFIG_JSON).unwrap_or_else(log_and_default),
        }
    }
}

fn log_and_default<T: Default>(err: medicheck_core::DomainError) -> T {
    log::error!("[STORE] {}", err);
    T::default()
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Find a unit in the store by ID
pub fn store_find_unit(store: &AppStore, unit_id: &str) -> Option<Unit> {
    medicheck_core::find_unit(&store.units().read_untracked(), unit_id).cloned()
}

/// Run a row reducer over the rows held in a signal
pub fn apply_rows<T>(rows: RwSignal<Vec<T>>, reduce: impl FnOnce(Vec<T>) -> Vec<T>)
where
    T: Send + Sync + 'static,
{
    rows.update(|current| *current = reduce(std::mem::take(current)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixtures_load() {
        let state = AppState::from_fixtures();
        assert_eq!(state.units.len(), 5);
        assert_eq!(state.drug_catalog.len(), 6);
        assert_eq!(state.audit_checklist.len(), 5);
        assert_eq!(state.config.operator_id, "t00000");
    }
}
