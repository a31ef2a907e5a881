//! UI Components
//!
//! One component per screen plus the shared layout pieces.

mod layout;
mod status_badge;
mod dashboard;
mod unit_selection;
mod inventory_check;
mod audit_check;
mod signature_panel;

pub use layout::{Crumb, Layout, UnitNotFound};
pub use status_badge::StatusBadge;
pub use dashboard::Dashboard;
pub use unit_selection::UnitSelection;
pub use inventory_check::InventoryCheck;
pub use audit_check::AuditCheck;
pub use signature_panel::SignaturePanel;
