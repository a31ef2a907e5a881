//! Unit Entity
//!
//! A hospital unit (ward, nursing station) with the progress of its two
//! check forms, and the dashboard filter over units.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::entity::{find_by_id, DomainError, Entity};

/// Progress of one form for a unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    #[default]
    NotStarted,
    Pending,
    Completed,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::NotStarted, Status::Pending, Status::Completed];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::NotStarted => "not-started",
            Status::Pending => "pending",
            Status::Completed => "completed",
        }
    }
}

impl FromStr for Status {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Status::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| DomainError::InvalidInput(format!("unknown status `{}`", s)))
    }
}

/// A hospital unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Unit {
    pub id: String,
    pub name: String,
    /// Percentage of the inventory sheet already counted (0-100)
    #[serde(default)]
    pub inventory_progress: u8,
    pub inventory_status: Status,
    pub audit_status: Status,
}

impl Unit {
    /// True when either form is in the given state
    pub fn has_status(&self, status: Status) -> bool {
        self.inventory_status == status || self.audit_status == status
    }
}

impl Entity for Unit {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Dashboard status filter: everything, or units with either form in one state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(Status),
}

impl StatusFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Only(status) => status.as_str(),
        }
    }

    pub fn matches(&self, unit: &Unit) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(status) => unit.has_status(*status),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(StatusFilter::All);
        }
        s.parse().map(StatusFilter::Only)
    }
}

/// Units whose name contains `query` (case-sensitive) and that pass `filter`.
/// An empty query matches every name. Input order is kept.
pub fn filter_units(units: &[Unit], query: &str, filter: StatusFilter) -> Vec<Unit> {
    units
        .iter()
        .filter(|unit| query.is_empty() || unit.name.contains(query))
        .filter(|unit| filter.matches(unit))
        .cloned()
        .collect()
}

/// Look up a unit by id
pub fn find_unit<'a>(units: &'a [Unit], id: &str) -> Option<&'a Unit> {
    find_by_id(units, id)
}
