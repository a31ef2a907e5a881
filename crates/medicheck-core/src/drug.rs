//! Drug Inventory Rows
//!
//! One row per drug on a unit's inventory sheet. The counted stock drives the
//! reconciliation status; expiry and condition marks are toggled by the checker.

use std::collections::BTreeSet;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::entity::{update_by_id, DomainError, Entity};

/// Expiry mark on a drug row. The two warning levels exclude each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ExpiryWarning {
    #[default]
    #[serde(rename = "none")]
    None,
    #[serde(rename = "6-12m")]
    SixToTwelveMonths,
    #[serde(rename = "<6m")]
    UnderSixMonths,
}

impl ExpiryWarning {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpiryWarning::None => "none",
            ExpiryWarning::SixToTwelveMonths => "6-12m",
            ExpiryWarning::UnderSixMonths => "<6m",
        }
    }
}

impl FromStr for ExpiryWarning {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(ExpiryWarning::None),
            "6-12m" => Ok(ExpiryWarning::SixToTwelveMonths),
            "<6m" => Ok(ExpiryWarning::UnderSixMonths),
            other => Err(DomainError::InvalidInput(format!("unknown expiry level `{}`", other))),
        }
    }
}

/// Reconciliation of counted stock against the system figure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Ok,
    Issue,
    #[default]
    Pending,
}

impl CheckStatus {
    /// Nothing counted yet is pending; otherwise the count either matches or not.
    pub fn derive(actual_stock: Option<i64>, system_stock: i64) -> Self {
        match actual_stock {
            None => CheckStatus::Pending,
            Some(count) if count == system_stock => CheckStatus::Ok,
            Some(_) => CheckStatus::Issue,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CheckStatus::Ok => "ok",
            CheckStatus::Issue => "issue",
            CheckStatus::Pending => "pending",
        }
    }
}

/// A drug row on the inventory sheet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrugItem {
    pub id: String,
    pub category: String,
    pub code: String,
    pub name: String,
    pub system_stock: i64,
    /// Counted stock; `None` until something numeric is entered
    #[serde(default, deserialize_with = "deserialize_stock")]
    pub actual_stock: Option<i64>,
    #[serde(default)]
    pub expiry_warning: ExpiryWarning,
    #[serde(default)]
    pub check_status: CheckStatus,
    #[serde(default)]
    pub condition_flags: BTreeSet<String>,
    #[serde(default)]
    pub notes: String,
}

impl DrugItem {
    /// Re-derive `check_status` from the stock figures
    pub fn reconciled(mut self) -> Self {
        self.check_status = CheckStatus::derive(self.actual_stock, self.system_stock);
        self
    }

    pub fn has_flag(&self, flag: &str) -> bool {
        self.condition_flags.contains(flag)
    }
}

impl Entity for DrugItem {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Fixture stock may be a number, null, or text (`""` meaning not counted).
fn deserialize_stock<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawStock {
        Count(i64),
        Text(String),
    }

    Ok(match Option::<RawStock>::deserialize(deserializer)? {
        Some(RawStock::Count(count)) => Some(count),
        Some(RawStock::Text(text)) => parse_stock(&text),
        None => None,
    })
}

/// Permissive integer parse of a stock field.
///
/// Leading whitespace and a sign are accepted, then the longest run of digits
/// is taken ("12abc" is 12, "3.5" is 3). Anything without leading digits, or a
/// number that does not fit, is `None`.
pub fn parse_stock(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
    let magnitude: i64 = rest[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

// ========================
// Row Reducers
// ========================

/// Record the counted stock and re-derive the row's status
pub fn set_actual_stock(items: Vec<DrugItem>, id: &str, raw: &str) -> Vec<DrugItem> {
    let actual_stock = parse_stock(raw);
    update_by_id(items, id, |item| {
        item.actual_stock = actual_stock;
        item.check_status = CheckStatus::derive(actual_stock, item.system_stock);
    })
}

/// Switch the expiry mark to `level`, or back to none if it is already set
pub fn toggle_expiry_warning(items: Vec<DrugItem>, id: &str, level: ExpiryWarning) -> Vec<DrugItem> {
    update_by_id(items, id, |item| {
        item.expiry_warning = if item.expiry_warning == level {
            ExpiryWarning::None
        } else {
            level
        };
    })
}

/// Add the flag if absent, remove it if present
pub fn toggle_condition_flag(items: Vec<DrugItem>, id: &str, flag: &str) -> Vec<DrugItem> {
    update_by_id(items, id, |item| {
        if !item.condition_flags.remove(flag) {
            item.condition_flags.insert(flag.to_string());
        }
    })
}

pub fn set_note(items: Vec<DrugItem>, id: &str, text: &str) -> Vec<DrugItem> {
    update_by_id(items, id, |item| item.notes = text.to_string())
}

/// Row counts per reconciliation status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InventorySummary {
    pub total: usize,
    pub ok: usize,
    pub issue: usize,
    pub pending: usize,
}

pub fn summarize(items: &[DrugItem]) -> InventorySummary {
    items.iter().fold(InventorySummary::default(), |mut summary, item| {
        summary.total += 1;
        match item.check_status {
            CheckStatus::Ok => summary.ok += 1,
            CheckStatus::Issue => summary.issue += 1,
            CheckStatus::Pending => summary.pending += 1,
        }
        summary
    })
}
