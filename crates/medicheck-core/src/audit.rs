//! Audit Checklist Rows
//!
//! Compliance checklist lines answered pass / fail / not applicable. A failed
//! line carries a short reason; the reason is dropped as soon as the line
//! leaves the fail state and is not brought back on re-entry.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::entity::{update_by_id, DomainError, Entity};

/// Longest accepted fail reason, in characters
pub const FAIL_REASON_MAX_CHARS: usize = 40;

/// Answer to a checklist line. An unanswered line is `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuditResult {
    #[serde(rename = "pass")]
    Pass,
    #[serde(rename = "fail")]
    Fail,
    #[serde(rename = "na")]
    NotApplicable,
}

impl AuditResult {
    pub const ALL: [AuditResult; 3] = [AuditResult::Pass, AuditResult::Fail, AuditResult::NotApplicable];

    pub fn as_str(&self) -> &'static str {
        match self {
            AuditResult::Pass => "pass",
            AuditResult::Fail => "fail",
            AuditResult::NotApplicable => "na",
        }
    }
}

impl FromStr for AuditResult {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AuditResult::ALL
            .into_iter()
            .find(|result| result.as_str() == s)
            .ok_or_else(|| DomainError::InvalidInput(format!("unknown audit result `{}`", s)))
    }
}

/// A checklist line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditItem {
    pub id: String,
    /// Section heading, e.g. "Nursing Cart"
    pub category: String,
    pub text: String,
    #[serde(default)]
    pub result: Option<AuditResult>,
    #[serde(default)]
    pub fail_reason: String,
}

impl AuditItem {
    pub fn is_fail(&self) -> bool {
        self.result == Some(AuditResult::Fail)
    }

    /// A failed line without a written reason
    pub fn needs_fail_reason(&self) -> bool {
        self.is_fail() && self.fail_reason.trim().is_empty()
    }

    /// Length of the reason as the counter shows it
    pub fn fail_reason_len(&self) -> usize {
        self.fail_reason.chars().count()
    }
}

impl Entity for AuditItem {
    fn id(&self) -> &str {
        &self.id
    }
}

// ========================
// Row Reducers
// ========================

/// Answer a line. Any answer other than fail clears the reason.
pub fn set_result(items: Vec<AuditItem>, id: &str, result: AuditResult) -> Vec<AuditItem> {
    transition(items, id, Some(result))
}

/// Return a line to unanswered, clearing the reason
pub fn clear_result(items: Vec<AuditItem>, id: &str) -> Vec<AuditItem> {
    transition(items, id, None)
}

fn transition(items: Vec<AuditItem>, id: &str, next: Option<AuditResult>) -> Vec<AuditItem> {
    update_by_id(items, id, |item| {
        if next != Some(AuditResult::Fail) {
            item.fail_reason.clear();
        }
        item.result = next;
    })
}

/// Replace the reason, keeping at most `FAIL_REASON_MAX_CHARS` characters
pub fn set_fail_reason(items: Vec<AuditItem>, id: &str, text: &str) -> Vec<AuditItem> {
    let capped: String = text.chars().take(FAIL_REASON_MAX_CHARS).collect();
    update_by_id(items, id, |item| item.fail_reason = capped)
}

/// Lines grouped under their category, categories in order of first appearance
pub fn group_by_category(items: &[AuditItem]) -> Vec<(String, Vec<AuditItem>)> {
    let mut groups: Vec<(String, Vec<AuditItem>)> = Vec::new();
    for item in items {
        match groups.iter_mut().find(|(category, _)| *category == item.category) {
            Some((_, lines)) => lines.push(item.clone()),
            None => groups.push((item.category.clone(), vec![item.clone()])),
        }
    }
    groups
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AuditSummary {
    pub total: usize,
    pub answered: usize,
    pub failed: usize,
    pub missing_reasons: usize,
}

pub fn summarize(items: &[AuditItem]) -> AuditSummary {
    AuditSummary {
        total: items.len(),
        answered: items.iter().filter(|i| i.result.is_some()).count(),
        failed: items.iter().filter(|i| i.is_fail()).count(),
        missing_reasons: items.iter().filter(|i| i.needs_fail_reason()).count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(id: &str, category: &str, result: Option<AuditResult>, fail_reason: &str) -> AuditItem {
        AuditItem {
            id: id.to_string(),
            category: category.to_string(),
            text: format!("Check {}", id),
            result,
            fail_reason: fail_reason.to_string(),
        }
    }

    #[test]
    fn test_leaving_fail_clears_and_reentry_stays_empty() {
        let items = vec![line("a1", "Cart", Some(AuditResult::Fail), "broken seal")];

        let items = set_result(items, "a1", AuditResult::NotApplicable);
        assert_eq!(items[0].result, Some(AuditResult::NotApplicable));
        assert_eq!(items[0].fail_reason, "");

        let items = set_result(items, "a1", AuditResult::Fail);
        assert_eq!(items[0].result, Some(AuditResult::Fail));
        assert_eq!(items[0].fail_reason, "");
    }

    #[test]
    fn test_fail_to_fail_keeps_reason() {
        let items = vec![line("a1", "Cart", Some(AuditResult::Fail), "label torn")];
        let items = set_result(items, "a1", AuditResult::Fail);
        assert_eq!(items[0].fail_reason, "label torn");
    }

    #[test]
    fn test_clear_result_goes_unset() {
        let items = vec![line("a1", "Cart", Some(AuditResult::Fail), "label torn")];
        let items = clear_result(items, "a1");
        assert_eq!(items[0].result, None);
        assert_eq!(items[0].fail_reason, "");
    }

    #[test]
    fn test_fail_reason_is_capped_by_characters() {
        let items = vec![line("a1", "Cart", Some(AuditResult::Fail), "")];
        let long = "藥".repeat(FAIL_REASON_MAX_CHARS + 5);
        let items = set_fail_reason(items, "a1", &long);
        assert_eq!(items[0].fail_reason_len(), FAIL_REASON_MAX_CHARS);
        assert!(long.starts_with(&items[0].fail_reason));
    }

    #[test]
    fn test_needs_fail_reason() {
        assert!(line("a1", "Cart", Some(AuditResult::Fail), "  ").needs_fail_reason());
        assert!(!line("a1", "Cart", Some(AuditResult::Fail), "x").needs_fail_reason());
        assert!(!line("a1", "Cart", Some(AuditResult::Pass), "").needs_fail_reason());
    }

    #[test]
    fn test_unknown_id_is_noop() {
        let items = vec![line("a1", "Cart", Some(AuditResult::Fail), "kept")];
        assert_eq!(set_result(items.clone(), "zz", AuditResult::Pass), items);
        assert_eq!(set_fail_reason(items.clone(), "zz", "new"), items);
    }

    #[test]
    fn test_group_by_category_keeps_first_appearance_order() {
        let items = vec![
            line("a1", "Cart", None, ""),
            line("a4", "Stock", None, ""),
            line("a2", "Cart", None, ""),
        ];
        let groups = group_by_category(&items);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "Cart");
        assert_eq!(groups[0].1.iter().map(|i| i.id.as_str()).collect::<Vec<_>>(), vec!["a1", "a2"]);
        assert_eq!(groups[1].0, "Stock");
    }

    #[test]
    fn test_summarize() {
        let items = vec![
            line("a1", "Cart", Some(AuditResult::Fail), ""),
            line("a2", "Cart", Some(AuditResult::Fail), "dirty"),
            line("a3", "Cart", Some(AuditResult::Pass), ""),
            line("a4", "Stock", None, ""),
        ];
        assert_eq!(
            summarize(&items),
            AuditSummary { total: 4, answered: 3, failed: 2, missing_reasons: 1 }
        );
    }

    #[test]
    fn test_result_serde_names() {
        let item: AuditItem = serde_json::from_str(
            r#"{"id":"a3","category":"Cart","text":"Separated?","result":"na","failReason":""}"#,
        )
        .unwrap();
        assert_eq!(item.result, Some(AuditResult::NotApplicable));

        let item: AuditItem =
            serde_json::from_str(r#"{"id":"a1","category":"Cart","text":"Labels?","result":null}"#).unwrap();
        assert_eq!(item.result, None);
        assert_eq!("na".parse::<AuditResult>(), Ok(AuditResult::NotApplicable));
        assert!("maybe".parse::<AuditResult>().is_err());
    }
}
