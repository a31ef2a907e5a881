//! Reducer Laws
//!
//! Filter, toggle and status-derivation laws checked over small exhaustive
//! input sets, plus the walkthroughs of a checker filling in the forms.

use std::collections::BTreeSet;

use medicheck_core::{audit, drug, filter_units, AuditItem, AuditResult, CheckStatus, DrugItem, ExpiryWarning, Status, StatusFilter, Unit};

fn unit(id: &str, name: &str, inventory: Status, audit: Status) -> Unit {
    Unit {
        id: id.to_string(),
        name: name.to_string(),
        inventory_progress: 0,
        inventory_status: inventory,
        audit_status: audit,
    }
}

/// Every status combination, names with shared substrings
fn all_units() -> Vec<Unit> {
    let names = ["ICU", "ICU North", "ER", "Ward ER", "護理站 A", ""];
    let mut units = Vec::new();
    for (i, name) in names.iter().enumerate() {
        for inventory in Status::ALL {
            for audit in Status::ALL {
                units.push(unit(&format!("u{}-{}-{}", i, inventory.as_str(), audit.as_str()), name, inventory, audit));
            }
        }
    }
    units
}

fn drug_row(id: &str, system_stock: i64) -> DrugItem {
    DrugItem {
        id: id.to_string(),
        category: "一般用藥".to_string(),
        code: format!("GEN-{}", id),
        name: format!("Drug {}", id),
        system_stock,
        actual_stock: None,
        expiry_warning: ExpiryWarning::None,
        check_status: CheckStatus::Pending,
        condition_flags: BTreeSet::new(),
        notes: String::new(),
    }
}

fn sheet() -> Vec<DrugItem> {
    vec![drug_row("d1", 10), drug_row("d2", 0), drug_row("d3", 30)]
}

const STOCK_INPUTS: [&str; 9] = ["", "0", "10", "30", "25", "-1", "abc", "10abc", " 30"];

#[test]
fn filter_with_all_is_substring_match_in_order() {
    let units = all_units();
    for query in ["", "ICU", "ER", "North", "護理", "icu", "zzz"] {
        let shown = filter_units(&units, query, StatusFilter::All);
        let expected: Vec<Unit> = units.iter().filter(|u| u.name.contains(query)).cloned().collect();
        assert_eq!(shown, expected, "query {:?}", query);
    }
}

#[test]
fn filter_by_status_is_sound_and_complete() {
    let units = all_units();
    for status in Status::ALL {
        let shown = filter_units(&units, "", StatusFilter::Only(status));
        assert!(shown.iter().all(|u| u.inventory_status == status || u.audit_status == status));
        let qualifying = units
            .iter()
            .filter(|u| u.inventory_status == status || u.audit_status == status)
            .count();
        assert_eq!(shown.len(), qualifying);
    }
}

#[test]
fn stock_edit_is_idempotent() {
    for raw in STOCK_INPUTS {
        for row in ["d1", "d2", "d3"] {
            let once = drug::set_actual_stock(sheet(), row, raw);
            let twice = drug::set_actual_stock(once.clone(), row, raw);
            assert_eq!(once, twice, "input {:?} on {}", raw, row);
        }
    }
}

#[test]
fn check_status_always_follows_stock() {
    let mut items = sheet();
    for raw in STOCK_INPUTS {
        for row in ["d1", "d2", "d3"] {
            items = drug::set_actual_stock(items, row, raw);
            for item in &items {
                let expected = match item.actual_stock {
                    None => CheckStatus::Pending,
                    Some(n) if n == item.system_stock => CheckStatus::Ok,
                    Some(_) => CheckStatus::Issue,
                };
                assert_eq!(item.check_status, expected);
            }
        }
    }
}

#[test]
fn expiry_double_toggle_is_identity() {
    for level in [ExpiryWarning::SixToTwelveMonths, ExpiryWarning::UnderSixMonths] {
        // From the other level the first toggle replaces it, so the pair ends at none.
        for start in [ExpiryWarning::None, level] {
            let mut items = sheet();
            items[0].expiry_warning = start;
            let toggled = drug::toggle_expiry_warning(items.clone(), "d1", level);
            let back = drug::toggle_expiry_warning(toggled, "d1", level);
            assert_eq!(back, items);
        }
    }
}

#[test]
fn condition_flag_toggle_laws() {
    let vocabulary = ["zero_qty", "not_required", "item_correct", "less", "more", "expired", "changed", "correct_qty", "custom"];
    for flag in vocabulary {
        let items = drug::toggle_condition_flag(sheet(), "d1", "less");

        let once = drug::toggle_condition_flag(items.clone(), "d1", flag);
        assert_eq!(once[0].has_flag(flag), !items[0].has_flag(flag));

        let twice = drug::toggle_condition_flag(once, "d1", flag);
        assert_eq!(twice, items);
    }
}

#[test]
fn unknown_ids_change_nothing() {
    assert_eq!(drug::set_actual_stock(sheet(), "nope", "5"), sheet());
    assert_eq!(drug::toggle_expiry_warning(sheet(), "nope", ExpiryWarning::UnderSixMonths), sheet());
    assert_eq!(drug::toggle_condition_flag(sheet(), "nope", "less"), sheet());
    assert_eq!(drug::set_note(sheet(), "nope", "x"), sheet());
}

#[test]
fn fail_reason_cleared_on_exit_not_restored_on_reentry() {
    let exits = [Some(AuditResult::Pass), Some(AuditResult::NotApplicable), None];
    for exit in exits {
        let items = vec![AuditItem {
            id: "a1".to_string(),
            category: "一、護理行動車".to_string(),
            text: "藥盒內是否有標籤被撕毀的現象？".to_string(),
            result: Some(AuditResult::Fail),
            fail_reason: "broken seal".to_string(),
        }];
        let left = match exit {
            Some(result) => audit::set_result(items, "a1", result),
            None => audit::clear_result(items, "a1"),
        };
        assert_eq!(left[0].fail_reason, "");

        let back = audit::set_result(left, "a1", AuditResult::Fail);
        assert!(back[0].is_fail());
        assert_eq!(back[0].fail_reason, "");
        assert!(back[0].needs_fail_reason());
    }
}

#[test]
fn walkthrough_inventory_sheet() {
    let items = sheet();
    let items = drug::set_actual_stock(items, "d1", "10");
    let items = drug::set_actual_stock(items, "d3", "25");
    let items = drug::toggle_condition_flag(items, "d3", "less");
    let items = drug::toggle_expiry_warning(items, "d3", ExpiryWarning::SixToTwelveMonths);
    let items = drug::set_note(items, "d3", "發現 5 顆破損");

    assert_eq!(items[0].check_status, CheckStatus::Ok);
    assert_eq!(items[1].check_status, CheckStatus::Pending);
    assert_eq!(items[2].check_status, CheckStatus::Issue);
    assert_eq!(
        drug::summarize(&items),
        drug::InventorySummary { total: 3, ok: 1, issue: 1, pending: 1 }
    );
}
