//! Frontend Models
//!
//! Domain types come from medicheck-core; this module adds the option
//! tables and labels the forms display.

pub use medicheck_core::{
    audit, drug, filter_units, find_by_id, AppConfig, AuditItem, AuditResult, CheckStatus, DrugItem,
    ExpiryWarning, SignatureData, SignatureField, Status, StatusFilter, Unit, FAIL_REASON_MAX_CHARS,
};

/// Status filter select options
pub const STATUS_FILTER_OPTIONS: &[(StatusFilter, &str)] = &[
    (StatusFilter::All, "顯示所有狀態"),
    (StatusFilter::Only(Status::NotStarted), "未開始 (Not Started)"),
    (StatusFilter::Only(Status::Pending), "進行中 (In Progress)"),
    (StatusFilter::Only(Status::Completed), "已完成 (Completed)"),
];

/// Expiry checkboxes on an inventory row
pub const EXPIRY_OPTIONS: &[(ExpiryWarning, &str)] = &[
    (ExpiryWarning::SixToTwelveMonths, "6-12 個月"),
    (ExpiryWarning::UnderSixMonths, "< 6 個月"),
];

/// Condition checkboxes, shown as two independent groups
pub const CONDITION_FLAG_GROUPS: &[&[(&str, &str)]] = &[
    &[
        ("zero_qty", "數量為零"),
        ("not_required", "不需常備"),
        ("item_correct", "品項正確"),
    ],
    &[
        ("less", "少"),
        ("more", "多"),
        ("expired", "過期"),
        ("changed", "換廠、換包裝"),
        ("correct_qty", "正確"),
    ],
];

/// Answer buttons on an audit line
pub const AUDIT_RESULT_OPTIONS: &[(AuditResult, &str)] = &[
    (AuditResult::Pass, "合格"),
    (AuditResult::Fail, "不合格"),
    (AuditResult::NotApplicable, "不適用"),
];

pub fn status_label(status: Status) -> &'static str {
    match status {
        Status::Completed => "已完成",
        Status::Pending => "進行中",
        Status::NotStarted => "未開始",
    }
}
