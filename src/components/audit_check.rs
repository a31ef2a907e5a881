//! Audit Check Component
//!
//! Compliance checklist for one unit visit, sectioned by category. A failed
//! line asks for a short reason.

use leptos::prelude::*;

use crate::components::{Crumb, Layout, UnitNotFound};
use crate::models::{audit, find_by_id, AuditItem, AUDIT_RESULT_OPTIONS, FAIL_REASON_MAX_CHARS};
use crate::routes::Route;
use crate::store::{apply_rows, store_find_unit, use_app_store, AppStateStoreFields};

#[component]
pub fn AuditCheck(unit_id: String) -> impl IntoView {
    let store = use_app_store();
    let Some(unit) = store_find_unit(&store, &unit_id) else {
        return view! { <UnitNotFound /> }.into_any();
    };

    let initial_rows = store.audit_checklist().read_untracked().to_vec();
    let sections = audit::group_by_category(&initial_rows);
    let items = RwSignal::new(initial_rows);
    let summary = Memo::new(move |_| audit::summarize(&items.read()));

    log::info!("[AUDIT] checklist opened for {} ({} sections)", unit.id, sections.len());

    view! {
        <Layout breadcrumbs=vec![
            Crumb::link(unit.name.clone(), Route::Unit(unit.id.clone())),
            Crumb::current("藥品管理稽核表"),
        ]>
            <div class="audit-sheet">
                <div class="audit-header">
                    <h2>"藥品管理稽核"</h2>
                    <p>"請依照項目進行合規檢查，若不合格請務必填寫原因。"</p>
                    <p class="audit-summary">
                        {move || {
                            let s = summary.get();
                            format!("已作答 {}/{}　不合格 {}　待填原因 {}", s.answered, s.total, s.failed, s.missing_reasons)
                        }}
                    </p>
                </div>

                {sections.into_iter().map(|(category, lines)| view! {
                    <section class="audit-section">
                        <h3>{category}</h3>
                        {lines.into_iter().map(|line| view! {
                            <AuditRow items=items item=line />
                        }).collect_view()}
                    </section>
                }).collect_view()}
            </div>
        </Layout>
    }.into_any()
}

/// One checklist line with its answer buttons
#[component]
fn AuditRow(items: RwSignal<Vec<AuditItem>>, item: AuditItem) -> impl IntoView {
    let id = StoredValue::new(item.id.clone());
    let fallback = item.clone();
    let row = Memo::new(move |_| {
        id.with_value(|id| items.with(|rows| find_by_id(rows, id).cloned()))
            .unwrap_or_else(|| fallback.clone())
    });

    view! {
        <div class="audit-row">
            <div class="audit-text">
                <p>{item.text}</p>
                <Show when=move || row.with(AuditItem::is_fail)>
                    <div class=move || if row.with(AuditItem::needs_fail_reason) { "fail-reason required" } else { "fail-reason" }>
                        <label>"不合格原因 (必填)"</label>
                        <input
                            type="text"
                            maxlength=FAIL_REASON_MAX_CHARS.to_string()
                            placeholder="請描述問題點..."
                            autofocus=true
                            prop:value=move || row.with(|r| r.fail_reason.clone())
                            on:input=move |ev| {
                                let text = event_target_value(&ev);
                                id.with_value(|id| apply_rows(items, |rows| audit::set_fail_reason(rows, id, &text)));
                            }
                        />
                        <span class="fail-reason-counter">
                            {move || format!("{}/{}", row.with(AuditItem::fail_reason_len), FAIL_REASON_MAX_CHARS)}
                        </span>
                    </div>
                </Show>
            </div>

            <div class="audit-results">
                {AUDIT_RESULT_OPTIONS.iter().map(|&(result, label)| {
                    let selected = move || row.with(|r| r.result == Some(result));
                    view! {
                        <button
                            type="button"
                            class=move || format!("result-btn {}{}", result.as_str(), if selected() { " active" } else { "" })
                            on:click=move |_| id.with_value(|id| apply_rows(items, |rows| audit::set_result(rows, id, result)))
                        >
                            {label}
                        </button>
                    }
                }).collect_view()}
                <Show when=move || row.with(|r| r.result.is_some())>
                    <button
                        type="button"
                        class="result-clear"
                        on:click=move |_| id.with_value(|id| apply_rows(items, |rows| audit::clear_result(rows, id)))
                    >
                        "清除"
                    </button>
                </Show>
            </div>
        </div>
    }
}
