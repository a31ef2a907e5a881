//! Inventory Check Component
//!
//! The drug inventory sheet for one unit visit: counted stock, expiry marks,
//! condition flags and notes per drug, then the signature block.

use leptos::prelude::*;

use crate::components::{Crumb, Layout, SignaturePanel, UnitNotFound};
use crate::models::{
    drug, find_by_id, AppConfig, CheckStatus, DrugItem, SignatureData, CONDITION_FLAG_GROUPS, EXPIRY_OPTIONS,
};
use crate::routes::Route;
use crate::store::{apply_rows, store_find_unit, use_app_store, AppStateStoreFields};

#[component]
pub fn InventoryCheck(unit_id: String) -> impl IntoView {
    let store = use_app_store();
    let Some(unit) = store_find_unit(&store, &unit_id) else {
        return view! { <UnitNotFound /> }.into_any();
    };
    let config = AppConfig::clone(&store.config().read_untracked());

    // A fresh sheet per visit
    let initial_rows = store.drug_catalog().read_untracked().to_vec();
    let items = RwSignal::new(initial_rows.clone());
    let signature = RwSignal::new(SignatureData::new(config.operator_id.clone(), today()));
    let summary = Memo::new(move |_| drug::summarize(&items.read()));

    log::info!("[INVENTORY] sheet opened for {} ({} drugs)", unit.id, initial_rows.len());

    view! {
        <Layout breadcrumbs=vec![
            Crumb::link(unit.name.clone(), Route::Unit(unit.id.clone())),
            Crumb::current("藥品查核表"),
        ]>
            <div class="sheet">
                <div class="sheet-toolbar">
                    <h2>
                        <span class="form-revision">{config.form_revision}</span>
                        "查核藥品清單"
                    </h2>
                    <div class="sheet-summary">
                        {move || {
                            let s = summary.get();
                            format!("總品項: {}　相符: {}　差異: {}　未盤點: {}", s.total, s.ok, s.issue, s.pending)
                        }}
                    </div>
                </div>

                <div class="table-scroll">
                    <table class="drug-table">
                        <thead>
                            <tr>
                                <th>"類別 / 藥品碼"</th>
                                <th>"藥品名稱 (常用名)"</th>
                                <th>"系統庫存"</th>
                                <th>"盤點數量"</th>
                                <th>"效期檢查"</th>
                                <th>"查核狀況"</th>
                                <th>"備註"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {initial_rows.into_iter().map(|item| view! {
                                <InventoryRow items=items item=item />
                            }).collect_view()}
                        </tbody>
                    </table>
                </div>

                <SignaturePanel signature=signature />
            </div>
        </Layout>
    }.into_any()
}

/// One drug row. Reads its live state from `items` by id.
#[component]
fn InventoryRow(items: RwSignal<Vec<DrugItem>>, item: DrugItem) -> impl IntoView {
    let id = StoredValue::new(item.id.clone());
    let fallback = item.clone();
    let row = Memo::new(move |_| {
        id.with_value(|id| items.with(|rows| find_by_id(rows, id).cloned()))
            .unwrap_or_else(|| fallback.clone())
    });

    view! {
        <tr>
            <td class="drug-category-cell">
                <div class="drug-category">{item.category}</div>
                <div class="drug-code">{item.code}</div>
            </td>
            <td class="drug-name">{item.name}</td>
            <td class="system-stock">
                <span>{item.system_stock}</span>
            </td>
            <td>
                <input
                    type="number"
                    placeholder="0"
                    class=move || if row.with(|r| r.check_status == CheckStatus::Issue) { "stock-input issue" } else { "stock-input" }
                    prop:value=move || row.with(|r| r.actual_stock.map(|n| n.to_string()).unwrap_or_default())
                    on:input=move |ev| {
                        let raw = event_target_value(&ev);
                        id.with_value(|id| apply_rows(items, |rows| drug::set_actual_stock(rows, id, &raw)));
                    }
                />
            </td>
            <td>
                <div class="expiry-options">
                    {EXPIRY_OPTIONS.iter().map(|&(level, label)| {
                        let is_set = move || row.with(|r| r.expiry_warning == level);
                        view! {
                            <label class=move || format!("expiry-option {}{}", level.as_str(), if is_set() { " active" } else { "" })>
                                <input
                                    type="checkbox"
                                    prop:checked=is_set
                                    on:change=move |_| id.with_value(|id| {
                                        apply_rows(items, |rows| drug::toggle_expiry_warning(rows, id, level))
                                    })
                                />
                                <span>{label}</span>
                            </label>
                        }
                    }).collect_view()}
                </div>
            </td>
            <td>
                <div class="condition-groups">
                    {CONDITION_FLAG_GROUPS.iter().map(|group| view! {
                        <div class="condition-group">
                            {group.iter().map(|&(flag, label)| view! {
                                <label class="condition-option">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || row.with(|r| r.has_flag(flag))
                                        on:change=move |_| id.with_value(|id| {
                                            apply_rows(items, |rows| drug::toggle_condition_flag(rows, id, flag))
                                        })
                                    />
                                    <span>{label}</span>
                                </label>
                            }).collect_view()}
                        </div>
                    }).collect_view()}
                </div>
            </td>
            <td>
                <input
                    type="text"
                    class="notes-input"
                    placeholder="輸入備註..."
                    prop:value=move || row.with(|r| r.notes.clone())
                    on:input=move |ev| {
                        let text = event_target_value(&ev);
                        id.with_value(|id| apply_rows(items, |rows| drug::set_note(rows, id, &text)));
                    }
                />
            </td>
        </tr>
    }
}

fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}
