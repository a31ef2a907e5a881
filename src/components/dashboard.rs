//! Dashboard Component
//!
//! Unit list with name search and status filter.

use leptos::prelude::*;

use crate::components::{Layout, StatusBadge};
use crate::context::AppContext;
use crate::models::{filter_units, StatusFilter, Unit, STATUS_FILTER_OPTIONS};
use crate::routes::Route;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn Dashboard() -> impl IntoView {
    let store = use_app_store();
    let (query, set_query) = signal(String::new());
    let (status_filter, set_status_filter) = signal(StatusFilter::All);

    let filtered = Memo::new(move |_| {
        let units = store.units().read();
        query.with(|query| filter_units(&units, query, status_filter.get()))
    });

    let on_status_change = move |ev: web_sys::Event| {
        match event_target_value(&ev).parse::<StatusFilter>() {
            Ok(filter) => set_status_filter.set(filter),
            Err(err) => log::warn!("[DASHBOARD] {}", err),
        }
    };

    view! {
        <Layout>
            <section class="filters">
                <div class="filter-field">
                    <label>"搜尋單位 (Search Unit)"</label>
                    <input
                        type="text"
                        placeholder="輸入單位名稱搜尋..."
                        prop:value=move || query.get()
                        on:input=move |ev| set_query.set(event_target_value(&ev))
                    />
                </div>
                <div class="filter-field">
                    <label>"狀態篩選 (Status Filter)"</label>
                    <select
                        prop:value=move || status_filter.get().as_str()
                        on:change=on_status_change
                    >
                        {STATUS_FILTER_OPTIONS.iter().map(|(filter, label)| view! {
                            <option value=filter.as_str()>{*label}</option>
                        }).collect_view()}
                    </select>
                </div>
            </section>

            <div class="unit-list-header">
                <h2>"單位列表"</h2>
                <span class="unit-count">{move || format!("共 {} 個單位", filtered.read().len())}</span>
            </div>

            <Show
                when=move || !filtered.read().is_empty()
                fallback=|| view! {
                    <div class="empty-state">
                        <p>"沒有符合篩選條件的單位"</p>
                    </div>
                }
            >
                <div class="unit-list">
                    <For
                        each=move || filtered.get()
                        key=|unit| unit.id.clone()
                        children=move |unit| view! { <UnitCard unit=unit /> }
                    />
                </div>
            </Show>
        </Layout>
    }
}

/// A clickable unit row with both form statuses
#[component]
fn UnitCard(unit: Unit) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let id = unit.id.clone();

    view! {
        <div class="unit-card" on:click=move |_| ctx.navigate(Route::Unit(id.clone()))>
            <h3 class="unit-name">{unit.name}</h3>
            <div class="unit-statuses">
                <div class="unit-status">
                    <span class="status-caption">"盤點表 (Inventory)"</span>
                    <StatusBadge status=unit.inventory_status />
                    <span class="unit-progress">{format!("{}%", unit.inventory_progress)}</span>
                </div>
                <div class="unit-status">
                    <span class="status-caption">"稽核表 (Audit)"</span>
                    <StatusBadge status=unit.audit_status />
                </div>
            </div>
        </div>
    }
}
