//! Unit Selection Component
//!
//! Lets the checker pick the inventory sheet or the audit for a unit.

use leptos::prelude::*;

use crate::components::{Crumb, Layout, UnitNotFound};
use crate::context::AppContext;
use crate::routes::Route;
use crate::store::{store_find_unit, use_app_store};

#[component]
pub fn UnitSelection(unit_id: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let Some(unit) = store_find_unit(&store, &unit_id) else {
        return view! { <UnitNotFound /> }.into_any();
    };

    let inventory = Route::Inventory(unit.id.clone());
    let audit = Route::Audit(unit.id.clone());

    view! {
        <Layout breadcrumbs=vec![Crumb::current(unit.name.clone())]>
            <div class="unit-heading">
                <h1>{unit.name}</h1>
                <p>"請選擇欲執行的作業項目。"</p>
            </div>

            <div class="task-cards">
                <div class="task-card inventory" on:click=move |_| ctx.navigate(inventory.clone())>
                    <h3>"A. 藥品查核表"</h3>
                    <p>"核對庫存數量、輸入實際盤點量，並標記即期或過期藥品。"</p>
                    <span class="task-cta">"開始盤點 →"</span>
                </div>
                <div class="task-card audit" on:click=move |_| ctx.navigate(audit.clone())>
                    <h3>"B. 藥品管理稽核表"</h3>
                    <p>"填寫單位合規檢查清單，包含護理行動車、冰箱與環境安全規範。"</p>
                    <span class="task-cta">"開始稽核 →"</span>
                </div>
            </div>
        </Layout>
    }.into_any()
}
