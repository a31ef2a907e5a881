//! MediCheck Frontend App
//!
//! Root component: provides the store and route context, then switches views
//! on the current route.

use leptos::ev;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{AuditCheck, Dashboard, InventoryCheck, UnitSelection};
use crate::context::AppContext;
use crate::routes::Route;
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    provide_context(Store::new(AppState::from_fixtures()));

    let initial = Route::from_hash(&window().location().hash().unwrap_or_default());
    let ctx = AppContext::new(signal(initial));
    provide_context(ctx);

    // Back/forward buttons, breadcrumb links and typed URLs
    let _ = window_event_listener(ev::hashchange, move |_| ctx.sync_from_location());

    view! {
        {move || match ctx.route.get() {
            Route::Dashboard => view! { <Dashboard /> }.into_any(),
            Route::Unit(unit_id) => view! { <UnitSelection unit_id=unit_id /> }.into_any(),
            Route::Inventory(unit_id) => view! { <InventoryCheck unit_id=unit_id /> }.into_any(),
            Route::Audit(unit_id) => view! { <AuditCheck unit_id=unit_id /> }.into_any(),
        }}
    }
}
