//! Layout Component
//!
//! Page header with app title, breadcrumbs and the signed-in operator.

use leptos::prelude::*;

use crate::models::AppConfig;
use crate::routes::Route;
use crate::store::{use_app_store, AppStateStoreFields};

/// Breadcrumb entry; the last one usually has no link
#[derive(Clone, Debug)]
pub struct Crumb {
    pub label: String,
    pub to: Option<Route>,
}

impl Crumb {
    pub fn link(label: impl Into<String>, to: Route) -> Self {
        Self { label: label.into(), to: Some(to) }
    }

    pub fn current(label: impl Into<String>) -> Self {
        Self { label: label.into(), to: None }
    }
}

#[component]
pub fn Layout(
    #[prop(optional)] breadcrumbs: Vec<Crumb>,
    children: Children,
) -> impl IntoView {
    let store = use_app_store();
    let config = AppConfig::clone(&store.config().read_untracked());
    let has_crumbs = !breadcrumbs.is_empty();

    view! {
        <div class="layout">
            <header class="app-header">
                <div class="header-left">
                    <a class="app-title" href=Route::Dashboard.to_hash()>{config.app_title}</a>
                    {has_crumbs.then(|| view! {
                        <nav class="breadcrumbs">
                            <a href=Route::Dashboard.to_hash()>"首頁"</a>
                            {breadcrumbs.into_iter().map(|crumb| view! {
                                <span class="crumb-separator">"›"</span>
                                {match crumb.to {
                                    Some(route) => view! { <a href=route.to_hash()>{crumb.label}</a> }.into_any(),
                                    None => view! { <span class="crumb-current">{crumb.label}</span> }.into_any(),
                                }}
                            }).collect_view()}
                        </nav>
                    })}
                </div>
                <div class="operator">
                    <p class="operator-name">{config.operator_name}</p>
                    <p class="operator-id">{format!("ID: {}", config.operator_id)}</p>
                </div>
            </header>
            <main class="main-content">{children()}</main>
        </div>
    }
}

/// Shown when a route names a unit that is not in the fixtures
#[component]
pub fn UnitNotFound() -> impl IntoView {
    view! {
        <Layout>
            <div class="empty-state">
                <p>"找不到該單位"</p>
                <a href=Route::Dashboard.to_hash()>"返回首頁"</a>
            </div>
        </Layout>
    }
}
