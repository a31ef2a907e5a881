//! Status Badge Component

use leptos::prelude::*;

use crate::models::{status_label, Status};

#[component]
pub fn StatusBadge(status: Status) -> impl IntoView {
    view! {
        <span class=format!("status-badge {}", status.as_str())>{status_label(status)}</span>
    }
}
