//! Application Context
//!
//! Current route, provided via Leptos Context API and kept in step with
//! `window.location.hash`.

use leptos::prelude::*;

use crate::routes::Route;

#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current route - read
    pub route: ReadSignal<Route>,
    /// Current route - write
    set_route: WriteSignal<Route>,
}

impl AppContext {
    pub fn new(route: (ReadSignal<Route>, WriteSignal<Route>)) -> Self {
        Self {
            route: route.0,
            set_route: route.1,
        }
    }

    /// Switch view and record it in the address bar
    pub fn navigate(&self, route: Route) {
        let hash = route.to_hash();
        log::info!("[NAV] {}", hash);
        self.set_if_changed(route);
        if let Err(err) = window().location().set_hash(&hash) {
            log::warn!("[NAV] could not update location: {:?}", err);
        }
    }

    /// Follow a hash change made outside the app (back button, typed URL, link)
    pub fn sync_from_location(&self) {
        let hash = window().location().hash().unwrap_or_default();
        self.set_if_changed(Route::from_hash(&hash));
    }

    fn set_if_changed(&self, route: Route) {
        if self.route.get_untracked() != route {
            self.set_route.set(route);
        }
    }
}
