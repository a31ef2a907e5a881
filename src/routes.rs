//! Hash Routes
//!
//! `#/`, `#/unit/{id}`, `#/unit/{id}/inventory`, `#/unit/{id}/audit`.
//! Anything else falls back to the dashboard.

use percent_encoding::{percent_decode_str, utf8_percent_encode, NON_ALPHANUMERIC};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    Unit(String),
    Inventory(String),
    Audit(String),
}

impl Route {
    pub fn from_hash(hash: &str) -> Self {
        let path = hash.trim_start_matches('#');
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Route::Dashboard,
            ["unit", id] => Route::Unit(decode(id)),
            ["unit", id, "inventory"] => Route::Inventory(decode(id)),
            ["unit", id, "audit"] => Route::Audit(decode(id)),
            _ => {
                log::debug!("[NAV] unknown path {:?}, showing dashboard", path);
                Route::Dashboard
            }
        }
    }

    pub fn to_hash(&self) -> String {
        match self {
            Route::Dashboard => "#/".to_string(),
            Route::Unit(id) => format!("#/unit/{}", encode(id)),
            Route::Inventory(id) => format!("#/unit/{}/inventory", encode(id)),
            Route::Audit(id) => format!("#/unit/{}/audit", encode(id)),
        }
    }
}

fn encode(segment: &str) -> String {
    utf8_percent_encode(segment, NON_ALPHANUMERIC).to_string()
}

fn decode(segment: &str) -> String {
    percent_decode_str(segment).decode_utf8_lossy().into_owned()
}
