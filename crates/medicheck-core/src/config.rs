//! Application Configuration
//!
//! Header and signature defaults, read from `config.json`. Missing keys fall
//! back to the built-in defaults.

use serde::{Deserialize, Serialize};

use crate::entity::{DomainError, DomainResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    pub app_title: String,
    /// Employee id pre-filled into the pharmacist signature
    pub operator_id: String,
    pub operator_name: String,
    /// Revision tag printed on the inventory sheet
    pub form_revision: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_title: "MediCheck 藥品盤點".to_string(),
            operator_id: "t00000".to_string(),
            operator_name: "王小美 (藥師)".to_string(),
            form_revision: "REV. 2024".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> DomainResult<Self> {
        serde_json::from_str(json).map_err(|e| DomainError::Fixture(format!("config: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = AppConfig::from_json(r#"{"operatorId":"p12345"}"#).unwrap();
        assert_eq!(config.operator_id, "p12345");
        assert_eq!(config.form_revision, AppConfig::default().form_revision);
    }

    #[test]
    fn test_malformed_config() {
        let err = AppConfig::from_json("{").unwrap_err();
        assert!(matches!(err, DomainError::Fixture(_)));
    }
}
