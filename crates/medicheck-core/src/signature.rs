//! Signature Block
//!
//! Attestation fields at the foot of the inventory sheet.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::entity::DomainError;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureData {
    pub pharmacist_id: String,
    pub head_nurse_name: String,
    /// `YYYY-MM-DD`
    pub date: String,
    pub pharmacist_comments: String,
    pub unit_comments: String,
}

impl SignatureData {
    /// A blank block signed by the given pharmacist on the given date
    pub fn new(pharmacist_id: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            pharmacist_id: pharmacist_id.into(),
            date: date.into(),
            ..Default::default()
        }
    }

    pub fn field(&self, field: SignatureField) -> &str {
        match field {
            SignatureField::PharmacistId => &self.pharmacist_id,
            SignatureField::HeadNurseName => &self.head_nurse_name,
            SignatureField::Date => &self.date,
            SignatureField::PharmacistComments => &self.pharmacist_comments,
            SignatureField::UnitComments => &self.unit_comments,
        }
    }

    pub fn set_field(&mut self, field: SignatureField, value: impl Into<String>) {
        let slot = match field {
            SignatureField::PharmacistId => &mut self.pharmacist_id,
            SignatureField::HeadNurseName => &mut self.head_nurse_name,
            SignatureField::Date => &mut self.date,
            SignatureField::PharmacistComments => &mut self.pharmacist_comments,
            SignatureField::UnitComments => &mut self.unit_comments,
        };
        *slot = value.into();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignatureField {
    PharmacistId,
    HeadNurseName,
    Date,
    PharmacistComments,
    UnitComments,
}

impl SignatureField {
    pub const ALL: [SignatureField; 5] = [
        SignatureField::PharmacistId,
        SignatureField::HeadNurseName,
        SignatureField::Date,
        SignatureField::PharmacistComments,
        SignatureField::UnitComments,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SignatureField::PharmacistId => "pharmacistId",
            SignatureField::HeadNurseName => "headNurseName",
            SignatureField::Date => "date",
            SignatureField::PharmacistComments => "pharmacistComments",
            SignatureField::UnitComments => "unitComments",
        }
    }
}

impl FromStr for SignatureField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SignatureField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| DomainError::InvalidInput(format!("unknown signature field `{}`", s)))
    }
}
