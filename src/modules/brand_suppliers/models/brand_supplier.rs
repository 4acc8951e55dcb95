// Brand supplier entity and its writable field set
//
// A supplier belongs to exactly one brand. Every record handed out by the
// repository carries a summary of that brand alongside the foreign key.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Brand reference embedded in every supplier response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandSummary {
    pub brand_id: i64,
    pub name: String,
}

/// A third-party supplier associated with a brand
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandSupplier {
    /// Storage-assigned identifier, never reused
    pub supplier_id: i64,
    pub name: String,
    pub contact_person: Option<String>,
    /// Unique across all suppliers
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub brand_id: i64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub brand: BrandSummary,
}

impl BrandSupplier {
    /// Snapshot of the fields a caller is allowed to write
    pub fn fields(&self) -> SupplierFields {
        SupplierFields {
            name: self.name.clone(),
            contact_person: self.contact_person.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            address: self.address.clone(),
            brand_id: self.brand_id,
            is_active: self.is_active,
        }
    }
}

/// The writable columns of a supplier, as persisted by insert and update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupplierFields {
    pub name: String,
    pub contact_person: Option<String>,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub brand_id: i64,
    pub is_active: bool,
}

/// Field-presence description of a write.
///
/// `None` means "leave the stored value alone". For nullable columns the
/// inner option carries the new value, where `Some(None)` clears the column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SupplierChanges {
    pub name: Option<String>,
    pub contact_person: Option<Option<String>>,
    pub email: Option<String>,
    pub phone: Option<Option<String>>,
    pub address: Option<Option<String>>,
    pub brand_id: Option<i64>,
    pub is_active: Option<bool>,
}

impl SupplierChanges {
    /// Changes that overwrite every writable field with `fields`
    pub fn replacing_with(fields: SupplierFields) -> Self {
        Self {
            name: Some(fields.name),
            contact_person: Some(fields.contact_person),
            email: Some(fields.email),
            phone: Some(fields.phone),
            address: Some(fields.address),
            brand_id: Some(fields.brand_id),
            is_active: Some(fields.is_active),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merge the present fields over `current`
    pub fn apply_to(&self, current: &SupplierFields) -> SupplierFields {
        SupplierFields {
            name: self.name.clone().unwrap_or_else(|| current.name.clone()),
            contact_person: self
                .contact_person
                .clone()
                .unwrap_or_else(|| current.contact_person.clone()),
            email: self.email.clone().unwrap_or_else(|| current.email.clone()),
            phone: self.phone.clone().unwrap_or_else(|| current.phone.clone()),
            address: self.address.clone().unwrap_or_else(|| current.address.clone()),
            brand_id: self.brand_id.unwrap_or(current.brand_id),
            is_active: self.is_active.unwrap_or(current.is_active),
        }
    }
}
