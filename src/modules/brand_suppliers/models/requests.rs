use serde::{Deserialize, Deserializer};

use super::brand_supplier::{SupplierChanges, SupplierFields};
use super::validation::{validate_contact_person, validate_email, validate_name, validate_phone};
use crate::core::Result;

/// Body of POST /brand-suppliers and PUT /brand-suppliers/{id}
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateBrandSupplierRequest {
    pub name: String,
    #[serde(default)]
    pub contact_person: Option<String>,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    pub brand_id: i64,
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl CreateBrandSupplierRequest {
    pub fn validate(&self) -> Result<()> {
        validate_name(&self.name)?;
        if let Some(contact_person) = &self.contact_person {
            validate_contact_person(contact_person)?;
        }
        validate_email(&self.email)?;
        if let Some(phone) = &self.phone {
            validate_phone(phone)?;
        }
        Ok(())
    }

    /// Full field set; an omitted `isActive` means active
    pub fn into_fields(self) -> SupplierFields {
        SupplierFields {
            name: self.name,
            contact_person: self.contact_person,
            email: self.email,
            phone: self.phone,
            address: self.address,
            brand_id: self.brand_id,
            is_active: self.is_active.unwrap_or(true),
        }
    }
}

/// Body of PATCH /brand-suppliers/{id}
///
/// For the nullable columns an absent key keeps the stored value while an
/// explicit `null` clears it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateBrandSupplierRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub contact_person: Option<Option<String>>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub phone: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub address: Option<Option<String>>,
    #[serde(default)]
    pub brand_id: Option<i64>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl UpdateBrandSupplierRequest {
    pub fn validate(&self) -> Result<()> {
        if let Some(name) = &self.name {
            validate_name(name)?;
        }
        if let Some(Some(contact_person)) = &self.contact_person {
            validate_contact_person(contact_person)?;
        }
        if let Some(email) = &self.email {
            validate_email(email)?;
        }
        if let Some(Some(phone)) = &self.phone {
            validate_phone(phone)?;
        }
        Ok(())
    }
}

impl From<UpdateBrandSupplierRequest> for SupplierChanges {
    fn from(request: UpdateBrandSupplierRequest) -> Self {
        Self {
            name: request.name,
            contact_person: request.contact_person,
            email: request.email,
            phone: request.phone,
            address: request.address,
            brand_id: request.brand_id,
            is_active: request.is_active,
        }
    }
}

impl From<CreateBrandSupplierRequest> for SupplierChanges {
    fn from(request: CreateBrandSupplierRequest) -> Self {
        SupplierChanges::replacing_with(request.into_fields())
    }
}

/// Marks a key as present, keeping `null` distinguishable from absence
fn present<'de, D, T>(deserializer: D) -> std::result::Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
