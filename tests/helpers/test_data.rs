// Test Data Factory
//
// Generates unique supplier payloads so tests never collide on email.

use serde_json::{json, Value};
use uuid::Uuid;

use brand_suppliers::core::{ActingUser, UserRole};
use brand_suppliers::modules::brand_suppliers::{
    CreateBrandSupplierRequest, UpdateBrandSupplierRequest,
};

/// Test data factory for generating unique test data
pub struct TestDataFactory;

impl TestDataFactory {
    /// Unique, well-formed email address
    pub fn random_email() -> String {
        format!("supplier-{}@example.com", Uuid::new_v4().simple())
    }

    /// Minimal valid create request for `brand_id`
    pub fn create_request(brand_id: i64) -> CreateBrandSupplierRequest {
        Self::create_request_with_email(brand_id, &Self::random_email())
    }

    pub fn create_request_with_email(brand_id: i64, email: &str) -> CreateBrandSupplierRequest {
        CreateBrandSupplierRequest {
            name: "Test Supplier".to_string(),
            contact_person: Some("Jane Doe".to_string()),
            email: email.to_string(),
            phone: Some("0812345678".to_string()),
            address: Some("Jl. Sudirman 1, Jakarta".to_string()),
            brand_id,
            is_active: None,
        }
    }

    /// Partial update touching only `phone`
    pub fn phone_update(phone: &str) -> UpdateBrandSupplierRequest {
        UpdateBrandSupplierRequest {
            phone: Some(Some(phone.to_string())),
            ..Default::default()
        }
    }

    /// JSON body accepted by POST /brand-suppliers
    pub fn create_payload(brand_id: i64) -> Value {
        json!({
            "name": "Test Supplier",
            "contactPerson": "Jane Doe",
            "email": Self::random_email(),
            "phone": "0812345678",
            "address": "Jl. Sudirman 1, Jakarta",
            "brandId": brand_id
        })
    }

    pub fn admin() -> ActingUser {
        ActingUser::new("admin-1", UserRole::Admin)
    }

    pub fn user() -> ActingUser {
        ActingUser::new("user-1", UserRole::User)
    }
}
