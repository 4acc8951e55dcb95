use brand_suppliers::core::AppError;
use brand_suppliers::modules::brand_suppliers::models::validation::{
    is_valid_email, validate_contact_person, validate_email, validate_name, validate_phone,
    MAX_EMAIL_LENGTH, MAX_EMAIL_LOCAL_LENGTH, MAX_NAME_LENGTH, PHONE_LENGTH,
};
use brand_suppliers::modules::brand_suppliers::{
    CreateBrandSupplierRequest, UpdateBrandSupplierRequest,
};
use proptest::prelude::*;
use serde_json::json;

/// Field rules for supplier payloads
///
/// Validates:
/// - name: non-empty, at most 100 characters
/// - contactPerson: 1..=100 characters when present
/// - email: well-formed local part and domain, at most 100 characters
/// - phone: exactly 10 characters when present
/// - Unknown body fields are rejected

#[cfg(test)]
mod supplier_validation_tests {
    use super::*;

    fn create_body(overrides: serde_json::Value) -> serde_json::Value {
        let mut body = json!({
            "name": "Acme Supplies",
            "email": "orders@acme.test",
            "brandId": 1
        });
        if let (Some(base), Some(extra)) = (body.as_object_mut(), overrides.as_object()) {
            for (key, value) in extra {
                base.insert(key.clone(), value.clone());
            }
        }
        body
    }

    #[test]
    fn test_name_boundaries() {
        assert!(validate_name("A").is_ok());
        assert!(validate_name(&"n".repeat(MAX_NAME_LENGTH)).is_ok());
        assert!(validate_name("").is_err());
        assert!(validate_name(&"n".repeat(MAX_NAME_LENGTH + 1)).is_err());
    }

    #[test]
    fn test_lengths_count_characters_not_bytes() {
        // 100 two-byte characters
        assert!(validate_name(&"é".repeat(MAX_NAME_LENGTH)).is_ok());
        assert!(validate_phone("０８１２３４５６７８").is_ok());
    }

    #[test]
    fn test_contact_person_must_not_be_blank_when_present() {
        assert!(validate_contact_person("Jane").is_ok());
        assert!(validate_contact_person("").is_err());
    }

    #[test]
    fn test_email_shapes() {
        for valid in ["a@x.com", "first.last@sub.example.co.id", "a+tag@my-domain.io"] {
            assert!(is_valid_email(valid), "{} should be valid", valid);
        }
        for invalid in [
            "plain",
            "@x.com",
            "a@",
            "a@x",
            "a@@x.com",
            "a@x..com",
            "a@-x.com",
            "a b@x.com",
            ".a@x.com",
            "a.@x.com",
            "a..b@x.com",
            "a(b)@x.com",
            "a,b@x.com",
            "a\"b@x.com",
            "a<b>@x.com",
        ] {
            assert!(!is_valid_email(invalid), "{} should be invalid", invalid);
        }
    }

    #[test]
    fn test_email_length_limit() {
        let domain = "x".repeat(MAX_EMAIL_LENGTH - "a@.com".len());
        assert!(validate_email(&format!("a@{}.com", domain)).is_ok());
        assert!(validate_email(&format!("a@{}x.com", domain)).is_err());
    }

    #[test]
    fn test_email_local_part_length_limit() {
        let local = "l".repeat(MAX_EMAIL_LOCAL_LENGTH);
        assert!(is_valid_email(&format!("{}@x.com", local)));
        assert!(!is_valid_email(&format!("{}l@x.com", local)));
    }

    #[test]
    fn test_phone_must_be_exact_length() {
        assert!(validate_phone("1234567890").is_ok());
        assert!(validate_phone("123456789").is_err());
        assert!(validate_phone("12345678901").is_err());
    }

    #[test]
    fn test_create_request_defaults_to_active() {
        let request: CreateBrandSupplierRequest =
            serde_json::from_value(create_body(json!({}))).unwrap();

        assert!(request.validate().is_ok());
        let fields = request.into_fields();
        assert!(fields.is_active);
        assert_eq!(fields.contact_person, None);
        assert_eq!(fields.phone, None);
    }

    #[test]
    fn test_create_request_reports_validation_error() {
        let request: CreateBrandSupplierRequest =
            serde_json::from_value(create_body(json!({ "phone": "123" }))).unwrap();

        assert!(matches!(request.validate(), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_create_request_rejects_unknown_fields() {
        let result: Result<CreateBrandSupplierRequest, _> =
            serde_json::from_value(create_body(json!({ "supplierId": 9 })));
        assert!(result.is_err());
    }

    #[test]
    fn test_create_request_requires_brand_id() {
        let result: Result<CreateBrandSupplierRequest, _> =
            serde_json::from_value(json!({ "name": "Acme", "email": "a@x.com" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_update_request_distinguishes_null_from_absent() {
        let request: UpdateBrandSupplierRequest =
            serde_json::from_value(json!({ "phone": null, "name": "Renamed" })).unwrap();

        assert_eq!(request.phone, Some(None));
        assert_eq!(request.contact_person, None);
        assert_eq!(request.address, None);
        assert_eq!(request.name.as_deref(), Some("Renamed"));
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_empty_update_request_is_valid() {
        let request: UpdateBrandSupplierRequest = serde_json::from_value(json!({})).unwrap();
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_update_request_validates_present_fields() {
        let request: UpdateBrandSupplierRequest =
            serde_json::from_value(json!({ "email": "not-an-email" })).unwrap();
        assert!(request.validate().is_err());
    }

    proptest! {
        #[test]
        fn test_phone_accepts_only_exact_length(phone in "[0-9]{0,15}") {
            prop_assert_eq!(validate_phone(&phone).is_ok(), phone.len() == PHONE_LENGTH);
        }

        #[test]
        fn test_name_length_rule(len in 0usize..150) {
            let name = "x".repeat(len);
            prop_assert_eq!(validate_name(&name).is_ok(), (1..=MAX_NAME_LENGTH).contains(&len));
        }

        #[test]
        fn test_generated_addresses_are_valid(
            local in "[a-z0-9_+]{1,10}(\\.[a-z0-9_+]{1,10}){0,2}",
            domain in "[a-z0-9]{1,20}",
            tld in "[a-z]{2,6}",
        ) {
            let email = format!("{}@{}.{}", local, domain, tld);
            prop_assert!(is_valid_email(&email));
        }

        #[test]
        fn test_whitespace_is_never_valid(
            local in "[a-z]{1,10}",
            domain in "[a-z]{1,10}",
        ) {
            let email = format!("{} @{}.com", local, domain);
            prop_assert!(!is_valid_email(&email));
        }
    }
}
