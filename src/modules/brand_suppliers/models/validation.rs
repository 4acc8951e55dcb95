// Field rules for supplier payloads
//
// These run at the transport boundary, before a request reaches the service.
// Lengths are counted in characters, not bytes.

use crate::core::{AppError, Result};

pub const MAX_NAME_LENGTH: usize = 100;
pub const MAX_CONTACT_PERSON_LENGTH: usize = 100;
pub const MAX_EMAIL_LENGTH: usize = 100;
pub const PHONE_LENGTH: usize = 10;

pub fn validate_name(name: &str) -> Result<()> {
    let len = name.chars().count();
    if len == 0 {
        return Err(AppError::validation("name must not be empty"));
    }
    if len > MAX_NAME_LENGTH {
        return Err(AppError::validation(format!(
            "name must be at most {} characters",
            MAX_NAME_LENGTH
        )));
    }
    Ok(())
}

pub fn validate_contact_person(contact_person: &str) -> Result<()> {
    let len = contact_person.chars().count();
    if len == 0 || len > MAX_CONTACT_PERSON_LENGTH {
        return Err(AppError::validation(format!(
            "contactPerson must be between 1 and {} characters",
            MAX_CONTACT_PERSON_LENGTH
        )));
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<()> {
    if email.is_empty() {
        return Err(AppError::validation("email must not be empty"));
    }
    if email.chars().count() > MAX_EMAIL_LENGTH {
        return Err(AppError::validation(format!(
            "email must be at most {} characters",
            MAX_EMAIL_LENGTH
        )));
    }
    if !is_valid_email(email) {
        return Err(AppError::validation("email must be a valid email address"));
    }
    Ok(())
}

pub fn validate_phone(phone: &str) -> Result<()> {
    if phone.chars().count() != PHONE_LENGTH {
        return Err(AppError::validation(format!(
            "phone must be exactly {} characters",
            PHONE_LENGTH
        )));
    }
    Ok(())
}

pub const MAX_EMAIL_LOCAL_LENGTH: usize = 64;

/// Characters allowed in an unquoted local part besides ASCII alphanumerics
const LOCAL_PART_SYMBOLS: &str = "!#$%&'*+-/=?^_`{|}~";

/// Structural email check: `local@domain.tld` with one `@`.
///
/// The local part is a dot-separated run of atext characters (no leading,
/// trailing or doubled dots, at most 64 characters); the domain is at least
/// two non-empty labels of alphanumerics and inner hyphens.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    is_valid_local_part(local) && is_valid_domain(domain)
}

fn is_valid_local_part(local: &str) -> bool {
    if local.is_empty() || local.chars().count() > MAX_EMAIL_LOCAL_LENGTH {
        return false;
    }

    local.split('.').all(|atom| {
        !atom.is_empty()
            && atom
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || LOCAL_PART_SYMBOLS.contains(c))
    })
}

fn is_valid_domain(domain: &str) -> bool {
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }

    labels.iter().all(|label| {
        !label.is_empty()
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_alphanumeric() || c == '-')
    })
}
