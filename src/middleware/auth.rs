// Acting-user extraction
//
// Authentication happens upstream (gateway or auth proxy). It forwards the
// resolved identity in `X-User-Id` and, optionally, `X-User-Role`. Handlers
// that mutate state take an `ActingUser` argument, which rejects requests
// without an identity.

use actix_web::{dev::Payload, http::header::HeaderMap, FromRequest, HttpRequest};
use std::future::{ready, Ready};

use crate::core::{ActingUser, AppError, UserRole};

pub const USER_ID_HEADER: &str = "X-User-Id";
pub const USER_ROLE_HEADER: &str = "X-User-Role";

/// Resolve the acting user from forwarded identity headers
pub fn acting_user_from_headers(headers: &HeaderMap) -> crate::core::Result<ActingUser> {
    let user_id = headers
        .get(USER_ID_HEADER)
        .and_then(|h| h.to_str().ok())
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| AppError::unauthorized(format!("Missing {} header", USER_ID_HEADER)))?;

    let role = match headers.get(USER_ROLE_HEADER) {
        None => UserRole::default(),
        Some(value) => value
            .to_str()
            .map_err(|_| AppError::unauthorized(format!("Invalid {} header", USER_ROLE_HEADER)))?
            .parse::<UserRole>()
            .map_err(AppError::unauthorized)?,
    };

    Ok(ActingUser::new(user_id, role))
}

impl FromRequest for ActingUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(acting_user_from_headers(req.headers()))
    }
}
