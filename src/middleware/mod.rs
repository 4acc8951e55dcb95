pub mod auth;
pub mod error_handler;
pub mod request_id;

pub use auth::{acting_user_from_headers, USER_ID_HEADER, USER_ROLE_HEADER};
pub use error_handler::{configure_extractors, log_error, ErrorHandler};
pub use request_id::RequestId;
