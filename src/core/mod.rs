pub mod context;
pub mod error;

pub use context::{ActingUser, UserRole};
pub use error::{AppError, Result};
