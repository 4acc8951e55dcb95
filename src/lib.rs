//! Brand Supplier Service Library
//!
//! This library provides supplier management for product brands: listing,
//! lookup, creation, full and partial updates, and deletion.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use modules::brand_suppliers;
pub use modules::health;
