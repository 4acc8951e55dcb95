// Brand suppliers module

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use controllers::configure;
pub use models::{
    BrandSummary, BrandSupplier, CreateBrandSupplierRequest, SupplierChanges, SupplierFields,
    SupplierFilters, UpdateBrandSupplierRequest,
};
pub use repositories::{BrandSupplierRepository, MySqlBrandSupplierRepository};
pub use services::BrandSupplierService;
