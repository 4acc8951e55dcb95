mod brand_supplier;
mod filters;
mod requests;
pub mod validation;

pub use brand_supplier::{BrandSummary, BrandSupplier, SupplierChanges, SupplierFields};
pub use filters::SupplierFilters;
pub use requests::{CreateBrandSupplierRequest, UpdateBrandSupplierRequest};
