pub mod brand_supplier_repository;

pub use brand_supplier_repository::{
    brand_not_found, email_conflict, supplier_not_found, BrandSupplierRepository,
    MySqlBrandSupplierRepository,
};
