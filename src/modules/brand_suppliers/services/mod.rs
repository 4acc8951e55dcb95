pub mod brand_supplier_service;

pub use brand_supplier_service::BrandSupplierService;
