pub mod brand_supplier_controller;

pub use brand_supplier_controller::configure;
