pub mod brand_suppliers;
pub mod health;
