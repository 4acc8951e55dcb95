use std::sync::Arc;

use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::core::{ActingUser, Result};
use crate::modules::brand_suppliers::models::{
    CreateBrandSupplierRequest, SupplierFilters, UpdateBrandSupplierRequest,
};
use crate::modules::brand_suppliers::services::BrandSupplierService;

/// Raw query parameters for listing suppliers
///
/// Kept as strings so malformed values produce a precise validation message.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListBrandSuppliersQuery {
    pub brand_id: Option<String>,
    pub is_active: Option<String>,
}

impl ListBrandSuppliersQuery {
    pub fn to_filters(&self) -> Result<SupplierFilters> {
        SupplierFilters::parse(self.brand_id.as_deref(), self.is_active.as_deref())
    }
}

/// List suppliers, optionally filtered by brand and status
/// GET /brand-suppliers?brandId=&isActive=
pub async fn list_suppliers(
    service: web::Data<Arc<BrandSupplierService>>,
    _acting_user: ActingUser,
    query: web::Query<ListBrandSuppliersQuery>,
) -> Result<HttpResponse> {
    let filters = query.to_filters()?;
    let suppliers = service.find_all(filters).await?;

    Ok(HttpResponse::Ok().json(suppliers))
}

/// Get supplier by ID
/// GET /brand-suppliers/{id}
pub async fn get_supplier(
    service: web::Data<Arc<BrandSupplierService>>,
    _acting_user: ActingUser,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    let supplier = service.find_one(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(supplier))
}

/// Create a supplier
/// POST /brand-suppliers
pub async fn create_supplier(
    service: web::Data<Arc<BrandSupplierService>>,
    acting_user: ActingUser,
    request: web::Json<CreateBrandSupplierRequest>,
) -> Result<HttpResponse> {
    let request = request.into_inner();
    request.validate()?;

    let supplier = service.create(request, &acting_user).await?;

    tracing::info!(
        supplier_id = supplier.supplier_id,
        brand_id = supplier.brand_id,
        user_id = %acting_user.user_id,
        "Brand supplier created"
    );

    Ok(HttpResponse::Created().json(supplier))
}

/// Replace every writable field of a supplier
/// PUT /brand-suppliers/{id}
pub async fn replace_supplier(
    service: web::Data<Arc<BrandSupplierService>>,
    acting_user: ActingUser,
    path: web::Path<i64>,
    request: web::Json<CreateBrandSupplierRequest>,
) -> Result<HttpResponse> {
    let supplier_id = path.into_inner();
    let request = request.into_inner();
    request.validate()?;

    let supplier = service.replace(supplier_id, request, &acting_user).await?;

    tracing::info!(
        supplier_id,
        user_id = %acting_user.user_id,
        "Brand supplier replaced"
    );

    Ok(HttpResponse::Ok().json(supplier))
}

/// Update the fields present in the body
/// PATCH /brand-suppliers/{id}
pub async fn update_supplier(
    service: web::Data<Arc<BrandSupplierService>>,
    acting_user: ActingUser,
    path: web::Path<i64>,
    request: web::Json<UpdateBrandSupplierRequest>,
) -> Result<HttpResponse> {
    let supplier_id = path.into_inner();
    let request = request.into_inner();
    request.validate()?;

    let supplier = service.update(supplier_id, request, &acting_user).await?;

    tracing::info!(
        supplier_id,
        user_id = %acting_user.user_id,
        "Brand supplier updated"
    );

    Ok(HttpResponse::Ok().json(supplier))
}

/// Permanently delete a supplier
/// DELETE /brand-suppliers/{id}
pub async fn remove_supplier(
    service: web::Data<Arc<BrandSupplierService>>,
    acting_user: ActingUser,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    let supplier_id = path.into_inner();

    service.remove(supplier_id, &acting_user).await?;

    tracing::info!(
        supplier_id,
        user_id = %acting_user.user_id,
        "Brand supplier deleted"
    );

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": format!("Supplier with ID {} deleted successfully", supplier_id),
    })))
}

/// Configure brand supplier routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/brand-suppliers")
            .route("", web::get().to(list_suppliers))
            .route("", web::post().to(create_supplier))
            .route("/{id}", web::get().to(get_supplier))
            .route("/{id}", web::put().to(replace_supplier))
            .route("/{id}", web::patch().to(update_supplier))
            .route("/{id}", web::delete().to(remove_supplier)),
    );
}
