// Business rules for brand suppliers
//
// - Email is unique across all suppliers (pre-checked here, enforced by storage)
// - brandId must reference an existing brand
// - PUT replaces every writable field, PATCH only the fields present
// - A PATCH that changes nothing performs no write and keeps updatedAt
//
// Failures propagate unchanged; logging happens at the transport boundary.

use std::sync::Arc;

use chrono::Utc;

use crate::core::{ActingUser, Result};
use crate::modules::brand_suppliers::models::{
    BrandSupplier, CreateBrandSupplierRequest, SupplierChanges, SupplierFilters,
    UpdateBrandSupplierRequest,
};
use crate::modules::brand_suppliers::repositories::{
    brand_not_found, email_conflict, supplier_not_found, BrandSupplierRepository,
};

/// How a set of changes is written back
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WriteMode {
    /// Full replacement, always persisted
    Replace,
    /// Partial update, skipped when nothing changes
    Partial,
}

/// Service for brand supplier business logic
pub struct BrandSupplierService {
    repository: Arc<dyn BrandSupplierRepository>,
}

impl BrandSupplierService {
    pub fn new(repository: Arc<dyn BrandSupplierRepository>) -> Self {
        Self { repository }
    }

    /// List suppliers matching the given filters
    pub async fn find_all(&self, filters: SupplierFilters) -> Result<Vec<BrandSupplier>> {
        self.repository.find_many(filters).await
    }

    /// Get a supplier by ID
    pub async fn find_one(&self, supplier_id: i64) -> Result<BrandSupplier> {
        self.repository
            .find_by_id(supplier_id)
            .await?
            .ok_or_else(|| supplier_not_found(supplier_id))
    }

    /// Create a supplier
    pub async fn create(
        &self,
        request: CreateBrandSupplierRequest,
        _acting_user: &ActingUser,
    ) -> Result<BrandSupplier> {
        let fields = request.into_fields();

        self.ensure_email_available(&fields.email, None).await?;
        self.ensure_brand_exists(fields.brand_id).await?;

        self.repository.insert(&fields, Utc::now()).await
    }

    /// Replace every writable field of a supplier
    ///
    /// Optional fields missing from `request` are cleared.
    pub async fn replace(
        &self,
        supplier_id: i64,
        request: CreateBrandSupplierRequest,
        _acting_user: &ActingUser,
    ) -> Result<BrandSupplier> {
        self.apply_changes(supplier_id, SupplierChanges::from(request), WriteMode::Replace)
            .await
    }

    /// Update only the fields present in `request`
    pub async fn update(
        &self,
        supplier_id: i64,
        request: UpdateBrandSupplierRequest,
        _acting_user: &ActingUser,
    ) -> Result<BrandSupplier> {
        self.apply_changes(supplier_id, SupplierChanges::from(request), WriteMode::Partial)
            .await
    }

    /// Permanently delete a supplier
    pub async fn remove(&self, supplier_id: i64, _acting_user: &ActingUser) -> Result<()> {
        // Resolve first so a missing supplier is reported the same way as on reads
        self.find_one(supplier_id).await?;
        self.repository.delete(supplier_id).await
    }

    async fn apply_changes(
        &self,
        supplier_id: i64,
        changes: SupplierChanges,
        mode: WriteMode,
    ) -> Result<BrandSupplier> {
        let current = self.find_one(supplier_id).await?;

        if mode == WriteMode::Partial && changes.is_empty() {
            return Ok(current);
        }

        if let Some(email) = &changes.email {
            self.ensure_email_available(email, Some(supplier_id)).await?;
        }
        if let Some(brand_id) = changes.brand_id {
            self.ensure_brand_exists(brand_id).await?;
        }

        let stored = current.fields();
        let merged = changes.apply_to(&stored);

        if mode == WriteMode::Partial && merged == stored {
            return Ok(current);
        }

        self.repository
            .update(supplier_id, &merged, Utc::now())
            .await
    }

    /// Fails with a conflict when `email` belongs to a supplier other than `owner`
    async fn ensure_email_available(&self, email: &str, owner: Option<i64>) -> Result<()> {
        match self.repository.find_by_email(email).await? {
            Some(existing) if Some(existing.supplier_id) != owner => Err(email_conflict(email)),
            _ => Ok(()),
        }
    }

    async fn ensure_brand_exists(&self, brand_id: i64) -> Result<()> {
        if !self.repository.brand_exists(brand_id).await? {
            return Err(brand_not_found(brand_id));
        }
        Ok(())
    }
}
