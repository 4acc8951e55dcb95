// Persistence for brand suppliers
//
// The MySQL implementation relies on two storage-level guards:
// - UNIQUE(email) on brand_suppliers, surfaced as AppError::Conflict
// - FOREIGN KEY(brand_id) -> brands, surfaced as AppError::NotFound
// Both close the window left open by the service-level pre-checks.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, MySqlPool};

use crate::core::{AppError, Result};
use crate::modules::brand_suppliers::models::{
    BrandSummary, BrandSupplier, SupplierFields, SupplierFilters,
};

/// Storage contract consumed by the supplier service
#[async_trait]
pub trait BrandSupplierRepository: Send + Sync {
    /// Find a supplier with its brand embedded
    async fn find_by_id(&self, supplier_id: i64) -> Result<Option<BrandSupplier>>;

    /// All suppliers matching every present filter, ordered by id
    async fn find_many(&self, filters: SupplierFilters) -> Result<Vec<BrandSupplier>>;

    async fn find_by_email(&self, email: &str) -> Result<Option<BrandSupplier>>;

    async fn brand_exists(&self, brand_id: i64) -> Result<bool>;

    /// Persist a new supplier; the storage assigns its id
    async fn insert(&self, fields: &SupplierFields, now: DateTime<Utc>) -> Result<BrandSupplier>;

    /// Overwrite the writable columns of an existing supplier
    async fn update(
        &self,
        supplier_id: i64,
        fields: &SupplierFields,
        now: DateTime<Utc>,
    ) -> Result<BrandSupplier>;

    async fn delete(&self, supplier_id: i64) -> Result<()>;
}

pub fn supplier_not_found(supplier_id: i64) -> AppError {
    AppError::not_found(format!("Supplier with ID {} not found", supplier_id))
}

pub fn brand_not_found(brand_id: i64) -> AppError {
    AppError::not_found(format!("Brand with ID {} not found", brand_id))
}

pub fn email_conflict(email: &str) -> AppError {
    AppError::conflict(format!("Email '{}' is already registered", email))
}

const SELECT_SUPPLIERS: &str = r#"
    SELECT
        s.supplier_id, s.name, s.contact_person, s.email, s.phone, s.address,
        s.brand_id, s.is_active, s.created_at, s.updated_at,
        b.name AS brand_name
    FROM brand_suppliers s
    INNER JOIN brands b ON b.brand_id = s.brand_id
"#;

/// Joined supplier/brand row
#[derive(Debug, FromRow)]
struct BrandSupplierRow {
    supplier_id: i64,
    name: String,
    contact_person: Option<String>,
    email: String,
    phone: Option<String>,
    address: Option<String>,
    brand_id: i64,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    brand_name: String,
}

impl From<BrandSupplierRow> for BrandSupplier {
    fn from(row: BrandSupplierRow) -> Self {
        BrandSupplier {
            supplier_id: row.supplier_id,
            name: row.name,
            contact_person: row.contact_person,
            email: row.email,
            phone: row.phone,
            address: row.address,
            brand_id: row.brand_id,
            is_active: row.is_active,
            created_at: row.created_at,
            updated_at: row.updated_at,
            brand: BrandSummary {
                brand_id: row.brand_id,
                name: row.brand_name,
            },
        }
    }
}

/// MySQL-backed supplier repository
#[derive(Clone)]
pub struct MySqlBrandSupplierRepository {
    pool: MySqlPool,
}

impl MySqlBrandSupplierRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Translate constraint violations on write into business errors
    fn map_write_error(err: sqlx::Error, fields: &SupplierFields) -> AppError {
        if let Some(db_err) = err.as_database_error() {
            if db_err.is_unique_violation() {
                return email_conflict(&fields.email);
            }
            if db_err.is_foreign_key_violation() {
                return brand_not_found(fields.brand_id);
            }
        }
        AppError::Database(err)
    }
}

#[async_trait]
impl BrandSupplierRepository for MySqlBrandSupplierRepository {
    async fn find_by_id(&self, supplier_id: i64) -> Result<Option<BrandSupplier>> {
        let sql = format!("{} WHERE s.supplier_id = ?", SELECT_SUPPLIERS);

        let row = sqlx::query_as::<_, BrandSupplierRow>(&sql)
            .bind(supplier_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(BrandSupplier::from))
    }

    async fn find_many(&self, filters: SupplierFilters) -> Result<Vec<BrandSupplier>> {
        let sql = format!(
            "{} WHERE (? IS NULL OR s.brand_id = ?) AND (? IS NULL OR s.is_active = ?) \
             ORDER BY s.supplier_id",
            SELECT_SUPPLIERS
        );

        let rows = sqlx::query_as::<_, BrandSupplierRow>(&sql)
            .bind(filters.brand_id)
            .bind(filters.brand_id)
            .bind(filters.is_active)
            .bind(filters.is_active)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(BrandSupplier::from).collect())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<BrandSupplier>> {
        let sql = format!("{} WHERE s.email = ?", SELECT_SUPPLIERS);

        let row = sqlx::query_as::<_, BrandSupplierRow>(&sql)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(BrandSupplier::from))
    }

    async fn brand_exists(&self, brand_id: i64) -> Result<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM brands WHERE brand_id = ?")
            .bind(brand_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count > 0)
    }

    async fn insert(&self, fields: &SupplierFields, now: DateTime<Utc>) -> Result<BrandSupplier> {
        let result = sqlx::query(
            r#"
            INSERT INTO brand_suppliers (
                name, contact_person, email, phone, address,
                brand_id, is_active, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&fields.name)
        .bind(&fields.contact_person)
        .bind(&fields.email)
        .bind(&fields.phone)
        .bind(&fields.address)
        .bind(fields.brand_id)
        .bind(fields.is_active)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(|e| Self::map_write_error(e, fields))?;

        let supplier_id = i64::try_from(result.last_insert_id())
            .map_err(|_| AppError::internal("Supplier id out of range"))?;

        self.find_by_id(supplier_id)
            .await?
            .ok_or_else(|| AppError::internal(format!("Inserted supplier {} vanished", supplier_id)))
    }

    async fn update(
        &self,
        supplier_id: i64,
        fields: &SupplierFields,
        now: DateTime<Utc>,
    ) -> Result<BrandSupplier> {
        sqlx::query(
            r#"
            UPDATE brand_suppliers
            SET
                name = ?,
                contact_person = ?,
                email = ?,
                phone = ?,
                address = ?,
                brand_id = ?,
                is_active = ?,
                updated_at = ?
            WHERE supplier_id = ?
            "#,
        )
        .bind(&fields.name)
        .bind(&fields.contact_person)
        .bind(&fields.email)
        .bind(&fields.phone)
        .bind(&fields.address)
        .bind(fields.brand_id)
        .bind(fields.is_active)
        .bind(now)
        .bind(supplier_id)
        .execute(&self.pool)
        .await
        .map_err(|e| Self::map_write_error(e, fields))?;

        // Affected-row counts skip rows whose values did not change, so the
        // re-read is what decides whether the supplier still exists.
        self.find_by_id(supplier_id)
            .await?
            .ok_or_else(|| supplier_not_found(supplier_id))
    }

    async fn delete(&self, supplier_id: i64) -> Result<()> {
        let rows_affected = sqlx::query("DELETE FROM brand_suppliers WHERE supplier_id = ?")
            .bind(supplier_id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        if rows_affected == 0 {
            return Err(supplier_not_found(supplier_id));
        }

        Ok(())
    }
}
