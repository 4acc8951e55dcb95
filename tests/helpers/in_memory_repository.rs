// In-memory brand supplier storage
//
// Enforces the same guards as the MySQL tables: ids are never reused, email
// is unique, and writes referencing an unknown brand are rejected. Email
// comparison only ignores ASCII case; it does not fold accents the way the
// utf8mb4_unicode_ci collation does.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use brand_suppliers::core::Result;
use brand_suppliers::modules::brand_suppliers::repositories::{
    brand_not_found, email_conflict, supplier_not_found,
};
use brand_suppliers::modules::brand_suppliers::{
    BrandSummary, BrandSupplier, BrandSupplierRepository, BrandSupplierService, SupplierFields,
    SupplierFilters,
};

#[derive(Default)]
struct State {
    brands: BTreeMap<i64, String>,
    suppliers: BTreeMap<i64, BrandSupplier>,
    last_id: i64,
    writes: usize,
    lookups: usize,
}

#[derive(Default)]
pub struct InMemoryBrandSupplierRepository {
    state: Mutex<State>,
}

impl InMemoryBrandSupplierRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository seeded with the given `(brand_id, name)` pairs
    pub fn with_brands(brands: &[(i64, &str)]) -> Self {
        let repository = Self::new();
        for (brand_id, name) in brands {
            repository.add_brand(*brand_id, name);
        }
        repository
    }

    pub fn add_brand(&self, brand_id: i64, name: &str) {
        self.lock().brands.insert(brand_id, name.to_string());
    }

    /// Number of successful insert/update calls
    pub fn write_count(&self) -> usize {
        self.lock().writes
    }

    /// Number of email and brand lookups
    pub fn lookup_count(&self) -> usize {
        self.lock().lookups
    }

    pub fn len(&self) -> usize {
        self.lock().suppliers.len()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap()
    }
}

impl State {
    fn email_taken(&self, email: &str, except: Option<i64>) -> bool {
        self.suppliers.values().any(|s| {
            Some(s.supplier_id) != except && s.email.eq_ignore_ascii_case(email)
        })
    }

    fn brand(&self, brand_id: i64) -> Result<BrandSummary> {
        self.brands
            .get(&brand_id)
            .map(|name| BrandSummary {
                brand_id,
                name: name.clone(),
            })
            .ok_or_else(|| brand_not_found(brand_id))
    }
}

/// Same predicate as the `WHERE (? IS NULL OR ...)` clauses of the MySQL query
fn matches_filters(filters: &SupplierFilters, supplier: &BrandSupplier) -> bool {
    filters.brand_id.map_or(true, |id| supplier.brand_id == id)
        && filters.is_active.map_or(true, |active| supplier.is_active == active)
}

#[async_trait]
impl BrandSupplierRepository for InMemoryBrandSupplierRepository {
    async fn find_by_id(&self, supplier_id: i64) -> Result<Option<BrandSupplier>> {
        Ok(self.lock().suppliers.get(&supplier_id).cloned())
    }

    async fn find_many(&self, filters: SupplierFilters) -> Result<Vec<BrandSupplier>> {
        Ok(self
            .lock()
            .suppliers
            .values()
            .filter(|s| matches_filters(&filters, s))
            .cloned()
            .collect())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<BrandSupplier>> {
        let mut state = self.lock();
        state.lookups += 1;
        Ok(state
            .suppliers
            .values()
            .find(|s| s.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn brand_exists(&self, brand_id: i64) -> Result<bool> {
        let mut state = self.lock();
        state.lookups += 1;
        Ok(state.brands.contains_key(&brand_id))
    }

    async fn insert(&self, fields: &SupplierFields, now: DateTime<Utc>) -> Result<BrandSupplier> {
        let mut state = self.lock();
        if state.email_taken(&fields.email, None) {
            return Err(email_conflict(&fields.email));
        }
        let brand = state.brand(fields.brand_id)?;

        state.last_id += 1;
        let supplier = BrandSupplier {
            supplier_id: state.last_id,
            name: fields.name.clone(),
            contact_person: fields.contact_person.clone(),
            email: fields.email.clone(),
            phone: fields.phone.clone(),
            address: fields.address.clone(),
            brand_id: fields.brand_id,
            is_active: fields.is_active,
            created_at: now,
            updated_at: now,
            brand,
        };
        state.suppliers.insert(supplier.supplier_id, supplier.clone());
        state.writes += 1;

        Ok(supplier)
    }

    async fn update(
        &self,
        supplier_id: i64,
        fields: &SupplierFields,
        now: DateTime<Utc>,
    ) -> Result<BrandSupplier> {
        let mut state = self.lock();
        if !state.suppliers.contains_key(&supplier_id) {
            return Err(supplier_not_found(supplier_id));
        }
        if state.email_taken(&fields.email, Some(supplier_id)) {
            return Err(email_conflict(&fields.email));
        }
        let brand = state.brand(fields.brand_id)?;

        let supplier = state
            .suppliers
            .get_mut(&supplier_id)
            .ok_or_else(|| supplier_not_found(supplier_id))?;
        supplier.name = fields.name.clone();
        supplier.contact_person = fields.contact_person.clone();
        supplier.email = fields.email.clone();
        supplier.phone = fields.phone.clone();
        supplier.address = fields.address.clone();
        supplier.brand_id = fields.brand_id;
        supplier.is_active = fields.is_active;
        supplier.updated_at = now;
        supplier.brand = brand;
        let updated = supplier.clone();
        state.writes += 1;

        Ok(updated)
    }

    async fn delete(&self, supplier_id: i64) -> Result<()> {
        self.lock()
            .suppliers
            .remove(&supplier_id)
            .map(|_| ())
            .ok_or_else(|| supplier_not_found(supplier_id))
    }
}

/// Service over a fresh repository seeded with brands 1 ("Acme") and 2 ("Globex")
pub fn seeded_service() -> (Arc<InMemoryBrandSupplierRepository>, BrandSupplierService) {
    let repository = Arc::new(InMemoryBrandSupplierRepository::with_brands(&[
        (1, "Acme"),
        (2, "Globex"),
    ]));
    let service = BrandSupplierService::new(repository.clone());
    (repository, service)
}
