use crate::core::{AppError, Result};

/// Equality filters for listing suppliers; absent filters match everything
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SupplierFilters {
    pub brand_id: Option<i64>,
    pub is_active: Option<bool>,
}

impl SupplierFilters {
    /// Parse raw query-string values
    ///
    /// `brandId` must be a base-10 integer and `isActive` exactly `true` or
    /// `false`; anything else is a validation error.
    pub fn parse(brand_id: Option<&str>, is_active: Option<&str>) -> Result<Self> {
        let brand_id = brand_id
            .map(|raw| {
                raw.trim().parse::<i64>().map_err(|_| {
                    AppError::validation("The \"brandId\" parameter must be a valid number.")
                })
            })
            .transpose()?;

        let is_active = is_active
            .map(|raw| match raw {
                "true" => Ok(true),
                "false" => Ok(false),
                _ => Err(AppError::validation(
                    "The \"isActive\" parameter must be \"true\" or \"false\".",
                )),
            })
            .transpose()?;

        Ok(Self {
            brand_id,
            is_active,
        })
    }
}
