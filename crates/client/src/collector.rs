//! Backend resources and the collector seam.

use std::fmt;

use async_trait::async_trait;
use ledgerdesk_shared::config::TenantConfig;
use ledgerdesk_shared::types::BusinessCategoryId;
use serde_json::Value;

use crate::error::ClientError;

/// A list resource on the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    /// Sales invoices with their payments.
    Sales,
    /// Purchase invoices with their payments.
    Purchases,
    /// General expenses.
    Expenses,
    /// Salary expenses.
    SalaryExpenses,
    /// Stock items.
    Stocks,
    /// Customers.
    Customers,
    /// Vendors.
    Vendors,
}

impl Resource {
    /// Path relative to the API base URL.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Sales => "sales/",
            Self::Purchases => "purchases/",
            Self::Expenses => "expenses/",
            Self::SalaryExpenses => "salary-expenses/",
            Self::Stocks => "stocks/",
            Self::Customers => "customers/",
            Self::Vendors => "vendors/",
        }
    }

    /// Name used in logs and errors.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sales => "sales",
            Self::Purchases => "purchases",
            Self::Expenses => "expenses",
            Self::SalaryExpenses => "salary_expenses",
            Self::Stocks => "stocks",
            Self::Customers => "customers",
            Self::Vendors => "vendors",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Tenant selection passed with every request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TenantContext {
    /// Selected business category.
    pub business_category_id: Option<BusinessCategoryId>,
}

impl TenantContext {
    /// Context for one business category.
    #[must_use]
    pub fn for_category(id: BusinessCategoryId) -> Self {
        Self {
            business_category_id: Some(id),
        }
    }

    /// Query parameters to append to a list request.
    #[must_use]
    pub fn query(&self) -> Vec<(&'static str, String)> {
        self.business_category_id
            .map(|id| ("business_category", id.to_string()))
            .into_iter()
            .collect()
    }
}

impl From<&TenantConfig> for TenantContext {
    fn from(config: &TenantConfig) -> Self {
        Self {
            business_category_id: config.business_category_id.map(BusinessCategoryId::new),
        }
    }
}

/// Fetches raw list responses from the backend.
#[async_trait]
pub trait Collector: Send + Sync {
    /// Fetches one list resource for the tenant.
    ///
    /// The response may be a bare array or a paginated envelope.
    async fn fetch(&self, resource: Resource, ctx: &TenantContext) -> Result<Value, ClientError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_paths() {
        assert_eq!(Resource::SalaryExpenses.path(), "salary-expenses/");
        assert_eq!(Resource::SalaryExpenses.to_string(), "salary_expenses");
        assert_eq!(Resource::Vendors.path(), "vendors/");
    }

    #[test]
    fn test_tenant_query() {
        assert!(TenantContext::default().query().is_empty());
        let ctx = TenantContext::for_category(BusinessCategoryId::new(3));
        assert_eq!(ctx.query(), vec![("business_category", "3".to_string())]);

        let config = TenantConfig {
            business_category_id: Some(8),
        };
        assert_eq!(
            TenantContext::from(&config).business_category_id,
            Some(BusinessCategoryId::new(8))
        );
    }
}
