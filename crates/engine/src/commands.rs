//! Command structs for engine operations.
//!
//! These types group parameters for write operations, keeping call sites
//! readable and avoiding long argument lists.

use uuid::Uuid;

use crate::{ItemKind, MoneyCents, NewItem, People};

/// Compute (and store) a calculation for a tenant.
#[derive(Clone, Debug)]
pub struct CalculateCmd {
    pub tenant_id: String,
    pub user_id: Option<String>,
    pub people: People,
    pub duration_hours: f64,
    /// Ids from the tenant catalog; the order is kept in the result.
    pub item_ids: Vec<Uuid>,
}

impl CalculateCmd {
    #[must_use]
    pub fn new(tenant_id: impl Into<String>, people: People) -> Self {
        Self {
            tenant_id: tenant_id.into(),
            user_id: None,
            people,
            duration_hours: 0.0,
            item_ids: Vec::new(),
        }
    }

    #[must_use]
    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// Event duration; negative or non-finite values are read as 0.
    #[must_use]
    pub fn duration_hours(mut self, hours: f64) -> Self {
        self.duration_hours = if hours.is_finite() && hours > 0.0 {
            hours
        } else {
            0.0
        };
        self
    }

    #[must_use]
    pub fn item(mut self, item_id: Uuid) -> Self {
        self.item_ids.push(item_id);
        self
    }

    #[must_use]
    pub fn items(mut self, item_ids: impl IntoIterator<Item = Uuid>) -> Self {
        self.item_ids.extend(item_ids);
        self
    }
}

/// Add an item to a tenant catalog.
#[derive(Clone, Debug)]
pub struct CreateItemCmd {
    pub tenant_id: String,
    pub item: NewItem,
}

impl CreateItemCmd {
    #[must_use]
    pub fn new(tenant_id: impl Into<String>, name: impl Into<String>, kind: ItemKind) -> Self {
        Self {
            tenant_id: tenant_id.into(),
            item: NewItem {
                name: name.into(),
                kind,
                unit_price: MoneyCents::ZERO,
                per_adult_rate: 0.0,
                package_size: 1.0,
            },
        }
    }

    #[must_use]
    pub fn unit_price(mut self, price: MoneyCents) -> Self {
        self.item.unit_price = price;
        self
    }

    #[must_use]
    pub fn per_adult_rate(mut self, rate: f64) -> Self {
        self.item.per_adult_rate = rate;
        self
    }

    #[must_use]
    pub fn package_size(mut self, size: f64) -> Self {
        self.item.package_size = size;
        self
    }
}
