use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use primekit_core::layers::{IncomeLayer, SpendingAllocation};

use crate::utils::{format_timestamp, parse_decimal, parse_timestamp};

#[derive(
    Queryable, Identifiable, Insertable, AsChangeset, Selectable, PartialEq, Serialize,
    Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::income_layers)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct IncomeLayerDB {
    pub id: String,
    pub user_id: String,
    pub layer: String,
    pub description: String,
    pub start_age: Option<i32>,
    pub end_age: Option<i32>,
    pub annual_amount: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<IncomeLayerDB> for IncomeLayer {
    fn from(db: IncomeLayerDB) -> Self {
        Self {
            annual_amount: parse_decimal(&db.annual_amount, "income_layers.annual_amount"),
            created_at: parse_timestamp(&db.created_at, "income_layers.created_at"),
            updated_at: parse_timestamp(&db.updated_at, "income_layers.updated_at"),
            id: db.id,
            user_id: db.user_id,
            layer: db.layer,
            description: db.description,
            start_age: db.start_age,
            end_age: db.end_age,
        }
    }
}

impl From<&IncomeLayer> for IncomeLayerDB {
    fn from(domain: &IncomeLayer) -> Self {
        Self {
            id: domain.id.clone(),
            user_id: domain.user_id.clone(),
            layer: domain.layer.clone(),
            description: domain.description.clone(),
            start_age: domain.start_age,
            end_age: domain.end_age,
            annual_amount: domain.annual_amount.to_string(),
            created_at: format_timestamp(&domain.created_at),
            updated_at: format_timestamp(&domain.updated_at),
        }
    }
}

#[derive(
    Queryable, Identifiable, Insertable, AsChangeset, Selectable, PartialEq, Serialize,
    Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::spending_allocations)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct SpendingAllocationDB {
    pub id: String,
    pub user_id: String,
    pub phase: String,
    pub cost_base: String,
    pub cost_life: String,
    pub cost_save: String,
    pub cost_health: String,
    pub cost_other: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<SpendingAllocationDB> for SpendingAllocation {
    // total is derived by the service on read, not stored.
    fn from(db: SpendingAllocationDB) -> Self {
        Self {
            cost_base: parse_decimal(&db.cost_base, "spending_allocations.cost_base"),
            cost_life: parse_decimal(&db.cost_life, "spending_allocations.cost_life"),
            cost_save: parse_decimal(&db.cost_save, "spending_allocations.cost_save"),
            cost_health: parse_decimal(&db.cost_health, "spending_allocations.cost_health"),
            cost_other: parse_decimal(&db.cost_other, "spending_allocations.cost_other"),
            created_at: parse_timestamp(&db.created_at, "spending_allocations.created_at"),
            updated_at: parse_timestamp(&db.updated_at, "spending_allocations.updated_at"),
            id: db.id,
            user_id: db.user_id,
            phase: db.phase,
            total: rust_decimal::Decimal::ZERO,
        }
    }
}

impl From<&SpendingAllocation> for SpendingAllocationDB {
    fn from(domain: &SpendingAllocation) -> Self {
        Self {
            id: domain.id.clone(),
            user_id: domain.user_id.clone(),
            phase: domain.phase.clone(),
            cost_base: domain.cost_base.to_string(),
            cost_life: domain.cost_life.to_string(),
            cost_save: domain.cost_save.to_string(),
            cost_health: domain.cost_health.to_string(),
            cost_other: domain.cost_other.to_string(),
            created_at: format_timestamp(&domain.created_at),
            updated_at: format_timestamp(&domain.updated_at),
        }
    }
}
