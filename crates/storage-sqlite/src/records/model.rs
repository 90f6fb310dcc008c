//! Database models for the six calculator record tables.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use primekit_core::records::{
    AssetRow, EpicRow, ExpenseRow, IncomeRow, LiabilityRow, SubscriptionRow,
};

use crate::utils::{format_timestamp, parse_decimal, parse_timestamp};

#[derive(
    Queryable, Identifiable, Insertable, AsChangeset, Selectable, PartialEq, Serialize,
    Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::assets)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct AssetDB {
    pub id: String,
    pub user_id: String,
    pub category: String,
    pub description: String,
    pub amount: String,
    pub owner: String,
    pub include: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<AssetDB> for AssetRow {
    fn from(db: AssetDB) -> Self {
        Self {
            amount: parse_decimal(&db.amount, "assets.amount"),
            created_at: parse_timestamp(&db.created_at, "assets.created_at"),
            updated_at: parse_timestamp(&db.updated_at, "assets.updated_at"),
            id: db.id,
            user_id: db.user_id,
            category: db.category,
            description: db.description,
            owner: db.owner,
            include: db.include,
        }
    }
}

impl From<&AssetRow> for AssetDB {
    fn from(domain: &AssetRow) -> Self {
        Self {
            id: domain.id.clone(),
            user_id: domain.user_id.clone(),
            category: domain.category.clone(),
            description: domain.description.clone(),
            amount: domain.amount.to_string(),
            owner: domain.owner.clone(),
            include: domain.include,
            created_at: format_timestamp(&domain.created_at),
            updated_at: format_timestamp(&domain.updated_at),
        }
    }
}

#[derive(
    Queryable, Identifiable, Insertable, AsChangeset, Selectable, PartialEq, Serialize,
    Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::liabilities)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct LiabilityDB {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub amount: String,
    pub kind: String,
    pub monthly_payment: String,
    pub notes: String,
    pub include: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<LiabilityDB> for LiabilityRow {
    fn from(db: LiabilityDB) -> Self {
        Self {
            amount: parse_decimal(&db.amount, "liabilities.amount"),
            monthly_payment: parse_decimal(&db.monthly_payment, "liabilities.monthly_payment"),
            created_at: parse_timestamp(&db.created_at, "liabilities.created_at"),
            updated_at: parse_timestamp(&db.updated_at, "liabilities.updated_at"),
            id: db.id,
            user_id: db.user_id,
            name: db.name,
            kind: db.kind,
            notes: db.notes,
            include: db.include,
        }
    }
}

impl From<&LiabilityRow> for LiabilityDB {
    fn from(domain: &LiabilityRow) -> Self {
        Self {
            id: domain.id.clone(),
            user_id: domain.user_id.clone(),
            name: domain.name.clone(),
            amount: domain.amount.to_string(),
            kind: domain.kind.clone(),
            monthly_payment: domain.monthly_payment.to_string(),
            notes: domain.notes.clone(),
            include: domain.include,
            created_at: format_timestamp(&domain.created_at),
            updated_at: format_timestamp(&domain.updated_at),
        }
    }
}

#[derive(
    Queryable, Identifiable, Insertable, AsChangeset, Selectable, PartialEq, Serialize,
    Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::income_sources)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct IncomeSourceDB {
    pub id: String,
    pub user_id: String,
    pub source: String,
    pub amount: String,
    pub frequency: String,
    pub notes: String,
    pub include: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<IncomeSourceDB> for IncomeRow {
    fn from(db: IncomeSourceDB) -> Self {
        Self {
            amount: parse_decimal(&db.amount, "income_sources.amount"),
            created_at: parse_timestamp(&db.created_at, "income_sources.created_at"),
            updated_at: parse_timestamp(&db.updated_at, "income_sources.updated_at"),
            id: db.id,
            user_id: db.user_id,
            source: db.source,
            frequency: db.frequency,
            notes: db.notes,
            include: db.include,
        }
    }
}

impl From<&IncomeRow> for IncomeSourceDB {
    fn from(domain: &IncomeRow) -> Self {
        Self {
            id: domain.id.clone(),
            user_id: domain.user_id.clone(),
            source: domain.source.clone(),
            amount: domain.amount.to_string(),
            frequency: domain.frequency.clone(),
            notes: domain.notes.clone(),
            include: domain.include,
            created_at: format_timestamp(&domain.created_at),
            updated_at: format_timestamp(&domain.updated_at),
        }
    }
}

#[derive(
    Queryable, Identifiable, Insertable, AsChangeset, Selectable, PartialEq, Serialize,
    Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::expense_items)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct ExpenseItemDB {
    pub id: String,
    pub user_id: String,
    pub category: String,
    pub item: String,
    pub amount: String,
    pub frequency: String,
    pub kind: String,
    pub include: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<ExpenseItemDB> for ExpenseRow {
    fn from(db: ExpenseItemDB) -> Self {
        Self {
            amount: parse_decimal(&db.amount, "expense_items.amount"),
            created_at: parse_timestamp(&db.created_at, "expense_items.created_at"),
            updated_at: parse_timestamp(&db.updated_at, "expense_items.updated_at"),
            id: db.id,
            user_id: db.user_id,
            category: db.category,
            item: db.item,
            frequency: db.frequency,
            kind: db.kind,
            include: db.include,
        }
    }
}

impl From<&ExpenseRow> for ExpenseItemDB {
    fn from(domain: &ExpenseRow) -> Self {
        Self {
            id: domain.id.clone(),
            user_id: domain.user_id.clone(),
            category: domain.category.clone(),
            item: domain.item.clone(),
            amount: domain.amount.to_string(),
            frequency: domain.frequency.clone(),
            kind: domain.kind.clone(),
            include: domain.include,
            created_at: format_timestamp(&domain.created_at),
            updated_at: format_timestamp(&domain.updated_at),
        }
    }
}

#[derive(
    Queryable, Identifiable, Insertable, AsChangeset, Selectable, PartialEq, Serialize,
    Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::subscriptions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionDB {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub provider: String,
    pub amount: String,
    pub frequency: String,
    pub notes: String,
    pub include: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<SubscriptionDB> for SubscriptionRow {
    // annual_amount is derived by the service on read, not stored.
    fn from(db: SubscriptionDB) -> Self {
        Self {
            amount: parse_decimal(&db.amount, "subscriptions.amount"),
            created_at: parse_timestamp(&db.created_at, "subscriptions.created_at"),
            updated_at: parse_timestamp(&db.updated_at, "subscriptions.updated_at"),
            id: db.id,
            user_id: db.user_id,
            name: db.name,
            provider: db.provider,
            frequency: db.frequency,
            notes: db.notes,
            include: db.include,
            annual_amount: rust_decimal::Decimal::ZERO,
        }
    }
}

impl From<&SubscriptionRow> for SubscriptionDB {
    fn from(domain: &SubscriptionRow) -> Self {
        Self {
            id: domain.id.clone(),
            user_id: domain.user_id.clone(),
            name: domain.name.clone(),
            provider: domain.provider.clone(),
            amount: domain.amount.to_string(),
            frequency: domain.frequency.clone(),
            notes: domain.notes.clone(),
            include: domain.include,
            created_at: format_timestamp(&domain.created_at),
            updated_at: format_timestamp(&domain.updated_at),
        }
    }
}

#[derive(
    Queryable, Identifiable, Insertable, AsChangeset, Selectable, PartialEq, Serialize,
    Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::epic_experiences)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct EpicExperienceDB {
    pub id: String,
    pub user_id: String,
    pub item: String,
    pub amount: String,
    pub frequency: String,
    pub include: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<EpicExperienceDB> for EpicRow {
    fn from(db: EpicExperienceDB) -> Self {
        Self {
            amount: parse_decimal(&db.amount, "epic_experiences.amount"),
            created_at: parse_timestamp(&db.created_at, "epic_experiences.created_at"),
            updated_at: parse_timestamp(&db.updated_at, "epic_experiences.updated_at"),
            id: db.id,
            user_id: db.user_id,
            item: db.item,
            frequency: db.frequency,
            include: db.include,
        }
    }
}

impl From<&EpicRow> for EpicExperienceDB {
    fn from(domain: &EpicRow) -> Self {
        Self {
            id: domain.id.clone(),
            user_id: domain.user_id.clone(),
            item: domain.item.clone(),
            amount: domain.amount.to_string(),
            frequency: domain.frequency.clone(),
            include: domain.include,
            created_at: format_timestamp(&domain.created_at),
            updated_at: format_timestamp(&domain.updated_at),
        }
    }
}
