use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use primekit_core::tracker::NetWorthSnapshot;

use crate::utils::{format_timestamp, parse_decimal, parse_timestamp};

#[derive(
    Queryable, Identifiable, Insertable, AsChangeset, Selectable, PartialEq, Serialize,
    Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::net_worth_snapshots)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct NetWorthSnapshotDB {
    pub id: String,
    pub user_id: String,
    pub year: i32,
    pub month: i32,
    pub total_assets: String,
    pub total_liabilities: String,
    pub net_worth: String,
    pub notes: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<NetWorthSnapshotDB> for NetWorthSnapshot {
    fn from(db: NetWorthSnapshotDB) -> Self {
        Self {
            total_assets: parse_decimal(&db.total_assets, "net_worth_snapshots.total_assets"),
            total_liabilities: parse_decimal(
                &db.total_liabilities,
                "net_worth_snapshots.total_liabilities",
            ),
            net_worth: parse_decimal(&db.net_worth, "net_worth_snapshots.net_worth"),
            created_at: parse_timestamp(&db.created_at, "net_worth_snapshots.created_at"),
            updated_at: parse_timestamp(&db.updated_at, "net_worth_snapshots.updated_at"),
            id: db.id,
            user_id: db.user_id,
            year: db.year,
            month: db.month as u32,
            notes: db.notes,
        }
    }
}

impl From<&NetWorthSnapshot> for NetWorthSnapshotDB {
    fn from(domain: &NetWorthSnapshot) -> Self {
        Self {
            id: domain.id.clone(),
            user_id: domain.user_id.clone(),
            year: domain.year,
            month: domain.month as i32,
            total_assets: domain.total_assets.to_string(),
            total_liabilities: domain.total_liabilities.to_string(),
            net_worth: domain.net_worth.to_string(),
            notes: domain.notes.clone(),
            created_at: format_timestamp(&domain.created_at),
            updated_at: format_timestamp(&domain.updated_at),
        }
    }
}
