//! Database model for per-user settings key-value pairs.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Queryable, Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::user_settings)]
#[serde(rename_all = "camelCase")]
pub struct UserSettingDB {
    pub user_id: String,
    pub setting_key: String,
    pub setting_value: String,
}
