use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use primekit_core::assessment::{Assessment, Band};

use crate::utils::{format_timestamp, parse_timestamp};

#[derive(
    Queryable, Identifiable, Insertable, AsChangeset, Selectable, PartialEq, Serialize,
    Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::assessments)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct AssessmentDB {
    pub id: String,
    pub user_id: String,
    pub answers: String,
    pub total_score: Option<i32>,
    pub band: Option<String>,
    pub category_scores: String,
    pub submitted_at: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

fn band_from_str(label: &str) -> Option<Band> {
    match label {
        "Inactive" => Some(Band::Inactive),
        "Reactive" => Some(Band::Reactive),
        "Proactive" => Some(Band::Proactive),
        other => {
            log::error!("Unknown stored assessment band '{}'", other);
            None
        }
    }
}

impl From<AssessmentDB> for Assessment {
    fn from(db: AssessmentDB) -> Self {
        Self {
            answers: serde_json::from_str(&db.answers).unwrap_or_default(),
            category_scores: serde_json::from_str(&db.category_scores).unwrap_or_default(),
            band: db.band.as_deref().and_then(band_from_str),
            submitted_at: db
                .submitted_at
                .map(|s| parse_timestamp(&s, "assessments.submitted_at")),
            created_at: parse_timestamp(&db.created_at, "assessments.created_at"),
            updated_at: parse_timestamp(&db.updated_at, "assessments.updated_at"),
            id: db.id,
            user_id: db.user_id,
            total_score: db.total_score,
        }
    }
}

impl From<&Assessment> for AssessmentDB {
    fn from(domain: &Assessment) -> Self {
        Self {
            id: domain.id.clone(),
            user_id: domain.user_id.clone(),
            answers: serde_json::to_string(&domain.answers)
                .unwrap_or_else(|_| "{}".to_string()),
            total_score: domain.total_score,
            band: domain.band.map(|b| b.as_str().to_string()),
            category_scores: serde_json::to_string(&domain.category_scores)
                .unwrap_or_else(|_| "{}".to_string()),
            submitted_at: domain.submitted_at.as_ref().map(format_timestamp),
            created_at: format_timestamp(&domain.created_at),
            updated_at: format_timestamp(&domain.updated_at),
        }
    }
}
