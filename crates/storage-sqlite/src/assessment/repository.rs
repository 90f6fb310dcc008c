use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;
use std::sync::Arc;

use primekit_core::assessment::{Assessment, AssessmentRepositoryTrait};
use primekit_core::Result;

use super::model::AssessmentDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::assessments;

pub struct AssessmentRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl AssessmentRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        AssessmentRepository { pool, writer }
    }
}

#[async_trait]
impl AssessmentRepositoryTrait for AssessmentRepository {
    fn latest_for_user(&self, user_id: &str) -> Result<Option<Assessment>> {
        let mut conn = get_connection(&self.pool)?;
        let row = assessments::table
            .filter(assessments::user_id.eq(user_id))
            .order(assessments::created_at.desc())
            .first::<AssessmentDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(row.map(Assessment::from))
    }

    fn latest_finalized_for_user(&self, user_id: &str) -> Result<Option<Assessment>> {
        let mut conn = get_connection(&self.pool)?;
        let row = assessments::table
            .filter(assessments::user_id.eq(user_id))
            .filter(assessments::submitted_at.is_not_null())
            .order(assessments::submitted_at.desc())
            .first::<AssessmentDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(row.map(Assessment::from))
    }

    async fn insert(&self, assessment: Assessment) -> Result<Assessment> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Assessment> {
                let db_row = AssessmentDB::from(&assessment);
                diesel::insert_into(assessments::table)
                    .values(&db_row)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(assessment)
            })
            .await
    }

    async fn update(&self, assessment: Assessment) -> Result<Assessment> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Assessment> {
                let db_row = AssessmentDB::from(&assessment);
                diesel::update(assessments::table.find(&db_row.id))
                    .set(&db_row)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(assessment)
            })
            .await
    }
}

// ============================================================================
// Tests
// ============================================================================
