use chrono::{SecondsFormat, Utc};
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::SqliteConnection;

use crate::db::get_connection;
use crate::errors::Result;
use crate::feedback::feedback_model::{Feedback, NewFeedback};
use crate::feedback::feedback_traits::FeedbackRepositoryTrait;
use crate::schema::feedback;
use crate::schema::feedback::dsl::*;

use std::sync::Arc;

pub struct FeedbackRepository {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
}

impl FeedbackRepository {
    pub fn new(pool: Arc<Pool<ConnectionManager<SqliteConnection>>>) -> Self {
        FeedbackRepository { pool }
    }
}

impl FeedbackRepositoryTrait for FeedbackRepository {
    fn insert_feedback(&self, mut new_feedback: NewFeedback) -> Result<Feedback> {
        let mut conn = get_connection(&self.pool)?;

        // Fixed-width RFC 3339 with a trailing Z, so the text column sorts
        // chronologically.
        new_feedback.created_at = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true));

        Ok(diesel::insert_into(feedback::table)
            .values(&new_feedback)
            .returning(feedback::all_columns)
            .get_result(&mut conn)?)
    }

    fn list_feedback(&self) -> Result<Vec<Feedback>> {
        let mut conn = get_connection(&self.pool)?;
        Ok(feedback
            .order((created_at.desc(), id.desc()))
            .load::<Feedback>(&mut conn)?)
    }

    fn update_enrichment(
        &self,
        feedback_id: i32,
        new_sentiment: Option<String>,
        new_summary: Option<String>,
    ) -> Result<()> {
        let mut conn = get_connection(&self.pool)?;

        // Zero matched rows is not an error: the enrichment round-trip has
        // no caller waiting on it.
        diesel::update(feedback.find(feedback_id))
            .set((sentiment.eq(new_sentiment), summary.eq(new_summary)))
            .execute(&mut conn)?;

        Ok(())
    }
}
