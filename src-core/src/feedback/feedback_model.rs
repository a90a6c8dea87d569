use diesel::prelude::*;
use diesel::Queryable;
use diesel::Selectable;
use serde::{Deserialize, Serialize};

/// A stored feedback record. `sentiment` and `summary` stay `None` until
/// the enrichment webhook delivers non-empty values for them.
#[derive(
    Queryable,
    Identifiable,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::feedback)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub id: i32,
    pub name: String,
    pub message: String,
    pub created_at: String,
    pub sentiment: Option<String>,
    pub summary: Option<String>,
}

#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::feedback)]
#[serde(rename_all = "camelCase")]
pub struct NewFeedback {
    pub name: String,
    pub message: String,
    // Stamped by the repository at insert time; ignored if supplied.
    #[serde(default)]
    pub created_at: Option<String>,
}
