//! Catalog entity models
//!
//! Row structs for the four catalog entities plus the request payloads
//! the write handlers accept. Cross-reference fields are plain optional
//! UUIDs; a reference to a deleted row is not an error and resolves to
//! nothing at read time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// `{"payload": ...}` envelope used by catalog and favorites responses
#[derive(Serialize, Deserialize, Debug)]
pub struct Payload<T> {
    pub payload: T,
}

/// Book record
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: Uuid,
    pub title: String,
    pub published_year: Option<i32>,
    pub summary: Option<String>,
    /// Author reference; may dangle after an author delete
    pub author_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Author record
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub id: Uuid,
    pub name: String,
    pub bio: Option<String>,
    pub literary_group_id: Option<Uuid>,
    pub period_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Literary group record
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct LiteraryGroup {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub period_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Period record
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Period {
    pub id: Uuid,
    pub name: String,
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Book create/update payload
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookPayload {
    pub title: String,
    #[serde(default)]
    pub published_year: Option<i32>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub author_id: Option<Uuid>,
}

/// Author create/update payload
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorPayload {
    pub name: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub literary_group_id: Option<Uuid>,
    #[serde(default)]
    pub period_id: Option<Uuid>,
}

/// Literary group create/update payload
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiteraryGroupPayload {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub period_id: Option<Uuid>,
}

/// Period create/update payload
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodPayload {
    pub name: String,
    #[serde(default)]
    pub start_year: Option<i32>,
    #[serde(default)]
    pub end_year: Option<i32>,
    #[serde(default)]
    pub description: Option<String>,
}
