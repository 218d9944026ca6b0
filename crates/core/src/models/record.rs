//! History record models
//!
//! `owner_id` is a plain string copied from the writer's session. It is never
//! checked against the account table, so records for unknown or removed
//! owners still read back normally.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::storage::keys::{
    BMI_CAP, BMI_KEY, DEFAULT_REPORT_NAME, FEEDBACK_CAP, FEEDBACK_KEY, REPORTS_CAP, REPORTS_KEY,
};

/// A record kind stored in a capped, owner-partitioned collection
pub trait CollectionRecord: Serialize + DeserializeOwned + Clone {
    /// What the producer hands over; id, owner and time are added on append
    type Payload;

    /// Storage slot for this collection
    const KEY: &'static str;

    /// Maximum number of records retained across all owners
    const CAP: usize;

    fn build(id: Uuid, owner_id: &str, payload: Self::Payload, now: DateTime<Utc>) -> Self;

    fn id(&self) -> Uuid;

    fn owner_id(&self) -> &str;
}

/// Output of the BMI calculator, ready to be stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmiEntry {
    pub bmi: f64,
    pub category: String,
    pub color: String,
    /// Display date chosen by the producer
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BmiRecord {
    pub id: Uuid,
    #[serde(alias = "ownerId")]
    pub user_id: String,
    pub bmi: f64,
    pub category: String,
    pub color: String,
    pub date: String,
    /// Milliseconds since the Unix epoch
    pub timestamp: i64,
}

impl CollectionRecord for BmiRecord {
    type Payload = BmiEntry;

    const KEY: &'static str = BMI_KEY;
    const CAP: usize = BMI_CAP;

    fn build(id: Uuid, owner_id: &str, entry: BmiEntry, now: DateTime<Utc>) -> Self {
        Self {
            id,
            user_id: owner_id.to_string(),
            bmi: entry.bmi,
            category: entry.category,
            color: entry.color,
            date: entry.date,
            timestamp: now.timestamp_millis(),
        }
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn owner_id(&self) -> &str {
        &self.user_id
    }
}

/// Analysis text returned for an uploaded report
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReportEntry {
    pub analysis: String,
    pub file_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRecord {
    pub id: Uuid,
    #[serde(alias = "ownerId")]
    pub user_id: String,
    pub analysis: String,
    pub file_name: String,
    pub date: DateTime<Utc>,
    pub timestamp: i64,
}

impl CollectionRecord for ReportRecord {
    type Payload = ReportEntry;

    const KEY: &'static str = REPORTS_KEY;
    const CAP: usize = REPORTS_CAP;

    fn build(id: Uuid, owner_id: &str, entry: ReportEntry, now: DateTime<Utc>) -> Self {
        Self {
            id,
            user_id: owner_id.to_string(),
            analysis: entry.analysis,
            file_name: entry
                .file_name
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| DEFAULT_REPORT_NAME.to_string()),
            date: now,
            timestamp: now.timestamp_millis(),
        }
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn owner_id(&self) -> &str {
        &self.user_id
    }
}

/// Feedback form submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackEntry {
    pub email: String,
    pub message: String,
    pub wants_updates: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRecord {
    pub id: Uuid,
    #[serde(alias = "ownerId")]
    pub user_id: String,
    pub email: String,
    pub message: String,
    pub wants_updates: bool,
    pub date: DateTime<Utc>,
    pub timestamp: i64,
}

impl CollectionRecord for FeedbackRecord {
    type Payload = FeedbackEntry;

    const KEY: &'static str = FEEDBACK_KEY;
    const CAP: usize = FEEDBACK_CAP;

    fn build(id: Uuid, owner_id: &str, entry: FeedbackEntry, now: DateTime<Utc>) -> Self {
        Self {
            id,
            user_id: owner_id.to_string(),
            email: entry.email,
            message: entry.message,
            wants_updates: entry.wants_updates,
            date: now,
            timestamp: now.timestamp_millis(),
        }
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn owner_id(&self) -> &str {
        &self.user_id
    }
}
