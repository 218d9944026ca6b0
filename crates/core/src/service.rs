//! Public persistence surface
//!
//! `WellnessStore` owns the storage medium and hands out the identity,
//! session, and collection components over it. Construct one per process and
//! pass it by reference.

use serde::Serialize;
use tracing::warn;

use crate::collection::CollectionStore;
use crate::error::{Error, Result};
use crate::identity::IdentityStore;
use crate::models::{
    BmiEntry, BmiRecord, FeedbackEntry, FeedbackRecord, ReportEntry, ReportRecord, Session,
};
use crate::session::SessionManager;
use crate::storage::KeyValueStore;

/// Result of a registration attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthOutcome {
    pub success: bool,
    pub message: String,
}

/// Result of a login attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginOutcome {
    pub success: bool,
    pub session: Option<Session>,
    pub message: String,
}

pub struct WellnessStore<S> {
    medium: S,
}

impl<S: KeyValueStore> WellnessStore<S> {
    pub fn new(medium: S) -> Self {
        Self { medium }
    }

    /// Underlying storage medium
    pub fn medium(&self) -> &S {
        &self.medium
    }

    pub fn identity(&self) -> IdentityStore<'_> {
        IdentityStore::new(&self.medium)
    }

    pub fn sessions(&self) -> SessionManager<'_> {
        SessionManager::new(&self.medium)
    }

    pub fn bmi_history(&self) -> CollectionStore<'_, BmiRecord> {
        CollectionStore::new(&self.medium)
    }

    pub fn report_history(&self) -> CollectionStore<'_, ReportRecord> {
        CollectionStore::new(&self.medium)
    }

    pub fn feedback_log(&self) -> CollectionStore<'_, FeedbackRecord> {
        CollectionStore::new(&self.medium)
    }

    pub fn register(&self, username: &str, credential: &str) -> AuthOutcome {
        match self.identity().register(username, credential) {
            Ok(_) => AuthOutcome {
                success: true,
                message: "Registration successful".to_string(),
            },
            Err(Error::DuplicateUsername(_)) => AuthOutcome {
                success: false,
                message: "Username already exists".to_string(),
            },
            Err(e) => {
                warn!(error = %e, "Registration failed");
                AuthOutcome {
                    success: false,
                    message: e.to_string(),
                }
            }
        }
    }

    pub fn login(&self, username: &str, credential: &str) -> LoginOutcome {
        match self.sessions().login(username, credential) {
            Ok(session) => LoginOutcome {
                success: true,
                session: Some(session),
                message: "Login successful".to_string(),
            },
            Err(Error::InvalidCredentials) => LoginOutcome {
                success: false,
                session: None,
                message: "Invalid username or password".to_string(),
            },
            Err(e) => {
                warn!(error = %e, "Login failed");
                LoginOutcome {
                    success: false,
                    session: None,
                    message: e.to_string(),
                }
            }
        }
    }

    pub fn logout(&self) -> Result<()> {
        self.sessions().logout()
    }

    pub fn current_session(&self) -> Option<Session> {
        self.sessions().current_session()
    }

    pub fn append_bmi_record(&self, owner_id: &str, entry: BmiEntry) -> Result<BmiRecord> {
        self.bmi_history().append(owner_id, entry)
    }

    pub fn query_bmi_history(&self, owner_id: &str) -> Vec<BmiRecord> {
        self.bmi_history().query_by_owner(owner_id)
    }

    pub fn append_report_record(
        &self,
        owner_id: &str,
        analysis: &str,
        file_name: Option<&str>,
    ) -> Result<ReportRecord> {
        let entry = ReportEntry {
            analysis: analysis.to_string(),
            file_name: file_name.map(str::to_string),
        };
        self.report_history().append(owner_id, entry)
    }

    pub fn query_report_history(&self, owner_id: &str) -> Vec<ReportRecord> {
        self.report_history().query_by_owner(owner_id)
    }

    pub fn append_feedback(&self, owner_id: &str, entry: FeedbackEntry) -> Result<FeedbackRecord> {
        self.feedback_log().append(owner_id, entry)
    }

    pub fn query_feedback_history(&self, owner_id: &str) -> Vec<FeedbackRecord> {
        self.feedback_log().query_by_owner(owner_id)
    }
}
