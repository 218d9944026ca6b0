//! Durable slot names and retention caps

/// Registered accounts, one JSON array
pub const USERS_KEY: &str = "fitfizz_users_table";

/// The single active session, absent when anonymous
pub const SESSION_KEY: &str = "fitfizz_session_active";

pub const BMI_KEY: &str = "fitfizz_collection_bmi";
pub const REPORTS_KEY: &str = "fitfizz_collection_reports";
pub const FEEDBACK_KEY: &str = "fitfizz_collection_feedback";

pub const BMI_CAP: usize = 500;
pub const REPORTS_CAP: usize = 100;
pub const FEEDBACK_CAP: usize = 100;

/// File name recorded when a report arrives without one
pub const DEFAULT_REPORT_NAME: &str = "Unknown Report";
