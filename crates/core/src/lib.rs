//! FitFizz Core Library
//!
//! Local-first persistence for the FitFizz wellness app: accounts, the
//! current session, and capped per-user history of BMI readings, report
//! analyses, and feedback.

pub mod bmi;
pub mod collection;
pub mod error;
pub mod identity;
pub mod invariants;
pub mod models;
pub mod service;
pub mod session;
pub mod storage;

pub use bmi::{BmiCategory, BmiResult};
pub use collection::CollectionStore;
pub use error::{Error, Result};
pub use identity::IdentityStore;
pub use models::*;
pub use service::{AuthOutcome, LoginOutcome, WellnessStore};
pub use session::SessionManager;
pub use storage::{Database, KeyValueStore, MemoryStore};
