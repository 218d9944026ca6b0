//! Data models for FitFizz

mod account;
mod record;

pub use account::*;
pub use record::*;
