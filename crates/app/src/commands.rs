//! Command handlers
//!
//! Each subcommand maps onto one call of the store's public surface.

use clap::Subcommand;
use fitfizz_core::{bmi, FeedbackEntry, Result, Session};

use crate::state::AppState;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create a new account
    Register { username: String, password: String },
    /// Log in and keep the session until logout
    Login { username: String, password: String },
    /// End the current session
    Logout,
    /// Show the logged-in user
    Whoami,
    /// Calculate BMI and save it to history
    Bmi {
        /// Weight in kilograms
        #[arg(long)]
        weight: f64,
        /// Height in centimetres
        #[arg(long)]
        height: f64,
    },
    /// List saved BMI readings, newest first
    BmiHistory,
    /// Save a report analysis
    Report {
        /// Analysis text produced for the report
        #[arg(long)]
        analysis: String,
        /// Name of the analyzed file
        #[arg(long)]
        file_name: Option<String>,
    },
    /// List saved report analyses, newest first
    Reports,
    /// Submit feedback
    Feedback {
        #[arg(long)]
        email: String,
        #[arg(long)]
        message: String,
        /// Opt in to update emails
        #[arg(long)]
        updates: bool,
    },
    /// List submitted feedback, newest first
    FeedbackHistory,
    /// Show store location and record counts
    Status,
}

pub fn run(state: &AppState, command: Command) -> Result<()> {
    let store = &state.store;

    match command {
        Command::Register { username, password } => {
            let outcome = store.register(&username, &password);
            println!("{}", outcome.message);
        }
        Command::Login { username, password } => {
            let outcome = store.login(&username, &password);
            println!("{}", outcome.message);
        }
        Command::Logout => {
            store.logout()?;
            println!("Logged out");
        }
        Command::Whoami => match store.current_session() {
            Some(session) => println!("{} ({})", session.username, session.id),
            None => println!("Not logged in"),
        },
        Command::Bmi { weight, height } => {
            let Some(session) = require_session(state) else {
                return Ok(());
            };
            let result = bmi::calculate(weight, height)?;
            let date = chrono::Local::now().format("%-m/%-d/%Y").to_string();
            let record = store.append_bmi_record(&session.owner_id(), result.into_entry(date))?;
            println!("BMI {} ({})", record.bmi, record.category);
        }
        Command::BmiHistory => {
            let Some(session) = require_session(state) else {
                return Ok(());
            };
            for record in store.query_bmi_history(&session.owner_id()) {
                println!("{}  {:>5}  {}", record.date, record.bmi, record.category);
            }
        }
        Command::Report {
            analysis,
            file_name,
        } => {
            let Some(session) = require_session(state) else {
                return Ok(());
            };
            let record =
                store.append_report_record(&session.owner_id(), &analysis, file_name.as_deref())?;
            println!("Saved analysis for {}", record.file_name);
        }
        Command::Reports => {
            let Some(session) = require_session(state) else {
                return Ok(());
            };
            for record in store.query_report_history(&session.owner_id()) {
                println!("{}  {}", record.date.format("%Y-%m-%d %H:%M"), record.file_name);
                println!("    {}", record.analysis);
            }
        }
        Command::Feedback {
            email,
            message,
            updates,
        } => {
            let Some(session) = require_session(state) else {
                return Ok(());
            };
            let entry = FeedbackEntry {
                email,
                message,
                wants_updates: updates,
            };
            let record = store.append_feedback(&session.owner_id(), entry)?;
            println!("Feedback received, replies go to {}", record.email);
        }
        Command::FeedbackHistory => {
            let Some(session) = require_session(state) else {
                return Ok(());
            };
            for record in store.query_feedback_history(&session.owner_id()) {
                println!("{}  {}", record.date.format("%Y-%m-%d"), record.message);
            }
        }
        Command::Status => {
            println!("Data directory: {}", state.data_dir().display());
            println!("Accounts: {}", store.identity().accounts().len());
            println!("BMI records: {}", store.bmi_history().len());
            println!("Reports: {}", store.report_history().len());
            println!("Feedback: {}", store.feedback_log().len());
        }
    }

    Ok(())
}

fn require_session(state: &AppState) -> Option<Session> {
    let session = state.store.current_session();
    if session.is_none() {
        println!("Not logged in");
    }
    session
}
