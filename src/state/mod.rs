/// State management module
///
/// This module handles all application state, including:
/// - The per-session flags and their transitions (session.rs)
/// - The canned diagnosis result set (diagnosis.rs)

pub mod diagnosis;
pub mod session;
