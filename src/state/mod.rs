/// State management module
///
/// This module handles the small amount of persisted state, including:
/// - The settings document on disk (settings.rs)
/// - Shared data structures (data.rs)

pub mod settings;
pub mod data;
