//! Persisted settings management.

/// Settings file loading, saving, and typed accessors.
mod manager;

pub use manager::{ProviderSettings, SettingsFile, SettingsManager};
