//! # quicktr - Launcher Translation Plugin
//!
//! `quicktr` is the workhorse behind a launcher translation keyword: it takes
//! the query the launcher hands it on the command line, asks Google Translate
//! or Microsoft Translator for candidates, and prints the result items as a
//! JSON feedback document on stdout for the launcher to render.
//!
//! ## Features
//!
//! - **Two services**: Google Translate v2 and Microsoft Translator, chosen
//!   once and persisted
//! - **Response caching**: repeated queries answer from a day-long SQLite
//!   cache without touching the network
//! - **Keychain credentials**: API keys live in the OS secure store, never in
//!   the settings file
//!
//! ## Setup flow
//!
//! ```bash
//! quicktr --setapi GOOGL    # choose the service
//! quicktr --setkey KEY      # store its API key
//! quicktr --setlang es      # pick a target language
//! quicktr "good morning"    # translate
//! quicktr languages Span    # find a language code by name
//! ```
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/quicktr/settings.toml`:
//!
//! ```toml
//! provider = "GOOGL"
//!
//! [google]
//! target_lang = "es"
//! ```

/// Response cache and cache key derivation.
pub mod cache;

/// Command-line interface definitions and handlers.
pub mod cli;

/// API key storage backed by the OS keychain.
pub mod credentials;

/// Error taxonomy for a single invocation.
pub mod error;

/// Result records and the host feedback document.
pub mod feedback;

/// File system utilities.
pub mod fs;

/// XDG-style path utilities for settings and cache.
pub mod paths;

/// Translation providers.
pub mod provider;

/// Persisted settings management.
pub mod settings;
