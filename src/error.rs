//! Error taxonomy for a single plugin invocation.
//!
//! Only the cases the host must be able to tell apart get their own variant.
//! Plain transport failures (timeouts, 5xx, DNS) travel as `reqwest::Error`
//! inside `anyhow` chains and reach the host's generic error display
//! unchanged. Missing configuration is not an error at all; those states
//! produce an informational feedback item and a clean exit.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Translate mode was invoked without a query argument.
    #[error("expected a query as argument")]
    MissingQuery,

    /// `--setapi` was given a tag outside {GOOGL, MSFT}.
    #[error("unsupported translation service: {0}")]
    UnknownProvider(String),

    /// HTTP 400 from a provider endpoint. In practice this means the stored
    /// API key is wrong, so it gets its own user-facing message.
    #[error("please make sure that your {provider} API key is correct (code 400: invalid request)")]
    InvalidApiKey { provider: &'static str },

    /// Keychain failure other than "no entry" (absence is `Ok(None)` on the
    /// credential store, not an error).
    #[error("credential store error: {0}")]
    Credential(#[from] keyring::Error),
}
