//! Translation providers.
//!
//! `ProviderKind` carries the per-provider facts (tags, settings namespace,
//! language table, icons); the `Provider` trait carries the network
//! operation. One implementation per service, no shared base.

mod google;
mod microsoft;

pub use google::GoogleTranslate;
pub use microsoft::MicrosoftTranslate;

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use crate::cache::CacheStore;
use crate::error::Error;

/// Directory of per-language icon assets, relative to the plugin root.
const ICON_DIR: &str = "icons";

/// Both providers complete within a single request/response; a bounded
/// timeout keeps a wedged network from hanging the launcher.
const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Which translation service the user selected.
///
/// Persisted in the settings file under its wire tag (`GOOGL`/`MSFT`), which
/// is also what the host hands back from the service chooser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProviderKind {
    #[serde(rename = "GOOGL")]
    Google,
    #[serde(rename = "MSFT")]
    Microsoft,
}

impl ProviderKind {
    pub const ALL: [Self; 2] = [Self::Google, Self::Microsoft];

    /// Stable tag used in the settings file and `--setapi` arguments.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Google => "GOOGL",
            Self::Microsoft => "MSFT",
        }
    }

    /// Human-readable service name for the chooser.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Google => "Google Translate",
            Self::Microsoft => "Microsoft Translate",
        }
    }

    /// Short tag appended to result subtitles, e.g. `hola [google]`.
    pub const fn subtitle_tag(self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::Microsoft => "msft",
        }
    }

    /// Credential store account holding this provider's API key.
    pub const fn credential_account(self) -> &'static str {
        match self {
            Self::Google => "google_translate_api_key",
            Self::Microsoft => "msft_translate_api_key",
        }
    }

    /// Fixed (code, display name) table of target languages, ordered by
    /// display name.
    pub const fn languages(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::Google => google::LANGUAGES,
            Self::Microsoft => microsoft::LANGUAGES,
        }
    }

    /// Per-language icon with the provider default as fallback.
    ///
    /// A missing asset is not an error; the lookup always yields a path.
    pub fn icon(self, lang_code: Option<&str>) -> PathBuf {
        let default_icon = match self {
            Self::Google => google::DEFAULT_ICON,
            Self::Microsoft => microsoft::DEFAULT_ICON,
        };
        lang_icon_in(Path::new(ICON_DIR), default_icon, lang_code)
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for ProviderKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.tag() == s)
            .ok_or_else(|| Error::UnknownProvider(s.to_string()))
    }
}

fn lang_icon_in(icon_dir: &Path, default_icon: &str, lang_code: Option<&str>) -> PathBuf {
    let Some(code) = lang_code else {
        return icon_dir.join(default_icon);
    };

    let candidate = icon_dir.join(format!("{code}.png"));
    if candidate.exists() {
        candidate
    } else {
        icon_dir.join(default_icon)
    }
}

/// A configured translation service.
#[async_trait]
pub trait Provider: Send + Sync {
    fn kind(&self) -> ProviderKind;

    /// Web UI link for the query, shown in the host's preview pane.
    fn quicklook_url(&self, target_lang: &str, query: &str) -> String;

    /// Calls the service and returns display-ready candidates in response
    /// order. An HTTP 400 maps to [`Error::InvalidApiKey`]; every other
    /// failure propagates untouched and unretried.
    async fn translate(
        &self,
        api_key: &str,
        source_lang: Option<&str>,
        target_lang: &str,
        query: &str,
    ) -> Result<Vec<String>>;
}

/// Builds the provider implementation for `kind`.
pub fn for_kind(
    kind: ProviderKind,
    client: reqwest::Client,
    cache: CacheStore,
) -> Box<dyn Provider> {
    match kind {
        ProviderKind::Google => Box::new(GoogleTranslate::new(client)),
        ProviderKind::Microsoft => Box::new(MicrosoftTranslate::new(client, cache)),
    }
}

/// Shared HTTP client for an invocation.
pub fn http_client() -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder().timeout(HTTP_TIMEOUT).build()
}

/// Maps the provider's bad-request status to the dedicated API key error.
pub(crate) fn auth_guard(
    status: reqwest::StatusCode,
    provider: &'static str,
) -> Result<(), Error> {
    if status == reqwest::StatusCode::BAD_REQUEST {
        Err(Error::InvalidApiKey { provider })
    } else {
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_tag_round_trip() {
        for kind in ProviderKind::ALL {
            assert_eq!(kind.tag().parse::<ProviderKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_unknown_tag_is_rejected() {
        let err = "DEEPL".parse::<ProviderKind>().unwrap_err();
        assert!(matches!(err, Error::UnknownProvider(tag) if tag == "DEEPL"));
    }

    #[test]
    fn test_serde_uses_wire_tags() {
        let json = serde_json::to_string(&ProviderKind::Google).unwrap();
        assert_eq!(json, "\"GOOGL\"");
        let kind: ProviderKind = serde_json::from_str("\"MSFT\"").unwrap();
        assert_eq!(kind, ProviderKind::Microsoft);
    }

    #[test]
    fn test_lang_icon_falls_back_to_default() {
        let temp_dir = TempDir::new().unwrap();

        let icon = lang_icon_in(temp_dir.path(), "google-tr-icon.png", Some("es"));
        assert_eq!(icon, temp_dir.path().join("google-tr-icon.png"));

        let icon = lang_icon_in(temp_dir.path(), "google-tr-icon.png", None);
        assert_eq!(icon, temp_dir.path().join("google-tr-icon.png"));
    }

    #[test]
    fn test_lang_icon_prefers_language_asset() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("es.png"), []).unwrap();

        let icon = lang_icon_in(temp_dir.path(), "google-tr-icon.png", Some("es"));
        assert_eq!(icon, temp_dir.path().join("es.png"));
    }

    #[test]
    fn test_auth_guard_distinguishes_bad_request() {
        let err = auth_guard(reqwest::StatusCode::BAD_REQUEST, "Google").unwrap_err();
        assert!(matches!(err, Error::InvalidApiKey { provider: "Google" }));

        assert!(auth_guard(reqwest::StatusCode::INTERNAL_SERVER_ERROR, "Google").is_ok());
        assert!(auth_guard(reqwest::StatusCode::OK, "Google").is_ok());
    }

    #[test]
    fn test_language_tables_are_ordered_by_name() {
        for kind in ProviderKind::ALL {
            let names: Vec<&str> = kind.languages().iter().map(|(_, name)| *name).collect();
            let mut sorted = names.clone();
            sorted.sort_unstable();
            assert_eq!(names, sorted, "{} table out of order", kind.tag());
        }
    }
}
