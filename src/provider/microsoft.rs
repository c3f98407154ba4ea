//! Microsoft Translator (Cognitive Services).
//!
//! Unlike Google, the API key is not sent with the translate call. It first
//! buys a short-lived bearer token from a separate endpoint; the token is
//! reused through the response cache and refreshed after nine minutes,
//! comfortably inside its ten-minute validity, so an expired token is never
//! replayed.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use super::{Provider, ProviderKind, auth_guard};
use crate::cache::CacheStore;

const API_URL: &str = "https://api.microsofttranslator.com/v2/http.svc/Translate";
const TOKEN_URL: &str = "https://api.cognitive.microsoft.com/sts/v1.0/issueToken";
const QUICK_LOOK_URL: &str = "https://www.bing.com/translator/";
pub(super) const DEFAULT_ICON: &str = "msft-icon.png";

const TOKEN_CACHE_KEY: &str = "msft_translate_token";

/// Issued tokens are valid for ten minutes; refresh one minute early.
const TOKEN_MAX_AGE: Duration = Duration::from_secs(60 * 9);

pub struct MicrosoftTranslate {
    client: Client,
    cache: CacheStore,
}

impl MicrosoftTranslate {
    pub fn new(client: Client, cache: CacheStore) -> Self {
        Self { client, cache }
    }

    /// Returns a `Bearer <token>` value, fetching a fresh token when the
    /// cached one is near expiry.
    async fn bearer_token(&self, api_key: &str) -> Result<String> {
        let client = self.client.clone();
        let api_key = api_key.to_owned();

        self.cache
            .get_or_compute(TOKEN_CACHE_KEY, TOKEN_MAX_AGE, || async move {
                let response = client
                    .post(TOKEN_URL)
                    .query(&[("Subscription-Key", api_key.as_str())])
                    .send()
                    .await
                    .context("Failed to reach the Microsoft token endpoint")?;

                auth_guard(response.status(), "MSFT")?;
                let token = response.error_for_status()?.text().await?;

                Ok(bearer_value(&token))
            })
            .await
    }
}

#[async_trait]
impl Provider for MicrosoftTranslate {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Microsoft
    }

    fn quicklook_url(&self, target_lang: &str, query: &str) -> String {
        format!(
            "{QUICK_LOOK_URL}?to={target_lang}&text={}",
            urlencoding::encode(query)
        )
    }

    async fn translate(
        &self,
        api_key: &str,
        source_lang: Option<&str>,
        target_lang: &str,
        query: &str,
    ) -> Result<Vec<String>> {
        let appid = self.bearer_token(api_key).await?;

        let mut params = vec![
            ("appid", appid.as_str()),
            ("to", target_lang),
            ("text", query),
        ];
        if let Some(source) = source_lang {
            params.push(("from", source));
        }

        let response = self
            .client
            .get(API_URL)
            .query(&params)
            .send()
            .await
            .context("Failed to reach Microsoft Translator")?;

        auth_guard(response.status(), "MSFT")?;
        let body = response.error_for_status()?.text().await?;

        Ok(vec![parse_translation(&body)?])
    }
}

fn bearer_value(token: &str) -> String {
    format!("Bearer {token}")
}

/// Extracts the single translation from the XML body; the service returns
/// one root element whose text content is the translated string.
fn parse_translation(body: &str) -> Result<String> {
    let document = roxmltree::Document::parse(body)
        .context("Unexpected Microsoft Translator response shape")?;

    let text = document
        .root_element()
        .text()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .context("Empty Microsoft Translator response")?;

    Ok(text.to_string())
}

/// Target languages supported by Microsoft Translator.
pub(super) const LANGUAGES: &[(&str, &str)] = &[
    ("af", "Afrikaans"),
    ("ar", "Arabic"),
    ("bs-Latn", "Bosnian (Latin)"),
    ("bg", "Bulgarian"),
    ("ca", "Catalan"),
    ("zh-CHS", "Chinese Simplified"),
    ("zh-CHT", "Chinese Traditional"),
    ("hr", "Croatian"),
    ("cs", "Czech"),
    ("da", "Danish"),
    ("nl", "Dutch"),
    ("en", "English"),
    ("et", "Estonian"),
    ("fi", "Finnish"),
    ("fr", "French"),
    ("de", "German"),
    ("el", "Greek"),
    ("ht", "Haitian Creole"),
    ("he", "Hebrew"),
    ("hi", "Hindi"),
    ("mww", "Hmong Daw"),
    ("hu", "Hungarian"),
    ("id", "Indonesian"),
    ("it", "Italian"),
    ("ja", "Japanese"),
    ("sw", "Kiswahili"),
    ("tlh", "Klingon"),
    ("ko", "Korean"),
    ("lv", "Latvian"),
    ("lt", "Lithuanian"),
    ("ms", "Malay"),
    ("mt", "Maltese"),
    ("no", "Norwegian"),
    ("fa", "Persian"),
    ("pl", "Polish"),
    ("pt", "Portuguese"),
    ("otq", "Queretaro Otomi"),
    ("ro", "Romanian"),
    ("ru", "Russian"),
    ("sr-Cyrl", "Serbian (Cyrillic)"),
    ("sr-Latn", "Serbian (Latin)"),
    ("sk", "Slovak"),
    ("sl", "Slovenian"),
    ("es", "Spanish"),
    ("sv", "Swedish"),
    ("th", "Thai"),
    ("tr", "Turkish"),
    ("uk", "Ukrainian"),
    ("ur", "Urdu"),
    ("vi", "Vietnamese"),
    ("cy", "Welsh"),
    ("yua", "Yucatec Maya"),
];
