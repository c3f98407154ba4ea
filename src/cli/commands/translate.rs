//! The translate flow.
//!
//! One invocation walks a linear state machine: persist whatever `--set*`
//! flag is present, or surface the first missing piece of configuration as a
//! single informational item. Only with provider, key, and target language
//! all in place does the query get answered, through the response cache.

use anyhow::Result;
use std::io;
use tracing::debug;

use crate::cache::{self, CacheStore, TRANSLATION_MAX_AGE};
use crate::credentials::CredentialStore;
use crate::error::Error;
use crate::feedback::{Feedback, Item};
use crate::provider::{self, ProviderKind};
use crate::settings::SettingsManager;

pub struct TranslateOptions {
    pub query: Option<String>,
    pub set_key: Option<String>,
    pub set_api: Option<Option<String>>,
    pub set_lang: Option<String>,
}

pub async fn run(options: TranslateOptions) -> Result<()> {
    let manager = SettingsManager::new();
    let mut settings = manager.load_or_default();

    // --setapi with a tag persists it and ends the turn.
    if let Some(Some(tag)) = &options.set_api {
        let kind: ProviderKind = tag.parse()?;
        settings.provider = Some(kind);
        manager.save(&settings)?;
        debug!(provider = kind.tag(), "selected translation service");
        return Ok(());
    }

    // --setapi with no value re-opens the chooser even when a service is
    // already selected.
    if matches!(options.set_api, Some(None)) {
        return send_chooser();
    }

    let Some(kind) = settings.provider else {
        return send_chooser();
    };

    let credentials = CredentialStore::new();

    if let Some(api_key) = &options.set_key {
        credentials.set(kind.credential_account(), api_key)?;
        debug!(provider = kind.tag(), "stored API key");
        return Ok(());
    }

    let Some(api_key) = credentials.get(kind.credential_account())? else {
        return send_warning("No API key set.", "Type \"tr-setkey\" to set your API key.");
    };

    if let Some(code) = &options.set_lang {
        settings.set_target_lang(kind, code.clone());
        manager.save(&settings)?;
        debug!(provider = kind.tag(), target_lang = %code, "set target language");
        return Ok(());
    }

    let Some(target_lang) = settings.target_lang(kind) else {
        return send_warning(
            "No target language set.",
            "Type tr-setlang to set a language to translate to.",
        );
    };

    let Some(query) = options.query.as_deref() else {
        return Err(Error::MissingQuery.into());
    };

    let cache_store = CacheStore::new()?;
    let client = provider::http_client()?;
    let translator = provider::for_kind(kind, client, cache_store.clone());

    let key = cache::cache_key(kind, target_lang, query);
    let payload = cache_store
        .get_or_compute(&key, TRANSLATION_MAX_AGE, || async {
            debug!(provider = kind.tag(), target_lang, "cache miss, calling service");
            let translations = translator
                .translate(&api_key, None, target_lang, query)
                .await?;
            Ok(serde_json::to_string(&translations)?)
        })
        .await?;
    let translations: Vec<String> = serde_json::from_str(&payload)?;

    let mut feedback = Feedback::new();
    let subtitle = format!("{query} [{}]", kind.subtitle_tag());
    let quicklook_url = translator.quicklook_url(target_lang, query);
    let icon = kind.icon(Some(target_lang));

    for text in translations {
        feedback.push(
            Item::actionable(text.clone(), subtitle.clone(), text.clone())
                .with_text(text.clone(), text)
                .with_quicklook_url(quicklook_url.clone())
                .with_icon(icon.clone()),
        );
    }

    feedback.send(&mut io::stdout())
}

/// Emits the two-service chooser; each row's arg is the tag the host feeds
/// back through `--setapi`.
fn send_chooser() -> Result<()> {
    let mut feedback = Feedback::new();
    for kind in ProviderKind::ALL {
        feedback.push(
            Item::actionable(
                format!("{}.", kind.display_name()),
                format!("Select this to use {}.", kind.display_name()),
                kind.tag(),
            )
            .with_icon(kind.icon(None)),
        );
    }
    feedback.send(&mut io::stdout())
}

fn send_warning(title: &str, subtitle: &str) -> Result<()> {
    let mut feedback = Feedback::new();
    feedback.push(Item::warning(title, subtitle));
    feedback.send(&mut io::stdout())
}
