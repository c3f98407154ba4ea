//! The target-language resolver flow.

use anyhow::Result;
use std::io;

use crate::feedback::{Feedback, Item};
use crate::provider::ProviderKind;
use crate::settings::SettingsManager;

pub fn run(prefix: Option<&str>) -> Result<()> {
    let settings = SettingsManager::new().load_or_default();

    let mut feedback = Feedback::new();

    let Some(kind) = settings.provider else {
        feedback.push(Item::warning(
            "No translation service set.",
            "Type tr-setapi to set a translation service.",
        ));
        return feedback.send(&mut io::stdout());
    };

    for item in resolve(kind, prefix.unwrap_or_default()) {
        feedback.push(item);
    }
    feedback.send(&mut io::stdout())
}

/// Case-insensitive prefix match against the provider's display names.
///
/// Every match becomes a selectable row whose arg is the language code the
/// host persists via `--setlang`; no match yields a single non-actionable
/// row. An empty prefix lists the whole table.
fn resolve(kind: ProviderKind, prefix: &str) -> Vec<Item> {
    let needle = prefix.to_lowercase();

    let matches: Vec<Item> = kind
        .languages()
        .iter()
        .filter(|(_, name)| name.to_lowercase().starts_with(&needle))
        .map(|&(code, name)| Item::actionable(name, code, code).with_icon(kind.icon(Some(code))))
        .collect();

    if matches.is_empty() {
        vec![Item::warning(prefix, "No matching language found.")]
    } else {
        matches
    }
}
