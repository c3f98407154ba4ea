//! On-disk response cache and cache key derivation.

mod store;

pub use store::{CacheStore, TRANSLATION_MAX_AGE};

use sha2::{Digest, Sha256};

use crate::provider::ProviderKind;

/// Computes the cache key for a translation lookup.
///
/// The key is a pure function of (provider, target language, query): the
/// digest input separates the fields with NUL bytes so that shifting a
/// character between target and query can never produce the same key.
pub fn cache_key(provider: ProviderKind, target_lang: &str, query: &str) -> String {
    let mut hasher = Sha256::new();
    for field in [provider.tag(), target_lang, query] {
        hasher.update(field.as_bytes());
        hasher.update([0u8]);
    }
    hex::encode(hasher.finalize())
}
