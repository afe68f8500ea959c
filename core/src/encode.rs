//! URL query augmentation and content-type-aware body encoding.
//!
//! # Design
//! Both entry points are pure functions over the client's parameter stores.
//! Stores hold raw caller strings; percent-encoding happens here, at
//! serialization time. Pair order follows the store's iteration order and is
//! unspecified — callers and tests may only rely on set-equality.
//!
//! Failures degrade silently: an unparsable base URL passes through
//! untouched, and a JSON serialization failure yields an absent body rather
//! than an error. The request proceeds either way.

use std::collections::BTreeMap;

use url::Url;

use crate::store::ParamStore;

/// Append the store's entries to `base` as a percent-encoded query string.
///
/// An empty store returns `base` verbatim. A pre-existing query on `base` is
/// replaced, not merged. If `base` does not parse as a URL the original text
/// is returned unchanged.
pub fn augment_url(base: &str, params: &ParamStore) -> String {
    if params.is_empty() {
        return base.to_string();
    }

    let mut url = match Url::parse(base) {
        Ok(url) => url,
        Err(_) => return base.to_string(),
    };

    let query = params
        .iter()
        .map(|(key, value)| format!("{}={}", urlencoding::encode(key), urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&");
    url.set_query(Some(&query));
    url.into()
}

/// Produce the request body bytes for the given headers and parameters.
///
/// Selection is driven entirely by the `Content-Type` header (located
/// case-insensitively, matched by substring):
/// - absent header: no body, even if `raw` or parameters are present
/// - `application/json`: the parameter store as a pretty-printed JSON object
///   with lexicographically sorted keys
/// - `application/x-www-form-urlencoded`: `key=value` pairs, percent-encoded,
///   joined with `&`
/// - anything else: `raw` passed through unchanged
pub fn encode_body(
    headers: &ParamStore,
    params: &ParamStore,
    raw: Option<&[u8]>,
) -> Option<Vec<u8>> {
    let content_type = headers
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case("content-type"))
        .map(|(_, value)| value.to_ascii_lowercase())?;

    if content_type.contains("application/json") {
        let object: BTreeMap<&str, &str> = params.iter().collect();
        serde_json::to_vec_pretty(&object).ok()
    } else if content_type.contains("application/x-www-form-urlencoded") {
        let encoded = params
            .iter()
            .map(|(key, value)| {
                format!("{}={}", urlencoding::encode(key), urlencoding::encode(value))
            })
            .collect::<Vec<_>>()
            .join("&");
        Some(encoded.into_bytes())
    } else {
        raw.map(<[u8]>::to_vec)
    }
}
