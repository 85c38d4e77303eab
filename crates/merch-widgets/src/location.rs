//! Addressable-location seam and deep-link query helpers.

use std::sync::Mutex;

use merch_catalog::{ProductId, VariantId};
use url::Url;

/// The page's addressable location.
///
/// Browser hosts back this with `window.location` + `history.pushState`;
/// tests use `MemoryLocation`.
pub trait LocationPort {
    /// The current page URL, when one exists.
    fn current(&self) -> Option<Url>;
    /// Push a new URL onto the history stack.
    fn push(&self, url: Url);
}

/// Replace-or-append one query parameter.
pub fn set_query_param(url: &mut Url, key: &str, value: &str) {
    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(k, _)| k != key)
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    let mut pairs = url.query_pairs_mut();
    pairs.clear();
    for (k, v) in &kept {
        pairs.append_pair(k, v);
    }
    pairs.append_pair(key, value);
}

/// Push the current URL with an updated `variantId`.
pub fn push_variant_param(port: &dyn LocationPort, variant_id: &VariantId) {
    let Some(mut url) = port.current() else {
        return;
    };
    set_query_param(&mut url, "variantId", variant_id.as_str());
    port.push(url);
}

/// Push the current URL with updated `productId` (and `variantId` when a
/// relevant variant was found) for sibling navigation.
pub fn push_sibling_params(
    port: &dyn LocationPort,
    product_id: &ProductId,
    variant_id: Option<&VariantId>,
) {
    let Some(mut url) = port.current() else {
        return;
    };
    if let Some(variant_id) = variant_id {
        set_query_param(&mut url, "variantId", variant_id.as_str());
    }
    set_query_param(&mut url, "productId", product_id.as_str());
    port.push(url);
}

/// In-memory location for tests and headless hosts.
#[derive(Debug)]
pub struct MemoryLocation {
    current: Mutex<Url>,
    history: Mutex<Vec<Url>>,
}

impl MemoryLocation {
    pub fn new(initial: Url) -> Self {
        Self {
            current: Mutex::new(initial),
            history: Mutex::new(Vec::new()),
        }
    }

    /// URLs pushed so far, oldest first.
    pub fn history(&self) -> Vec<Url> {
        self.history.lock().unwrap().clone()
    }
}

impl LocationPort for MemoryLocation {
    fn current(&self) -> Option<Url> {
        Some(self.current.lock().unwrap().clone())
    }

    fn push(&self, url: Url) {
        *self.current.lock().unwrap() = url.clone();
        self.history.lock().unwrap().push(url);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_query_param_replaces() {
        let mut url = Url::parse("https://shop.example.com/p?variantId=1&country=AU").unwrap();
        set_query_param(&mut url, "variantId", "2");

        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert!(pairs.contains(&("country".to_string(), "AU".to_string())));
        assert!(pairs.contains(&("variantId".to_string(), "2".to_string())));
        assert_eq!(pairs.len(), 2);
    }

    #[test]
    fn test_set_query_param_appends_when_absent() {
        let mut url = Url::parse("https://shop.example.com/p").unwrap();
        set_query_param(&mut url, "productId", "111");
        assert_eq!(url.query(), Some("productId=111"));
    }

    #[test]
    fn test_push_variant_updates_history() {
        let location =
            MemoryLocation::new(Url::parse("https://shop.example.com/p?variantId=1").unwrap());
        push_variant_param(&location, &VariantId::new("2"));

        let history = location.history();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].query(), Some("variantId=2"));
        assert_eq!(location.current().unwrap().query(), Some("variantId=2"));
    }

    #[test]
    fn test_push_sibling_omits_missing_variant() {
        let location = MemoryLocation::new(Url::parse("https://shop.example.com/p").unwrap());
        push_sibling_params(&location, &ProductId::new("9"), None);
        assert_eq!(location.current().unwrap().query(), Some("productId=9"));
    }
}
