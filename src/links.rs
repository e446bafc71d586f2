//! Retailer search links for grocery items.
//!
//! Static URL templates keyed by the raw item text, for the display
//! layer to render next to each grocery line. These are search pages,
//! not verified catalog results.

use reqwest::Url;

#[derive(Debug, Clone, PartialEq)]
pub struct RetailerLinks {
    pub walmart: String,
    pub kroger: String,
    pub instacart: String,
}

fn search_url(base: &str, param: &str, item: &str) -> String {
    // Bases are static and known-valid.
    let mut url = Url::parse(base).unwrap();
    url.query_pairs_mut().append_pair(param, item);
    url.to_string()
}

/// Build the three retailer search URLs for a grocery item.
///
/// The item text is used raw (not normalized) so the search matches
/// what the model actually listed.
pub fn retailer_links(item: &str) -> RetailerLinks {
    RetailerLinks {
        walmart: search_url("https://www.walmart.com/search", "q", item),
        kroger: search_url("https://www.kroger.com/search", "query", item),
        instacart: search_url("https://www.instacart.com/store/s", "k", item),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_links_contain_encoded_item() {
        let links = retailer_links("2 lbs chicken breast");
        assert_eq!(
            links.walmart,
            "https://www.walmart.com/search?q=2+lbs+chicken+breast"
        );
        assert!(links.kroger.starts_with("https://www.kroger.com/search?query="));
        assert!(links.instacart.starts_with("https://www.instacart.com/store/s?k="));
    }

    #[test]
    fn test_links_are_deterministic() {
        assert_eq!(retailer_links("salt"), retailer_links("salt"));
    }

    #[test]
    fn test_special_characters_are_encoded() {
        let links = retailer_links("salt & pepper");
        assert!(!links.walmart.contains(" & "));
        assert!(links.walmart.contains("%26"));
    }
}
