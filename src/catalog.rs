use std::collections::HashSet;
use lazy_static::lazy_static;
use crate::models::NewsItem;

/// Coins that can be picked in the selection control, in display order
pub const AVAILABLE_COINS: [&str; 7] = [
    "bitcoin", "ethereum", "solana", "dogecoin", "cardano", "ripple", "litecoin",
];

/// Selection shown on a fresh session
pub const DEFAULT_COINS: [&str; 2] = ["bitcoin", "ethereum"];

lazy_static! {
    static ref AVAILABLE_COIN_SET: HashSet<&'static str> = AVAILABLE_COINS.iter().copied().collect();
}

/// Check whether an identifier belongs to the fixed coin list
pub fn is_available(coin_id: &str) -> bool {
    AVAILABLE_COIN_SET.contains(coin_id)
}

/// Default selection as owned identifiers
pub fn default_selection() -> Vec<String> {
    DEFAULT_COINS.iter().map(|s| s.to_string()).collect()
}

/// Static headlines shown under the charts. Not fetched from anywhere.
pub fn get_news_items() -> Vec<NewsItem> {
    vec![
        ("Bitcoin rises above $60k", "https://www.coindesk.com"),
        ("Ethereum ETF decision coming soon", "https://cointelegraph.com"),
        ("Crypto market volatility increases", "https://decrypt.co"),
    ]
    .into_iter()
    .map(|(title, link)| NewsItem {
        title: title.to_string(),
        link: link.to_string(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_available() {
        assert!(DEFAULT_COINS.iter().all(|c| is_available(c)));
        assert!(!is_available("shiba-inu"));
        assert!(!is_available("Bitcoin"));
    }

    #[test]
    fn test_news_items() {
        let news = get_news_items();
        assert_eq!(news.len(), 3);
        assert_eq!(news[0].link, "https://www.coindesk.com");
    }
}
