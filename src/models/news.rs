/// Headline with a link, rendered as a clickable list entry
#[derive(Debug, Clone, PartialEq)]
pub struct NewsItem {
    pub title: String,
    pub link: String,
}
