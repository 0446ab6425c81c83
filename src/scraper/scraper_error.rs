use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScraperError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTML parse error: {0}")]
    HtmlParse(String),
    #[error("Element not found: {0}")]
    MissingElement(&'static str),
    #[error("Attribute '{attr}' missing on {element}")]
    MissingAttribute {
        element: &'static str,
        attr: &'static str,
    },
    #[error("Unexpected text in {field}: {text:?}")]
    MalformedText { field: &'static str, text: String },
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}
