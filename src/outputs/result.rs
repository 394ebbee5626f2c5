use serde::Serialize;

/// Original-language line plus its translation, shown as a two-line callout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Quote {
    pub original: &'static str,
    pub translation: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    pub main_message: String,
    /// Rendered as a bulleted list, in order.
    pub reasons: Vec<String>,
    pub quote: Option<Quote>,
    pub tips: Vec<&'static str>,
}
