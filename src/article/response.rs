//! Request/response boundary
//!
//! Maps a page-name request onto a status code and a list of section
//! summaries, the way an HTTP handler would expose it as JSON. Fetch
//! problems never escape as errors; they become a status with an empty list.

use super::sections::{split_sections, summarize_sections};
use super::source::ArticleSource;
use crate::errors::SummarizerError;
use crate::summarizer::luhn::SectionSummarizer;
use crate::types::{SectionSummary, SummarizerConfig};
use serde::Serialize;

pub const STATUS_OK: u16 = 200;
pub const STATUS_BAD_REQUEST: u16 = 400;
pub const STATUS_BAD_GATEWAY: u16 = 502;

/// Status plus section summaries for one page request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummariesResponse {
    pub status: u16,
    pub sections: Vec<SectionSummary>,
}

impl SummariesResponse {
    fn empty(status: u16) -> Self {
        Self {
            status,
            sections: Vec::new(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// JSON body: the list of `{heading, summary}` objects
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.sections).unwrap_or_else(|_| "[]".to_string())
    }

    /// Pretty-printed JSON body
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(&self.sections).unwrap_or_else(|_| "[]".to_string())
    }
}

/// Summaries for `page_name`, fetched from `source`.
///
/// - missing or blank page name: 400, no sections
/// - article not found or empty: 200, no sections
/// - fetch failure: 502, no sections
/// - invalid config: 400, no sections
pub fn summaries_for(
    source: &dyn ArticleSource,
    page_name: Option<&str>,
    config: &SummarizerConfig,
) -> SummariesResponse {
    let Some(page_name) = page_name.map(str::trim).filter(|p| !p.is_empty()) else {
        return SummariesResponse::empty(STATUS_BAD_REQUEST);
    };

    let article = match source.fetch(page_name) {
        Ok(article) => article,
        Err(SummarizerError::ArticleNotFound(_)) => return SummariesResponse::empty(STATUS_OK),
        Err(_err) => {
            debug_event!(page_name, error = %_err, "article fetch failed");
            return SummariesResponse::empty(STATUS_BAD_GATEWAY);
        }
    };

    let summarizer = match SectionSummarizer::with_config(&article.title, config.clone()) {
        Ok(summarizer) => summarizer,
        Err(_) => return SummariesResponse::empty(STATUS_BAD_REQUEST),
    };

    SummariesResponse {
        status: STATUS_OK,
        sections: summarize_sections(&summarizer, &split_sections(&article.text)),
    }
}
