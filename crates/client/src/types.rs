use serde::{Deserialize, Serialize};

use vera_report::Claim;

#[derive(Debug, Serialize)]
pub(crate) struct TranscribeRequest<'a> {
    pub video_url: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct TranscribeResponse {
    #[serde(default)]
    pub transcript: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct FactCheckRequest<'a> {
    pub transcript: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct AnalyzeRequest<'a> {
    pub content: &'a str,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalyzeResponse {
    #[serde(default)]
    pub claims: Vec<Claim>,
    #[serde(default)]
    pub summaries: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct SummaryResponse {
    pub summary: String,
}
