use vera_http::HttpClient;
use vera_report::{ReportPayload, VerificationResult};

use crate::error::Error;
use crate::types::{
    AnalyzeRequest, AnalyzeResponse, FactCheckRequest, SummaryResponse, TranscribeRequest,
    TranscribeResponse,
};

/// Typed client for the fact-checking backend. Every operation is a single
/// fire-once request; failures propagate to the caller untouched.
pub struct VeracityClient<C> {
    http: C,
}

impl<C: HttpClient> VeracityClient<C> {
    pub fn new(http: C) -> Self {
        Self { http }
    }

    pub async fn transcribe(&self, video_url: &str) -> Result<TranscribeResponse, Error> {
        tracing::debug!(video_url, "requesting transcription");
        let body = serde_json::to_vec(&TranscribeRequest { video_url })?;
        let bytes = self.http.post_json("/api/transcribe", body).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    pub async fn fact_check(&self, transcript: &str) -> Result<ReportPayload, Error> {
        tracing::debug!(chars = transcript.len(), "requesting fact-check");
        let body = serde_json::to_vec(&FactCheckRequest { transcript })?;
        let bytes = self.http.post_json("/api/fact-check", body).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    pub async fn analyze(&self, content: &str) -> Result<AnalyzeResponse, Error> {
        tracing::debug!(chars = content.len(), "requesting analysis");
        let body = serde_json::to_vec(&AnalyzeRequest { content })?;
        let bytes = self.http.post_json("/api/analyze", body).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    pub async fn verify(&self, claim_id: &str) -> Result<VerificationResult, Error> {
        tracing::debug!(claim_id, "requesting verification");
        let path = format!("/api/verify/{claim_id}");
        let bytes = self.http.get(&path).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    pub async fn summary(&self, claim_id: &str) -> Result<SummaryResponse, Error> {
        tracing::debug!(claim_id, "requesting summary");
        let path = format!("/api/summaries/{claim_id}");
        let bytes = self.http.get(&path).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}
