use crate::types::{FactCheck, OverallAnalysis, Report};

pub const MSG_EMPTY_URL: &str = "Please enter a YouTube URL.";
pub const MSG_EMPTY_TRANSCRIPT: &str = "Transcription failed.";
pub const MSG_INCOMPLETE_RESPONSE: &str =
    "Received an incomplete response format from the server.";

/// Workflow stage driving which affordances are enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum ProcessingStatus {
    #[default]
    Idle,
    Transcribing,
    FactChecking,
    Done,
    Error,
}

/// Fact-check response as it comes off the wire. Both halves are optional
/// until [`Workflow::report_received`] validates them.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct ReportPayload {
    #[serde(default)]
    pub fact_checks: Option<Vec<FactCheck>>,
    #[serde(default)]
    pub overall_analysis: Option<OverallAnalysis>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submit {
    /// Local validation failed; no request may be issued, status unchanged.
    Rejected,
    Started { generation: u64 },
}

/// The two-step transcribe → fact-check state machine.
///
/// Pure state: the caller performs the requests and feeds results back in,
/// tagged with the generation returned by [`Workflow::submit`]. Results from
/// a superseded submission are dropped on the floor.
#[derive(Debug, Default)]
pub struct Workflow {
    status: ProcessingStatus,
    report: Option<Report>,
    error: Option<String>,
    generation: u64,
}

impl Workflow {
    pub fn status(&self) -> ProcessingStatus {
        self.status
    }

    pub fn report(&self) -> Option<&Report> {
        self.report.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Input and submit are disabled while a request is pending.
    pub fn is_processing(&self) -> bool {
        matches!(
            self.status,
            ProcessingStatus::Transcribing | ProcessingStatus::FactChecking
        )
    }

    /// Start a new submission. An empty URL is rejected locally with a fixed
    /// message and no status change; otherwise prior results and error are
    /// cleared and the status moves to `Transcribing`.
    pub fn submit(&mut self, url: &str) -> Submit {
        if url.trim().is_empty() {
            self.error = Some(MSG_EMPTY_URL.to_owned());
            return Submit::Rejected;
        }
        self.generation += 1;
        self.report = None;
        self.error = None;
        self.status = ProcessingStatus::Transcribing;
        Submit::Started {
            generation: self.generation,
        }
    }

    /// Feed the transcribe result. An empty or missing transcript is terminal
    /// for this attempt; fact-check must not be called.
    pub fn transcript_received(&mut self, generation: u64, result: Result<String, String>) {
        if generation != self.generation || self.status != ProcessingStatus::Transcribing {
            return;
        }
        match result {
            Ok(transcript) if !transcript.trim().is_empty() => {
                self.status = ProcessingStatus::FactChecking;
            }
            Ok(_) => self.fail(MSG_EMPTY_TRANSCRIPT),
            Err(message) => self.fail(&message),
        }
    }

    /// Feed the fact-check result. A payload missing either half is rejected
    /// before any state is populated.
    pub fn report_received(&mut self, generation: u64, result: Result<ReportPayload, String>) {
        if generation != self.generation || self.status != ProcessingStatus::FactChecking {
            return;
        }
        match result {
            Ok(payload) => match (payload.overall_analysis, payload.fact_checks) {
                (Some(overall), Some(fact_checks)) => {
                    self.report = Some(Report {
                        overall,
                        fact_checks,
                    });
                    self.status = ProcessingStatus::Done;
                }
                _ => self.fail(MSG_INCOMPLETE_RESPONSE),
            },
            Err(message) => self.fail(&message),
        }
    }

    fn fail(&mut self, message: &str) {
        self.report = None;
        self.error = Some(format!("Error: {message}"));
        self.status = ProcessingStatus::Error;
    }
}
