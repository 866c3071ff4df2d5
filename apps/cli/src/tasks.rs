use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;
use tokio_util::sync::CancellationToken;

use vera_client::{AnalyzeResponse, VeracityClient};
use vera_http::HttpClient;
use vera_report::{ReportPayload, VerificationResult};

/// Messages from request tasks back to the UI loop. Workflow events carry the
/// submission generation so the handler can drop results of a superseded
/// submission.
pub enum TaskEvent {
    Transcript {
        generation: u64,
        result: Result<String, String>,
    },
    Report {
        generation: u64,
        result: Result<ReportPayload, String>,
    },
    Analysis {
        result: Result<AnalyzeResponse, String>,
    },
    Verification {
        result: Result<Vec<VerificationResult>, String>,
    },
    Summary {
        claim_id: String,
        result: Result<String, String>,
    },
}

/// The two-step transcribe → fact-check sequence as one cancellable task.
pub fn spawn_fact_check<C>(
    client: Arc<VeracityClient<C>>,
    tx: UnboundedSender<TaskEvent>,
    cancel: CancellationToken,
    generation: u64,
    video_url: String,
) where
    C: HttpClient + 'static,
{
    tokio::spawn(async move {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::debug!(generation, "fact-check task superseded, dropping");
            }
            _ = run_fact_check(client, tx, generation, video_url) => {}
        }
    });
}

async fn run_fact_check<C: HttpClient>(
    client: Arc<VeracityClient<C>>,
    tx: UnboundedSender<TaskEvent>,
    generation: u64,
    video_url: String,
) {
    tracing::info!(generation, %video_url, "transcribing");
    let transcript = match client.transcribe(&video_url).await {
        Ok(response) => response.transcript.unwrap_or_default(),
        Err(err) => {
            tracing::warn!(generation, %err, "transcription failed");
            let _ = tx.send(TaskEvent::Transcript {
                generation,
                result: Err(err.to_string()),
            });
            return;
        }
    };

    // an empty transcript is terminal; fact-check must not be called
    let usable = !transcript.trim().is_empty();
    let _ = tx.send(TaskEvent::Transcript {
        generation,
        result: Ok(transcript.clone()),
    });
    if !usable {
        return;
    }

    tracing::info!(generation, "fact-checking transcript");
    let result = client
        .fact_check(&transcript)
        .await
        .map_err(|err| err.to_string());
    let _ = tx.send(TaskEvent::Report { generation, result });
}

pub fn spawn_analyze<C>(
    client: Arc<VeracityClient<C>>,
    tx: UnboundedSender<TaskEvent>,
    content: String,
) where
    C: HttpClient + 'static,
{
    tokio::spawn(async move {
        let result = client.analyze(&content).await.map_err(|err| {
            tracing::warn!(%err, "analysis failed");
            err.to_string()
        });
        let _ = tx.send(TaskEvent::Analysis { result });
    });
}

/// One verification fetch per claim, sequentially; the page shows a single
/// error state if any of them fails.
pub fn spawn_verification<C>(
    client: Arc<VeracityClient<C>>,
    tx: UnboundedSender<TaskEvent>,
    claim_ids: Vec<String>,
) where
    C: HttpClient + 'static,
{
    tokio::spawn(async move {
        let mut results = Vec::with_capacity(claim_ids.len());
        for claim_id in &claim_ids {
            match client.verify(claim_id).await {
                Ok(result) => results.push(result),
                Err(err) => {
                    tracing::warn!(claim_id, %err, "verification fetch failed");
                    let _ = tx.send(TaskEvent::Verification {
                        result: Err("Failed to fetch verification results".to_owned()),
                    });
                    return;
                }
            }
        }
        let _ = tx.send(TaskEvent::Verification {
            result: Ok(results),
        });
    });
}

pub fn spawn_summary<C>(
    client: Arc<VeracityClient<C>>,
    tx: UnboundedSender<TaskEvent>,
    claim_id: String,
) where
    C: HttpClient + 'static,
{
    tokio::spawn(async move {
        let result = match client.summary(&claim_id).await {
            Ok(response) => Ok(response.summary),
            Err(err) => {
                tracing::warn!(claim_id, %err, "summary fetch failed");
                Err("Failed to generate summary. Please try again.".to_owned())
            }
        };
        let _ = tx.send(TaskEvent::Summary { claim_id, result });
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    use vera_report::workflow::Workflow;
    use vera_report::{ProcessingStatus, ScoreBand, SourceRef, Submit};

    /// Canned-response [`HttpClient`] keyed by request path. Paths without an
    /// entry return a 500 with no `detail`.
    struct FakeHttp {
        responses: HashMap<String, Vec<u8>>,
        hits: Arc<Mutex<Vec<String>>>,
    }

    impl FakeHttp {
        fn new() -> Self {
            Self {
                responses: HashMap::new(),
                hits: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn respond(mut self, path: &str, body: serde_json::Value) -> Self {
            self.responses
                .insert(path.to_owned(), body.to_string().into_bytes());
            self
        }

        fn hit_log(&self) -> Arc<Mutex<Vec<String>>> {
            self.hits.clone()
        }

        fn lookup(&self, path: &str) -> Result<Vec<u8>, vera_http::Error> {
            self.hits.lock().unwrap().push(path.to_owned());
            match self.responses.get(path) {
                Some(body) => Ok(body.clone()),
                None => Err(vera_http::Error::Status {
                    status: 500,
                    body: Vec::new(),
                }),
            }
        }
    }

    impl HttpClient for FakeHttp {
        async fn get(&self, path: &str) -> Result<Vec<u8>, vera_http::Error> {
            self.lookup(path)
        }

        async fn post_json(
            &self,
            path: &str,
            _body: Vec<u8>,
        ) -> Result<Vec<u8>, vera_http::Error> {
            self.lookup(path)
        }
    }

    fn report_body() -> serde_json::Value {
        serde_json::json!({
            "fact_checks": [{
                "claim": "X",
                "verdict": "false",
                "explanation": "contradicted",
                "source": "https://a.com"
            }],
            "overall_analysis": { "score": 40, "summary": "mostly wrong" }
        })
    }

    /// Submit through a real [`Workflow`], run the task against the fake
    /// transport, and feed every emitted event back in.
    async fn drive(http: FakeHttp, url: &str) -> (Workflow, Vec<String>) {
        let hits = http.hit_log();
        let client = Arc::new(VeracityClient::new(http));
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();

        let mut flow = Workflow::default();
        let Submit::Started { generation } = flow.submit(url) else {
            panic!("expected submission to start");
        };
        run_fact_check(client, tx, generation, url.to_owned()).await;

        while let Ok(event) = rx.try_recv() {
            match event {
                TaskEvent::Transcript { generation, result } => {
                    flow.transcript_received(generation, result);
                }
                TaskEvent::Report { generation, result } => {
                    flow.report_received(generation, result);
                }
                _ => panic!("unexpected event kind from fact-check task"),
            }
        }
        let hits = hits.lock().unwrap().clone();
        (flow, hits)
    }

    #[tokio::test]
    async fn end_to_end_happy_path_renders_one_danger_card() {
        let http = FakeHttp::new()
            .respond("/api/transcribe", serde_json::json!({ "transcript": "hello" }))
            .respond("/api/fact-check", report_body());

        let (flow, hits) = drive(http, "https://youtu.be/x").await;

        assert_eq!(flow.status(), ProcessingStatus::Done);
        let report = flow.report().unwrap();
        assert_eq!(report.fact_checks.len(), 1);
        assert_eq!(ScoreBand::of(report.overall.score), ScoreBand::Danger);
        assert_eq!(
            report.fact_checks[0].source_ref(),
            SourceRef::Link("https://a.com")
        );
        assert_eq!(hits, vec!["/api/transcribe", "/api/fact-check"]);
    }

    #[tokio::test]
    async fn empty_transcript_never_calls_fact_check() {
        let http = FakeHttp::new()
            .respond("/api/transcribe", serde_json::json!({ "transcript": "" }))
            .respond("/api/fact-check", report_body());

        let (flow, hits) = drive(http, "https://youtu.be/x").await;

        assert_eq!(flow.status(), ProcessingStatus::Error);
        assert_eq!(flow.error(), Some("Error: Transcription failed."));
        assert_eq!(hits, vec!["/api/transcribe"]);
    }

    #[tokio::test]
    async fn transcribe_failure_surfaces_status_line() {
        let http = FakeHttp::new(); // every path 500s

        let (flow, hits) = drive(http, "https://youtu.be/x").await;

        assert_eq!(flow.status(), ProcessingStatus::Error);
        assert_eq!(flow.error(), Some("Error: server returned status 500"));
        assert_eq!(hits, vec!["/api/transcribe"]);
    }
}
