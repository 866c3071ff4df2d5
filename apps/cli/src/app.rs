use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc::UnboundedSender;
use tokio_util::sync::CancellationToken;

use vera_client::VeracityClient;
use vera_http::HttpClient;
use vera_report::workflow::Workflow;
use vera_report::{Claim, Segment, SourceRef, VerificationResult, segment};

use crate::tasks::{self, TaskEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Analysis,
    Verification,
}

impl Page {
    pub fn title(self) -> &'static str {
        match self {
            Self::Home => "Fact-Check",
            Self::Analysis => "Analysis",
            Self::Verification => "Verification",
        }
    }

    fn next(self) -> Self {
        match self {
            Self::Home => Self::Analysis,
            Self::Analysis => Self::Verification,
            Self::Verification => Self::Home,
        }
    }

    fn prev(self) -> Self {
        match self {
            Self::Home => Self::Verification,
            Self::Analysis => Self::Home,
            Self::Verification => Self::Analysis,
        }
    }
}

/// URL input plus the two-step workflow and its result cards.
pub struct HomeState {
    pub input: String,
    pub workflow: Workflow,
    pub selected: usize,
    cancel: Option<CancellationToken>,
}

/// Per-claim summary fetched on demand from the Analysis page.
pub enum SummarySlot {
    Empty,
    Loading { claim_id: String },
    Ready { claim_id: String, summary: String },
    Failed(String),
}

pub struct AnalysisState {
    pub input: String,
    pub loading: bool,
    pub error: Option<String>,
    pub claims: Vec<Claim>,
    pub summaries: Vec<String>,
    pub segments: Vec<Segment>,
    pub selected: usize,
    pub summary: SummarySlot,
}

/// Loading / error / list states; fetched once, no refresh mechanism.
pub enum VerificationState {
    Idle,
    Loading,
    Ready(Vec<VerificationResult>),
    Failed(String),
}

pub struct App<C: HttpClient> {
    pub page: Page,
    pub home: HomeState,
    pub analysis: AnalysisState,
    pub verification: VerificationState,
    pub should_quit: bool,
    client: Arc<VeracityClient<C>>,
    tx: UnboundedSender<TaskEvent>,
}

impl<C: HttpClient + 'static> App<C> {
    pub fn new(client: Arc<VeracityClient<C>>, tx: UnboundedSender<TaskEvent>) -> Self {
        Self {
            page: Page::Home,
            home: HomeState {
                input: String::new(),
                workflow: Workflow::default(),
                selected: 0,
                cancel: None,
            },
            analysis: AnalysisState {
                input: String::new(),
                loading: false,
                error: None,
                claims: Vec::new(),
                summaries: Vec::new(),
                segments: Vec::new(),
                selected: 0,
                summary: SummarySlot::Empty,
            },
            verification: VerificationState::Idle,
            should_quit: false,
            client,
            tx,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            KeyCode::Tab => {
                self.goto(self.page.next());
                return;
            }
            KeyCode::BackTab => {
                self.goto(self.page.prev());
                return;
            }
            _ => {}
        }

        match self.page {
            Page::Home => self.handle_home_key(key),
            Page::Analysis => self.handle_analysis_key(key),
            Page::Verification => {}
        }
    }

    fn goto(&mut self, page: Page) {
        self.page = page;
        if page == Page::Verification {
            self.mount_verification();
        }
    }

    fn handle_home_key(&mut self, key: KeyEvent) {
        let processing = self.home.workflow.is_processing();
        match key.code {
            KeyCode::Char('o') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.open_selected_source();
            }
            // input and submit are disabled while a request is pending
            KeyCode::Char(c) if !processing && !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.home.input.push(c);
            }
            KeyCode::Backspace if !processing => {
                self.home.input.pop();
            }
            KeyCode::Enter if !processing => self.submit_home(),
            KeyCode::Up => {
                self.home.selected = self.home.selected.saturating_sub(1);
            }
            KeyCode::Down => {
                let cards = self
                    .home
                    .workflow
                    .report()
                    .map(|r| r.fact_checks.len())
                    .unwrap_or(0);
                if cards > 0 && self.home.selected + 1 < cards {
                    self.home.selected += 1;
                }
            }
            _ => {}
        }
    }

    fn handle_analysis_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.fetch_selected_summary();
            }
            KeyCode::Char(c)
                if !self.analysis.loading && !key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                self.analysis.input.push(c);
            }
            KeyCode::Backspace if !self.analysis.loading => {
                self.analysis.input.pop();
            }
            KeyCode::Enter if !self.analysis.loading => self.submit_analysis(),
            KeyCode::Up => {
                self.analysis.selected = self.analysis.selected.saturating_sub(1);
            }
            KeyCode::Down => {
                if !self.analysis.claims.is_empty()
                    && self.analysis.selected + 1 < self.analysis.claims.len()
                {
                    self.analysis.selected += 1;
                }
            }
            _ => {}
        }
    }

    fn submit_home(&mut self) {
        match self.home.workflow.submit(&self.home.input) {
            vera_report::Submit::Rejected => {}
            vera_report::Submit::Started { generation } => {
                // a resubmission supersedes any in-flight request
                if let Some(previous) = self.home.cancel.take() {
                    previous.cancel();
                }
                let cancel = CancellationToken::new();
                self.home.cancel = Some(cancel.clone());
                self.home.selected = 0;
                tasks::spawn_fact_check(
                    self.client.clone(),
                    self.tx.clone(),
                    cancel,
                    generation,
                    self.home.input.clone(),
                );
            }
        }
    }

    fn submit_analysis(&mut self) {
        if self.analysis.input.trim().is_empty() {
            return;
        }
        self.analysis.loading = true;
        self.analysis.error = None;
        tasks::spawn_analyze(
            self.client.clone(),
            self.tx.clone(),
            self.analysis.input.clone(),
        );
    }

    /// Fetch-once on entering the page, for the claims of the most recent
    /// analysis. Stays idle until an analysis has produced claims.
    fn mount_verification(&mut self) {
        if !matches!(self.verification, VerificationState::Idle) {
            return;
        }
        if self.analysis.claims.is_empty() {
            return;
        }
        self.verification = VerificationState::Loading;
        let claim_ids = self.analysis.claims.iter().map(|c| c.id.clone()).collect();
        tasks::spawn_verification(self.client.clone(), self.tx.clone(), claim_ids);
    }

    fn fetch_selected_summary(&mut self) {
        if matches!(self.analysis.summary, SummarySlot::Loading { .. }) {
            return;
        }
        let Some(claim) = self.analysis.claims.get(self.analysis.selected) else {
            return;
        };
        let claim_id = claim.id.clone();
        self.analysis.summary = SummarySlot::Loading {
            claim_id: claim_id.clone(),
        };
        tasks::spawn_summary(self.client.clone(), self.tx.clone(), claim_id);
    }

    fn open_selected_source(&mut self) {
        let Some(report) = self.home.workflow.report() else {
            return;
        };
        let Some(check) = report.fact_checks.get(self.home.selected) else {
            return;
        };
        if let SourceRef::Link(url) = check.source_ref() {
            if let Err(err) = open::that(url) {
                tracing::warn!(url, %err, "failed to open source link");
            }
        }
    }

    pub fn handle_task_event(&mut self, event: TaskEvent) {
        match event {
            TaskEvent::Transcript { generation, result } => {
                self.home.workflow.transcript_received(generation, result);
            }
            TaskEvent::Report { generation, result } => {
                self.home.workflow.report_received(generation, result);
                self.home.selected = 0;
            }
            TaskEvent::Analysis { result } => {
                self.analysis.loading = false;
                match result {
                    Ok(response) => {
                        self.analysis.claims = response.claims;
                        self.analysis.summaries = response.summaries;
                        self.analysis.segments =
                            segment(&self.analysis.input, &self.analysis.claims);
                        self.analysis.selected = 0;
                        self.analysis.summary = SummarySlot::Empty;
                        self.analysis.error = None;
                        // a new claim set invalidates the old verification list
                        self.verification = VerificationState::Idle;
                    }
                    Err(message) => self.analysis.error = Some(message),
                }
            }
            TaskEvent::Verification { result } => {
                if matches!(self.verification, VerificationState::Loading) {
                    self.verification = match result {
                        Ok(results) => VerificationState::Ready(results),
                        Err(message) => VerificationState::Failed(message),
                    };
                }
            }
            TaskEvent::Summary { claim_id, result } => {
                let expected = match &self.analysis.summary {
                    SummarySlot::Loading { claim_id: id } => *id == claim_id,
                    _ => false,
                };
                if expected {
                    self.analysis.summary = match result {
                        Ok(summary) => SummarySlot::Ready { claim_id, summary },
                        Err(message) => SummarySlot::Failed(message),
                    };
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vera_client::AnalyzeResponse;
    use vera_http::ReqwestClient;
    use vera_report::workflow::MSG_EMPTY_URL;
    use vera_report::{OverallAnalysis, ProcessingStatus, ReportPayload};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn test_app() -> (
        App<ReqwestClient>,
        tokio::sync::mpsc::UnboundedReceiver<TaskEvent>,
    ) {
        let (tx, rx) = tokio::sync::mpsc::unbounded_channel();
        // nothing listens here; tasks fail fast if ever spawned
        let client = Arc::new(VeracityClient::new(ReqwestClient::new("http://127.0.0.1:9")));
        (App::new(client, tx), rx)
    }

    #[test]
    fn tab_cycles_pages_both_ways() {
        let (mut app, _rx) = test_app();
        assert_eq!(app.page, Page::Home);
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.page, Page::Analysis);
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.page, Page::Verification);
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.page, Page::Home);
        app.handle_key(key(KeyCode::BackTab));
        assert_eq!(app.page, Page::Verification);
    }

    #[test]
    fn typing_edits_the_url_input() {
        let (mut app, _rx) = test_app();
        for c in "youtu".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Backspace));
        assert_eq!(app.home.input, "yout");
    }

    #[test]
    fn empty_url_submit_sets_message_and_issues_no_request() {
        let (mut app, mut rx) = test_app();
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.home.workflow.status(), ProcessingStatus::Idle);
        assert_eq!(app.home.workflow.error(), Some(MSG_EMPTY_URL));
        assert!(rx.try_recv().is_err(), "no task may be spawned");
    }

    #[tokio::test]
    async fn input_is_disabled_while_processing() {
        let (mut app, _rx) = test_app();
        app.home.input = "https://youtu.be/x".to_owned();
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.home.workflow.status(), ProcessingStatus::Transcribing);

        app.handle_key(key(KeyCode::Char('z')));
        app.handle_key(key(KeyCode::Backspace));
        assert_eq!(app.home.input, "https://youtu.be/x");
    }

    #[tokio::test]
    async fn resubmission_cancels_the_previous_token() {
        let (mut app, _rx) = test_app();
        app.home.input = "https://youtu.be/x".to_owned();
        app.handle_key(key(KeyCode::Enter));
        let first = app.home.cancel.clone().unwrap();

        // finish the attempt so the workflow accepts a resubmission
        let generation = app.home.workflow.generation();
        app.handle_task_event(TaskEvent::Transcript {
            generation,
            result: Err("boom".into()),
        });
        app.handle_key(key(KeyCode::Enter));
        assert!(first.is_cancelled());
    }

    #[test]
    fn analysis_result_segments_input_and_resets_verification() {
        let (mut app, _rx) = test_app();
        app.verification = VerificationState::Failed("old".into());
        app.analysis.input = "the earth is flat, truly".to_owned();
        app.handle_task_event(TaskEvent::Analysis {
            result: Ok(AnalyzeResponse {
                claims: vec![Claim {
                    id: "c1".into(),
                    text: "earth is flat".into(),
                }],
                summaries: vec!["s".into()],
            }),
        });

        assert!(matches!(app.verification, VerificationState::Idle));
        assert_eq!(app.analysis.segments.len(), 3);
        assert_eq!(app.analysis.segments[1].claim_id.as_deref(), Some("c1"));
    }

    #[tokio::test]
    async fn entering_verification_with_claims_starts_the_fetch() {
        let (mut app, mut rx) = test_app();
        app.analysis.claims = vec![Claim {
            id: "c1".into(),
            text: "t".into(),
        }];
        app.handle_key(key(KeyCode::Tab)); // Analysis
        app.handle_key(key(KeyCode::Tab)); // Verification
        assert!(matches!(app.verification, VerificationState::Loading));

        // eventually the task reports; simulate the failure it will hit
        app.handle_task_event(TaskEvent::Verification {
            result: Err("Failed to fetch verification results".into()),
        });
        assert!(matches!(app.verification, VerificationState::Failed(_)));
        let _ = rx; // the spawned task owns the sender clone
    }

    #[test]
    fn entering_verification_without_claims_stays_idle() {
        let (mut app, _rx) = test_app();
        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Tab));
        assert!(matches!(app.verification, VerificationState::Idle));
    }

    #[test]
    fn stale_summary_result_is_dropped() {
        let (mut app, _rx) = test_app();
        app.analysis.summary = SummarySlot::Loading {
            claim_id: "c2".into(),
        };
        app.handle_task_event(TaskEvent::Summary {
            claim_id: "c1".into(),
            result: Ok("stale".into()),
        });
        assert!(matches!(app.analysis.summary, SummarySlot::Loading { .. }));
    }

    #[test]
    fn card_selection_stays_in_bounds() {
        let (mut app, _rx) = test_app();
        app.home.workflow.submit("https://youtu.be/x");
        let generation = app.home.workflow.generation();
        app.home
            .workflow
            .transcript_received(generation, Ok("hello".into()));
        app.home.workflow.report_received(
            generation,
            Ok(ReportPayload {
                fact_checks: Some(vec![
                    vera_report::FactCheck {
                        claim: "a".into(),
                        verdict: "true".into(),
                        explanation: "e".into(),
                        source: "s".into(),
                    },
                    vera_report::FactCheck {
                        claim: "b".into(),
                        verdict: "false".into(),
                        explanation: "e".into(),
                        source: "s".into(),
                    },
                ]),
                overall_analysis: Some(OverallAnalysis {
                    score: 80,
                    summary: "fine".into(),
                }),
            }),
        );

        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Down));
        assert_eq!(app.home.selected, 1);
        app.handle_key(key(KeyCode::Up));
        app.handle_key(key(KeyCode::Up));
        assert_eq!(app.home.selected, 0);
    }
}
