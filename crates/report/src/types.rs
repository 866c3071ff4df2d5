use crate::verdict::Verdict;

/// One fact-checked claim as the backend reports it. Never mutated after
/// arrival; a new submission replaces the whole set.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FactCheck {
    pub claim: String,
    pub verdict: String,
    pub explanation: String,
    pub source: String,
}

impl FactCheck {
    pub fn verdict_kind(&self) -> Verdict {
        Verdict::classify(&self.verdict)
    }

    pub fn source_ref(&self) -> SourceRef<'_> {
        SourceRef::classify(&self.source)
    }
}

/// Aggregate score (0–100 by contract, passed through unclamped) plus a
/// natural-language summary over all claims in one submission.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OverallAnalysis {
    pub score: i64,
    pub summary: String,
}

/// A validated fact-check report: both halves are guaranteed present.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub overall: OverallAnalysis,
    pub fact_checks: Vec<FactCheck>,
}

/// A discrete factual assertion extracted from input content.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Claim {
    pub id: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VerificationResult {
    pub claim: String,
    pub evidence: String,
    #[serde(default)]
    pub citations: Vec<String>,
}

/// How a source string should be rendered: an external link only when it is
/// syntactically an http(s) URL, plain text otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceRef<'a> {
    Link(&'a str),
    Text(&'a str),
}

impl<'a> SourceRef<'a> {
    pub fn classify(raw: &'a str) -> Self {
        if raw.starts_with("http://") || raw.starts_with("https://") {
            Self::Link(raw)
        } else {
            Self::Text(raw)
        }
    }

    pub fn url(&self) -> Option<&'a str> {
        match self {
            Self::Link(url) => Some(url),
            Self::Text(_) => None,
        }
    }
}
