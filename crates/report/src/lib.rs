pub mod highlight;
pub mod score;
pub mod types;
pub mod verdict;
pub mod workflow;

pub use highlight::{Segment, segment};
pub use score::ScoreBand;
pub use types::{Claim, FactCheck, OverallAnalysis, Report, SourceRef, VerificationResult};
pub use verdict::Verdict;
pub use workflow::{ProcessingStatus, ReportPayload, Submit, Workflow};
