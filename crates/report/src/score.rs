/// Color band for the overall accuracy score. Pure step function; scores are
/// assumed 0–100 and deliberately not clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Success,
    Warning,
    Danger,
}

impl ScoreBand {
    pub fn of(score: i64) -> Self {
        if score >= 75 {
            Self::Success
        } else if score >= 50 {
            Self::Warning
        } else {
            Self::Danger
        }
    }
}
