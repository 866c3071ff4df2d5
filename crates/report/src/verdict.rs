/// Style classification for a verdict string. The backend is free-form here;
/// anything outside the three known values falls back to [`Verdict::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Verdict {
    True,
    False,
    Misleading,
    Other,
}

impl Verdict {
    pub fn classify(raw: &str) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "true" => Self::True,
            "false" => Self::False,
            "misleading" => Self::Misleading,
            _ => Self::Other,
        }
    }
}
