mod client;
mod error;
mod types;

pub use client::VeracityClient;
pub use error::Error;
pub use types::{AnalyzeResponse, SummaryResponse, TranscribeResponse};
