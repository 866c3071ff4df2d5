use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Transport(vera_http::Error),

    /// Non-2xx response. `detail` is the backend's message when the body
    /// carried one, a generic status line otherwise.
    #[error("{detail}")]
    Api { status: u16, detail: String },

    #[error("malformed response: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<String>,
}

impl From<vera_http::Error> for Error {
    fn from(err: vera_http::Error) -> Self {
        match err {
            vera_http::Error::Status { status, body } => {
                let detail = serde_json::from_slice::<ErrorBody>(&body)
                    .ok()
                    .and_then(|b| b.detail)
                    .unwrap_or_else(|| format!("server returned status {status}"));
                Self::Api { status, detail }
            }
            other => Self::Transport(other),
        }
    }
}
