use std::future::Future;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),
    /// Non-2xx response. The body is kept verbatim so callers can pull a
    /// structured message out of it (the backend puts one under `detail`).
    #[error("server returned status {status}")]
    Status { status: u16, body: Vec<u8> },
}

pub trait HttpClient: Send + Sync {
    fn get(&self, path: &str) -> impl Future<Output = Result<Vec<u8>, Error>> + Send;

    fn post_json(
        &self,
        path: &str,
        body: Vec<u8>,
    ) -> impl Future<Output = Result<Vec<u8>, Error>> + Send;
}

/// [`HttpClient`] bound to a fixed base URL, no retry and no timeout override.
#[derive(Clone)]
pub struct ReqwestClient {
    base: String,
    client: reqwest::Client,
}

impl ReqwestClient {
    pub fn new(base: impl Into<String>) -> Self {
        let base: String = base.into();
        Self {
            base: base.trim_end_matches('/').to_owned(),
            client: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    async fn read(response: reqwest::Response) -> Result<Vec<u8>, Error> {
        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::Transport(Box::new(e)))?;
        if status.is_success() {
            Ok(bytes.to_vec())
        } else {
            Err(Error::Status {
                status: status.as_u16(),
                body: bytes.to_vec(),
            })
        }
    }
}

impl HttpClient for ReqwestClient {
    async fn get(&self, path: &str) -> Result<Vec<u8>, Error> {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(|e| Error::Transport(Box::new(e)))?;
        Self::read(response).await
    }

    async fn post_json(&self, path: &str, body: Vec<u8>) -> Result<Vec<u8>, Error> {
        let response = self
            .client
            .post(self.url(path))
            .header("content-type", "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| Error::Transport(Box::new(e)))?;
        Self::read(response).await
    }
}
