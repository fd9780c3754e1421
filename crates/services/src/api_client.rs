use std::env;

use async_trait::async_trait;
use quiz_core::CertificateRequest;
use quiz_core::model::{Level, Mode, Question};
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;
use url::Url;

use crate::error::ApiError;

pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8080";

#[derive(Clone, Debug)]
pub struct ApiConfig {
    base_url: Url,
}

impl ApiConfig {
    /// # Errors
    ///
    /// Returns `ApiError::InvalidUrl` when `raw` is not an absolute URL.
    pub fn new(raw: &str) -> Result<Self, ApiError> {
        let base_url = Url::parse(raw.trim()).map_err(|source| ApiError::InvalidUrl {
            raw: raw.to_string(),
            source,
        })?;
        Ok(Self { base_url })
    }

    /// Reads `QUIZ_SERVER_URL`, falling back to the local development server.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidUrl` when the variable holds an invalid URL.
    pub fn from_env() -> Result<Self, ApiError> {
        let raw = env::var("QUIZ_SERVER_URL")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SERVER_URL.into());
        Self::new(&raw)
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// Reply to `POST /api/certificate`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CertificateReply {
    Ack { ok: bool, error: Option<String> },
    /// The server renders the PDF inline when no email address was given.
    Pdf(Vec<u8>),
}

/// The two endpoints the quiz talks to.
#[async_trait]
pub trait QuizApi: Send + Sync {
    async fn fetch_questions(&self, mode: Mode, level: &Level) -> Result<Vec<Question>, ApiError>;

    async fn request_certificate(
        &self,
        request: &CertificateRequest,
    ) -> Result<CertificateReply, ApiError>;
}

#[derive(Clone)]
pub struct HttpQuizApi {
    client: Client,
    config: ApiConfig,
}

impl HttpQuizApi {
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }
}

#[async_trait]
impl QuizApi for HttpQuizApi {
    async fn fetch_questions(&self, mode: Mode, level: &Level) -> Result<Vec<Question>, ApiError> {
        let url = self.config.endpoint("api/questions");
        tracing::debug!(%url, %mode, %level, "fetching questions");

        let response = self
            .client
            .get(url)
            .query(&[("mode", mode.as_str()), ("level", level.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiError::HttpStatus(response.status()));
        }

        let questions: Vec<Question> = response.json().await?;
        Ok(questions)
    }

    async fn request_certificate(
        &self,
        request: &CertificateRequest,
    ) -> Result<CertificateReply, ApiError> {
        let url = self.config.endpoint("api/certificate");
        tracing::debug!(%url, score = request.score, total = request.total, "requesting certificate");

        let response = self.client.post(url).json(request).send().await?;

        if !response.status().is_success() {
            return Err(ApiError::HttpStatus(response.status()));
        }

        let is_pdf = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("application/pdf"));
        if is_pdf {
            let bytes = response.bytes().await?;
            return Ok(CertificateReply::Pdf(bytes.to_vec()));
        }

        let body: CertificateAck = response.json().await?;
        Ok(CertificateReply::Ack {
            ok: body.ok,
            error: body.error,
        })
    }
}

#[derive(Debug, Deserialize)]
struct CertificateAck {
    ok: bool,
    #[serde(default)]
    error: Option<String>,
}
