//! HTTP access to the core and agent origins.
//!
//! One attempt per call: no retries, no back-off. Every failure, whether a
//! transport error, a non-2xx status, or a body that is not JSON, comes back
//! as a [`NetworkError`] so callers can branch on a single error type.

use std::time::Duration;

use reqwest::{Client, Method, Url};
use serde_json::Value;
use social_agent_core::AppConfig;

use crate::error::{ContentError, NetworkError};

/// Which backend a request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Origin {
    Core,
    Agent,
}

impl std::fmt::Display for Origin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Origin::Core => write!(f, "core"),
            Origin::Agent => write!(f, "agent"),
        }
    }
}

/// Thin JSON client over the two configured origins.
pub struct HttpGateway {
    client: Client,
    core_url: String,
    agent_url: String,
}

impl HttpGateway {
    /// Creates a gateway for the given origins.
    ///
    /// `timeout_secs = None` leaves requests without a deadline.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::InvalidOrigin`] if either base URL does not
    /// parse, or [`ContentError::Http`] if the `reqwest::Client` cannot be
    /// constructed.
    pub fn new(
        core_url: &str,
        agent_url: &str,
        user_agent: &str,
        timeout_secs: Option<u64>,
    ) -> Result<Self, ContentError> {
        let mut builder = Client::builder().user_agent(user_agent);
        if let Some(secs) = timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            core_url: normalise_origin(core_url)?,
            agent_url: normalise_origin(agent_url)?,
        })
    }

    /// Builds a gateway from the loaded application config.
    ///
    /// # Errors
    ///
    /// See [`HttpGateway::new`].
    pub fn from_config(config: &AppConfig) -> Result<Self, ContentError> {
        Self::new(
            &config.api_url,
            &config.agent_url,
            &config.user_agent,
            config.request_timeout_secs,
        )
    }

    #[must_use]
    pub fn base_url(&self, origin: Origin) -> &str {
        match origin {
            Origin::Core => &self.core_url,
            Origin::Agent => &self.agent_url,
        }
    }

    fn endpoint(&self, origin: Origin, path: &str) -> String {
        format!("{}/{}", self.base_url(origin), path.trim_start_matches('/'))
    }

    /// Issues one request and returns the parsed JSON body verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError`] on transport failure, a non-2xx status, or a
    /// body that is not valid JSON.
    pub async fn call(
        &self,
        origin: Origin,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Value, NetworkError> {
        let url = self.endpoint(origin, path);
        let failure = |status: Option<u16>, reason: String| NetworkError {
            method: method.to_string(),
            path: path.to_string(),
            status,
            reason,
        };

        let mut request = self.client.request(method.clone(), &url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| failure(None, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(failure(
                Some(status.as_u16()),
                format!("unexpected HTTP status {status}"),
            ));
        }

        let text = response
            .text()
            .await
            .map_err(|e| failure(None, e.to_string()))?;

        let value = serde_json::from_str(&text)
            .map_err(|e| failure(None, format!("response body is not JSON: {e}")))?;

        tracing::debug!(%origin, %method, path, "remote call succeeded");
        Ok(value)
    }
}

/// Validates a base URL and strips trailing slashes so paths join cleanly.
fn normalise_origin(raw: &str) -> Result<String, ContentError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let url = Url::parse(trimmed).map_err(|e| ContentError::InvalidOrigin {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ContentError::InvalidOrigin {
            url: raw.to_string(),
            reason: format!("unsupported scheme '{}'", url.scheme()),
        });
    }
    Ok(trimmed.to_string())
}
