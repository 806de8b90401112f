//! HTTP client and external command abstractions for testability

use std::time::Duration;

use async_trait::async_trait;

/// HTTP response from a request
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Abstraction over HTTP client for dependency injection
#[async_trait]
#[cfg_attr(test, mockall::automock)]
pub trait HttpClient: Send + Sync {
    /// Send a GET request and return the status code. The body is discarded.
    async fn get(&self, url: &str) -> crate::Result<u16>;

    /// Send a POST request with a JSON body
    async fn post_json(&self, url: &str, body: &serde_json::Value) -> crate::Result<HttpResponse>;
}

/// Production HTTP client using reqwest
///
/// Every request is bounded by the timeout given at construction.
#[derive(Debug)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    pub fn with_timeout(timeout: Duration) -> crate::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| crate::DnsNotifyError::Http(format!("Building HTTP client: {}", e)))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get(&self, url: &str) -> crate::Result<u16> {
        tracing::debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| crate::DnsNotifyError::Http(format!("GET {} failed: {}", url, e)))?;

        let status = response.status().as_u16();
        drop(response);

        tracing::debug!("GET {} -> {}", url, status);
        Ok(status)
    }

    async fn post_json(&self, url: &str, body: &serde_json::Value) -> crate::Result<HttpResponse> {
        tracing::debug!("POST {}", url);
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| crate::DnsNotifyError::Http(format!("POST {} failed: {}", url, e)))?;

        // The response already arrived; a broken body does not undo delivery.
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_else(|e| {
            tracing::debug!("POST {}: reading response body failed: {}", url, e);
            String::new()
        });

        tracing::debug!("POST {} -> {} ({} bytes)", url, status, body.len());
        Ok(HttpResponse { status, body })
    }
}

/// Runs an external program to completion
#[async_trait]
#[cfg_attr(test, mockall::automock)]
pub trait CommandRunner: Send + Sync {
    /// Run `program` with `args`. A spawn failure or non-zero exit is an error.
    async fn run(&self, program: &str, args: &[String]) -> crate::Result<()>;
}

/// Tokio implementation of CommandRunner
#[derive(Debug, Default, Clone)]
pub struct TokioCommandRunner;

#[async_trait]
impl CommandRunner for TokioCommandRunner {
    async fn run(&self, program: &str, args: &[String]) -> crate::Result<()> {
        tracing::debug!("Running {} {:?}", program, args);
        let status = tokio::process::Command::new(program)
            .args(args)
            .status()
            .await
            .map_err(|e| {
                crate::DnsNotifyError::Command(format!("{} could not be started: {}", program, e))
            })?;

        if !status.success() {
            return Err(crate::DnsNotifyError::Command(format!(
                "{} exited with {}",
                program, status
            )));
        }
        Ok(())
    }
}
