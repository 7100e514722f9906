//! Base access layer
//!
//! Every entity repository delegates to [`BaseRepository`], which owns the
//! HTTP client and the base URL. Each call is one request: no retries, and
//! no timeout beyond what the underlying `reqwest::Client` enforces.
//!
//! Paths are given as segments (`&["Study", "by-client", id]`). Each segment
//! is percent-encoded on its own, so an id can never change which resource
//! is addressed.

use reqwest::{Client, Method, Response, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::ApiConfig;
use crate::error::{ClientError, Result};

/// Shared HTTP access for all TrialDesk repositories
///
/// Cloning is cheap: clones share the same connection pool.
#[derive(Debug, Clone)]
pub struct BaseRepository {
    /// Base URL of the API, without a trailing slash
    base_url: String,
    /// HTTP client instance
    client: Client,
}

impl BaseRepository {
    /// Create a new base repository
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the API (e.g., "http://localhost:5000")
    ///
    /// # Example
    /// ```
    /// use trialdesk_client::BaseRepository;
    ///
    /// let base = BaseRepository::new("http://localhost:5000/");
    /// assert_eq!(base.base_url(), "http://localhost:5000");
    /// ```
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Create a new base repository with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Create a base repository from a validated configuration
    pub fn from_config(config: &ApiConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config.base_url.clone()))
    }

    /// Get the base URL of the API
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for a path relative to the base URL
    ///
    /// Empty, `.` and `..` segments are rejected: `["Client", ""]` would
    /// otherwise address the collection instead of a record.
    pub fn url(&self, path: &[&str]) -> Result<Url> {
        if let Some(segment) = path
            .iter()
            .find(|segment| matches!(**segment, "" | "." | ".."))
        {
            return Err(ClientError::InvalidRequest(format!(
                "invalid path segment {segment:?} in /{}",
                path.join("/")
            )));
        }

        let mut url = Url::parse(&self.base_url)
            .map_err(|e| ClientError::InvalidConfig(format!("invalid base URL: {e}")))?;
        url.path_segments_mut()
            .map_err(|_| {
                ClientError::InvalidConfig(format!(
                    "base URL cannot carry a path: {}",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .extend(path);

        Ok(url)
    }

    // =============================================================================
    // Requests
    // =============================================================================

    /// Issue a GET and decode the response body
    pub async fn get<T: DeserializeOwned>(&self, path: &[&str]) -> Result<T> {
        let response = self.send(Method::GET, path, None::<&()>).await?;
        Self::handle_response(response).await
    }

    /// Issue a POST with a JSON body and decode the response body
    pub async fn post<T, B>(&self, path: &[&str], body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self.send(Method::POST, path, Some(body)).await?;
        Self::handle_response(response).await
    }

    /// Issue a PUT with a JSON body and decode the response body
    pub async fn put<T, B>(&self, path: &[&str], body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self.send(Method::PUT, path, Some(body)).await?;
        Self::handle_response(response).await
    }

    /// Issue a PUT with a JSON body, discarding whatever the API returns
    pub async fn put_empty<B>(&self, path: &[&str], body: &B) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        let response = self.send(Method::PUT, path, Some(body)).await?;
        Self::handle_empty_response(response).await
    }

    /// Issue a DELETE and decode the response body
    pub async fn delete<T: DeserializeOwned>(&self, path: &[&str]) -> Result<T> {
        let response = self.send(Method::DELETE, path, None::<&()>).await?;
        Self::handle_response(response).await
    }

    /// Issue a DELETE, discarding whatever the API returns
    pub async fn delete_empty(&self, path: &[&str]) -> Result<()> {
        let response = self.send(Method::DELETE, path, None::<&()>).await?;
        Self::handle_empty_response(response).await
    }

    async fn send<B>(&self, method: Method, path: &[&str], body: Option<&B>) -> Result<Response>
    where
        B: Serialize + ?Sized,
    {
        let url = self.url(path)?;
        debug!(%method, %url, "sending request");

        let mut request = self.client.request(method, url);
        if let Some(body) = body {
            request = request.json(body);
        }

        Ok(request.send().await?)
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Check the status code and decode the JSON body
    ///
    /// A body that cannot be read is a network error; a body that does not
    /// parse as `T` is a decode error.
    async fn handle_response<T: DeserializeOwned>(response: Response) -> Result<T> {
        let response = Self::check_status(response).await?;
        let text = response.text().await?;

        Ok(serde_json::from_str(&text)?)
    }

    /// Check the status code and drop the body
    async fn handle_empty_response(response: Response) -> Result<()> {
        Self::check_status(response).await?;
        Ok(())
    }

    async fn check_status(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let url = response.url().to_string();
        let body = response.text().await.ok().filter(|text| !text.is_empty());
        warn!(status = status.as_u16(), %url, "API returned error status");

        Err(ClientError::http_status(status.as_u16(), body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_creation() {
        let base = BaseRepository::new("http://localhost:5000");
        assert_eq!(base.base_url(), "http://localhost:5000");
    }

    #[test]
    fn test_base_trims_trailing_slash() {
        let base = BaseRepository::new("http://localhost:5000/api//");
        assert_eq!(base.base_url(), "http://localhost:5000/api");
        assert_eq!(
            base.url(&["Client", "c1"]).unwrap().as_str(),
            "http://localhost:5000/api/Client/c1"
        );
    }

    #[test]
    fn test_url_encodes_each_segment() {
        let base = BaseRepository::new("http://localhost:5000");
        let url = |id: &str| base.url(&["Client", id]).unwrap().to_string();

        assert_eq!(url("a?x=1"), "http://localhost:5000/Client/a%3Fx=1");
        assert_eq!(url("a/b"), "http://localhost:5000/Client/a%2Fb");
        assert_eq!(url("a#frag"), "http://localhost:5000/Client/a%23frag");
        assert_eq!(url("50%"), "http://localhost:5000/Client/50%25");
    }

    #[test]
    fn test_url_rejects_empty_segment() {
        let base = BaseRepository::new("http://localhost:5000");
        let err = base.url(&["Client", ""]).unwrap_err();
        assert!(matches!(err, ClientError::InvalidRequest(_)));

        let err = base.url(&["Client", ".."]).unwrap_err();
        assert!(matches!(err, ClientError::InvalidRequest(_)));
    }

    #[test]
    fn test_url_rejects_unparseable_base() {
        let base = BaseRepository::new("not a url");
        let err = base.url(&["Client"]).unwrap_err();
        assert!(matches!(err, ClientError::InvalidConfig(_)));
    }

    #[test]
    fn test_base_with_custom_client() {
        let base = BaseRepository::with_client("http://localhost:5000", Client::new());
        assert_eq!(base.base_url(), "http://localhost:5000");
    }

    #[test]
    fn test_from_config_rejects_invalid_url() {
        let err = BaseRepository::from_config(&ApiConfig::new("ftp://files")).unwrap_err();
        assert!(matches!(err, ClientError::InvalidConfig(_)));
    }
}
