use std::time::Duration;

use futures_util::StreamExt;
use gallery_logging::gallery_debug;
use reqwest::header::CONTENT_TYPE;
use url::Url;

use crate::{FailureKind, FetchError, SearchPage, SearchRequest};

pub const DEFAULT_ENDPOINT: &str = "https://api.unsplash.com/search/photos";

#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub endpoint: String,
    pub client_id: Option<String>,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    /// Limit for a search response body.
    pub max_bytes: u64,
    /// Limit for a single downloaded image.
    pub max_image_bytes: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            client_id: None,
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_bytes: 8 * 1024 * 1024,
            max_image_bytes: 64 * 1024 * 1024,
        }
    }
}

/// Read-only photo search endpoint.
#[async_trait::async_trait]
pub trait PhotoSearchApi: Send + Sync {
    async fn search(&self, request: &SearchRequest) -> Result<SearchPage, FetchError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedBody {
    pub bytes: Vec<u8>,
    pub content_type: Option<String>,
}

#[async_trait::async_trait]
pub trait ImageFetcher: Send + Sync {
    async fn fetch_image(&self, url: &str) -> Result<FetchedBody, FetchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestPhotoClient {
    settings: ApiSettings,
    client: reqwest::Client,
}

impl ReqwestPhotoClient {
    pub fn new(settings: ApiSettings) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }

    /// Full request URL, including the credential, for `request`.
    pub fn search_url(&self, request: &SearchRequest) -> Result<Url, FetchError> {
        let client_id = self
            .settings
            .client_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| FetchError::new(FailureKind::MissingCredential, "no client id set"))?;

        Url::parse_with_params(
            &self.settings.endpoint,
            [
                ("query", request.query.clone()),
                ("page", request.page.to_string()),
                ("per_page", request.per_page.to_string()),
                ("client_id", client_id.to_string()),
            ],
        )
        .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))
    }

    async fn get_body(&self, url: Url, max_bytes: u64) -> Result<FetchedBody, FetchError> {
        let response = self
            .client
            .get(url)
            .header("Accept-Version", "v1")
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        if let Some(content_len) = response.content_length() {
            if content_len > max_bytes {
                return Err(FetchError::new(
                    FailureKind::TooLarge {
                        max_bytes,
                        actual: Some(content_len),
                    },
                    "response too large",
                ));
            }
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string());

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > max_bytes {
                return Err(FetchError::new(
                    FailureKind::TooLarge {
                        max_bytes,
                        actual: Some(next_len),
                    },
                    "response too large",
                ));
            }
            bytes.extend_from_slice(&chunk);
        }

        Ok(FetchedBody {
            bytes,
            content_type,
        })
    }
}

#[async_trait::async_trait]
impl PhotoSearchApi for ReqwestPhotoClient {
    async fn search(&self, request: &SearchRequest) -> Result<SearchPage, FetchError> {
        let url = self.search_url(request)?;
        gallery_debug!(
            "search query={:?} page={} per_page={}",
            request.query,
            request.page,
            request.per_page
        );
        let body = self.get_body(url, self.settings.max_bytes).await?;
        let page: SearchPage = serde_json::from_slice(&body.bytes)
            .map_err(|err| FetchError::new(FailureKind::MalformedPayload, err.to_string()))?;
        gallery_debug!(
            "search query={:?} page={} returned {} results of {} pages",
            request.query,
            request.page,
            page.results.len(),
            page.total_pages
        );
        Ok(page)
    }
}

#[async_trait::async_trait]
impl ImageFetcher for ReqwestPhotoClient {
    async fn fetch_image(&self, url: &str) -> Result<FetchedBody, FetchError> {
        let parsed = Url::parse(url)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
        self.get_body(parsed, self.settings.max_image_bytes).await
    }
}

/// The request URL carries the client id, so it never goes into the message.
fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    let kind = if err.is_timeout() {
        FailureKind::Timeout
    } else if err.is_decode() {
        FailureKind::MalformedPayload
    } else {
        FailureKind::Network
    };
    FetchError::new(kind, err.without_url().to_string())
}
