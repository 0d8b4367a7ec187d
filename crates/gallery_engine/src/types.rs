use std::fmt;
use std::path::PathBuf;

use serde::Deserialize;

pub type RequestId = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    pub page: u32,
    pub per_page: u32,
}

/// Body of a `search/photos` response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchPage {
    pub total_pages: u32,
    pub results: Vec<PhotoRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PhotoRecord {
    pub id: String,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub likes: u32,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub alt_description: Option<String>,
    pub urls: PhotoUrlSet,
    #[serde(default)]
    pub user: UserRecord,
    #[serde(default)]
    pub links: PhotoLinks,
}

impl PhotoRecord {
    /// Alt text if present, otherwise the free-form description.
    pub fn best_description(&self) -> Option<&str> {
        self.alt_description
            .as_deref()
            .or(self.description.as_deref())
            .map(str::trim)
            .filter(|text| !text.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PhotoUrlSet {
    pub small: String,
    #[serde(default)]
    pub regular: Option<String>,
    #[serde(default)]
    pub full: Option<String>,
    #[serde(default)]
    pub raw: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct UserRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
}

impl UserRecord {
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.username.as_deref())
            .unwrap_or("Unknown")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct PhotoLinks {
    #[serde(default)]
    pub html: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadJob {
    pub photo_id: String,
    pub url: String,
    pub name_hint: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadStage {
    Started,
    Saved { path: PathBuf },
    Failed(FetchError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadProgress {
    pub photo_id: String,
    pub stage: DownloadStage,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    SearchCompleted {
        request_id: RequestId,
        result: Result<SearchPage, FetchError>,
    },
    Download(DownloadProgress),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    MissingCredential,
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    MalformedPayload,
    Persist,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::MissingCredential => write!(f, "missing client id"),
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::MalformedPayload => write!(f, "malformed payload"),
            FailureKind::Persist => write!(f, "could not save file"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}
