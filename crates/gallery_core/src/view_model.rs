use crate::{DownloadStatus, PhotoId};

/// What the results area should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResultsStatus {
    /// No search has completed yet.
    #[default]
    NeverSearched,
    Loading,
    /// The last search completed with zero photos.
    NoResults,
    Photos,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub input: String,
    pub query: String,
    pub page: u32,
    pub total_pages: u32,
    pub loading: bool,
    pub error_message: Option<String>,
    pub status: ResultsStatus,
    pub can_previous: bool,
    pub can_next: bool,
    pub categories: Vec<String>,
    pub photos: Vec<PhotoCardView>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoCardView {
    /// 1-based position on the current page.
    pub position: usize,
    pub photo_id: PhotoId,
    pub description: Option<String>,
    pub author_name: String,
    pub thumbnail_url: String,
    pub source_link: String,
    pub width: u32,
    pub height: u32,
    pub likes: u32,
    pub download: Option<DownloadStatus>,
}
