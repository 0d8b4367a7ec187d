use crate::{PhotoId, RequestId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchPage {
        request_id: RequestId,
        query: String,
        page: u32,
        per_page: u32,
    },
    DownloadPhotos { items: Vec<DownloadItem> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadItem {
    pub photo_id: PhotoId,
    pub url: String,
    /// Human readable name used to derive the saved filename.
    pub name_hint: Option<String>,
}
