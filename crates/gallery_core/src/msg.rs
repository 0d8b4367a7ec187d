use crate::{DownloadVariant, Photo, PhotoId, RequestId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Application finished starting; runs the initial search.
    AppStarted,
    /// User edited the search input.
    InputChanged(String),
    /// User submitted the current search input.
    QuerySubmitted,
    /// User clicked a category shortcut.
    CategorySelected(String),
    /// User asked for a specific page.
    PageRequested(u32),
    NextPageClicked,
    PreviousPageClicked,
    /// Engine completion for a search request.
    SearchCompleted {
        request_id: RequestId,
        result: Result<SearchResults, crate::FetchFailed>,
    },
    /// User asked to save one photo.
    DownloadRequested {
        photo_id: PhotoId,
        variant: DownloadVariant,
    },
    /// User asked to save every photo on the current page.
    DownloadAllRequested { variant: DownloadVariant },
    /// Engine progress for a single download.
    DownloadProgress {
        photo_id: PhotoId,
        status: crate::DownloadStatus,
    },
    /// UI/render tick.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}

/// One page of results as returned by the search API.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchResults {
    pub photos: Vec<Photo>,
    pub total_pages: u32,
}
