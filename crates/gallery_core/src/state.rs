use std::collections::BTreeMap;
use std::fmt;

use crate::view_model::{AppViewModel, PhotoCardView, ResultsStatus};
use crate::{
    Effect, Photo, PhotoId, SearchResults, CATEGORIES, DEFAULT_QUERY, FETCH_ERROR_MESSAGE,
    PER_PAGE,
};

/// Monotonic tag attached to every search request; only the latest is applied.
pub type RequestId = u64;

/// The single failure signal a search can produce. Causes are logged, not stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchFailed;

impl fmt::Display for FetchFailed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fetch failed")
    }
}

impl std::error::Error for FetchFailed {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadStatus {
    InProgress,
    Saved,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    pub query: String,
    pub page: u32,
    pub total_pages: u32,
    pub results: Vec<Photo>,
    pub loading: bool,
    pub error_message: Option<String>,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            query: String::new(),
            page: 1,
            total_pages: 0,
            results: Vec::new(),
            loading: false,
            error_message: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    input: String,
    search: SearchState,
    last_request_id: RequestId,
    has_completed_search: bool,
    downloads: BTreeMap<PhotoId, DownloadStatus>,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_query(DEFAULT_QUERY)
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// State whose first search (on `Msg::AppStarted`) uses `query`.
    pub fn with_query(query: &str) -> Self {
        let query = query.trim().to_string();
        Self {
            input: query.clone(),
            search: SearchState {
                query,
                ..SearchState::default()
            },
            last_request_id: 0,
            has_completed_search: false,
            downloads: BTreeMap::new(),
            dirty: false,
        }
    }

    pub fn search(&self) -> &SearchState {
        &self.search
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn view(&self) -> AppViewModel {
        let search = &self.search;
        let status = if search.loading {
            ResultsStatus::Loading
        } else if !search.results.is_empty() {
            ResultsStatus::Photos
        } else if self.has_completed_search {
            ResultsStatus::NoResults
        } else {
            ResultsStatus::NeverSearched
        };

        AppViewModel {
            input: self.input.clone(),
            query: search.query.clone(),
            page: search.page,
            total_pages: search.total_pages,
            loading: search.loading,
            error_message: search.error_message.clone(),
            status,
            can_previous: search.page > 1,
            can_next: search.page < search.total_pages,
            categories: CATEGORIES.iter().map(|c| c.to_string()).collect(),
            photos: search
                .results
                .iter()
                .enumerate()
                .map(|(index, photo)| PhotoCardView {
                    position: index + 1,
                    photo_id: photo.id.clone(),
                    description: photo.description.clone(),
                    author_name: photo.author_name.clone(),
                    thumbnail_url: photo.thumbnail_url().to_string(),
                    source_link: photo.source_link.clone(),
                    width: photo.width,
                    height: photo.height,
                    likes: photo.likes,
                    download: self.downloads.get(&photo.id).copied(),
                })
                .collect(),
            dirty: self.dirty,
        }
    }

    /// Returns whether anything visible changed since the last call, and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_input(&mut self, text: String) {
        if self.input != text {
            self.input = text;
            self.mark_dirty();
        }
    }

    /// Commits `text` as the active query and rewinds to page 1.
    /// Returns false (and changes nothing) for blank text.
    pub(crate) fn commit_query(&mut self, text: &str) -> bool {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.search.query = trimmed.to_string();
        self.search.page = 1;
        self.mark_dirty();
        true
    }

    pub(crate) fn is_page_reachable(&self, page: u32) -> bool {
        page >= 1 && (self.search.total_pages == 0 || page <= self.search.total_pages)
    }

    pub(crate) fn set_page(&mut self, page: u32) {
        if self.search.page != page {
            self.search.page = page;
            self.mark_dirty();
        }
    }

    /// Starts a search for the committed query and page.
    /// A blank query issues nothing and leaves `loading` alone.
    pub(crate) fn begin_fetch(&mut self) -> Option<Effect> {
        if self.search.query.is_empty() {
            return None;
        }
        self.last_request_id += 1;
        self.search.error_message = None;
        self.search.loading = true;
        self.mark_dirty();
        Some(Effect::FetchPage {
            request_id: self.last_request_id,
            query: self.search.query.clone(),
            page: self.search.page,
            per_page: PER_PAGE,
        })
    }

    /// Applies a completed search. Completions for superseded requests are ignored.
    ///
    /// If the response reports fewer pages than the requested one, its rows
    /// belong to no valid page: the page is clamped to the last one and a
    /// fetch for it is returned instead.
    pub(crate) fn apply_search_result(
        &mut self,
        request_id: RequestId,
        result: Result<SearchResults, FetchFailed>,
    ) -> Option<Effect> {
        if request_id != self.last_request_id || !self.search.loading {
            return None;
        }
        self.search.loading = false;
        self.mark_dirty();
        match result {
            Ok(results) => {
                self.search.total_pages = results.total_pages;
                if results.total_pages > 0 && self.search.page > results.total_pages {
                    self.search.page = results.total_pages;
                    return self.begin_fetch();
                }
                self.search.results = results.photos;
                self.has_completed_search = true;
                self.downloads
                    .retain(|_, status| *status == DownloadStatus::InProgress);
            }
            Err(FetchFailed) => {
                self.search.error_message = Some(FETCH_ERROR_MESSAGE.to_string());
            }
        }
        None
    }

    pub(crate) fn photo(&self, photo_id: &str) -> Option<&Photo> {
        self.search.results.iter().find(|photo| photo.id == photo_id)
    }

    pub(crate) fn photos(&self) -> &[Photo] {
        &self.search.results
    }

    pub(crate) fn is_downloading(&self, photo_id: &str) -> bool {
        self.downloads.get(photo_id) == Some(&DownloadStatus::InProgress)
    }

    pub(crate) fn set_download_status(&mut self, photo_id: PhotoId, status: DownloadStatus) {
        if self.downloads.insert(photo_id, status) != Some(status) {
            self.mark_dirty();
        }
    }

    pub fn download_status(&self, photo_id: &str) -> Option<DownloadStatus> {
        self.downloads.get(photo_id).copied()
    }
}
