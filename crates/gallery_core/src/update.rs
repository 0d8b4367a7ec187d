use crate::{AppState, DownloadItem, DownloadStatus, DownloadVariant, Effect, Msg, Photo};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::AppStarted => state.begin_fetch().into_iter().collect(),
        Msg::InputChanged(text) => {
            state.set_input(text);
            Vec::new()
        }
        Msg::QuerySubmitted => {
            let text = state.input().to_string();
            submit_query(&mut state, &text)
        }
        Msg::CategorySelected(name) => {
            if name.trim().is_empty() {
                return (state, Vec::new());
            }
            state.set_input(name.clone());
            submit_query(&mut state, &name)
        }
        Msg::PageRequested(page) => go_to_page(&mut state, page),
        Msg::NextPageClicked => {
            let search = state.search();
            if search.page >= search.total_pages {
                return (state, Vec::new());
            }
            let next = search.page + 1;
            go_to_page(&mut state, next)
        }
        Msg::PreviousPageClicked => {
            let previous = state.search().page.saturating_sub(1);
            go_to_page(&mut state, previous)
        }
        Msg::SearchCompleted { request_id, result } => state
            .apply_search_result(request_id, result)
            .into_iter()
            .collect(),
        Msg::DownloadRequested { photo_id, variant } => {
            let item = state
                .photo(&photo_id)
                .filter(|photo| !state.is_downloading(&photo.id))
                .map(|photo| download_item(photo, variant));
            match item {
                Some(item) => start_downloads(&mut state, vec![item]),
                None => Vec::new(),
            }
        }
        Msg::DownloadAllRequested { variant } => {
            let items: Vec<DownloadItem> = state
                .photos()
                .iter()
                .filter(|photo| !state.is_downloading(&photo.id))
                .map(|photo| download_item(photo, variant))
                .collect();
            start_downloads(&mut state, items)
        }
        Msg::DownloadProgress { photo_id, status } => {
            state.set_download_status(photo_id, status);
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn submit_query(state: &mut AppState, text: &str) -> Vec<Effect> {
    if !state.commit_query(text) {
        return Vec::new();
    }
    state.begin_fetch().into_iter().collect()
}

fn go_to_page(state: &mut AppState, page: u32) -> Vec<Effect> {
    if !state.is_page_reachable(page) {
        return Vec::new();
    }
    state.set_page(page);
    state.begin_fetch().into_iter().collect()
}

fn download_item(photo: &Photo, variant: DownloadVariant) -> DownloadItem {
    DownloadItem {
        photo_id: photo.id.clone(),
        url: photo.urls.for_variant(variant).to_string(),
        name_hint: photo.description.clone(),
    }
}

fn start_downloads(state: &mut AppState, items: Vec<DownloadItem>) -> Vec<Effect> {
    if items.is_empty() {
        return Vec::new();
    }
    for item in &items {
        state.set_download_status(item.photo_id.clone(), DownloadStatus::InProgress);
    }
    vec![Effect::DownloadPhotos { items }]
}
