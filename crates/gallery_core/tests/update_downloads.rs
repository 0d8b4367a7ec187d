use gallery_core::{
    update, AppState, DownloadItem, DownloadStatus, DownloadVariant, Effect, Msg, Photo,
    PhotoUrls, RequestId, SearchResults,
};
use pretty_assertions::assert_eq;

fn request_id_of(effects: &[Effect]) -> RequestId {
    match effects {
        [Effect::FetchPage { request_id, .. }] => *request_id,
        other => panic!("expected a single fetch, got {other:?}"),
    }
}

fn photo(id: &str, description: Option<&str>) -> Photo {
    Photo {
        id: id.to_string(),
        urls: PhotoUrls {
            small: format!("https://images.example.com/{id}?w=400"),
            regular: Some(format!("https://images.example.com/{id}?w=1080")),
            full: Some(format!("https://images.example.com/{id}?q=85")),
            raw: None,
        },
        description: description.map(str::to_string),
        ..Photo::default()
    }
}

fn loaded_state(photos: Vec<Photo>) -> AppState {
    let (state, effects) = update(AppState::new(), Msg::AppStarted);
    let (state, _) = update(
        state,
        Msg::SearchCompleted {
            request_id: request_id_of(&effects),
            result: Ok(SearchResults {
                photos,
                total_pages: 3,
            }),
        },
    );
    state
}

#[test]
fn download_all_emits_one_batch_in_result_order() {
    let state = loaded_state(vec![photo("a", Some("red fox")), photo("b", None)]);

    let (state, effects) = update(
        state,
        Msg::DownloadAllRequested {
            variant: DownloadVariant::Full,
        },
    );

    assert_eq!(
        effects,
        vec![Effect::DownloadPhotos {
            items: vec![
                DownloadItem {
                    photo_id: "a".into(),
                    url: "https://images.example.com/a?q=85".into(),
                    name_hint: Some("red fox".into()),
                },
                DownloadItem {
                    photo_id: "b".into(),
                    url: "https://images.example.com/b?q=85".into(),
                    name_hint: None,
                },
            ]
        }]
    );
    assert_eq!(state.download_status("a"), Some(DownloadStatus::InProgress));
    assert_eq!(state.download_status("b"), Some(DownloadStatus::InProgress));
}

#[test]
fn raw_variant_falls_back_to_full() {
    let state = loaded_state(vec![photo("a", None)]);
    let (_state, effects) = update(
        state,
        Msg::DownloadRequested {
            photo_id: "a".into(),
            variant: DownloadVariant::Raw,
        },
    );
    match &effects[..] {
        [Effect::DownloadPhotos { items }] => {
            assert_eq!(items[0].url, "https://images.example.com/a?q=85");
        }
        other => panic!("unexpected effects {other:?}"),
    }
}

#[test]
fn photos_in_progress_are_not_requested_twice() {
    let state = loaded_state(vec![photo("a", None), photo("b", None)]);
    let (state, _) = update(
        state,
        Msg::DownloadRequested {
            photo_id: "a".into(),
            variant: DownloadVariant::Regular,
        },
    );

    let (state, effects) = update(
        state,
        Msg::DownloadRequested {
            photo_id: "a".into(),
            variant: DownloadVariant::Regular,
        },
    );
    assert!(effects.is_empty());

    let (state, effects) = update(
        state,
        Msg::DownloadAllRequested {
            variant: DownloadVariant::Regular,
        },
    );
    match &effects[..] {
        [Effect::DownloadPhotos { items }] => {
            let ids: Vec<_> = items.iter().map(|item| item.photo_id.as_str()).collect();
            assert_eq!(ids, vec!["b"]);
        }
        other => panic!("unexpected effects {other:?}"),
    }

    let (_state, effects) = update(
        state,
        Msg::DownloadAllRequested {
            variant: DownloadVariant::Regular,
        },
    );
    assert!(effects.is_empty());
}

#[test]
fn unknown_photo_or_empty_page_emits_nothing() {
    let state = loaded_state(vec![photo("a", None)]);
    let (next, effects) = update(
        state.clone(),
        Msg::DownloadRequested {
            photo_id: "missing".into(),
            variant: DownloadVariant::Small,
        },
    );
    assert!(effects.is_empty());
    assert_eq!(next, state);

    let (_next, effects) = update(
        AppState::new(),
        Msg::DownloadAllRequested {
            variant: DownloadVariant::Small,
        },
    );
    assert!(effects.is_empty());
}

#[test]
fn download_progress_only_touches_flags() {
    let state = loaded_state(vec![photo("a", None), photo("b", None)]);
    let (state, _) = update(
        state,
        Msg::DownloadAllRequested {
            variant: DownloadVariant::Small,
        },
    );
    let search_before = state.search().clone();

    let (state, effects) = update(
        state,
        Msg::DownloadProgress {
            photo_id: "a".into(),
            status: DownloadStatus::Saved,
        },
    );
    let (state, _) = update(
        state,
        Msg::DownloadProgress {
            photo_id: "b".into(),
            status: DownloadStatus::Failed,
        },
    );

    assert!(effects.is_empty());
    assert_eq!(state.search(), &search_before);
    let flags: Vec<_> = state.view().photos.iter().map(|card| card.download).collect();
    assert_eq!(
        flags,
        vec![Some(DownloadStatus::Saved), Some(DownloadStatus::Failed)]
    );
}

#[test]
fn new_results_drop_finished_flags_but_keep_in_progress() {
    let state = loaded_state(vec![photo("a", None), photo("b", None)]);
    let (state, _) = update(
        state,
        Msg::DownloadAllRequested {
            variant: DownloadVariant::Small,
        },
    );
    let (state, _) = update(
        state,
        Msg::DownloadProgress {
            photo_id: "a".into(),
            status: DownloadStatus::Saved,
        },
    );

    let (state, effects) = update(state, Msg::NextPageClicked);
    let (state, _) = update(
        state,
        Msg::SearchCompleted {
            request_id: request_id_of(&effects),
            result: Ok(SearchResults {
                photos: vec![photo("a", None), photo("b", None)],
                total_pages: 3,
            }),
        },
    );

    assert_eq!(state.download_status("a"), None);
    assert_eq!(state.download_status("b"), Some(DownloadStatus::InProgress));
}
