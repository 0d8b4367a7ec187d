use gallery_core::{
    update, AppState, Effect, Msg, Photo, PhotoUrls, RequestId, ResultsStatus, SearchResults,
};

fn search_with_pages(total_pages: u32) -> AppState {
    let (state, effects) = update(AppState::new(), Msg::AppStarted);
    let request_id = request_id_of(&effects);
    let (mut state, _) = update(
        state,
        Msg::SearchCompleted {
            request_id,
            result: Ok(SearchResults {
                photos: Vec::new(),
                total_pages,
            }),
        },
    );
    state.consume_dirty();
    state
}

fn request_id_of(effects: &[Effect]) -> RequestId {
    match effects {
        [Effect::FetchPage { request_id, .. }] => *request_id,
        other => panic!("expected a single fetch, got {other:?}"),
    }
}

fn sample_photo(id: &str) -> Photo {
    Photo {
        id: id.to_string(),
        urls: PhotoUrls {
            small: format!("https://images.example.com/{id}?w=400"),
            ..PhotoUrls::default()
        },
        description: None,
        author_name: "Ada".to_string(),
        source_link: format!("https://example.com/photos/{id}"),
        width: 640,
        height: 480,
        likes: 0,
    }
}

fn fetched_page(effects: &[Effect]) -> u32 {
    match effects {
        [Effect::FetchPage { page, .. }] => *page,
        other => panic!("expected a single fetch, got {other:?}"),
    }
}

#[test]
fn out_of_range_pages_are_noops() {
    let state = search_with_pages(5);

    for page in [0, 6, 7, u32::MAX] {
        let (mut next, effects) = update(state.clone(), Msg::PageRequested(page));
        assert!(effects.is_empty(), "page {page} should be rejected");
        assert_eq!(next, state);
        assert!(!next.search().loading);
        assert!(!next.consume_dirty());
    }
}

#[test]
fn page_within_range_fetches_existing_query() {
    let state = search_with_pages(5);

    let (next, effects) = update(state, Msg::PageRequested(5));
    assert_eq!(next.search().page, 5);
    assert!(next.search().loading);
    match &effects[..] {
        [Effect::FetchPage { query, page, .. }] => {
            assert_eq!(query, "nature");
            assert_eq!(*page, 5);
        }
        other => panic!("unexpected effects {other:?}"),
    }
}

#[test]
fn previous_on_first_page_is_noop() {
    let state = search_with_pages(5);
    let (next, effects) = update(state.clone(), Msg::PreviousPageClicked);
    assert!(effects.is_empty());
    assert_eq!(next, state);
}

#[test]
fn next_on_last_page_is_noop() {
    let state = search_with_pages(2);
    let (state, effects) = update(state, Msg::NextPageClicked);
    assert_eq!(fetched_page(&effects), 2);
    let (mut state, _) = update(
        state,
        Msg::SearchCompleted {
            request_id: request_id_of(&effects),
            result: Ok(SearchResults {
                photos: Vec::new(),
                total_pages: 2,
            }),
        },
    );
    state.consume_dirty();

    let view = state.view();
    assert!(!view.can_next);
    assert!(view.can_previous);

    let (next, effects) = update(state.clone(), Msg::NextPageClicked);
    assert!(effects.is_empty());
    assert_eq!(next, state);

    let (_next, effects) = update(state, Msg::PreviousPageClicked);
    assert_eq!(fetched_page(&effects), 1);
}

#[test]
fn unknown_total_allows_any_positive_page() {
    let state = AppState::new();
    assert_eq!(state.search().total_pages, 0);

    let (next, effects) = update(state, Msg::PageRequested(3));
    assert_eq!(fetched_page(&effects), 3);
    assert_eq!(next.search().page, 3);
}

#[test]
fn page_is_clamped_when_total_shrinks() {
    let state = search_with_pages(5);
    let (state, effects) = update(state, Msg::PageRequested(4));
    let (state, effects) = update(
        state,
        Msg::SearchCompleted {
            request_id: request_id_of(&effects),
            result: Ok(SearchResults {
                photos: Vec::new(),
                total_pages: 3,
            }),
        },
    );

    assert_eq!(state.search().total_pages, 3);
    assert_eq!(state.search().page, 3);
    assert_eq!(fetched_page(&effects), 3);
    assert!(state.search().loading);
    assert!(!state.view().can_next);
}

#[test]
fn jump_past_unknown_total_refetches_last_page() {
    let (state, effects) = update(AppState::new(), Msg::AppStarted);
    let first = request_id_of(&effects);
    let (state, effects) = update(state, Msg::PageRequested(9));
    let jump = request_id_of(&effects);
    assert!(jump > first);

    let (state, effects) = update(
        state,
        Msg::SearchCompleted {
            request_id: jump,
            result: Ok(SearchResults {
                photos: Vec::new(),
                total_pages: 5,
            }),
        },
    );
    assert_eq!(fetched_page(&effects), 5);
    let refetch = request_id_of(&effects);
    assert_eq!(state.search().page, 5);
    assert_eq!(state.view().status, ResultsStatus::Loading);

    let (state, effects) = update(
        state,
        Msg::SearchCompleted {
            request_id: refetch,
            result: Ok(SearchResults {
                photos: vec![sample_photo("p5")],
                total_pages: 5,
            }),
        },
    );
    assert!(effects.is_empty());
    assert_eq!(state.search().page, 5);
    assert_eq!(state.view().status, ResultsStatus::Photos);
}

#[test]
fn next_is_ignored_while_total_is_unknown() {
    let state = search_with_pages(0);

    let (mut next, effects) = update(state.clone(), Msg::NextPageClicked);

    assert!(effects.is_empty());
    assert!(!next.consume_dirty());
    assert_eq!(next.search(), state.search());
    assert!(!next.view().can_next);
}
