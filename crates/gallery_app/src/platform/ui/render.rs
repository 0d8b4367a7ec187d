use gallery_core::{AppViewModel, DownloadStatus, PhotoCardView, ResultsStatus};

use super::constants::*;

/// Renders the whole screen as text lines, headed by `stamp`.
pub fn render(view: &AppViewModel, stamp: &str) -> Vec<String> {
    let mut lines = Vec::new();

    let page_text = if view.total_pages > 0 {
        format!("page {}/{}", view.page, view.total_pages)
    } else {
        format!("page {}", view.page)
    };
    let query = if view.query.is_empty() {
        "(none)"
    } else {
        view.query.as_str()
    };
    lines.push(format!("[{stamp}] Query: {query} | {page_text}"));

    if let Some(error) = &view.error_message {
        lines.push(format!("! {error}"));
    }

    match view.status {
        ResultsStatus::NeverSearched => lines.push(NEVER_SEARCHED_TEXT.to_string()),
        ResultsStatus::Loading => lines.push(LOADING_TEXT.to_string()),
        ResultsStatus::NoResults => lines.push(NO_RESULTS_TEXT.to_string()),
        ResultsStatus::Photos => {
            lines.extend(view.photos.iter().map(format_card));
            lines.push(pagination_line(view));
        }
    }

    lines
}

fn pagination_line(view: &AppViewModel) -> String {
    let previous = if view.can_previous {
        "[:prev] Previous"
    } else {
        "( Previous )"
    };
    let next = if view.can_next {
        "[:next] Next"
    } else {
        "( Next )"
    };
    format!("{previous}   {next}")
}

fn format_card(card: &PhotoCardView) -> String {
    let description = card
        .description
        .as_deref()
        .unwrap_or(NO_DESCRIPTION_TEXT);
    let flag = match card.download {
        Some(DownloadStatus::InProgress) => " [downloading]",
        Some(DownloadStatus::Saved) => " [saved]",
        Some(DownloadStatus::Failed) => " [download failed]",
        None => "",
    };
    format!(
        "{pos:>2}. {description} by {author} ({w}x{h}, {likes} likes){flag}\n    {thumb}",
        pos = card.position,
        author = card.author_name,
        w = card.width,
        h = card.height,
        likes = card.likes,
        thumb = card.thumbnail_url,
    )
}

pub fn category_lines(view: &AppViewModel) -> Vec<String> {
    let list = view
        .categories
        .iter()
        .enumerate()
        .map(|(i, name)| format!("{}:{name}", i + 1))
        .collect::<Vec<_>>()
        .join("  ");
    vec![format!("Categories: {list}"), "Pick one with :cat NAME or :cat NUMBER".into()]
}

pub fn help_lines() -> Vec<String> {
    [
        "TEXT            search for TEXT (resets to page 1)",
        ":next / :prev   move one page forward / back",
        ":page N         jump to page N",
        ":cat NAME|N     search a preset category",
        ":categories     list preset categories",
        ":download N     save photo N of this page",
        ":download all   save every photo on this page",
        ":help           show this help",
        ":quit           exit",
    ]
    .iter()
    .map(|line| line.to_string())
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(position: usize, description: Option<&str>) -> PhotoCardView {
        PhotoCardView {
            position,
            photo_id: format!("id{position}"),
            description: description.map(str::to_string),
            author_name: "Jane Doe".into(),
            thumbnail_url: format!("https://images.example.com/{position}"),
            source_link: String::new(),
            width: 4000,
            height: 3000,
            likes: 5,
            download: None,
        }
    }

    #[test]
    fn first_page_shows_cards_and_only_next() {
        let view = AppViewModel {
            query: "nature".into(),
            page: 1,
            total_pages: 5,
            status: ResultsStatus::Photos,
            can_next: true,
            photos: vec![card(1, Some("green forest")), card(2, None)],
            ..AppViewModel::default()
        };

        let lines = render(&view, "12:00:00");
        assert_eq!(lines[0], "[12:00:00] Query: nature | page 1/5");
        assert!(lines[1].starts_with(" 1. green forest by Jane Doe (4000x3000, 5 likes)"));
        assert!(lines[2].contains(NO_DESCRIPTION_TEXT));
        assert_eq!(lines[3], "( Previous )   [:next] Next");
    }

    #[test]
    fn no_results_differs_from_never_searched() {
        let never = render(&AppViewModel::default(), "t");
        let empty = render(
            &AppViewModel {
                query: "xyzzynotfound".into(),
                page: 1,
                status: ResultsStatus::NoResults,
                ..AppViewModel::default()
            },
            "t",
        );
        assert!(never.iter().any(|line| line == NEVER_SEARCHED_TEXT));
        assert!(empty.iter().any(|line| line == NO_RESULTS_TEXT));
        assert!(!empty.iter().any(|line| line == NEVER_SEARCHED_TEXT));
    }

    #[test]
    fn error_is_shown_above_stale_results() {
        let view = AppViewModel {
            query: "nature".into(),
            page: 2,
            total_pages: 5,
            status: ResultsStatus::Photos,
            error_message: Some("Error fetching images. Try again later.".into()),
            photos: vec![card(1, None)],
            ..AppViewModel::default()
        };
        let lines = render(&view, "t");
        assert_eq!(lines[1], "! Error fetching images. Try again later.");
        assert!(lines[2].starts_with(" 1."));
    }

    #[test]
    fn download_flags_are_rendered() {
        let mut saving = card(1, None);
        saving.download = Some(DownloadStatus::InProgress);
        assert!(format_card(&saving).contains("[downloading]"));
        saving.download = Some(DownloadStatus::Saved);
        assert!(format_card(&saving).contains("[saved]"));
    }

    #[test]
    fn categories_are_numbered() {
        let view = AppViewModel {
            categories: vec!["nature".into(), "art".into()],
            ..AppViewModel::default()
        };
        assert_eq!(category_lines(&view)[0], "Categories: 1:nature  2:art");
    }
}
