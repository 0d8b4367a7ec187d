use gallery_core::{AppViewModel, DownloadVariant, Msg, CATEGORIES};

use super::constants::COMMAND_PREFIX;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadTarget {
    All,
    /// 1-based position on the current page.
    Position(usize),
}

/// One line typed at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    Search(String),
    Category(String),
    NextPage,
    PreviousPage,
    GoToPage(u32),
    Download(DownloadTarget),
    ShowCategories,
    Help,
    Quit,
    Invalid(String),
}

/// What the event loop should do with a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Dispatch(Vec<Msg>),
    Print(Vec<String>),
    Quit,
}

pub fn parse_line(line: &str) -> UiCommand {
    let line = line.trim();
    let Some(rest) = line.strip_prefix(COMMAND_PREFIX) else {
        return UiCommand::Search(line.to_string());
    };

    let (name, arg) = match rest.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (rest, ""),
    };

    match name.to_ascii_lowercase().as_str() {
        "n" | "next" => UiCommand::NextPage,
        "p" | "prev" | "previous" => UiCommand::PreviousPage,
        "page" => match arg.parse::<u32>() {
            Ok(page) => UiCommand::GoToPage(page),
            Err(_) => UiCommand::Invalid(format!("not a page number: {arg:?}")),
        },
        "c" | "cat" | "category" => parse_category(arg),
        "categories" => UiCommand::ShowCategories,
        "d" | "download" => parse_download(arg),
        "h" | "help" | "?" => UiCommand::Help,
        "q" | "quit" | "exit" => UiCommand::Quit,
        other => UiCommand::Invalid(format!("unknown command :{other}")),
    }
}

fn parse_category(arg: &str) -> UiCommand {
    if arg.is_empty() {
        return UiCommand::ShowCategories;
    }
    if let Ok(index) = arg.parse::<usize>() {
        return match index.checked_sub(1).and_then(|i| CATEGORIES.get(i)) {
            Some(name) => UiCommand::Category(name.to_string()),
            None => UiCommand::Invalid(format!("no category number {index}")),
        };
    }
    UiCommand::Category(arg.to_string())
}

fn parse_download(arg: &str) -> UiCommand {
    if arg.is_empty() || arg.eq_ignore_ascii_case("all") {
        return UiCommand::Download(DownloadTarget::All);
    }
    match arg.parse::<usize>() {
        Ok(position) if position > 0 => UiCommand::Download(DownloadTarget::Position(position)),
        _ => UiCommand::Invalid(format!("not a photo number: {arg:?}")),
    }
}

/// Turns a command into core messages, using `view` to resolve photo numbers.
pub fn translate(command: UiCommand, view: &AppViewModel, variant: DownloadVariant) -> Action {
    match command {
        UiCommand::Search(text) => {
            Action::Dispatch(vec![Msg::InputChanged(text), Msg::QuerySubmitted])
        }
        UiCommand::Category(name) => Action::Dispatch(vec![Msg::CategorySelected(name)]),
        UiCommand::NextPage => Action::Dispatch(vec![Msg::NextPageClicked]),
        UiCommand::PreviousPage => Action::Dispatch(vec![Msg::PreviousPageClicked]),
        UiCommand::GoToPage(page) => Action::Dispatch(vec![Msg::PageRequested(page)]),
        UiCommand::Download(DownloadTarget::All) => {
            Action::Dispatch(vec![Msg::DownloadAllRequested { variant }])
        }
        UiCommand::Download(DownloadTarget::Position(position)) => {
            match view.photos.iter().find(|card| card.position == position) {
                Some(card) => Action::Dispatch(vec![Msg::DownloadRequested {
                    photo_id: card.photo_id.clone(),
                    variant,
                }]),
                None => Action::Print(vec![format!("No photo number {position} on this page.")]),
            }
        }
        UiCommand::ShowCategories => Action::Print(super::render::category_lines(view)),
        UiCommand::Help => Action::Print(super::render::help_lines()),
        UiCommand::Quit => Action::Quit,
        UiCommand::Invalid(reason) => Action::Print(vec![reason, "Type :help for commands.".into()]),
    }
}
