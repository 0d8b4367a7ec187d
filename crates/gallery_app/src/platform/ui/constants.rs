pub const PROMPT: &str = "search> ";
pub const COMMAND_PREFIX: char = ':';
pub const LOADING_TEXT: &str = "Loading beautiful images...";
pub const NO_RESULTS_TEXT: &str = "No images found. Try a different search term.";
pub const NEVER_SEARCHED_TEXT: &str = "Type something to search, or pick a category.";
pub const NO_DESCRIPTION_TEXT: &str = "No description available";
