/// Fixed number of photos requested per page.
pub const PER_PAGE: u32 = 20;

/// Query issued automatically when the application starts.
pub const DEFAULT_QUERY: &str = "nature";

/// Advisory shown after a failed fetch; the cause only goes to the log.
pub const FETCH_ERROR_MESSAGE: &str = "Error fetching images. Try again later.";

/// Preset queries offered as shortcuts next to the search input.
pub const CATEGORIES: &[&str] = &[
    "nature",
    "technology",
    "animals",
    "travel",
    "food",
    "sports",
    "art",
    "architecture",
];
