//! Gallery core: pure search state machine and view-model helpers.
mod category;
mod effect;
mod msg;
mod photo;
mod state;
mod update;
mod view_model;

pub use category::{CATEGORIES, DEFAULT_QUERY, FETCH_ERROR_MESSAGE, PER_PAGE};
pub use effect::{DownloadItem, Effect};
pub use msg::{Msg, SearchResults};
pub use photo::{DownloadVariant, Photo, PhotoId, PhotoUrls};
pub use state::{AppState, DownloadStatus, FetchFailed, RequestId, SearchState};
pub use update::update;
pub use view_model::{AppViewModel, PhotoCardView, ResultsStatus};
