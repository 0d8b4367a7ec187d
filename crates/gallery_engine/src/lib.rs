//! Gallery engine: photo search client, image downloads and effect execution.
mod api;
mod download;
mod engine;
mod filename;
mod persist;
mod types;

pub use api::{
    ApiSettings, FetchedBody, ImageFetcher, PhotoSearchApi, ReqwestPhotoClient, DEFAULT_ENDPOINT,
};
pub use download::{
    download_batch, ChannelProgressSink, DownloadSettings, ProgressSink, DEFAULT_DOWNLOAD_DELAY,
};
pub use engine::{run_search, EngineConfig, EngineError, EngineHandle};
pub use filename::image_filename;
pub use persist::{DownloadDir, PersistError};
pub use types::{
    DownloadJob, DownloadProgress, DownloadStage, EngineEvent, FailureKind, FetchError,
    PhotoLinks, PhotoRecord, PhotoUrlSet, RequestId, SearchPage, SearchRequest, UserRecord,
};
