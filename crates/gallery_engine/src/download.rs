use std::path::PathBuf;
use std::time::Duration;

use gallery_logging::{gallery_info, gallery_warn};

use crate::persist::DownloadDir;
use crate::{
    image_filename, DownloadJob, DownloadProgress, DownloadStage, EngineEvent, FailureKind,
    FetchError, ImageFetcher,
};

/// Pause between consecutive images of one batch.
pub const DEFAULT_DOWNLOAD_DELAY: Duration = Duration::from_millis(300);

#[derive(Debug, Clone)]
pub struct DownloadSettings {
    pub output_dir: PathBuf,
    pub delay: Duration,
}

impl DownloadSettings {
    pub fn new(output_dir: PathBuf) -> Self {
        Self {
            output_dir,
            delay: DEFAULT_DOWNLOAD_DELAY,
        }
    }
}

pub trait ProgressSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

pub struct ChannelProgressSink {
    tx: std::sync::mpsc::Sender<EngineEvent>,
}

impl ChannelProgressSink {
    pub fn new(tx: std::sync::mpsc::Sender<EngineEvent>) -> Self {
        Self { tx }
    }
}

impl ProgressSink for ChannelProgressSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(event);
    }
}

/// Downloads `jobs` one after another, pausing `settings.delay` between items.
/// Returns how many images were saved.
///
/// If the output directory cannot be used, nothing is fetched and every job
/// is reported as failed.
pub async fn download_batch(
    fetcher: &dyn ImageFetcher,
    settings: &DownloadSettings,
    jobs: Vec<DownloadJob>,
    sink: &dyn ProgressSink,
) -> usize {
    let dir = match DownloadDir::open(&settings.output_dir) {
        Ok(dir) => dir,
        Err(err) => {
            gallery_warn!("Dropping batch of {} images: {}", jobs.len(), err);
            let err = FetchError::new(FailureKind::Persist, err.to_string());
            for job in jobs {
                report(sink, &job.photo_id, DownloadStage::Started);
                report(sink, &job.photo_id, DownloadStage::Failed(err.clone()));
            }
            return 0;
        }
    };
    let total = jobs.len();
    let mut saved = 0;

    for (index, job) in jobs.into_iter().enumerate() {
        if index > 0 && !settings.delay.is_zero() {
            tokio::time::sleep(settings.delay).await;
        }
        report(sink, &job.photo_id, DownloadStage::Started);

        let stage = match download_one(fetcher, &dir, &job).await {
            Ok(path) => {
                saved += 1;
                DownloadStage::Saved { path }
            }
            Err(err) => {
                gallery_warn!("Download of photo {} failed: {}", job.photo_id, err);
                DownloadStage::Failed(err)
            }
        };
        report(sink, &job.photo_id, stage);
    }

    gallery_info!(
        "Saved {} of {} images to {:?}",
        saved,
        total,
        dir.path()
    );
    saved
}

fn report(sink: &dyn ProgressSink, photo_id: &str, stage: DownloadStage) {
    sink.emit(EngineEvent::Download(DownloadProgress {
        photo_id: photo_id.to_string(),
        stage,
    }));
}

async fn download_one(
    fetcher: &dyn ImageFetcher,
    dir: &DownloadDir,
    job: &DownloadJob,
) -> Result<PathBuf, FetchError> {
    let body = fetcher.fetch_image(&job.url).await?;
    let filename = image_filename(
        job.name_hint.as_deref(),
        &job.photo_id,
        &job.url,
        body.content_type.as_deref(),
    );
    dir.save_image(&filename, &body.bytes)
        .map_err(|err| FetchError::new(FailureKind::Persist, err.to_string()))
}
