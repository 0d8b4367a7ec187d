use std::sync::mpsc;
use std::thread;

use gallery_core::{
    DownloadStatus, Effect, FetchFailed, Msg, Photo, PhotoUrls, SearchResults,
};
use gallery_engine::{
    DownloadJob, DownloadStage, EngineConfig, EngineError, EngineEvent, EngineHandle,
    PhotoRecord, SearchPage, SearchRequest,
};
use gallery_logging::{gallery_debug, gallery_info, gallery_warn};

use super::app::LoopEvent;

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(config: EngineConfig, loop_tx: mpsc::Sender<LoopEvent>) -> Result<Self, EngineError> {
        let (event_tx, event_rx) = mpsc::channel();
        let engine = EngineHandle::spawn(config, event_tx)?;
        spawn_event_forwarder(event_rx, loop_tx);
        Ok(Self { engine })
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchPage {
                    request_id,
                    query,
                    page,
                    per_page,
                } => {
                    gallery_info!(
                        "FetchPage request_id={} query={:?} page={}",
                        request_id,
                        query,
                        page
                    );
                    self.engine.search(
                        request_id,
                        SearchRequest {
                            query,
                            page,
                            per_page,
                        },
                    );
                }
                Effect::DownloadPhotos { items } => {
                    gallery_info!("DownloadPhotos count={}", items.len());
                    self.engine.download(
                        items
                            .into_iter()
                            .map(|item| DownloadJob {
                                photo_id: item.photo_id,
                                url: item.url,
                                name_hint: item.name_hint,
                            })
                            .collect(),
                    );
                }
            }
        }
    }
}

fn spawn_event_forwarder(event_rx: mpsc::Receiver<EngineEvent>, loop_tx: mpsc::Sender<LoopEvent>) {
    thread::spawn(move || {
        while let Ok(event) = event_rx.recv() {
            if loop_tx.send(LoopEvent::Core(map_event(event))).is_err() {
                break;
            }
        }
    });
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::SearchCompleted { request_id, result } => {
            let result = match result {
                Ok(page) => Ok(map_page(page)),
                Err(err) => {
                    gallery_warn!("Search request {} failed: {}", request_id, err);
                    Err(FetchFailed)
                }
            };
            Msg::SearchCompleted { request_id, result }
        }
        EngineEvent::Download(progress) => {
            let status = match progress.stage {
                DownloadStage::Started => DownloadStatus::InProgress,
                DownloadStage::Saved { path } => {
                    gallery_debug!("Photo {} saved to {:?}", progress.photo_id, path);
                    DownloadStatus::Saved
                }
                DownloadStage::Failed(_) => DownloadStatus::Failed,
            };
            Msg::DownloadProgress {
                photo_id: progress.photo_id,
                status,
            }
        }
    }
}

fn map_page(page: SearchPage) -> SearchResults {
    SearchResults {
        total_pages: page.total_pages,
        photos: page.results.into_iter().map(map_photo).collect(),
    }
}

fn map_photo(record: PhotoRecord) -> Photo {
    Photo {
        description: record.best_description().map(str::to_string),
        author_name: record.user.display_name().to_string(),
        id: record.id,
        urls: PhotoUrls {
            small: record.urls.small,
            regular: record.urls.regular,
            full: record.urls.full,
            raw: record.urls.raw,
        },
        source_link: record.links.html,
        width: record.width,
        height: record.height,
        likes: record.likes,
    }
}
