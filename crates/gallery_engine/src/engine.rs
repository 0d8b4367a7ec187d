use std::sync::{mpsc, Arc};
use std::thread;

use gallery_logging::{gallery_debug, gallery_error};
use tokio::sync::mpsc as async_mpsc;

use crate::download::{download_batch, ChannelProgressSink, DownloadSettings};
use crate::{
    ApiSettings, DownloadJob, EngineEvent, FetchError, PhotoSearchApi, ReqwestPhotoClient,
    RequestId, SearchRequest,
};

#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub api: ApiSettings,
    pub downloads: DownloadSettings,
}

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("could not start async runtime: {0}")]
    Runtime(#[from] std::io::Error),
    #[error("could not build http client: {0}")]
    Client(#[from] FetchError),
}

enum EngineCommand {
    Search {
        request_id: RequestId,
        request: SearchRequest,
    },
    Download {
        jobs: Vec<DownloadJob>,
    },
}

/// Handle to the IO thread. Searches run concurrently; download batches are
/// queued and run one at a time.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn spawn(
        config: EngineConfig,
        event_tx: mpsc::Sender<EngineEvent>,
    ) -> Result<Self, EngineError> {
        let client = Arc::new(ReqwestPhotoClient::new(config.api)?);
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()?;
        let (cmd_tx, cmd_rx) = mpsc::channel();

        thread::spawn(move || {
            let (download_tx, mut download_rx) = async_mpsc::unbounded_channel::<Vec<DownloadJob>>();
            {
                let client = client.clone();
                let sink = ChannelProgressSink::new(event_tx.clone());
                let settings = config.downloads;
                runtime.spawn(async move {
                    while let Some(jobs) = download_rx.recv().await {
                        download_batch(client.as_ref(), &settings, jobs, &sink).await;
                    }
                });
            }

            while let Ok(command) = cmd_rx.recv() {
                match command {
                    EngineCommand::Search {
                        request_id,
                        request,
                    } => {
                        let client = client.clone();
                        let event_tx = event_tx.clone();
                        runtime.spawn(async move {
                            run_search(client.as_ref(), request_id, request, event_tx).await;
                        });
                    }
                    EngineCommand::Download { jobs } => {
                        if download_tx.send(jobs).is_err() {
                            gallery_error!("Download worker stopped; batch dropped");
                        }
                    }
                }
            }
            gallery_debug!("Engine command channel closed; shutting down");
        });

        Ok(Self { cmd_tx })
    }

    pub fn search(&self, request_id: RequestId, request: SearchRequest) {
        let _ = self.cmd_tx.send(EngineCommand::Search {
            request_id,
            request,
        });
    }

    pub fn download(&self, jobs: Vec<DownloadJob>) {
        if jobs.is_empty() {
            return;
        }
        let _ = self.cmd_tx.send(EngineCommand::Download { jobs });
    }
}

pub async fn run_search(
    api: &dyn PhotoSearchApi,
    request_id: RequestId,
    request: SearchRequest,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    let result = api.search(&request).await;
    let _ = event_tx.send(EngineEvent::SearchCompleted { request_id, result });
}
