use std::panic::AssertUnwindSafe;
use std::sync::{mpsc, Arc};
use std::thread;

use futures_util::FutureExt;
use posts_logging::{posts_error, posts_info, posts_warn};

use crate::fetch::{FetchSettings, PageFetcher, ReqwestPageFetcher};
use crate::{EngineEvent, FailureKind, FetchError, PageIndex};

enum EngineCommand {
    FetchPage { page: PageIndex, page_size: u32 },
}

/// Runs page fetches on a background tokio runtime.
///
/// Results come back as [`EngineEvent`]s through [`EngineHandle::try_recv`].
/// Dropping the handle shuts the worker thread and its runtime down; fetches
/// still in flight are abandoned.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: FetchSettings) -> Result<Self, FetchError> {
        let fetcher = ReqwestPageFetcher::new(settings)?;
        Self::with_fetcher(Arc::new(fetcher))
    }

    pub fn with_fetcher(fetcher: Arc<dyn PageFetcher>) -> Result<Self, FetchError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .map_err(|err| {
                FetchError::new(FailureKind::Network, format!("tokio runtime: {err}"))
            })?;

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let fetcher = fetcher.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(fetcher.as_ref(), command, event_tx).await;
                });
            }
            posts_info!("engine command channel closed; shutting down");
        });

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn fetch_page(&self, page: PageIndex, page_size: u32) {
        if self
            .cmd_tx
            .send(EngineCommand::FetchPage { page, page_size })
            .is_err()
        {
            posts_error!("engine worker is gone; page {} was not requested", page);
        }
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: std::time::Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    fetcher: &dyn PageFetcher,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::FetchPage { page, page_size } => {
            let outcome = AssertUnwindSafe(fetcher.fetch_page(page, page_size))
                .catch_unwind()
                .await
                .unwrap_or_else(|_| {
                    Err(FetchError::new(
                        FailureKind::Internal,
                        "fetch task panicked",
                    ))
                });
            let event = match outcome {
                Ok(fetched) => EngineEvent::PageFetched(fetched),
                Err(error) => {
                    posts_warn!("page {} failed: {}", page, error);
                    EngineEvent::PageFailed { page, error }
                }
            };
            // The receiver is gone once the view is torn down.
            let _ = event_tx.send(event);
        }
    }
}
