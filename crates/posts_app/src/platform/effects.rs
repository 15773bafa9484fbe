use posts_core::{Msg, PageRequest, Post};
use posts_engine::{EngineEvent, EngineHandle, FetchSettings, PostRecord};
use posts_logging::{posts_info, posts_warn};

/// Sends page requests to the engine and turns engine events back into
/// messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: FetchSettings) -> anyhow::Result<Self> {
        posts_info!("Fetching posts from {}", settings.base_url);
        let engine = EngineHandle::new(settings)?;
        Ok(Self { engine })
    }

    pub fn fetch_page(&self, request: PageRequest) {
        posts_info!(
            "FetchPage page={} page_size={}",
            request.page,
            request.page_size
        );
        self.engine.fetch_page(request.page, request.page_size);
    }

    /// Drains finished fetches without blocking.
    pub fn poll(&self) -> Vec<Msg> {
        std::iter::from_fn(|| self.engine.try_recv())
            .map(map_event)
            .collect()
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::PageFetched(fetched) => {
            posts_info!(
                "Page {} arrived with {} posts (total {:?})",
                fetched.page,
                fetched.posts.len(),
                fetched.total_count
            );
            Msg::PageLoaded {
                page: fetched.page,
                posts: fetched.posts.into_iter().map(map_post).collect(),
                total_count: fetched.total_count,
            }
        }
        EngineEvent::PageFailed { page, error } => {
            posts_warn!("Page {} failed: {}", page, error);
            Msg::PageFailed {
                page,
                message: error.to_string(),
            }
        }
    }
}

fn map_post(record: PostRecord) -> Post {
    Post::new(record.id, record.title, record.body)
}
