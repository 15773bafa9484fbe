//! Posts engine: page fetching and effect execution off the UI thread.
mod decode;
mod engine;
mod fetch;
mod types;

pub use decode::{decode_posts, DecodeError};
pub use engine::EngineHandle;
pub use fetch::{FetchSettings, PageFetcher, ReqwestPageFetcher, TOTAL_COUNT_HEADER};
pub use types::{EngineEvent, FailureKind, FetchError, FetchedPage, PageIndex, PostRecord};
