use std::time::Duration;

use futures_util::StreamExt;
use posts_logging::{posts_debug, posts_warn};

use crate::{decode_posts, FailureKind, FetchError, FetchedPage, PageIndex};

/// Response header carrying the total number of items on the source.
pub const TOTAL_COUNT_HEADER: &str = "x-total-count";

#[derive(Debug, Clone)]
pub struct FetchSettings {
    /// Collection URL; page parameters are appended as a query string.
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            base_url: "https://jsonplaceholder.typicode.com/posts".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_bytes: 1024 * 1024,
        }
    }
}

/// Fetches one page of posts per call. No retries.
#[async_trait::async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch_page(&self, page: PageIndex, page_size: u32)
        -> Result<FetchedPage, FetchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestPageFetcher {
    settings: FetchSettings,
    client: reqwest::Client,
}

impl ReqwestPageFetcher {
    pub fn new(settings: FetchSettings) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }

    /// `<base_url>?_limit=<page_size>&_page=<page>`
    pub fn page_url(&self, page: PageIndex, page_size: u32) -> Result<reqwest::Url, FetchError> {
        let mut url = reqwest::Url::parse(&self.settings.base_url)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
        url.query_pairs_mut()
            .append_pair("_limit", &page_size.to_string())
            .append_pair("_page", &page.to_string());
        Ok(url)
    }

    fn too_large(&self, actual: u64) -> FetchError {
        FetchError::new(
            FailureKind::TooLarge {
                max_bytes: self.settings.max_bytes,
                actual: Some(actual),
            },
            "response too large",
        )
    }
}

#[async_trait::async_trait]
impl PageFetcher for ReqwestPageFetcher {
    async fn fetch_page(
        &self,
        page: PageIndex,
        page_size: u32,
    ) -> Result<FetchedPage, FetchError> {
        let url = self.page_url(page, page_size)?;
        posts_debug!("GET {}", url);

        let response = self.client.get(url).send().await.map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(self.too_large(content_len));
            }
        }

        let total_count = response
            .headers()
            .get(TOTAL_COUNT_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| match value.trim().parse::<u64>() {
                Ok(total) => Some(total),
                Err(_) => {
                    posts_warn!("Ignoring malformed {} header: {:?}", TOTAL_COUNT_HEADER, value);
                    None
                }
            });

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_bytes {
                return Err(self.too_large(next_len));
            }
            bytes.extend_from_slice(&chunk);
        }

        let posts = decode_posts(&bytes)
            .map_err(|err| FetchError::new(FailureKind::Decode, err.to_string()))?;
        posts_debug!(
            "page {} decoded: {} posts, {} bytes, total {:?}",
            page,
            posts.len(),
            bytes.len(),
            total_count
        );

        Ok(FetchedPage {
            page,
            posts,
            total_count,
        })
    }
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
