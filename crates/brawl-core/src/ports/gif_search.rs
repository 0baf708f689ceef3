//! GIF search upstream port trait.

use async_trait::async_trait;

use super::error::UpstreamResult;
use crate::gif::{GifQuery, GifResult};

/// Port trait for the GIF search API.
#[async_trait]
pub trait GifSearchPort: Send + Sync {
    /// Run a trending or search query and project the results.
    ///
    /// An empty vector means the upstream found nothing; it is not an error.
    async fn search(&self, query: &GifQuery) -> UpstreamResult<Vec<GifResult>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    // Verify the trait is object-safe
    fn _assert_object_safe(_: Arc<dyn GifSearchPort>) {}
}
