use crate::utils::error::Result;
use async_trait::async_trait;
use url::Url;

/// Something that can fetch the `message` field from a sibling service.
#[async_trait]
pub trait MessageSource: Send + Sync {
    async fn fetch_message(&self, url: &Url) -> Result<String>;
}

#[async_trait]
impl<T: MessageSource + ?Sized> MessageSource for std::sync::Arc<T> {
    async fn fetch_message(&self, url: &Url) -> Result<String> {
        (**self).fetch_message(url).await
    }
}
