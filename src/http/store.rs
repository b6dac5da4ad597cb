//! .

use crate::{error::AppResult as Result, protocol::DataRequest};

pub struct StoreClient {
    http: reqwest::Client,
    url: String,
}

impl StoreClient {
    pub fn new(http: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            http,
            url: url.into(),
        }
    }

    /// `PUT <url>` with `{"key": .., "data": ..}`. Non-2xx answers are errors.
    pub async fn put(&self, req: &DataRequest) -> Result<()> {
        self.http
            .put(&self.url)
            .json(req)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
