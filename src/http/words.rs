//! Client for the random word service.

use crate::error::{AppError as Error, AppResult as Result};

pub struct WordClient {
    http: reqwest::Client,
    url: String,
}

impl WordClient {
    pub fn new(http: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            http,
            url: url.into(),
        }
    }

    /// `GET <url>?number=<n>`, decoded as a JSON array of strings.
    pub async fn fetch(&self, number: usize) -> Result<Vec<String>> {
        let words: Vec<String> = self
            .http
            .get(&self.url)
            .query(&[("number", number)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        tracing::debug!(requested = number, received = words.len(), "fetched words");
        Ok(words)
    }

    pub async fn fetch_one(&self) -> Result<String> {
        self.fetch(1)
            .await?
            .into_iter()
            .next()
            .ok_or(Error::EmptyWordList)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::e2e::fake::FakeCan;

    #[tokio::test]
    async fn fetch_passes_number_and_decodes() {
        let fake = FakeCan::start(vec![words(&["a", "b", "c"])]).await;
        let client = WordClient::new(reqwest::Client::new(), fake.word_url());

        let got = client.fetch(3).await.unwrap();

        assert_eq!(got, words(&["a", "b", "c"]));
        assert_eq!(fake.word_requests(), vec![3]);
    }

    #[tokio::test]
    async fn fetch_one_takes_first_word() {
        let fake = FakeCan::start(vec![words(&["first", "second"])]).await;
        let client = WordClient::new(reqwest::Client::new(), fake.word_url());

        assert_eq!(client.fetch_one().await.unwrap(), "first");
        assert_eq!(fake.word_requests(), vec![1]);
    }

    #[tokio::test]
    async fn fetch_one_on_empty_list_fails() {
        let fake = FakeCan::start(vec![vec![]]).await;
        let client = WordClient::new(reqwest::Client::new(), fake.word_url());

        let err = client.fetch_one().await.unwrap_err();
        assert!(matches!(err, Error::EmptyWordList));
    }

    #[tokio::test]
    async fn error_status_is_an_error() {
        let fake = FakeCan::start(vec![]).await;
        // `/data` only answers PUT, so GET yields 405.
        let client = WordClient::new(reqwest::Client::new(), fake.store_url());

        let err = client.fetch(1).await.unwrap_err();
        assert!(matches!(err, Error::Http(_)));
    }

    fn words(w: &[&str]) -> Vec<String> {
        w.iter().map(|s| s.to_string()).collect()
    }
}
