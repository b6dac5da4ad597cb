//! Seeds a CAN store with random key/data pairs.

use crate::{
    error::AppResult as Result,
    http::{store::StoreClient, words::WordClient},
    protocol::{DataReport, DataRequest},
};

/// Pairs keys with values by position, truncating to the shorter list.
pub fn pair_words(keys: Vec<String>, values: Vec<String>) -> Vec<DataRequest> {
    keys.into_iter()
        .zip(values)
        .map(|(key, data)| DataRequest { key, data })
        .collect()
}

pub async fn run(words: &WordClient, store: &StoreClient, count: usize) -> Result<DataReport> {
    let keys = words.fetch(count).await?;
    let values = words.fetch(count).await?;
    if keys.len() != values.len() {
        tracing::warn!(
            keys = keys.len(),
            values = values.len(),
            "word lists differ in length, truncating"
        );
    }

    let pairs = pair_words(keys, values);
    let total = pairs.len();
    for (i, pair) in pairs.iter().enumerate() {
        store.put(pair).await?;
        tracing::info!(key = %pair.key, data = %pair.data, "stored {}/{total}", i + 1);
    }

    Ok(DataReport {
        requested: count,
        stored: pairs,
    })
}
