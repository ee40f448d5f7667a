use std::time::Duration;

use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp};

use crate::domain::shelf::value_objects::ShelfThresholds;

pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct LarderConfig {
    pub llm: LLMConfig,
    pub shelf: ShelfThresholds,
    pub session: SessionConfig,
    pub shopping: ShoppingConfig,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub request_timeout: Duration,
    pub max_retries: u32,
}

#[derive(Clone, Debug)]
pub struct SessionConfig {
    /// Sessions idle for longer than this are dropped when a new one is created.
    pub idle_ttl: Duration,
}

#[derive(Clone, Debug)]
pub struct ShoppingConfig {
    /// Search URL with a `{query}` placeholder.
    pub search_url_template: String,
}

impl Default for ShoppingConfig {
    fn default() -> Self {
        Self {
            search_url_template: "https://www.amazon.com/s?k={query}".to_string(),
        }
    }
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, now.timestamp_subsec_nanos());

    (now, timestamp)
}

#[cfg(test)]
pub(crate) mod test_support;
