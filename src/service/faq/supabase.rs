//! FAQ store integration for faq-bot.
//!
//! This module queries the FAQ table hosted on Supabase through its REST
//! interface:
//! - Keyword matching with a case-insensitive `ilike` filter
//! - Normalization of the two response shapes the service produces
//! - Blocking HTTP offloaded to the worker pool so polling never stalls
//!
//! It implements the `GenericFaqStore` trait for Supabase.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::blocking;
use serde_json::Value;
use tokio::task;
use tracing::{info, instrument};

use crate::base::{config::Config, types::Res};

use super::{FaqRow, FaqStore, GenericFaqStore};

// Constants.

/// Table holding the question keywords and answers.
const FAQ_TABLE: &str = "faq";

/// Stable row order, so "first match" always means the lowest row id.
const ROW_ORDER: &str = "id.asc";

// Extra methods on `FaqStore` applied by the supabase implementation.

impl FaqStore {
    /// Creates a new Supabase FAQ store.
    pub async fn supabase(config: &Config) -> Res<Self> {
        let store = SupabaseFaqStore::new(config).await?;
        Ok(Self { inner: Arc::new(store) })
    }
}

// Structs.

/// Supabase FAQ store implementation.
#[derive(Clone)]
struct SupabaseFaqStore {
    pub client: blocking::Client,
    pub endpoint: String,
    pub api_key: String,
}

impl SupabaseFaqStore {
    /// Create a new Supabase FAQ store.
    #[instrument(name = "SupabaseFaqStore::new", skip_all)]
    pub async fn new(config: &Config) -> Res<Self> {
        // The blocking client runs its own I/O thread and refuses to be built
        // on a runtime worker, so construction goes through the pool too.
        let client = task::spawn_blocking(|| blocking::Client::builder().build()).await??;

        // The endpoint embeds the project URL, which stays out of the logs.
        info!("Supabase FAQ store initialized.");

        Ok(Self {
            client,
            endpoint: rest_endpoint(&config.supabase_url),
            api_key: config.supabase_key.clone(),
        })
    }

    /// Runs the keyword query against the table.
    ///
    /// Synchronous; callers are expected to be on the blocking pool. The
    /// pattern is passed as a query parameter, so the client encodes it.
    fn query_rows(&self, pattern: &str) -> Res<Value> {
        let response = self
            .client
            .get(&self.endpoint)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .query(&[("select", "answer"), ("question_keyword", pattern), ("order", ROW_ORDER)])
            .send()?
            .error_for_status()?;

        Ok(response.json()?)
    }
}

#[async_trait]
impl GenericFaqStore for SupabaseFaqStore {
    #[instrument(skip(self))]
    async fn find_answers(&self, query: &str) -> Res<Vec<FaqRow>> {
        let store = self.clone();
        let pattern = ilike_pattern(query);

        // Offload the synchronous query so in-flight lookups never block the
        // update loop; this task suspends until the worker finishes.
        let response = task::spawn_blocking(move || store.query_rows(&pattern)).await??;

        rows_from_response(response).ok_or_else(|| anyhow::anyhow!("Unrecognized response shape from the FAQ query."))
    }
}

// Helpers.

/// REST path for the FAQ table under a project base URL.
fn rest_endpoint(base_url: &str) -> String {
    format!("{}/rest/v1/{}", base_url.trim_end_matches('/'), FAQ_TABLE)
}

/// Case-insensitive "keyword contains query" filter value.
fn ilike_pattern(query: &str) -> String {
    format!("ilike.%{query}%")
}

/// Extracts the row list from either response shape the service is known to
/// produce: a bare JSON array, or an object carrying the array under `data`.
fn rows_from_response(response: Value) -> Option<Vec<FaqRow>> {
    let rows = match response {
        Value::Array(rows) => rows,
        Value::Object(mut fields) => match fields.remove("data") {
            Some(Value::Array(rows)) => rows,
            _ => return None,
        },
        _ => return None,
    };

    rows.into_iter().map(|row| serde_json::from_value(row).ok()).collect()
}

// Tests.

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn endpoint_targets_the_faq_table() {
        assert_eq!(rest_endpoint("https://project.supabase.co"), "https://project.supabase.co/rest/v1/faq");
    }

    #[test]
    fn endpoint_tolerates_a_trailing_slash() {
        assert_eq!(rest_endpoint("https://project.supabase.co/"), "https://project.supabase.co/rest/v1/faq");
    }

    #[test]
    fn pattern_wraps_the_query_in_wildcards() {
        assert_eq!(ilike_pattern("tomato"), "ilike.%tomato%");
        assert_eq!(ilike_pattern(""), "ilike.%%");
    }

    #[test]
    fn rows_parse_from_a_bare_array() {
        let response = json!([{ "answer": "Plant in spring." }, { "answer": "Rotate crops." }]);

        let rows = rows_from_response(response).unwrap();

        assert_eq!(
            rows,
            vec![
                FaqRow { answer: Some("Plant in spring.".to_string()) },
                FaqRow { answer: Some("Rotate crops.".to_string()) }
            ]
        );
    }

    #[test]
    fn rows_parse_from_a_data_envelope() {
        let response = json!({ "data": [{ "answer": "Plant in spring." }] });

        let rows = rows_from_response(response).unwrap();

        assert_eq!(rows, vec![FaqRow { answer: Some("Plant in spring.".to_string()) }]);
    }

    #[test]
    fn a_missing_or_null_answer_is_preserved_as_none() {
        let response = json!([{}, { "answer": null }]);

        let rows = rows_from_response(response).unwrap();

        assert_eq!(rows, vec![FaqRow { answer: None }, FaqRow { answer: None }]);
    }

    #[test]
    fn an_empty_array_yields_no_rows() {
        assert_eq!(rows_from_response(json!([])), Some(vec![]));
        assert_eq!(rows_from_response(json!({ "data": [] })), Some(vec![]));
    }

    #[test]
    fn unrecognized_shapes_are_rejected() {
        assert_eq!(rows_from_response(json!("nope")), None);
        assert_eq!(rows_from_response(json!({ "rows": [] })), None);
        assert_eq!(rows_from_response(json!({ "data": "nope" })), None);
        assert_eq!(rows_from_response(json!([42])), None);
    }
}
