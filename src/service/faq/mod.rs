pub mod supabase;

use std::{ops::Deref, sync::Arc};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::base::{
    replies::{MISSING_ANSWER_FALLBACK, NO_MATCH_FALLBACK},
    types::Res,
};

// Traits.

/// Generic FAQ store trait that backends must implement.
///
/// This trait defines the core functionality for finding answers by keyword.
/// Implementing this trait allows different storage backends to be used with
/// the faq-bot.
#[async_trait]
pub trait GenericFaqStore: Send + Sync + 'static {
    /// Find the FAQ rows whose keyword contains `query`.
    ///
    /// Matching is case-insensitive and substring-based, and the returned
    /// rows are in a stable order so that "first match" is deterministic.
    async fn find_answers(&self, query: &str) -> Res<Vec<FaqRow>>;
}

// Structs.

/// One row of the FAQ table.
///
/// Only the answer column is ever selected; rows that lack it entirely still
/// deserialize, with `answer` left unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqRow {
    /// The stored answer text, when the row carries one.
    #[serde(default)]
    pub answer: Option<String>,
}

/// FAQ store for the application.
///
/// It is designed to be trivially cloneable, allowing it to be passed around
/// without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct FaqStore {
    inner: Arc<dyn GenericFaqStore>,
}

impl Deref for FaqStore {
    type Target = dyn GenericFaqStore;

    fn deref(&self) -> &Self::Target {
        &*self.inner
    }
}

impl FaqStore {
    pub fn new(inner: Arc<dyn GenericFaqStore>) -> Self {
        Self { inner }
    }

    /// Resolves a free-text message to a reply string.
    ///
    /// Takes the answer of the first matching row. This never fails: a match
    /// without an answer, a query with no matches, and a lookup error all
    /// resolve to the appropriate canned reply, so the caller always has
    /// something to send.
    pub async fn lookup(&self, query: &str) -> String {
        let rows = match self.find_answers(query).await {
            Ok(rows) => rows,
            Err(err) => {
                warn!("FAQ lookup failed, replying with the fallback: {}", err);
                return NO_MATCH_FALLBACK.to_string();
            }
        };

        match rows.into_iter().next() {
            Some(FaqRow { answer: Some(answer) }) => answer,
            Some(FaqRow { answer: None }) => MISSING_ANSWER_FALLBACK.to_string(),
            None => NO_MATCH_FALLBACK.to_string(),
        }
    }
}
