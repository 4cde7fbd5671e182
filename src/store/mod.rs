pub use memory::MemoryStore;

mod memory;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::common::StoreError;

/// Documents are schemaless field bags; typed models are decoded at
/// the edges.
pub type Fields = Map<String, Value>;

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    pub fields: Fields,
}

impl Document {
    /// Decodes the field bag into a typed model, injecting the
    /// document id under the `id` key.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, StoreError> {
        let mut fields = self.fields.clone();
        fields.insert("id".to_string(), Value::String(self.id.clone()));
        serde_json::from_value(Value::Object(fields)).map_err(|source| StoreError::Decode {
            id: self.id.clone(),
            source,
        })
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Order {
    Asc,
    Desc,
}

/// A single-field filter, an optional sort and an optional limit:
/// the subset of query shapes the hub actually issues.
#[derive(Debug, Clone, Default)]
pub struct Query {
    pub filter: Option<(String, Value)>,
    pub order_by: Option<(String, Order)>,
    pub limit: Option<usize>,
}

impl Query {
    /// Published documents, newest first. The public pages never see
    /// drafts.
    pub fn published() -> Self {
        Self {
            filter: Some(("published".to_string(), Value::Bool(true))),
            order_by: Some(("created_at".to_string(), Order::Desc)),
            limit: None,
        }
    }

    /// Every document, newest first. Used by the admin tables, where
    /// drafts are visible.
    pub fn recent() -> Self {
        Self {
            filter: None,
            order_by: Some(("created_at".to_string(), Order::Desc)),
            limit: None,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Inserts a new document: the store assigns the id and the
    /// `created_at`/`updated_at` timestamps.
    async fn add(&self, collection: &str, fields: Fields) -> Result<Document, StoreError>;

    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, StoreError>;

    /// Partial merge: provided fields overwrite, everything else is
    /// preserved. `updated_at` is bumped, `created_at` never moves.
    async fn update(&self, collection: &str, id: &str, fields: Fields)
        -> Result<Document, StoreError>;

    async fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError>;

    async fn query(&self, collection: &str, query: &Query) -> Result<Vec<Document>, StoreError>;

    async fn count(&self, collection: &str, query: &Query) -> Result<usize, StoreError> {
        Ok(self.query(collection, query).await?.len())
    }
}
