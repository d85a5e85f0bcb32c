//! In-memory gateway used when the mock API is enabled.
//!
//! Seeded from static fixtures. Mutations are kept for the lifetime of the
//! gateway, so a removed record stays gone and an update is visible to the next
//! read.

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use serde_json::Value;
use std::cmp::Ordering;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;
use uuid::Uuid;

use super::{merge_fields, simulate_latency, to_record, ResourceGateway};
use crate::api::{ListParams, ListResponse, Paginated, SortOrder};
use crate::client::Resource;
use crate::error::{MockError, Result};

pub struct FixtureGateway<T> {
    records: Arc<RwLock<Vec<T>>>,
    latency: Duration,
}

impl<T> Clone for FixtureGateway<T> {
    fn clone(&self) -> Self {
        Self {
            records: Arc::clone(&self.records),
            latency: self.latency,
        }
    }
}

impl<T: Resource> FixtureGateway<T> {
    pub fn new(seed: Vec<T>, latency: Duration) -> Self {
        Self {
            records: Arc::new(RwLock::new(seed)),
            latency,
        }
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    /// Current contents, without simulated latency.
    pub fn snapshot(&self) -> Vec<T> {
        self.records.read().clone()
    }

    fn not_found(id: &str) -> MockError {
        MockError::NotFound {
            resource: T::NAME,
            id: id.to_string(),
        }
    }

    fn query(&self, params: &ListParams) -> Result<Vec<T>> {
        let mut rows = self
            .snapshot()
            .into_iter()
            .map(|item| Ok((serde_json::to_value(&item)?, item)))
            .collect::<Result<Vec<(Value, T)>>>()?;

        if let Some(term) = params.search.as_deref().map(str::to_lowercase).filter(|t| !t.is_empty()) {
            rows.retain(|(value, _)| matches_search(value, &term));
        }

        if let Some(field) = params.sort_by.as_deref() {
            rows.sort_by(|(a, _), (b, _)| compare_values(&a[field], &b[field]));
            if params.sort_order == Some(SortOrder::Desc) {
                rows.reverse();
            }
        }

        Ok(rows.into_iter().map(|(_, item)| item).collect())
    }
}

/// Case-insensitive match against the record's top-level text fields.
fn matches_search(value: &Value, term: &str) -> bool {
    value.as_object().is_some_and(|fields| {
        fields
            .values()
            .filter_map(Value::as_str)
            .any(|text| text.to_lowercase().contains(term))
    })
}

fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x
            .as_f64()
            .partial_cmp(&y.as_f64())
            .unwrap_or(Ordering::Equal),
        (Value::String(x), Value::String(y)) => x.cmp(y),
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        // Missing values sort last
        (Value::Null, Value::Null) => Ordering::Equal,
        (Value::Null, _) => Ordering::Greater,
        (_, Value::Null) => Ordering::Less,
        _ => Ordering::Equal,
    }
}

#[async_trait]
impl<T: Resource> ResourceGateway<T> for FixtureGateway<T> {
    async fn list(&self, params: Option<&ListParams>) -> Result<ListResponse<T>> {
        simulate_latency(self.latency).await;
        debug!(resource = T::NAME, "fixture list");

        let Some(params) = params else {
            return Ok(ListResponse::Sequence(self.snapshot()));
        };

        let items = self.query(params)?;
        Ok(match params.limit {
            Some(limit) => ListResponse::Page(Paginated::slice(items, params, limit)),
            None => ListResponse::Sequence(items),
        })
    }

    async fn get_by_id(&self, id: &str) -> Result<T> {
        simulate_latency(self.latency).await;
        debug!(resource = T::NAME, id, "fixture get");

        self.records
            .read()
            .iter()
            .find(|r| r.id() == id)
            .cloned()
            .ok_or_else(|| Self::not_found(id).into())
    }

    async fn create(&self, payload: &T::Create) -> Result<T> {
        simulate_latency(self.latency).await;

        let mut record = to_record(payload)?;
        record.insert("id".to_string(), Value::String(Uuid::new_v4().to_string()));
        T::on_create(&mut record, Utc::now());
        let created: T = serde_json::from_value(Value::Object(record))?;

        debug!(resource = T::NAME, id = created.id(), "fixture create");
        self.records.write().push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: &str, payload: &T::Update) -> Result<T> {
        simulate_latency(self.latency).await;
        debug!(resource = T::NAME, id, "fixture update");

        let mut records = self.records.write();
        let slot = records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| Self::not_found(id))?;

        let mut record = to_record(&*slot)?;
        merge_fields(&mut record, payload)?;
        // The id is not patchable
        record.insert("id".to_string(), Value::String(id.to_string()));
        T::on_update(&mut record, Utc::now());

        let updated: T = serde_json::from_value(Value::Object(record))?;
        *slot = updated.clone();
        Ok(updated)
    }

    async fn remove(&self, id: &str) -> Result<()> {
        simulate_latency(self.latency).await;
        debug!(resource = T::NAME, id, "fixture remove");

        let mut records = self.records.write();
        let index = records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| Self::not_found(id))?;
        records.remove(index);
        Ok(())
    }
}
